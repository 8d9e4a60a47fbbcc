use serde::{Deserialize, Serialize};

/// Marker used by the reference data to flag entries that are not present in game
pub const NOT_EXIST: &str = "NotExist";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MobileSuitDto {
    #[serde(rename = "Id")]
    pub id: u32,
    #[serde(rename = "NameEN", default)]
    pub name_en: String,
    #[serde(rename = "NameJP", default)]
    pub name_jp: String,
    #[serde(rename = "NameCN", default)]
    pub name_cn: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NavigatorDto {
    #[serde(rename = "Id")]
    pub id: u32,
    #[serde(rename = "NameEN", default)]
    pub name_en: String,
    #[serde(rename = "NameJP", default)]
    pub name_jp: String,
    #[serde(rename = "NameCN", default)]
    pub name_cn: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase")]
pub struct IdValuePair {
    pub id: u32,
    #[serde(default)]
    pub value: String,
}

/// Previewable cosmetic (team background, emblem, effect, name colour)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase")]
pub struct GeneralPreview {
    pub id: u32,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub existence: Option<String>,
}

impl GeneralPreview {
    pub fn exists(&self) -> bool {
        self.existence.as_deref() != Some(NOT_EXIST)
    }
}

/// Team customisation categories served by the catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum TeamPartCategory {
    Backgrounds,
    Effects,
    Emblems,
    NameColors,
}

impl TeamPartCategory {
    pub const ALL: [TeamPartCategory; 4] = [
        TeamPartCategory::Backgrounds,
        TeamPartCategory::Effects,
        TeamPartCategory::Emblems,
        TeamPartCategory::NameColors,
    ];

    /// Path segment used by the catalog routes
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Backgrounds => "backgrounds",
            Self::Effects => "effects",
            Self::Emblems => "emblems",
            Self::NameColors => "name-colors",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Backgrounds => "Backgrounds",
            Self::Effects => "Effects",
            Self::Emblems => "Emblems",
            Self::NameColors => "Name Colors",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_without_existence_is_shown() {
        let preview: GeneralPreview = serde_json::from_str(r#"{"Id":3,"Value":"Red"}"#).unwrap();

        assert!(preview.exists());
    }

    #[test]
    fn preview_marked_not_exist_is_hidden() {
        let preview: GeneralPreview =
            serde_json::from_str(r#"{"Id":3,"Value":"Red","Existence":"NotExist"}"#).unwrap();

        assert!(!preview.exists());
    }

    #[test]
    fn mobile_suit_reads_localised_names() {
        let ms: MobileSuitDto =
            serde_json::from_str(r#"{"Id":42,"NameEN":"Strike","NameJP":"ストライク"}"#).unwrap();

        assert_eq!(ms.id, 42);
        assert_eq!(ms.name_en, "Strike");
        assert!(ms.name_cn.is_empty());
    }
}
