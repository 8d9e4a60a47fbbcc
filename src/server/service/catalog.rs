//! Static reference catalog.
//!
//! Reference tables (mobile suits, navigators, music, message templates and team
//! cosmetics) are read from JSON files once at startup and shared read-only through
//! [`AppState`](crate::server::model::app::AppState).

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

use crate::{
    model::catalog::{GeneralPreview, IdValuePair, MobileSuitDto, NavigatorDto, TeamPartCategory},
    server::error::catalog::CatalogError,
};

/// An entry of a reference table, keyed by its id
pub trait CatalogEntry: Clone {
    fn id(&self) -> u32;
}

impl CatalogEntry for MobileSuitDto {
    fn id(&self) -> u32 {
        self.id
    }
}

impl CatalogEntry for NavigatorDto {
    fn id(&self) -> u32 {
        self.id
    }
}

impl CatalogEntry for IdValuePair {
    fn id(&self) -> u32 {
        self.id
    }
}

impl CatalogEntry for GeneralPreview {
    fn id(&self) -> u32 {
        self.id
    }
}

/// A reference table indexed by id and pre-sorted by id
#[derive(Clone, Debug)]
pub struct CatalogTable<T> {
    by_id: HashMap<u32, T>,
    sorted: Vec<T>,
}

impl<T> Default for CatalogTable<T> {
    fn default() -> Self {
        Self {
            by_id: HashMap::new(),
            sorted: Vec::new(),
        }
    }
}

impl<T: CatalogEntry> CatalogTable<T> {
    pub fn new(mut entries: Vec<T>) -> Self {
        entries.sort_by_key(|entry| entry.id());

        let by_id = entries
            .iter()
            .map(|entry| (entry.id(), entry.clone()))
            .collect();

        Self {
            by_id,
            sorted: entries,
        }
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.by_id.get(&id)
    }

    pub fn sorted(&self) -> &[T] {
        &self.sorted
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}

impl CatalogTable<GeneralPreview> {
    /// Builds a preview table, leaving out entries flagged as not present in game
    pub fn previews(entries: Vec<GeneralPreview>) -> Self {
        Self::new(entries.into_iter().filter(|entry| entry.exists()).collect())
    }
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub mobile_suits: CatalogTable<MobileSuitDto>,
    pub navigators: CatalogTable<NavigatorDto>,
    pub bgm: CatalogTable<IdValuePair>,
    pub comment_sentences: CatalogTable<IdValuePair>,
    pub comment_phrases: CatalogTable<IdValuePair>,
    pub team_parts: HashMap<TeamPartCategory, CatalogTable<GeneralPreview>>,
}

impl Catalog {
    /// Load every reference table from the catalog directory
    ///
    /// # Arguments
    /// - `root` (`&Path`): Directory holding the reference JSON files
    ///
    /// # Returns
    /// - `Ok(Catalog)`: All tables were read and parsed
    /// - `Err(CatalogError)`: A file is missing, unreadable or malformed
    pub fn load(root: &Path) -> Result<Self, CatalogError> {
        let mut team_parts = HashMap::new();
        for category in TeamPartCategory::ALL {
            let entries = read_table(&root.join(team_part_file(category)))?;
            team_parts.insert(category, CatalogTable::previews(entries));
        }

        Ok(Self {
            mobile_suits: CatalogTable::new(read_table(&root.join("MobileSuits.json"))?),
            navigators: CatalogTable::new(read_table(&root.join("Navigators.json"))?),
            bgm: CatalogTable::new(read_table(&root.join("Bgms.json"))?),
            comment_sentences: CatalogTable::new(read_table(&root.join("CustomizeComment.json"))?),
            comment_phrases: CatalogTable::new(read_table(
                &root.join("CustomizeCommentPhrase.json"),
            )?),
            team_parts,
        })
    }

    /// Sorted entries of a team cosmetic category, empty if the category was not loaded
    pub fn team_part(&self, category: TeamPartCategory) -> &[GeneralPreview] {
        self.team_parts
            .get(&category)
            .map(|table| table.sorted())
            .unwrap_or_default()
    }
}

fn team_part_file(category: TeamPartCategory) -> PathBuf {
    let file = match category {
        TeamPartCategory::Backgrounds => "Backgrounds.json",
        TeamPartCategory::Effects => "Effects.json",
        TeamPartCategory::Emblems => "Emblems.json",
        TeamPartCategory::NameColors => "NameFontColors.json",
    };

    Path::new("team").join(file)
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use serde_json::json;

    use super::*;

    fn write_catalog(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("exvs-card-catalog-{}-{name}", std::process::id()));
        fs::create_dir_all(root.join("team")).unwrap();

        let files = [
            (
                "MobileSuits.json",
                json!([
                    { "Id": 1002, "NameEN": "Justice" },
                    { "Id": 1001, "NameEN": "Strike", "NameJP": "ストライク" }
                ]),
            ),
            ("Navigators.json", json!([{ "Id": 1, "NameEN": "Navi" }])),
            ("Bgms.json", json!([{ "Id": 2, "Value": "Theme B" }, { "Id": 1, "Value": "Theme A" }])),
            ("CustomizeComment.json", json!([{ "Id": 1, "Value": "Nice!" }])),
            ("CustomizeCommentPhrase.json", json!([{ "Id": 1, "Value": "Thanks" }])),
            (
                "team/Backgrounds.json",
                json!([
                    { "Id": 3, "Value": "Sky" },
                    { "Id": 1, "Value": "Hidden", "Existence": "NotExist" },
                    { "Id": 2, "Value": "Sea" }
                ]),
            ),
            ("team/Effects.json", json!([])),
            ("team/Emblems.json", json!([{ "Id": 1, "Value": "Star" }])),
            ("team/NameFontColors.json", json!([{ "Id": 1, "Value": "Red" }])),
        ];

        for (file, contents) in files {
            fs::write(root.join(file), contents.to_string()).unwrap();
        }

        root
    }

    /// Expect tables sorted by id with lookups by id
    #[test]
    fn loads_sorted_tables() {
        let root = write_catalog("sorted");

        let catalog = Catalog::load(&root).unwrap();

        let ids: Vec<u32> = catalog.mobile_suits.sorted().iter().map(|ms| ms.id).collect();
        assert_eq!(ids, vec![1001, 1002]);
        assert_eq!(catalog.mobile_suits.get(1001).map(|ms| ms.name_en.as_str()), Some("Strike"));
        assert_eq!(catalog.bgm.sorted()[0].value, "Theme A");
        assert_eq!(catalog.navigators.len(), 1);

        fs::remove_dir_all(root).unwrap();
    }

    /// Expect entries flagged NotExist to be dropped from preview tables
    #[test]
    fn previews_exclude_not_exist() {
        let root = write_catalog("previews");

        let catalog = Catalog::load(&root).unwrap();

        let ids: Vec<u32> = catalog
            .team_part(TeamPartCategory::Backgrounds)
            .iter()
            .map(|preview| preview.id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(catalog.team_parts[&TeamPartCategory::Backgrounds].get(1).is_none());
        assert!(catalog.team_part(TeamPartCategory::Effects).is_empty());

        fs::remove_dir_all(root).unwrap();
    }

    /// Expect a read error naming the missing file
    #[test]
    fn missing_file_fails() {
        let root = write_catalog("missing");
        fs::remove_file(root.join("Navigators.json")).unwrap();

        let result = Catalog::load(&root);

        assert!(
            matches!(&result, Err(CatalogError::Read { path, .. }) if path.ends_with("Navigators.json"))
        );

        fs::remove_dir_all(root).unwrap();
    }

    /// Expect a parse error for malformed JSON
    #[test]
    fn malformed_file_fails() {
        let root = write_catalog("malformed");
        fs::write(root.join("Bgms.json"), "{ not json").unwrap();

        let result = Catalog::load(&root);

        assert!(matches!(result, Err(CatalogError::Parse { .. })));

        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn default_catalog_is_empty() {
        let catalog = Catalog::default();

        assert!(catalog.mobile_suits.is_empty());
        assert!(catalog.team_part(TeamPartCategory::Emblems).is_empty());
    }
}
