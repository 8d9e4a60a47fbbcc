use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Pre-load user document: currency, navigators and favourite suit slots
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct User {
    pub gp: u32,
    pub guest_navs: Vec<GuestNavGroup>,
    pub favorite_mobile_suits: Vec<FavoriteMsGroup>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GuestNavGroup {
    pub guest_nav_id: u32,
    pub guest_nav_familiarity: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A favourite mobile suit slot, `mst_mobile_suit_id` of 0 marks an unused slot
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FavoriteMsGroup {
    pub mst_mobile_suit_id: u32,
    pub ms_used_num: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
