use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Load-card mobile user document holding the directional custom messages
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MobileUserGroup {
    pub opening_messages: Vec<CommandMessageGroup>,
    pub playing_messages: Vec<CommandMessageGroup>,
    pub result_messages: Vec<CommandMessageGroup>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A custom message bound to a stick direction (`command`)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CommandMessageGroup {
    pub command: u32,
    pub message_id: u32,
    pub phrase_id: u32,
    pub stamp_id: u32,
    pub message_position: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
