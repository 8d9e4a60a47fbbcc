use serde::{Deserialize, Serialize};

/// Request to overwrite the display settings of a card's tag teams
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase")]
pub struct UpsertTeamsRequest {
    pub access_code: String,
    pub chip_id: String,
    #[serde(default)]
    pub teams: Vec<TeamDto>,
}

/// Display settings for a single tag team
///
/// An `id` of 0 marks a placeholder slot that is ignored by the upsert.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase", default)]
pub struct TeamDto {
    pub id: u32,
    pub name: String,
    pub background_parts_id: u32,
    pub emblem_id: u32,
    pub effect_id: u32,
    pub name_color_id: u32,
    pub bgm_id: u32,
    pub online_tag: bool,
}

/// Request to replace a card's directional custom messages
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase")]
pub struct UpsertCustomMessagesRequest {
    pub access_code: String,
    pub chip_id: String,
    #[serde(default)]
    pub message_setting: MessageSettingDto,
}

/// Message groups for the three battle contexts, `None` leaves a context untouched
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase", default)]
pub struct MessageSettingDto {
    pub start_group: Option<CustomMessageGroupDto>,
    pub in_battle_group: Option<CustomMessageGroupDto>,
    pub result_group: Option<CustomMessageGroupDto>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomMessageGroupDto {
    pub up_message: Option<CustomMessageDto>,
    pub down_message: Option<CustomMessageDto>,
    pub left_message: Option<CustomMessageDto>,
    pub right_message: Option<CustomMessageDto>,
}

/// A message built from a sentence template, an optional phrase and a stamp
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomMessageDto {
    pub message_id: u32,
    pub phrase_id: u32,
    pub stamp_id: u32,
    pub message_position: u32,
}
