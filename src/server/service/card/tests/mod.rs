use exvs_card_test_utils::prelude::*;
use sea_orm::ConnectionTrait;
use serde_json::json;

use crate::{
    model::card::{
        CustomMessageDto, CustomMessageGroupDto, MessageSettingDto, TeamDto,
        UpsertCustomMessagesRequest, UpsertTeamsRequest,
    },
    server::{
        error::{profile::ProfileError, Error},
        service::card::{message::MessageService, team::TeamService},
    },
};

mod upsert_custom_messages;
