use exvs_card_test_utils::prelude::*;
use serde_json::Value;

use crate::{
    model::game::{
        BattlePlayerGroup, ErrorCode, GameRequest, RankMatchInfo, RequestType, SaveVscResult,
        SaveVsmResult, VscPlayResultGroup, VsmPlayResultGroup,
    },
    server::{
        error::{profile::ProfileError, Error},
        model::document::{LoadPlayer, PilotDataGroup, User},
        service::game::{dispatch::GameDispatcher, vsc::VscResultService, vsm::VsmResultService},
    },
};

mod save_vsc_result;

/// Decoded documents of a card as currently stored
async fn stored_documents(
    test: &mut TestContext,
    card_id: i32,
) -> Result<(LoadPlayer, PilotDataGroup, User), TestError> {
    let pilot_domain = test.card().get_pilot_domain(card_id).await?;
    let user_domain = test.card().get_user_domain(card_id).await?;

    Ok((
        serde_json::from_str(&pilot_domain.load_player_json)?,
        serde_json::from_str(&pilot_domain.pilot_data_group_json)?,
        serde_json::from_str(&user_domain.user_json)?,
    ))
}
