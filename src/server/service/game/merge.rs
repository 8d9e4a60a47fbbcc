//! Document mutations shared by the battle-result merges.
//!
//! Functions here are pure: they take decoded documents and result fields and never
//! touch the store. Lookups are linear scans, the lists involved hold at most a few
//! hundred entries.

use crate::{
    model::game::{BattlePlayerGroup, RankMatchInfo, VscPlayResultGroup},
    server::model::{
        battle::{BattleResultContext, ParticipantSnapshot, PlayerIndicator},
        document::{
            CpuSceneData, LoadPlayer, MsSkillGroup, PilotDataGroup, PilotRankMatch,
            PilotRankMatchInfo, User,
        },
    },
};

/// Set the echelon and S-echelon flag from the result and accumulate echelon exp
pub fn apply_echelon(load_player: &mut LoadPlayer, context: &BattleResultContext) {
    load_player.echelon_id = context.echelon_id;
    load_player.echelon_exp = load_player.echelon_exp.saturating_add(context.echelon_exp);
    load_player.s_echelon_flag = context.s_echelon_flag;
}

/// Raise familiarity by one for the UI and battle navigators, unknown ids are ignored
pub fn bump_navigator_familiarity(user: &mut User, guest_nav_id: u32, battle_nav_id: u32) {
    for nav_id in [guest_nav_id, battle_nav_id] {
        if let Some(nav) = user
            .guest_navs
            .iter_mut()
            .find(|nav| nav.guest_nav_id == nav_id)
        {
            nav.guest_nav_familiarity = nav.guest_nav_familiarity.saturating_add(1);
        }
    }
}

/// Count one use of a mobile suit and mirror the count onto matching favourite slots
pub fn record_suit_usage(pilot_data: &mut PilotDataGroup, user: &mut User, ms_id: u32) {
    let used_num = match pilot_data
        .ms_skills
        .iter_mut()
        .find(|skill| skill.mst_mobile_suit_id == ms_id)
    {
        Some(skill) => {
            skill.ms_used_num = skill.ms_used_num.saturating_add(1);
            skill.ms_used_num
        }
        None => {
            pilot_data.ms_skills.push(MsSkillGroup {
                mst_mobile_suit_id: ms_id,
                ms_used_num: 1,
                ..Default::default()
            });
            1
        }
    };

    user.favorite_mobile_suits
        .iter_mut()
        .filter(|favorite| favorite.mst_mobile_suit_id == ms_id)
        .for_each(|favorite| favorite.ms_used_num = used_num);
}

/// Award a triad buddy point to the suit of a CPU partner the player set up
pub fn record_triad_buddy(pilot_data: &mut PilotDataGroup, partner: &BattlePlayerGroup) {
    if partner.cpu_flag != 1 || !partner.mobile_set_flag {
        return;
    }

    match pilot_data
        .ms_skills
        .iter_mut()
        .find(|skill| skill.mst_mobile_suit_id == partner.mst_mobile_suit_id)
    {
        Some(skill) => skill.triad_buddy_point = skill.triad_buddy_point.saturating_add(1),
        None => pilot_data.ms_skills.push(MsSkillGroup {
            mst_mobile_suit_id: partner.mst_mobile_suit_id,
            triad_buddy_point: 1,
            ..Default::default()
        }),
    }
}

/// Record a triad course play, ribbons and newly released courses
///
/// `now` is the unix timestamp stamped on newly created course records.
pub fn record_triad_scene(pilot_data: &mut PilotDataGroup, result: &VscPlayResultGroup, now: u64) {
    pilot_data.total_triad_scene_play_num = pilot_data.total_triad_scene_play_num.saturating_add(1);
    pilot_data.total_triad_score = pilot_data.total_triad_score.saturating_add(result.scene_score);

    let cleared = result.course_clear_flag.unwrap_or(false);

    match pilot_data
        .cpu_scenes
        .iter_mut()
        .find(|scene| scene.course_id == result.course_id)
    {
        Some(scene) => {
            let course_score = result.course_score.unwrap_or(0);
            if course_score >= scene.highscore {
                scene.highscore = course_score;
            }

            if cleared {
                scene.total_play_num = scene.total_play_num.saturating_add(1);
                scene.total_clear_num = scene.total_clear_num.saturating_add(1);
            }
        }
        None => pilot_data.cpu_scenes.push(CpuSceneData {
            course_id: result.course_id,
            released_at: now,
            total_play_num: cleared as u32,
            total_clear_num: cleared as u32,
            highscore: result.scene_score,
            ..Default::default()
        }),
    }

    if let Some(released_ribbons) = &result.released_ribbon_ids {
        pilot_data.cpu_ribbons = Some(match pilot_data.cpu_ribbons.take() {
            Some(ribbons) => union_preserving_order(ribbons, released_ribbons),
            None => released_ribbons.clone(),
        });
    }

    release_courses(pilot_data, result, now);
}

// Existence is checked against the played course, not the released one, so once the
// played course has a record no released course is ever added.
fn release_courses(pilot_data: &mut PilotDataGroup, result: &VscPlayResultGroup, now: u64) {
    let Some(released_courses) = &result.released_course_ids else {
        return;
    };

    for &course_id in released_courses {
        let played_exists = pilot_data
            .cpu_scenes
            .iter()
            .any(|scene| scene.course_id == result.course_id);

        if !played_exists {
            pilot_data.cpu_scenes.push(CpuSceneData {
                course_id,
                released_at: now,
                ..Default::default()
            });
        }
    }
}

fn union_preserving_order(mut current: Vec<u32>, released: &[u32]) -> Vec<u32> {
    let mut merged = Vec::with_capacity(current.len() + released.len());
    for id in current.drain(..).chain(released.iter().copied()) {
        if !merged.contains(&id) {
            merged.push(id);
        }
    }
    merged
}

/// Copy the solo and team rank ids reported after a rank match
pub fn record_rank_match(
    load_player: &mut LoadPlayer,
    pilot_data: &mut PilotDataGroup,
    rank_match_info: Option<&RankMatchInfo>,
) {
    let Some(info) = rank_match_info else {
        return;
    };

    load_player.rank_id_solo = info.rank_id_solo;
    load_player.rank_id_team = info.rank_id_team;

    let rank_match = pilot_data
        .pilot_rank_match
        .get_or_insert_with(PilotRankMatch::default);

    set_rank_id(&mut rank_match.pilot_rank_match_solo, info.rank_id_solo);
    set_rank_id(&mut rank_match.pilot_rank_match_team, info.rank_id_team);
}

fn set_rank_id(slot: &mut Option<PilotRankMatchInfo>, rank_id: u32) {
    match slot {
        Some(info) => info.rank_id = rank_id,
        None => *slot = Some(PilotRankMatchInfo::with_rank_id(rank_id)),
    }
}

/// Count a win or a loss, split between shuffle and team battles
pub fn record_win_loss(load_player: &mut LoadPlayer, win: bool, shuffle: bool) {
    let (total, by_mode) = match (win, shuffle) {
        (true, true) => (&mut load_player.total_win, &mut load_player.shuffle_win),
        (true, false) => (&mut load_player.total_win, &mut load_player.team_win),
        (false, true) => (&mut load_player.total_lose, &mut load_player.shuffle_lose),
        (false, false) => (&mut load_player.total_lose, &mut load_player.team_lose),
    };

    *total = total.saturating_add(1);
    *by_mode = by_mode.saturating_add(1);
}

/// Snapshot a partner or foe slot for the battle audit row
pub fn participant_snapshot(player: Option<&BattlePlayerGroup>) -> ParticipantSnapshot {
    match player {
        None => ParticipantSnapshot::anonymous(PlayerIndicator::Discarded),
        Some(player) if player.cpu_flag == 0 => ParticipantSnapshot {
            indicator: PlayerIndicator::Player,
            pilot_id: Some(player.pilot_id as i64),
            ms_id: Some(player.mst_mobile_suit_id as i64),
            echelon_id: Some(player.echelon_id as i64),
            burst_type: Some(player.burst_type as i64),
        },
        Some(_) => ParticipantSnapshot::anonymous(PlayerIndicator::Cpu),
    }
}

/// Snapshot the first two foes, absent slots are discarded
pub fn foe_snapshots(foes: Option<&[BattlePlayerGroup]>) -> (ParticipantSnapshot, ParticipantSnapshot) {
    let foes = foes.unwrap_or_default();

    (
        participant_snapshot(foes.first()),
        participant_snapshot(foes.get(1)),
    )
}
