//! Whole-season runs through the public transitions.

use super::*;
use crate::config::EngineConfig;
use crate::models::{Division, Phase, SeasonBonus};
use crate::rng::seeded_rng;
use rand_chacha::ChaCha8Rng;

fn regular_season(team: &str, seed: u64) -> (GameState, EngineConfig, ChaCha8Rng) {
    let cfg = EngineConfig::default();
    let mut rng = seeded_rng(seed);
    let state = initialize_game(team, &cfg.finance, &mut rng).unwrap();
    (start_regular_season(&state), cfg, rng)
}

fn play_weeks(
    mut state: GameState,
    co_viewer: Option<&str>,
    weeks: u32,
    cfg: &EngineConfig,
    rng: &mut ChaCha8Rng,
) -> GameState {
    for _ in 0..weeks {
        state = simulate_week(&state, co_viewer, cfg, rng);
        assert_eq!(state.check_invariants(), Ok(()));
    }
    state
}

fn assert_upper_season_ends_in_playoffs(team: &str, seed: u64) {
    let (state, cfg, mut rng) = regular_season(team, seed);
    let state = play_weeks(state, None, 14, &cfg, &mut rng);

    assert_eq!(state.phase, Phase::Playoffs);
    assert_eq!(state.week, 14);
    assert_eq!(state.schedule.len(), 14 * 4);
    assert_eq!(state.playoff_bracket.len(), 2);

    let table = crate::engine::standings::sorted(state.division_standings(Division::Upper));
    let bracket = &state.playoff_bracket;
    assert_eq!(bracket[0].team1_id, table[0].team_id);
    assert_eq!(bracket[0].team2_id, table[3].team_id);
    assert_eq!(bracket[1].team1_id, table[1].team_id);
    assert_eq!(bracket[1].team2_id, table[2].team_id);
    for entry in state.division_standings(Division::Upper) {
        assert_eq!(entry.wins + entry.losses, 14);
    }
}

#[test]
fn test_upper_season_ends_in_playoffs() {
    assert_upper_season_ends_in_playoffs("kaunas_kings", 11);
}

#[test]
fn test_mid_prestige_upper_club_reaches_playoff_phase() {
    let (state, _, _) = regular_season("klaipeda_sailors", 16);
    let team = state.selected_team().unwrap();
    assert_eq!(team.prestige, 3);
    assert_eq!(team.players.len(), 10);
    assert_eq!(team.starter_count(), 5);

    assert_upper_season_ends_in_playoffs("klaipeda_sailors", 16);
    assert_upper_season_ends_in_playoffs("siauliai_suns", 17);
}

#[test]
fn test_lower_season_skips_playoffs() {
    let (state, cfg, mut rng) = regular_season("visaginas_atoms", 12);
    let state = play_weeks(state, None, 14, &cfg, &mut rng);

    assert_eq!(state.phase, Phase::Offseason);
    assert!(state.playoff_bracket.is_empty());
    // prize money for the final rank landed in week 14
    assert!(state.finances.prize_income > 0);
}

#[test]
fn test_lower_viewer_with_upper_peer_gets_playoffs() {
    let (state, cfg, mut rng) = regular_season("visaginas_atoms", 13);
    let state = play_weeks(state, Some("kaunas_kings"), 14, &cfg, &mut rng);
    assert_eq!(state.phase, Phase::Playoffs);
    assert_eq!(state.playoff_bracket.len(), 2);
}

#[test]
fn test_week_after_season_end_is_noop() {
    let (state, cfg, mut rng) = regular_season("visaginas_atoms", 14);
    let state = play_weeks(state, None, 14, &cfg, &mut rng);
    let again = simulate_week(&state, None, &cfg, &mut rng);
    assert_eq!(again, state);
}

#[test]
fn test_full_playoffs_reach_offseason() {
    let (state, cfg, mut rng) = regular_season("vilnius_wolves", 15);
    let state = play_weeks(state, None, 14, &cfg, &mut rng);
    let done = simulate_all_playoffs(&state, &cfg.matches, &cfg.playoffs, &mut rng);

    assert_eq!(done.phase, Phase::Offseason);
    assert_eq!(done.playoff_bracket.len(), 3);
    assert!(done.playoff_bracket.iter().all(|m| m.winner_id.is_some()));
    assert!(champion(&done).is_some());
    assert_eq!(done.check_invariants(), Ok(()));
}

#[test]
fn test_same_seed_same_season() {
    let run = |seed| {
        let (state, cfg, mut rng) = regular_season("siauliai_suns", seed);
        let state = play_weeks(state, None, 14, &cfg, &mut rng);
        simulate_all_playoffs(&state, &cfg.matches, &cfg.playoffs, &mut rng)
    };
    assert_eq!(run(99), run(99));
    assert_ne!(run(99).standings, run(100).standings);
}

#[test]
fn test_peer_week_settles_like_single_viewer() {
    let cfg = EngineConfig::default();

    let mut rng_a = seeded_rng(21);
    let host = initialize_game("kaunas_kings", &cfg.finance, &mut rng_a).unwrap();
    let host = start_regular_season(&host);

    let mut rng_b = seeded_rng(21);
    let solo = initialize_game("visaginas_atoms", &cfg.finance, &mut rng_b).unwrap();
    let solo = start_regular_season(&solo);
    let co_finances = solo.finances.clone();

    let (peer_next, co_settled) =
        simulate_peer_week(&host, "visaginas_atoms", &co_finances, None, &cfg, &mut rng_a);
    let solo_next = simulate_week(&solo, None, &cfg, &mut rng_b);

    assert_eq!(peer_next.standings, solo_next.standings);
    assert_eq!(co_settled, solo_next.finances);
    assert_eq!(
        peer_next.finances,
        settle_viewpoint_week(&peer_next, "kaunas_kings", &host.finances, false, &cfg.finance)
    );
}

#[test]
fn test_peer_week_ticket_bonus() {
    let cfg = EngineConfig::default();
    let mut rng = seeded_rng(22);
    let state = start_regular_season(&initialize_game("kaunas_kings", &cfg.finance, &mut rng).unwrap());
    let co = state.finances.clone();

    let (_, plain) =
        simulate_peer_week(&state, "vilnius_wolves", &co, None, &cfg, &mut seeded_rng(5));
    let (_, boosted) = simulate_peer_week(
        &state,
        "vilnius_wolves",
        &co,
        Some(SeasonBonus::Ticket10),
        &cfg,
        &mut seeded_rng(5),
    );
    assert!(boosted.ticket_income >= plain.ticket_income);
}

#[test]
fn test_game_over_freezes_everything() {
    let (mut state, cfg, mut rng) = regular_season("kaunas_kings", 31);
    state.game_over = true;
    state.game_over_reason = Some(GameOverReason::SevereDebt);

    assert_eq!(simulate_week(&state, None, &cfg, &mut rng), state);
    let (peer, _) = simulate_peer_week(&state, "vilnius_wolves", &state.finances, None, &cfg, &mut rng);
    assert_eq!(peer, state);

    state.phase = Phase::Offseason;
    assert_eq!(start_new_season(&state, &cfg, &mut rng), state);
    assert_eq!(process_offseason(&state, &cfg.offseason, &cfg.finance, &mut rng), state);
}

#[test]
fn test_several_seasons() {
    let cfg = EngineConfig::default();
    let mut rng = seeded_rng(77);
    let mut state = initialize_game("alytus_oaks", &cfg.finance, &mut rng).unwrap();

    for _ in 0..3 {
        if state.game_over {
            break;
        }
        let season = state.season;
        let bonus = roll_season_bonus_choices(&mut rng)[0];
        state = choose_season_bonus(&state, bonus, &cfg.finance).into_state();
        state = start_regular_season(&state);
        while state.phase == Phase::Regular {
            state = simulate_week(&state, None, &cfg, &mut rng);
            assert_eq!(state.check_invariants(), Ok(()));
        }
        state = simulate_all_playoffs(&state, &cfg.matches, &cfg.playoffs, &mut rng);
        assert_eq!(state.phase, Phase::Offseason);

        state = start_new_season(&state, &cfg, &mut rng);
        assert_eq!(state.check_invariants(), Ok(()));
        if !state.game_over {
            assert_eq!(state.season, season + 1);
            assert_eq!(state.phase, Phase::Preseason);
            assert_eq!(state.week, 0);
            assert!(state.schedule.is_empty());
            assert_eq!(state.division_team_ids(Division::Upper).len(), 8);
            assert_eq!(state.division_team_ids(Division::Lower).len(), 8);
        }
    }
}
