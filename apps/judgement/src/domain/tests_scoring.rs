use crate::domain::scoring::{
    apply_round_scoring, column_totals, round_score, verify_score_ledger,
};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::four_player_playing;

#[test]
fn exact_bid_scores_ten_plus_bid() {
    assert_eq!(round_score(0, 0), 10);
    assert_eq!(round_score(3, 3), 13);
    assert_eq!(round_score(13, 13), 23);
    assert_eq!(round_score(3, 2), 0);
    assert_eq!(round_score(0, 1), 0);
}

#[test]
fn scoring_only_exact_matches_score() {
    // bids [3,2,1,6], hands won [3,2,0,8] -> [13,12,0,0]
    let mut state = four_player_playing(13, [3, 2, 1, 6]);
    state.hands_won = vec![Some(3), Some(2), Some(0), Some(8)];

    let result = apply_round_scoring(&mut state).unwrap();
    assert_eq!(result.round_no, 1);
    assert_eq!(result.scores, vec![13, 12, 0, 0]);
    assert_eq!(state.round_scores, vec![vec![13, 12, 0, 0]]);
    assert_eq!(state.cumulative_scores, vec![13, 12, 0, 0]);
    assert_eq!(state.phase, Phase::RoundEnd);

    let totals: Vec<u16> = state.players.iter().map(|p| p.total_score).collect();
    assert_eq!(totals, state.cumulative_scores);
}

#[test]
fn scoring_accumulates_across_rounds() {
    let mut state = four_player_playing(13, [3, 2, 1, 6]);
    state.hands_won = vec![Some(3), Some(2), Some(0), Some(8)];
    apply_round_scoring(&mut state).unwrap();

    state.current_round = 2;
    state.cards_this_round = 12;
    state.bids = vec![Some(0), Some(2), Some(5), Some(4)];
    state.hands_won = vec![Some(0), Some(1), Some(5), Some(6)];
    state.phase = Phase::Playing;
    apply_round_scoring(&mut state).unwrap();

    assert_eq!(state.round_scores.len(), 2);
    assert_eq!(state.round_scores[1], vec![10, 0, 15, 0]);
    assert_eq!(state.cumulative_scores, vec![23, 12, 15, 0]);
    verify_score_ledger(&state).unwrap();
}

#[test]
fn scoring_waits_for_every_entry() {
    let mut state = four_player_playing(5, [1, 1, 1, 1]);
    state.hands_won = vec![Some(1), None, Some(1), Some(1)];
    assert!(apply_round_scoring(&mut state).is_none());
    assert_eq!(state.phase, Phase::Playing);
    assert!(state.round_scores.is_empty());
}

#[test]
fn scoring_never_runs_twice() {
    let mut state = four_player_playing(5, [1, 1, 1, 1]);
    state.hands_won = vec![Some(1); 4];
    apply_round_scoring(&mut state).unwrap();
    assert!(apply_round_scoring(&mut state).is_none());
    assert_eq!(state.round_scores.len(), 1);
    assert_eq!(state.cumulative_scores, vec![11; 4]);
}

#[test]
fn ledger_detects_drifted_totals() {
    let mut state = four_player_playing(5, [1, 1, 1, 1]);
    state.hands_won = vec![Some(1); 4];
    apply_round_scoring(&mut state).unwrap();
    verify_score_ledger(&state).unwrap();

    state.cumulative_scores[2] += 1;
    assert!(verify_score_ledger(&state).is_err());

    state.cumulative_scores[2] -= 1;
    state.round_scores[0].pop();
    assert!(verify_score_ledger(&state).is_err());
}

#[test]
fn scoring_saturates_instead_of_overflowing() {
    let mut state = four_player_playing(5, [1, 1, 1, 1]);
    state.hands_won = vec![Some(1); 4];
    state.cumulative_scores = vec![u16::MAX - 3, 0, 0, 0];
    state.players[0].total_score = u16::MAX - 3;

    apply_round_scoring(&mut state).unwrap();
    assert_eq!(state.cumulative_scores, vec![u16::MAX, 11, 11, 11]);
    assert_eq!(state.players[0].total_score, u16::MAX);
}

#[test]
fn column_totals_reject_ragged_or_overflowing_history() {
    assert_eq!(column_totals(&[vec![3, 4], vec![10, 0]], 2), Some(vec![13, 4]));
    assert_eq!(column_totals(&[], 3), Some(vec![0, 0, 0]));
    assert_eq!(column_totals(&[vec![3, 4, 5]], 2), None);
    assert_eq!(column_totals(&[vec![u16::MAX, 0], vec![1, 0]], 2), None);
}

#[test]
fn ledger_check_reports_overflowing_history() {
    let mut state = four_player_playing(5, [1, 1, 1, 1]);
    state.round_scores = vec![vec![u16::MAX, 0, 0, 0], vec![1, 0, 0, 0]];
    state.cumulative_scores = vec![0; 4];
    let err = verify_score_ledger(&state).unwrap_err();
    assert!(err.to_string().contains("overflow"));
}
