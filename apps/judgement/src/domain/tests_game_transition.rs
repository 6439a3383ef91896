use crate::domain::game_transition::{derive_game_transitions, GameTransition};
use crate::domain::state::{GameState, Phase};
use crate::domain::test_state_helpers::{four_player_bidding, make_game_state, MakeGameStateArgs};

#[test]
fn no_transitions_when_state_unchanged() {
    let state = four_player_bidding(5);
    assert!(derive_game_transitions(&state, &state).is_empty());
}

#[test]
fn game_start_reports_players_and_phase() {
    let before = GameState::new();
    let after = make_game_state(
        &["A", "B", "C"],
        MakeGameStateArgs {
            phase: Some(Phase::TrumpSelection),
            ..Default::default()
        },
    );
    let t = derive_game_transitions(&before, &after);
    assert_eq!(
        t,
        vec![
            GameTransition::GameStarted { players: 3 },
            GameTransition::PhaseChanged {
                from: Phase::Setup,
                to: Phase::TrumpSelection,
            },
        ]
    );
}

#[test]
fn entering_bidding_announces_first_bidder() {
    let mut before = four_player_bidding(5);
    before.phase = Phase::TrumpSelection;
    let after = four_player_bidding(5);

    let t = derive_game_transitions(&before, &after);
    assert!(t.contains(&GameTransition::BidderBecame { seat: 1 }));
}

#[test]
fn bidder_change_is_edge_triggered() {
    let before = four_player_bidding(5);
    let mut after = before.clone();
    after.bids[1] = Some(2);
    after.current_bidder_index = 2;
    assert_eq!(
        derive_game_transitions(&before, &after),
        vec![GameTransition::BidderBecame { seat: 2 }]
    );

    // completion clears the pending bidder: nothing to announce
    let mut done = after.clone();
    done.bidding_complete = true;
    assert!(derive_game_transitions(&after, &done).is_empty());
}

#[test]
fn scored_round_reports_history_row() {
    let mut before = four_player_bidding(5);
    before.phase = Phase::Playing;
    let mut after = before.clone();
    after.phase = Phase::RoundEnd;
    after.round_scores.push(vec![11, 0, 0, 10]);
    after.cumulative_scores = vec![11, 0, 0, 10];

    let t = derive_game_transitions(&before, &after);
    assert!(t.contains(&GameTransition::RoundScored {
        round_no: 1,
        scores: vec![11, 0, 0, 10],
    }));
}

#[test]
fn round_advance_and_game_end() {
    let mut before = four_player_bidding(13);
    before.phase = Phase::RoundEnd;

    let mut advanced = before.clone();
    advanced.phase = Phase::TrumpSelection;
    advanced.current_round = 2;
    advanced.cards_this_round = 12;
    advanced.dealer_index = 1;
    assert!(derive_game_transitions(&before, &advanced).contains(
        &GameTransition::RoundAdvanced {
            round_no: 2,
            cards: 12,
            dealer: 1,
        }
    ));

    let mut ended = before.clone();
    ended.phase = Phase::GameEnd;
    ended.cumulative_scores = vec![4, 9, 9, 1];
    assert!(derive_game_transitions(&before, &ended)
        .contains(&GameTransition::GameEnded { winner: Some(1) }));
}

#[test]
fn reset_reported_once() {
    let before = four_player_bidding(5);
    let t = derive_game_transitions(&before, &GameState::new());
    assert_eq!(t[0], GameTransition::GameReset);
    assert_eq!(
        t.iter()
            .filter(|e| matches!(e, GameTransition::GameReset))
            .count(),
        1
    );
}

#[test]
fn transitions_serialize_with_event_tag() {
    let json = serde_json::to_value(GameTransition::BidderBecame { seat: 2 }).unwrap();
    assert_eq!(json, serde_json::json!({"event": "bidder_became", "seat": 2}));
}
