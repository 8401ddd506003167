//! End-to-end flows driven the way a presentation layer would.

use super::test_utils::*;
use crate::game::Game;

#[test]
fn scripted_two_player_game_runs_to_a_winner() {
    let mut game = two_player_game();

    // "A" (a Governor) taxes up to coup money while "B" passes
    while game.players()[0].coins() < 7 {
        game.tax(0).unwrap();
        game.advance_turn_if_needed();
        game.skip_turn(1).unwrap();
        game.advance_turn_if_needed();
    }
    assert!(!game.is_game_over());

    game.coup(0, 1).unwrap();
    assert!(game.is_game_over());
    assert_eq!(game.winner().unwrap(), "A");
}

#[test]
fn coins_never_go_negative_across_failures() {
    let mut game = deterministic_game();
    game.players[0].add_coins(2);

    assert!(game.bribe(0).is_err());
    assert!(game.sanction(0, 1).is_err());
    assert!(game.coup(0, 1).is_err());
    assert_eq!(game.players()[0].coins(), 2);
}

#[test]
fn cloned_games_evolve_independently() {
    let mut original = deterministic_game();
    let snapshot = original.clone();

    original.players[0].add_coins(7);
    original.coup(0, 1).unwrap();

    assert_eq!(original.num_players(), 5);
    assert_eq!(snapshot.num_players(), 6);
    assert_eq!(snapshot.players()[0].coins(), 0);
}

#[test]
fn game_state_survives_a_serde_round_trip() {
    let mut game = deterministic_game();
    game.players[0].add_coins(4);
    game.bribe(0).unwrap();
    game.gather(0).unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.num_players(), game.num_players());
    assert_eq!(restored.turn(), game.turn());
    assert_eq!(restored.players()[0].coins(), game.players()[0].coins());
    assert_eq!(
        restored.players()[0].actions_left(),
        game.players()[0].actions_left()
    );
}

#[test]
fn forced_coup_player_can_still_be_driven_through_a_coup() {
    let mut game = deterministic_game();
    game.players[0].add_coins(10);
    assert!(game.forced_to_coup(0));

    game.coup(0, 1).unwrap();
    game.advance_turn_if_needed();
    assert_eq!(game.players()[0].coins(), 3);
    assert!(!game.forced_to_coup(0));
    assert_eq!(game.num_players(), 5);
}
