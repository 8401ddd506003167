//! Sanction mechanics and the Baron/Judge passive reactions.

use super::test_utils::*;
use crate::error::GameError;

#[test]
fn sanction_costs_three_and_disables_gather_and_tax() {
    let mut game = deterministic_game();
    game.players[0].add_coins(3);

    game.sanction(0, 1).unwrap();
    assert_eq!(game.players()[0].coins(), 0);
    assert!(!game.players()[1].can_gather());
    assert!(!game.players()[1].can_tax());

    game.next_turn();
    assert_eq!(game.gather(1).unwrap_err(), GameError::Gather);
    assert_eq!(game.tax(1).unwrap_err(), GameError::Tax);
}

#[test]
fn self_sanction_is_rejected() {
    let mut game = deterministic_game();
    game.players[0].add_coins(3);
    assert_eq!(game.sanction(0, 0).unwrap_err(), GameError::SelfTarget);
}

#[test]
fn sanction_without_funds_fails_without_side_effects() {
    let mut game = deterministic_game();
    assert_eq!(game.sanction(0, 1).unwrap_err(), GameError::Coins);
    assert!(game.players()[1].can_gather());
    assert_eq!(game.players()[0].actions_left(), 1);
}

#[test]
fn sanctioned_baron_pockets_a_compensation_coin() {
    let mut game = deterministic_game();
    game.players[0].add_coins(3);
    game.sanction(0, 2).unwrap();
    assert_eq!(game.players()[2].coins(), 1);
    assert!(!game.players()[2].can_gather());
}

#[test]
fn sanctioned_judge_retaliates_for_one_coin() {
    let mut game = deterministic_game();
    game.players[0].add_coins(6);
    game.sanction(0, 4).unwrap();
    // 3 for the sanction, 1 more to the judge's retaliation
    assert_eq!(game.players()[0].coins(), 2);
    assert!(!game.players()[4].can_tax());
}

#[test]
fn judge_retaliation_against_a_broke_actor_is_swallowed() {
    let mut game = deterministic_game();
    game.players[0].add_coins(3);
    game.sanction(0, 4).unwrap();
    // the retaliation could not be paid, the sanction still stands
    assert_eq!(game.players()[0].coins(), 0);
    assert!(!game.players()[4].can_gather());
    assert!(!game.players()[4].can_tax());
}

#[test]
fn sanction_lifts_when_the_target_turn_ends() {
    let mut game = deterministic_game();
    game.players[0].add_coins(3);
    game.sanction(0, 1).unwrap();
    game.advance_turn_if_needed();

    // still in force during the target's own turn
    assert_eq!(game.turn_index(), 1);
    assert_eq!(game.gather(1).unwrap_err(), GameError::Gather);

    // passing ends the turn and the debuff with it
    game.skip_turn(1).unwrap();
    game.advance_turn_if_needed();
    assert!(game.players()[1].can_gather());
    assert!(game.players()[1].can_tax());
}

#[test]
fn double_sanction_is_allowed_and_still_effective() {
    let mut game = deterministic_game();
    game.players[0].add_coins(4);
    game.bribe(0).unwrap();
    game.players[0].add_coins(6);
    game.sanction(0, 1).unwrap();
    game.sanction(0, 1).unwrap();
    assert!(!game.players()[1].can_gather());
    assert_eq!(game.players()[0].coins(), 0);
}
