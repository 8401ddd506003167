use log::{info, warn};
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

pub use self::options::GameOptions;
pub use self::player::{Player, PlayerId};
pub use self::role::Role;
use self::role::assign_roles;
use crate::error::GameError;

mod options;
mod player;
mod role;
mod test;

const COUP_COST: u32 = 7;
const BRIBE_COST: u32 = 4;
const SANCTION_COST: u32 = 3;
const FORCED_COUP_THRESHOLD: u32 = 10;
const BARON_INVEST_COST: u32 = 3;
const BARON_INVEST_RETURN: u32 = 6;
const GENERAL_BLOCK_COST: u32 = 5;
const GENERAL_SHIELD_COST: u32 = 5;
const MERCHANT_BONUS_MIN: u32 = 3;

/// A game of Coup.
///
/// The game owns the seating-ordered roster and mediates every cross-player
/// effect. All methods run to completion synchronously; the caller is
/// expected to invoke [advance_turn_if_needed](Game::advance_turn_if_needed)
/// after each completed action, the game never rotates the turn by itself.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Game {
    opts: GameOptions,
    players: Vec<Player>,
    turn_idx: usize,
}

/// How an arrest resolved.
///
/// The General and Merchant cases are expected outcomes, not failures: the
/// arrest still spends the actor's action and records the repeat-arrest
/// bookkeeping even though no coin reaches the arrester.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum ArrestOutcome {
    /// One coin moved from the target to the arrester.
    Stolen,
    /// The target was a General; nothing was taken.
    NoEffect,
    /// The target was a Merchant and paid two coins to the bank instead.
    BankPenalty,
}

impl Game {
    /// Creates a new game with 2 to 6 players.
    ///
    /// Roles are drawn from the seeded RNG, or assigned by seat order when
    /// [GameOptions::deterministic_roles] is set.
    pub fn new(opts: GameOptions, player_names: &[String], seed: u64) -> Result<Self, GameError> {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
        let roles = assign_roles(player_names.len(), opts.deterministic_roles, &mut rng)?;
        let players = player_names
            .iter()
            .zip(roles)
            .enumerate()
            .map(|(idx, (name, role))| Player::new(PlayerId(idx as u32), name.into(), role))
            .collect();

        Ok(Game {
            opts,
            players,
            turn_idx: 0,
        })
    }

    // ---- query surface ----

    /// The options the game was created with.
    pub fn options(&self) -> GameOptions {
        self.opts
    }

    /// The live roster, in seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Finds a player with the given name.
    pub fn find_player(&self, name: &str) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.name() == name)
            .ok_or(GameError::PlayerNotFound)
    }

    /// Index of the player whose turn it is.
    pub fn turn_index(&self) -> usize {
        self.turn_idx
    }

    /// Name of the player whose turn it is.
    pub fn turn(&self) -> &str {
        self.players[self.turn_idx].name()
    }

    /// Whether the current player still has an action to spend.
    pub fn current_player_has_turn(&self) -> bool {
        self.players[self.turn_idx].actions_left() > 0
    }

    /// All roster indices except `player`, in seating order.
    pub fn target_players(&self, player: usize) -> Vec<usize> {
        (0..self.players.len()).filter(|idx| *idx != player).collect()
    }

    /// True when the player holds enough coins that the presentation layer
    /// must restrict them to the coup action. The game itself does not
    /// enforce the restriction on the other commands.
    pub fn forced_to_coup(&self, player: usize) -> bool {
        self.players[player].coins() >= FORCED_COUP_THRESHOLD
    }

    /// Returns true when exactly one player remains, logging the winner.
    pub fn is_game_over(&self) -> bool {
        if let [winner] = &self.players[..] {
            info!("game over, winner: {}", winner.name());
            return true;
        }
        false
    }

    /// Name of the sole remaining player.
    pub fn winner(&self) -> Result<&str, GameError> {
        let [winner] = &self.players[..] else {
            return Err(GameError::GameOver);
        };
        Ok(winner.name())
    }

    // ---- command surface ----

    /// The current player gains one coin.
    pub fn gather(&mut self, actor: usize) -> Result<(), GameError> {
        self.check_turn(actor)?;
        self.players[actor].gather()?;
        self.players[actor].consume_action();
        Ok(())
    }

    /// The current player taxes: 3 coins for a Governor, 2 for anyone else.
    pub fn tax(&mut self, actor: usize) -> Result<(), GameError> {
        self.check_turn(actor)?;
        self.players[actor].tax()?;
        self.players[actor].consume_action();
        Ok(())
    }

    /// The current player pays 4 coins for one additional action this turn.
    ///
    /// The cost is sunk: when a Judge block is confirmed afterwards, the
    /// caller applies it with [player_pay_after_block](Game::player_pay_after_block),
    /// which charges 4 more and eats the action the bribe just bought.
    pub fn bribe(&mut self, actor: usize) -> Result<(), GameError> {
        self.check_turn(actor)?;
        self.players[actor].remove_coins(BRIBE_COST)?;
        self.players[actor].grant_extra_action();
        Ok(())
    }

    /// The current player arrests `target`.
    ///
    /// Repeating the previous arrest pairing is rejected before any other
    /// check. On success exactly one coin moves to the arrester, except
    /// against a General (nothing moves) or a Merchant (the target forfeits
    /// two coins to the bank); see [ArrestOutcome].
    pub fn arrest(&mut self, actor: usize, target: usize) -> Result<ArrestOutcome, GameError> {
        self.check_turn(actor)?;
        self.check_player_index(target)?;
        let actor_id = self.players[actor].id();
        if self.players[target].last_arrested_by == Some(actor_id) {
            return Err(GameError::ArrestTwiceInRow);
        }
        if actor == target {
            return Err(GameError::SelfTarget);
        }
        if !self.players[actor].can_arrest() {
            return Err(GameError::Arrest);
        }

        let outcome = match self.players[target].role() {
            // The theft fails against a General, but the action cost and the
            // repeat-arrest bookkeeping still apply.
            Role::General => ArrestOutcome::NoEffect,
            Role::Merchant => {
                if self.players[target].coins() < 2 {
                    return Err(GameError::Arrest);
                }
                self.players[target].remove_coins(2)?;
                ArrestOutcome::BankPenalty
            }
            _ => {
                if self.players[target].coins() < 1 {
                    return Err(GameError::Arrest);
                }
                self.players[target].remove_coins(1)?;
                self.players[actor].add_coins(1);
                ArrestOutcome::Stolen
            }
        };

        self.players[target].last_arrested_by = Some(actor_id);
        self.players[actor].consume_action();
        Ok(outcome)
    }

    /// The current player pays 3 coins to block `target`'s gather and tax
    /// until the end of the target's next turn.
    ///
    /// A Baron target pockets one coin in compensation. A Judge target
    /// retaliates for one coin from the actor; if the actor is already
    /// broke the retaliation is dropped and the sanction stands.
    pub fn sanction(&mut self, actor: usize, target: usize) -> Result<(), GameError> {
        self.check_turn(actor)?;
        self.check_player_index(target)?;
        if actor == target {
            return Err(GameError::SelfTarget);
        }
        self.players[actor].remove_coins(SANCTION_COST)?;
        self.players[target].can_gather = false;
        self.players[target].can_tax = false;

        match self.players[target].role() {
            Role::Baron => self.players[target].add_coins(1),
            Role::Judge => {
                if self.players[actor].remove_coins(1).is_err() {
                    warn!(
                        "judge retaliation skipped, {} cannot pay the penalty",
                        self.players[actor].name()
                    );
                }
            }
            _ => {}
        }

        self.players[actor].consume_action();
        Ok(())
    }

    /// The current player pays 7 coins to eliminate `target`.
    ///
    /// The cost is sunk: a coup absorbed by a shield still charges the full
    /// 7 coins and spends the action, consuming the shield.
    pub fn coup(&mut self, actor: usize, target: usize) -> Result<(), GameError> {
        self.check_turn(actor)?;
        self.check_player_index(target)?;
        if actor == target {
            return Err(GameError::SelfTarget);
        }
        self.players[actor].remove_coins(COUP_COST)?;
        self.players[actor].consume_action();

        if self.players[target].coup_shield {
            self.players[target].coup_shield = false;
            return Err(GameError::CoupBlocked);
        }

        self.players.remove(target);
        if target < self.turn_idx {
            self.turn_idx -= 1;
        }
        Ok(())
    }

    /// Applies a confirmed block: the named player pays the role-specific
    /// penalty, and the current player's action is consumed.
    ///
    /// Governor blocks tax (disables the player's tax), Judge blocks bribe
    /// (4 coins), Spy blocks arrest (disables the player's arrest), General
    /// blocks coup (5 coins). Any other role is an internal-consistency
    /// violation.
    pub fn player_pay_after_block(&mut self, player: usize, role: Role) -> Result<(), GameError> {
        self.check_player_index(player)?;
        match role {
            Role::Governor => self.players[player].can_tax = false,
            Role::Judge => self.players[player].remove_coins(BRIBE_COST)?,
            Role::Spy => self.players[player].can_arrest = false,
            Role::General => self.players[player].remove_coins(GENERAL_BLOCK_COST)?,
            _ => return Err(GameError::Coins),
        }
        info!(
            "{} block applied against {}",
            role,
            self.players[player].name()
        );
        self.players[self.turn_idx].consume_action();
        Ok(())
    }

    /// The current player passes, spending one action for no benefit.
    pub fn skip_turn(&mut self, actor: usize) -> Result<(), GameError> {
        self.check_turn(actor)?;
        self.players[actor].consume_action();
        Ok(())
    }

    /// Rotates to the next seat.
    ///
    /// The outgoing player's debuffs and action budget are reset, then the
    /// incoming Merchant bonus is applied.
    pub fn next_turn(&mut self) {
        self.players[self.turn_idx].reset_turn();
        self.turn_idx = (self.turn_idx + 1) % self.players.len();

        let incoming = &mut self.players[self.turn_idx];
        if incoming.role() == Role::Merchant && incoming.coins() >= MERCHANT_BONUS_MIN {
            incoming.add_coins(1);
        }
    }

    /// Rotates the turn unless the current player still has actions left,
    /// in which case only the spent per-action debuffs are lifted.
    ///
    /// Must be invoked by the driving collaborator after every completed
    /// action; the game does not call it by itself.
    pub fn advance_turn_if_needed(&mut self) {
        if self.current_player_has_turn() {
            self.players[self.turn_idx].clear_debuffs();
        } else {
            self.next_turn();
        }
    }

    // ---- active abilities ----

    /// Baron only: convert 3 coins into 6.
    pub fn baron_invest(&mut self, actor: usize) -> Result<(), GameError> {
        self.check_turn(actor)?;
        self.check_role(actor, Role::Baron)?;
        self.players[actor].remove_coins(BARON_INVEST_COST)?;
        self.players[actor].add_coins(BARON_INVEST_RETURN);
        self.players[actor].consume_action();
        Ok(())
    }

    /// Spy only: every other player's coin balance, in seating order.
    /// Read-only and free, it does not spend an action.
    pub fn spy_coin_report(&self, actor: usize) -> Result<Vec<(String, u32)>, GameError> {
        self.check_player_index(actor)?;
        self.check_role(actor, Role::Spy)?;
        Ok(self
            .players
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != actor)
            .map(|(_, p)| (p.name().to_owned(), p.coins()))
            .collect())
    }

    /// Governor only: block another player's tax until their turn ends.
    pub fn governor_block_tax(&mut self, actor: usize, target: usize) -> Result<(), GameError> {
        self.check_turn(actor)?;
        self.check_role(actor, Role::Governor)?;
        self.check_player_index(target)?;
        if actor == target {
            return Err(GameError::SelfTarget);
        }
        self.players[target].can_tax = false;
        self.players[actor].consume_action();
        Ok(())
    }

    /// General only: pay 5 coins to grant a one-time coup shield to any
    /// player, including the General itself.
    pub fn general_shield(&mut self, actor: usize, target: usize) -> Result<(), GameError> {
        self.check_turn(actor)?;
        self.check_role(actor, Role::General)?;
        self.check_player_index(target)?;
        self.players[actor].remove_coins(GENERAL_SHIELD_COST)?;
        self.players[target].coup_shield = true;
        self.players[actor].consume_action();
        Ok(())
    }

    // ---- internals ----

    /// Returns `Ok` if the given player index is valid, and an `Err` otherwise.
    fn check_player_index(&self, player: usize) -> Result<(), GameError> {
        if player < self.players.len() {
            Ok(())
        } else {
            Err(GameError::InvalidPlayerIndex)
        }
    }

    /// Validates that `actor` is the current player and has an action left.
    fn check_turn(&self, actor: usize) -> Result<(), GameError> {
        self.check_player_index(actor)?;
        if actor != self.turn_idx || self.players[actor].actions_left() == 0 {
            return Err(GameError::Turn);
        }
        Ok(())
    }

    fn check_role(&self, player: usize, role: Role) -> Result<(), GameError> {
        if self.players[player].role() == role {
            Ok(())
        } else {
            Err(GameError::InvalidRole)
        }
    }
}
