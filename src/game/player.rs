use serde::{Deserialize, Serialize};

use super::role::Role;
use crate::error::GameError;

/// Stable identity of a player, assigned at construction and never reused.
///
/// Relations between players (`last_arrested_by`) are stored as ids rather
/// than roster indices, so an elimination can never leave them dangling.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct PlayerId(pub(crate) u32);

/// A game player.
///
/// The player owns its local state and validation; cross-player effects
/// (coin transfer, elimination, blocking costs) are mediated by the
/// [Game](crate::Game).
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    role: Role,
    coins: u32,
    /// Actions left this logical turn; starts at 1, bribe grants more.
    actions_left: u32,
    pub(crate) can_gather: bool,
    pub(crate) can_tax: bool,
    pub(crate) can_arrest: bool,
    pub(crate) last_arrested_by: Option<PlayerId>,
    /// One-time protection granted by a General, consumed by the next coup.
    pub(crate) coup_shield: bool,
}

impl Player {
    pub(crate) fn new(id: PlayerId, name: String, role: Role) -> Self {
        Self {
            id,
            name,
            role,
            coins: 0,
            actions_left: 1,
            can_gather: true,
            can_tax: true,
            can_arrest: true,
            last_arrested_by: None,
            coup_shield: false,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    /// Actions the player may still take this turn.
    pub fn actions_left(&self) -> u32 {
        self.actions_left
    }

    pub fn can_gather(&self) -> bool {
        self.can_gather
    }

    pub fn can_tax(&self) -> bool {
        self.can_tax
    }

    pub fn can_arrest(&self) -> bool {
        self.can_arrest
    }

    pub fn coup_shield(&self) -> bool {
        self.coup_shield
    }

    pub fn add_coins(&mut self, amount: u32) {
        self.coins += amount;
    }

    /// Removes coins, failing without mutation when the balance is short.
    pub fn remove_coins(&mut self, amount: u32) -> Result<(), GameError> {
        self.coins = self.coins.checked_sub(amount).ok_or(GameError::Coins)?;
        Ok(())
    }

    /// Requires `can_gather`; adds one coin.
    pub(crate) fn gather(&mut self) -> Result<(), GameError> {
        if !self.can_gather {
            return Err(GameError::Gather);
        }
        self.add_coins(1);
        Ok(())
    }

    /// Requires `can_tax`; adds the role-dependent tax amount.
    pub(crate) fn tax(&mut self) -> Result<(), GameError> {
        if !self.can_tax {
            return Err(GameError::Tax);
        }
        self.add_coins(self.role.tax_amount());
        Ok(())
    }

    /// Grants one additional action this turn (the bribe reward).
    pub(crate) fn grant_extra_action(&mut self) {
        self.actions_left += 1;
    }

    /// Spends one action unit.
    pub(crate) fn consume_action(&mut self) {
        self.actions_left = self.actions_left.saturating_sub(1);
    }

    /// Lifts the sanction/block debuffs.
    pub(crate) fn clear_debuffs(&mut self) {
        self.can_gather = true;
        self.can_tax = true;
        self.can_arrest = true;
    }

    /// End-of-turn reset: debuffs lifted, action budget back to one.
    pub(crate) fn reset_turn(&mut self) {
        self.clear_debuffs();
        self.actions_left = 1;
    }
}
