use crate::error::GameError;
use serde::{Deserialize, Serialize};

/// A player's role, fixed at creation.
///
/// Role behaviour is resolved through the small dispatch table below rather
/// than through trait objects; the set of roles is closed.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum Role {
    Governor,
    Spy,
    Baron,
    General,
    Judge,
    Merchant,
}

/// All roles, in the order used for deterministic assignment.
pub const ALL_ROLES: [Role; 6] = [
    Role::Governor,
    Role::Spy,
    Role::Baron,
    Role::General,
    Role::Judge,
    Role::Merchant,
];

impl Role {
    /// Coins gained by a successful tax.
    pub fn tax_amount(self) -> u32 {
        match self {
            Role::Governor => 3,
            _ => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::Governor => "Governor",
            Role::Spy => "Spy",
            Role::Baron => "Baron",
            Role::General => "General",
            Role::Judge => "Judge",
            Role::Merchant => "Merchant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Assigns a role to each seat.
///
/// Deterministic assignment walks [ALL_ROLES] by seat index and exists for
/// tests and debugging; otherwise each seat draws uniformly from the six
/// roles, so duplicates are possible.
pub fn assign_roles(
    num_players: usize,
    deterministic: bool,
    rng: &mut impl rand::Rng,
) -> Result<Vec<Role>, GameError> {
    if num_players < 2 {
        return Err(GameError::TooFewPlayers);
    }
    if num_players > ALL_ROLES.len() {
        return Err(GameError::TooManyPlayers);
    }
    let roles = (0..num_players)
        .map(|idx| {
            if deterministic {
                ALL_ROLES[idx]
            } else {
                ALL_ROLES[rng.gen_range(0..ALL_ROLES.len())]
            }
        })
        .collect();
    Ok(roles)
}
