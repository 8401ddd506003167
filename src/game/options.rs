use serde::{Deserialize, Serialize};

/// Options for customising a game of Coup.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default)]
pub struct GameOptions {
    /// Assign roles by seat order instead of drawing them at random.
    ///
    /// Seat order is `[Governor, Spy, Baron, General, Judge, Merchant]`,
    /// which makes every role reachable by index in tests.
    pub deterministic_roles: bool,
}
