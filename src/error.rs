use thiserror::Error;

/// The result of attempting an invalid operation on a [Game](crate::Game).
///
/// Every variant is recoverable from the caller's point of view: the game
/// state is left consistent and the same actor may try a different action.
/// The two deliberate exceptions are documented on [Game::bribe](crate::Game::bribe)
/// and [Game::coup](crate::Game::coup), whose costs are sunk before the
/// blocking outcome is known.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameError {
    #[error("not this player's turn, or no actions remain this turn")]
    Turn,
    #[error("gather is blocked for this player")]
    Gather,
    #[error("tax is blocked for this player")]
    Tax,
    #[error("arrest had no coins to take, or is blocked for this player")]
    Arrest,
    #[error("cannot arrest the same player twice in a row")]
    ArrestTwiceInRow,
    #[error("not enough coins, or invalid block role")]
    Coins,
    #[error("this action cannot target its own actor")]
    SelfTarget,
    #[error("the coup was absorbed by a shield")]
    CoupBlocked,
    #[error("the game is not over yet")]
    GameOver,
    #[error("too few players in the game")]
    TooFewPlayers,
    #[error("too many players in the game")]
    TooManyPlayers,
    #[error("invalid player index")]
    InvalidPlayerIndex,
    #[error("no player exists with the given name")]
    PlayerNotFound,
    #[error("this player's role cannot use that ability")]
    InvalidRole,
}
