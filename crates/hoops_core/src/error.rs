use thiserror::Error;

/// Errors for operations the caller should have gated (unknown ids at
/// game creation, invalid configuration).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Structured refusal of a player action.
///
/// Rejections are ordinary results, never panics: the UI decides how to show
/// them. `Display` gives the user-facing reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Squad is full! Maximum capacity is {max} players.")]
    SquadFull { max: usize },

    #[error("This player has already declined your offer. You cannot offer again.")]
    AlreadyDeclined,

    #[error("You don't have enough budget to afford this contract.")]
    InsufficientBudget,

    #[error("This player has already signed with a club.")]
    AlreadySigned,

    #[error("Player declined your offer.")]
    OfferDeclined,

    #[error("Player not found")]
    PlayerNotFound,

    #[error("A team can have at most {max} starters")]
    StarterLimit { max: usize },

    #[error("Can only renew with 1 year remaining")]
    RenewalTooEarly,

    #[error("Insufficient funds for salary increase")]
    InsufficientFunds,

    #[error("Youth intake has already been used this season")]
    YouthIntakeUsed,

    #[error("No free roster slots")]
    NoFreeSlots,

    #[error("Action not available during the {0} phase")]
    WrongPhase(crate::models::Phase),

    #[error("A season bonus has already been chosen")]
    BonusAlreadyChosen,

    #[error("The game is over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, CoreError>;
