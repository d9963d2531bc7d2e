use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("run is already over")]
    RunOver,
    #[error("no level is active")]
    LevelNotActive,
    #[error("card {id} is not in the live deck")]
    CardNotAvailable { id: String },
    #[error("level progression applies only to Sharp Shooter mode")]
    NotLevelMode,
    #[error("no level is awaiting completion")]
    NoLevelComplete,
    #[error("a bonus round is pending")]
    BonusPending,
    #[error("no bonus round is pending")]
    BonusNotPending,
    #[error("no bonus round is in progress")]
    BonusNotActive,
}
