use mq_chain::ChainError;
use mq_core::MqError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] MqError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error("simulation is already running")]
    AlreadyRunning,

    #[error("simulation has ended and cannot be restarted")]
    AlreadyEnded,
}

pub type SimResult<T> = Result<T, SimError>;
