use mq_core::MqError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error(transparent)]
    InvalidConfiguration(#[from] MqError),
}

pub type ChainResult<T> = Result<T, ChainError>;
