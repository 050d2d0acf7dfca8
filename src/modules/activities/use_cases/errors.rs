use crate::modules::activities::adapters::outbound::activity_store::ActivityStoreError;
use crate::modules::activities::core::errors::RosterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("activity not found: {0}")]
    ActivityNotFound(String),

    #[error(transparent)]
    Store(#[from] ActivityStoreError),

    #[error(transparent)]
    Domain(#[from] RosterError),
}
