use std::sync::Arc;

use async_trait::async_trait;

use crate::kringle::Participant;

pub mod console;
pub mod markup;
pub mod smtp;

pub type Result<T> = std::result::Result<T, Error>;
pub type Service = Arc<dyn Notifier + Send + Sync>;

#[async_trait]
pub trait Notifier {
    /// Tells `recipient` who their partner is.
    async fn send(&self, recipient: &Participant, partner: &Participant) -> Result<()>;
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid mailbox: {0}")]
    InvalidMailbox(String),

    #[error(transparent)]
    _Message(#[from] lettre::error::Error),
    #[error(transparent)]
    _Smtp(#[from] lettre::transport::smtp::Error),
}
