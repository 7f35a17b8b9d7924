use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use axum::{Router, routing::post};
use email_address::EmailAddress;
use serde::Serialize;

use crate::state::AppState;
use draw::{MAX_PARTICIPANTS, MIN_PARTICIPANTS};
use service::ExchangeService;

pub mod draw;
mod handler;
pub mod model;
pub mod service;

type Result<T> = std::result::Result<T, Error>;
pub type Service = Arc<dyn ExchangeService + Send + Sync>;

pub fn api<S>(s: AppState) -> Router<S> {
    Router::new()
        .route("/", post(handler::api::exchange))
        .with_state(s)
}

/// A single email address taking part in an exchange.
#[derive(Clone, Debug, Serialize, Hash, PartialEq, Eq)]
#[serde(transparent)]
pub struct Participant(String);

impl Participant {
    /// Wraps an address as is. Use [`Participant::parse`] for untrusted input.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Accepts only addresses the mail transport can deliver to, so quoted local
    /// parts and domain literals are refused here rather than at send time.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || Error::InvalidEmail(raw.to_owned());

        let email = EmailAddress::from_str(raw.trim())
            .map_err(|_| invalid())?
            .email();
        lettre::Address::from_str(&email).map_err(|_| invalid())?;

        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    MalformedRequest(String),
    #[error("Up to {max} emails at once only.", max = MAX_PARTICIPANTS)]
    TooLarge(usize),
    #[error("At least {min} emails are required.", min = MIN_PARTICIPANTS)]
    TooSmall(usize),
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
    #[error("Duplicate email: {0}")]
    DuplicateEmail(Participant),
}
