use std::sync::Arc;

use axum::extract::FromRef;
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::integration::{self, smtp};
use crate::kringle::{self, service::ExchangeServiceImpl};
use crate::notify::{self, console::ConsoleNotifier, smtp::SmtpNotifier};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub kringle_service: kringle::Service,
}

impl AppState {
    pub fn new(kringle_service: kringle::Service) -> Self {
        Self { kringle_service }
    }

    pub fn init(config: &integration::Config) -> crate::Result<Self> {
        let notifier: notify::Service = match &config.smtp {
            Some(cfg) => Arc::new(SmtpNotifier::new(smtp::init(cfg)?, cfg.sender().clone())),
            None => {
                warn!("SMTP is not configured, using console notifier");
                Arc::new(ConsoleNotifier)
            }
        };

        let kringle_service = ExchangeServiceImpl::new(
            notifier,
            StdRng::from_os_rng(),
            config.max_in_flight,
        );

        Ok(Self::new(Arc::new(kringle_service)))
    }
}
