use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use futures::{StreamExt, future, stream};
use log::{debug, error, info};
use rand::rngs::StdRng;
use uuid::Uuid;

use crate::notify;

use super::Participant;
use super::draw;
use super::model::Report;

#[async_trait]
pub trait ExchangeService {
    /// Draws partners and notifies every giver. Notification failures do not abort
    /// the exchange; they are collected into the returned [`Report`].
    async fn exchange(&self, participants: &[Participant]) -> super::Result<Report>;
}

pub struct ExchangeServiceImpl {
    notifier: notify::Service,
    rng: Mutex<StdRng>,
    max_in_flight: usize,
}

impl ExchangeServiceImpl {
    pub fn new(notifier: notify::Service, rng: StdRng, max_in_flight: usize) -> Self {
        Self {
            notifier,
            rng: Mutex::new(rng),
            max_in_flight: max_in_flight.max(1),
        }
    }
}

#[async_trait]
impl ExchangeService for ExchangeServiceImpl {
    async fn exchange(&self, participants: &[Participant]) -> super::Result<Report> {
        let id = Uuid::new_v4();

        let assignments = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            draw::draw(participants, &mut *rng)?
        };

        let total = assignments.len();
        info!("exchange {id}: notifying {total} participants");

        let notifier = &self.notifier;
        let failed = stream::iter(assignments)
            .map(|a| async move {
                debug!(
                    "exchange {id}: sending partner {} to {}",
                    a.recipient(),
                    a.giver()
                );
                match notifier.send(a.giver(), a.recipient()).await {
                    Ok(()) => {
                        info!("exchange {id}: notified {}", a.giver());
                        None
                    }
                    Err(e) => {
                        error!("exchange {id}: could not notify {}: {e:?}", a.giver());
                        Some(a.giver().clone())
                    }
                }
            })
            .buffer_unordered(self.max_in_flight)
            .filter_map(future::ready)
            .collect::<Vec<_>>()
            .await;

        let report = Report::new(id, total, failed);
        info!(
            "exchange {id}: sent {} of {} notifications",
            report.sent(),
            report.total()
        );

        Ok(report)
    }
}
