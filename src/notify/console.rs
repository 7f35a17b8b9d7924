use async_trait::async_trait;
use chrono::Local;
use log::info;
use maud::Render;

use crate::kringle::Participant;

use super::Notifier;
use super::markup::{PartnerEmail, SUBJECT};

/// Logs messages instead of sending them. Meant for local runs without SMTP credentials.
#[derive(Clone, Default)]
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn send(&self, recipient: &Participant, partner: &Participant) -> super::Result<()> {
        let body = PartnerEmail::new(partner, Local::now().naive_local()).render();
        info!("to: {recipient}, subject: {SUBJECT}\n{}", body.into_string());
        Ok(())
    }
}
