use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use maud::Render;

use crate::kringle::Participant;

use super::markup::{PartnerEmail, SUBJECT};
use super::{Error, Notifier};

pub type Transport = AsyncSmtpTransport<Tokio1Executor>;

/// Sends partner emails through a pooled SMTP transport. The transport is cheap to
/// clone and safe to share between concurrent requests.
#[derive(Clone)]
pub struct SmtpNotifier {
    transport: Transport,
    from: Mailbox,
}

impl SmtpNotifier {
    pub fn new(transport: Transport, from: Mailbox) -> Self {
        Self { transport, from }
    }

    fn message(
        &self,
        recipient: &Participant,
        partner: &Participant,
        generated_at: NaiveDateTime,
    ) -> super::Result<Message> {
        let to = recipient
            .as_str()
            .parse::<Mailbox>()
            .map_err(|_| Error::InvalidMailbox(recipient.to_string()))?;

        let body = PartnerEmail::new(partner, generated_at).render();

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(SUBJECT)
            .header(ContentType::TEXT_HTML)
            .body(body.into_string())?;

        Ok(message)
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, recipient: &Participant, partner: &Participant) -> super::Result<()> {
        let message = self.message(recipient, partner, Local::now().naive_local())?;
        self.transport.send(message).await?;
        Ok(())
    }
}
