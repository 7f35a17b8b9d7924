use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Participant, draw};

#[derive(Deserialize, Debug)]
pub struct ExchangeRequest {
    #[serde(rename = "Emails", alias = "emails", default)]
    emails: Vec<String>,
}

impl ExchangeRequest {
    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    /// Size is checked before addresses are parsed, so an oversized request is
    /// rejected as such even if it also contains garbage.
    pub fn into_participants(self) -> super::Result<Vec<Participant>> {
        draw::check_size(self.emails.len())?;

        let participants = self
            .emails
            .iter()
            .map(|e| Participant::parse(e))
            .collect::<super::Result<Vec<_>>>()?;

        draw::check_unique(&participants)?;
        Ok(participants)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    giver: Participant,
    recipient: Participant,
}

impl Assignment {
    pub fn new(giver: Participant, recipient: Participant) -> Self {
        Self { giver, recipient }
    }

    pub const fn giver(&self) -> &Participant {
        &self.giver
    }

    pub const fn recipient(&self) -> &Participant {
        &self.recipient
    }
}

/// Outcome of one exchange. Lists givers whose notification failed, never pairings.
#[derive(Serialize, Clone, Debug)]
pub struct Report {
    id: Uuid,
    total: usize,
    sent: usize,
    failed: Vec<Participant>,
}

impl Report {
    pub fn new(id: Uuid, total: usize, failed: Vec<Participant>) -> Self {
        Self {
            id,
            total,
            sent: total.saturating_sub(failed.len()),
            failed,
        }
    }

    pub const fn id(&self) -> &Uuid {
        &self.id
    }

    pub const fn total(&self) -> usize {
        self.total
    }

    pub const fn sent(&self) -> usize {
        self.sent
    }

    pub fn failed(&self) -> &[Participant] {
        &self.failed
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
