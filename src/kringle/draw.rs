//! Partner assignment.
//!
//! Participants are shuffled and every participant gives to the next one in the
//! shuffled order, wrapping around at the end. For unique participants this forms a
//! single cycle over everybody, so nobody draws themselves.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use super::model::Assignment;
use super::{Error, Participant};

pub const MIN_PARTICIPANTS: usize = 2;
pub const MAX_PARTICIPANTS: usize = 10;

pub fn check_size(len: usize) -> super::Result<()> {
    if len > MAX_PARTICIPANTS {
        return Err(Error::TooLarge(len));
    }
    if len < MIN_PARTICIPANTS {
        return Err(Error::TooSmall(len));
    }
    Ok(())
}

/// Addresses are compared case-insensitively.
pub fn check_unique(participants: &[Participant]) -> super::Result<()> {
    let mut seen = HashSet::with_capacity(participants.len());
    for p in participants {
        if !seen.insert(p.as_str().to_lowercase()) {
            return Err(Error::DuplicateEmail(p.clone()));
        }
    }
    Ok(())
}

pub fn draw<R>(participants: &[Participant], rng: &mut R) -> super::Result<Vec<Assignment>>
where
    R: Rng + ?Sized,
{
    check_size(participants.len())?;
    check_unique(participants)?;

    let mut order = participants.to_vec();
    order.shuffle(rng);

    let n = order.len();
    let assignments = order
        .iter()
        .enumerate()
        .map(|(i, giver)| Assignment::new(giver.clone(), order[(i + 1) % n].clone()))
        .collect();

    Ok(assignments)
}
