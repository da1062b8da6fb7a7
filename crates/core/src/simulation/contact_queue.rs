//! Contact event queue
//!
//! The host's collision system reports contacts whenever it likes (several per
//! frame, duplicated enter+stay pairs, late exits). Events are queued here and
//! applied in submission order at the start of the next [`Kitchen::update`],
//! so every tick sees a consistent contact picture.
//!
//! [`Kitchen::update`]: crate::simulation::Kitchen::update

use crate::core_types::identity::ObjectId;
use crate::thermal::contact::ContactPhase;
use serde::{Deserialize, Serialize};

/// One contact notification: `receiver` touches (or stops touching) `other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEvent {
    pub phase: ContactPhase,
    /// Object whose contact state changes (pan or steak)
    pub receiver: ObjectId,
    /// Object it rests on (burner or pan)
    pub other: ObjectId,
}

impl ContactEvent {
    pub fn new(phase: ContactPhase, receiver: ObjectId, other: ObjectId) -> Self {
        Self {
            phase,
            receiver,
            other,
        }
    }

    pub fn enter(receiver: ObjectId, other: ObjectId) -> Self {
        Self::new(ContactPhase::Enter, receiver, other)
    }

    pub fn stay(receiver: ObjectId, other: ObjectId) -> Self {
        Self::new(ContactPhase::Stay, receiver, other)
    }

    pub fn exit(receiver: ObjectId, other: ObjectId) -> Self {
        Self::new(ContactPhase::Exit, receiver, other)
    }
}

#[derive(Debug)]
pub(crate) struct ContactQueue {
    /// Events waiting for the next update
    pending: Vec<ContactEvent>,
    /// Events that changed or confirmed contact state in the last update
    applied_this_frame: Vec<ContactEvent>,
}

impl Default for ContactQueue {
    fn default() -> Self {
        Self {
            pending: Vec::with_capacity(16),
            applied_this_frame: Vec::with_capacity(16),
        }
    }
}

impl ContactQueue {
    pub fn submit(&mut self, event: ContactEvent) {
        self.pending.push(event);
    }

    pub fn pending(&self) -> &[ContactEvent] {
        &self.pending
    }

    pub fn applied_this_frame(&self) -> &[ContactEvent] {
        &self.applied_this_frame
    }

    /// Clear `applied_this_frame` at the start of each update
    pub fn begin_frame(&mut self) {
        self.applied_this_frame.clear();
    }

    pub fn mark_applied(&mut self, event: ContactEvent) {
        self.applied_this_frame.push(event);
    }

    pub fn take_pending(&mut self) -> Vec<ContactEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.applied_this_frame.clear();
    }
}
