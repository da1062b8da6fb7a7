//! Contact tracking between an object and the upstream object it rests on

use crate::core_types::identity::ObjectId;
use serde::{Deserialize, Serialize};

/// Phase of a contact notification from the host's collision system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactPhase {
    Enter,
    Stay,
    Exit,
}

impl ContactPhase {
    /// Convert from u8 for FFI compatibility
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ContactPhase::Enter),
            1 => Some(ContactPhase::Stay),
            2 => Some(ContactPhase::Exit),
            _ => None,
        }
    }

    /// Convert to u8 for FFI compatibility
    pub fn as_u8(&self) -> u8 {
        match self {
            ContactPhase::Enter => 0,
            ContactPhase::Stay => 1,
            ContactPhase::Exit => 2,
        }
    }
}

/// Non-owning link to the current contact partner.
///
/// Being in contact and having a partner are the same fact, so the link is a
/// single optional id. All operations are idempotent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactLink {
    partner: Option<ObjectId>,
}

impl ContactLink {
    /// Track `other` as the partner. Returns true if the partner changed.
    pub fn attach(&mut self, other: ObjectId) -> bool {
        let changed = self.partner != Some(other);
        self.partner = Some(other);
        changed
    }

    /// Drop the partner if it is `other`. Returns true if the link was cleared.
    ///
    /// An exit from any other object (a stale second contact) is ignored.
    pub fn detach(&mut self, other: ObjectId) -> bool {
        if self.partner == Some(other) {
            self.partner = None;
            true
        } else {
            false
        }
    }

    /// Drop whatever partner is tracked
    pub fn clear(&mut self) -> Option<ObjectId> {
        self.partner.take()
    }

    pub fn partner(&self) -> Option<ObjectId> {
        self.partner
    }

    pub fn is_active(&self) -> bool {
        self.partner.is_some()
    }
}
