//! Object identity shared by the simulation and its hosts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a simulated object (burner, pan or steak).
///
/// Contact partners are remembered by id only; the owner of the objects
/// resolves the id when it needs the partner's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ObjectId(pub u32);

impl ObjectId {
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Role an object plays in the heat chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Burner
    HeatSource,
    /// Pan
    Conductor,
    /// Steak
    Load,
}

impl ObjectKind {
    /// The kind of object this one draws heat from, if any
    pub fn upstream(self) -> Option<ObjectKind> {
        match self {
            ObjectKind::HeatSource => None,
            ObjectKind::Conductor => Some(ObjectKind::HeatSource),
            ObjectKind::Load => Some(ObjectKind::Conductor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_chain() {
        assert_eq!(ObjectKind::Load.upstream(), Some(ObjectKind::Conductor));
        assert_eq!(ObjectKind::Conductor.upstream(), Some(ObjectKind::HeatSource));
        assert_eq!(ObjectKind::HeatSource.upstream(), None);
    }

    #[test]
    fn display_id() {
        assert_eq!(ObjectId(7).to_string(), "#7");
        assert_eq!(ObjectId(7).raw(), 7);
    }
}
