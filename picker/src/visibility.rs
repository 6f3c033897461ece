//! Open/closed state and the outside-activation capability.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

impl Visibility {
    pub fn is_open(self) -> bool {
        self == Visibility::Open
    }

    /// Toggle-target attribute value (`aria-expanded`).
    pub fn expanded(self) -> &'static str {
        match self {
            Visibility::Open => "true",
            Visibility::Closed => "false",
        }
    }
}

/// Open/closed toggle. `open` and `close` are idempotent.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityState {
    current: Visibility,
}

impl VisibilityState {
    pub fn get(&self) -> Visibility {
        self.current
    }

    /// Returns `true` if the state changed.
    pub fn open(&mut self) -> bool {
        self.set(Visibility::Open)
    }

    /// Returns `true` if the state changed.
    pub fn close(&mut self) -> bool {
        self.set(Visibility::Closed)
    }

    pub fn toggle(&mut self) -> Visibility {
        match self.current {
            Visibility::Open => self.close(),
            Visibility::Closed => self.open(),
        };
        self.current
    }

    fn set(&mut self, to: Visibility) -> bool {
        if self.current == to {
            return false;
        }
        tracing::debug!("Visibility {:?} -> {:?}", self.current, to);
        self.current = to;
        true
    }
}

// ─── Picker identity & host hooks ────────────────────────────────────────────

static NEXT_PICKER_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one picker instance on a host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PickerId(u64);

impl PickerId {
    pub fn next() -> Self {
        PickerId(NEXT_PICKER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PickerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "picker-{}", self.0)
    }
}

/// Document-level activation routing supplied by the host.
///
/// A picker subscribes once when constructed and unsubscribes when dropped.
/// While subscribed, the host reports every activation to the picker with
/// the id of the picker whose boundary contains the target, if any.
pub trait ActivationHooks {
    fn subscribe(&mut self, picker: PickerId);
    fn unsubscribe(&mut self, picker: PickerId);
}

/// Hooks for hosts that never report outside activations.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl ActivationHooks for NoHooks {
    fn subscribe(&mut self, _picker: PickerId) {}
    fn unsubscribe(&mut self, _picker: PickerId) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert_eq!(VisibilityState::default().get(), Visibility::Closed);
    }

    #[test]
    fn test_toggle_flips() {
        let mut v = VisibilityState::default();
        assert_eq!(v.toggle(), Visibility::Open);
        assert_eq!(v.toggle(), Visibility::Closed);
    }

    #[test]
    fn test_open_close_idempotent() {
        let mut v = VisibilityState::default();
        assert!(v.open());
        assert!(!v.open());
        assert!(v.get().is_open());
        assert!(v.close());
        assert!(!v.close());
        assert_eq!(v.get().expanded(), "false");
    }

    #[test]
    fn test_picker_ids_are_unique() {
        let a = PickerId::next();
        let b = PickerId::next();
        assert_ne!(a, b);
    }
}
