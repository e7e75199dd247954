use crate::engine::Decision;

/// Single-slot holder for the decision prepared while the bot was busy.
///
/// A pending entry is never overwritten; it is consumed by [`CastQueue::take`]
/// or dropped by [`CastQueue::clear`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CastQueue {
    pending: Option<Decision>,
}

impl CastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `decision` unless something is already queued. Returns whether it was stored.
    pub fn offer(&mut self, decision: Decision) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(decision);
        true
    }

    pub fn take(&mut self) -> Option<Decision> {
        self.pending.take()
    }

    pub fn peek(&self) -> Option<&Decision> {
        self.pending.as_ref()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}
