//! Redraw requests.
//!
//! Every mutator that changes how a widget looks ends in
//! [`RedrawTrigger::request`]. The trigger remembers that a repaint is due
//! (so a host polling `needs_redraw` finds it) and forwards the request to
//! the host's [`Invalidator`] when one is attached.

use std::fmt;
use std::sync::Arc;

use crate::geometry::Rect;
use crate::id::WidgetId;
use crate::logging::targets;

/// Host collaborator that schedules repaints.
pub trait Invalidator: Send + Sync {
    /// Schedule a repaint of `widget`, optionally limited to `region`.
    fn invalidate(&self, widget: WidgetId, region: Option<Rect>);
}

/// Per-widget redraw bookkeeping.
#[derive(Clone)]
pub struct RedrawTrigger {
    pending: bool,
    dirty_region: Option<Rect>,
    invalidator: Option<Arc<dyn Invalidator>>,
}

impl RedrawTrigger {
    /// A trigger with no host attached. Starts dirty so the first paint happens.
    pub fn new() -> Self {
        Self {
            pending: true,
            dirty_region: None,
            invalidator: None,
        }
    }

    /// Attach (or replace) the host invalidator.
    pub fn set_invalidator(&mut self, invalidator: Option<Arc<dyn Invalidator>>) {
        self.invalidator = invalidator;
    }

    /// Whether a host invalidator is attached.
    pub fn has_invalidator(&self) -> bool {
        self.invalidator.is_some()
    }

    /// Request a repaint of the whole widget or of `region`.
    pub fn request(&mut self, widget: WidgetId, region: Option<Rect>) {
        self.dirty_region = match (self.pending, self.dirty_region, region) {
            // A full repaint is already queued; nothing narrower can help.
            (true, None, _) => None,
            (true, Some(existing), Some(r)) => Some(existing.union(&r)),
            (_, _, None) => None,
            (false, _, Some(r)) => Some(r),
        };
        self.pending = true;

        tracing::trace!(target: targets::REDRAW, %widget, ?region, "redraw requested");
        if let Some(invalidator) = &self.invalidator {
            invalidator.invalidate(widget, region);
        }
    }

    /// Check if a repaint is pending.
    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.pending
    }

    /// The accumulated dirty region; `None` means the whole widget.
    pub fn dirty_region(&self) -> Option<Rect> {
        self.dirty_region
    }

    /// Clear the pending flag (called after painting).
    pub fn clear(&mut self) {
        self.pending = false;
        self.dirty_region = None;
    }
}

impl Default for RedrawTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RedrawTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedrawTrigger")
            .field("pending", &self.pending)
            .field("dirty_region", &self.dirty_region)
            .field("has_invalidator", &self.invalidator.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::init_test_logging;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingInvalidator {
        calls: Mutex<Vec<(WidgetId, Option<Rect>)>>,
    }

    impl Invalidator for RecordingInvalidator {
        fn invalidate(&self, widget: WidgetId, region: Option<Rect>) {
            self.calls.lock().push((widget, region));
        }
    }

    #[test]
    fn request_forwards_to_host() {
        init_test_logging();
        let host = Arc::new(RecordingInvalidator::default());
        let mut trigger = RedrawTrigger::new();
        trigger.set_invalidator(Some(host.clone()));

        let id = WidgetId::next();
        trigger.request(id, None);

        assert!(trigger.needs_redraw());
        assert_eq!(host.calls.lock().as_slice(), &[(id, None)]);
    }

    #[test]
    fn regions_accumulate_until_cleared() {
        let mut trigger = RedrawTrigger::new();
        trigger.clear();
        assert!(!trigger.needs_redraw());

        let id = WidgetId::next();
        trigger.request(id, Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
        trigger.request(id, Some(Rect::new(20.0, 0.0, 10.0, 10.0)));
        assert_eq!(trigger.dirty_region(), Some(Rect::new(0.0, 0.0, 30.0, 10.0)));

        trigger.request(id, None);
        assert_eq!(trigger.dirty_region(), None);
        assert!(trigger.needs_redraw());

        trigger.clear();
        assert!(!trigger.needs_redraw());
    }
}
