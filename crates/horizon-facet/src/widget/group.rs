//! Selection groups for exclusive selection among widgets.
//!
//! Membership is an explicit [`GroupTag`] stamped on each member's
//! [`WidgetBase`](super::WidgetBase). A group only ever touches widgets that
//! carry its tag, whatever their concrete type.
//!
//! # Example
//!
//! ```
//! use horizon_facet::style::theme::Theme;
//! use horizon_facet::widget::{SelectionGroup, Widget};
//! use horizon_facet::widget::widgets::Button;
//!
//! let theme = Theme::light();
//! let mut day = Button::new("Day", &theme);
//! let mut week = Button::new("Week", &theme);
//!
//! let mut group = SelectionGroup::new();
//! group.add(&mut day);
//! group.add(&mut week);
//!
//! group.activate(week.id(), &mut [&mut day, &mut week]);
//! assert!(week.is_checked());
//! assert!(!day.is_checked());
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use horizon_facet_core::{Signal, WidgetId};

use super::traits::Widget;

static NEXT_GROUP_TAG: AtomicU64 = AtomicU64::new(1);

/// Identifies one selection group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupTag(u64);

impl GroupTag {
    /// Allocate a fresh tag.
    pub fn next() -> Self {
        Self(NEXT_GROUP_TAG.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for GroupTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group#{}", self.0)
    }
}

/// A non-visual coordinator for selection among tagged widgets.
///
/// # Exclusive Mode
///
/// By default groups are exclusive. In exclusive mode:
/// - Only one member is selected at a time
/// - Activating the selected member does NOT deselect it
///
/// With `exclusive = false` activation toggles the member on its own.
pub struct SelectionGroup {
    tag: GroupTag,

    /// Members in insertion order.
    members: Vec<WidgetId>,

    /// Selected members in selection order.
    selected: Vec<WidgetId>,

    exclusive: bool,

    /// Signal emitted when a member's selected state changes.
    /// Parameter is (member, selected).
    pub selection_changed: Signal<(WidgetId, bool)>,
}

impl SelectionGroup {
    /// Create a new exclusive group.
    pub fn new() -> Self {
        Self::with_exclusive(true)
    }

    /// Create a new group with specified exclusivity.
    pub fn with_exclusive(exclusive: bool) -> Self {
        Self {
            tag: GroupTag::next(),
            members: Vec::new(),
            selected: Vec::new(),
            exclusive,
            selection_changed: Signal::new(),
        }
    }

    pub fn tag(&self) -> GroupTag {
        self.tag
    }

    pub fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    /// Set whether the group enforces exclusive selection.
    ///
    /// Switching to exclusive keeps only the earliest selected member. Call
    /// [`sync`](Self::sync) afterwards to push the change to the widgets.
    pub fn set_exclusive(&mut self, exclusive: bool) {
        self.exclusive = exclusive;
        if exclusive {
            self.selected.truncate(1);
        }
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Add a widget, stamping the group's tag on it.
    ///
    /// A widget already selected joins as the selection (replacing the
    /// current one in exclusive mode).
    pub fn add(&mut self, widget: &mut dyn Widget) {
        let id = widget.id();
        widget.widget_base_mut().set_group_tag(Some(self.tag));
        if !self.members.contains(&id) {
            self.members.push(id);
        }
        if widget.widget_base().is_selected() && !self.selected.contains(&id) {
            if self.exclusive {
                self.selected.clear();
            }
            self.selected.push(id);
        }
    }

    /// Remove a widget. Returns whether it was a member.
    pub fn remove(&mut self, widget: &mut dyn Widget) -> bool {
        let id = widget.id();
        let Some(index) = self.members.iter().position(|&m| m == id) else {
            return false;
        };
        self.members.remove(index);
        self.selected.retain(|&s| s != id);
        if widget.widget_base().group_tag() == Some(self.tag) {
            widget.widget_base_mut().set_group_tag(None);
        }
        true
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.members.contains(&id)
    }

    /// Whether `widget` carries this group's tag.
    pub fn is_member(&self, widget: &dyn Widget) -> bool {
        widget.widget_base().group_tag() == Some(self.tag)
    }

    pub fn members(&self) -> &[WidgetId] {
        &self.members
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The selected member (the earliest one in non-exclusive mode).
    pub fn selected(&self) -> Option<WidgetId> {
        self.selected.first().copied()
    }

    pub fn selected_members(&self) -> &[WidgetId] {
        &self.selected
    }

    /// Whether activating `id` must leave it selected.
    pub fn should_prevent_uncheck(&self, id: WidgetId) -> bool {
        self.exclusive && self.selected() == Some(id)
    }

    /// The user activated member `target`.
    ///
    /// `widgets` is any collection of widgets; only those carrying this
    /// group's tag are updated. Returns whether the selection changed.
    pub fn activate(&mut self, target: WidgetId, widgets: &mut [&mut dyn Widget]) -> bool {
        if !self.contains(target) || self.should_prevent_uncheck(target) {
            return false;
        }

        if self.exclusive {
            self.selected.clear();
            self.selected.push(target);
        } else if let Some(index) = self.selected.iter().position(|&s| s == target) {
            self.selected.remove(index);
        } else {
            self.selected.push(target);
        }

        self.sync(widgets);
        true
    }

    /// Clear the selection.
    pub fn clear(&mut self, widgets: &mut [&mut dyn Widget]) {
        self.selected.clear();
        self.sync(widgets);
    }

    /// Push the group's selection onto the tagged widgets.
    pub fn sync(&self, widgets: &mut [&mut dyn Widget]) {
        for widget in widgets.iter_mut() {
            if !self.is_member(&**widget) {
                continue;
            }
            let id = widget.id();
            let selected = self.selected.contains(&id);
            if widget.widget_base_mut().set_selected(selected) {
                self.selection_changed.emit((id, selected));
            }
        }
    }
}

impl Default for SelectionGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SelectionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionGroup")
            .field("tag", &self.tag)
            .field("members", &self.members)
            .field("selected", &self.selected)
            .field("exclusive", &self.exclusive)
            .finish()
    }
}

static_assertions::assert_impl_all!(SelectionGroup: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI32, Ordering};

    use horizon_facet_style::theme::Theme;

    use super::*;
    use crate::widget::widgets::Button;

    fn buttons(count: usize) -> Vec<Button> {
        let theme = Theme::light();
        (0..count)
            .map(|i| Button::new(format!("Option {i}"), &theme))
            .collect()
    }

    fn as_dyn(buttons: &mut [Button]) -> Vec<&mut dyn Widget> {
        buttons.iter_mut().map(|b| b as &mut dyn Widget).collect()
    }

    #[test]
    fn test_add_stamps_tag() {
        let mut b = buttons(2);
        let mut group = SelectionGroup::new();
        group.add(&mut b[0]);

        assert!(group.is_member(&b[0]));
        assert!(!group.is_member(&b[1]));
        assert_eq!(b[0].widget_base().group_tag(), Some(group.tag()));
    }

    #[test]
    fn test_exclusive_mode() {
        let mut b = buttons(3);
        let ids: Vec<_> = b.iter().map(|w| w.id()).collect();
        let mut group = SelectionGroup::new();
        for w in &mut b {
            group.add(w);
        }

        assert!(group.activate(ids[0], &mut as_dyn(&mut b)));
        assert!(b[0].is_checked());

        assert!(group.activate(ids[1], &mut as_dyn(&mut b)));
        assert!(!b[0].is_checked());
        assert!(b[1].is_checked());
        assert_eq!(group.selected(), Some(ids[1]));
    }

    #[test]
    fn test_prevent_uncheck_in_exclusive() {
        let mut b = buttons(2);
        let ids: Vec<_> = b.iter().map(|w| w.id()).collect();
        let mut group = SelectionGroup::new();
        for w in &mut b {
            group.add(w);
        }
        group.activate(ids[0], &mut as_dyn(&mut b));

        assert!(group.should_prevent_uncheck(ids[0]));
        assert!(!group.should_prevent_uncheck(ids[1]));
        assert!(!group.activate(ids[0], &mut as_dyn(&mut b)));
        assert!(b[0].is_checked());
    }

    #[test]
    fn test_non_exclusive_mode() {
        let mut b = buttons(2);
        let ids: Vec<_> = b.iter().map(|w| w.id()).collect();
        let mut group = SelectionGroup::with_exclusive(false);
        for w in &mut b {
            group.add(w);
        }

        group.activate(ids[0], &mut as_dyn(&mut b));
        group.activate(ids[1], &mut as_dyn(&mut b));
        assert!(b[0].is_checked() && b[1].is_checked());

        group.activate(ids[0], &mut as_dyn(&mut b));
        assert!(!b[0].is_checked());
        assert_eq!(group.selected_members(), &[ids[1]]);
    }

    #[test]
    fn test_untagged_widgets_are_ignored() {
        let mut b = buttons(3);
        let ids: Vec<_> = b.iter().map(|w| w.id()).collect();
        let mut group = SelectionGroup::new();
        group.add(&mut b[0]);
        group.add(&mut b[1]);
        b[2].widget_base_mut().set_selected(true);

        group.activate(ids[0], &mut as_dyn(&mut b));
        assert!(b[2].is_checked());
        assert!(!group.activate(ids[2], &mut as_dyn(&mut b)));
    }

    #[test]
    fn test_remove_clears_tag_and_selection() {
        let mut b = buttons(2);
        let ids: Vec<_> = b.iter().map(|w| w.id()).collect();
        let mut group = SelectionGroup::new();
        for w in &mut b {
            group.add(w);
        }
        group.activate(ids[1], &mut as_dyn(&mut b));

        assert!(group.remove(&mut b[1]));
        assert_eq!(b[1].widget_base().group_tag(), None);
        assert_eq!(group.selected(), None);
        assert!(!group.remove(&mut b[1]));
    }

    #[test]
    fn test_selection_changed_signal() {
        let mut b = buttons(2);
        let ids: Vec<_> = b.iter().map(|w| w.id()).collect();
        let mut group = SelectionGroup::new();
        for w in &mut b {
            group.add(w);
        }

        let changes = Arc::new(AtomicI32::new(0));
        let changes_clone = changes.clone();
        group.selection_changed.connect(move |_| {
            changes_clone.fetch_add(1, Ordering::SeqCst);
        });

        group.activate(ids[0], &mut as_dyn(&mut b));
        assert_eq!(changes.load(Ordering::SeqCst), 1);
        // One deselect, one select.
        group.activate(ids[1], &mut as_dyn(&mut b));
        assert_eq!(changes.load(Ordering::SeqCst), 3);
    }
}
