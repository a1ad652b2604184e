//! Page-button windowing for pagination strips.
//!
//! Given the number of pages, the active page and a window size,
//! [`PaginationWindow::compute`] decides which page buttons a bounded strip
//! shows and where the pages it hides are folded into jump buttons.
//!
//! # Example
//!
//! ```
//! use horizon_facet::widget::{PageSlot, PaginationWindow};
//!
//! let window = PaginationWindow::compute(1000, 1, 7);
//! assert_eq!(window.page_numbers(), vec![1, 2, 3, 4, 5, 6, 1000]);
//! assert_eq!(window.slots()[6], PageSlot::JumpForward { amount: 5 });
//! ```

use std::fmt;

/// Smallest window size.
pub const MIN_WINDOW_SIZE: usize = 5;

/// Largest window size.
pub const MAX_WINDOW_SIZE: usize = 13;

/// Window size used when none is configured.
pub const DEFAULT_WINDOW_SIZE: usize = 7;

/// Coerce a requested window size to an odd value in
/// `[MIN_WINDOW_SIZE, MAX_WINDOW_SIZE]`.
///
/// The value is clamped first and an even result rounds down to the next
/// odd value, so 4 becomes 5, 6 becomes 5 and 14 becomes 13.
pub fn normalize_window_size(requested: i64) -> usize {
    let clamped = requested.clamp(MIN_WINDOW_SIZE as i64, MAX_WINDOW_SIZE as i64) as usize;
    let odd = if clamped % 2 == 0 { clamped - 1 } else { clamped };
    odd.max(MIN_WINDOW_SIZE)
}

/// One button of a pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSlot {
    /// A numbered page button.
    Page { number: usize, active: bool },
    /// Ellipsis that moves back by `amount` pages.
    JumpBack { amount: usize },
    /// Ellipsis that moves forward by `amount` pages.
    JumpForward { amount: usize },
    /// Step to the previous page.
    Previous,
    /// Step to the next page.
    Next,
}

impl PageSlot {
    /// The caption a strip draws for this slot.
    pub fn label(&self) -> String {
        match self {
            PageSlot::Page { number, .. } => number.to_string(),
            PageSlot::JumpBack { .. } | PageSlot::JumpForward { .. } => "...".to_owned(),
            PageSlot::Previous => "<".to_owned(),
            PageSlot::Next => ">".to_owned(),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, PageSlot::Page { active: true, .. })
    }
}

impl fmt::Display for PageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSlot::JumpBack { .. } => f.write_str("«"),
            PageSlot::JumpForward { .. } => f.write_str("»"),
            other => f.write_str(&other.label()),
        }
    }
}

/// The visible slots for one `(total_pages, active_page, window_size)`.
///
/// Recomputed from scratch on every change; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationWindow {
    total_pages: usize,
    active_page: usize,
    window_size: usize,
    slots: Vec<PageSlot>,
}

impl PaginationWindow {
    /// Compute the window.
    ///
    /// `active_page` is clamped into `[1, total_pages]` (1 when there are no
    /// pages) and `window_size` is normalized with
    /// [`normalize_window_size`].
    ///
    /// The rules, in order:
    ///
    /// 1. No pages: a single active page 1.
    /// 2. At most `window_size + 2` pages: every page.
    /// 3. Active page near the start: the first `window_size / 2 + 3`
    ///    pages, a forward jump and the last page.
    /// 4. Active page near the end: page 1, a backward jump and the last
    ///    `window_size / 2 + 3` pages.
    /// 5. Otherwise: page 1, a backward jump, `window_size - 2` pages
    ///    centred on the active page, a forward jump and the last page.
    pub fn compute(total_pages: usize, active_page: usize, window_size: i64) -> Self {
        let window_size = normalize_window_size(window_size);
        let active_page = clamp_active_page(active_page, total_pages);
        let jump = window_size - 2;

        let page = |number: usize| PageSlot::Page {
            number,
            active: number == active_page,
        };

        let mut slots = Vec::with_capacity(window_size + 2);
        if total_pages == 0 {
            slots.push(page(1));
        } else if total_pages <= window_size + 2 {
            slots.extend((1..=total_pages).map(page));
        } else {
            let left_show = window_size / 2 + 3;
            let right_show = total_pages - (window_size / 2 + 2);

            if active_page <= left_show {
                slots.extend((1..=left_show).map(page));
                slots.push(PageSlot::JumpForward { amount: jump });
                slots.push(page(total_pages));
            } else if active_page >= right_show {
                slots.push(page(1));
                slots.push(PageSlot::JumpBack { amount: jump });
                slots.extend((right_show..=total_pages).map(page));
            } else {
                let start = active_page - jump / 2;
                slots.push(page(1));
                slots.push(PageSlot::JumpBack { amount: jump });
                slots.extend((start..start + jump).map(page));
                slots.push(PageSlot::JumpForward { amount: jump });
                slots.push(page(total_pages));
            }
        }

        Self {
            total_pages,
            active_page,
            window_size,
            slots,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// The active page after clamping.
    pub fn active_page(&self) -> usize {
        self.active_page
    }

    /// The window size after normalization.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Pages moved by a jump slot.
    pub fn jump_amount(&self) -> usize {
        self.window_size - 2
    }

    pub fn slots(&self) -> &[PageSlot] {
        &self.slots
    }

    /// The page numbers shown, in order.
    pub fn page_numbers(&self) -> Vec<usize> {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                PageSlot::Page { number, .. } => Some(*number),
                _ => None,
            })
            .collect()
    }

    /// The page that activating `slot` leads to.
    ///
    /// Numbered slots go to their literal page; jumps and steps move
    /// relative to the active page, clamped into range.
    pub fn target(&self, slot: PageSlot) -> usize {
        let target = match slot {
            PageSlot::Page { number, .. } => number,
            PageSlot::JumpBack { amount } => self.active_page.saturating_sub(amount),
            PageSlot::JumpForward { amount } => self.active_page.saturating_add(amount),
            PageSlot::Previous => self.active_page.saturating_sub(1),
            PageSlot::Next => self.active_page.saturating_add(1),
        };
        clamp_active_page(target, self.total_pages)
    }
}

/// Clamp a page number into `[1, total_pages]`, or 1 without pages.
pub fn clamp_active_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jumps(window: &PaginationWindow) -> (bool, bool) {
        let back = window
            .slots()
            .iter()
            .any(|s| matches!(s, PageSlot::JumpBack { .. }));
        let forward = window
            .slots()
            .iter()
            .any(|s| matches!(s, PageSlot::JumpForward { .. }));
        (back, forward)
    }

    #[test]
    fn window_size_normalization() {
        assert_eq!(normalize_window_size(4), 5);
        assert_eq!(normalize_window_size(6), 5);
        assert_eq!(normalize_window_size(14), 13);
        assert_eq!(normalize_window_size(9), 9);
        assert_eq!(normalize_window_size(0), 5);
        assert_eq!(normalize_window_size(-7), 5);
        assert_eq!(normalize_window_size(99), 13);
        assert_eq!(normalize_window_size(i64::MIN), 5);
        assert_eq!(normalize_window_size(i64::MAX), 13);
        assert_eq!(normalize_window_size(i64::MAX - 1), 13);
    }

    #[test]
    fn zero_pages_is_single_active_page() {
        for active in [0, 1, 5] {
            let window = PaginationWindow::compute(0, active, 7);
            assert_eq!(
                window.slots(),
                &[PageSlot::Page {
                    number: 1,
                    active: true
                }]
            );
            assert_eq!(window.active_page(), 1);
        }
    }

    #[test]
    fn small_totals_show_every_page() {
        let window = PaginationWindow::compute(9, 5, 7);
        assert_eq!(window.page_numbers(), (1..=9).collect::<Vec<_>>());
        assert_eq!(jumps(&window), (false, false));

        let window = PaginationWindow::compute(10, 5, 7);
        assert_eq!(jumps(&window), (false, true));
    }

    #[test]
    fn active_near_start() {
        let window = PaginationWindow::compute(1000, 6, 7);
        assert_eq!(window.page_numbers(), vec![1, 2, 3, 4, 5, 6, 1000]);
        assert!(window.slots()[5].is_active());
    }

    #[test]
    fn active_near_end() {
        let window = PaginationWindow::compute(1000, 1000, 7);
        assert_eq!(window.page_numbers(), vec![1, 995, 996, 997, 998, 999, 1000]);
        assert_eq!(window.slots()[1], PageSlot::JumpBack { amount: 5 });
        assert_eq!(jumps(&window), (true, false));
    }

    #[test]
    fn interior_run_is_centred() {
        let window = PaginationWindow::compute(1000, 500, 7);
        assert_eq!(window.page_numbers(), vec![1, 498, 499, 500, 501, 502, 1000]);
        assert_eq!(jumps(&window), (true, true));
        assert_eq!(window.slots().len(), 9);

        let window = PaginationWindow::compute(1000, 500, 13);
        let numbers = window.page_numbers();
        assert_eq!(numbers.len(), 2 + 11);
        assert_eq!(numbers[1..].first(), Some(&495));
    }

    #[test]
    fn active_page_is_clamped() {
        assert_eq!(PaginationWindow::compute(20, 0, 7).active_page(), 1);
        assert_eq!(PaginationWindow::compute(20, 99, 7).active_page(), 20);
    }

    #[test]
    fn exactly_one_active_slot() {
        for total in [1, 8, 9, 10, 50] {
            for active in 1..=total {
                let window = PaginationWindow::compute(total, active, 7);
                let active_slots: Vec<_> =
                    window.slots().iter().filter(|s| s.is_active()).collect();
                assert_eq!(active_slots.len(), 1, "total {total} active {active}");
                assert!(window.slots().len() <= window.window_size() + 2);
            }
        }
    }

    #[test]
    fn jump_targets_are_relative() {
        let window = PaginationWindow::compute(100, 50, 7);
        assert_eq!(window.target(PageSlot::JumpBack { amount: 5 }), 45);
        assert_eq!(window.target(PageSlot::JumpForward { amount: 5 }), 55);
        assert_eq!(
            window.target(PageSlot::Page {
                number: 100,
                active: false
            }),
            100
        );

        let near_start = PaginationWindow::compute(100, 3, 7);
        assert_eq!(near_start.target(PageSlot::JumpBack { amount: 5 }), 1);
        assert_eq!(near_start.target(PageSlot::Previous), 2);
        let at_end = PaginationWindow::compute(100, 100, 7);
        assert_eq!(at_end.target(PageSlot::Next), 100);
    }
}
