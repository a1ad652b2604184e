//! Integration tests for the pagination window and the pager widget.

use std::sync::Arc;

use horizon_facet::prelude::*;
use horizon_facet::widget::widgets::PageChange;
use horizon_facet::widget::{PageSlot, PaginationWindow, normalize_window_size};
use parking_lot::Mutex;

fn pages(first: std::ops::RangeInclusive<usize>) -> Vec<usize> {
    first.collect()
}

#[test]
fn first_page_of_a_thousand() {
    let window = PaginationWindow::compute(1000, 1, 7);
    let mut expected = pages(1..=6);
    expected.push(1000);
    assert_eq!(window.page_numbers(), expected);
    assert_eq!(
        &window.slots()[6..],
        &[
            PageSlot::JumpForward { amount: 5 },
            PageSlot::Page {
                number: 1000,
                active: false
            }
        ]
    );
    assert!(window.slots()[0].is_active());
}

#[test]
fn middle_page_of_a_thousand() {
    let window = PaginationWindow::compute(1000, 500, 7);
    assert_eq!(
        window.slots(),
        &[
            PageSlot::Page { number: 1, active: false },
            PageSlot::JumpBack { amount: 5 },
            PageSlot::Page { number: 498, active: false },
            PageSlot::Page { number: 499, active: false },
            PageSlot::Page { number: 500, active: true },
            PageSlot::Page { number: 501, active: false },
            PageSlot::Page { number: 502, active: false },
            PageSlot::JumpForward { amount: 5 },
            PageSlot::Page { number: 1000, active: false },
        ]
    );
}

#[test]
fn last_page_of_a_thousand() {
    let window = PaginationWindow::compute(1000, 1000, 7);
    let mut expected = vec![1];
    expected.extend(995..=1000);
    assert_eq!(window.page_numbers(), expected);
    assert_eq!(window.slots()[1], PageSlot::JumpBack { amount: 5 });
    assert!(window.slots().last().is_some_and(PageSlot::is_active));
}

#[test]
fn no_pages_shows_a_single_active_page() {
    let window = PaginationWindow::compute(0, 3, 7);
    assert_eq!(window.slots(), &[PageSlot::Page { number: 1, active: true }]);
    assert_eq!(window.active_page(), 1);
}

#[test]
fn small_totals_show_every_page() {
    let window = PaginationWindow::compute(9, 5, 7);
    assert_eq!(window.page_numbers(), pages(1..=9));
    assert!(
        window
            .slots()
            .iter()
            .all(|slot| matches!(slot, PageSlot::Page { .. }))
    );
}

#[test]
fn window_size_coercion() {
    assert_eq!(normalize_window_size(4), 5);
    assert_eq!(normalize_window_size(6), 5);
    assert_eq!(normalize_window_size(14), 13);
    assert_eq!(normalize_window_size(-3), 5);
    assert_eq!(normalize_window_size(9), 9);
    assert_eq!(normalize_window_size(i64::MIN), 5);
    assert_eq!(normalize_window_size(i64::MAX), 13);

    let window = PaginationWindow::compute(1000, 500, 6);
    assert_eq!(window.window_size(), 5);
    assert_eq!(window.jump_amount(), 3);
}

#[test]
fn active_page_is_clamped() {
    let window = PaginationWindow::compute(40, 99, 7);
    assert_eq!(window.active_page(), 40);
    let window = PaginationWindow::compute(40, 0, 7);
    assert_eq!(window.active_page(), 1);
}

#[test]
fn compute_is_deterministic() {
    for total in [0, 1, 9, 10, 50, 1000] {
        for active in [1, 5, 25, 500, 1000] {
            for size in [5, 7, 13] {
                assert_eq!(
                    PaginationWindow::compute(total, active, size),
                    PaginationWindow::compute(total, active, size)
                );
            }
        }
    }
}

#[test]
fn jump_slots_move_relative_to_the_active_page() {
    let window = PaginationWindow::compute(1000, 500, 7);
    assert_eq!(window.target(PageSlot::JumpBack { amount: 5 }), 495);
    assert_eq!(window.target(PageSlot::JumpForward { amount: 5 }), 505);
    assert_eq!(window.target(PageSlot::Next), 501);

    let window = PaginationWindow::compute(1000, 998, 7);
    assert_eq!(window.target(PageSlot::JumpForward { amount: 5 }), 1000);
}

#[test]
fn pager_reports_the_data_window() {
    let theme = Theme::light();
    let mut pager = Pagination::new(&theme);
    let changes: Arc<Mutex<Vec<PageChange>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = changes.clone();
    pager.page_changed.connect(move |change| sink.lock().push(change.clone()));

    pager.set_total_items(45);
    pager.set_active_page(3);
    pager.set_active_page(3);

    let changes = changes.lock();
    let last = changes.last().cloned();
    assert_eq!(
        last,
        Some(PageChange {
            data_window: 40..45,
            active_page: 3,
            item_count: 5,
        })
    );
    assert_eq!(changes.iter().filter(|c| c.active_page == 3).count(), 1);
}

#[test]
fn extreme_window_sizes_still_render() {
    for requested in [i64::MIN, i64::MIN + 1, -1, 0, i64::MAX - 1, i64::MAX] {
        let window = PaginationWindow::compute(1000, 500, requested);
        assert!((5..=13).contains(&window.window_size()));
        assert_eq!(window.slots().len(), window.window_size() + 2);
    }
}
