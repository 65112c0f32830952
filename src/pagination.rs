//! Pagination Utilities
//!
//! Sliding window of page numbers for list controls.

/// Pages shown on each side of the current one
pub const WINDOW: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageButton {
    pub number: u32,
    pub active: bool,
}

/// Everything a pagination control renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    /// Target of the previous control, `None` when disabled
    pub prev: Option<u32>,
    pub pages: Vec<PageButton>,
    pub next: Option<u32>,
}

/// Build the control for `current` of `pages`
///
/// Returns `None` when there is nothing to paginate. `has_prev`/`has_next`
/// come from the server and decide whether the arrows are enabled.
pub fn pagination_view(current: u32, pages: u32, has_prev: bool, has_next: bool) -> Option<PaginationView> {
    if pages <= 1 {
        return None;
    }
    let current = current.clamp(1, pages);
    let first = current.saturating_sub(WINDOW).max(1);
    let last = current.saturating_add(WINDOW).min(pages);

    Some(PaginationView {
        prev: (has_prev && current > 1).then(|| current - 1),
        pages: (first..=last).map(|n| PageButton { number: n, active: n == current }).collect(),
        next: (has_next && current < pages).then(|| current + 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(view: &PaginationView) -> Vec<u32> {
        view.pages.iter().map(|b| b.number).collect()
    }

    #[test]
    fn test_middle_window() {
        let view = pagination_view(3, 10, true, true).unwrap();
        assert_eq!(numbers(&view), vec![1, 2, 3, 4, 5]);
        assert_eq!(view.prev, Some(2));
        assert_eq!(view.next, Some(4));
        assert!(view.pages[2].active);
        assert_eq!(view.pages.iter().filter(|b| b.active).count(), 1);
    }

    #[test]
    fn test_edges() {
        let first = pagination_view(1, 10, false, true).unwrap();
        assert_eq!(numbers(&first), vec![1, 2, 3]);
        assert_eq!(first.prev, None);

        let last = pagination_view(10, 10, true, false).unwrap();
        assert_eq!(numbers(&last), vec![8, 9, 10]);
        assert_eq!(last.next, None);

        let deep = pagination_view(7, 10, true, true).unwrap();
        assert_eq!(numbers(&deep), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_single_page_has_no_control() {
        assert_eq!(pagination_view(1, 1, false, false), None);
        assert_eq!(pagination_view(1, 0, false, false), None);
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        let view = pagination_view(40, 4, true, false).unwrap();
        assert_eq!(numbers(&view), vec![2, 3, 4]);
        assert!(view.pages.last().unwrap().active);
    }

    #[test]
    fn test_huge_page_counts_do_not_overflow() {
        let view = pagination_view(u32::MAX, u32::MAX, true, true).unwrap();
        assert_eq!(view.next, None);
        assert_eq!(view.prev, Some(u32::MAX - 1));
        assert_eq!(numbers(&view), vec![u32::MAX - 2, u32::MAX - 1, u32::MAX]);

        let near_end = pagination_view(u32::MAX - 1, u32::MAX, true, true).unwrap();
        assert_eq!(near_end.next, Some(u32::MAX));
        assert_eq!(numbers(&near_end).last(), Some(&u32::MAX));
    }
}
