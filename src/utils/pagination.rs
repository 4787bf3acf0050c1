//! Pure pagination math shared by every listing view.
//!
//! `offset` is always a multiple of `limit`; the controls below only ever
//! hand back offsets inside `[0, (total_pages - 1) * limit]`.

/// Pages shown on either side of the current page before collapsing the
/// rest behind an ellipsis.
const WINDOW: u32 = 1;

/// When the page count fits under this cap every page number is shown.
const DISPLAY_CAP: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageControls {
    pub current_page: u32,
    pub total_pages: u32,
    pub limit: u32,
    pub items: Vec<PageItem>,
}

impl PageControls {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Offset for a one-based page number, clamped to the valid range.
    pub fn offset_for_page(&self, page: u32) -> u32 {
        let page = page.clamp(1, self.total_pages.max(1));
        (page - 1) * self.limit
    }
}

pub fn page_controls(total: u32, limit: u32, offset: u32) -> PageControls {
    assert!(limit > 0, "limit must be positive");

    let total_pages = total.div_ceil(limit);
    let current_page = offset / limit + 1;

    PageControls {
        current_page,
        total_pages,
        limit,
        items: page_items(current_page, total_pages),
    }
}

/// Bounded list of page indices to display, windowed around the current
/// page. First and last pages are always present; gaps collapse to a
/// single ellipsis marker. Empty when there is at most one page.
fn page_items(current: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages <= 1 {
        return Vec::new();
    }

    if total_pages <= DISPLAY_CAP {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let lo = current.saturating_sub(WINDOW).max(2);
    let hi = (current + WINDOW).min(total_pages - 1);

    let mut items = vec![PageItem::Page(1)];
    if lo > 2 {
        items.push(PageItem::Ellipsis);
    }
    for page in lo..=hi {
        items.push(PageItem::Page(page));
    }
    if hi < total_pages - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total_pages));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_of_three() {
        let controls = page_controls(25, 10, 0);
        assert_eq!(controls.current_page, 1);
        assert_eq!(controls.total_pages, 3);
        assert!(!controls.has_prev());
        assert!(controls.has_next());
    }

    #[test]
    fn last_page_of_three() {
        let controls = page_controls(25, 10, 20);
        assert_eq!(controls.current_page, 3);
        assert_eq!(controls.total_pages, 3);
        assert!(controls.has_prev());
        assert!(!controls.has_next());
    }

    #[test]
    fn single_page_renders_no_controls() {
        assert!(page_controls(9, 9, 0).items.is_empty());
        assert!(page_controls(0, 10, 0).items.is_empty());
        assert!(page_controls(1, 10, 0).items.is_empty());
    }

    #[test]
    fn small_page_counts_show_every_page() {
        let controls = page_controls(70, 10, 30);
        assert_eq!(
            controls.items,
            (1..=7).map(PageItem::Page).collect::<Vec<_>>()
        );
    }

    #[test]
    fn large_page_counts_collapse_behind_ellipses() {
        let controls = page_controls(200, 10, 90); // page 10 of 20
        assert_eq!(
            controls.items,
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(9),
                PageItem::Page(10),
                PageItem::Page(11),
                PageItem::Ellipsis,
                PageItem::Page(20),
            ]
        );
    }

    #[test]
    fn window_near_the_edges_has_no_leading_ellipsis() {
        let controls = page_controls(200, 10, 10); // page 2 of 20
        assert_eq!(
            controls.items,
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Ellipsis,
                PageItem::Page(20),
            ]
        );

        let controls = page_controls(200, 10, 180); // page 19 of 20
        assert_eq!(
            controls.items,
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(18),
                PageItem::Page(19),
                PageItem::Page(20),
            ]
        );
    }

    #[test]
    fn current_page_stays_in_range_for_aligned_offsets() {
        for total in [0u32, 1, 9, 10, 11, 25, 99, 100] {
            for limit in [1u32, 3, 9, 10] {
                let total_pages = total.div_ceil(limit);
                for page in 0..total_pages.max(1) {
                    let controls = page_controls(total, limit, page * limit);
                    assert_eq!(controls.current_page, page + 1);
                    assert!(controls.current_page >= 1);
                    assert!(controls.current_page <= controls.total_pages.max(1));
                }
            }
        }
    }

    #[test]
    fn offsets_for_pages_are_aligned_and_clamped() {
        let controls = page_controls(25, 10, 0);
        assert_eq!(controls.offset_for_page(1), 0);
        assert_eq!(controls.offset_for_page(3), 20);
        // Out-of-range requests clamp rather than escape the window.
        assert_eq!(controls.offset_for_page(0), 0);
        assert_eq!(controls.offset_for_page(99), 20);
    }
}
