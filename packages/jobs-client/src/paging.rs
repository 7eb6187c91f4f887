//! Page-number window for pagination controls.

/// Windows with at most this many pages list every page.
pub const MAX_VISIBLE_PAGES: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Page buttons to render for `current` out of `total_pages`.
///
/// Up to seven pages are all shown. Beyond that the first and last pages are
/// always present, with the window anchored to the start (pages 1-4), the end
/// (last four) or centred on `current` with ellipses on both sides.
pub fn page_window(current: u32, total_pages: u32) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(Page).collect();
    }

    let mut items = Vec::with_capacity(MAX_VISIBLE_PAGES as usize);
    if current <= 3 {
        items.extend((1..=4).map(Page));
        items.push(Ellipsis);
        items.push(Page(total_pages));
    } else if current >= total_pages - 2 {
        items.push(Page(1));
        items.push(Ellipsis);
        items.extend((total_pages - 3..=total_pages).map(Page));
    } else {
        items.push(Page(1));
        items.push(Ellipsis);
        items.extend((current - 1..=current + 1).map(Page));
        items.push(Ellipsis);
        items.push(Page(total_pages));
    }
    items
}

/// Controls render whenever there is at least one page; on a single page
/// both Previous and Next are disabled.
pub fn shows_controls(total_pages: u32) -> bool {
    total_pages > 0
}

pub fn has_previous(current: u32) -> bool {
    current > 1
}

pub fn has_next(current: u32, total_pages: u32) -> bool {
    current < total_pages
}
