// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page sources: where the pager gets its page count and page views.

/// Supplies the pages shown by a [`PagedScroll`](crate::PagedScroll).
///
/// The page type is whatever the host uses for a page's content (a widget
/// id, a view handle, a display-list node, ...). The pager stores the pages
/// produced by the last reload and hands them back via
/// [`PagedScroll::loaded_pages`](crate::PagedScroll::loaded_pages); it never
/// inspects them.
///
/// A source must be deterministic for a single reload: `page_count` is read
/// once, then `page` is called exactly once for each index in
/// `0..page_count`, in order.
pub trait PageSource {
    /// Host-defined page content.
    type Page;

    /// Returns the number of pages.
    fn page_count(&self) -> usize;

    /// Returns the content for page `index`.
    fn page(&mut self, index: usize) -> Self::Page;
}

impl<S: PageSource + ?Sized> PageSource for &mut S {
    type Page = S::Page;

    fn page_count(&self) -> usize {
        (**self).page_count()
    }

    fn page(&mut self, index: usize) -> Self::Page {
        (**self).page(index)
    }
}

/// An unset source slot.
///
/// An absent source reports no pages. Asking it for a page view is a
/// configuration error.
impl<S: PageSource> PageSource for Option<S> {
    type Page = S::Page;

    fn page_count(&self) -> usize {
        self.as_ref().map_or(0, S::page_count)
    }

    /// # Panics
    ///
    /// Panics if no source is set.
    fn page(&mut self, index: usize) -> Self::Page {
        match self {
            Some(source) => source.page(index),
            None => panic!("paged scroll requires a page source that can provide page views"),
        }
    }
}
