// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::{PageGeometry, PageSource, PagingObserver, ScrollSurface};

/// Options for a [`PagedScroll`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PagerOptions {
    /// Emit [`moving_to`](PagingObserver::moving_to) events while the offset
    /// is outside the content bounds (elastic overscroll).
    ///
    /// Off by default.
    pub elastic_scrolling_events: bool,
}

/// A page captured for later realignment.
///
/// Produced by [`PagedScroll::align_scroll_view`] when a
/// [`TransitionCoordinator`] is involved, and applied with
/// [`PagedScroll::apply_alignment`] from inside the coordinator's animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "an alignment does nothing until it is applied"]
pub struct Alignment {
    page: isize,
}

impl Alignment {
    /// The page captured before the transition began.
    pub fn page(&self) -> isize {
        self.page
    }
}

/// An external animation that a realignment should run alongside.
///
/// Typical coordinators wrap a viewport resize or rotation: they receive the
/// [`Alignment`] before the new size takes effect, and call
/// [`PagedScroll::apply_alignment`] inside their own animation block so the
/// page stays put while the container changes size.
pub trait TransitionCoordinator {
    /// Schedules `alignment` to be applied alongside the transition.
    fn animate_alongside(&mut self, alignment: Alignment);
}

/// Paging engine over a host [`ScrollSurface`].
///
/// `PagedScroll` arranges pages of equal width along X, derives the current
/// page from the surface's scroll offset, and turns offset notifications
/// into [`PagingObserver`] events. It owns the surface handle and the pages
/// produced by the last [`reload`](Self::reload); page sources and observers
/// are borrowed per call.
#[derive(Debug)]
pub struct PagedScroll<S, P> {
    surface: S,
    pages: Vec<P>,
    page_count: usize,
    previous_page: Option<isize>,
    pending_page: Option<isize>,
    has_loaded: bool,
    options: PagerOptions,
}

impl<S: ScrollSurface, P> PagedScroll<S, P> {
    /// Creates an engine over `surface` with default options.
    ///
    /// No pages are loaded until [`reload`](Self::reload) is called.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self::with_options(surface, PagerOptions::default())
    }

    /// Creates an engine over `surface` with the given options.
    #[must_use]
    pub fn with_options(surface: S, options: PagerOptions) -> Self {
        Self {
            surface,
            pages: Vec::new(),
            page_count: 0,
            previous_page: None,
            pending_page: None,
            has_loaded: false,
            options,
        }
    }

    /// Returns the host surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the host surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Returns the current options.
    pub fn options(&self) -> PagerOptions {
        self.options
    }

    /// Replaces the options.
    pub fn set_options(&mut self, options: PagerOptions) {
        self.options = options;
    }

    /// Returns whether moving events are emitted during elastic overscroll.
    pub fn elastic_scrolling_events(&self) -> bool {
        self.options.elastic_scrolling_events
    }

    /// Enables or disables moving events during elastic overscroll.
    pub fn set_elastic_scrolling_events(&mut self, enabled: bool) {
        self.options.elastic_scrolling_events = enabled;
    }

    /// Number of pages installed by the last reload.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Pages installed by the last reload, in index order.
    pub fn loaded_pages(&self) -> &[P] {
        &self.pages
    }

    /// Returns `true` once a reload has installed at least one page.
    pub fn has_loaded(&self) -> bool {
        self.has_loaded
    }

    /// Page geometry for the current viewport width.
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::new(self.surface.viewport_size().width)
    }

    fn offset_x(&self) -> f64 {
        self.surface.content_offset().x
    }

    /// Rebuilds the pages from `source` and resynchronizes observers.
    ///
    /// The previous pages are dropped, then the source is asked for its
    /// count and for each page in order. The content size becomes one
    /// viewport width per page.
    ///
    /// When pages were installed, a page requested through
    /// [`set_current_page_index`](Self::set_current_page_index) before the
    /// first load is jumped to without animation, and `observer` always
    /// receives a [`moved_to`](PagingObserver::moved_to) for the resulting
    /// page so listeners agree with the new data.
    ///
    /// # Panics
    ///
    /// Panics if `source` is an absent source (`None`) that is asked for a
    /// page view.
    pub fn reload<D, O>(&mut self, mut source: D, mut observer: O)
    where
        D: PageSource<Page = P>,
        O: PagingObserver,
    {
        self.pages.clear();
        let count = source.page_count();
        self.pages.reserve(count);
        for index in 0..count {
            self.pages.push(source.page(index));
        }
        self.page_count = count;

        let geometry = self.geometry();
        let viewport = self.surface.viewport_size();
        self.surface
            .set_content_size(Size::new(geometry.content_width(count), viewport.height));

        if count == 0 {
            tracing::debug!("pager reloaded without pages");
            return;
        }

        if let Some(page) = self.pending_page.take() {
            self.surface
                .set_content_offset(Point::new(geometry.page_offset(page), 0.0));
        }
        self.has_loaded = true;

        let current = self.current_page_index();
        tracing::debug!(page_count = count, current, "pager reloaded");
        observer.moved_to(current, self.previous_page);
        self.previous_page = Some(current);
    }

    /// Index of the page nearest to the current offset.
    ///
    /// Returns `0` while the viewport has no width. Under elastic overscroll
    /// the result may fall outside `0..page_count`.
    pub fn current_page_index(&self) -> isize {
        self.geometry().current_page_index(self.offset_x())
    }

    /// Navigates to `index`.
    ///
    /// Once loaded this is an animated [`scroll_to`](Self::scroll_to);
    /// before that, the index is remembered and applied by the next
    /// [`reload`](Self::reload) that installs pages.
    pub fn set_current_page_index(&mut self, index: isize) {
        if self.has_loaded {
            self.scroll_to(index, true);
        } else {
            tracing::debug!(index, "pager not loaded, deferring page");
            self.pending_page = Some(index);
        }
    }

    /// Asks the surface to bring page `index` into view.
    ///
    /// The index is not clamped; out-of-range pages are left to the
    /// surface's own bounce behavior.
    pub fn scroll_to(&mut self, index: isize, animated: bool) {
        let geometry = self.geometry();
        let origin = Point::new(geometry.page_offset(index), 0.0);
        let rect = Rect::from_origin_size(origin, self.surface.viewport_size());
        tracing::debug!(index, animated, "pager scrolling to page");
        self.surface.scroll_rect_to_visible(rect, animated);
    }

    /// Realigns the view on its current page.
    ///
    /// Without a coordinator this scrolls to the current page with
    /// animation. With one, the current page is captured now, before any
    /// pending resize takes effect, and handed to the coordinator as an
    /// [`Alignment`] to apply alongside its own animation.
    pub fn align_scroll_view(&mut self, coordinator: Option<&mut dyn TransitionCoordinator>) {
        let page = self.current_page_index();
        match coordinator {
            Some(coordinator) => coordinator.animate_alongside(Alignment { page }),
            None => self.scroll_to(page, true),
        }
    }

    /// Applies a captured [`Alignment`] without animation.
    pub fn apply_alignment(&mut self, alignment: Alignment) {
        self.scroll_to(alignment.page, false);
    }

    /// Returns `true` if a following page can be navigated to.
    ///
    /// The check is `current + 1 <= page_count - 1`.
    pub fn can_go_forward(&self) -> bool {
        let next = self.current_page_index().saturating_add(1);
        let last = self.page_count as isize - 1;
        next <= last
    }

    /// Returns `true` if a preceding page can be navigated to.
    pub fn can_go_back(&self) -> bool {
        let previous = self.current_page_index().saturating_sub(1);
        previous >= 0
    }

    /// Scrolls one page forward if [`can_go_forward`](Self::can_go_forward).
    pub fn go_forward(&mut self, animated: bool) {
        if self.can_go_forward() {
            self.scroll_to(self.current_page_index() + 1, animated);
        }
    }

    /// Scrolls one page back if [`can_go_back`](Self::can_go_back).
    pub fn go_back(&mut self, animated: bool) {
        if self.can_go_back() {
            self.scroll_to(self.current_page_index() - 1, animated);
        }
    }

    /// Derives events from an offset-changed notification.
    ///
    /// - On an exact page boundary, emits `moved_to(page, None)`. This fires
    ///   for every aligned sample and is not de-duplicated.
    /// - Emits `moving_to(from + 1, from, progress)` while the offset lies
    ///   within the content bounds, or always when elastic events are
    ///   enabled.
    ///
    /// Does nothing while the viewport has no width.
    pub fn did_scroll<O: PagingObserver>(&mut self, mut observer: O) {
        let geometry = self.geometry();
        let x = self.offset_x();
        let Some(transition) = geometry.transition(x) else {
            return;
        };
        tracing::trace!(
            offset = x,
            from = transition.from,
            progress = transition.progress,
            "pager scrolled"
        );

        if geometry.is_page_aligned(x) {
            observer.moved_to(transition.from, None);
        }

        let max_offset = self.surface.content_size().width - geometry.page_width();
        let in_bounds = x >= 0.0 && x <= max_offset;
        if in_bounds || self.options.elastic_scrolling_events {
            observer.moving_to(transition.to, transition.from, transition.progress);
        }
    }

    /// Handles the end of user-driven deceleration.
    pub fn did_end_decelerating<O: PagingObserver>(&mut self, observer: O) {
        self.settle(observer);
    }

    /// Handles the end of a programmatic scroll animation.
    pub fn did_end_scrolling_animation<O: PagingObserver>(&mut self, observer: O) {
        self.settle(observer);
    }

    fn settle<O: PagingObserver>(&mut self, mut observer: O) {
        let page = self.geometry().settled_page(self.offset_x());
        if self.previous_page != Some(page) {
            tracing::trace!(page, previous = ?self.previous_page, "pager settled on new page");
            observer.moved_to(page, self.previous_page);
        }
        self.previous_page = Some(page);
    }

    /// Snapshot of the engine state for debugging and inspection.
    pub fn debug_info(&self) -> PagedScrollDebugInfo {
        PagedScrollDebugInfo {
            page_count: self.page_count,
            page_width: self.geometry().page_width(),
            content_offset: self.surface.content_offset(),
            content_size: self.surface.content_size(),
            current_page: self.current_page_index(),
            previous_page: self.previous_page,
            pending_page: self.pending_page,
            has_loaded: self.has_loaded,
            options: self.options,
        }
    }
}

/// Debug snapshot of a [`PagedScroll`] state.
#[derive(Clone, Debug, PartialEq)]
pub struct PagedScrollDebugInfo {
    /// Pages installed by the last reload.
    pub page_count: usize,
    /// Width of one page (the viewport width).
    pub page_width: f64,
    /// Surface scroll offset.
    pub content_offset: Point,
    /// Surface content size.
    pub content_size: Size,
    /// Page nearest to the offset.
    pub current_page: isize,
    /// Last page a moved-to event was committed for.
    pub previous_page: Option<isize>,
    /// Page waiting for the first load.
    pub pending_page: Option<isize>,
    /// Whether a reload has installed pages.
    pub has_loaded: bool,
    /// Active options.
    pub options: PagerOptions,
}
