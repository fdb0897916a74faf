// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Pager: a paged scroll container controller.
//!
//! [`PagedScrollController`] is the screen-level convenience wrapper around an
//! [`understory_pager::PagedScroll`]. It owns the engine, an optional page
//! source slot and an optional [`PageIndicator`], keeps the indicator in sync
//! with the engine, and exposes the same navigation operations.
//!
//! Application observers still receive every page event; the controller only
//! intercepts "moved to" events long enough to update the indicator.

mod indicator;

pub use indicator::PageIndicator;

use core::fmt;

use understory_pager::{
    PageSource, PagedScroll, PagerOptions, PagingObserver, Passthrough, ScrollNotifications,
    ScrollSurface, TransitionCoordinator,
};

/// Screen-level owner of a [`PagedScroll`] and its page indicator.
pub struct PagedScrollController<S, D: PageSource, I, O = ()> {
    pager: PagedScroll<S, D::Page>,
    source: Option<D>,
    indicator: Option<I>,
    observer: O,
}

impl<S, D, I, O> PagedScrollController<S, D, I, O>
where
    S: ScrollSurface,
    D: PageSource,
    I: PageIndicator,
    O: PagingObserver,
{
    /// Creates a controller over `surface` that reports page events to
    /// `observer`.
    ///
    /// Neither a source nor an indicator is attached yet.
    pub fn new(surface: S, observer: O) -> Self {
        Self {
            pager: PagedScroll::new(surface),
            source: None,
            indicator: None,
            observer,
        }
    }

    /// Attaches `source`, to be used from the next [`reload`](Self::reload).
    #[must_use]
    pub fn with_source(mut self, source: D) -> Self {
        self.source = Some(source);
        self
    }

    /// Returns the engine.
    pub fn pager(&self) -> &PagedScroll<S, D::Page> {
        &self.pager
    }

    /// Returns the engine mutably.
    pub fn pager_mut(&mut self) -> &mut PagedScroll<S, D::Page> {
        &mut self.pager
    }

    /// Returns the page source, if one is attached.
    pub fn source(&self) -> Option<&D> {
        self.source.as_ref()
    }

    /// Replaces the page source, returning the old one.
    ///
    /// Call [`reload`](Self::reload) afterwards to show the new pages.
    pub fn set_source(&mut self, source: Option<D>) -> Option<D> {
        core::mem::replace(&mut self.source, source)
    }

    /// Returns the application observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the application observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Returns the attached page indicator.
    pub fn indicator(&self) -> Option<&I> {
        self.indicator.as_ref()
    }

    /// Attaches (or detaches, with `None`) a page indicator.
    ///
    /// A newly attached indicator is immediately updated with the current
    /// page and page count. The previous indicator is returned and no longer
    /// receives updates.
    pub fn set_indicator(&mut self, indicator: Option<I>) -> Option<I> {
        let old = core::mem::replace(&mut self.indicator, indicator);
        self.sync_indicator();
        old
    }

    /// Handles a tap on the page indicator that selected `index`.
    pub fn indicator_tapped(&mut self, index: isize) {
        tracing::debug!(index, "page indicator tapped");
        self.pager.scroll_to(index, true);
    }

    /// Reloads pages from the attached source and resyncs the indicator.
    ///
    /// With no source attached the pager shows no pages.
    pub fn reload(&mut self) {
        let mut relay = Relay {
            indicator: self.indicator.as_mut(),
            observer: &mut self.observer,
        };
        self.pager.reload(self.source.as_mut(), &mut relay);
        self.sync_indicator();
    }

    /// Keeps the current page in place across a container size transition.
    ///
    /// Call this when the hosting view is about to change size (for example
    /// on rotation), passing the coordinator that drives the transition.
    pub fn view_will_transition(&mut self, coordinator: &mut dyn TransitionCoordinator) {
        self.pager.align_scroll_view(Some(coordinator));
    }

    /// Realigns the pager on its current page.
    pub fn align_scroll_view(&mut self, coordinator: Option<&mut dyn TransitionCoordinator>) {
        self.pager.align_scroll_view(coordinator);
    }

    /// Index of the current page.
    pub fn current_page_index(&self) -> isize {
        self.pager.current_page_index()
    }

    /// Navigates to `index`, or defers it until the first reload.
    pub fn set_current_page_index(&mut self, index: isize) {
        self.pager.set_current_page_index(index);
    }

    /// Number of loaded pages.
    pub fn page_count(&self) -> usize {
        self.pager.page_count()
    }

    /// Scrolls to page `index`.
    pub fn scroll_to(&mut self, index: isize, animated: bool) {
        self.pager.scroll_to(index, animated);
    }

    /// See [`PagedScroll::can_go_forward`].
    pub fn can_go_forward(&self) -> bool {
        self.pager.can_go_forward()
    }

    /// See [`PagedScroll::can_go_back`].
    pub fn can_go_back(&self) -> bool {
        self.pager.can_go_back()
    }

    /// Scrolls forward one page, if possible.
    pub fn go_forward(&mut self, animated: bool) {
        self.pager.go_forward(animated);
    }

    /// Scrolls back one page, if possible.
    pub fn go_back(&mut self, animated: bool) {
        self.pager.go_back(animated);
    }

    /// Returns whether moving events are emitted during elastic overscroll.
    pub fn elastic_scrolling_events(&self) -> bool {
        self.pager.elastic_scrolling_events()
    }

    /// Enables or disables moving events during elastic overscroll.
    pub fn set_elastic_scrolling_events(&mut self, enabled: bool) {
        self.pager.set_elastic_scrolling_events(enabled);
    }

    /// Replaces the pager options.
    pub fn set_options(&mut self, options: PagerOptions) {
        self.pager.set_options(options);
    }

    /// Returns a notification sink for the host surface.
    ///
    /// Every notification is relayed to `receiver`; offset, deceleration and
    /// animation notifications also drive the pager, the indicator and the
    /// application observer.
    pub fn notifications<R: ScrollNotifications>(
        &mut self,
        receiver: R,
    ) -> impl ScrollNotifications {
        let relay = Relay {
            indicator: self.indicator.as_mut(),
            observer: &mut self.observer,
        };
        Passthrough::new(&mut self.pager, relay, receiver)
    }

    fn sync_indicator(&mut self) {
        let current = self.pager.current_page_index();
        let count = self.pager.page_count();
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.set_current_page(current);
            indicator.set_page_count(count);
        }
    }
}

impl<S, D, I, O> fmt::Debug for PagedScrollController<S, D, I, O>
where
    S: ScrollSurface,
    D: PageSource,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagedScrollController")
            .field("page_count", &self.pager.page_count())
            .field("current_page", &self.pager.current_page_index())
            .field("has_source", &self.source.is_some())
            .field("has_indicator", &self.indicator.is_some())
            .finish_non_exhaustive()
    }
}

/// Updates the indicator on page moves before forwarding to the observer.
struct Relay<'a, I, O> {
    indicator: Option<&'a mut I>,
    observer: &'a mut O,
}

impl<I: PageIndicator, O: PagingObserver> PagingObserver for Relay<'_, I, O> {
    fn moved_to(&mut self, index: isize, from: Option<isize>) {
        if let Some(indicator) = self.indicator.as_deref_mut() {
            indicator.set_current_page(index);
        }
        self.observer.moved_to(index, from);
    }

    fn moving_to(&mut self, index: isize, from: isize, progress: f64) {
        self.observer.moving_to(index, from, progress);
    }
}
