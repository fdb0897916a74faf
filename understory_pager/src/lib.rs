// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pager --heading-base-level=0

//! Understory Pager: a headless paging engine for horizontally paged scroll surfaces.
//!
//! This crate turns the continuous scroll offset of a host scroll surface into
//! discrete page state and page events. Pages have equal width (the viewport
//! width) and are laid out left to right. It provides:
//!
//! - [`PageGeometry`]: closed-form page math (current page, settled page,
//!   page offsets, transition progress).
//! - [`PagedScroll`]: the paging engine. It loads pages from a [`PageSource`],
//!   tracks the current page, navigates (`scroll_to`, `go_forward`,
//!   `go_back`, realignment after a resize) and derives [`PagerEvent`]s from
//!   offset notifications.
//! - [`PagingObserver`]: receives "moved to" and "moving to" events.
//! - [`Passthrough`]: relays every [`ScrollNotifications`] callback to a
//!   secondary listener while driving the pager.
//!
//! It does **not** lay out, animate, render or recognize gestures. Host
//! frameworks are responsible for:
//!
//! - Implementing [`ScrollSurface`] over their scroll view (offset, sizes,
//!   scroll-rect-into-view with optional animation).
//! - Placing the views returned by [`PagedScroll::loaded_pages`] side by side,
//!   one viewport width each.
//! - Forwarding offset-changed, deceleration-ended and animation-ended
//!   notifications to the pager.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_pager::{PageSource, PagedScroll, PagerEvent, ScrollSurface};
//!
//! #[derive(Default)]
//! struct Surface {
//!     offset: Point,
//!     content: Size,
//! }
//!
//! impl ScrollSurface for Surface {
//!     fn viewport_size(&self) -> Size { Size::new(100.0, 80.0) }
//!     fn content_offset(&self) -> Point { self.offset }
//!     fn set_content_offset(&mut self, offset: Point) { self.offset = offset; }
//!     fn content_size(&self) -> Size { self.content }
//!     fn set_content_size(&mut self, size: Size) { self.content = size; }
//!     // A real host would animate; jump straight there instead.
//!     fn scroll_rect_to_visible(&mut self, rect: Rect, _animated: bool) {
//!         self.offset = rect.origin();
//!     }
//! }
//!
//! struct Titles(&'static [&'static str]);
//!
//! impl PageSource for Titles {
//!     type Page = &'static str;
//!     fn page_count(&self) -> usize { self.0.len() }
//!     fn page(&mut self, index: usize) -> &'static str { self.0[index] }
//! }
//!
//! let mut pager = PagedScroll::new(Surface::default());
//! let mut events: Vec<PagerEvent> = Vec::new();
//!
//! pager.reload(&mut Titles(&["intro", "setup", "done"]), &mut events);
//! assert_eq!(pager.current_page_index(), 0);
//! assert_eq!(pager.surface().content_size(), Size::new(300.0, 80.0));
//!
//! // Navigate, then report the landing as the host would.
//! pager.go_forward(true);
//! pager.did_end_scrolling_animation(&mut events);
//! assert_eq!(pager.current_page_index(), 1);
//! assert_eq!(events.last(), Some(&PagerEvent::MovedTo { index: 1, from: Some(0) }));
//! ```
//!
//! ## Event semantics
//!
//! - `moved_to(index, from)` fires unconditionally after a reload that
//!   installed pages, on every offset sample that lands exactly on a page
//!   boundary (with `from == None`), and once per distinct settled page after
//!   deceleration or a scroll animation ends.
//! - `moving_to(from + 1, from, progress)` fires on every offset sample
//!   inside the content bounds, and also outside them when
//!   [`PagerOptions::elastic_scrolling_events`] is set.
//!
//! Page indices are `isize`: during elastic overscroll derived pages may be
//! negative or past the last page, and callers are expected to tolerate that.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod forward;
mod geometry;
mod observer;
mod paged_scroll;
mod source;
mod surface;

pub use forward::{Passthrough, ScrollNotifications};
pub use geometry::{PageGeometry, PageTransition};
pub use observer::{PagerEvent, PagingObserver};
pub use paged_scroll::{
    Alignment, PagedScroll, PagedScrollDebugInfo, PagerOptions, TransitionCoordinator,
};
pub use source::PageSource;
pub use surface::ScrollSurface;
