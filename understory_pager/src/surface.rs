// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host scroll surface a pager is layered over.

use kurbo::{Point, Rect, Size};

/// A scrollable surface provided by the host toolkit.
///
/// The surface owns the scroll offset, which is the source of truth for the
/// current page. The pager reads it, sets it directly for non-animated jumps
/// during reload, and otherwise asks the surface to scroll a rect into view.
///
/// Hosts are expected to forward their scroll notifications to the pager
/// (see [`PagedScroll::did_scroll`](crate::PagedScroll::did_scroll) and the
/// [`ScrollNotifications`](crate::ScrollNotifications) forwarder).
pub trait ScrollSurface {
    /// Size of the visible viewport. Its width is the page width.
    fn viewport_size(&self) -> Size;

    /// Current scroll offset of the content relative to the viewport origin.
    fn content_offset(&self) -> Point;

    /// Moves the content to `offset` immediately, without animation.
    fn set_content_offset(&mut self, offset: Point);

    /// Total scrollable content size.
    fn content_size(&self) -> Size;

    /// Sets the total scrollable content size.
    fn set_content_size(&mut self, size: Size);

    /// Scrolls so that `rect` (in content coordinates) becomes visible.
    ///
    /// Animated scrolls are expected to end with a scrolling-animation-ended
    /// notification once they land.
    fn scroll_rect_to_visible(&mut self, rect: Rect, animated: bool);
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for &mut S {
    fn viewport_size(&self) -> Size {
        (**self).viewport_size()
    }

    fn content_offset(&self) -> Point {
        (**self).content_offset()
    }

    fn set_content_offset(&mut self, offset: Point) {
        (**self).set_content_offset(offset);
    }

    fn content_size(&self) -> Size {
        (**self).content_size()
    }

    fn set_content_size(&mut self, size: Size) {
        (**self).set_content_size(size);
    }

    fn scroll_rect_to_visible(&mut self, rect: Rect, animated: bool) {
        (**self).scroll_rect_to_visible(rect, animated);
    }
}
