// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Passthrough forwarding of host scroll notifications.
//!
//! A paged surface still produces every ordinary scroll notification, and
//! other parts of an application may already listen for them. [`Passthrough`]
//! sits between the host and such a listener: each notification is relayed
//! to the secondary receiver first, and the paging-relevant ones then drive
//! the [`PagedScroll`].
//!
//! Zoom notifications are not part of [`ScrollNotifications`]; paged
//! surfaces do not zoom.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_pager::{PagedScroll, PagerEvent, Passthrough, ScrollNotifications, ScrollSurface};
//!
//! # #[derive(Default)]
//! # struct Surface { offset: Point, content: Size }
//! # impl ScrollSurface for Surface {
//! #     fn viewport_size(&self) -> Size { Size::new(100.0, 100.0) }
//! #     fn content_offset(&self) -> Point { self.offset }
//! #     fn set_content_offset(&mut self, offset: Point) { self.offset = offset; }
//! #     fn content_size(&self) -> Size { self.content }
//! #     fn set_content_size(&mut self, size: Size) { self.content = size; }
//! #     fn scroll_rect_to_visible(&mut self, _rect: Rect, _animated: bool) {}
//! # }
//! #[derive(Default)]
//! struct DragLog(u32);
//!
//! impl ScrollNotifications for DragLog {
//!     fn will_begin_dragging(&mut self) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut pager = PagedScroll::<_, ()>::new(Surface::default());
//! let mut events: Vec<PagerEvent> = Vec::new();
//! let mut log = DragLog::default();
//!
//! let mut notifications = Passthrough::new(&mut pager, &mut events, &mut log);
//! notifications.will_begin_dragging();
//! notifications.did_end_decelerating();
//!
//! assert_eq!(log.0, 1);
//! assert_eq!(events, [PagerEvent::MovedTo { index: 0, from: None }]);
//! ```

use kurbo::{Point, Vec2};

use crate::{PagedScroll, PagingObserver, ScrollSurface};

/// Scroll notifications delivered by a host surface.
///
/// Every method defaults to doing nothing (and
/// [`should_scroll_to_top`](Self::should_scroll_to_top) to allowing it), so
/// listeners override only what they use.
pub trait ScrollNotifications {
    /// The content offset changed.
    fn did_scroll(&mut self) {}

    /// The user started dragging the content.
    fn will_begin_dragging(&mut self) {}

    /// The user is about to lift their finger.
    ///
    /// `target_offset` is where the surface intends to come to rest and may
    /// be adjusted.
    fn will_end_dragging(&mut self, velocity: Vec2, target_offset: &mut Point) {
        let _ = (velocity, target_offset);
    }

    /// The user stopped dragging.
    fn did_end_dragging(&mut self, will_decelerate: bool) {
        let _ = will_decelerate;
    }

    /// The content started decelerating after a drag.
    fn will_begin_decelerating(&mut self) {}

    /// Deceleration finished and the content is at rest.
    fn did_end_decelerating(&mut self) {}

    /// A programmatic scroll animation finished.
    fn did_end_scrolling_animation(&mut self) {}

    /// Asks whether a scroll-to-top gesture should be honored.
    fn should_scroll_to_top(&mut self) -> bool {
        true
    }

    /// A scroll-to-top gesture finished.
    fn did_scroll_to_top(&mut self) {}
}

impl ScrollNotifications for () {}

impl<R: ScrollNotifications + ?Sized> ScrollNotifications for &mut R {
    fn did_scroll(&mut self) {
        (**self).did_scroll();
    }

    fn will_begin_dragging(&mut self) {
        (**self).will_begin_dragging();
    }

    fn will_end_dragging(&mut self, velocity: Vec2, target_offset: &mut Point) {
        (**self).will_end_dragging(velocity, target_offset);
    }

    fn did_end_dragging(&mut self, will_decelerate: bool) {
        (**self).did_end_dragging(will_decelerate);
    }

    fn will_begin_decelerating(&mut self) {
        (**self).will_begin_decelerating();
    }

    fn did_end_decelerating(&mut self) {
        (**self).did_end_decelerating();
    }

    fn did_end_scrolling_animation(&mut self) {
        (**self).did_end_scrolling_animation();
    }

    fn should_scroll_to_top(&mut self) -> bool {
        (**self).should_scroll_to_top()
    }

    fn did_scroll_to_top(&mut self) {
        (**self).did_scroll_to_top();
    }
}

/// Forwards host notifications to a receiver and to a pager.
///
/// The receiver always sees a notification before the pager derives events
/// from it. Use `()` as the receiver when nothing else listens.
#[derive(Debug)]
pub struct Passthrough<'a, S, P, O, R> {
    pager: &'a mut PagedScroll<S, P>,
    observer: O,
    receiver: R,
}

impl<'a, S, P, O, R> Passthrough<'a, S, P, O, R>
where
    S: ScrollSurface,
    O: PagingObserver,
    R: ScrollNotifications,
{
    /// Wraps `pager`, reporting its events to `observer` and relaying every
    /// notification to `receiver`.
    pub fn new(pager: &'a mut PagedScroll<S, P>, observer: O, receiver: R) -> Self {
        Self {
            pager,
            observer,
            receiver,
        }
    }

    /// Returns the secondary receiver.
    pub fn receiver(&self) -> &R {
        &self.receiver
    }

    /// Consumes the forwarder, returning the observer and the receiver.
    pub fn into_parts(self) -> (O, R) {
        (self.observer, self.receiver)
    }
}

impl<S, P, O, R> ScrollNotifications for Passthrough<'_, S, P, O, R>
where
    S: ScrollSurface,
    O: PagingObserver,
    R: ScrollNotifications,
{
    fn did_scroll(&mut self) {
        self.receiver.did_scroll();
        self.pager.did_scroll(&mut self.observer);
    }

    fn will_begin_dragging(&mut self) {
        self.receiver.will_begin_dragging();
    }

    fn will_end_dragging(&mut self, velocity: Vec2, target_offset: &mut Point) {
        self.receiver.will_end_dragging(velocity, target_offset);
    }

    fn did_end_dragging(&mut self, will_decelerate: bool) {
        self.receiver.did_end_dragging(will_decelerate);
    }

    fn will_begin_decelerating(&mut self) {
        self.receiver.will_begin_decelerating();
    }

    fn did_end_decelerating(&mut self) {
        self.receiver.did_end_decelerating();
        self.pager.did_end_decelerating(&mut self.observer);
    }

    fn did_end_scrolling_animation(&mut self) {
        self.receiver.did_end_scrolling_animation();
        self.pager.did_end_scrolling_animation(&mut self.observer);
    }

    fn should_scroll_to_top(&mut self) -> bool {
        self.receiver.should_scroll_to_top()
    }

    fn did_scroll_to_top(&mut self) {
        self.receiver.did_scroll_to_top();
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Rect, Size, Vec2};

    use super::{Passthrough, ScrollNotifications};
    use crate::{PagedScroll, PagerEvent, ScrollSurface};

    #[derive(Default)]
    struct Surface {
        offset: Point,
        content: Size,
    }

    impl ScrollSurface for Surface {
        fn viewport_size(&self) -> Size {
            Size::new(100.0, 100.0)
        }

        fn content_offset(&self) -> Point {
            self.offset
        }

        fn set_content_offset(&mut self, offset: Point) {
            self.offset = offset;
        }

        fn content_size(&self) -> Size {
            self.content
        }

        fn set_content_size(&mut self, size: Size) {
            self.content = size;
        }

        fn scroll_rect_to_visible(&mut self, _rect: Rect, _animated: bool) {}
    }

    #[derive(Default)]
    struct Log {
        seen: Vec<&'static str>,
        refuse_top: bool,
    }

    impl ScrollNotifications for Log {
        fn did_scroll(&mut self) {
            self.seen.push("did_scroll");
        }

        fn will_begin_dragging(&mut self) {
            self.seen.push("will_begin_dragging");
        }

        fn will_end_dragging(&mut self, _velocity: Vec2, target_offset: &mut Point) {
            self.seen.push("will_end_dragging");
            target_offset.x = 200.0;
        }

        fn did_end_dragging(&mut self, _will_decelerate: bool) {
            self.seen.push("did_end_dragging");
        }

        fn will_begin_decelerating(&mut self) {
            self.seen.push("will_begin_decelerating");
        }

        fn did_end_decelerating(&mut self) {
            self.seen.push("did_end_decelerating");
        }

        fn did_end_scrolling_animation(&mut self) {
            self.seen.push("did_end_scrolling_animation");
        }

        fn should_scroll_to_top(&mut self) -> bool {
            !self.refuse_top
        }

        fn did_scroll_to_top(&mut self) {
            self.seen.push("did_scroll_to_top");
        }
    }

    #[test]
    fn every_notification_reaches_the_receiver() {
        let mut pager = PagedScroll::<_, ()>::new(Surface::default());
        let mut log = Log::default();
        let mut target = Point::new(120.0, 0.0);
        {
            let mut forward = Passthrough::new(&mut pager, (), &mut log);
            forward.did_scroll();
            forward.will_begin_dragging();
            forward.will_end_dragging(Vec2::new(3.0, 0.0), &mut target);
            forward.did_end_dragging(true);
            forward.will_begin_decelerating();
            forward.did_end_decelerating();
            forward.did_end_scrolling_animation();
            forward.did_scroll_to_top();
        }
        assert_eq!(
            log.seen,
            [
                "did_scroll",
                "will_begin_dragging",
                "will_end_dragging",
                "did_end_dragging",
                "will_begin_decelerating",
                "did_end_decelerating",
                "did_end_scrolling_animation",
                "did_scroll_to_top",
            ]
        );
        assert_eq!(target.x, 200.0);
    }

    #[test]
    fn scroll_to_top_defaults_to_allowed() {
        let mut pager = PagedScroll::<_, ()>::new(Surface::default());
        assert!(Passthrough::new(&mut pager, (), ()).should_scroll_to_top());

        let log = Log {
            refuse_top: true,
            ..Log::default()
        };
        let mut forward = Passthrough::new(&mut pager, (), log);
        assert!(!forward.should_scroll_to_top());
        assert!(forward.receiver().seen.is_empty());
    }

    #[test]
    fn paging_notifications_drive_the_pager() {
        let mut pager = PagedScroll::<_, ()>::new(Surface::default());
        pager.surface_mut().set_content_size(Size::new(300.0, 100.0));
        pager.surface_mut().set_content_offset(Point::new(100.0, 0.0));

        let mut forward = Passthrough::new(&mut pager, Vec::<PagerEvent>::new(), ());
        forward.did_scroll();
        forward.will_begin_dragging();
        forward.did_end_decelerating();
        forward.did_end_scrolling_animation();
        let (events, ()) = forward.into_parts();

        assert_eq!(
            events,
            [
                PagerEvent::MovedTo {
                    index: 1,
                    from: None
                },
                PagerEvent::MovingTo {
                    index: 2,
                    from: 1,
                    progress: 0.0
                },
                PagerEvent::MovedTo {
                    index: 1,
                    from: None
                },
            ]
        );
    }
}
