// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paging events and the observer that receives them.
//!
//! The pager reports two kinds of events:
//!
//! - [`PagerEvent::MovedTo`]: the view reached a page. Emitted on reload, on
//!   every sample that lands exactly on a page boundary (with no `from`), and
//!   once per distinct settled page (with the previous page as `from`).
//! - [`PagerEvent::MovingTo`]: emitted on every offset sample while the view
//!   travels between two adjacent pages. Use it to drive parallax or
//!   crossfade effects.
//!
//! Observers are borrowed for the duration of a single call. Pass `&mut ()`
//! when nobody is listening, or a `Vec<PagerEvent>` to collect events and act
//! on them after the call returns (for example to navigate in response).

use alloc::vec::Vec;

/// A page event emitted by [`PagedScroll`](crate::PagedScroll).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PagerEvent {
    /// The view moved to `index`.
    MovedTo {
        /// Page the view is now on.
        index: isize,
        /// Page the view was on, if known.
        from: Option<isize>,
    },
    /// The view is between `from` and `index`.
    MovingTo {
        /// Page being approached.
        index: isize,
        /// Page being left.
        from: isize,
        /// Fractional advance from `from` toward `index`.
        progress: f64,
    },
}

/// Receives page events.
///
/// Both methods default to no-ops so implementors only override what they
/// need.
pub trait PagingObserver {
    /// Called when the view has moved to page `index`.
    fn moved_to(&mut self, index: isize, from: Option<isize>) {
        let _ = (index, from);
    }

    /// Called while the view moves from page `from` toward page `index`.
    ///
    /// `progress` is in `[0.0, 1.0)` during normal scrolling and may leave
    /// that range while elastic events are enabled.
    fn moving_to(&mut self, index: isize, from: isize, progress: f64) {
        let _ = (index, from, progress);
    }
}

impl PagingObserver for () {}

impl<O: PagingObserver + ?Sized> PagingObserver for &mut O {
    fn moved_to(&mut self, index: isize, from: Option<isize>) {
        (**self).moved_to(index, from);
    }

    fn moving_to(&mut self, index: isize, from: isize, progress: f64) {
        (**self).moving_to(index, from, progress);
    }
}

impl PagingObserver for Vec<PagerEvent> {
    fn moved_to(&mut self, index: isize, from: Option<isize>) {
        self.push(PagerEvent::MovedTo { index, from });
    }

    fn moving_to(&mut self, index: isize, from: isize, progress: f64) {
        self.push(PagerEvent::MovingTo {
            index,
            from,
            progress,
        });
    }
}
