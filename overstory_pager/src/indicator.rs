// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A page indicator (dots, "3 of 7" label, ...) kept in sync by a
/// [`PagedScrollController`](crate::PagedScrollController).
///
/// Taps on the indicator are reported back through
/// [`PagedScrollController::indicator_tapped`](crate::PagedScrollController::indicator_tapped).
pub trait PageIndicator {
    /// Highlights page `index`.
    fn set_current_page(&mut self, index: isize);

    /// Sets the number of pages shown.
    fn set_page_count(&mut self, count: usize);
}
