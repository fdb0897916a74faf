// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page arithmetic over a uniform page width.
//!
//! [`PageGeometry`] converts horizontal scroll offsets into page indices and
//! transition progress, and page indices back into offsets. Every page has the
//! same width (the viewport width), so all queries are closed-form.
//!
//! A zero page width is tolerated everywhere: index queries return page `0`,
//! [`PageGeometry::transition`] returns `None` and no offset counts as
//! page-aligned. This covers hosts that report a not-yet-laid-out viewport.
//!
//! ```rust
//! use understory_pager::PageGeometry;
//!
//! let geometry = PageGeometry::new(100.0);
//!
//! // Nearest page: the current page flips at the halfway point.
//! assert_eq!(geometry.current_page_index(49.0), 0);
//! assert_eq!(geometry.current_page_index(50.0), 1);
//!
//! // Transition between the two pages around an offset.
//! let t = geometry.transition(140.0).unwrap();
//! assert_eq!((t.from, t.to), (1, 2));
//! assert!((t.progress - 0.4).abs() < 1e-9);
//! ```

/// Fractional position between two adjacent pages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageTransition {
    /// Page whose leading edge is at or before the offset.
    pub from: isize,
    /// Page immediately after [`PageTransition::from`].
    pub to: isize,
    /// Advance from `from` toward `to`, in `[0.0, 1.0)` for finite offsets
    /// whose page index fits in `isize`.
    pub progress: f64,
}

/// Closed-form page math for pages of equal width laid out along X.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    page_width: f64,
}

impl PageGeometry {
    /// Creates a geometry for pages of `page_width`.
    ///
    /// Non-finite or negative widths are treated as zero.
    #[must_use]
    pub fn new(page_width: f64) -> Self {
        let page_width = if page_width.is_finite() && page_width > 0.0 {
            page_width
        } else {
            0.0
        };
        Self { page_width }
    }

    /// Returns the page width.
    #[must_use]
    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    /// Returns `true` if the width is zero and page queries are degenerate.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.page_width == 0.0
    }

    /// Returns the page nearest to `offset_x`.
    ///
    /// Computed as `floor((x - W/2) / W) + 1`, which rounds to the closest
    /// page boundary: once a drag passes the midpoint toward the next page,
    /// that page is already current.
    #[must_use]
    pub fn current_page_index(&self, offset_x: f64) -> isize {
        if self.is_degenerate() {
            return 0;
        }
        let half = self.page_width / 2.0;
        floor_index((offset_x - half) / self.page_width).saturating_add(1)
    }

    /// Returns the page whose leading edge is at or before `offset_x`.
    ///
    /// This is the page reported once scrolling settles.
    #[must_use]
    pub fn settled_page(&self, offset_x: f64) -> isize {
        if self.is_degenerate() {
            return 0;
        }
        floor_index(offset_x / self.page_width)
    }

    /// Returns the horizontal offset of the leading edge of page `index`.
    ///
    /// Indices outside the page range map to offsets outside the content.
    #[must_use]
    pub fn page_offset(&self, index: isize) -> f64 {
        index as f64 * self.page_width
    }

    /// Returns `true` if `offset_x` lies exactly on a page boundary.
    #[must_use]
    pub fn is_page_aligned(&self, offset_x: f64) -> bool {
        !self.is_degenerate() && offset_x % self.page_width == 0.0
    }

    /// Derives the page transition around `offset_x`.
    ///
    /// Returns `None` when the geometry is degenerate.
    #[must_use]
    pub fn transition(&self, offset_x: f64) -> Option<PageTransition> {
        if self.is_degenerate() {
            return None;
        }
        let from = self.settled_page(offset_x);
        let from_offset = self.page_offset(from);
        Some(PageTransition {
            from,
            to: from.saturating_add(1),
            progress: (offset_x - from_offset) / self.page_width,
        })
    }

    /// Returns the total scrollable width for `page_count` pages.
    ///
    /// With no pages the content is one page wide so the surface still
    /// covers its viewport.
    #[must_use]
    pub fn content_width(&self, page_count: usize) -> f64 {
        if page_count == 0 {
            self.page_width
        } else {
            self.page_width * page_count as f64
        }
    }
}

/// `floor` for finite values, usable without `std`.
///
/// Values outside the `isize` range saturate to its bounds.
fn floor_index(value: f64) -> isize {
    if !value.is_finite() {
        return 0;
    }
    if value >= isize::MAX as f64 {
        return isize::MAX;
    }
    if value <= isize::MIN as f64 {
        return isize::MIN;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Out-of-range values were saturated above, so only the fraction is dropped"
    )]
    let truncated = value as isize;
    if (truncated as f64) > value {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}
