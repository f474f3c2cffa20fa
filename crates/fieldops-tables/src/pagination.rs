//! Pagination functionality for tables

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Pagination state: a 1-indexed page and a page size
///
/// The page is kept within `[1, max(total_pages, 1)]`; requests outside that
/// range are ignored rather than clamped onto the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
	page: usize,
	page_size: usize,
}

impl Pagination {
	/// Creates pagination on page 1; a zero page size is raised to 1
	pub fn new(page_size: usize) -> Self {
		Self {
			page: 1,
			page_size: page_size.max(1),
		}
	}

	/// Current page number (1-indexed)
	pub fn page(&self) -> usize {
		self.page
	}

	/// Number of items per page
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Returns `ceil(total / page_size)`
	pub fn total_pages(&self, total: usize) -> usize {
		total.div_ceil(self.page_size)
	}

	/// Returns the highest page the state may hold (at least 1)
	pub fn last_page(&self, total: usize) -> usize {
		self.total_pages(total).max(1)
	}

	/// Returns `true` if `page` is a page the state may move to
	pub fn is_valid_page(&self, page: usize, total: usize) -> bool {
		(1..=self.last_page(total)).contains(&page)
	}

	/// Moves to `page` if it is in range.
	///
	/// Returns `false`, leaving the page unchanged, when it is not.
	pub fn set_page(&mut self, page: usize, total: usize) -> bool {
		if !self.is_valid_page(page, total) {
			return false;
		}
		self.page = page;
		true
	}

	/// Changes the page size and goes back to page 1.
	///
	/// A zero size is ignored and returns `false`.
	pub fn set_page_size(&mut self, page_size: usize) -> bool {
		if page_size == 0 {
			return false;
		}
		self.page_size = page_size;
		self.page = 1;
		true
	}

	/// Pulls the page back into range after the total shrank
	pub fn clamp(&mut self, total: usize) {
		self.page = self.page.clamp(1, self.last_page(total));
	}

	/// Moves to the next page if available
	pub fn next_page(&mut self, total: usize) -> bool {
		self.set_page(self.page + 1, total)
	}

	/// Moves to the previous page if available
	pub fn prev_page(&mut self, total: usize) -> bool {
		self.page > 1 && self.set_page(self.page - 1, total)
	}

	/// Returns the index range of the current page within `total` items
	pub fn window(&self, total: usize) -> Range<usize> {
		page_window(self.page, self.page_size, total)
	}

	/// Returns the "showing X–Y of Z" numbers for the current page
	pub fn summary(&self, total: usize) -> PageSummary {
		let first = if total == 0 {
			0
		} else {
			((self.page - 1) * self.page_size + 1).min(total)
		};
		PageSummary {
			first,
			last: (self.page * self.page_size).min(total),
			total,
		}
	}

	/// Returns the page numbers to show as buttons.
	///
	/// At most `max_buttons` numbers, centred on the current page except near
	/// either end, where the first or last `max_buttons` pages are shown.
	///
	/// # Example
	///
	/// ```rust
	/// use fieldops_tables::pagination::Pagination;
	///
	/// let mut pagination = Pagination::new(10);
	/// assert_eq!(pagination.page_numbers(200, 5), vec![1, 2, 3, 4, 5]);
	///
	/// pagination.set_page(10, 200);
	/// assert_eq!(pagination.page_numbers(200, 5), vec![8, 9, 10, 11, 12]);
	///
	/// pagination.set_page(19, 200);
	/// assert_eq!(pagination.page_numbers(200, 5), vec![16, 17, 18, 19, 20]);
	/// ```
	pub fn page_numbers(&self, total: usize, max_buttons: usize) -> Vec<usize> {
		let total_pages = self.total_pages(total);
		let max_buttons = max_buttons.max(1);
		if total_pages <= max_buttons {
			return (1..=total_pages).collect();
		}
		let half = max_buttons / 2;
		let start = if self.page <= half + 1 {
			1
		} else if self.page + half >= total_pages {
			total_pages - max_buttons + 1
		} else {
			self.page - half
		};
		(start..start + max_buttons).collect()
	}
}

impl Default for Pagination {
	fn default() -> Self {
		Self::new(fieldops_conf::settings::DEFAULT_PAGE_SIZE)
	}
}

/// Returns the slice `[(page-1)*page_size, page*page_size)` bounded by `total`.
///
/// Pages past the end yield an empty range.
pub fn page_window(page: usize, page_size: usize, total: usize) -> Range<usize> {
	let start = page.saturating_sub(1).saturating_mul(page_size).min(total);
	let end = start.saturating_add(page_size).min(total);
	start..end
}

/// "Showing X–Y of Z" numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
	/// 1-based index of the first item shown, 0 when there are no items
	pub first: usize,
	/// 1-based index of the last item shown
	pub last: usize,
	/// Total number of items
	pub total: usize,
}

impl std::fmt::Display for PageSummary {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Showing {}–{} of {}", self.first, self.last, self.total)
	}
}

/// Everything a pager control needs to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationView {
	/// Current page
	pub page: usize,
	/// Current page size
	pub page_size: usize,
	/// Total number of pages
	pub total_pages: usize,
	/// Summary line numbers
	pub summary: PageSummary,
	/// Page-number buttons
	pub page_numbers: Vec<usize>,
	/// Page sizes offered by the selector
	pub page_size_options: Vec<usize>,
	/// First-page control enabled
	pub can_first: bool,
	/// Previous-page control enabled
	pub can_prev: bool,
	/// Next-page control enabled
	pub can_next: bool,
	/// Last-page control enabled
	pub can_last: bool,
}

impl PaginationView {
	/// Builds the pager view for `pagination` over `total` items
	pub fn new(
		pagination: &Pagination,
		total: usize,
		max_buttons: usize,
		page_size_options: &[usize],
	) -> Self {
		let total_pages = pagination.total_pages(total);
		let page = pagination.page();
		let has_prev = page > 1;
		let has_next = page < total_pages;
		Self {
			page,
			page_size: pagination.page_size(),
			total_pages,
			summary: pagination.summary(total),
			page_numbers: pagination.page_numbers(total, max_buttons),
			page_size_options: page_size_options.to_vec(),
			can_first: has_prev,
			can_prev: has_prev,
			can_next: has_next,
			can_last: has_next,
		}
	}
}
