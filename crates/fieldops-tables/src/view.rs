//! Table view state machine

use crate::column::Column;
use crate::pagination::{Pagination, PaginationView};
use crate::record::Record;
use crate::render::{HeaderCell, TableBody, TableRender};
use crate::sorting::{SortDirection, SortState, sorted};
use fieldops_conf::settings::TableSettings;
use fieldops_utils::callback::{Callback, emit};
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Who sorts and slices the records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	/// The view sorts the full collection and slices out the current page
	ClientSide,
	/// The records already are the current page; controls only notify the caller
	ServerSide {
		/// Total number of records on the server
		total_count: usize,
	},
}

impl Mode {
	/// Returns `true` for [`Mode::ServerSide`]
	pub fn is_server_side(&self) -> bool {
		matches!(self, Self::ServerSide { .. })
	}
}

/// Row click handler
pub type RowClick<R> = Arc<dyn Fn(&R) + Send + Sync + 'static>;

/// Callbacks a table view reports user intent through
///
/// Sort, page and page-size callbacks fire only in [`Mode::ServerSide`]. The
/// row click callback fires in both modes.
pub struct TableCallbacks<R> {
	on_sort: Option<Callback<(String, SortDirection)>>,
	on_page_change: Option<Callback<usize>>,
	on_page_size_change: Option<Callback<usize>>,
	on_row_click: Option<RowClick<R>>,
}

impl<R> TableCallbacks<R> {
	/// Creates an empty callback set
	pub fn new() -> Self {
		Self {
			on_sort: None,
			on_page_change: None,
			on_page_size_change: None,
			on_row_click: None,
		}
	}

	/// Sets the sort-change callback
	pub fn on_sort<F>(mut self, f: F) -> Self
	where
		F: Fn(String, SortDirection) + Send + Sync + 'static,
	{
		self.on_sort = Some(Callback::new(
			move |(field, direction): (String, SortDirection)| f(field, direction),
		));
		self
	}

	/// Sets the page-change callback
	pub fn on_page_change<F>(mut self, f: F) -> Self
	where
		F: Fn(usize) + Send + Sync + 'static,
	{
		self.on_page_change = Some(Callback::new(f));
		self
	}

	/// Sets the page-size-change callback
	pub fn on_page_size_change<F>(mut self, f: F) -> Self
	where
		F: Fn(usize) + Send + Sync + 'static,
	{
		self.on_page_size_change = Some(Callback::new(f));
		self
	}

	/// Sets the row click callback
	pub fn on_row_click<F>(mut self, f: F) -> Self
	where
		F: Fn(&R) + Send + Sync + 'static,
	{
		self.on_row_click = Some(Arc::new(f));
		self
	}
}

impl<R> Default for TableCallbacks<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R> Clone for TableCallbacks<R> {
	fn clone(&self) -> Self {
		Self {
			on_sort: self.on_sort.clone(),
			on_page_change: self.on_page_change.clone(),
			on_page_size_change: self.on_page_size_change.clone(),
			on_row_click: self.on_row_click.clone(),
		}
	}
}

impl<R> Debug for TableCallbacks<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TableCallbacks")
			.field("on_sort", &self.on_sort.is_some())
			.field("on_page_change", &self.on_page_change.is_some())
			.field("on_page_size_change", &self.on_page_size_change.is_some())
			.field("on_row_click", &self.on_row_click.is_some())
			.finish()
	}
}

/// Sort and pagination state of one list page over a record collection
pub struct TableView<R> {
	columns: Vec<Column<R>>,
	records: Vec<R>,
	mode: Mode,
	sort: SortState,
	pagination: Pagination,
	paginated: bool,
	loading: bool,
	empty_message: String,
	skeleton_rows: usize,
	max_page_buttons: usize,
	page_size_options: Vec<usize>,
	callbacks: TableCallbacks<R>,
}

impl<R: Record> TableView<R> {
	/// Creates a view with the default table settings
	pub fn new(columns: Vec<Column<R>>, records: Vec<R>, mode: Mode) -> Self {
		Self::with_settings(columns, records, mode, &TableSettings::default())
	}

	/// Creates a view using `settings` for page size, skeleton rows, page
	/// buttons and the empty-state message
	pub fn with_settings(
		columns: Vec<Column<R>>,
		records: Vec<R>,
		mode: Mode,
		settings: &TableSettings,
	) -> Self {
		Self {
			columns,
			records,
			mode,
			sort: SortState::unsorted(),
			pagination: Pagination::new(settings.page_size),
			paginated: true,
			loading: false,
			empty_message: settings.empty_message.clone(),
			skeleton_rows: settings.skeleton_rows,
			max_page_buttons: settings.max_page_buttons,
			page_size_options: settings.page_size_options.clone(),
			callbacks: TableCallbacks::new(),
		}
	}

	/// Starts sorted by `sort`
	pub fn initial_sort(mut self, sort: SortState) -> Self {
		self.sort = sort;
		self
	}

	/// Starts on `page`; ignored when out of range
	pub fn initial_page(mut self, page: usize) -> Self {
		let total = self.total_count();
		if !self.pagination.set_page(page, total) {
			tracing::warn!(page, total, "initial page out of range, starting on page 1");
		}
		self
	}

	/// Starts with `page_size` items per page; zero is ignored
	pub fn initial_page_size(mut self, page_size: usize) -> Self {
		let page = self.pagination.page();
		if self.pagination.set_page_size(page_size) {
			let total = self.total_count();
			self.pagination.set_page(page, total);
		}
		self
	}

	/// Sets the message shown instead of the table when there are no records
	pub fn empty_message(mut self, message: impl Into<String>) -> Self {
		self.empty_message = message.into();
		self
	}

	/// Sets the callbacks
	pub fn callbacks(mut self, callbacks: TableCallbacks<R>) -> Self {
		self.callbacks = callbacks;
		self
	}

	/// Shows every record on one page without a pager
	pub fn without_pagination(mut self) -> Self {
		self.paginated = false;
		self
	}

	/// Returns the columns
	pub fn columns(&self) -> &[Column<R>] {
		&self.columns
	}

	/// Returns the records in input order
	pub fn records(&self) -> &[R] {
		&self.records
	}

	/// Returns the mode
	pub fn mode(&self) -> Mode {
		self.mode
	}

	/// Returns the sort state
	pub fn sort_state(&self) -> &SortState {
		&self.sort
	}

	/// Returns the pagination state
	pub fn pagination(&self) -> &Pagination {
		&self.pagination
	}

	/// Current page (1-indexed)
	pub fn page(&self) -> usize {
		self.pagination.page()
	}

	/// Current page size
	pub fn page_size(&self) -> usize {
		self.pagination.page_size()
	}

	/// Returns whether the loading placeholder is shown
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	/// Number of records the pager counts: the collection length client-side,
	/// the caller-supplied total server-side
	pub fn total_count(&self) -> usize {
		match self.mode {
			Mode::ClientSide => self.records.len(),
			Mode::ServerSide { total_count } => total_count,
		}
	}

	/// Returns `ceil(total_count / page_size)`
	pub fn total_pages(&self) -> usize {
		self.pagination.total_pages(self.total_count())
	}

	/// Header click on the column bound to `field`.
	///
	/// Returns `false` without changing anything when no sortable column is
	/// bound to `field`. Server-side, the sort indicator moves but the rows are
	/// left as they are and `on_sort` reports the new sort.
	pub fn sort_by(&mut self, field: &str) -> bool {
		let sortable = self
			.columns
			.iter()
			.any(|column| column.is_sortable() && column.field_key() == Some(field));
		if !sortable {
			tracing::debug!(field, "ignoring sort on a non-sortable field");
			return false;
		}

		self.sort = self.sort.toggled(field);
		let direction = self.sort.direction;
		tracing::debug!(field, %direction, "sort changed");

		if self.mode.is_server_side() {
			emit(
				self.callbacks.on_sort.as_ref(),
				(field.to_string(), direction),
			);
		}
		true
	}

	/// Moves to page `page`.
	///
	/// Pages outside `[1, total_pages]` are ignored and return `false`.
	pub fn change_page(&mut self, page: usize) -> bool {
		let total = self.total_count();
		if !self.pagination.set_page(page, total) {
			tracing::debug!(page, total, "ignoring out-of-range page");
			return false;
		}
		if self.mode.is_server_side() {
			emit(self.callbacks.on_page_change.as_ref(), page);
		}
		true
	}

	/// Changes the page size and returns to page 1.
	///
	/// A zero size is ignored and returns `false`.
	pub fn change_page_size(&mut self, page_size: usize) -> bool {
		if !self.pagination.set_page_size(page_size) {
			tracing::debug!("ignoring zero page size");
			return false;
		}
		if self.mode.is_server_side() {
			emit(self.callbacks.on_page_size_change.as_ref(), page_size);
		}
		true
	}

	/// Adopts a page and page size chosen by the owner, without callbacks.
	///
	/// Used when the owning page changes pagination itself, e.g. after
	/// reading it from the URL. Invalid values leave the state unchanged.
	pub fn sync_pagination(&mut self, page: usize, page_size: usize) -> bool {
		let mut next = self.pagination;
		if !next.set_page_size(page_size) || !next.set_page(page, self.total_count()) {
			tracing::warn!(page, page_size, "ignoring out-of-range pagination");
			return false;
		}
		self.pagination = next;
		true
	}

	/// Replaces the record collection.
	///
	/// Client-side, a page left past the end is pulled back to the last page.
	pub fn set_records(&mut self, records: Vec<R>) {
		self.records = records;
		self.pagination.clamp(self.total_count());
	}

	/// Updates the server-side total; ignored client-side
	pub fn set_total_count(&mut self, total: usize) -> bool {
		match &mut self.mode {
			Mode::ServerSide { total_count } => {
				*total_count = total;
				self.pagination.clamp(total);
				true
			}
			Mode::ClientSide => {
				tracing::warn!(total, "total count is derived from the records client-side");
				false
			}
		}
	}

	/// Shows or hides the loading placeholder
	pub fn set_loading(&mut self, loading: bool) {
		self.loading = loading;
	}

	/// Row click on the `index`-th visible row.
	///
	/// Returns `false` when there is no such row.
	pub fn click_row(&self, index: usize) -> bool {
		let rows = self.visible_rows();
		let Some(&record) = rows.get(index) else {
			return false;
		};
		if let Some(on_row_click) = &self.callbacks.on_row_click {
			on_row_click(record);
		}
		true
	}

	/// Returns the rows to display, in display order.
	///
	/// Client-side this is the sorted collection sliced to the current page.
	/// Server-side the records are returned as given.
	pub fn visible_rows(&self) -> Vec<&R> {
		match self.mode {
			Mode::ServerSide { .. } => self.records.iter().collect(),
			Mode::ClientSide => {
				let mut rows = sorted(&self.records, &self.sort);
				if self.paginated {
					let window = self.pagination.window(rows.len());
					rows.truncate(window.end);
					rows.drain(..window.start);
				}
				rows
			}
		}
	}

	/// Returns the header cells in column order
	pub fn headers(&self) -> Vec<HeaderCell> {
		self.columns
			.iter()
			.map(|column| HeaderCell {
				label: column.label().to_string(),
				field: column.field_key().map(str::to_string),
				sortable: column.is_sortable(),
				sorted: column
					.field_key()
					.and_then(|field| self.sort.direction_for(field)),
				width: column.width().map(str::to_string),
				class_name: column.class_name().map(str::to_string),
			})
			.collect()
	}

	/// Returns the pager, or `None` when pagination is turned off
	pub fn pagination_view(&self) -> Option<PaginationView> {
		self.paginated.then(|| {
			PaginationView::new(
				&self.pagination,
				self.total_count(),
				self.max_page_buttons,
				&self.page_size_options,
			)
		})
	}

	/// Builds the render model.
	///
	/// While loading, the body is a fixed number of placeholder rows with the
	/// column count preserved. With no records and not loading, the whole table
	/// is replaced by the empty-state message.
	pub fn render(&self) -> TableRender {
		if !self.loading && self.records.is_empty() {
			return TableRender::Empty {
				message: self.empty_message.clone(),
			};
		}

		let body = if self.loading {
			TableBody::Skeleton {
				rows: self.skeleton_rows,
				columns: self.columns.len(),
			}
		} else {
			TableBody::Rows(
				self.visible_rows()
					.into_iter()
					.map(|record| {
						self.columns
							.iter()
							.map(|column| column.render_cell(record))
							.collect()
					})
					.collect(),
			)
		};

		TableRender::Table {
			headers: self.headers(),
			body,
			pagination: self.pagination_view(),
		}
	}

	/// Builds the render model and writes it as HTML
	pub fn render_html(&self) -> String {
		self.render().to_html()
	}
}

impl<R> Debug for TableView<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TableView")
			.field("columns", &self.columns)
			.field("records", &self.records.len())
			.field("mode", &self.mode)
			.field("sort", &self.sort)
			.field("pagination", &self.pagination)
			.field("paginated", &self.paginated)
			.field("loading", &self.loading)
			.field("callbacks", &self.callbacks)
			.finish_non_exhaustive()
	}
}
