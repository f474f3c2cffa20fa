//! Render model for a table view
//!
//! [`TableRender`] is what a list page draws. It is plain data so it can be
//! asserted on in tests or handed to a template; [`TableRender::to_html`]
//! writes it as markup directly.

use crate::column::CellContent;
use crate::pagination::PaginationView;
use crate::sorting::SortDirection;
use std::fmt;

/// One header cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
	/// Header label
	pub label: String,
	/// Field the column is bound to
	pub field: Option<String>,
	/// Whether clicking the header sorts
	pub sortable: bool,
	/// Direction shown when the table is sorted by this column
	pub sorted: Option<SortDirection>,
	/// Width hint
	pub width: Option<String>,
	/// CSS class hint
	pub class_name: Option<String>,
}

/// Table body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
	/// Placeholder rows shown while loading
	Skeleton {
		/// Number of placeholder rows
		rows: usize,
		/// Number of cells per row, equal to the column count
		columns: usize,
	},
	/// Rendered cells, one inner vector per visible row
	Rows(Vec<Vec<CellContent>>),
}

impl TableBody {
	/// Returns the number of body rows
	pub fn row_count(&self) -> usize {
		match self {
			Self::Skeleton { rows, .. } => *rows,
			Self::Rows(rows) => rows.len(),
		}
	}
}

/// Complete render output of a table view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRender {
	/// No records and not loading: the whole table is replaced by a message
	Empty {
		/// Message shown instead of the table
		message: String,
	},
	/// A table with headers, a body, and an optional pager
	Table {
		/// Header cells in column order
		headers: Vec<HeaderCell>,
		/// Body rows
		body: TableBody,
		/// Pager, present whenever the view paginates
		pagination: Option<PaginationView>,
	},
}

impl TableRender {
	/// Returns `true` for the empty-state variant
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty { .. })
	}

	/// Writes the render model as an HTML fragment.
	///
	/// Text cells, labels and the empty message are escaped. Markup cells are
	/// written unchanged.
	pub fn to_html(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for TableRender {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Empty { message } => write!(
				f,
				r#"<div class="table-empty">{}</div>"#,
				html_escape::encode_text(message)
			),
			Self::Table {
				headers,
				body,
				pagination,
			} => {
				f.write_str(r#"<table class="table">"#)?;
				write_head(f, headers)?;
				write_body(f, body)?;
				f.write_str("</table>")?;
				match pagination {
					Some(pagination) => write_pager(f, pagination),
					None => Ok(()),
				}
			}
		}
	}
}

fn write_head(f: &mut fmt::Formatter<'_>, headers: &[HeaderCell]) -> fmt::Result {
	f.write_str("<thead><tr>")?;
	for header in headers {
		f.write_str("<th")?;
		if let (true, Some(field)) = (header.sortable, &header.field) {
			write!(
				f,
				r#" data-sort-field="{}""#,
				html_escape::encode_double_quoted_attribute(field)
			)?;
		}
		let mut classes = Vec::new();
		if header.sortable {
			classes.push("sortable".to_string());
		}
		if let Some(direction) = header.sorted {
			classes.push(format!("sorted-{}", direction.as_str()));
		}
		if let Some(class_name) = &header.class_name {
			classes.push(class_name.clone());
		}
		if !classes.is_empty() {
			write!(
				f,
				r#" class="{}""#,
				html_escape::encode_double_quoted_attribute(&classes.join(" "))
			)?;
		}
		if let Some(width) = &header.width {
			write!(
				f,
				r#" style="width: {}""#,
				html_escape::encode_double_quoted_attribute(width)
			)?;
		}
		write!(f, ">{}", html_escape::encode_text(&header.label))?;
		match header.sorted {
			Some(SortDirection::Asc) => f.write_str(" ▲")?,
			Some(SortDirection::Desc) => f.write_str(" ▼")?,
			None => {}
		}
		f.write_str("</th>")?;
	}
	f.write_str("</tr></thead>")
}

fn write_body(f: &mut fmt::Formatter<'_>, body: &TableBody) -> fmt::Result {
	f.write_str("<tbody>")?;
	match body {
		TableBody::Skeleton { rows, columns } => {
			for _ in 0..*rows {
				f.write_str(r#"<tr class="skeleton">"#)?;
				for _ in 0..*columns {
					f.write_str(r#"<td><span class="skeleton-line"></span></td>"#)?;
				}
				f.write_str("</tr>")?;
			}
		}
		TableBody::Rows(rows) => {
			for (index, row) in rows.iter().enumerate() {
				write!(f, r#"<tr data-row="{}">"#, index)?;
				for cell in row {
					match cell {
						CellContent::Text(text) => {
							write!(f, "<td>{}</td>", html_escape::encode_text(text))?
						}
						CellContent::Markup(markup) => write!(f, "<td>{}</td>", markup)?,
					}
				}
				f.write_str("</tr>")?;
			}
		}
	}
	f.write_str("</tbody>")
}

fn write_pager(f: &mut fmt::Formatter<'_>, view: &PaginationView) -> fmt::Result {
	write!(
		f,
		r#"<nav class="pagination"><span class="summary">{}</span>"#,
		html_escape::encode_text(&view.summary.to_string())
	)?;
	let last = view.total_pages.max(1);
	write_jump(f, "first", 1, view.can_first)?;
	write_jump(f, "prev", view.page.saturating_sub(1).max(1), view.can_prev)?;
	for &number in &view.page_numbers {
		if number == view.page {
			write!(
				f,
				r#"<button class="page active" aria-current="page">{}</button>"#,
				number
			)?;
		} else {
			write!(
				f,
				r#"<button class="page" data-page="{0}">{0}</button>"#,
				number
			)?;
		}
	}
	write_jump(f, "next", (view.page + 1).min(last), view.can_next)?;
	write_jump(f, "last", last, view.can_last)?;
	f.write_str(r#"<select class="page-size">"#)?;
	for &size in &view.page_size_options {
		let selected = if size == view.page_size { " selected" } else { "" };
		write!(f, r#"<option value="{0}"{1}>{0}</option>"#, size, selected)?;
	}
	f.write_str("</select></nav>")
}

fn write_jump(f: &mut fmt::Formatter<'_>, name: &str, target: usize, enabled: bool) -> fmt::Result {
	let disabled = if enabled { "" } else { " disabled" };
	write!(
		f,
		r#"<button class="page-{0}" data-page="{1}"{2}>{0}</button>"#,
		name, target, disabled
	)
}
