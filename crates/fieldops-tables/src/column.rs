//! Column descriptors
//!
//! A column is either bound to a record field ([`FieldColumn`]) or computed
//! entirely by a renderer ([`ComputedColumn`]). Only field columns can be made
//! sortable, since sorting needs a key to compare on.
//!
//! # Example
//!
//! ```rust
//! use fieldops_tables::column::{CellContent, Column};
//! use serde_json::Value;
//!
//! let name: Column<Value> = Column::field("Name", "name").sortable().width("40%").into();
//! let actions: Column<Value> =
//!     Column::computed("Actions", |_: &Value| CellContent::markup("<button>Edit</button>")).into();
//!
//! assert!(name.is_sortable());
//! assert_eq!(name.field_key(), Some("name"));
//! assert!(!actions.is_sortable());
//! assert_eq!(actions.field_key(), None);
//! ```

use crate::record::Record;
use fieldops_utils::format::format_optional;
use fieldops_utils::status::{StatusPalette, status_label};
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Content of one rendered cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
	/// Plain text, escaped when written as HTML
	Text(String),
	/// Trusted markup produced by a custom renderer, written as-is
	Markup(String),
}

impl CellContent {
	/// Creates a plain text cell
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(text.into())
	}

	/// Creates a trusted markup cell
	pub fn markup(markup: impl Into<String>) -> Self {
		Self::Markup(markup.into())
	}

	/// Returns the raw text or markup
	pub fn as_str(&self) -> &str {
		match self {
			Self::Text(s) | Self::Markup(s) => s,
		}
	}
}

impl From<String> for CellContent {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<&str> for CellContent {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

/// Renders a status as a coloured badge using `palette`
///
/// # Example
///
/// ```rust
/// use fieldops_tables::column::{status_badge, CellContent};
/// use fieldops_utils::status::StatusPalette;
///
/// let badge = status_badge("IN_PROGRESS", &StatusPalette::default());
/// assert_eq!(
///     badge,
///     CellContent::markup(r#"<span class="badge badge-info">In Progress</span>"#)
/// );
/// ```
pub fn status_badge(status: &str, palette: &StatusPalette) -> CellContent {
	let color = palette.color_for(status);
	CellContent::Markup(format!(
		r#"<span class="badge badge-{}">{}</span>"#,
		html_escape::encode_double_quoted_attribute(color),
		html_escape::encode_text(&status_label(status))
	))
}

/// Custom cell renderer
pub type CellRenderer<R> = Arc<dyn Fn(&R) -> CellContent + Send + Sync + 'static>;

/// Layout hints shared by both column kinds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Layout {
	width: Option<String>,
	class_name: Option<String>,
}

/// A table column descriptor
pub struct Column<R> {
	label: String,
	field: Option<String>,
	renderer: Option<CellRenderer<R>>,
	sortable: bool,
	layout: Layout,
}

impl<R> Column<R> {
	/// Starts a column bound to a record field
	pub fn field(label: impl Into<String>, field: impl Into<String>) -> FieldColumn<R> {
		FieldColumn {
			label: label.into(),
			field: field.into(),
			renderer: None,
			sortable: false,
			layout: Layout::default(),
		}
	}

	/// Starts a column whose cells come entirely from `renderer`
	pub fn computed<F, C>(label: impl Into<String>, renderer: F) -> ComputedColumn<R>
	where
		F: Fn(&R) -> C + Send + Sync + 'static,
		C: Into<CellContent>,
	{
		ComputedColumn {
			label: label.into(),
			renderer: Arc::new(move |record: &R| renderer(record).into()),
			layout: Layout::default(),
		}
	}

	/// Returns the header label
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns the record field this column reads, if any
	pub fn field_key(&self) -> Option<&str> {
		self.field.as_deref()
	}

	/// Returns whether clicking the header sorts by this column
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Returns the width hint
	pub fn width(&self) -> Option<&str> {
		self.layout.width.as_deref()
	}

	/// Returns the CSS class hint
	pub fn class_name(&self) -> Option<&str> {
		self.layout.class_name.as_deref()
	}

	/// Returns `true` when a custom renderer produces the cells
	pub fn has_renderer(&self) -> bool {
		self.renderer.is_some()
	}
}

impl<R: Record> Column<R> {
	/// Renders the cell for `record`.
	///
	/// A custom renderer's output is used verbatim; otherwise the raw field value
	/// is formatted, with an empty placeholder when it is undefined.
	pub fn render_cell(&self, record: &R) -> CellContent {
		if let Some(renderer) = &self.renderer {
			return renderer(record);
		}
		let value = self.field.as_deref().and_then(|key| record.field(key));
		CellContent::Text(format_optional(value))
	}
}

impl<R> Clone for Column<R> {
	fn clone(&self) -> Self {
		Self {
			label: self.label.clone(),
			field: self.field.clone(),
			renderer: self.renderer.clone(),
			sortable: self.sortable,
			layout: self.layout.clone(),
		}
	}
}

impl<R> Debug for Column<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Column")
			.field("label", &self.label)
			.field("field", &self.field)
			.field("sortable", &self.sortable)
			.field("width", &self.layout.width)
			.field("class_name", &self.layout.class_name)
			.finish_non_exhaustive()
	}
}

/// Builder for a column bound to a record field
pub struct FieldColumn<R> {
	label: String,
	field: String,
	renderer: Option<CellRenderer<R>>,
	sortable: bool,
	layout: Layout,
}

impl<R> FieldColumn<R> {
	/// Makes the column sortable
	pub fn sortable(mut self) -> Self {
		self.sortable = true;
		self
	}

	/// Replaces the default cell text with a custom renderer
	pub fn render_with<F, C>(mut self, renderer: F) -> Self
	where
		F: Fn(&R) -> C + Send + Sync + 'static,
		C: Into<CellContent>,
	{
		self.renderer = Some(Arc::new(move |record: &R| renderer(record).into()));
		self
	}

	/// Sets the width hint (any CSS length)
	pub fn width(mut self, width: impl Into<String>) -> Self {
		self.layout.width = Some(width.into());
		self
	}

	/// Sets the CSS class hint
	pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
		self.layout.class_name = Some(class_name.into());
		self
	}
}

impl<R> From<FieldColumn<R>> for Column<R> {
	fn from(column: FieldColumn<R>) -> Self {
		Self {
			label: column.label,
			field: Some(column.field),
			renderer: column.renderer,
			sortable: column.sortable,
			layout: column.layout,
		}
	}
}

/// Builder for a column without a backing field
pub struct ComputedColumn<R> {
	label: String,
	renderer: CellRenderer<R>,
	layout: Layout,
}

impl<R> ComputedColumn<R> {
	/// Sets the width hint (any CSS length)
	pub fn width(mut self, width: impl Into<String>) -> Self {
		self.layout.width = Some(width.into());
		self
	}

	/// Sets the CSS class hint
	pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
		self.layout.class_name = Some(class_name.into());
		self
	}
}

impl<R> From<ComputedColumn<R>> for Column<R> {
	fn from(column: ComputedColumn<R>) -> Self {
		Self {
			label: column.label,
			field: None,
			renderer: Some(column.renderer),
			sortable: false,
			layout: column.layout,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::{Value, json};

	#[rstest]
	fn test_field_column_defaults() {
		let column: Column<Value> = Column::field("Building", "building").into();
		assert_eq!(column.label(), "Building");
		assert_eq!(column.field_key(), Some("building"));
		assert!(!column.is_sortable());
		assert!(!column.has_renderer());
		assert_eq!(column.width(), None);
		assert_eq!(column.class_name(), None);
	}

	#[rstest]
	fn test_field_column_builder() {
		let column: Column<Value> = Column::field("Qty", "quantity")
			.sortable()
			.width("80px")
			.class_name("text-right")
			.into();
		assert!(column.is_sortable());
		assert_eq!(column.width(), Some("80px"));
		assert_eq!(column.class_name(), Some("text-right"));
	}

	#[rstest]
	fn test_default_cell_rendering() {
		let column: Column<Value> = Column::field("Name", "name").into();
		assert_eq!(
			column.render_cell(&json!({"name": "Splitter 8"})),
			CellContent::text("Splitter 8")
		);
		assert_eq!(column.render_cell(&json!({"name": null})), CellContent::text(""));
		assert_eq!(column.render_cell(&json!({})), CellContent::text(""));
	}

	#[rstest]
	fn test_custom_renderer_is_verbatim() {
		let column: Column<Value> = Column::field("Amount", "amount")
			.render_with(|r: &Value| format!("<{}>", r["amount"]))
			.into();
		assert!(column.has_renderer());
		assert_eq!(
			column.render_cell(&json!({"amount": 5})),
			CellContent::text("<5>")
		);
	}

	#[rstest]
	fn test_computed_column_is_never_sortable() {
		let column: Column<Value> =
			Column::computed("Actions", |_: &Value| CellContent::markup("<a>View</a>"))
				.width("1%")
				.into();
		assert!(!column.is_sortable());
		assert_eq!(column.field_key(), None);
		assert_eq!(
			column.render_cell(&json!({})),
			CellContent::markup("<a>View</a>")
		);
	}

	#[rstest]
	fn test_status_badge_escapes_label() {
		let palette = StatusPalette::default().with_override("<b>", "x\"y");
		let badge = status_badge("<b>", &palette);
		assert_eq!(
			badge.as_str(),
			r#"<span class="badge badge-x&quot;y">&lt;b&gt;</span>"#
		);
	}
}
