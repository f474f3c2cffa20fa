//! A settings-driven list page wired through the facade

use fieldops::prelude::*;
use fieldops::tables::column::status_badge;
use rstest::*;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

const SETTINGS: &str = r#"
[table]
page_size = 2
page_size_options = [2, 4]
max_page_buttons = 3
empty_message = "No jobs match"

[status_colors]
ON_HOLD = "warning"
"#;

#[fixture]
fn settings() -> DashboardSettings {
	DashboardSettings::from_toml_str(SETTINGS).unwrap()
}

#[fixture]
fn jobs() -> Vec<Value> {
	vec![
		json!({"id": 1, "title": "Splice", "status": "SCHEDULED"}),
		json!({"id": 2, "title": "Audit", "status": "ON_HOLD"}),
		json!({"id": 3, "title": "Trench", "status": "COMPLETED"}),
		json!({"id": 4, "title": "Bore", "status": "ON_HOLD"}),
		json!({"id": 5, "title": "Drop", "status": null}),
	]
}

fn columns(palette: StatusPalette) -> Vec<Column<Value>> {
	vec![
		Column::field("Title", "title").sortable().into(),
		Column::computed("Status", move |job: &Value| {
			status_badge(job["status"].as_str().unwrap_or(""), &palette)
		})
		.into(),
	]
}

#[rstest]
fn test_client_page_with_filters(settings: DashboardSettings, jobs: Vec<Value>) {
	let mut filters = FilterComposer::new(vec![FilterDescriptor::select(
		"status",
		"Status",
		[("ON_HOLD", "On hold"), ("COMPLETED", "Completed")],
	)]);
	filters.set_draft_value("status", DraftInput::text("ON_HOLD"));
	filters.apply();

	let wanted = filters.applied().get("status").and_then(FilterValue::as_text);
	let filtered: Vec<Value> = jobs
		.into_iter()
		.filter(|job| wanted.is_none_or(|status| job["status"] == status))
		.collect();

	let mut table = TableView::with_settings(
		columns(settings.status_palette()),
		filtered,
		Mode::ClientSide,
		&settings.table,
	);
	table.sort_by("title");

	assert_eq!(table.total_count(), 2);
	assert_eq!(table.total_pages(), 1);
	let rows = table.visible_rows();
	let titles: Vec<&str> = rows.iter().filter_map(|job| job["title"].as_str()).collect();
	assert_eq!(titles, vec!["Audit", "Bore"]);

	let html = table.render_html();
	assert!(html.contains(r#"<span class="badge badge-warning">On Hold</span>"#));
	assert!(html.contains("Showing 1–2 of 2"));
}

#[rstest]
fn test_empty_page_uses_configured_message(settings: DashboardSettings) {
	let table = TableView::with_settings(
		columns(settings.status_palette()),
		Vec::new(),
		Mode::ClientSide,
		&settings.table,
	);
	assert!(matches!(
		table.render(),
		TableRender::Empty { ref message } if message == "No jobs match"
	));
}

#[rstest]
fn test_server_page_builds_query(settings: DashboardSettings) {
	let sorts = Arc::new(Mutex::new(Vec::new()));
	let recorded = sorts.clone();
	let mut table = TableView::with_settings(
		columns(settings.status_palette()),
		Vec::new(),
		Mode::ServerSide { total_count: 0 },
		&settings.table,
	)
	.callbacks(TableCallbacks::new().on_sort(move |field, direction| {
		recorded.lock().unwrap().push((field, direction));
	}));

	let response = ListResponse::new(vec![json!({"id": 9, "title": "Splice"})], 9);
	response.load_into(&mut table);
	assert_eq!(table.total_pages(), 5);

	table.sort_by("title");
	table.sort_by("title");
	assert_eq!(
		*sorts.lock().unwrap(),
		vec![
			("title".to_string(), SortDirection::Asc),
			("title".to_string(), SortDirection::Desc),
		]
	);

	let filters = FilterComposer::new(vec![FilterDescriptor::checkbox("overdue", "Overdue")]);
	let query = ListQuery::for_page(&table, &filters, "");
	assert_eq!(
		query.to_query_string().unwrap(),
		"page=1&page_size=2&ordering=-title"
	);
}
