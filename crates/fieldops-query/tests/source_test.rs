//! Record source round trips through a table view and a filter bar

use async_trait::async_trait;
use fieldops_filters::{DraftInput, FilterComposer, FilterDescriptor};
use fieldops_query::{ListQuery, ListResponse, QueryError, RecordSource, SourceError, fetch_page};
use fieldops_tables::{Column, Mode, TableView};
use parking_lot::Mutex;
use rstest::*;
use serde_json::{Value, json};

/// Serves a fixed list of materials and records every query string it gets
struct FakeSource {
	materials: Vec<Value>,
	reported_total: Option<usize>,
	seen: Mutex<Vec<String>>,
}

#[async_trait]
impl RecordSource for FakeSource {
	type Record = Value;

	async fn list(&self, resource: &str, query: &ListQuery) -> Result<ListResponse<Value>, SourceError> {
		if resource != "materials" {
			return Err(SourceError::Status {
				status: 404,
				message: format!("unknown resource {}", resource),
			});
		}
		self.seen.lock().push(query.to_query_string()?);

		let start = (query.page - 1) * query.page_size;
		let records: Vec<Value> = self
			.materials
			.iter()
			.skip(start)
			.take(query.page_size)
			.cloned()
			.collect();
		let total = self.reported_total.unwrap_or(self.materials.len());
		Ok(ListResponse::new(records, total))
	}
}

#[fixture]
fn source() -> FakeSource {
	FakeSource {
		materials: (1..=23)
			.map(|i| json!({"id": i, "name": format!("Drop cable {}", i)}))
			.collect(),
		reported_total: None,
		seen: Mutex::new(Vec::new()),
	}
}

#[fixture]
fn view() -> TableView<Value> {
	TableView::new(
		vec![
			Column::field("ID", "id").into(),
			Column::field("Name", "name").sortable().into(),
		],
		Vec::new(),
		Mode::ServerSide { total_count: 0 },
	)
}

#[rstest]
#[tokio::test]
async fn test_page_flow_uses_applied_filters_only(source: FakeSource, mut view: TableView<Value>) {
	let mut filters = FilterComposer::new(vec![FilterDescriptor::select(
		"category",
		"Category",
		[("CABLE", "Cable"), ("SPLITTER", "Splitter")],
	)]);

	view.set_loading(true);
	let query = ListQuery::for_page(&view, &filters, "");
	let response = fetch_page(&source, "materials", &query).await.unwrap();
	response.load_into(&mut view);

	assert!(!view.is_loading());
	assert_eq!(view.total_count(), 23);
	assert_eq!(view.total_pages(), 3);
	assert_eq!(view.visible_rows().len(), 10);

	filters.set_draft_value("category", DraftInput::text("CABLE"));
	view.sort_by("name");
	view.change_page(3);
	let query = ListQuery::for_page(&view, &filters, " drop ");
	let response = fetch_page(&source, "materials", &query).await.unwrap();
	response.load_into(&mut view);
	assert_eq!(view.visible_rows().len(), 3);

	filters.apply();
	let query = ListQuery::for_page(&view, &filters, "");
	fetch_page(&source, "materials", &query).await.unwrap();

	assert_eq!(
		*source.seen.lock(),
		vec![
			"page=1&page_size=10".to_string(),
			"page=3&page_size=10&search=drop&ordering=name".to_string(),
			"page=3&page_size=10&ordering=name&category=CABLE".to_string(),
		]
	);
}

#[rstest]
#[tokio::test]
async fn test_inconsistent_total_is_rejected(mut source: FakeSource) {
	source.reported_total = Some(4);
	let err = fetch_page(&source, "materials", &ListQuery::new(1, 10))
		.await
		.unwrap_err();
	assert!(matches!(
		err,
		SourceError::Query(QueryError::TotalBelowReturned {
			total_count: 4,
			returned: 10
		})
	));
}

#[rstest]
#[tokio::test]
async fn test_source_errors_pass_through(source: FakeSource) {
	let err = fetch_page(&source, "invoices", &ListQuery::default())
		.await
		.unwrap_err();
	assert!(matches!(err, SourceError::Status { status: 404, .. }));
	assert_eq!(err.to_string(), "Service error 404: unknown resource invoices");
}

#[rstest]
#[tokio::test]
async fn test_dyn_source(source: FakeSource) {
	let source: Box<dyn RecordSource<Record = Value>> = Box::new(source);
	let response = fetch_page(source.as_ref(), "materials", &ListQuery::new(3, 10))
		.await
		.unwrap();
	assert_eq!(response.records.len(), 3);
	assert_eq!(response.total_count, 23);
}
