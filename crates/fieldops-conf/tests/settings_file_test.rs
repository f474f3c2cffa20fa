use fieldops_conf::{ConfError, DashboardSettings};
use rstest::*;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[fixture]
fn settings_file() -> NamedTempFile {
	let mut file = NamedTempFile::new().unwrap();
	writeln!(
		file,
		r#"
[table]
page_size = 25
page_size_options = [25, 50]
skeleton_rows = 5
max_page_buttons = 7
empty_message = "No installers found"

[search]
debounce_ms = 500

[status_colors]
ON_HOLD = "warning"
"#
	)
	.unwrap();
	file
}

#[rstest]
fn test_load_from_file(settings_file: NamedTempFile) {
	let settings = DashboardSettings::from_file(settings_file.path()).unwrap();

	assert_eq!(settings.table.page_size, 25);
	assert_eq!(settings.table.page_size_options, vec![25, 50]);
	assert_eq!(settings.table.skeleton_rows, 5);
	assert_eq!(settings.table.max_page_buttons, 7);
	assert_eq!(settings.table.empty_message, "No installers found");
	assert_eq!(settings.search_debounce(), Duration::from_millis(500));
	assert_eq!(settings.status_palette().color_for("on hold"), "warning");
}

#[rstest]
fn test_missing_file_is_io_error() {
	let dir = tempfile::tempdir().unwrap();
	let result = DashboardSettings::from_file(dir.path().join("missing.toml"));
	assert!(matches!(result, Err(ConfError::Io(_))));
}

#[rstest]
fn test_partial_file_keeps_other_defaults() {
	let mut file = NamedTempFile::new().unwrap();
	writeln!(file, "[search]\ndebounce_ms = 150").unwrap();

	let settings = DashboardSettings::from_file(file.path()).unwrap();
	assert_eq!(settings.search.debounce_ms, 150);
	assert_eq!(settings.table.page_size, 10);
	assert_eq!(settings.table.empty_message, "No data available");
}
