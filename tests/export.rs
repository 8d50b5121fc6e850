// tests/export.rs
use std::fs;

use order_scrape::config::options::{ExportFormat, ExportOptions};
use order_scrape::present::{to_csv, to_json};
use order_scrape::{file, runner, Count, OrderRecord};

const HEADER: &str = "Назва товару,Посилання,Варіація,Кількість";

fn sample() -> Vec<OrderRecord> {
    vec![
        OrderRecord::new("USB кабель", "https://www.aliexpress.com/item/1.html", "Чорний", "2"),
        OrderRecord::new("Case", "https://www.aliexpress.com/item/2.html", "", Count::from(3u64)),
    ]
}

#[test]
fn json_round_trips_and_keeps_count_kind() {
    let records = sample();
    let text = to_json(&records).unwrap();

    // Pretty, two-space indent.
    assert!(text.starts_with("[\n  {\n    \"title\": \"USB кабель\""));
    assert!(text.contains("\"count\": \"2\""));
    assert!(text.contains("\"count\": 3"));

    let back: Vec<OrderRecord> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, records);
}

#[test]
fn csv_quotes_every_field_without_trailing_newline() {
    let records = vec![OrderRecord::new("A", "http://x", "v", Count::from(2u64))];
    let text = to_csv(&records).unwrap();
    assert_eq!(text, format!("{HEADER}\n\"A\",\"http://x\",\"v\",\"2\""));
}

#[test]
fn csv_rows_are_newline_separated() {
    let text = to_csv(&sample()).unwrap();
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines[2], "\"Case\",\"https://www.aliexpress.com/item/2.html\",\"\",\"3\"");
    assert!(!text.ends_with('\n'));
}

#[test]
fn csv_doubles_embedded_quotes() {
    let records = vec![OrderRecord::new("5\" screen", "u", "a,b", "1")];
    let text = to_csv(&records).unwrap();
    assert!(text.ends_with("\"5\"\" screen\",\"u\",\"a,b\",\"1\""));

    let mut rdr = csv::ReaderBuilder::new().from_reader(text.as_bytes());
    let row = rdr.records().next().unwrap().unwrap();
    assert_eq!(&row[0], "5\" screen");
    assert_eq!(&row[2], "a,b");
}

#[test]
fn write_artifact_uses_fixed_names() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = ExportOptions::with_dir(tmp.path().join("nested").join("out"));
    let records = sample();

    let json = file::write_artifact(&opts, ExportFormat::Json, &records).unwrap();
    let csv = file::write_artifact(&opts, ExportFormat::Csv, &records).unwrap();

    assert!(json.ends_with("orders.json"));
    assert!(csv.ends_with("orders.csv"));
    assert_eq!(fs::read_to_string(&json).unwrap(), to_json(&records).unwrap());
    assert_eq!(fs::read_to_string(&csv).unwrap(), to_csv(&records).unwrap());
}

#[test]
fn write_artifact_overwrites() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = ExportOptions::with_dir(tmp.path());

    file::write_artifact(&opts, ExportFormat::Json, &sample()).unwrap();
    let path = file::write_artifact(&opts, ExportFormat::Json, &[]).unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), "[]");
}

#[test]
fn write_artifact_rejects_file_in_place_of_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("out");
    fs::write(&blocker, "x").unwrap();

    let opts = ExportOptions::with_dir(&blocker);
    assert!(file::write_artifact(&opts, ExportFormat::Csv, &sample()).is_err());
}

#[test]
fn export_all_writes_in_order() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = ExportOptions::with_dir(tmp.path());

    let paths = runner::export_all(&opts, &[ExportFormat::Csv, ExportFormat::Json], &sample()).unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths[0].ends_with("orders.csv"));
    assert!(paths[1].ends_with("orders.json"));
    assert!(paths.iter().all(|p| p.is_file()));
}

#[test]
fn set_dir_blank_restores_default() {
    let mut opts = ExportOptions::with_dir("somewhere");
    opts.set_dir("   ");
    assert_eq!(opts, ExportOptions::default());
    assert!(opts.out_path(ExportFormat::Csv).ends_with("out/orders.csv"));
}
