//! End-to-end tests of the `rollcost` binary.

use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const ORDER: &str = include_str!("../rollcost-core/tests/fixtures/order_basic.json");
const SETTINGS: &str = include_str!("../rollcost-core/tests/fixtures/settings.json");
const PARTS_ARRAY: &str = include_str!("../rollcost-core/tests/fixtures/parts_array.json");

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn rollcost(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rollcost"))
        .args(args)
        .output()
        .expect("binary runs")
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_summary_totals() {
    let dir = TempDir::new().unwrap();
    let order = write(&dir, "order.json", ORDER);
    let settings = write(&dir, "settings.json", SETTINGS);

    let out = rollcost(&["--input", arg(&order), "--settings", arg(&settings)]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("$7,155.00"), "{}", stdout);
    assert!(stdout.contains("Tax (8.25%)"), "{}", stdout);
    assert!(stdout.contains("$7,907.66"), "{}", stdout);
}

#[test]
fn test_output_file_holds_repriced_parts() {
    let dir = TempDir::new().unwrap();
    let order = write(&dir, "order.json", ORDER);
    let settings = write(&dir, "settings.json", SETTINGS);
    let output = dir.path().join("repriced.json");

    let out = rollcost(&[
        "--input",
        arg(&order),
        "--settings",
        arg(&settings),
        "--output",
        arg(&output),
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let totals: Vec<&str> = written["parts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["partTotal"].as_str().unwrap())
        .collect();
    assert_eq!(totals, vec!["340.00", "300.00", "4176.00", "2304.00", "35.00"]);
    assert_eq!(written["parts"][0]["quantity"], 2);
    assert_eq!(written["parts"][0]["clientPartNumber"], "SHELL-A");
    assert_eq!(written["drNumber"], 1042);
}

#[test]
fn test_written_record_keeps_its_shape() {
    let dir = TempDir::new().unwrap();
    let input = write(
        &dir,
        "parts.json",
        r#"[{"id": 1, "partNumber": 1, "partType": "flat_stock", "quantity": 2,
             "thickness": "1/4\"", "material": "A36", "width": "48", "length": "96",
             "materialTotal": "250", "materialMarkupPercent": "20", "laborTotal": "0"}]"#,
    );
    let output = dir.path().join("saved.json");

    let out = rollcost(&["--input", arg(&input), "--output", arg(&output)]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let part = &written["parts"][0];
    assert_eq!(part["quantity"], 2);
    assert_eq!(part["rollType"], serde_json::Value::Null);
    assert_eq!(part["materialSource"], "customer_supplied");
    assert_eq!(part["partTotal"], "600.00");

    let mut keys: Vec<&str> = part.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "id",
            "laborTotal",
            "length",
            "material",
            "materialDescription",
            "materialMarkupPercent",
            "materialSource",
            "materialTotal",
            "partNumber",
            "partTotal",
            "partType",
            "quantity",
            "rollType",
            "thickness",
            "width",
        ]
    );
}

#[test]
fn test_overrides_and_single_part() {
    let dir = TempDir::new().unwrap();
    let order = write(&dir, "order.json", ORDER);

    let out = rollcost(&[
        "--input",
        arg(&order),
        "--part",
        "1",
        "--tax-rate",
        "0.1",
        "--trucking",
        "0",
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Part #1"), "{}", stdout);
    assert!(!stdout.contains("Part #3 "), "{}", stdout);
    assert!(stdout.contains("Tax (10.00%)"), "{}", stdout);
}

#[test]
fn test_debug_output_is_json() {
    let dir = TempDir::new().unwrap();
    let order = write(&dir, "order.json", ORDER);
    let settings = write(&dir, "settings.json", SETTINGS);

    let out = rollcost(&["--input", arg(&order), "--settings", arg(&settings), "--debug"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["parts"].as_array().unwrap().len(), 5);
    assert_eq!(report["parts"][2]["derived"]["kind"], "service");
    assert_eq!(report["parts"][2]["derived"]["weld"]["total"], 4176.0);
    assert_eq!(report["validation"]["passed"], true);
}

#[test]
fn test_validate_only() {
    let dir = TempDir::new().unwrap();
    let good = write(&dir, "order.json", ORDER);
    let bad = write(&dir, "parts.json", PARTS_ARRAY);

    let out = rollcost(&["--input", arg(&good), "--validate"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let out = rollcost(&["--input", arg(&bad), "--validate"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Leg orientation is required"), "{}", stderr);
}

#[test]
fn test_invalid_order_is_not_written() {
    let dir = TempDir::new().unwrap();
    let bad = write(&dir, "parts.json", PARTS_ARRAY);
    let output = dir.path().join("out.json");

    let out = rollcost(&["--input", arg(&bad), "--output", arg(&output)]);
    assert!(!out.status.success());
    assert!(!output.exists());
}

#[test]
fn test_missing_input() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");

    let out = rollcost(&["--input", arg(&missing)]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Failed to load"), "{}", stderr);
}
