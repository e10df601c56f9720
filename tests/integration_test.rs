//! Integration tests for the po-mapper binary.
//!
//! These tests write input documents into a temporary directory and run the
//! full binary against them.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

// --- Helper Functions ---

/// Helper to get the binary command for testing.
fn get_cmd() -> Command {
    Command::cargo_bin("po-mapper").unwrap()
}

/// One order with one item and one quantity record.
const LITERAL_PO: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<DOCUMENT>
  <POS>
    <PO po_sid="100" vend_code="V42" created_date="2024-01-01">
      <PO_FEES><PO_FEE/></PO_FEES>
      <PO_TERMS/>
      <PO_APPROVALS/>
      <PO_ITEMS>
        <PO_ITEM item_pos="1" price="9.99">
          <INVN_BASE_ITEM/>
          <PO_QTYS><PO_QTY store_no="5" ord_qty="10" rcvd_qty="8"/></PO_QTYS>
        </PO_ITEM>
      </PO_ITEMS>
    </PO>
  </POS>
</DOCUMENT>
"#;

fn convert(dir: &Path, input: &str) -> Command {
    let input_path = dir.join("po.xml");
    fs::write(&input_path, input).unwrap();

    let mut cmd = get_cmd();
    cmd.arg("--input")
        .arg(&input_path)
        .arg("--xml-output")
        .arg(dir.join("new.xml"))
        .arg("--json-output")
        .arg(dir.join("new.json"));
    cmd
}

// --- Test Cases ---

#[test]
fn test_literal_scenario() {
    let dir = tempdir().unwrap();

    convert(dir.path(), LITERAL_PO)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sid: 100, Vendor: V42, Date: 2024-01-01",
        ))
        .stdout(predicate::str::contains("Output"))
        .stdout(predicate::str::contains(r#"<PO po_sid="100""#));

    let xml = fs::read_to_string(dir.path().join("new.xml")).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<DOCUMENT>"));
    assert!(xml.contains(r#"vend_code="V42""#));
    assert!(xml.contains(r#"created_date="2024-01-01""#));
    assert!(xml.contains(r#"<PO_ITEM item_pos="1""#));
    assert!(xml.contains(r#"price="9.99""#));
    assert!(xml.contains(r#"store_no="5" ord_qty="10" rcvd_qty="8""#));

    let json = fs::read_to_string(dir.path().join("new.json")).unwrap();
    assert!(!json.contains('\n'));
    let value: Value = serde_json::from_str(&json).unwrap();
    let order = &value["POS"]["PO"][0];
    assert_eq!(order["po_sid"], "100");
    assert_eq!(order["vend_code"], "V42");
    assert_eq!(order["created_date"], "2024-01-01");
    let item = &order["PO_ITEMS"]["PO_ITEM"][0];
    assert_eq!(item["item_pos"], "1");
    assert_eq!(item["price"], "9.99");
    assert_eq!(item["PO_QTYS"]["PO_QTY"]["store_no"], "5");
    assert_eq!(item["PO_QTYS"]["PO_QTY"]["ord_qty"], "10");
    assert_eq!(item["PO_QTYS"]["PO_QTY"]["rcvd_qty"], "8");
}

#[test]
fn test_quiet_suppresses_echo() {
    let dir = tempdir().unwrap();

    convert(dir.path(), LITERAL_PO)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(dir.path().join("new.xml").exists());
    assert!(dir.path().join("new.json").exists());
}

#[test]
fn test_empty_document_still_writes_outputs() {
    let dir = tempdir().unwrap();

    convert(dir.path(), "<DOCUMENT><POS/></DOCUMENT>")
        .assert()
        .success()
        .stderr(predicate::str::contains("no purchase orders"));

    let json = fs::read_to_string(dir.path().join("new.json")).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["POS"]["PO"], Value::Array(vec![]));
    assert!(
        fs::read_to_string(dir.path().join("new.xml"))
            .unwrap()
            .contains("<POS/>")
    );
}

#[test]
fn test_malformed_input_fails_without_outputs() {
    let dir = tempdir().unwrap();

    convert(dir.path(), r#"<DOCUMENT><POS><PO po_sid="1" vend_code="V1""#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed XML input"));

    assert!(!dir.path().join("new.xml").exists());
    assert!(!dir.path().join("new.json").exists());
}

#[test]
fn test_schema_mismatch_fails() {
    let dir = tempdir().unwrap();

    convert(dir.path(), "<ORDERS><POS/></ORDERS>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("purchase order schema"));

    assert!(!dir.path().join("new.xml").exists());
}

#[test]
fn test_file_not_found() {
    let dir = tempdir().unwrap();

    let mut cmd = get_cmd();
    cmd.arg("--input")
        .arg(dir.path().join("nonexistent-file.xml"))
        .arg("--xml-output")
        .arg(dir.path().join("new.xml"))
        .arg("--json-output")
        .arg(dir.path().join("new.json"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn test_default_paths_in_working_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("po.xml"), LITERAL_PO).unwrap();

    get_cmd()
        .current_dir(dir.path())
        .arg("--quiet")
        .assert()
        .success();

    assert!(dir.path().join("new.xml").exists());
    assert!(dir.path().join("new.json").exists());
}
