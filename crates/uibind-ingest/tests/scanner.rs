use std::fs;

use tempfile::tempdir;
use uibind_ingest::{DeclarationScanner, IngestError, read_header};

#[test]
fn read_header_returns_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ui.h");
    fs::write(&path, "extern lv_obj_t *ui_scr_main;\n").unwrap();

    let text = read_header(&path).unwrap();
    let scanner = DeclarationScanner::new(text);

    let decl = scanner.declarations().next().unwrap();
    assert_eq!(decl.identifier, "ui_scr_main");
    assert_eq!(decl.line, 1);
}

#[test]
fn missing_header_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.h");

    let err = read_header(&path).unwrap_err();

    match &err {
        IngestError::HeaderRead { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("absent.h"));
}

#[test]
fn declarations_inside_longer_lines_are_found() {
    let scanner = DeclarationScanner::new("  extern lv_obj_t *ui_pnl_top; // top bar\n");
    let ids: Vec<String> = scanner.declarations().map(|d| d.identifier).collect();
    assert_eq!(ids, vec!["ui_pnl_top"]);
}
