//! End-to-end session behaviour against a temporary project directory.

use std::fs;
use std::path::Path;

use tempfile::tempdir;
use uibind_core::{BindingOptions, CoreError, LoadStatus, Session};
use uibind_model::{ControlType, EventCode, ModelError};

const HEADER: &str = "\
// SquareLine generated
#pragma once
extern lv_obj_t *ui_scr_main;
extern lv_obj_t *ui_btn_submit;
extern lv_obj_t * ui_sld_volume;
extern lv_obj_t *ui_xyz_widget;
void ui_init(void);
";

fn project(dir: &Path, header: &str) -> BindingOptions {
    fs::write(dir.join("ui.h"), header).unwrap();
    BindingOptions::default().with_working_dir(dir)
}

#[test]
fn first_run_uses_defaults_and_notes_unmapped_symbols() {
    let dir = tempdir().unwrap();
    let options = project(dir.path(), HEADER);

    let mut session = Session::new(options);
    session.rescan().unwrap();
    let status = session.load();

    assert_eq!(status, LoadStatus::Missing);
    let ids: Vec<&str> = session.store().identifiers().collect();
    assert_eq!(ids, vec!["ui_scr_main", "ui_btn_submit", "ui_sld_volume"]);
    assert_eq!(session.notes().len(), 1);
    assert!(session.notes().lines()[0].contains("xyz_widget"));
}

#[test]
fn edits_survive_save_and_reopen() {
    let dir = tempdir().unwrap();
    let options = project(dir.path(), HEADER);

    let mut session = Session::open(options.clone()).unwrap();
    session.edit("ui_btn_submit", "pro", "true").unwrap();
    session.edit("ui_sld_volume", "consume", "yes").unwrap();
    session.edit("ui_sld_volume", "name", "Volume").unwrap();
    session.edit("ui_scr_main", "grp", "on").unwrap();
    let report = session.save(&session.emit_options(false, None)).unwrap();

    assert!(report.document_path.exists());
    assert!(report.source.contains(
        "    host.AddProducer(\"submit\", ui_btn_submit, BUTTON_CT, LV_EVENT_CLICKED);\n"
    ));
    assert!(report
        .source
        .contains("    host.AddConsumer(\"Volume\", ui_sld_volume, SLIDER_CT);\n"));
    assert!(report
        .source
        .contains("    lv_group_add_obj(group, ui_scr_main);\n"));

    let reopened = Session::open(options).unwrap();
    assert_eq!(reopened.store(), session.store());
}

#[test]
fn unreadable_header_is_fatal_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let options = BindingOptions::default().with_working_dir(dir.path());

    let err = Session::open(options.clone()).unwrap_err();

    assert!(err.is_fatal());
    assert!(matches!(err, CoreError::Ingest(_)));
    assert!(err.suggestion().unwrap().contains("--include"));
    assert!(!options.document_path().exists());
    assert!(!options.source_path().exists());
}

#[test]
fn removed_symbols_become_stale_notes() {
    let dir = tempdir().unwrap();
    let options = project(dir.path(), HEADER);
    let mut session = Session::open(options.clone()).unwrap();
    session.edit("ui_btn_submit", "pro", "1").unwrap();
    session.save(&session.emit_options(false, None)).unwrap();

    fs::write(dir.path().join("ui.h"), "extern lv_obj_t *ui_sld_volume;\n").unwrap();
    let session = Session::open(options).unwrap();

    let stale: Vec<&String> = session
        .notes()
        .lines()
        .iter()
        .filter(|n| n.contains("not in current code"))
        .collect();
    assert_eq!(stale.len(), 2);
    assert!(stale[0].starts_with("ui_scr_main") || stale[0].starts_with("ui_btn_submit"));
    assert_eq!(session.store().len(), 1);
}

#[test]
fn corrupt_document_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let options = project(dir.path(), HEADER);
    fs::write(options.document_path(), "[1, 2").unwrap();

    let mut session = Session::new(options);
    session.rescan().unwrap();

    assert_eq!(session.load(), LoadStatus::Unparsable);
    assert!(!session.store().get("ui_btn_submit").unwrap().produce);
}

#[test]
fn non_utf8_document_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let options = project(dir.path(), HEADER);
    fs::write(options.document_path(), [0xFF, 0xFE, b'{', b'}']).unwrap();

    let mut session = Session::new(options.clone());
    session.rescan().unwrap();
    assert_eq!(session.load(), LoadStatus::Unparsable);

    let session = Session::open(options).unwrap();
    assert_eq!(session.store().len(), 3);
}

#[test]
fn directory_at_document_path_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let options = project(dir.path(), HEADER);
    fs::create_dir(options.document_path()).unwrap();

    let mut session = Session::new(options.clone());
    session.rescan().unwrap();
    assert_eq!(session.load(), LoadStatus::Unreadable);
    assert!(!session.store().get("ui_btn_submit").unwrap().produce);

    assert!(Session::open(options).is_ok());
}

#[test]
fn accept_all_keeps_unmapped_symbols_as_labels() {
    let dir = tempdir().unwrap();
    let options = project(dir.path(), HEADER).with_accept_all(true);

    let session = Session::open(options).unwrap();

    let entry = session.store().get("ui_xyz_widget").unwrap();
    assert_eq!(entry.control_type, ControlType::Label);
    assert_eq!(entry.display_name, "xyz_widget");
    assert!(session.notes().is_empty());
}

#[test]
fn rescan_discards_unsaved_edits() {
    let dir = tempdir().unwrap();
    let options = project(dir.path(), HEADER);
    let mut session = Session::open(options).unwrap();
    session.edit("ui_btn_submit", "event", "LV_EVENT_RELEASED").unwrap();

    session.rescan().unwrap();

    assert_eq!(
        session.store().get("ui_btn_submit").unwrap().event,
        EventCode::Clicked
    );
}

#[test]
fn invalid_edits_are_rejected() {
    let dir = tempdir().unwrap();
    let options = project(dir.path(), HEADER);
    let mut session = Session::open(options).unwrap();

    let err = session.edit("ui_btn_missing", "pro", "true").unwrap_err();
    assert!(matches!(
        err,
        CoreError::Edit(ModelError::UnknownIdentifier(_))
    ));
    let err = session.edit("ui_btn_submit", "identifier", "x").unwrap_err();
    assert!(matches!(err, CoreError::Edit(ModelError::ImmutableField(_))));
    let err = session.edit("ui_btn_submit", "type", "WIDGET_CT").unwrap_err();
    assert!(matches!(
        err,
        CoreError::Edit(ModelError::UnknownControlType(_))
    ));
    assert!(!err.is_fatal());
}

#[test]
fn saved_document_is_json_with_expected_keys() {
    let dir = tempdir().unwrap();
    let options = project(dir.path(), HEADER);
    let session = Session::open(options.clone()).unwrap();
    session.save(&session.emit_options(true, None)).unwrap();

    let text = fs::read_to_string(options.document_path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["variables"][1], "ui_btn_submit");
    assert_eq!(json["values"]["ui_btn_submit_type"], "BUTTON_CT");
    assert_eq!(json["values"]["ui_scr_main_event"], "LV_EVENT_GESTURE");
    assert_eq!(json["values"]["ui_sld_volume_grp"], false);

    let source = fs::read_to_string(options.source_path()).unwrap();
    assert!(source.contains("    // lv_group_add_obj(group, ui_btn_submit);"));
}
