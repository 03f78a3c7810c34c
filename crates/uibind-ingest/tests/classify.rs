//! Classification behaviour over scanned headers.

use proptest::prelude::*;
use uibind_ingest::{
    Classification, Classifier, DeclarationScanner, SymbolDeclaration, build_store,
};
use uibind_model::{ControlType, EventCode, NotesLog, PrefixTypeTable};

fn declaration(identifier: &str) -> SymbolDeclaration {
    SymbolDeclaration {
        identifier: identifier.to_string(),
        line: 1,
    }
}

fn button_table() -> PrefixTypeTable {
    PrefixTypeTable::empty()
        .with_mapping("btn", ControlType::Button, EventCode::Clicked)
        .unwrap()
}

#[test]
fn mapped_symbol_gets_table_defaults() {
    let table = button_table();
    let scanner = DeclarationScanner::new("extern lv_obj_t *ui_btn_submit;\n");
    let classifier = Classifier::new(&table, "ui_", false);

    let decl = scanner.declarations().next().unwrap();
    let Classification::Mapped(entry) = classifier.classify(&decl) else {
        panic!("expected mapped classification");
    };

    assert_eq!(entry.identifier(), "ui_btn_submit");
    assert_eq!(entry.display_name, "submit");
    assert_eq!(entry.control_type, ControlType::Button);
    assert_eq!(entry.event, EventCode::Clicked);
    assert!(!entry.produce && !entry.consume && !entry.group);
}

#[test]
fn unmapped_symbol_is_rejected_with_note() {
    let table = PrefixTypeTable::standard();
    let scanner = DeclarationScanner::new("extern lv_obj_t *ui_xyz_widget;\n");
    let classifier = Classifier::new(&table, "ui_", false);
    let mut notes = NotesLog::new();

    let (store, summary) = build_store(scanner.declarations(), &classifier, &mut notes);

    assert!(store.is_empty());
    assert_eq!(summary.rejected, 1);
    assert_eq!(notes.len(), 1);
    assert!(notes.lines()[0].contains("xyz_widget"));
}

#[test]
fn accept_all_falls_back_to_label() {
    let table = PrefixTypeTable::standard();
    let classifier = Classifier::new(&table, "ui_", true);

    let Classification::Fallback(entry) = classifier.classify(&declaration("ui_Xyz_Widget")) else {
        panic!("expected fallback classification");
    };

    assert_eq!(entry.display_name, "xyz_widget");
    assert_eq!(entry.control_type, ControlType::Label);
    assert_eq!(entry.event, EventCode::ValueChanged);
}

#[test]
fn prefix_matching_is_case_sensitive() {
    let table = button_table();
    let classifier = Classifier::new(&table, "ui_", false);
    assert!(matches!(
        classifier.classify(&declaration("ui_BTN_ok")),
        Classification::Rejected { .. }
    ));
}

#[test]
fn display_name_is_lowercased() {
    let table = button_table();
    let classifier = Classifier::new(&table, "ui_", false);
    let classification = classifier.classify(&declaration("ui_btnStartRun"));
    assert_eq!(classification.entry().unwrap().display_name, "startrun");
}

#[test]
fn identifier_without_constant_prefix_is_classified_whole() {
    let table = button_table();
    let classifier = Classifier::new(&table, "ui_", false);
    let classification = classifier.classify(&declaration("btn_global"));
    assert_eq!(classification.entry().unwrap().display_name, "global");
}

#[test]
fn store_follows_header_order_and_skips_duplicates() {
    let header = "\
#pragma once
extern lv_obj_t *ui_sld_volume;
extern lv_obj_t *ui_btn_play;
extern lv_obj_t *ui_zzz_hidden;
extern lv_obj_t *ui_sld_volume;
extern lv_obj_t *ui_lbl_status;
";
    let table = PrefixTypeTable::standard();
    let classifier = Classifier::new(&table, "ui_", false);
    let scanner = DeclarationScanner::new(header);
    let mut notes = NotesLog::new();

    let (store, summary) = build_store(scanner.declarations(), &classifier, &mut notes);

    let order: Vec<&str> = store.identifiers().collect();
    assert_eq!(order, vec!["ui_sld_volume", "ui_btn_play", "ui_lbl_status"]);
    assert_eq!(summary.declarations, 5);
    assert_eq!(summary.duplicates, 1);
    assert_eq!(summary.rejected, 1);
}

#[test]
fn scanner_restarts_from_the_top() {
    let scanner = DeclarationScanner::new("extern lv_obj_t *ui_btn_a;\nextern lv_obj_t *ui_btn_b;\n");
    let first: Vec<_> = scanner.declarations().collect();
    let second: Vec<_> = scanner.declarations().collect();
    assert_eq!(first, second);
    assert_eq!(first[1].line, 2);
}

proptest! {
    #[test]
    fn classification_follows_table(
        name in "[a-z]{3}[a-z_]{0,8}",
        accept_all in any::<bool>(),
    ) {
        let table = PrefixTypeTable::standard();
        let classifier = Classifier::new(&table, "ui_", accept_all);
        let identifier = format!("ui_{name}");
        let result = classifier.classify(&declaration(&identifier));

        match table.lookup(&name[..3]) {
            Some(mapping) => {
                let Classification::Mapped(entry) = result else {
                    return Err(TestCaseError::fail(format!("expected mapped for {identifier}")));
                };
                prop_assert_eq!(entry.control_type, mapping.control_type);
                prop_assert_eq!(entry.event, mapping.event);
            }
            None if accept_all => {
                let fallback = matches!(result, Classification::Fallback(_));
                prop_assert!(fallback, "expected fallback for {}", identifier);
            }
            None => {
                let rejected = matches!(
                    &result,
                    Classification::Rejected { stripped_name } if *stripped_name == name
                );
                prop_assert!(rejected, "expected rejection for {}", identifier);
            }
        }
    }
}
