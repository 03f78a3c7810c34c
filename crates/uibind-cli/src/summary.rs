//! Terminal tables for entries, notes and the type vocabularies.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use uibind_model::{BindingStore, ControlType, EventCode, NotesLog, PrefixTypeTable};

pub fn entries_table(store: &BindingStore) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Symbol"),
        header_cell("Name"),
        header_cell("Type"),
        header_cell("Consume"),
        header_cell("Produce"),
        header_cell("Event"),
        header_cell("Group"),
    ]);
    apply_table_style(&mut table);
    for index in [3, 4, 6] {
        align_column(&mut table, index, CellAlignment::Center);
    }
    for entry in store {
        table.add_row(vec![
            Cell::new(entry.identifier()),
            Cell::new(&entry.display_name),
            Cell::new(entry.control_type),
            flag_cell(entry.consume),
            flag_cell(entry.produce),
            event_cell(entry.produce, entry.event),
            flag_cell(entry.group),
        ]);
    }
    table
}

pub fn prefix_table(prefixes: &PrefixTypeTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Prefix"),
        header_cell("Control type"),
        header_cell("Default event"),
    ]);
    apply_table_style(&mut table);
    for (prefix, mapping) in prefixes.iter() {
        table.add_row(vec![
            Cell::new(prefix).add_attribute(Attribute::Bold),
            Cell::new(mapping.control_type),
            Cell::new(mapping.event),
        ]);
    }
    table
}

pub fn vocabulary_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Control types"), header_cell("Events")]);
    apply_table_style(&mut table);
    let rows = ControlType::ALL.len().max(EventCode::ALL.len());
    for index in 0..rows {
        table.add_row(vec![
            Cell::new(ControlType::ALL.get(index).map_or("", |t| t.as_str())),
            Cell::new(EventCode::ALL.get(index).map_or("", |e| e.as_str())),
        ]);
    }
    table
}

pub fn print_notes(notes: &NotesLog) {
    if notes.is_empty() {
        println!("No notes.");
        return;
    }
    println!("Notes:");
    for note in notes.lines() {
        println!("  {note}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn flag_cell(enabled: bool) -> Cell {
    if enabled {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("-").fg(Color::DarkGrey)
    }
}

/// Events only matter for producers; dim them otherwise.
fn event_cell(produce: bool, event: EventCode) -> Cell {
    if produce {
        Cell::new(event)
    } else {
        Cell::new(event).fg(Color::DarkGrey)
    }
}
