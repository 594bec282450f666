use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_model::{CanonicalField, NormalizedTable};
use roster_transform::NormalizeResult;

/// Builds the printable table: a row index column, then the output columns.
pub fn render_table(table: &NormalizedTable) -> Table {
    let mut rendered = Table::new();
    let mut header = vec![header_cell("")];
    header.extend(
        CanonicalField::OUTPUT_ORDER
            .iter()
            .map(|field| header_cell(field.as_str())),
    );
    rendered.set_header(header);
    apply_table_style(&mut rendered);
    if let Some(column) = rendered.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (idx, record) in table.iter().enumerate() {
        let mut row = vec![dim_cell(idx)];
        row.extend(
            CanonicalField::OUTPUT_ORDER
                .iter()
                .map(|field| Cell::new(record.get(*field))),
        );
        rendered.add_row(row);
    }
    rendered
}

pub fn print_table(table: &NormalizedTable) {
    println!("Processed Data:");
    println!("{}", render_table(table));
}

pub fn print_json(table: &NormalizedTable) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(table)?);
    Ok(())
}

/// One-line run summary plus the dropped rows, on stderr.
pub fn print_summary(result: &NormalizeResult) {
    let outcome = &result.outcome;
    eprintln!(
        "{} accepted, {} rejected, {} unrecognized column(s)",
        outcome.table.len(),
        outcome.rejected.len(),
        result.mapping.unrecognized().len()
    );
    for rejection in &outcome.rejected {
        eprintln!("- {rejection}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
