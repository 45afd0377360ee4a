use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vfd_report::{COLUMNS, report_row_cells, total_row_cells};

use crate::commands::ReportRunResult;

pub fn print_summary(result: &ReportRunResult) {
    if let Some(path) = &result.csv_path {
        println!("Report: {}", path.display());
    }
    if let Some(path) = &result.json_path {
        println!("JSON: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(COLUMNS.iter().map(|label| header_cell(label)));
    apply_table_style(&mut table);
    // Everything after the Model column is numeric.
    for index in 2..COLUMNS.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }

    for row in &result.report.rows {
        table.add_row(report_row_cells(row));
    }
    let total = total_row_cells(&result.report);
    table.add_row(total.into_iter().enumerate().map(|(index, cell)| {
        if index == 1 || index == 2 {
            Cell::new(cell)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(cell)
        }
    }));

    println!("{table}");
    println!("Total quantity: {}", result.report.total_qty);
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
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
