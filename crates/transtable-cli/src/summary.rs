//! Terminal tables for command output.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use transtable_core::RowStore;
use transtable_model::{Difference, DifferenceStatus, Row};

use crate::session::ExportSummary;

/// The current page of `store`: one line per row plus the pagination footer.
pub fn page_table(store: &RowStore) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell("Section"),
        header_cell("Key"),
        header_cell("Value"),
        header_cell("Reference"),
    ]);
    apply_page_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for row in store.page_rows() {
        table.add_row(page_row(row));
    }
    table
}

/// "Page 1 of 2 · 1-10 of 12 · 12 selected"
pub fn page_footer(store: &RowStore) -> String {
    let view = store.page_view();
    format!(
        "{} · {} · {} selected",
        view.page_label(),
        view.range_label(),
        store.selected_count()
    )
}

fn page_row(row: &Row) -> Vec<Cell> {
    let marker = if row.selected {
        Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    };
    vec![
        marker,
        Cell::new(&row.section).fg(Color::Blue),
        Cell::new(&row.key),
        text_cell(&row.value),
        text_cell(row.reference.as_deref().unwrap_or_default()),
    ]
}

pub fn difference_table(differences: &[Difference]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("File 1"),
        header_cell("File 2"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for difference in differences {
        table.add_row(vec![
            Cell::new(&difference.key_path).add_attribute(Attribute::Bold),
            text_cell(&difference.left),
            text_cell(&difference.right),
            status_cell(difference.status),
        ]);
    }
    table
}

pub fn files_table(names: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("File")]);
    apply_table_style(&mut table);
    for name in names {
        table.add_row(vec![Cell::new(name)]);
    }
    table
}

pub fn export_table(summary: &ExportSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Output"),
        header_cell("Exported"),
        header_cell("Translated"),
        header_cell("Entries"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(summary.output.display()),
        Cell::new(summary.exported).add_attribute(Attribute::Bold),
        match summary.translated {
            Some(count) => Cell::new(count).fg(Color::Green),
            None => dim_cell("-"),
        },
        Cell::new(summary.entries),
    ]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_page_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140)
        .set_constraints(vec![
            ColumnConstraint::Absolute(Width::Fixed(3)),
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
        ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: DifferenceStatus) -> Cell {
    let color = match status {
        DifferenceStatus::MissingInLeft | DifferenceStatus::MissingInRight => Color::Yellow,
        DifferenceStatus::DifferentValues => Color::Red,
    };
    Cell::new(status.label()).fg(color)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn text_cell(text: &str) -> Cell {
    if text.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(text)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
