//! Rendering of the grouped view and category listing.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalog_model::{ALL_SENTINEL, CategorySet, GroupedView, Item, ProductGroup};

use crate::commands::BrowseResult;

pub fn print_result(result: &BrowseResult) {
    if result.view.is_empty() {
        println!("No products found");
        return;
    }
    for group in &result.view {
        println!("{}", group.key.label());
        println!("{}", group_table(group));
        println!();
    }
    println!("{}", render_summary(&result.view));
}

/// Plain-text summary of the grouped view, one line per group plus a
/// total. No trailing newline.
pub fn render_summary(view: &GroupedView) -> String {
    let mut lines: Vec<String> = view
        .iter()
        .map(|group| format!("{}: {} items", group.key.label(), group.items.len()))
        .collect();
    lines.push(format!(
        "Total: {} items, {} groups",
        view.total_items(),
        view.len()
    ));
    lines.join("\n")
}

pub fn print_categories(set: &CategorySet, items: &[Item]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Items")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![dim_cell(ALL_SENTINEL), Cell::new(items.len())]);
    for label in set.labels() {
        let count = items.iter().filter(|item| &item.category == label).count();
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    println!("{table}");
}

fn group_table(group: &ProductGroup) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Title"),
        header_cell("Category"),
        header_cell("Rating"),
        header_cell("Price"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for item in &group.items {
        table.add_row(vec![
            Cell::new(item.id),
            Cell::new(&item.title),
            Cell::new(&item.category),
            Cell::new(format!("{:.1}", item.rating)),
            Cell::new(format!("{:.2}", item.price)),
        ]);
    }
    table
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
