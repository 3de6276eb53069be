//! # Table Projections
//!
//! Every listable entity maps itself to ordered `(column, value)` pairs.
//! The CLI feeds those rows to [`render_table`] for its `list` views.
//!
//! ```rust
//! use stockroom_core::table::{render_table, TableRow};
//! use stockroom_core::Client;
//!
//! let clients = vec![Client { id: 1, name: "Alice".into() }];
//! let text = render_table(&clients);
//! assert!(text.starts_with("id"));
//! assert!(text.contains("Alice"));
//! ```

use crate::types::{Client, Order, Product};

/// Static, typed projection of an entity into table cells.
pub trait TableRow {
    /// Column headers, in display order.
    const HEADERS: &'static [&'static str];

    /// One `(column, value)` pair per header, in the same order.
    fn columns(&self) -> Vec<(&'static str, String)>;
}

impl TableRow for Client {
    const HEADERS: &'static [&'static str] = &["id", "name"];

    fn columns(&self) -> Vec<(&'static str, String)> {
        vec![("id", self.id.to_string()), ("name", self.name.clone())]
    }
}

impl TableRow for Product {
    const HEADERS: &'static [&'static str] = &["id", "name", "quantity"];

    fn columns(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.to_string()),
            ("name", self.name.clone()),
            ("quantity", self.quantity.to_string()),
        ]
    }
}

impl TableRow for Order {
    const HEADERS: &'static [&'static str] = &["id", "client_id", "product_id", "amount", "placed_at"];

    fn columns(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.to_string()),
            ("client_id", self.client_id.to_string()),
            ("product_id", self.product_id.to_string()),
            ("amount", self.amount.to_string()),
            ("placed_at", self.placed_at.format("%Y-%m-%d %H:%M:%S").to_string()),
        ]
    }
}

/// Renders rows as a left-aligned, space-padded text table.
///
/// An empty slice still prints the header and rule lines.
pub fn render_table<T: TableRow>(rows: &[T]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.columns().into_iter().map(|(_, value)| value).collect())
        .collect();

    let mut widths: Vec<usize> = T::HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, T::HEADERS.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &cells {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }

    out
}

fn push_line<'a>(out: &mut String, values: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = values
        .zip(widths)
        .map(|(value, width)| format!("{:<width$}", value, width = *width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
