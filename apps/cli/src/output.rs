//! Rendering command results as tables or JSON.

use serde::Serialize;
use stockroom_core::{render_table, TableRow};

use crate::error::UserError;

/// Output mode chosen by `--json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Table,
    Json,
}

impl Output {
    pub fn from_flag(json: bool) -> Self {
        if json {
            Output::Json
        } else {
            Output::Table
        }
    }

    /// Renders a list of entities.
    pub fn rows<T: TableRow + Serialize>(&self, rows: &[T]) -> String {
        match self {
            Output::Table => render_table(rows),
            Output::Json => to_json(&rows),
        }
    }

    /// Renders one entity.
    pub fn row<T: TableRow + Serialize>(&self, row: &T) -> String {
        match self {
            Output::Table => render_table(std::slice::from_ref(row)),
            Output::Json => to_json(row),
        }
    }

    /// Renders a short confirmation, or `value` as JSON.
    pub fn message(&self, text: &str, value: &serde_json::Value) -> String {
        match self {
            Output::Table => text.to_string(),
            Output::Json => to_json(value),
        }
    }

    pub fn error(&self, err: &UserError) -> String {
        match self {
            Output::Table => format!("error: {}", err),
            Output::Json => to_json(err),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    // Serializing plain structs and JSON values cannot fail.
    serde_json::to_string_pretty(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use stockroom_core::Product;

    fn widget() -> Product {
        Product {
            id: 1,
            name: "Widget".into(),
            quantity: 5,
        }
    }

    #[test]
    fn test_table_row() {
        let text = Output::Table.row(&widget());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "id  name    quantity");
        assert_eq!(lines[2], "1   Widget  5");
    }

    #[test]
    fn test_json_rows() {
        let text = Output::Json.rows(&[widget()]);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["name"], "Widget");
        assert_eq!(value[0]["quantity"], 5);
    }

    #[test]
    fn test_error_rendering() {
        let err = UserError::new(ErrorCode::NotFound, "Client with id=3 was not found");
        assert_eq!(
            Output::Table.error(&err),
            "error: Client with id=3 was not found"
        );
        assert!(Output::Json.error(&err).contains("NOT_FOUND"));
    }
}
