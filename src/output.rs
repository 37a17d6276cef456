//! Canonical rendering of sprig values.
//!
//! Every value has exactly one textual form: arrays and objects render
//! multi-line with one child per line and two spaces of indentation per
//! nesting level; scalars render inline. This form is what `save` writes
//! to disk and what [`crate::json::decode`] reads back, so it must stay
//! byte-stable; round-trip tests depend on it.
//!
//! String contents pass through unescaped, matching the front end, which
//! stores string lexemes verbatim.
//!
//! # Examples
//!
//! ```
//! use sprig_lang::{Value, output::render};
//!
//! let v = Value::Array(vec![Value::Number(1.0), Value::String("a".into())]);
//! assert_eq!(render(&v), "[\n  1,\n  \"a\"\n]");
//! ```

use crate::value::Value;

pub struct JsonPrinter {
    indent_unit: &'static str,
}

impl JsonPrinter {
    pub fn new() -> Self {
        JsonPrinter { indent_unit: "  " }
    }

    pub fn print(&self, value: &Value) -> String {
        self.print_value(value, 0)
    }

    fn print_value(&self, value: &Value, level: usize) -> String {
        match value {
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => format!("\"{}\"", s),
            Value::Array(arr) => self.print_array(arr, level),
            Value::Object(fields) => self.print_object(fields, level),
        }
    }

    fn print_array(&self, arr: &[Value], level: usize) -> String {
        if arr.is_empty() {
            return "[]".to_string();
        }

        let mut result = "[\n".to_string();
        let items: Vec<String> = arr
            .iter()
            .map(|v| {
                format!(
                    "{}{}",
                    self.indent(level + 1),
                    self.print_value(v, level + 1)
                )
            })
            .collect();
        result.push_str(&items.join(",\n"));
        result.push('\n');
        result.push_str(&self.indent(level));
        result.push(']');
        result
    }

    fn print_object(&self, fields: &[(String, Value)], level: usize) -> String {
        if fields.is_empty() {
            return "{}".to_string();
        }

        // Field order is significant; never sort.
        let mut result = "{\n".to_string();
        let items: Vec<String> = fields
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}\"{}\": {}",
                    self.indent(level + 1),
                    name,
                    self.print_value(value, level + 1)
                )
            })
            .collect();
        result.push_str(&items.join(",\n"));
        result.push('\n');
        result.push_str(&self.indent(level));
        result.push('}');
        result
    }

    fn indent(&self, level: usize) -> String {
        self.indent_unit.repeat(level)
    }
}

impl Default for JsonPrinter {
    fn default() -> Self {
        JsonPrinter::new()
    }
}

/// Renders a value in the canonical pretty-printed form.
///
/// This is the exact text `save` writes to disk.
pub fn render(value: &Value) -> String {
    JsonPrinter::new().print(value)
}
