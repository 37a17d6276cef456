/// A JSON value as the sprig scripting language sees it.
///
/// All six JSON kinds are represented. Two choices differ from a typical
/// JSON tree and are load-bearing for the language semantics:
///
/// - every number is an `f64`, whatever its written form (`6` and `6.0`
///   load as the same value);
/// - object fields keep insertion order and may repeat a name; lookup
///   returns the first match.
///
/// Equality is structural and order-sensitive for arrays and object fields.
///
/// # Examples
///
/// ```
/// use sprig_lang::Value;
///
/// let doc = Value::Object(vec![
///     ("curso".to_string(), Value::String("LEI".to_string())),
///     ("creditos".to_string(), Value::Number(18.0)),
/// ]);
///
/// assert_eq!(doc.get("curso"), Some(&Value::String("LEI".to_string())));
/// assert_eq!(doc.get("horas"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Double-precision number
    Number(f64),

    /// UTF-8 string (contents stored verbatim, no escape processing)
    String(String),

    /// Array of values
    Array(Vec<Value>),

    /// Object fields in insertion order; names need not be unique
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Look up a field on an object, first match wins.
    ///
    /// Returns `None` for non-objects and for missing names.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(fields) => fields
                .iter()
                .find(|(field, _)| field == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// Get as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Human-readable kind name, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl std::fmt::Display for Value {
    /// Renders the canonical pretty-printed form (see [`crate::output`]).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::output::render(self))
    }
}
