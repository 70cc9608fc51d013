//! Formatting of values bound for C preprocessor constants.

use crate::config::Value;

/// Prepares a value for use as the body of a `#define`.
///
/// Strings are wrapped in double quotes. Their contents are trusted and NOT
/// escaped: a value containing `"`, `\` or a line break is emitted verbatim
/// and only logged as a warning. Every other variant passes through.
///
/// ```
/// use vuengine_codegen::coerce::coerce_for_code_constant;
/// use vuengine_codegen::config::Value;
///
/// assert_eq!(coerce_for_code_constant(&Value::from("Pong")), Value::from("\"Pong\""));
/// assert_eq!(coerce_for_code_constant(&Value::from(3)), Value::from(3));
/// ```
pub fn coerce_for_code_constant(value: &Value) -> Value {
    match value {
        Value::String(s) => {
            if s.contains(['"', '\\', '\n', '\r']) {
                tracing::warn!(value = %s, "string constant emitted without escaping");
            }
            Value::String(format!("\"{s}\""))
        }
        Value::Integer(_)
        | Value::Float(_)
        | Value::Boolean(_)
        | Value::Array(_)
        | Value::Table(_) => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Section;

    #[test]
    fn test_strings_are_quoted() {
        assert_eq!(coerce_for_code_constant(&Value::from("Pong")), Value::from("\"Pong\""));
        assert_eq!(coerce_for_code_constant(&Value::from("")), Value::from("\"\""));
    }

    #[test]
    fn test_embedded_quotes_are_not_escaped() {
        let coerced = coerce_for_code_constant(&Value::from(r#"say "hi""#));
        assert_eq!(coerced, Value::from(r#""say "hi"""#));
    }

    #[test]
    fn test_other_variants_pass_through() {
        let mut table = Section::new();
        table.insert("inner".into(), Value::from("x"));

        let values = [
            Value::from(3),
            Value::from(2.5),
            Value::from(true),
            Value::Array(vec![Value::from("a")]),
            Value::Table(table),
        ];
        for value in values {
            assert_eq!(coerce_for_code_constant(&value), value);
        }
    }
}
