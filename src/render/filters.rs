//! Custom Tera filters available to every template.

use std::collections::HashMap;

use tera::{Result, Value};

use crate::symbol::normalize;

/// `{{ key | upper_snake }}` applies the key normalizer.
pub(crate) fn upper_snake(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("upper_snake filter expects a string"))?;
    normalize(s)
        .map(Value::String)
        .map_err(|e| tera::Error::msg(e.to_string()))
}

/// `{{ title | pad(width=20) }}` right-pads with spaces and truncates to `width` characters.
pub(crate) fn pad(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("pad filter expects a string"))?;
    let width = args
        .get("width")
        .and_then(Value::as_u64)
        .ok_or_else(|| tera::Error::msg("pad filter requires an integer `width` argument"))?;
    let width = usize::try_from(width).map_err(|e| tera::Error::msg(e.to_string()))?;

    let mut padded: String = s.chars().take(width).collect();
    let len = padded.chars().count();
    padded.extend(std::iter::repeat(' ').take(width - len));
    Ok(Value::String(padded))
}
