//! Recursive merging of configuration sections.

use super::value::{Section, Value};
use super::ConfigError;

/// Nesting limit standing in for cycle detection on owned trees.
pub const MAX_DEPTH: usize = 64;

/// Deep-merges `sections` left to right into a fresh [`Section`].
///
/// Later sections override earlier ones. Nested tables are merged
/// recursively; other values (including arrays) are replaced entirely.
/// Inputs are only read, and every value in the result is an owned copy.
///
/// ```
/// use vuengine_codegen::config::{merge, Section, Value};
///
/// let mut a = Section::new();
/// a.insert("x".into(), Value::from(1));
/// let mut b = Section::new();
/// b.insert("x".into(), Value::from(2));
///
/// let merged = merge([&a, &b])?;
/// assert_eq!(merged["x"], Value::from(2));
/// # Ok::<(), vuengine_codegen::ConfigError>(())
/// ```
pub fn merge<'a, I>(sections: I) -> Result<Section, ConfigError>
where
    I: IntoIterator<Item = &'a Section>,
{
    let mut merged = Section::new();
    for section in sections {
        deep_merge(&mut merged, section, 0)?;
    }
    Ok(merged)
}

fn deep_merge(base: &mut Section, overlay: &Section, depth: usize) -> Result<(), ConfigError> {
    for (key, value) in overlay {
        if depth >= MAX_DEPTH {
            return Err(ConfigError::Cycle(key.clone()));
        }
        match (base.get_mut(key), value) {
            (Some(Value::Table(base_table)), Value::Table(overlay_table)) => {
                deep_merge(base_table, overlay_table, depth + 1)?;
            }
            (_, value) => {
                check_depth(key, value, depth + 1)?;
                base.insert(key.clone(), value.clone());
            }
        }
    }
    Ok(())
}

/// Walks a value that is about to be copied wholesale.
fn check_depth(key: &str, value: &Value, depth: usize) -> Result<(), ConfigError> {
    if depth > MAX_DEPTH {
        return Err(ConfigError::Cycle(key.to_string()));
    }
    match value {
        Value::Table(table) => table
            .iter()
            .try_for_each(|(k, v)| check_depth(k, v, depth + 1)),
        Value::Array(items) => items.iter().try_for_each(|v| check_depth(key, v, depth + 1)),
        _ => Ok(()),
    }
}
