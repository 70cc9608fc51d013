//! Conversion of configuration keys into preprocessor symbol names.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::config::Section;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SymbolError {
    #[error("key '{0}' has no characters usable in a symbol name")]
    EmptyKey(String),

    #[error("keys '{first}' and '{second}' both normalize to symbol {symbol}")]
    Collision {
        symbol: String,
        first: String,
        second: String,
    },
}

/// Converts a camelCase, kebab-case or space separated key to `UPPER_SNAKE_CASE`.
///
/// A separator goes before an uppercase letter when the current word's last
/// letter was lowercase (digits in between are skipped over), so `a1B`
/// becomes `A1_B` while `A1B` stays as is. Runs of any other non-alphanumeric
/// characters become a single underscore; leading and trailing ones are
/// dropped. Re-normalizing an output returns it unchanged.
///
/// ```
/// use vuengine_codegen::symbol::normalize;
///
/// assert_eq!(normalize("pluginsConfigFileExists")?, "PLUGINS_CONFIG_FILE_EXISTS");
/// assert_eq!(normalize("game title")?, "GAME_TITLE");
/// # Ok::<(), vuengine_codegen::symbol::SymbolError>(())
/// ```
pub fn normalize(key: &str) -> Result<String, SymbolError> {
    let mut symbol = String::with_capacity(key.len() + 4);
    let mut separate = false;
    let mut word_is_lower = false;

    for ch in key.chars() {
        if !ch.is_ascii_alphanumeric() {
            separate = true;
            word_is_lower = false;
            continue;
        }
        if ch.is_ascii_uppercase() && word_is_lower {
            separate = true;
        }
        if separate && !symbol.is_empty() {
            symbol.push('_');
        }
        separate = false;
        if ch.is_ascii_alphabetic() {
            word_is_lower = ch.is_ascii_lowercase();
        }
        symbol.push(ch.to_ascii_uppercase());
    }

    if symbol.is_empty() {
        return Err(SymbolError::EmptyKey(key.to_string()));
    }
    Ok(symbol)
}

/// Renames every top-level key of `section` with [`normalize`].
///
/// Nested tables keep their keys. Two keys landing on the same symbol is
/// an error rather than a silent overwrite.
pub fn normalize_keys(section: &Section) -> Result<Section, SymbolError> {
    let mut origins: BTreeMap<String, &str> = BTreeMap::new();
    let mut normalized = Section::new();

    for (key, value) in section {
        let symbol = normalize(key)?;
        if let Some(first) = origins.insert(symbol.clone(), key) {
            return Err(SymbolError::Collision {
                symbol,
                first: first.to_string(),
                second: key.clone(),
            });
        }
        normalized.insert(symbol, value.clone());
    }

    Ok(normalized)
}
