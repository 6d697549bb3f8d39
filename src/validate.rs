//! Heuristic structure check for profile documents.
//!
//! This is deliberately not a JSON parser: it looks for a few quoted keys and counts
//! braces/brackets outside string literals. Documents with misplaced commas, wrong value
//! types or crossed nesting (`{[}]`) are accepted.

use crate::error::ValidationError;
use crate::statics;

/// Net brace/bracket depth left over after scanning a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Balance {
    pub braces: i64,
    pub brackets: i64,
}

/// Validate `text` in order: emptiness, section markers, `"modifications"`, then balance.
pub fn validate(text: &str) -> Result<(), ValidationError> {
    let t = text.trim();
    if t.is_empty() {
        return Err(ValidationError::Empty);
    }

    let has_meta_input = t.contains(statics::KEY_META) && t.contains(statics::KEY_INPUT);
    let has_legacy =
        t.contains(statics::KEY_PROFILE_NAME) || t.contains(statics::KEY_FORMAT_VERSION);
    if !has_meta_input && !has_legacy {
        return Err(ValidationError::InvalidStructure);
    }

    if !t.contains(statics::KEY_MODIFICATIONS) {
        return Err(ValidationError::MissingModifications);
    }

    let balance = scan_balance(t);
    if balance.braces != 0 {
        return Err(ValidationError::UnbalancedBraces);
    }
    if balance.brackets != 0 {
        return Err(ValidationError::UnbalancedBrackets);
    }

    Ok(())
}

/// Count `{}`/`[]` outside string literals.
///
/// A backslash escapes the next character whether or not we are inside a string;
/// outside strings that only matters for a following quote or bracket.
pub fn scan_balance(text: &str) -> Balance {
    let mut balance = Balance::default();
    let mut in_string = false;
    let mut escaped = false;

    for c in text.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => in_string = !in_string,
            _ if in_string => {}
            '{' => balance.braces += 1,
            '}' => balance.braces -= 1,
            '[' => balance.brackets += 1,
            ']' => balance.brackets -= 1,
            _ => {}
        }
    }

    balance
}
