//! Recursive descent over [`Inspect`] values, producing one classification
//! per leaf field keyed by its dotted path.

use crate::error::{ApiCovError, Result};
use crate::inspect::{has_content, FieldValue, Inspect};

/// Nesting limit. Record schemas are finite and shallow; anything deeper is
/// treated as a runaway structure.
pub const MAX_DEPTH: usize = 64;

/// Whether a leaf was observed with content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Covered,
    NotCovered,
}

impl Classification {
    pub fn of(value: &FieldValue<'_>) -> Self {
        if has_content(value) {
            Classification::Covered
        } else {
            Classification::NotCovered
        }
    }
}

/// Walk every exported field of `value`, calling `emit` once per leaf with
/// the path `prefix.Field[.Sub...]` and its classification.
pub fn walk(
    value: &dyn Inspect,
    prefix: &str,
    emit: &mut dyn FnMut(String, Classification),
) -> Result<()> {
    walk_at(value, prefix, 0, emit)
}

fn walk_at(
    value: &dyn Inspect,
    prefix: &str,
    depth: usize,
    emit: &mut dyn FnMut(String, Classification),
) -> Result<()> {
    if depth >= MAX_DEPTH {
        return Err(ApiCovError::DepthExceeded(prefix.to_string()));
    }

    for field in value.fields() {
        let path = format!("{}.{}", prefix, field.name);
        match field.value {
            FieldValue::Struct(nested) => walk_at(nested, &path, depth + 1, emit)?,
            ref leaf => emit(path, Classification::of(leaf)),
        }
    }

    Ok(())
}
