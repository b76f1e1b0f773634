// src/shared/patch.rs
use serde::{Deserialize, Serialize, Serializer};

// ──────────────────────────────────────────────────────────
// PatchField
// ──────────────────────────────────────────────────────────
// - Unset: key not provided => keep stored value
// - Null: explicitly cleared => store NULL (nullable columns only)
// - Value(v): replace with v
//
// Use with #[serde(default)] so omitted keys become Unset.
// Unset and Null both serialize as null.

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T: Serialize> Serialize for PatchField<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PatchField::Value(v) => serializer.serialize_some(v),
            PatchField::Unset | PatchField::Null => serializer.serialize_none(),
        }
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Applies the patch to a nullable slot.
    pub fn apply_to(self, slot: &mut Option<T>) {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *slot = None,
            PatchField::Value(v) => *slot = Some(v),
        }
    }
}

impl PatchField<String> {
    /// Form fields arrive as plain strings: absent => Unset, blank => Null.
    pub fn from_form(value: Option<String>) -> Self {
        match value {
            None => PatchField::Unset,
            Some(v) if v.trim().is_empty() => PatchField::Null,
            Some(v) => PatchField::Value(v.trim().to_string()),
        }
    }
}
