//! Settings for JSON to Go type transformation.

/// How the builder decides that two JSON objects share one declared type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DedupMode {
    /// Objects whose derived type names match collapse into one type; the
    /// shape built first wins.
    ///
    /// **Default.** Later objects with the same name but different keys are
    /// not reconciled.
    #[default]
    ByName,

    /// Objects reuse a registered type only when their field lists are
    /// identical. A differently shaped object under an existing name is
    /// registered as `Name2`, `Name3`, and so on.
    Structural,
}

/// Settings that control type inference behavior.
#[derive(Debug, Clone, Default)]
pub struct TransformSettings {
    /// Deduplication policy for object-derived types.
    pub dedup: DedupMode,
}

impl TransformSettings {
    /// Settings with the given deduplication policy.
    #[must_use]
    pub fn with_dedup(dedup: DedupMode) -> Self {
        Self { dedup }
    }
}
