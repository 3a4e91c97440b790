//! Per-kind naming table.

use super::Dialect;

/// Fixed naming table for one entity kind.
///
/// Must match existing documents exactly; these names are never derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierScheme {
    /// Element tag of the entity, e.g. `term`.
    pub tag: &'static str,
    /// Identifier attribute under NAF, e.g. `id`.
    pub naf: &'static str,
    /// Identifier attribute under KAF, e.g. `tid`.
    pub kaf: &'static str,
}

impl IdentifierScheme {
    pub const fn new(tag: &'static str, naf: &'static str, kaf: &'static str) -> Self {
        Self { tag, naf, kaf }
    }

    /// Identifier attribute name for `dialect`.
    pub fn id_attribute(&self, dialect: Dialect) -> &'static str {
        match dialect {
            Dialect::Naf => self.naf,
            Dialect::Kaf => self.kaf,
        }
    }

    /// Whether converting between dialects renames anything.
    pub fn differs_by_dialect(&self) -> bool {
        self.naf != self.kaf
    }
}
