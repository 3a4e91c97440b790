//! NAF/KAF dialect flag.

/// Annotation document dialect.
///
/// NAF and KAF share their structure but spell some identifier attributes
/// differently (a term is `id="t1"` in NAF and `tid="t1"` in KAF).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    #[default]
    Naf,
    Kaf,
}

impl Dialect {
    /// Root element tag used by documents of this dialect.
    pub fn root_tag(self) -> &'static str {
        match self {
            Dialect::Naf => "NAF",
            Dialect::Kaf => "KAF",
        }
    }

    /// Detect the dialect from a root element tag.
    pub fn from_root_tag(tag: &str) -> Option<Self> {
        match tag {
            "NAF" => Some(Dialect::Naf),
            "KAF" => Some(Dialect::Kaf),
            _ => None,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.root_tag())
    }
}
