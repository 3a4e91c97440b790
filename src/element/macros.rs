//! Declaration helpers for entity kinds.

/// Declare an entity kind: a `Copy` view struct plus its [`Entity`] impl.
///
/// ```ignore
/// entity! {
///     /// A `<term>` element.
///     Term, "term", "id", "tid"
/// }
/// ```
///
/// [`Entity`]: crate::element::Entity
macro_rules! entity {
    ($(#[$meta:meta])* $name:ident, $tag:literal, $naf:literal, $kaf:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name {
            node: $crate::tree::NodeId,
            dialect: $crate::base::Dialect,
        }

        impl $crate::element::Entity for $name {
            const SCHEME: $crate::base::IdentifierScheme =
                $crate::base::IdentifierScheme::new($tag, $naf, $kaf);

            fn from_node(node: $crate::tree::NodeId, dialect: $crate::base::Dialect) -> Self {
                Self { node, dialect }
            }

            fn node(&self) -> $crate::tree::NodeId {
                self.node
            }

            fn dialect(&self) -> $crate::base::Dialect {
                self.dialect
            }
        }
    };
}

/// Generate get/set pairs that pass straight through to node attributes.
///
/// ```ignore
/// impl Term {
///     attribute_accessors! {
///         lemma, set_lemma => "lemma";
///         pos, set_pos => "pos";
///     }
/// }
/// ```
macro_rules! attribute_accessors {
    ($($get:ident, $set:ident => $attr:literal;)*) => {
        $(
            #[doc = concat!("The `", $attr, "` attribute, if present.")]
            pub fn $get<'d>(&self, doc: &'d $crate::tree::Document) -> Option<&'d str> {
                doc.attr(self.node, $attr)
            }

            #[doc = concat!("Set the `", $attr, "` attribute.")]
            pub fn $set(&self, doc: &mut $crate::tree::Document, value: &str) {
                doc.set_attr(self.node, $attr, value);
            }
        )*
    };
}

pub(crate) use attribute_accessors;
pub(crate) use entity;
