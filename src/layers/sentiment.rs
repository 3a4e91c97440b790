//! Term-level `<sentiment>`.

use crate::element::macros::{attribute_accessors, entity};

entity! {
    /// Opinion annotation attached to a term.
    Sentiment, "sentiment", "id", "id"
}

impl Sentiment {
    attribute_accessors! {
        resource, set_resource => "resource";
        polarity, set_polarity => "polarity";
        strength, set_strength => "strength";
        subjectivity, set_subjectivity => "subjectivity";
        semantic_type, set_semantic_type => "sentiment_semantic_type";
        modifier, set_modifier => "sentiment_modifier";
        marker, set_marker => "sentiment_marker";
        product_feature, set_product_feature => "sentiment_product_feature";
    }
}
