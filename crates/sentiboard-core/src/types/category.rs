//! Closed label vocabularies: sentiments and topics.
//!
//! Both enums derive `Ord` in their canonical order, so a `BTreeMap` keyed
//! by them iterates in that order and stable sorts fall back to it on ties.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseCategoryError;

/// Sentiment label attached upstream to each review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    /// All sentiments in canonical order.
    pub fn all() -> &'static [Sentiment] {
        &[Self::Positive, Self::Neutral, Self::Negative]
    }

    /// Position in [`Sentiment::all`]; used to index fixed-size count arrays.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = ParseCategoryError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseCategoryError::new("sentiment", trimmed))
    }
}

/// Topic label attached upstream to each review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "Product functionality")]
    ProductFunctionality,
    #[serde(rename = "Price")]
    Price,
    #[serde(rename = "Delivery Service")]
    DeliveryService,
    #[serde(rename = "Compatibility with devices")]
    CompatibilityWithDevices,
    #[serde(rename = "Quality")]
    Quality,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductFunctionality => "Product functionality",
            Self::Price => "Price",
            Self::DeliveryService => "Delivery Service",
            Self::CompatibilityWithDevices => "Compatibility with devices",
            Self::Quality => "Quality",
        }
    }

    /// All topics in canonical order.
    pub fn all() -> &'static [Topic] {
        &[
            Self::ProductFunctionality,
            Self::Price,
            Self::DeliveryService,
            Self::CompatibilityWithDevices,
            Self::Quality,
        ]
    }

    /// Position in [`Topic::all`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = ParseCategoryError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseCategoryError::new("topic", trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_parse_is_lenient_on_case_and_whitespace() {
        assert_eq!(" Positive ".parse::<Sentiment>().unwrap(), Sentiment::Positive);
        assert_eq!("NEGATIVE".parse::<Sentiment>().unwrap(), Sentiment::Negative);
    }

    #[test]
    fn test_sentiment_parse_rejects_unknown() {
        let err = "mixed".parse::<Sentiment>().unwrap_err();
        assert_eq!(err.field, "sentiment");
        assert_eq!(err.value, "mixed");
    }

    #[test]
    fn test_topic_parse_roundtrips_display_names() {
        for topic in Topic::all() {
            assert_eq!(topic.as_str().parse::<Topic>().unwrap(), *topic);
        }
    }

    #[test]
    fn test_topic_parse_rejects_unknown() {
        assert!("Packaging".parse::<Topic>().is_err());
        assert!("".parse::<Topic>().is_err());
    }

    #[test]
    fn test_canonical_order_matches_ord() {
        let mut sorted = Topic::all().to_vec();
        sorted.sort();
        assert_eq!(sorted, Topic::all());
        assert!(Sentiment::Positive < Sentiment::Neutral);
        assert!(Sentiment::Neutral < Sentiment::Negative);
    }

    #[test]
    fn test_index_matches_position() {
        for (i, s) in Sentiment::all().iter().enumerate() {
            assert_eq!(s.index(), i);
        }
        for (i, t) in Topic::all().iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Topic::DeliveryService).unwrap();
        assert_eq!(json, "\"Delivery Service\"");
        let json = serde_json::to_string(&Sentiment::Neutral).unwrap();
        assert_eq!(json, "\"neutral\"");
    }
}
