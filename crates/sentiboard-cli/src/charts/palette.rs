//! Chart colours.

use std::collections::BTreeMap;

use sentiboard_core::config::PaletteConfig;
use sentiboard_core::types::{Sentiment, Topic};

const FALLBACK_COLOR: &str = "gray";

/// Colours per label, defaults overridden by `[palette]` config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    sentiment: BTreeMap<Sentiment, String>,
    /// Topic distribution bars.
    topic: BTreeMap<Topic, String>,
    /// Topic-over-time stacked areas.
    topic_stack: BTreeMap<Topic, String>,
}

impl Default for Palette {
    fn default() -> Self {
        let sentiment = [
            (Sentiment::Positive, "#6BCD53"),
            (Sentiment::Neutral, "orange"),
            (Sentiment::Negative, "#FF6347"),
        ];
        let topic = [
            (Topic::ProductFunctionality, "#89CFF0"),
            (Topic::Price, "#FFA500"),
            (Topic::DeliveryService, "#FF6347"),
            (Topic::CompatibilityWithDevices, "#3CB371"),
            (Topic::Quality, "#FFD700"),
        ];
        let topic_stack = [
            (Topic::CompatibilityWithDevices, "red"),
            (Topic::Price, "blue"),
            (Topic::ProductFunctionality, "purple"),
            (Topic::Quality, "orange"),
            (Topic::DeliveryService, "green"),
        ];
        Self {
            sentiment: owned(&sentiment),
            topic: owned(&topic),
            topic_stack: owned(&topic_stack),
        }
    }
}

impl Palette {
    /// Defaults with config overrides applied. Keys were checked when the
    /// config was validated; unparseable ones are skipped here.
    pub fn from_config(config: &PaletteConfig) -> Self {
        let mut palette = Self::default();
        overlay(&mut palette.sentiment, &config.sentiment);
        overlay(&mut palette.topic, &config.topic);
        overlay(&mut palette.topic_stack, &config.topic_stack);
        palette
    }

    pub fn sentiment(&self, sentiment: Sentiment) -> &str {
        self.sentiment
            .get(&sentiment)
            .map(String::as_str)
            .unwrap_or(FALLBACK_COLOR)
    }

    pub fn topic(&self, topic: Topic) -> &str {
        self.topic
            .get(&topic)
            .map(String::as_str)
            .unwrap_or(FALLBACK_COLOR)
    }

    pub fn topic_stack(&self, topic: Topic) -> &str {
        self.topic_stack
            .get(&topic)
            .map(String::as_str)
            .unwrap_or(FALLBACK_COLOR)
    }
}

fn owned<K: Ord + Copy>(pairs: &[(K, &str)]) -> BTreeMap<K, String> {
    pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
}

fn overlay<K: Ord + std::str::FromStr>(target: &mut BTreeMap<K, String>, overrides: &BTreeMap<String, String>) {
    for (name, color) in overrides {
        if let Ok(key) = name.parse::<K>() {
            target.insert(key, color.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_label() {
        let palette = Palette::default();
        for s in Sentiment::all() {
            assert_ne!(palette.sentiment(*s), FALLBACK_COLOR);
        }
        for t in Topic::all() {
            assert_ne!(palette.topic(*t), FALLBACK_COLOR);
            assert_ne!(palette.topic_stack(*t), FALLBACK_COLOR);
        }
        assert_eq!(palette.sentiment(Sentiment::Positive), "#6BCD53");
        assert_eq!(palette.topic_stack(Topic::Price), "blue");
    }

    #[test]
    fn test_config_overrides_apply() {
        let mut config = PaletteConfig::default();
        config.sentiment.insert("neutral".to_string(), "#999999".to_string());
        config.topic.insert("Quality".to_string(), "#000000".to_string());
        let palette = Palette::from_config(&config);
        assert_eq!(palette.sentiment(Sentiment::Neutral), "#999999");
        assert_eq!(palette.topic(Topic::Quality), "#000000");
        assert_eq!(palette.topic_stack(Topic::Quality), "orange");
    }
}
