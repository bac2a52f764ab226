use serde::{Serialize, Deserialize};
use serde_json::{json, Map, Value};
use serde_with::{serde_as, DefaultOnError};
use chrono::Utc;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TrendCategory {
    Sound,
    Effect,
    Meme,
}

impl TrendCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TrendCategory::Sound => "sound",
            TrendCategory::Effect => "effect",
            TrendCategory::Meme => "meme",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TrendingElement {
    #[serde(rename = "type")]
    pub category: TrendCategory,
    pub name: String,
    pub popularity: u8, // percentage, 0-100
}

impl TrendingElement {
    pub fn new(category: TrendCategory, name: &str, popularity: u8) -> Self {
        Self { category, name: name.to_string(), popularity: popularity.min(100) }
    }
}

/// The list shown before (or instead of) the live trending feed.
pub fn default_trending_elements() -> Vec<TrendingElement> {
    vec![
        TrendingElement::new(TrendCategory::Sound, "Viral Dance Beat #1", 95),
        TrendingElement::new(TrendCategory::Effect, "Neon Glow Transition", 88),
        TrendingElement::new(TrendCategory::Meme, "POV Format", 92),
        TrendingElement::new(TrendCategory::Sound, "Trending Audio Clip", 85),
    ]
}

/// A generated concept, either from the remote service or synthesized offline.
///
/// Only `description` is required when decoding a remote payload; every other
/// field is optional and a malformed value decodes as absent. `generatedAt`
/// and any keys not modelled here are carried through as received.
#[serde_as]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    #[serde(default)]
    pub success: bool,
    pub description: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub applied_trends: Vec<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_viral_score: Option<u8>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_platforms: Option<Vec<String>>,
    /// Epoch seconds; kept raw since services send ints or floats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Current time as fractional epoch seconds, the unit the service uses.
pub fn epoch_seconds_now() -> Value {
    let now = Utc::now();
    json!(now.timestamp() as f64 + f64::from(now.timestamp_subsec_millis()) / 1000.0)
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerateRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TrendEntry {
    pub name: String,
    pub popularity: u8,
}

/// Wire shape of `GET /api/trending-elements`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct TrendingPayload {
    #[serde(default)]
    pub sounds: Vec<TrendEntry>,
    #[serde(default)]
    pub effects: Vec<TrendEntry>,
    #[serde(default)]
    pub memes: Vec<TrendEntry>,
}

impl TrendingPayload {
    /// Flattens into sounds, then effects, then memes, tagging each entry.
    pub fn into_elements(self) -> Vec<TrendingElement> {
        let tag = |category: TrendCategory, entries: Vec<TrendEntry>| {
            entries.into_iter().map(move |e| TrendingElement::new(category, &e.name, e.popularity))
        };
        tag(TrendCategory::Sound, self.sounds)
            .chain(tag(TrendCategory::Effect, self.effects))
            .chain(tag(TrendCategory::Meme, self.memes))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn trending_payload_flattens_in_category_order() {
        let payload: TrendingPayload = serde_json::from_value(json!({
            "memes": [{"name": "POV Format", "popularity": 91}],
            "sounds": [{"name": "Popular Song Remix", "popularity": 90}, {"name": "Comedy Sound Effect", "popularity": 82}],
            "effects": [{"name": "Zoom Blur", "popularity": 77}]
        })).unwrap();

        let names: Vec<_> = payload.into_elements().into_iter().map(|e| (e.category, e.name)).collect();
        assert_eq!(names, vec![
            (TrendCategory::Sound, "Popular Song Remix".to_string()),
            (TrendCategory::Sound, "Comedy Sound Effect".to_string()),
            (TrendCategory::Effect, "Zoom Blur".to_string()),
            (TrendCategory::Meme, "POV Format".to_string()),
        ]);
    }

    #[test]
    fn popularity_is_capped_at_100() {
        let el = TrendingElement::new(TrendCategory::Meme, "Rating Things", 140);
        assert_eq!(el.popularity, 100);
    }

    #[test]
    fn remote_result_with_only_description_decodes() {
        let r: GenerationResult = serde_json::from_value(json!({"description": "hello"})).unwrap();
        assert_eq!(r.description, "hello");
        assert!(r.applied_trends.is_empty());
        assert_eq!(r.estimated_viral_score, None);
        assert_eq!(r.suggested_platforms, None);
    }

    #[test]
    fn malformed_optional_fields_decode_as_absent() {
        let r: GenerationResult = serde_json::from_value(json!({
            "success": true,
            "description": "d",
            "appliedTrends": "not a list",
            "estimatedViralScore": "high",
            "generatedAt": 1718000000
        })).unwrap();
        assert!(r.applied_trends.is_empty());
        assert_eq!(r.estimated_viral_score, None);
        assert_eq!(r.generated_at, Some(json!(1718000000)));
    }

    #[test]
    fn remote_payload_round_trips_unchanged() {
        let remote = json!({
            "success": true,
            "description": "d",
            "appliedTrends": ["Zoom Blur"],
            "estimatedViralScore": 88,
            "suggestedPlatforms": ["TikTok"],
            "generatedAt": 1718000000.25,
            "contentCategory": "dance",
            "processingTime": 2.1,
            "recommendations": {"bestPostingTime": "6-9 PM", "hashtags": ["#dance", "#fyp"]}
        });
        let r: GenerationResult = serde_json::from_value(remote.clone()).unwrap();
        assert_eq!(r.extra["contentCategory"], json!("dance"));
        assert_eq!(serde_json::to_value(&r).unwrap(), remote);
    }

    #[test]
    fn absent_optional_fields_stay_absent_when_reserialized() {
        let remote = json!({"success": true, "description": "only this"});
        let r: GenerationResult = serde_json::from_value(remote.clone()).unwrap();
        assert_eq!(serde_json::to_value(&r).unwrap(), remote);
    }

    #[test]
    fn epoch_seconds_are_not_milliseconds() {
        let secs = epoch_seconds_now().as_f64().unwrap();
        // Somewhere after 2020 and before 2100 in seconds.
        assert!(secs > 1_577_836_800.0 && secs < 4_102_444_800.0);
    }

    #[test]
    fn remote_result_without_description_is_rejected() {
        let r = serde_json::from_value::<GenerationResult>(json!({"success": true, "appliedTrends": []}));
        assert!(r.is_err());
    }

    #[test]
    fn trending_element_uses_type_key_on_the_wire() {
        let v = serde_json::to_value(TrendingElement::new(TrendCategory::Effect, "Glitch Effect", 85)).unwrap();
        assert_eq!(v, json!({"type": "effect", "name": "Glitch Effect", "popularity": 85}));
    }
}
