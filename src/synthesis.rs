//! Offline concept synthesis, used when the generation service is unreachable.

use rand::Rng;

use crate::models::{epoch_seconds_now, GenerationResult};

pub const TRENDING_SOUNDS: [&str; 5] = [
    "Viral Dance Beat #1", "Trending Audio Clip", "Popular Song Remix",
    "Comedy Sound Effect", "Motivational Speech Clip",
];

pub const TRENDING_EFFECTS: [&str; 5] = [
    "Neon Glow Transition", "Glitch Effect", "Zoom Blur",
    "Color Pop Filter", "Vintage Film Look",
];

pub const TRENDING_MEMES: [&str; 5] = [
    "POV Format", "Before/After", "Day in My Life",
    "Rating Things", "Explaining to My Past Self",
];

pub const SUGGESTED_PLATFORMS: [&str; 3] = ["TikTok", "Instagram Reels", "YouTube Shorts"];

const SOUND_CHANCE: f64 = 0.7;
const EFFECT_CHANCE: f64 = 0.6;
const MEME_CHANCE: f64 = 0.5;
const SCORE_FLOOR: u8 = 75;
const SCORE_SPREAD: usize = 20;

/// Uniform randomness the synthesizer draws from.
pub trait RandomSource {
    /// A value in `[0, 1)`.
    fn unit(&mut self) -> f64;
    /// A value in `[0, len)`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }
}

/// Adapts any `rand` generator.
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }

    fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionBlock {
    Dance,
    Food,
    Tutorial,
    Pet,
    Reaction,
    Generic,
}

impl SuggestionBlock {
    pub fn lines(&self) -> [&'static str; 3] {
        match self {
            SuggestionBlock::Dance => [
                "• Add trending dance moves synchronized with popular beat",
                "• Use quick cuts and zoom effects for dynamic feel",
                "• Include mirror/split screen effects",
            ],
            SuggestionBlock::Food => [
                "• Include close-up shots with satisfying sound effects",
                "• Add text overlay with ratings or reactions",
                "• Use trending food styling techniques",
            ],
            SuggestionBlock::Tutorial => [
                "• Use step-by-step text overlays",
                "• Add before/after comparison shots",
                "• Include trending educational formats",
            ],
            SuggestionBlock::Pet => [
                "• Add cute pet reaction shots",
                "• Use trending pet sounds and effects",
                "• Include popular pet challenge formats",
            ],
            SuggestionBlock::Reaction => [
                "• Use split-screen reaction format",
                "• Add trending reaction sounds",
                "• Include emotional text overlays",
            ],
            SuggestionBlock::Generic => [
                "• Apply trending visual effects for engagement",
                "• Include popular audio elements",
                "• Use current meme formats",
            ],
        }
    }
}

/// First match wins: dance, food, tutorial, pet/dog/cat, reaction, generic.
pub fn suggestion_block(prompt: &str) -> SuggestionBlock {
    let lower = prompt.to_lowercase();
    let has = |word: &str| lower.contains(word);
    if has("dance") {
        SuggestionBlock::Dance
    } else if has("food") {
        SuggestionBlock::Food
    } else if has("tutorial") {
        SuggestionBlock::Tutorial
    } else if has("pet") || has("dog") || has("cat") {
        SuggestionBlock::Pet
    } else if has("reaction") {
        SuggestionBlock::Reaction
    } else {
        SuggestionBlock::Generic
    }
}

/// At most one pick per category, each behind its own coin flip.
pub fn select_trends(rng: &mut dyn RandomSource) -> Vec<String> {
    let pools: [(&[&str], f64); 3] = [
        (&TRENDING_SOUNDS, SOUND_CHANCE),
        (&TRENDING_EFFECTS, EFFECT_CHANCE),
        (&TRENDING_MEMES, MEME_CHANCE),
    ];
    let mut picked = Vec::new();
    for (pool, probability) in pools {
        if rng.chance(probability) {
            picked.push(pool[rng.index(pool.len())].to_string());
        }
    }
    picked
}

pub fn synthesize(prompt: &str, rng: &mut dyn RandomSource) -> GenerationResult {
    let applied_trends = select_trends(rng);
    let score = SCORE_FLOOR + rng.index(SCORE_SPREAD) as u8;

    let mut description = format!("🎬 Enhanced version of your idea: \"{prompt}\"\n\n");
    description.push_str("🚀 AI Suggestions:\n");
    for line in suggestion_block(prompt).lines() {
        description.push_str(line);
        description.push('\n');
    }
    description.push_str(&format!("\n✨ Trending elements applied: {}", applied_trends.join(", ")));
    description.push_str(&format!("\n📊 Estimated viral score: {score}%"));
    description.push_str(&format!("\n🎯 Best platforms: {}", SUGGESTED_PLATFORMS.join(", ")));

    GenerationResult {
        success: true,
        description,
        applied_trends,
        estimated_viral_score: Some(score),
        suggested_platforms: Some(SUGGESTED_PLATFORMS.iter().map(|p| p.to_string()).collect()),
        generated_at: Some(epoch_seconds_now()),
        extra: Default::default(),
    }
}
