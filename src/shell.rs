//! The interface's state container: prompt, generation lifecycle, last result,
//! advisory banner and the trending sidebar.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use tracing::{info, warn};

use crate::client::VideoBackend;
use crate::config::DelayRange;
use crate::models::{default_trending_elements, GenerationResult, TrendCategory, TrendingElement};
use crate::synthesis::{synthesize, RandomSource};

pub const OFFLINE_ADVISORY: &str =
    "🔄 Running in offline mode - full features available when backend is connected";

const CANNED_EXAMPLES: [(&str, &str); 6] = [
    ("Viral Dance Beat #1", "Create a fun dance video with my friends using the latest viral choreography"),
    ("Neon Glow Transition", "Transform my room setup with glowing neon effects and smooth transitions"),
    ("POV Format", "POV: You just discovered the perfect study routine that actually works"),
    ("Trending Audio Clip", "React to trying the most popular food trend everyone is talking about"),
    ("Glitch Effect", "Show my transformation using glitch effects and dramatic lighting"),
    ("Before/After", "Before and after of organizing my entire closet in under 60 seconds"),
];

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Pending,
    FallbackDelay,
}

#[derive(Debug, Serialize, Clone)]
pub struct ShellState {
    pub prompt: String,
    pub phase: Phase,
    pub result: Option<GenerationResult>,
    pub advisory: Option<String>,
    pub trending: Vec<TrendingElement>,
}

impl ShellState {
    pub fn is_generating(&self) -> bool {
        self.phase != Phase::Idle
    }
}

pub struct Shell {
    backend: Arc<dyn VideoBackend>,
    rng: Mutex<Box<dyn RandomSource + Send>>,
    delay: DelayRange,
    state: RwLock<ShellState>,
}

/// Example prompt for a trend: a canned line for the well-known ones, a
/// category phrase otherwise.
pub fn example_prompt(element: &TrendingElement) -> String {
    if let Some((_, canned)) = CANNED_EXAMPLES.iter().find(|(name, _)| *name == element.name) {
        return canned.to_string();
    }
    match element.category {
        TrendCategory::Sound => format!("Create an engaging video using the {} to showcase my daily routine", element.name),
        TrendCategory::Effect => format!("Transform my space using {} and trending visual styles", element.name),
        TrendCategory::Meme => format!("Use the {} format to share something interesting about my life", element.name),
    }
}

impl Shell {
    pub fn new(backend: Arc<dyn VideoBackend>, rng: Box<dyn RandomSource + Send>, delay: DelayRange) -> Self {
        Self {
            backend,
            rng: Mutex::new(rng),
            delay,
            state: RwLock::new(ShellState {
                prompt: String::new(),
                phase: Phase::Idle,
                result: None,
                advisory: None,
                trending: default_trending_elements(),
            }),
        }
    }

    pub fn snapshot(&self) -> ShellState {
        self.state.read().clone()
    }

    pub fn set_prompt(&self, prompt: &str) {
        self.state.write().prompt = prompt.to_string();
    }

    /// Runs one generation cycle. Returns `None` without touching state when
    /// the prompt is blank or a cycle is already in flight.
    pub async fn submit_prompt(&self, prompt: &str) -> Option<GenerationResult> {
        if prompt.trim().is_empty() {
            return None;
        }
        {
            let mut st = self.state.write();
            if st.phase != Phase::Idle {
                return None;
            }
            st.phase = Phase::Pending;
            st.prompt = prompt.to_string();
            st.advisory = None;
        }

        let outcome = self.backend.generate_video(prompt).await;

        let (result, advisory) = match outcome {
            Ok(result) => {
                info!("✅ Remote generation succeeded");
                (result, None)
            }
            Err(e) => {
                warn!("Backend unavailable, using offline mode: {}", e);
                self.state.write().phase = Phase::FallbackDelay;
                let wait = self.delay.pick(self.rng.lock().unit());
                tokio::time::sleep(wait).await;
                let result = synthesize(prompt, &mut **self.rng.lock());
                info!("📦 Synthesized offline result with {} trends", result.applied_trends.len());
                (result, Some(OFFLINE_ADVISORY.to_string()))
            }
        };

        let mut st = self.state.write();
        st.result = Some(result.clone());
        st.advisory = advisory;
        st.phase = Phase::Idle;
        Some(result)
    }

    /// Replaces the sidebar with live data; any failure keeps what is there.
    pub async fn load_trending_elements(&self) {
        match self.backend.trending_elements().await {
            Ok(elements) => {
                info!("📈 Loaded {} live trending elements", elements.len());
                self.state.write().trending = elements;
            }
            Err(e) => {
                info!("Using default trending elements ({})", e);
            }
        }
    }

    /// Copies an example prompt for the element at `index` into the prompt
    /// field. Returns the prompt, or `None` for an unknown index.
    pub fn select_trend(&self, index: usize) -> Option<String> {
        let mut st = self.state.write();
        let element = st.trending.get(index)?;
        let prompt = example_prompt(element);
        st.prompt = prompt.clone();
        Some(prompt)
    }
}
