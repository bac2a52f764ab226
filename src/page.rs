use askama::Template;

use crate::models::GenerationResult;
use crate::shell::ShellState;

const DEFAULT_PLATFORMS_LABEL: &str = "TikTok, Reels, Shorts";

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub prompt: String,
    pub pending: bool,
    pub advisory: Option<String>,
    pub result: Option<ResultView>,
    pub trends: Vec<TrendView>,
}

pub struct ResultView {
    pub description: String,
    pub applied_trends: Vec<String>,
    pub score: String,
    pub platforms: String,
}

pub struct TrendView {
    pub index: usize,
    pub name: String,
    pub category: &'static str,
    pub popularity: u8,
}

impl From<&GenerationResult> for ResultView {
    // Remote payloads may omit anything but the description.
    fn from(r: &GenerationResult) -> Self {
        Self {
            description: r.description.clone(),
            applied_trends: r.applied_trends.clone(),
            score: r.estimated_viral_score.map(|s| format!("{s}%")).unwrap_or_else(|| "n/a".to_string()),
            platforms: r.suggested_platforms
                .as_ref()
                .filter(|p| !p.is_empty())
                .map(|p| p.join(", "))
                .unwrap_or_else(|| DEFAULT_PLATFORMS_LABEL.to_string()),
        }
    }
}

impl From<&ShellState> for IndexPage {
    fn from(st: &ShellState) -> Self {
        Self {
            prompt: st.prompt.clone(),
            pending: st.is_generating(),
            advisory: st.advisory.clone(),
            result: st.result.as_ref().map(ResultView::from),
            trends: st.trending.iter().enumerate().map(|(index, el)| TrendView {
                index,
                name: el.name.clone(),
                category: el.category.label(),
                popularity: el.popularity,
            }).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_trending_elements;
    use crate::shell::{Phase, OFFLINE_ADVISORY};

    fn state() -> ShellState {
        ShellState {
            prompt: String::new(),
            phase: Phase::Idle,
            result: None,
            advisory: None,
            trending: default_trending_elements(),
        }
    }

    #[test]
    fn renders_sidebar_and_empty_form() {
        let html = IndexPage::from(&state()).render().unwrap();
        assert!(html.contains("Viral Dance Beat #1"));
        assert!(html.contains("action=\"/trends/3/select\""));
        assert!(html.contains("95%"));
        assert!(!html.contains("class=\"advisory\""));
        assert!(!html.contains("Generated Video Concept"));
    }

    #[test]
    fn sidebar_lists_feature_highlights() {
        let html = IndexPage::from(&state()).render().unwrap();
        assert!(html.contains("Why ViralCraft?"));
        for line in ["AI-powered trend detection", "Real-time viral elements", "Optimized for all platforms", "Instant content generation"] {
            assert!(html.contains(line), "missing {line}");
        }
        assert!(html.find("Why ViralCraft?") < html.find("Quick Tips"));
    }

    #[test]
    fn renders_result_and_advisory() {
        let mut st = state();
        st.advisory = Some(OFFLINE_ADVISORY.to_string());
        st.result = Some(GenerationResult {
            success: true,
            description: "line one\nline two".into(),
            applied_trends: vec!["Glitch Effect".into()],
            estimated_viral_score: Some(90),
            suggested_platforms: None,
            generated_at: None,
            extra: Default::default(),
        });
        let html = IndexPage::from(&st).render().unwrap();
        assert!(html.contains("Running in offline mode"));
        assert!(html.contains("<span class=\"badge\">Glitch Effect</span>"));
        assert!(html.contains("90%"));
        assert!(html.contains(DEFAULT_PLATFORMS_LABEL));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut st = state();
        st.prompt = "<script>alert(1)</script>".into();
        let html = IndexPage::from(&st).render().unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn pending_disables_the_trigger() {
        let mut st = state();
        st.phase = Phase::Pending;
        let html = IndexPage::from(&st).render().unwrap();
        assert!(html.contains("type=\"submit\" disabled"));
        assert!(html.contains("Generating Viral Content..."));
    }

    #[test]
    fn missing_score_renders_placeholder() {
        let view = ResultView::from(&GenerationResult {
            success: true,
            description: "d".into(),
            applied_trends: vec![],
            estimated_viral_score: None,
            suggested_platforms: Some(vec!["TikTok".into()]),
            generated_at: None,
            extra: Default::default(),
        });
        assert_eq!(view.score, "n/a");
        assert_eq!(view.platforms, "TikTok");
    }
}
