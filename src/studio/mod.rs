pub mod download;
pub mod endpoint;
pub mod session;

use crate::{
    composer::PromptComposer,
    config::Config,
    error::Result,
    models::{GeneratedImageRecord, Preset},
};

pub use download::{Downloader, HttpImageFetcher, ImageFetcher};
pub use endpoint::ImageEndpoint;
pub use session::GenerationSession;

/// State container for one user: the prompt being composed and the gallery
/// built from it. The top-level view owns exactly one.
#[derive(Debug, Clone, Default)]
pub struct NatureStudio {
    composer: PromptComposer,
    session: GenerationSession,
}

impl NatureStudio {
    pub fn new(endpoint: ImageEndpoint) -> Self {
        Self {
            composer: PromptComposer::new(),
            session: GenerationSession::new(endpoint),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(ImageEndpoint::from_config(config)))
    }

    pub fn composer(&self) -> &PromptComposer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut PromptComposer {
        &mut self.composer
    }

    pub fn session(&self) -> &GenerationSession {
        &self.session
    }

    pub fn prompt_text(&self) -> &str {
        self.composer.prompt_text()
    }

    pub fn set_prompt_text(&mut self, text: impl Into<String>) {
        self.composer.set_prompt_text(text);
    }

    pub fn apply_preset(&mut self, preset: Preset) {
        self.composer.apply_preset(preset);
    }

    pub fn is_generating(&self) -> bool {
        self.session.is_generating()
    }

    pub fn images(&self) -> &[GeneratedImageRecord] {
        self.session.images()
    }

    pub fn find_image(&self, created_at: i64) -> Option<&GeneratedImageRecord> {
        self.session.find(created_at)
    }

    /// Generates from the composer's current prompt.
    pub fn generate(&mut self) -> Option<&GeneratedImageRecord> {
        self.session.generate(self.composer.prompt_text())
    }

    pub fn generate_at(&mut self, now_ms: i64) -> Option<&GeneratedImageRecord> {
        self.session.generate_at(self.composer.prompt_text(), now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NatureError;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct UnreachableFetcher;

    #[async_trait]
    impl ImageFetcher for UnreachableFetcher {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            Err(NatureError::RequestError("network unreachable".into()))
        }
    }

    #[test]
    fn test_preset_then_generate() {
        let mut studio = NatureStudio::default();
        studio.set_prompt_text("something else");
        studio.apply_preset(Preset::Forest);
        assert_eq!(
            studio.prompt_text(),
            "mystical ancient forest with sunbeams, lush green trees, magical atmosphere"
        );

        let record = studio.generate_at(5).cloned().unwrap();
        assert_eq!(record.prompt, Preset::Forest.prompt());
        assert_eq!(studio.images().len(), 1);
        // The prompt stays in the input after generating.
        assert_eq!(studio.prompt_text(), Preset::Forest.prompt());
    }

    #[test]
    fn test_generate_twice_orders_newest_first() {
        let mut studio = NatureStudio::default();
        studio.set_prompt_text("A");
        studio.generate_at(1);
        studio.set_prompt_text("B");
        studio.generate_at(2);

        let prompts: Vec<_> = studio.images().iter().map(|i| i.prompt.clone()).collect();
        assert_eq!(prompts, vec!["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn test_blank_composer_prompt_is_noop() {
        let mut studio = NatureStudio::default();
        studio.set_prompt_text("   ");
        assert!(studio.generate().is_none());
        assert!(studio.images().is_empty());
        assert!(!studio.is_generating());
    }

    #[test]
    fn test_from_config_uses_endpoint_and_dimensions() {
        let config = Config::new()
            .with_endpoint("http://localhost:9000/prompt")
            .with_dimensions(640, 480);
        let mut studio = NatureStudio::from_config(&config).unwrap();
        studio.set_prompt_text("dunes");
        let record = studio.generate_at(3).cloned().unwrap();
        assert!(record.url.starts_with("http://localhost:9000/prompt/dunes%2C"));
        assert!(record.url.contains("width=640&height=480&seed=3"));

        let bad = Config::new().with_dimensions(0, 0);
        assert!(NatureStudio::from_config(&bad).is_err());
    }

    #[tokio::test]
    async fn test_failed_download_leaves_state_unchanged() {
        let mut studio = NatureStudio::default();
        studio.set_prompt_text("glacier");
        let record = studio.generate_at(42).cloned().unwrap();
        let before = studio.images().to_vec();

        let downloader = Downloader::new(Arc::new(UnreachableFetcher));
        let result = downloader.download(&record.url, &record.prompt).await;

        assert!(result.is_none());
        assert_eq!(studio.images(), before.as_slice());
        assert_eq!(studio.prompt_text(), "glacier");
        assert!(!studio.is_generating());
    }
}
