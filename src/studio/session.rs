use crate::models::GeneratedImageRecord;
use crate::studio::endpoint::ImageEndpoint;

/// Drives the idle -> generating -> idle cycle and owns the gallery list.
#[derive(Debug, Clone, Default)]
pub struct GenerationSession {
    endpoint: ImageEndpoint,
    is_generating: bool,
    images: Vec<GeneratedImageRecord>,
}

/// Clears the generating flag however the generation step exits.
struct GeneratingGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> GeneratingGuard<'a> {
    fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for GeneratingGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}

impl GenerationSession {
    pub fn new(endpoint: ImageEndpoint) -> Self {
        Self {
            endpoint,
            is_generating: false,
            images: Vec::new(),
        }
    }

    pub fn endpoint(&self) -> &ImageEndpoint {
        &self.endpoint
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    /// Most recent first.
    pub fn images(&self) -> &[GeneratedImageRecord] {
        &self.images
    }

    pub fn find(&self, created_at: i64) -> Option<&GeneratedImageRecord> {
        self.images.iter().find(|image| image.created_at == created_at)
    }

    pub fn generate(&mut self, prompt: &str) -> Option<&GeneratedImageRecord> {
        self.generate_at(prompt, chrono::Utc::now().timestamp_millis())
    }

    /// Prepends one record built from `prompt` and `now_ms`. Blank prompts
    /// are a no-op. Nothing is fetched here; the URL is loaded later by
    /// whoever renders the gallery.
    pub fn generate_at(&mut self, prompt: &str, now_ms: i64) -> Option<&GeneratedImageRecord> {
        if prompt.trim().is_empty() {
            log::debug!("Ignoring generate request with blank prompt");
            return None;
        }

        let record = {
            let _guard = GeneratingGuard::start(&mut self.is_generating);
            GeneratedImageRecord {
                url: self.endpoint.image_url(prompt, now_ms),
                prompt: prompt.to_string(),
                created_at: now_ms,
            }
        };

        log::info!("🎨 Generated image URL for prompt: {}", record.prompt);
        log::debug!("Image URL: {}", record.url);

        self.images.insert(0, record);
        self.images.first()
    }
}
