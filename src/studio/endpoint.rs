use crate::config::Config;

pub const QUALITY_SUFFIX: &str =
    ", high quality, detailed, beautiful nature photography, 8k resolution";

/// Builds image URLs for the hosted text-to-image endpoint. The URL is the
/// whole request: fetching it returns the generated image.
#[derive(Debug, Clone)]
pub struct ImageEndpoint {
    base_url: String,
    width: u32,
    height: u32,
}

impl ImageEndpoint {
    pub fn new(base_url: impl Into<String>, width: u32, height: u32) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            width,
            height,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.endpoint.clone(), config.width, config.height)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn enhance_prompt(prompt: &str) -> String {
        format!("{}{}", prompt, QUALITY_SUFFIX)
    }

    /// `<base>/<encoded enhanced prompt>?width=..&height=..&seed=..`.
    /// The seed only defeats caching at the endpoint.
    pub fn image_url(&self, prompt: &str, seed: i64) -> String {
        let enhanced = Self::enhance_prompt(prompt);
        format!(
            "{}/{}?width={}&height={}&seed={}",
            self.base_url,
            urlencoding::encode(&enhanced),
            self.width,
            self.height,
            seed
        )
    }
}

impl Default for ImageEndpoint {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
