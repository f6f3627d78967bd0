use crate::models::Preset;

/// Holds the single editable prompt.
#[derive(Debug, Clone, Default)]
pub struct PromptComposer {
    prompt_text: String,
}

impl PromptComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    /// Replaces the prompt verbatim. Whitespace is kept; blank prompts are
    /// rejected later by the session.
    pub fn set_prompt_text(&mut self, text: impl Into<String>) {
        self.prompt_text = text.into();
    }

    pub fn apply_preset(&mut self, preset: Preset) {
        log::debug!("Applying preset: {}", preset.label());
        self.prompt_text = preset.prompt().to_string();
    }

    pub fn is_blank(&self) -> bool {
        self.prompt_text.trim().is_empty()
    }
}
