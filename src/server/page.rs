use crate::{models::Preset, studio::NatureStudio};
use std::fmt::Write;

pub const TITLE: &str = "Nature AI Image Generator";
pub const DESCRIPTION: &str = "Generate beautiful nature-inspired AI images";
const PLACEHOLDER: &str =
    "Describe your nature scene... (e.g., 'peaceful lake at sunrise with mountains')";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f3f7f2; color: #1f2d1f; }
.container { max-width: 1100px; margin: 0 auto; padding: 2rem 1rem; }
.header { text-align: center; margin-bottom: 2rem; }
.input-field { width: 100%; box-sizing: border-box; padding: .8rem 1rem; font-size: 1rem; border-radius: 10px; border: 1px solid #9bb59b; }
.preset-buttons { display: flex; flex-wrap: wrap; gap: .5rem; margin: 1rem 0; }
.preset-btn, .generate-btn, .download-btn { border: 0; border-radius: 999px; padding: .5rem 1rem; cursor: pointer; text-decoration: none; }
.preset-btn { background: #dfeadd; }
.generate-btn { background: #2f7d32; color: #fff; font-size: 1.05rem; padding: .7rem 1.6rem; }
button:disabled { opacity: .5; cursor: not-allowed; }
.loading { text-align: center; margin: 1.5rem 0; }
.gallery { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1rem; margin-top: 2rem; }
.image-card { background: #fff; border-radius: 12px; overflow: hidden; box-shadow: 0 2px 8px rgba(0,0,0,.08); }
.image-card img { width: 100%; aspect-ratio: 1; object-fit: cover; display: block; background: #e4ece3; }
.image-info { padding: .8rem; }
.download-btn { background: #2f7d32; color: #fff; display: inline-block; }
"#;

// Keeps the generate button disabled while the prompt is blank.
const SCRIPT: &str = r#"
const input = document.getElementById('prompt');
const button = document.getElementById('generate');
if (input && button) {
  input.addEventListener('input', () => { button.disabled = input.value.trim() === ''; });
}
"#;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn disabled_attr(disabled: bool) -> &'static str {
    if disabled {
        " disabled"
    } else {
        ""
    }
}

pub fn render_page(studio: &NatureStudio) -> String {
    let loading = studio.is_generating();
    let prompt = studio.prompt_text();

    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<meta name=\"description\" content=\"{}\">\n<style>{}</style>\n</head>\n<body>\n",
        TITLE, DESCRIPTION, STYLE
    );

    html.push_str("<div class=\"container\">\n<header class=\"header\">\n");
    let _ = writeln!(html, "<h1>🌿 {}</h1>", TITLE);
    html.push_str("<p>Create stunning nature-inspired images with AI</p>\n</header>\n");

    html.push_str("<main class=\"main-content\">\n<div class=\"input-section\">\n");
    let _ = writeln!(
        html,
        "<form id=\"generate-form\" method=\"post\" action=\"/generate\" class=\"input-group\">\
         <input type=\"text\" id=\"prompt\" name=\"prompt\" class=\"input-field\" \
         placeholder=\"{}\" value=\"{}\" autocomplete=\"off\"{}></form>",
        escape_html(PLACEHOLDER),
        escape_html(prompt),
        disabled_attr(loading)
    );

    html.push_str("<form method=\"post\" action=\"/preset\" class=\"preset-buttons\">\n");
    for preset in Preset::ALL {
        let label = escape_html(preset.label());
        let _ = writeln!(
            html,
            "<button class=\"preset-btn\" name=\"label\" value=\"{}\"{}>{}</button>",
            label,
            disabled_attr(loading),
            label
        );
    }
    html.push_str("</form>\n");

    let _ = writeln!(
        html,
        "<button id=\"generate\" class=\"generate-btn\" type=\"submit\" form=\"generate-form\"{}>{}</button>",
        disabled_attr(loading || prompt.trim().is_empty()),
        if loading {
            "Generating..."
        } else {
            "✨ Generate Image"
        }
    );
    html.push_str("</div>\n");

    if loading {
        html.push_str(
            "<div class=\"loading\"><div class=\"spinner\"></div>\
             <p>Creating your nature masterpiece...</p></div>\n",
        );
    }

    html.push_str("<div class=\"gallery\">\n");
    for image in studio.images() {
        let prompt = escape_html(&image.prompt);
        let _ = writeln!(
            html,
            "<div class=\"image-card\" id=\"image-{id}\">\
             <img src=\"{src}\" alt=\"{alt}\" loading=\"lazy\">\
             <div class=\"image-info\"><p class=\"image-prompt\">{alt}</p>\
             <a class=\"download-btn\" href=\"/download/{id}\">⬇️ Download</a></div></div>",
            id = image.created_at,
            src = escape_html(&image.url),
            alt = prompt
        );
    }
    html.push_str("</div>\n</main>\n</div>\n");

    let _ = write!(html, "<script>{}</script>\n</body>\n</html>\n", SCRIPT);
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"rock" & 'roll'</b>"#),
            "&lt;b&gt;&quot;rock&quot; &amp; &#39;roll&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_empty_page_has_presets_and_disabled_generate() {
        let studio = NatureStudio::default();
        let html = render_page(&studio);

        assert!(html.contains("<title>Nature AI Image Generator</title>"));
        assert!(html.contains("🌿 Nature AI Image Generator"));
        for preset in Preset::ALL {
            assert!(html.contains(preset.label()));
        }
        assert!(html.contains("form=\"generate-form\" disabled>✨ Generate Image"));
        assert!(!html.contains("class=\"image-card\""));
        assert!(html.contains("<div class=\"gallery\">\n</div>"));
        assert!(!html.contains("Creating your nature masterpiece"));
    }

    #[test]
    fn test_gallery_cards_follow_record_order() {
        let mut studio = NatureStudio::default();
        studio.set_prompt_text("first <lake>");
        studio.generate_at(100);
        studio.set_prompt_text("second");
        studio.generate_at(200);

        let html = render_page(&studio);
        let second = html.find("id=\"image-200\"").unwrap();
        let first = html.find("id=\"image-100\"").unwrap();
        assert!(second < first);
        assert!(html.contains("alt=\"first &lt;lake&gt;\""));
        assert!(html.contains("href=\"/download/100\""));
        assert!(html.contains("loading=\"lazy\""));
        assert!(html.contains("form=\"generate-form\">✨ Generate Image"));
    }
}
