use crate::config::{Config, DEFAULT_IMAGE_BASE_URL};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except RFC 3986 unreserved characters gets encoded, so `/`
/// and `&` in a prompt stay inside the single path segment.
const PROMPT_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Builds text-to-image URLs; the image itself is fetched by whoever
/// renders the URL.
#[derive(Debug, Clone)]
pub struct ImageAdapter {
    base_url: String,
}

impl ImageAdapter {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.image_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base>/prompt/<percent-encoded prompt>`
    pub fn image_url_for(&self, prompt: &str) -> String {
        format!(
            "{}/prompt/{}",
            self.base_url,
            utf8_percent_encode(prompt, PROMPT_SEGMENT)
        )
    }
}

impl Default for ImageAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    fn decoded_segment(url: &str) -> String {
        let (_, segment) = url.split_once("/prompt/").unwrap();
        assert!(!segment.contains('/'));
        percent_decode_str(segment).decode_utf8().unwrap().into_owned()
    }

    #[test]
    fn test_red_fox_url() {
        let adapter = ImageAdapter::default();
        assert_eq!(
            adapter.image_url_for("a red fox in snow"),
            "https://image.pollinations.ai/prompt/a%20red%20fox%20in%20snow"
        );
    }

    #[test]
    fn test_round_trip_special_characters() {
        let adapter = ImageAdapter::default();
        for prompt in [
            "cats & dogs",
            "either/or",
            "100% real?",
            "naïve café – 東京の夜 🌌",
            "a+b=c #tag",
            "  leading and trailing  ",
        ] {
            assert_eq!(decoded_segment(&adapter.image_url_for(prompt)), prompt);
        }
    }

    #[test]
    fn test_url_is_deterministic() {
        let adapter = ImageAdapter::new("http://localhost:8080/");
        let first = adapter.image_url_for("sunset over dunes");
        let second = adapter.image_url_for("sunset over dunes");
        assert_eq!(first, second);
        assert!(first.starts_with("http://localhost:8080/prompt/"));
    }
}
