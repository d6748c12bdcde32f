//! Recompute-on-change memoization for the document builder.

use std::hash::{DefaultHasher, Hash, Hasher};

use crate::document::{build_document, DocumentConfig};

/// Single-entry document cache keyed on the full input tuple.
///
/// [`render`](DocumentCache::render) rebuilds the document only when some
/// input changed since the previous call; otherwise it returns the stored
/// document. The post-processing hook participates by pointer identity, so
/// replacing the hook with a new allocation invalidates the entry.
#[derive(Debug, Default)]
pub struct DocumentCache {
    key: Option<u64>,
    document: String,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, markdown: &str, config: &DocumentConfig) -> &str {
        let key = input_key(markdown, config);
        if self.key != Some(key) {
            self.document = build_document(markdown, config);
            self.key = Some(key);
        }
        &self.document
    }

    pub fn invalidate(&mut self) {
        self.key = None;
    }
}

fn input_key(markdown: &str, config: &DocumentConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    markdown.hash(&mut hasher);
    config.font_size.hash(&mut hasher);
    config.theme.hash(&mut hasher);
    config.body_style.hash(&mut hasher);
    config.options.hash(&mut hasher);
    config.body_attributes.hash(&mut hasher);
    config
        .post_process
        .as_ref()
        .map(|hook| std::sync::Arc::as_ptr(hook) as *const () as usize)
        .hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_same_inputs_reuse_document() {
        let mut cache = DocumentCache::new();
        let config = DocumentConfig::default();
        let first = cache.render("# Hi", &config).to_string();
        let second = cache.render("# Hi", &config).to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_content_change_recomputes() {
        let mut cache = DocumentCache::new();
        let config = DocumentConfig::default();
        let first = cache.render("# One", &config).to_string();
        let second = cache.render("# Two", &config).to_string();
        assert_ne!(first, second);
        assert!(second.contains("<h1>Two</h1>"));
    }

    #[test]
    fn test_theme_change_recomputes() {
        let mut cache = DocumentCache::new();
        let light = DocumentConfig::default();
        let dark = DocumentConfig {
            theme: Theme::Dark,
            ..DocumentConfig::default()
        };
        let first = cache.render("text", &light).to_string();
        let second = cache.render("text", &dark).to_string();
        assert_ne!(first, second);
        assert!(second.contains("background-color:#121212;"));
    }

    #[test]
    fn test_hook_identity_participates() {
        let mut cache = DocumentCache::new();
        let with_hook = DocumentConfig {
            post_process: Some(Arc::new(|_| "hooked".to_string())),
            ..DocumentConfig::default()
        };
        let without_hook = DocumentConfig::default();
        assert_eq!(cache.render("text", &with_hook), "hooked");
        // Dropping the hook must invalidate the entry
        assert_ne!(cache.render("text", &without_hook), "hooked");
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let mut cache = DocumentCache::new();
        let config = DocumentConfig::default();
        let first = cache.render("text", &config).to_string();
        cache.invalidate();
        let second = cache.render("text", &config).to_string();
        // Deterministic builder: recomputed document is byte-identical
        assert_eq!(first, second);
    }
}
