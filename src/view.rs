//! The full component: every input of the public surface as a builder-style
//! value, memoized document assembly, and presentation through the shell.

use std::fmt;
use std::sync::Arc;

use crate::cache::DocumentCache;
use crate::document::{BodyAttributes, DocumentConfig};
use crate::options::RenderOptions;
use crate::shell::{PresentationShell, RenderSurface, Viewport};
use crate::style::StyleMap;
use crate::theme::Theme;

/// Markdown-with-LaTeX view.
///
/// Owns the content and every rendering input, rebuilds the HTML document
/// only when one of them changes, and presents the result through a
/// [`PresentationShell`] onto a host-supplied [`RenderSurface`].
///
/// ```
/// use mdtex_view::{MarkdownView, Theme};
///
/// let mut view = MarkdownView::new("# Hi").theme(Theme::Dark).font_size(16);
/// let html = view.html();
/// assert!(html.contains("<h1>Hi</h1>"));
/// assert!(html.contains("background-color:#121212;"));
/// ```
pub struct MarkdownView {
    content: String,
    width_sub: Option<f32>,
    zoom_enabled: bool,
    container_style: StyleMap,
    surface_style: StyleMap,
    config: DocumentConfig,
    cache: DocumentCache,
}

impl MarkdownView {
    /// A view with the given content and the component defaults: font size
    /// 14, light theme, zoom off, no overrides.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            width_sub: None,
            zoom_enabled: false,
            container_style: StyleMap::new(),
            surface_style: StyleMap::new(),
            config: DocumentConfig::default(),
            cache: DocumentCache::new(),
        }
    }

    /// Constrain the surface to the viewport width minus `amount`.
    pub fn width_sub(mut self, amount: f32) -> Self {
        self.width_sub = Some(amount);
        self
    }

    pub fn font_size(mut self, px: u32) -> Self {
        self.config.font_size = px;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.config.theme = theme;
        self
    }

    /// Body CSS overrides; win over the baseline and the theme.
    pub fn body_style(mut self, style: StyleMap) -> Self {
        self.config.body_style = style;
        self
    }

    pub fn container_style(mut self, style: StyleMap) -> Self {
        self.container_style = style;
        self
    }

    pub fn surface_style(mut self, style: StyleMap) -> Self {
        self.surface_style = style;
        self
    }

    pub fn options(mut self, options: RenderOptions) -> Self {
        self.config.options = options;
        self
    }

    pub fn body_attributes(mut self, attributes: BodyAttributes) -> Self {
        self.config.body_attributes = Some(attributes);
        self
    }

    /// Hook applied to the assembled document; its return value is what the
    /// surface receives.
    pub fn post_process(mut self, hook: impl Fn(String) -> String + Send + Sync + 'static) -> Self {
        self.config.post_process = Some(Arc::new(hook));
        self
    }

    pub fn zoom_enabled(mut self, enabled: bool) -> Self {
        self.zoom_enabled = enabled;
        self
    }

    /// Replace the content in place. The next render recomputes.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// The HTML document for the current inputs, memoized.
    pub fn html(&mut self) -> &str {
        self.cache.render(&self.content, &self.config)
    }

    /// Build (or reuse) the document and hand it to the surface, sized
    /// against `viewport`.
    pub fn render_to<S: RenderSurface>(&mut self, viewport: Viewport, surface: &mut S) {
        let mut shell = PresentationShell::new()
            .zoom_enabled(self.zoom_enabled)
            .surface_style(self.surface_style.clone())
            .container_style(self.container_style.clone());
        if let Some(amount) = self.width_sub {
            shell = shell.width_sub(amount);
        }
        let html = self.cache.render(&self.content, &self.config);
        shell.present(html, viewport, surface);
    }
}

impl fmt::Debug for MarkdownView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkdownView")
            .field("content", &self.content)
            .field("width_sub", &self.width_sub)
            .field("zoom_enabled", &self.zoom_enabled)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
