//! Presentation shell: sizes the document against the device viewport and
//! hands it to the external rendering surface.
//!
//! The surface itself (an embedded, auto-height web view) is an external
//! collaborator behind the [`RenderSurface`] trait. Whatever goes wrong
//! inside it — malformed HTML, resource loading — is its own to surface;
//! nothing is caught or translated here.

use crate::style::StyleMap;

/// Device viewport dimensions in logical pixels, reported by the host
/// windowing system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Effective maximum width for the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaxWidth {
    /// 100% of the available width.
    Fill,
    Px(f32),
}

/// Configuration handed to the rendering surface alongside the document.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
    /// Always false: the surface sizes itself to its content instead.
    pub scroll_enabled: bool,
    pub auto_height: bool,
    /// Scrolling while zoomed in, toggled by the caller flag.
    pub zoom_enabled: bool,
    pub max_width: MaxWidth,
    /// Surface style: transparent background merged under caller overrides.
    pub style: StyleMap,
    /// Style for the wrapping container, caller overrides verbatim.
    pub container_style: StyleMap,
}

/// The embedded web rendering surface supplied by the host.
pub trait RenderSurface {
    /// Replace whatever the surface currently shows with `html`. Successive
    /// calls simply replace the source; there is no ordering contract.
    fn load_html(&mut self, html: &str, config: &SurfaceConfig);
}

/// Wraps a document in a sized container and forwards it to the surface.
#[derive(Debug, Clone, Default)]
pub struct PresentationShell {
    width_sub: Option<f32>,
    zoom_enabled: bool,
    surface_style: StyleMap,
    container_style: StyleMap,
}

impl PresentationShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain the surface to the viewport width minus `amount`.
    pub fn width_sub(mut self, amount: f32) -> Self {
        self.width_sub = Some(amount);
        self
    }

    pub fn zoom_enabled(mut self, enabled: bool) -> Self {
        self.zoom_enabled = enabled;
        self
    }

    pub fn surface_style(mut self, style: StyleMap) -> Self {
        self.surface_style = style;
        self
    }

    pub fn container_style(mut self, style: StyleMap) -> Self {
        self.container_style = style;
        self
    }

    /// 100% of the available width, or viewport width minus the subtraction
    /// amount when one was supplied. Clamped at zero.
    pub fn max_width(&self, viewport: Viewport) -> MaxWidth {
        match self.width_sub {
            Some(sub) => MaxWidth::Px((viewport.width - sub).max(0.0)),
            None => MaxWidth::Fill,
        }
    }

    pub fn surface_config(&self, viewport: Viewport) -> SurfaceConfig {
        let mut style = StyleMap::new();
        style.set("backgroundColor", "transparent");
        style.merge(&self.surface_style);
        SurfaceConfig {
            scroll_enabled: false,
            auto_height: true,
            zoom_enabled: self.zoom_enabled,
            max_width: self.max_width(viewport),
            style,
            container_style: self.container_style.clone(),
        }
    }

    pub fn present<S: RenderSurface>(&self, html: &str, viewport: Viewport, surface: &mut S) {
        surface.load_html(html, &self.surface_config(viewport));
    }
}
