//! Markdown + LaTeX presentational component.
//!
//! Builds a complete, self-contained HTML document from markdown text —
//! math typeset through KaTeX, markdown through pulldown-cmark, body style
//! layered from a fixed baseline, a [`Theme`] preset, and caller overrides —
//! and sizes/configures it for an embedded auto-height web surface supplied
//! by the host application.
//!
//! A conversion failure never escapes: it is rendered in place as a red
//! error block and the document still comes out well-formed.
//!
//! ```
//! use mdtex_view::{build_document, DocumentConfig};
//!
//! let html = build_document("# Hi", &DocumentConfig::default());
//! assert!(html.contains("<h1>Hi</h1>"));
//! assert!(html.contains("color:#333;"));
//! ```
//!
//! The higher-level [`MarkdownView`] owns the inputs, memoizes the document,
//! and presents it through a [`PresentationShell`] onto any
//! [`RenderSurface`] implementation.

pub mod cache;
pub mod convert;
pub mod document;
pub mod error;
pub mod math;
pub mod options;
pub mod shell;
pub mod style;
pub mod theme;
pub mod view;

pub use cache::DocumentCache;
pub use document::{build_document, BodyAttributes, DocumentConfig, PostProcess};
pub use error::{RenderError, Result};
pub use options::{MathOutput, RenderOptions};
pub use shell::{MaxWidth, PresentationShell, RenderSurface, SurfaceConfig, Viewport};
pub use style::StyleMap;
pub use theme::Theme;
pub use view::MarkdownView;
