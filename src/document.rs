//! HTML document assembly: layer the body style, convert the markdown, and
//! wrap everything in a complete document the rendering surface can load.

use std::fmt;
use std::fmt::Write as _;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::convert;
use crate::options::RenderOptions;
use crate::style::StyleMap;
use crate::theme::Theme;

/// Caller-supplied hook applied to the assembled document. Its return value
/// is the final document, verbatim.
pub type PostProcess = Arc<dyn Fn(String) -> String + Send + Sync>;

/// Optional class/id attached to the generated `<body>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Inputs to [`build_document`]. `Default` gives font size 14, the light
/// theme, no overrides, and no hook.
#[derive(Clone)]
pub struct DocumentConfig {
    /// Body font size in px.
    pub font_size: u32,
    pub theme: Theme,
    /// Caller body-style overrides. Win over the baseline and the theme.
    pub body_style: StyleMap,
    pub options: RenderOptions,
    pub body_attributes: Option<BodyAttributes>,
    pub post_process: Option<PostProcess>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            font_size: 14,
            theme: Theme::default(),
            body_style: StyleMap::new(),
            options: RenderOptions::default(),
            body_attributes: None,
            post_process: None,
        }
    }
}

impl fmt::Debug for DocumentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentConfig")
            .field("font_size", &self.font_size)
            .field("theme", &self.theme)
            .field("body_style", &self.body_style)
            .field("options", &self.options)
            .field("body_attributes", &self.body_attributes)
            .field("post_process", &self.post_process.is_some())
            .finish()
    }
}

/// Build a complete HTML document from markdown.
///
/// Never fails: a conversion error is rendered in place as a red error
/// block, and the document still comes out well-formed. Output is
/// deterministic for identical inputs.
pub fn build_document(markdown: &str, config: &DocumentConfig) -> String {
    let style = effective_body_style(config);

    let content = match convert::markdown_to_html(markdown, &config.options) {
        Ok(html) => html,
        Err(err) => {
            tracing::warn!("markdown conversion failed: {err}");
            format!("<pre style=\"color:red;\">Render error: {err}</pre>")
        }
    };

    let mut head_links = String::new();
    if cfg!(feature = "math") && config.options.math && config.options.math_stylesheet {
        let _ = write!(
            head_links,
            "\n    <link rel=\"stylesheet\" href=\"{}\">",
            crate::math::KATEX_CSS_URL
        );
    }

    let mut body_attrs = String::new();
    if let Some(attrs) = &config.body_attributes {
        if let Some(class) = &attrs.class {
            let _ = write!(body_attrs, " class=\"{class}\"");
        }
        if let Some(id) = &attrs.id {
            let _ = write!(body_attrs, " id=\"{id}\"");
        }
    }

    let css = indent(&style.css(), "        ");
    let document = format!(
        "<html>
  <head>
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">{head_links}
    <style>
      body {{
{css}
      }}
      img {{
        width: 100%;
        height: auto;
        margin-top: 10px;
      }}
    </style>
  </head>
  <body{body_attrs}>
    {content}
  </body>
</html>
"
    );

    match &config.post_process {
        Some(hook) => hook(document),
        None => document,
    }
}

/// Layer the body style: fixed baseline, then the theme fragment, then
/// caller overrides. Later layers win on conflict.
fn effective_body_style(config: &DocumentConfig) -> StyleMap {
    let mut style = StyleMap::new();
    style.set("fontSize", format!("{}px", config.font_size));
    style.set("marginBottom", "20px");
    style.set("userSelect", "none");
    style.set("overflow", "hidden");
    style.set("wordWrap", "break-word");
    style.set("height", "auto");
    style.set("position", "relative");
    style.set("lineHeight", "1.4");
    style.merge(&config.theme.style());
    style.merge(&config.body_style);
    style
}

fn indent(block: &str, prefix: &str) -> String {
    block
        .lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
