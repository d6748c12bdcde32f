//! Converter configuration passed through to the markdown/math pipeline.

use serde::{Deserialize, Serialize};

/// Math markup emitted for each rendered expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MathOutput {
    /// KaTeX HTML only.
    Html,
    /// MathML only.
    Mathml,
    /// Both. The MathML carries the LaTeX source as an annotation, so the
    /// original expression survives in the output.
    #[default]
    HtmlAndMathml,
}

#[cfg(feature = "math")]
impl MathOutput {
    pub(crate) fn katex_output(self) -> katex::OutputType {
        match self {
            MathOutput::Html => katex::OutputType::Html,
            MathOutput::Mathml => katex::OutputType::Mathml,
            MathOutput::HtmlAndMathml => katex::OutputType::HtmlAndMathml,
        }
    }
}

/// Options for the markdown/math converter.
///
/// The defaults are the component's fixed flags; construct with
/// `RenderOptions::default()` and override individual fields. Caller values
/// always win over the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Scan for `$inline$` and `$$display$$` math and typeset it.
    pub math: bool,
    pub math_output: MathOutput,
    /// Allow trusted LaTeX commands (`\href`, `\url`, ...).
    pub trust: bool,
    /// Link the KaTeX stylesheet in the document head when math is on.
    pub math_stylesheet: bool,
    pub tables: bool,
    pub strikethrough: bool,
    pub footnotes: bool,
    pub smart_punctuation: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            math: true,
            math_output: MathOutput::HtmlAndMathml,
            trust: true,
            math_stylesheet: true,
            tables: true,
            strikethrough: true,
            footnotes: true,
            smart_punctuation: false,
        }
    }
}

impl RenderOptions {
    pub(crate) fn markdown_options(&self) -> pulldown_cmark::Options {
        let mut options = pulldown_cmark::Options::empty();
        if self.tables {
            options.insert(pulldown_cmark::Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
        }
        if self.footnotes {
            options.insert(pulldown_cmark::Options::ENABLE_FOOTNOTES);
        }
        if self.smart_punctuation {
            options.insert(pulldown_cmark::Options::ENABLE_SMART_PUNCTUATION);
        }
        options
    }
}
