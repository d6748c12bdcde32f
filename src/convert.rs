use pulldown_cmark::{html, Parser};

use crate::error::Result;
use crate::math;
use crate::options::RenderOptions;

/// Convert markdown (with embedded math) to an HTML fragment.
///
/// Math spans are typeset first so the raw HTML survives the markdown pass.
/// Fails only when KaTeX rejects an expression.
pub fn markdown_to_html(markdown: &str, options: &RenderOptions) -> Result<String> {
    let prepared = math::render_math(markdown, options)?;
    let parser = Parser::new_ext(&prepared, options.markdown_options());
    let mut out = String::new();
    html::push_html(&mut out, parser);
    Ok(out)
}
