//! Math/LaTeX typesetting: extract `$inline$` and `$$display$$` spans from
//! markdown and replace them with KaTeX-rendered HTML before the markdown
//! pipeline runs.
//!
//! Code fences, inline code spans, escaped `\$`, and unclosed delimiters are
//! preserved verbatim. A KaTeX failure aborts conversion with the failure
//! message; the document builder turns that into an inline error block.
//!
//! KaTeX is only available when the `math` feature is enabled; without it,
//! math spans pass through untouched.

use crate::error::Result;
use crate::options::RenderOptions;

/// KaTeX CSS CDN URL, linked in the generated document `<head>` so the
/// typeset output actually lays out correctly inside the rendering surface.
pub const KATEX_CSS_URL: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.22/dist/katex.min.css";

/// Pre-process markdown, typesetting every math span through KaTeX.
#[cfg(feature = "math")]
pub fn render_math(markdown: &str, options: &RenderOptions) -> Result<String> {
    if !options.math {
        return Ok(markdown.to_string());
    }

    let b = markdown.as_bytes();
    let n = b.len();
    let mut out = String::with_capacity(n);
    let mut i = 0;

    while i < n {
        match b[i] {
            c @ (b'`' | b'~') if run_len(b, i, c) >= 3 => {
                i = copy_fenced_block(markdown, i, &mut out);
            }
            b'`' if b.get(i + 1) != Some(&b'`') => {
                i = copy_code_span(markdown, i, &mut out);
            }
            b'$' if b.get(i + 1) == Some(&b'$') => {
                let expr_start = i + 2;
                match markdown[expr_start..].find("$$") {
                    Some(p) => {
                        let close = expr_start + p;
                        out.push_str(&render_expr(&markdown[expr_start..close], true, options)?);
                        i = close + 2;
                    }
                    None => {
                        // Unclosed $$, preserve as-is
                        out.push_str(&markdown[i..]);
                        i = n;
                    }
                }
            }
            b'$' => {
                i = render_inline(markdown, i, options, &mut out)?;
            }
            _ => {
                let start = i;
                i += 1;
                while i < n && !matches!(b[i], b'`' | b'~' | b'$') {
                    i += 1;
                }
                out.push_str(&markdown[start..i]);
            }
        }
    }

    Ok(out)
}

/// Stub when the math feature is not enabled. Returns input unchanged.
#[cfg(not(feature = "math"))]
pub fn render_math(markdown: &str, _options: &RenderOptions) -> Result<String> {
    Ok(markdown.to_string())
}

/// Handle a `$` at byte offset `i`. Renders the span when it is valid inline
/// math, otherwise copies it verbatim. Returns the offset to resume at.
#[cfg(feature = "math")]
fn render_inline(
    markdown: &str,
    i: usize,
    options: &RenderOptions,
    out: &mut String,
) -> Result<usize> {
    let b = markdown.as_bytes();
    let n = b.len();

    // An escaped \$ or a $ followed by whitespace is not math
    let escaped = i > 0 && b[i - 1] == b'\\';
    let has_content = !matches!(b.get(i + 1).copied(), None | Some(b' ') | Some(b'\n'));
    if escaped || !has_content {
        out.push('$');
        return Ok(i + 1);
    }

    // Inline math does not span lines
    let expr_start = i + 1;
    let mut j = expr_start;
    while j < n && b[j] != b'$' && b[j] != b'\n' {
        j += 1;
    }
    if j < n && b[j] == b'$' {
        let expr = &markdown[expr_start..j];
        if !expr.is_empty() && !expr.ends_with(' ') {
            out.push_str(&render_expr(expr, false, options)?);
        } else {
            // Trailing space = not valid math, preserve
            out.push('$');
            out.push_str(expr);
            out.push('$');
        }
        Ok(j + 1)
    } else {
        // No closing $ on this line, preserve
        out.push_str(&markdown[i..j]);
        Ok(j)
    }
}

/// Copy a fenced code block (``` or ~~~) verbatim, honoring fence length:
/// only a closing run at least as long as the opener ends the block.
#[cfg(feature = "math")]
fn copy_fenced_block(markdown: &str, start: usize, out: &mut String) -> usize {
    let b = markdown.as_bytes();
    let n = b.len();
    let fence_char = b[start];

    let mut i = start;
    while i < n && b[i] == fence_char {
        i += 1;
    }
    let fence_len = i - start;

    // Info string: rest of the opening line
    while i < n && b[i] != b'\n' {
        i += 1;
    }
    if i < n {
        i += 1;
    }

    while i < n {
        if b[i] == fence_char {
            let close_start = i;
            while i < n && b[i] == fence_char {
                i += 1;
            }
            if i - close_start >= fence_len {
                break;
            }
        } else {
            i += 1;
        }
    }

    out.push_str(&markdown[start..i]);
    i
}

/// Copy an inline code span (`...`) verbatim.
#[cfg(feature = "math")]
fn copy_code_span(markdown: &str, start: usize, out: &mut String) -> usize {
    let b = markdown.as_bytes();
    let n = b.len();
    let mut i = start + 1;
    while i < n && b[i] != b'`' {
        i += 1;
    }
    if i < n {
        i += 1;
    }
    out.push_str(&markdown[start..i]);
    i
}

#[cfg(feature = "math")]
fn run_len(b: &[u8], i: usize, c: u8) -> usize {
    b[i..].iter().take_while(|&&x| x == c).count()
}

/// Typeset a single expression through KaTeX.
#[cfg(feature = "math")]
fn render_expr(expr: &str, display_mode: bool, options: &RenderOptions) -> Result<String> {
    use crate::error::RenderError;

    let opts = katex::Opts::builder()
        .display_mode(display_mode)
        .output_type(options.math_output.katex_output())
        .trust(options.trust)
        .build()
        .map_err(|e| RenderError::math(format!("KaTeX options error: {e}")))?;

    katex::render_with_opts(expr, &opts).map_err(|e| RenderError::math(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> RenderOptions {
        RenderOptions::default()
    }

    #[test]
    fn test_passthrough_no_math() {
        let input = "Hello world, no math here.";
        assert_eq!(render_math(input, &opts()).unwrap(), input);
    }

    #[cfg(feature = "math")]
    #[test]
    fn test_inline_math_rendered() {
        let output = render_math("The formula $E=mc^2$ is famous.", &opts()).unwrap();
        assert!(output.contains("katex"), "should contain KaTeX HTML: {output}");
        assert!(!output.contains("$E=mc^2$"), "should not contain raw math");
    }

    #[cfg(feature = "math")]
    #[test]
    fn test_display_math_rendered() {
        let output = render_math("Before.\n\n$$\\int_0^1 x^2 dx$$\n\nAfter.", &opts()).unwrap();
        assert!(output.contains("katex"), "should contain KaTeX HTML: {output}");
        assert!(!output.contains("$$"), "should not contain raw $$");
    }

    #[cfg(feature = "math")]
    #[test]
    fn test_display_math_multiline() {
        let output = render_math("$$\nE = mc^2\n$$", &opts()).unwrap();
        assert!(output.contains("katex"), "display math spans lines: {output}");
        assert!(!output.contains("$$"));
    }

    #[cfg(feature = "math")]
    #[test]
    fn test_invalid_math_is_an_error() {
        let result = render_math(r"broken: $\frac$", &opts());
        assert!(result.is_err());
    }

    #[cfg(feature = "math")]
    #[test]
    fn test_math_disabled_passthrough() {
        let options = RenderOptions {
            math: false,
            ..RenderOptions::default()
        };
        let input = "The formula $E=mc^2$ is famous.";
        assert_eq!(render_math(input, &options).unwrap(), input);
    }

    #[test]
    fn test_skips_fenced_code_blocks() {
        let output = render_math("```\n$not math$\n```\n\nplain", &opts()).unwrap();
        assert!(output.contains("$not math$"));
    }

    #[test]
    fn test_skips_inline_code() {
        let output = render_math("Use the `$PATH` variable.", &opts()).unwrap();
        assert!(output.contains("`$PATH`"));
    }

    #[test]
    fn test_preserves_escaped_dollar() {
        let output = render_math(r"Price is \$5 today.", &opts()).unwrap();
        assert!(output.contains(r"\$5"));
    }

    #[test]
    fn test_dollar_followed_by_space_not_math() {
        let input = "I have $ 5 in my wallet.";
        assert_eq!(render_math(input, &opts()).unwrap(), input);
    }

    #[test]
    fn test_dollar_followed_by_newline_not_math() {
        let input = "Price $\nnot math";
        assert_eq!(render_math(input, &opts()).unwrap(), input);
    }

    #[test]
    fn test_fenced_tildes() {
        let output = render_math("~~~\n$not math$\n~~~\n", &opts()).unwrap();
        assert!(output.contains("$not math$"));
    }

    #[test]
    fn test_fenced_with_info_string() {
        let output = render_math("```rust\nlet x = $5;\n```\n", &opts()).unwrap();
        assert!(output.contains("let x = $5;"));
        assert!(output.contains("```rust"));
    }

    #[test]
    fn test_fenced_longer_closing_run() {
        // 4 backticks can close a 3-backtick fence
        let output = render_math("```\n$skip$\n````\n", &opts()).unwrap();
        assert!(output.contains("$skip$"));
    }

    #[test]
    fn test_fenced_inner_shorter_fence_does_not_close() {
        let output = render_math("````\ninner ``` text $x$\n````\n", &opts()).unwrap();
        assert!(output.contains("inner ``` text $x$"));
    }

    #[test]
    fn test_fenced_eof_inside_fence() {
        let output = render_math("```\nunclosed fence with $math$", &opts()).unwrap();
        assert!(output.contains("$math$"));
    }

    #[test]
    fn test_unclosed_display_preserved() {
        let output = render_math("Text $$E=mc^2 no close", &opts()).unwrap();
        assert!(output.contains("$$E=mc^2 no close"));
    }

    #[test]
    fn test_unclosed_inline_preserved() {
        let output = render_math("The formula $E=mc^2", &opts()).unwrap();
        assert!(output.contains("$E=mc^2"));
    }

    #[test]
    fn test_inline_trailing_space_preserved() {
        let output = render_math("Here $trailing $ end", &opts()).unwrap();
        assert!(output.contains("$trailing $"));
    }

    #[test]
    fn test_inline_hits_newline_before_close() {
        let output = render_math("Start $x+\ny$ end", &opts()).unwrap();
        assert!(output.contains("$x+"));
    }

    #[test]
    fn test_strikethrough_tildes_untouched() {
        let input = "some ~~struck~~ text";
        assert_eq!(render_math(input, &opts()).unwrap(), input);
    }
}
