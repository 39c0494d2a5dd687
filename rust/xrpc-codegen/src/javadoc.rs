//! Javadoc extraction, escaping, and rendering.
//!
//! Turns the free-text comment attached to a schema element into a safe,
//! emission-ready `/** ... */` block. Service and method blocks wrap their
//! body in `<pre>` so the Javadoc renderer keeps the source comment's
//! whitespace and line structure instead of reflowing it.

use xrpc_schema::SourceComment;

use crate::code_writer::{Printer, Vars};
use crate::error::Result;

/// Characters escaped unconditionally, with their numeric character
/// references. `@` would otherwise start a Javadoc tag, `<`/`>`/`&` read as
/// HTML, and `\` introduces a Unicode escape anywhere in a Java file.
static ESCAPES: &[(char, &str)] = &[
    ('@', "&#64;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('&', "&amp;"),
    ('\\', "&#92;"),
];

/// `*` after `/` would open a block comment inside the doc block.
const STAR_AFTER_SLASH: &str = "&#42;";

/// `/` after `*` would close the doc block early.
const SLASH_AFTER_STAR: &str = "&#47;";

/// Pick the element's comment text: leading wins over trailing, never both.
///
/// An element with meaningful text in both silently loses the trailing part.
/// Generated-output compatibility depends on this exact precedence.
pub fn extract(comment: &SourceComment) -> &str {
    if comment.leading.is_empty() {
        &comment.trailing
    } else {
        &comment.leading
    }
}

/// Escape comment text for safe embedding in a Javadoc block.
///
/// The `*` and `/` guards look at the immediately preceding *original*
/// character, not at already-substituted text. The previous-character state
/// starts as `*`, so a comment beginning with `/` is escaped too.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut prev = '*';
    for c in text.chars() {
        match c {
            '*' if prev == '/' => out.push_str(STAR_AFTER_SLASH),
            '/' if prev == '*' => out.push_str(SLASH_AFTER_STAR),
            '*' | '/' => out.push(c),
            other => match ESCAPES.iter().find(|(hazard, _)| *hazard == other) {
                Some((_, replacement)) => out.push_str(replacement),
                None => out.push(other),
            },
        }
        prev = c;
    }
    out
}

/// Split text into lines, dropping trailing empty lines.
///
/// Interior empty lines are preserved. Empty input yields no lines.
pub fn to_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut lines: Vec<String> = text.split('\n').map(str::to_owned).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Escaped, emission-ready doc lines for an element's comment.
pub fn doc_lines(comment: &SourceComment) -> Vec<String> {
    to_lines(&escape(extract(comment)))
}

/// Emit a complete doc block for an element.
///
/// Services and methods pass `surround_with_pre = true`; the `<pre>` pair is
/// only emitted when there are lines to wrap.
pub fn write_doc_comment(
    p: &mut Printer,
    comment: &SourceComment,
    surround_with_pre: bool,
) -> Result<()> {
    p.print_raw("/**\n");
    write_doc_comment_body(p, &doc_lines(comment), surround_with_pre)?;
    p.print_raw(" */\n");
    Ok(())
}

fn write_doc_comment_body(p: &mut Printer, lines: &[String], surround_with_pre: bool) -> Result<()> {
    if lines.is_empty() {
        return Ok(());
    }
    if surround_with_pre {
        p.print_raw(" * <pre>\n");
    }
    for line in lines {
        let vars = Vars::new().with("line", line.as_str());
        // A line starting with / right after the asterisk would form */.
        if line.starts_with('/') {
            p.print(&vars, " * $line$\n")?;
        } else {
            p.print(&vars, " *$line$\n")?;
        }
    }
    if surround_with_pre {
        p.print_raw(" * </pre>\n");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(comment: &SourceComment, pre: bool) -> String {
        let mut p = Printer::new();
        write_doc_comment(&mut p, comment, pre).unwrap();
        p.into_string()
    }

    #[test]
    fn extract_prefers_leading() {
        let both = SourceComment {
            leading: " first".into(),
            trailing: " second".into(),
        };
        assert_eq!(extract(&both), " first");
        assert_eq!(extract(&SourceComment::trailing(" second")), " second");
        assert_eq!(extract(&SourceComment::default()), "");
    }

    #[test]
    fn escape_handles_html_and_tags() {
        assert_eq!(escape("a <b> & c"), "a &lt;b&gt; &amp; c");
        assert_eq!(escape("@deprecated"), "&#64;deprecated");
        assert_eq!(escape("back\\slash"), "back&#92;slash");
    }

    #[test]
    fn escape_defangs_comment_delimiters() {
        // The guard keys on the original previous character.
        assert_eq!(escape("a /* b"), "a /&#42; b");
        assert_eq!(escape("a */ b"), "a *&#47; b");
        // A lone * or / passes through.
        assert_eq!(escape("2 * 3 / 4"), "2 * 3 / 4");
    }

    #[test]
    fn escape_initial_state_treats_leading_slash_as_after_star() {
        assert_eq!(escape("/ see above"), "&#47; see above");
    }

    #[test]
    fn escape_nested_comment_scenario() {
        assert_eq!(
            escape("/* nested */ <b>&</b>"),
            "&#47;&#42; nested *&#47; &lt;b&gt;&amp;&lt;/b&gt;"
        );
    }

    #[test]
    fn escape_is_identity_on_clean_text() {
        let clean = "A plain sentence with * stars / and numbers 123.";
        assert_eq!(escape(clean), clean);
    }

    #[test]
    fn to_lines_drops_trailing_blanks_only() {
        assert_eq!(to_lines("a\n\nb\n\n\n"), vec!["a", "", "b"]);
        assert_eq!(to_lines("a"), vec!["a"]);
        assert!(to_lines("").is_empty());
        assert!(to_lines("\n\n").is_empty());
    }

    #[test]
    fn to_lines_rejoin_is_fixed_point() {
        let lines = to_lines("one\n\ntwo\n\n");
        let rejoined = lines.join("\n");
        assert_eq!(to_lines(&rejoined), lines);
    }

    #[test]
    fn empty_comment_renders_bare_block() {
        assert_eq!(rendered(&SourceComment::default(), true), "/**\n */\n");
    }

    #[test]
    fn pre_tags_wrap_nonempty_body() {
        let comment = SourceComment::leading(" Says hello.");
        assert_eq!(
            rendered(&comment, true),
            "/**\n * <pre>\n * Says hello.\n * </pre>\n */\n"
        );
    }

    #[test]
    fn plain_variant_omits_pre_tags() {
        let comment = SourceComment::leading(" Says hello.");
        assert_eq!(rendered(&comment, false), "/**\n * Says hello.\n */\n");
    }

    #[test]
    fn slash_leading_line_gets_separating_space() {
        // The escaped text can still contain a leading / (e.g. "a/ b" lines).
        let comment = SourceComment::leading("x\n/y");
        assert_eq!(
            rendered(&comment, false),
            "/**\n *x\n * /y\n */\n"
        );
    }
}
