//! Renderers for annotated token streams.

use super::token::{Token, TokenKind};

const HASHTAG_CLASS: &str = "text-cyan-400 hover:underline cursor-pointer";
const MENTION_CLASS: &str = "text-fuchsia-400 hover:underline cursor-pointer";

/// Renders tokens back to plain text, sigils included.
pub fn render_plain(tokens: &[Token]) -> String {
    tokens.iter().map(Token::source_text).collect()
}

/// Renders tokens as HTML.
///
/// Every value is escaped, so markup typed by the user is displayed rather
/// than interpreted. Only hashtag and mention tokens get wrapper spans.
pub fn render_html(tokens: &[Token]) -> String {
    let mut html = String::new();
    for token in tokens {
        let escaped = escape_html(&token.value);
        match token.kind {
            TokenKind::Text => html.push_str(&escaped),
            TokenKind::Hashtag => {
                html.push_str(&format!(r#"<span class="{HASHTAG_CLASS}">#{escaped}</span>"#))
            }
            TokenKind::Mention => {
                html.push_str(&format!(r#"<span class="{MENTION_CLASS}">@{escaped}</span>"#))
            }
        }
    }
    html
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::process_message;

    #[test]
    fn test_render_html_wraps_tokens() {
        let processed = process_message("check #ai and @bob");
        assert_eq!(
            render_html(&processed.tokens),
            concat!(
                "check ",
                r#"<span class="text-cyan-400 hover:underline cursor-pointer">#ai</span>"#,
                " and ",
                r#"<span class="text-fuchsia-400 hover:underline cursor-pointer">@bob</span>"#,
            )
        );
    }

    #[test]
    fn test_render_html_escapes_user_markup() {
        let processed = process_message(r#"<img src=x onerror="alert(1)"> #ok"#);
        let html = render_html(&processed.tokens);
        assert!(!html.contains("<img"));
        assert!(html.starts_with("&lt;img src=x onerror=&quot;alert(1)&quot;&gt; "));
        assert!(html.ends_with(">#ok</span>"));
    }

    #[test]
    fn test_render_plain_round_trips_source() {
        let input = "ping @grok about #rust & <stuff>";
        assert_eq!(render_plain(&process_message(input).tokens), input);
    }
}
