//! Safe and trusted render paths for chat messages.
//!
//! Both paths produce a list of styled [`Span`]s. The safe path keeps the
//! text literal; the trusted path interprets a small HTML subset coming from
//! the collaborator. Control characters are neutralised on both paths since a
//! terminal will execute escape sequences it receives.

use super::message::{Message, RenderMode, TrustedMarkup};

/// Formatting flags of a span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub code: bool,
    pub link: bool,
    pub dim: bool,
}

impl SpanStyle {
    fn to_owo(self) -> owo_colors::Style {
        let mut style = owo_colors::Style::new();
        if self.bold {
            style = style.bold();
        }
        if self.italic {
            style = style.italic();
        }
        if self.underline || self.link {
            style = style.underline();
        }
        if self.code {
            style = style.cyan();
        }
        if self.link {
            style = style.blue();
        }
        if self.dim {
            style = style.dimmed();
        }
        style
    }
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

/// Renders a message through the path its mode allows.
pub fn render(message: &Message) -> Vec<Span> {
    match message.render_mode() {
        RenderMode::PlainText => plain_spans(message.text()),
        RenderMode::Markup => markup_spans(message.text()),
    }
}

/// Safe path: the text is kept as typed.
pub fn plain_spans(text: &str) -> Vec<Span> {
    if text.is_empty() {
        return Vec::new();
    }
    vec![Span {
        text: escape_controls(text),
        style: SpanStyle::default(),
    }]
}

/// Trusted path for collaborator markup.
pub fn trusted_spans(markup: &TrustedMarkup) -> Vec<Span> {
    markup_spans(markup.as_str())
}

fn markup_spans(markup: &str) -> Vec<Span> {
    let mut builder = SpanBuilder::default();
    let mut rest = markup;

    while !rest.is_empty() {
        if let Some(after_lt) = rest.strip_prefix('<') {
            match after_lt.find('>').filter(|_| starts_tag(after_lt)) {
                Some(end) => {
                    let tag = Tag::parse(&after_lt[..end]);
                    rest = &after_lt[end + 1..];
                    if tag.opens_raw_text() {
                        rest = skip_raw_text(rest, &tag.name);
                    }
                    builder.tag(&tag);
                }
                None => {
                    builder.text("<");
                    rest = after_lt;
                }
            }
            continue;
        }

        let next = rest.find('<').unwrap_or(rest.len());
        builder.text(&decode_entities(&rest[..next]));
        rest = &rest[next..];
    }

    builder.finish()
}

/// A `<` only opens a tag when a name, `/` or `!` follows it.
fn starts_tag(after_lt: &str) -> bool {
    after_lt
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!')
}

/// Skips the contents of a `script` or `style` element up to its end tag.
fn skip_raw_text<'a>(rest: &'a str, name: &str) -> &'a str {
    let end_tag = format!("</{name}");
    rest.to_ascii_lowercase()
        .find(&end_tag)
        .map_or("", |start| &rest[start..])
}

/// Concatenates spans into ANSI-styled terminal text.
pub fn to_ansi(spans: &[Span]) -> String {
    use owo_colors::OwoColorize;

    spans
        .iter()
        .map(|span| {
            if span.style == SpanStyle::default() {
                span.text.clone()
            } else {
                span.text.style(span.style.to_owo()).to_string()
            }
        })
        .collect()
}

/// Concatenates spans without any styling.
pub fn to_plain(spans: &[Span]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}

/// Replaces control characters (except newline and tab) with their escaped form.
pub fn escape_controls(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() && c != '\n' && c != '\t' {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    escaped
}

fn decode_entities(text: &str) -> String {
    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        decoded.push_str(&rest[..amp]);
        let candidate = &rest[amp..];

        let entity = candidate
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&candidate[1..semi]).map(|c| (c, semi)));

        if let Some((c, semi)) = entity {
            decoded.push(c);
            rest = &candidate[semi + 1..];
        } else {
            decoded.push('&');
            rest = &candidate[1..];
        }
    }

    decoded.push_str(rest);
    decoded
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let number = name.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

struct Tag<'a> {
    name: String,
    closing: bool,
    self_closing: bool,
    attrs: &'a str,
}

impl<'a> Tag<'a> {
    fn parse(raw: &'a str) -> Self {
        let raw = raw.trim();
        let (closing, body) = raw
            .strip_prefix('/')
            .map_or((false, raw), |stripped| (true, stripped));
        let self_closing = body.ends_with('/');
        let body = body.trim_end_matches('/');

        let name_end = body
            .find(|c: char| c.is_whitespace())
            .unwrap_or(body.len());

        Self {
            name: body[..name_end].to_ascii_lowercase(),
            closing,
            self_closing,
            attrs: &body[name_end..],
        }
    }

    fn opens_raw_text(&self) -> bool {
        !self.closing && !self.self_closing && matches!(self.name.as_str(), "script" | "style")
    }

    fn attr(&self, key: &str) -> Option<String> {
        let lower = self.attrs.to_ascii_lowercase();
        let mut from = 0;

        while let Some(found) = lower[from..].find(key) {
            let start = from + found;
            let end = start + key.len();
            from = end;

            let at_name_start = lower[..start]
                .chars()
                .next_back()
                .is_none_or(char::is_whitespace);
            let Some(after_eq) = lower[end..].trim_start().strip_prefix('=') else {
                continue;
            };
            if at_name_start {
                let value_start = lower.len() - after_eq.len();
                return Some(Self::attr_value(self.attrs[value_start..].trim_start()));
            }
        }
        None
    }

    fn attr_value(value: &str) -> String {
        let raw = match value.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let inner = &value[1..];
                &inner[..inner.find(quote).unwrap_or(inner.len())]
            }
            _ => &value[..value.find(char::is_whitespace).unwrap_or(value.len())],
        };
        decode_entities(raw)
    }
}

#[derive(Default)]
struct SpanBuilder {
    spans: Vec<Span>,
    bold: usize,
    italic: usize,
    underline: usize,
    code: usize,
    preformatted: usize,
    links: Vec<Option<String>>,
}

impl SpanBuilder {
    fn current_style(&self) -> SpanStyle {
        SpanStyle {
            bold: self.bold > 0,
            italic: self.italic > 0,
            underline: self.underline > 0,
            code: self.code > 0,
            link: self.links.iter().any(Option::is_some),
            dim: false,
        }
    }

    fn at_line_start(&self) -> bool {
        self.spans
            .last()
            .is_none_or(|span| span.text.ends_with('\n'))
    }

    fn push(&mut self, text: &str, style: SpanStyle) {
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => self.spans.push(Span {
                text: text.to_string(),
                style,
            }),
        }
    }

    fn ends_with_space(&self) -> bool {
        self.spans
            .last()
            .is_some_and(|span| span.text.ends_with(' '))
    }

    fn text(&mut self, text: &str) {
        if self.preformatted > 0 {
            let style = self.current_style();
            self.push(&escape_controls(text), style);
            return;
        }

        let mut collapsed = String::with_capacity(text.len());
        let mut in_space = false;
        for c in text.chars() {
            if c.is_whitespace() && c != '\u{a0}' {
                if !in_space {
                    collapsed.push(' ');
                }
                in_space = true;
            } else {
                collapsed.push(c);
                in_space = false;
            }
        }

        let collapsed = if self.at_line_start() || self.ends_with_space() {
            collapsed.trim_start()
        } else {
            collapsed.as_str()
        };
        let style = self.current_style();
        self.push(&escape_controls(collapsed), style);
    }

    fn line_break(&mut self) {
        if let Some(last) = self.spans.last_mut() {
            let trimmed = last.text.trim_end_matches(' ').len();
            last.text.truncate(trimmed);
        }
        let style = self.current_style();
        self.push("\n", style);
    }

    fn ensure_line_break(&mut self) {
        if !self.at_line_start() {
            self.line_break();
        }
    }

    fn tag(&mut self, tag: &Tag<'_>) {
        if tag.name == "pre" {
            self.ensure_line_break();
            Self::count(&mut self.preformatted, tag);
            Self::count(&mut self.code, tag);
            return;
        }

        let counter = match tag.name.as_str() {
            "b" | "strong" => Some(&mut self.bold),
            "i" | "em" => Some(&mut self.italic),
            "u" => Some(&mut self.underline),
            "code" => Some(&mut self.code),
            _ => None,
        };
        if let Some(counter) = counter {
            Self::count(counter, tag);
            return;
        }

        match tag.name.as_str() {
            "br" => self.line_break(),
            "p" | "div" | "ul" | "ol" => self.ensure_line_break(),
            "li" if !tag.closing => {
                self.ensure_line_break();
                let style = self.current_style();
                self.push("• ", style);
            }
            "li" => self.ensure_line_break(),
            "a" if tag.closing => {
                if let Some(Some(href)) = self.links.pop() {
                    let style = SpanStyle {
                        dim: true,
                        ..self.current_style()
                    };
                    self.push(&format!(" ({})", escape_controls(&href)), style);
                }
            }
            "a" if !tag.self_closing => {
                let href = tag.attr("href").filter(|href| !href.is_empty());
                self.links.push(href);
            }
            _ => {}
        }
    }

    fn count(depth: &mut usize, tag: &Tag<'_>) {
        if tag.closing {
            *depth = depth.saturating_sub(1);
        } else if !tag.self_closing {
            *depth += 1;
        }
    }

    fn finish(mut self) -> Vec<Span> {
        while let Some(last) = self.spans.last_mut() {
            let trimmed = last.text.trim_end().len();
            last.text.truncate(trimmed);
            if last.text.is_empty() {
                self.spans.pop();
            } else {
                break;
            }
        }
        self.spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markup(text: &str) -> Vec<Span> {
        trusted_spans(&TrustedMarkup::from_collaborator(text.to_string()))
    }

    #[test]
    fn test_plain_spans_keep_tags_literal() {
        let spans = plain_spans("<b>hi</b>");
        assert_eq!(to_plain(&spans), "<b>hi</b>");
        assert_eq!(spans[0].style, SpanStyle::default());
    }

    #[test]
    fn test_plain_spans_escape_terminal_sequences() {
        let spans = plain_spans("red\u{1b}[31mtext");
        assert_eq!(to_plain(&spans), "red\\u{1b}[31mtext");
    }

    #[test]
    fn test_plain_spans_keep_newlines_and_tabs() {
        assert_eq!(to_plain(&plain_spans("a\n\tb")), "a\n\tb");
    }

    #[test]
    fn test_markup_bold() {
        let spans = markup("<b>hi</b>");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "hi");
        assert!(spans[0].style.bold);
    }

    #[test]
    fn test_markup_mixed_styles() {
        let spans = markup("plain <strong>bold <em>both</em></strong> end");
        let texts: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["plain ", "bold ", "both", " end"]);
        assert!(spans[1].style.bold && !spans[1].style.italic);
        assert!(spans[2].style.bold && spans[2].style.italic);
        assert_eq!(spans[3].style, SpanStyle::default());
    }

    #[test]
    fn test_markup_line_breaks_and_lists() {
        let spans = markup("<p>Levels:</p><ul><li>one</li><li>two</li></ul>");
        assert_eq!(to_plain(&spans), "Levels:\n• one\n• two");
    }

    #[test]
    fn test_markup_br() {
        assert_eq!(to_plain(&markup("a<br>b<br/>c")), "a\nb\nc");
    }

    #[test]
    fn test_markup_link_appends_url() {
        let spans = markup(r#"see <a href="https://example.com/x">docs</a>"#);
        assert_eq!(to_plain(&spans), "see docs (https://example.com/x)");
        assert!(spans.iter().any(|s| s.text == "docs" && s.style.link));
    }

    #[test]
    fn test_markup_decodes_entities() {
        assert_eq!(
            to_plain(&markup("1 &lt; 2 &amp;&amp; &#65;&#x42; &quot;q&quot; &bogus;")),
            "1 < 2 && AB \"q\" &bogus;"
        );
    }

    #[test]
    fn test_markup_unknown_tags_keep_text() {
        assert_eq!(to_plain(&markup("<span class=\"x\">kept</span>")), "kept");
    }

    #[test]
    fn test_markup_unclosed_angle_is_literal() {
        assert_eq!(to_plain(&markup("a < b")), "a < b");
    }

    #[test]
    fn test_markup_comparison_signs_are_text() {
        assert_eq!(
            to_plain(&markup("Level is < 5m and > 2m")),
            "Level is < 5m and > 2m"
        );
        assert_eq!(to_plain(&markup("x <3 y <b>z</b>")), "x <3 y z");
        assert_eq!(to_plain(&markup("depth<=4m")), "depth<=4m");
    }

    #[test]
    fn test_markup_no_double_space_around_tags() {
        assert_eq!(to_plain(&markup("a <span> b</span> c")), "a b c");
        assert_eq!(to_plain(&markup("one <!-- note --> two")), "one two");
    }

    #[test]
    fn test_markup_pre_keeps_whitespace() {
        let spans = markup("Table:<pre>a\n  b</pre>done");
        assert_eq!(to_plain(&spans), "Table:\na\n  b\ndone");
        assert!(spans.iter().any(|s| s.text.contains("  b") && s.style.code));
    }

    #[test]
    fn test_markup_drops_script_and_style_contents() {
        assert_eq!(
            to_plain(&markup(
                "a<script>if (x < 1) { alert('hi') }</script> b<STYLE>p { color: red }</style>"
            )),
            "a b"
        );
        assert_eq!(to_plain(&markup("cut<script>never closed")), "cut");
    }

    #[test]
    fn test_markup_href_matches_whole_attribute_name() {
        let spans = markup(r#"<a data-href="wrong" href='right'>x</a>"#);
        assert_eq!(to_plain(&spans), "x (right)");

        let spans = markup(r#"<a data-href="only">x</a>"#);
        assert_eq!(to_plain(&spans), "x");

        let spans = markup(r#"<a HREF = "https://a.example/">x</a>"#);
        assert_eq!(to_plain(&spans), "x (https://a.example/)");
    }

    #[test]
    fn test_markup_collapses_whitespace() {
        assert_eq!(to_plain(&markup("<p>\n   many    spaces\n</p>")), "many spaces");
    }

    #[test]
    fn test_markup_neutralises_control_characters() {
        assert_eq!(to_plain(&markup("x&#27;[2J")), "x\\u{1b}[2J");
    }

    #[test]
    fn test_to_ansi_styles_only_styled_spans() {
        let spans = markup("a <b>b</b>");
        let ansi = to_ansi(&spans);
        assert!(ansi.starts_with("a "));
        assert!(ansi.contains('b'));
        assert!(ansi.contains("\u{1b}["));
        assert_eq!(to_ansi(&plain_spans("plain")), "plain");
    }

    #[test]
    fn test_render_dispatches_on_mode() {
        let user = Message::user("<b>x</b>");
        assert_eq!(to_plain(&render(&user)), "<b>x</b>");

        let bot = Message::bot_markup(TrustedMarkup::from_collaborator("<b>x</b>".into()));
        assert_eq!(to_plain(&render(&bot)), "x");
    }
}
