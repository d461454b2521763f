// Chat reply formatter - informal markdown-like text to styled markup
//
// The rewrite stages run over a string in which structural markup is carried as
// private-use sentinel characters. Once every stage has run, the sentinel stream is
// parsed into a small markup tree and rendered with all text runs escaped.
use crate::application::html::escape_html;
use regex::Regex;
use std::sync::LazyLock;

const HEADING_OPEN: char = '\u{E000}';
const HEADING_CLOSE: char = '\u{E001}';
const BOLD_OPEN: char = '\u{E002}';
const BOLD_CLOSE: char = '\u{E003}';
const ITEM_OPEN: char = '\u{E004}';
const ITEM_CLOSE: char = '\u{E005}';
const LINE_BREAK: char = '\u{E006}';

struct Rewrite {
    name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl Rewrite {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("formatter stage pattern must compile"),
            replacement,
        }
    }
}

// Order matters: double emphasis must be consumed before single emphasis,
// and list detection must see the text before newlines are replaced.
// CRLF mode: `.` stops at `\r` and `^` also starts a line after a lone `\r`.
static REWRITES: LazyLock<[Rewrite; 5]> = LazyLock::new(|| {
    [
        Rewrite::new("heading", r"(?R)\*\*(.*?)\*\*", "\u{E000}${1}\u{E001}"),
        Rewrite::new("bold", r"(?R)\*(.*?)\*", "\u{E002}${1}\u{E003}"),
        Rewrite::new("numbered-item", r"(?R)([0-9]+\.\s)(.*)", "\u{E004}${1}${2}\u{E005}"),
        Rewrite::new("bullet-item", r"(?mR)^-\s(.*)", "\u{E004}• ${1}\u{E005}"),
        Rewrite::new("line-break", r"\n", "\u{E006}"),
    ]
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Heading,
    Bold,
    ListItem,
}

impl SpanKind {
    fn open_tag(self) -> &'static str {
        match self {
            SpanKind::Heading => "<span class=\"chat-heading\">",
            SpanKind::Bold => "<strong>",
            SpanKind::ListItem => "<span class=\"chat-list-item\">",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            SpanKind::Bold => "</strong>",
            SpanKind::Heading | SpanKind::ListItem => "</span>",
        }
    }

    fn from_open(c: char) -> Option<Self> {
        match c {
            HEADING_OPEN => Some(SpanKind::Heading),
            BOLD_OPEN => Some(SpanKind::Bold),
            ITEM_OPEN => Some(SpanKind::ListItem),
            _ => None,
        }
    }

    fn from_close(c: char) -> Option<Self> {
        match c {
            HEADING_CLOSE => Some(SpanKind::Heading),
            BOLD_CLOSE => Some(SpanKind::Bold),
            ITEM_CLOSE => Some(SpanKind::ListItem),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MarkupNode {
    Text(String),
    Span(SpanKind, Vec<MarkupNode>),
    LineBreak,
}

/// Format a chat reply into styled markup. Missing or empty input yields an empty string.
pub fn format_reply(text: Option<&str>) -> String {
    match text {
        Some(text) if !text.is_empty() => render(&parse_reply(text)),
        _ => String::new(),
    }
}

/// Run every rewrite stage and parse the result into a markup tree
pub fn parse_reply(text: &str) -> Vec<MarkupNode> {
    parse_sentinels(&apply_stages(text))
}

fn apply_stages(text: &str) -> String {
    let cleaned: String = text.chars().filter(|c| !is_sentinel(*c)).collect();
    let mut current = trim_quotes(&cleaned).to_string();
    for stage in REWRITES.iter() {
        current = stage
            .pattern
            .replace_all(&current, stage.replacement)
            .into_owned();
        tracing::trace!(stage = stage.name, len = current.len(), "applied formatter stage");
    }
    current
}

fn is_sentinel(c: char) -> bool {
    (HEADING_OPEN..=LINE_BREAK).contains(&c)
}

/// Strip one leading and one trailing quote, only when both are present
fn trim_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

struct Frame {
    kind: Option<SpanKind>,
    children: Vec<MarkupNode>,
    reopened: bool,
}

impl Frame {
    fn new(kind: Option<SpanKind>, reopened: bool) -> Self {
        Self {
            kind,
            children: Vec::new(),
            reopened,
        }
    }

    fn push_char(&mut self, c: char) {
        match self.children.last_mut() {
            Some(MarkupNode::Text(run)) => run.push(c),
            _ => self.children.push(MarkupNode::Text(c.to_string())),
        }
    }

    fn into_node(self) -> Option<MarkupNode> {
        let kind = self.kind?;
        if self.reopened && self.children.is_empty() {
            return None;
        }
        Some(MarkupNode::Span(kind, self.children))
    }
}

fn close_top(stack: &mut Vec<Frame>) -> Option<SpanKind> {
    let frame = stack.pop()?;
    let kind = frame.kind;
    if let Some(node) = frame.into_node() {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(node);
        }
    }
    kind
}

/// Mis-nested spans are split: inner spans are closed with the outer one and then reopened.
fn parse_sentinels(marked: &str) -> Vec<MarkupNode> {
    let mut stack = vec![Frame::new(None, false)];

    for c in marked.chars() {
        if let Some(kind) = SpanKind::from_open(c) {
            stack.push(Frame::new(Some(kind), false));
        } else if let Some(kind) = SpanKind::from_close(c) {
            let Some(depth) = stack.iter().rposition(|f| f.kind == Some(kind)) else {
                continue;
            };
            let mut detached = Vec::new();
            while stack.len() > depth + 1 {
                detached.extend(close_top(&mut stack));
            }
            close_top(&mut stack);
            for kind in detached.into_iter().rev() {
                stack.push(Frame::new(Some(kind), true));
            }
        } else if c == LINE_BREAK {
            if let Some(top) = stack.last_mut() {
                top.children.push(MarkupNode::LineBreak);
            }
        } else if let Some(top) = stack.last_mut() {
            top.push_char(c);
        }
    }

    while stack.len() > 1 {
        close_top(&mut stack);
    }
    stack.pop().map(|root| root.children).unwrap_or_default()
}

/// Render a markup tree; text runs are escaped
pub fn render(nodes: &[MarkupNode]) -> String {
    let mut out = String::new();
    render_into(nodes, &mut out);
    out
}

fn render_into(nodes: &[MarkupNode], out: &mut String) {
    for node in nodes {
        match node {
            MarkupNode::Text(text) => out.push_str(&escape_html(text)),
            MarkupNode::Span(kind, children) => {
                out.push_str(kind.open_tag());
                render_into(children, out);
                out.push_str(kind.close_tag());
            }
            MarkupNode::LineBreak => out.push_str("<br>"),
        }
    }
}
