//! Nested style normalisation
//!
//! Concatenating styled strings can nest styles of the same channel:
//!
//! ```text
//! <red>1<blue>2<cyan>3</cyan>4</blue>5</red>
//! ```
//!
//! A terminal renders `4` and `5` unstyled, because the inner unset code turns
//! the whole foreground channel off. The re-emitter keeps a stack of the open
//! styles: opening a style closes the outer one of the same channel first, and
//! closing a style re-opens the outer one that it hid:
//!
//! ```text
//! <red>1</red><blue>2</blue><cyan>3</cyan><blue>4</blue><red>5</red>
//! ```
//!
//! The normalisation works on [`Span`]s, so it is independent of how they
//! were encoded; [`parse`] and [`render`] convert from and to ANSI strings.

use crate::artifacts::style::style::{RESET, STYLES, Style, UNSETS, ansi_regex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Open(Style),
    /// The unset escape sequence closing a channel
    Close(&'static str),
    Reset,
}

/// Split an ANSI string into spans; unknown escape codes are kept as text
pub fn parse(s: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in ansi_regex().captures_iter(s) {
        let (Some(all), Some(code)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        if all.start() > last {
            spans.push(Span::Text(s[last..all.start()].to_string()));
        }

        let code = code.as_str();
        let span = if let Some(style) = STYLES.get(code) {
            Span::Open(*style)
        } else if let Some(unset) = UNSETS.get(code) {
            Span::Close(*unset)
        } else if code == "0" {
            Span::Reset
        } else {
            Span::Text(all.as_str().to_string())
        };
        spans.push(span);

        last = all.end();
    }

    if last < s.len() {
        spans.push(Span::Text(s[last..].to_string()));
    }

    spans
}

pub fn render(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Text(text) => text.as_str(),
            Span::Open(style) => style.set,
            Span::Close(unset) => *unset,
            Span::Reset => RESET,
        })
        .collect::<String>()
}

/// Re-emit `spans` so that no two open styles share a channel
pub fn fix_nested(spans: Vec<Span>) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    let mut stack: Vec<Style> = Vec::new();

    for span in spans {
        match span {
            Span::Open(style) => {
                if stack.iter().any(|open| open.shares_channel(&style)) {
                    out.push(Span::Close(style.unset));
                }
                stack.push(style);
                out.push(Span::Open(style));
            }
            Span::Close(unset) => {
                if let Some(pos) = stack.iter().rposition(|open| open.unset == unset) {
                    stack.remove(pos);
                }
                out.push(Span::Close(unset));

                if let Some(hidden) = stack.iter().rev().find(|open| open.unset == unset) {
                    out.push(Span::Open(*hidden));
                }
            }
            Span::Reset => {
                stack.clear();
                out.push(Span::Reset);
            }
            text @ Span::Text(_) => out.push(text),
        }
    }

    out
}

/// [`fix_nested`] over an ANSI string
pub fn fix_nested_style(s: &str) -> String {
    render(&fix_nested(parse(s)))
}
