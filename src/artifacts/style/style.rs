use regex::{Captures, Regex};
use std::sync::LazyLock;

pub const ANSI_REGEX: &str = r"\x1b\[(\d+)m";
pub const NEWLINE_REGEX: &str = r"\r?\n";

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ANSI_REGEX).expect("ANSI pattern is a valid regex"));
static NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NEWLINE_REGEX).expect("newline pattern is a valid regex"));

/// A pair of SGR escape codes: `set` turns the style on, `unset` turns its
/// whole channel (foreground, background, intensity...) back to default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    pub set: &'static str,
    pub unset: &'static str,
}

impl Style {
    pub const fn new(set: &'static str, unset: &'static str) -> Self {
        Self { set, unset }
    }

    pub fn is_none(&self) -> bool {
        self.set.is_empty() && self.unset.is_empty()
    }

    /// Whether both styles are turned off by the same code
    pub fn shares_channel(&self, other: &Style) -> bool {
        self.unset == other.unset
    }
}

pub const NONE: Style = Style::new("", "");

pub const BOLD: Style = Style::new("\x1b[1m", "\x1b[22m");
pub const FAINT: Style = Style::new("\x1b[2m", "\x1b[22m");
pub const ITALIC: Style = Style::new("\x1b[3m", "\x1b[23m");
pub const UNDERLINE: Style = Style::new("\x1b[4m", "\x1b[24m");

pub const BLACK: Style = Style::new("\x1b[30m", "\x1b[39m");
pub const RED: Style = Style::new("\x1b[31m", "\x1b[39m");
pub const GREEN: Style = Style::new("\x1b[32m", "\x1b[39m");
pub const YELLOW: Style = Style::new("\x1b[33m", "\x1b[39m");
pub const BLUE: Style = Style::new("\x1b[34m", "\x1b[39m");
pub const MAGENTA: Style = Style::new("\x1b[35m", "\x1b[39m");
pub const CYAN: Style = Style::new("\x1b[36m", "\x1b[39m");
pub const WHITE: Style = Style::new("\x1b[37m", "\x1b[39m");

pub const BG_BLACK: Style = Style::new("\x1b[40m", "\x1b[49m");
pub const BG_RED: Style = Style::new("\x1b[41m", "\x1b[49m");
pub const BG_GREEN: Style = Style::new("\x1b[42m", "\x1b[49m");
pub const BG_YELLOW: Style = Style::new("\x1b[43m", "\x1b[49m");
pub const BG_BLUE: Style = Style::new("\x1b[44m", "\x1b[49m");
pub const BG_MAGENTA: Style = Style::new("\x1b[45m", "\x1b[49m");
pub const BG_CYAN: Style = Style::new("\x1b[46m", "\x1b[49m");
pub const BG_WHITE: Style = Style::new("\x1b[47m", "\x1b[49m");

/// Styles by the SGR code that turns them on
pub const STYLES: phf::Map<&'static str, Style> = phf::phf_map! {
    "1" => BOLD,
    "2" => FAINT,
    "3" => ITALIC,
    "4" => UNDERLINE,
    "30" => BLACK,
    "31" => RED,
    "32" => GREEN,
    "33" => YELLOW,
    "34" => BLUE,
    "35" => MAGENTA,
    "36" => CYAN,
    "37" => WHITE,
    "40" => BG_BLACK,
    "41" => BG_RED,
    "42" => BG_GREEN,
    "43" => BG_YELLOW,
    "44" => BG_BLUE,
    "45" => BG_MAGENTA,
    "46" => BG_CYAN,
    "47" => BG_WHITE,
};

/// Escape sequences by the SGR code that turns a channel off
pub const UNSETS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "22" => "\x1b[22m",
    "23" => "\x1b[23m",
    "24" => "\x1b[24m",
    "39" => "\x1b[39m",
    "49" => "\x1b[49m",
};

pub const RESET: &str = "\x1b[0m";

/// Whether styled output should be produced at all
///
/// Follows `NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE` and whether stdout is a
/// terminal, plus any override set through `colored::control`.
pub fn should_style() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}

/// Apply `styles` in order, each one wrapping every line of `s` on its own so
/// that a style never spans a line break
pub fn stylize(s: &str, styles: &[Style]) -> String {
    styles
        .iter()
        .filter(|style| !style.is_none())
        .fold(s.to_string(), |s, style| stylize_one(&s, style))
}

fn stylize_one(s: &str, style: &Style) -> String {
    let newline = NEWLINE.find(s).map_or("\n", |m| m.as_str());

    NEWLINE
        .split(s)
        .map(|line| format!("{}{}{}", style.set, line, style.unset))
        .collect::<Vec<_>>()
        .join(newline)
}

pub fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// Make escape codes readable: `\x1b[31m` becomes `<31>`
pub fn visualize_ansi(s: &str) -> String {
    ANSI.replace_all(s, |caps: &Captures<'_>| format!("<{}>", &caps[1]))
        .into_owned()
}

pub(crate) fn ansi_regex() -> &'static Regex {
    &ANSI
}
