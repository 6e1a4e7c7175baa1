use crate::artifacts::core::cancel::Cancel;
use crate::artifacts::diff::narrow::narrow;
use crate::artifacts::diff::options::DiffOptions;
use crate::artifacts::diff::token::{Token, TokenType, parse_token_lines, spread_token_lines};
use crate::artifacts::diff::tokenize::{tokenize_text, words};
use crate::artifacts::style::nested::fix_nested_style;
use crate::artifacts::style::style::{
    BG_MAGENTA, BLACK, GREEN, RED, Style, should_style, stylize,
};

/// The styles each token type is rendered with
pub type Theme = fn(TokenType) -> &'static [Style];

pub fn theme_default(kind: TokenType) -> &'static [Style] {
    match kind {
        TokenType::ChunkStart => &[BLACK, BG_MAGENTA],
        TokenType::AddSymbol | TokenType::AddWords => &[GREEN],
        TokenType::DelSymbol | TokenType::DelWords => &[RED],
        _ => &[],
    }
}

pub fn theme_none(_: TokenType) -> &'static [Style] {
    &[]
}

/// [`theme_default`] when the output supports styles, [`theme_none`] otherwise
pub fn theme_auto() -> Theme {
    if should_style() {
        theme_default
    } else {
        theme_none
    }
}

/// Concatenate the literals of `tokens`, each styled by `theme`
///
/// Nesting depth is not tracked: line tokens never contain each other, so the
/// only overlap left is between styles, which [`fix_nested_style`] resolves.
pub fn format(tokens: &[Token], theme: Theme) -> String {
    let styled = tokens
        .iter()
        .map(|token| stylize(&token.literal, theme(token.kind)))
        .collect::<String>();

    fix_nested_style(&styled)
}

/// Full token pipeline: line diff, context narrowing and changed words
pub fn tokenize(x: &str, y: &str, options: &DiffOptions) -> Vec<Token> {
    let cancel = Cancel::from_timeout(options.timeout);

    let lines = parse_token_lines(tokenize_text(x, y, &cancel));
    let mut lines = narrow(options.context, lines);
    words(&mut lines, options.split, &cancel);

    spread_token_lines(lines)
}

/// Diff of two texts with the default options
pub fn diff(x: &str, y: &str) -> String {
    diff_with(x, y, &DiffOptions::default())
}

pub fn diff_with(x: &str, y: &str, options: &DiffOptions) -> String {
    format(&tokenize(x, y, options), options.theme)
}
