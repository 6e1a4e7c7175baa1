use crate::artifacts::core::cancel::Cancel;
use crate::artifacts::diff::token::{
    NEWLINE, Token, TokenLine, TokenType, parse_token_hunks,
};
use crate::artifacts::lcs::sequence::{Element, Sequence, Split};

/// One step of the walk over `x`, `y` and their LCS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Delete(usize),
    Insert(usize),
    Equal(usize, usize),
}

/// Merge `xs` and `ys` along their LCS
///
/// Elements of `x` that are not the next LCS element are deletions, then
/// elements of `y` that are not are insertions, otherwise both advance.
fn walk(xs: &Sequence<'_>, ys: &Sequence<'_>, cancel: &Cancel) -> Vec<Step> {
    let lcs = xs.sub(&xs.lcs(ys, cancel).indices);
    let (mut i, mut j, mut k) = (0, 0, 0);
    let mut steps = Vec::with_capacity(xs.len() + ys.len());

    while i < xs.len() || j < ys.len() {
        let next = lcs.get(k).map(Element::key);
        let differs = |element: Option<&Element<'_>>| {
            element.is_some_and(|element| Some(element.key()) != next)
        };

        if differs(xs.get(i)) {
            steps.push(Step::Delete(i));
            i += 1;
        } else if differs(ys.get(j)) {
            steps.push(Step::Insert(j));
            j += 1;
        } else {
            steps.push(Step::Equal(i, j));
            i += 1;
            j += 1;
            k += 1;
        }
    }

    steps
}

/// Line number columns, zero padded to the digit count of each side
#[derive(Debug, Clone, Copy)]
struct LineNumbers {
    x_width: usize,
    y_width: usize,
}

impl LineNumbers {
    fn new(x_len: usize, y_len: usize) -> Self {
        Self {
            x_width: x_len.to_string().len(),
            y_width: y_len.to_string().len(),
        }
    }

    fn delete(&self, i: usize) -> String {
        format!("{:0w$} {}", i + 1, " ".repeat(self.y_width + 1), w = self.x_width)
    }

    fn insert(&self, j: usize) -> String {
        format!("{} {:0w$} ", " ".repeat(self.x_width), j + 1, w = self.y_width)
    }

    fn equal(&self, i: usize, j: usize) -> String {
        format!(
            "{:0xw$} {:0yw$} ",
            i + 1,
            j + 1,
            xw = self.x_width,
            yw = self.y_width
        )
    }
}

fn text_at<'a>(seq: &Sequence<'a>, i: usize) -> &'a str {
    seq.get(i).map_or("", Element::text)
}

fn line_tokens(num: String, symbol: TokenType, content: TokenType, text: &str) -> [Token; 4] {
    let content = if text.is_empty() {
        TokenType::EmptyLine
    } else {
        content
    };

    [
        Token::new(TokenType::LineNum, num),
        Token::new(symbol, symbol.symbol()),
        Token::new(content, text),
        Token::new(TokenType::Newline, NEWLINE),
    ]
}

/// Line level diff of two texts as a flat token stream
///
/// Every line yields a line number, a symbol, the content and a newline token.
pub fn tokenize_text(x: &str, y: &str, cancel: &Cancel) -> Vec<Token> {
    let (xs, ys) = (Sequence::lines(x), Sequence::lines(y));
    let numbers = LineNumbers::new(xs.len(), ys.len());

    walk(&xs, &ys, cancel)
        .into_iter()
        .flat_map(|step| match step {
            Step::Delete(i) => line_tokens(
                numbers.delete(i),
                TokenType::DelSymbol,
                TokenType::DelLine,
                text_at(&xs, i),
            ),
            Step::Insert(j) => line_tokens(
                numbers.insert(j),
                TokenType::AddSymbol,
                TokenType::AddLine,
                text_at(&ys, j),
            ),
            Step::Equal(i, j) => line_tokens(
                numbers.equal(i, j),
                TokenType::SameSymbol,
                TokenType::SameLine,
                text_at(&xs, i),
            ),
        })
        .collect()
}

fn push_merged(tokens: &mut Vec<Token>, kind: TokenType, text: &str) {
    match tokens.last_mut() {
        Some(last) if last.kind == kind => last.literal.push_str(text),
        _ => tokens.push(Token::new(kind, text)),
    }
}

/// Intra-line diff of two lines split with `split`
///
/// Returns the tokens of `x` (same and deleted words) and of `y` (same and
/// added words); adjacent tokens of the same type are merged.
pub fn tokenize_line(x: &str, y: &str, split: Split, cancel: &Cancel) -> (Vec<Token>, Vec<Token>) {
    let (xs, ys) = (Sequence::words(split, x), Sequence::words(split, y));
    let (mut x_tokens, mut y_tokens) = (Vec::new(), Vec::new());

    for step in walk(&xs, &ys, cancel) {
        match step {
            Step::Delete(i) => push_merged(&mut x_tokens, TokenType::DelWords, text_at(&xs, i)),
            Step::Insert(j) => push_merged(&mut y_tokens, TokenType::AddWords, text_at(&ys, j)),
            Step::Equal(i, j) => {
                push_merged(&mut x_tokens, TokenType::SameWords, text_at(&xs, i));
                push_merged(&mut y_tokens, TokenType::SameWords, text_at(&ys, j));
            }
        }
    }

    (x_tokens, y_tokens)
}

/// Highlight the changed words of modified lines
///
/// Only hunks with as many deleted as added lines are paired up, line by line;
/// the content of each pair is replaced by its [`tokenize_line`] tokens.
pub fn words(lines: &mut [TokenLine], split: Split, cancel: &Cancel) {
    for hunk in parse_token_hunks(lines) {
        if hunk.del.len() != hunk.add.len() {
            continue;
        }

        for (&d, &a) in hunk.del.iter().zip(&hunk.add) {
            let (x, y) = (lines[d].content(), lines[a].content());
            let (x_tokens, y_tokens) = tokenize_line(&x, &y, split, cancel);

            lines[d].replace_content(x_tokens);
            lines[a].replace_content(y_tokens);
        }
    }
}
