use derive_new::new;

pub const CHUNK_START: &str = "@@ diff chunk @@";
pub const NEWLINE: &str = "\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    LineNum,
    ChunkStart,
    ChunkEnd,
    SameSymbol,
    SameLine,
    AddSymbol,
    AddLine,
    DelSymbol,
    DelLine,
    SameWords,
    AddWords,
    DelWords,
    EmptyLine,
    Newline,
}

impl TokenType {
    pub fn is_symbol(self) -> bool {
        matches!(
            self,
            TokenType::SameSymbol | TokenType::AddSymbol | TokenType::DelSymbol
        )
    }

    /// Whether a token of this type opens a new line of the stream
    pub fn starts_line(self) -> bool {
        matches!(
            self,
            TokenType::LineNum | TokenType::ChunkStart | TokenType::ChunkEnd
        )
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TokenType::AddSymbol => "+ ",
            TokenType::DelSymbol => "- ",
            _ => "  ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Token {
    pub kind: TokenType,
    #[new(into)]
    pub literal: String,
}

/// The tokens of one rendered line
///
/// `kind` is the line's symbol type for diff lines, or the marker type for
/// chunk boundaries.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TokenLine {
    pub kind: TokenType,
    #[new(default)]
    pub tokens: Vec<Token>,
}

impl TokenLine {
    pub fn chunk_start() -> Self {
        Self {
            kind: TokenType::ChunkStart,
            tokens: vec![
                Token::new(TokenType::ChunkStart, CHUNK_START),
                Token::new(TokenType::Newline, NEWLINE),
            ],
        }
    }

    pub fn chunk_end() -> Self {
        Self {
            kind: TokenType::ChunkEnd,
            tokens: vec![
                Token::new(TokenType::ChunkEnd, ""),
                Token::new(TokenType::Newline, NEWLINE),
            ],
        }
    }

    pub fn is_change(&self) -> bool {
        matches!(self.kind, TokenType::AddSymbol | TokenType::DelSymbol)
    }

    /// Token positions of the line content, between the symbol and the newline
    pub fn content_range(&self) -> std::ops::Range<usize> {
        let start = self
            .tokens
            .iter()
            .position(|token| token.kind.is_symbol())
            .map_or(0, |i| i + 1);
        let end = self
            .tokens
            .iter()
            .rposition(|token| token.kind == TokenType::Newline)
            .filter(|&end| end >= start)
            .unwrap_or(self.tokens.len());

        start..end
    }

    pub fn content(&self) -> String {
        self.tokens[self.content_range()]
            .iter()
            .map(|token| token.literal.as_str())
            .collect()
    }

    /// Swap the content tokens for `tokens`
    pub fn replace_content(&mut self, tokens: Vec<Token>) {
        let range = self.content_range();
        self.tokens.splice(range, tokens);
    }
}

/// A maximal run of changed lines, by position in the line stream
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenHunk {
    pub del: Vec<usize>,
    pub add: Vec<usize>,
}

impl TokenHunk {
    pub fn is_empty(&self) -> bool {
        self.del.is_empty() && self.add.is_empty()
    }

    /// First line of the hunk
    pub fn from(&self) -> usize {
        let first = |lines: &[usize]| lines.first().copied();
        first(&self.del)
            .into_iter()
            .chain(first(&self.add))
            .min()
            .unwrap_or_default()
    }

    /// Last line of the hunk
    pub fn to(&self) -> usize {
        let last = |lines: &[usize]| lines.last().copied();
        last(&self.del)
            .into_iter()
            .chain(last(&self.add))
            .max()
            .unwrap_or_default()
    }
}

/// Group a flat token stream into lines
///
/// A line starts at each line number or chunk marker; the symbol token of a
/// line decides its type.
pub fn parse_token_lines(tokens: impl IntoIterator<Item = Token>) -> Vec<TokenLine> {
    let mut lines: Vec<TokenLine> = Vec::new();

    for token in tokens {
        if token.kind.starts_line() || lines.is_empty() {
            lines.push(TokenLine::new(token.kind));
        }

        if let Some(line) = lines.last_mut() {
            if token.kind.is_symbol() {
                line.kind = token.kind;
            }
            line.tokens.push(token);
        }
    }

    lines
}

pub fn spread_token_lines(lines: impl IntoIterator<Item = TokenLine>) -> Vec<Token> {
    lines.into_iter().flat_map(|line| line.tokens).collect()
}

/// Collect the runs of consecutive delete and add lines
pub fn parse_token_hunks(lines: &[TokenLine]) -> Vec<TokenHunk> {
    let mut hunks = Vec::new();
    let mut hunk = TokenHunk::default();

    for (i, line) in lines.iter().enumerate() {
        match line.kind {
            TokenType::DelSymbol => hunk.del.push(i),
            TokenType::AddSymbol => hunk.add.push(i),
            _ if !hunk.is_empty() => hunks.push(std::mem::take(&mut hunk)),
            _ => {}
        }
    }

    if !hunk.is_empty() {
        hunks.push(hunk);
    }

    hunks
}
