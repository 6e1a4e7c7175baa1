use crate::areas::session::Session;
use crate::artifacts::core::cancel::Cancel;
use crate::artifacts::diff::format::format;
use crate::artifacts::diff::token::{NEWLINE, Token, TokenType};
use crate::artifacts::diff::tokenize::tokenize_line;
use std::path::Path;

impl Session {
    /// Highlight the changed words between the first lines of two files
    pub fn words(&self, old: &Path, new: &Path) -> anyhow::Result<()> {
        let old_text = self.read_text(old)?;
        let new_text = self.read_text(new)?;
        let (old_line, new_line) = (first_line(&old_text), first_line(&new_text));

        let cancel = Cancel::from_timeout(self.options().timeout);
        let (old_tokens, new_tokens) =
            tokenize_line(old_line, new_line, self.options().split, &cancel);

        let tokens = [
            vec![Token::new(TokenType::DelSymbol, TokenType::DelSymbol.symbol())],
            old_tokens,
            vec![
                Token::new(TokenType::Newline, NEWLINE),
                Token::new(TokenType::AddSymbol, TokenType::AddSymbol.symbol()),
            ],
            new_tokens,
            vec![Token::new(TokenType::Newline, NEWLINE)],
        ]
        .concat();

        write!(self.writer(), "{}", format(&tokens, self.options().theme))?;

        Ok(())
    }
}

fn first_line(text: &str) -> &str {
    let line = text.split('\n').next().unwrap_or_default();
    line.strip_suffix('\r').unwrap_or(line)
}
