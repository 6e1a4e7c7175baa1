use crate::areas::session::Session;
use crate::artifacts::core::cancel::Cancel;
use crate::artifacts::lcs::sequence::{Granularity, Sequence, split_words};
use colored::Colorize;
use std::path::Path;

impl Session {
    pub fn lcs(
        &self,
        old: &Path,
        new: &Path,
        granularity: Granularity,
        compress: bool,
    ) -> anyhow::Result<()> {
        let old_text = self.read_text(old)?;
        let new_text = self.read_text(new)?;

        let (xs, ys) = match granularity {
            Granularity::Chars => (Sequence::chars(&old_text), Sequence::chars(&new_text)),
            Granularity::Words => (
                Sequence::words(split_words, &old_text),
                Sequence::words(split_words, &new_text),
            ),
            Granularity::Lines => (Sequence::lines(&old_text), Sequence::lines(&new_text)),
        };

        let cancel = Cancel::from_timeout(self.options().timeout);
        let solution = xs.lcs_with(&ys, &cancel, compress);
        let lcs = xs.sub(&solution.indices);

        writeln!(self.writer(), "{lcs}")?;

        let summary = format!(
            "lcs: {} of {}/{} {}",
            lcs.len(),
            xs.len(),
            ys.len(),
            granularity.unit()
        );
        writeln!(self.writer(), "{}", summary.bold())?;

        if solution.cancelled {
            writeln!(
                self.writer(),
                "{}",
                "timed out: the subsequence may not be the longest".yellow()
            )?;
        }

        Ok(())
    }
}
