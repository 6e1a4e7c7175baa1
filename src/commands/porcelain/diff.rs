use crate::areas::session::Session;
use crate::artifacts::diff::format::diff_with;
use std::path::Path;

impl Session {
    pub fn diff(&self, old: &Path, new: &Path) -> anyhow::Result<()> {
        let old_text = self.read_text(old)?;
        let new_text = self.read_text(new)?;

        let out = diff_with(&old_text, &new_text, self.options());
        write!(self.writer(), "{out}")?;

        Ok(())
    }
}
