use crate::artifacts::diff::options::DiffOptions;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// One `yadiff` invocation: where to write and how to diff
pub struct Session {
    writer: RefCell<Box<dyn std::io::Write>>,
    options: DiffOptions,
}

impl Session {
    pub fn new(writer: Box<dyn std::io::Write>, options: DiffOptions) -> Self {
        Session {
            writer: RefCell::new(writer),
            options,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Read a UTF-8 text file
    pub fn read_text(&self, path: &Path) -> anyhow::Result<String> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))
    }
}
