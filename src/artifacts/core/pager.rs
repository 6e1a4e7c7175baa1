use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// `io::Write` sink feeding a [`Pager`]
///
/// Writes may cut a UTF-8 sequence in two; its leading bytes are held back
/// until the rest arrives, so the pager only ever receives whole characters.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
    #[new(default)]
    pending: Vec<u8>,
}

impl PagerWriter {
    /// Length of the longest prefix of `pending` that is complete UTF-8
    fn complete_prefix(&self) -> io::Result<usize> {
        match std::str::from_utf8(&self.pending) {
            Ok(text) => Ok(text.len()),
            Err(e) if e.error_len().is_none() => Ok(e.valid_up_to()),
            Err(e) => Err(io::Error::new(io::ErrorKind::InvalidData, e)),
        }
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);

        let complete = match self.complete_prefix() {
            Ok(complete) => complete,
            Err(e) => {
                self.pending.clear();
                return Err(e);
            }
        };

        let text = std::str::from_utf8(&self.pending[..complete])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        self.pending.drain(..complete);

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "incomplete UTF-8 sequence",
            ))
        }
    }
}
