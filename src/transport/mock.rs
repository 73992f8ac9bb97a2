//! Capture transport for development and tests.

use crate::error::PrintError;
use crate::render::Style;
use crate::transport::Transport;

/// Records written text verbatim and ignores all styling, which doubles as
/// the degraded-capability case: styled directives must come through as
/// plain text, never as an error.
#[derive(Debug, Default)]
pub struct MockTransport {
    buffer: Vec<u8>,
    cuts: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written since the last `begin_document`.
    pub fn output(&self) -> &[u8] {
        &self.buffer
    }

    pub fn cuts(&self) -> usize {
        self.cuts
    }
}

impl Transport for MockTransport {
    fn begin_document(&mut self) -> Result<(), PrintError> {
        self.buffer.clear();
        self.cuts = 0;
        Ok(())
    }

    fn write_text(&mut self, text: &str, _style: &Style) -> Result<(), PrintError> {
        self.buffer.extend_from_slice(text.as_bytes());
        Ok(())
    }

    fn cut(&mut self) -> Result<(), PrintError> {
        self.cuts += 1;
        Ok(())
    }
}
