//! ESC/POS byte encoding for the directive stream.
//!
//! Command builders follow the Epson "ESC/POS Application Programming Guide";
//! tested against a TM-H6000IV. The encoder writes into an in-memory buffer
//! so the surrounding service can forward the bytes to whatever carries them
//! (USB endpoint, MQTT job topic).

use crate::error::PrintError;
use crate::render::{Align, Style};
use crate::transport::Transport;

/// Raw ESC/POS command builders.
mod commands {
    /// ESC @ - reset formatting and clear the print buffer.
    pub fn init() -> [u8; 2] {
        [0x1b, b'@']
    }

    /// ESC M n - font selection. Font B fits 42 columns on 80mm paper.
    pub fn font_b() -> [u8; 3] {
        [0x1b, b'M', 1]
    }

    /// ESC a n - justification: 0 left, 1 center, 2 right.
    pub fn align(n: u8) -> [u8; 3] {
        [0x1b, b'a', n]
    }

    /// ESC E n - emphasized mode on/off.
    pub fn bold(on: bool) -> [u8; 3] {
        [0x1b, b'E', on as u8]
    }

    /// GS ! n - character size. 0x11 selects double width and height.
    pub fn size(wide: bool) -> [u8; 3] {
        [0x1d, b'!', if wide { 0x11 } else { 0x00 }]
    }

    /// GS V 66 n - feed n and partial cut.
    pub fn cut() -> [u8; 4] {
        [0x1d, b'V', 66, 3]
    }
}

/// Encodes directives into ESC/POS bytes.
#[derive(Debug, Default)]
pub struct EscPosTransport {
    buffer: Vec<u8>,
    applied: Style,
}

impl EscPosTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// The encoded job so far.
    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    fn apply_style(&mut self, style: &Style) {
        if self.applied == *style {
            return;
        }
        let align = match style.align {
            Align::Left => 0,
            Align::Center => 1,
        };
        self.buffer.extend_from_slice(&commands::align(align));
        self.buffer.extend_from_slice(&commands::bold(style.bold));
        self.buffer.extend_from_slice(&commands::size(style.wide));
        self.applied = *style;
    }
}

impl Transport for EscPosTransport {
    fn begin_document(&mut self) -> Result<(), PrintError> {
        self.buffer.clear();
        self.buffer.extend_from_slice(&commands::init());
        self.buffer.extend_from_slice(&commands::font_b());
        self.applied = Style::PLAIN;
        Ok(())
    }

    fn write_text(&mut self, text: &str, style: &Style) -> Result<(), PrintError> {
        self.apply_style(style);
        self.buffer.extend_from_slice(text.as_bytes());
        Ok(())
    }

    fn cut(&mut self) -> Result<(), PrintError> {
        self.buffer.extend_from_slice(&commands::cut());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_starts_with_init_and_font_select() {
        let mut transport = EscPosTransport::new();
        transport.begin_document().unwrap();
        assert!(transport.bytes().starts_with(&[0x1b, b'@', 0x1b, b'M', 1]));
    }

    #[test]
    fn style_change_emits_escape_sequences_once() {
        let mut transport = EscPosTransport::new();
        transport.begin_document().unwrap();
        let before = transport.bytes().len();

        transport.write_text("A", &Style::BOLD).unwrap();
        let after_first = transport.bytes().len();
        // align + bold + size commands, then the byte of text
        assert_eq!(after_first - before, 3 + 3 + 3 + 1);

        transport.write_text("B", &Style::BOLD).unwrap();
        assert_eq!(transport.bytes().len(), after_first + 1);
    }

    #[test]
    fn plain_text_is_passed_through_unescaped() {
        let mut transport = EscPosTransport::new();
        transport.begin_document().unwrap();
        transport.write_text("[ ] milk\n", &Style::PLAIN).unwrap();
        let bytes = transport.bytes();
        assert!(bytes.ends_with(b"[ ] milk\n"));
    }

    #[test]
    fn cut_appends_partial_cut_command() {
        let mut transport = EscPosTransport::new();
        transport.begin_document().unwrap();
        transport.cut().unwrap();
        assert!(transport.bytes().ends_with(&[0x1d, b'V', 66, 3]));
    }
}
