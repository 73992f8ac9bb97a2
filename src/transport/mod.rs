//! Transport seam between the renderer and physical printers.
//!
//! The renderer only ever emits directives; how they are realized belongs to
//! the transport a caller injects. The crate ships an in-memory capture
//! transport for development and an ESC/POS byte encoder whose output can be
//! handed to a USB endpoint or published over MQTT by the surrounding
//! service.

use crate::error::PrintError;
use crate::render::{Directive, Style};

mod escpos;
mod mock;

pub use self::escpos::EscPosTransport;
pub use self::mock::MockTransport;

/// A sink for rendered receipt directives.
///
/// Implementations that cannot honor a style attribute must ignore it rather
/// than fail; degraded plain-text output beats a lost print job.
pub trait Transport {
    /// Resets per-document state. Called once before any text.
    fn begin_document(&mut self) -> Result<(), PrintError>;
    fn write_text(&mut self, text: &str, style: &Style) -> Result<(), PrintError>;
    fn cut(&mut self) -> Result<(), PrintError>;
}

/// Drives a directive stream into a transport.
pub fn send(directives: &[Directive], transport: &mut dyn Transport) -> Result<(), PrintError> {
    transport.begin_document()?;
    for directive in directives {
        match directive {
            Directive::Text { style, text } => transport.write_text(text, style)?,
            Directive::Cut => transport.cut()?,
        }
    }
    Ok(())
}

/// Encodes a directive stream into the byte form the configured mode calls
/// for: ESC/POS for device-backed modes ("usb", "mqtt"), styling-free plain
/// text for "mock" and anything unrecognized.
pub fn encode_job(directives: &[Directive], mode: &str) -> Result<Vec<u8>, PrintError> {
    match mode {
        "usb" | "mqtt" => {
            let mut transport = EscPosTransport::new();
            send(directives, &mut transport)?;
            Ok(transport.into_bytes())
        }
        _ => {
            let mut transport = MockTransport::new();
            send(directives, &mut transport)?;
            Ok(transport.output().to_vec())
        }
    }
}
