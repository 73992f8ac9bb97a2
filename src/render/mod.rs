//! Receipt layout for recipes and to-do lists.
//!
//! One renderer produces an ordered [`Directive`] stream; the human preview
//! is the style-stripped concatenation of the same stream rendered in preview
//! mode. Keeping a single code path for both guarantees the two outputs agree
//! on content and ordering, with three documented divergences:
//!
//! - recipe titles wrap at 21 columns in the device stream (double-width
//!   characters halve the line capacity) vs 42 in the preview;
//! - level-1 headers get a literal dash underline in the preview only, the
//!   device stream centers and bolds instead;
//! - bold items are uppercased in the preview but carry the bold attribute
//!   un-cased on the device.

use crate::model::{Document, ItemKind, RecipeContent};
use crate::wrap::{normalize_fractions, wrap};

/// Printable columns on 80mm paper with font B.
pub const COLUMNS: usize = 42;

/// Double-width characters halve the capacity of a line.
const DEVICE_TITLE_COLUMNS: usize = COLUMNS / 2;

const INGREDIENTS_HEADER: &str = "INGREDIENTS";
const INSTRUCTIONS_HEADER: &str = "INSTRUCTIONS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// Style attributes attached to one text segment. Transports that cannot
/// honor an attribute ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub align: Align,
    pub bold: bool,
    /// Double-height/double-width character mode.
    pub wide: bool,
}

impl Style {
    pub const PLAIN: Style = Style {
        align: Align::Left,
        bold: false,
        wide: false,
    };
    pub const BOLD: Style = Style {
        align: Align::Left,
        bold: true,
        wide: false,
    };
    pub const CENTER_BOLD: Style = Style {
        align: Align::Center,
        bold: true,
        wide: false,
    };
    /// Recipe title: centered, bold, double size.
    pub const TITLE: Style = Style {
        align: Align::Center,
        bold: true,
        wide: true,
    };
}

/// One element of the device output stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Text { style: Style, text: String },
    Cut,
}

/// Strips all style metadata and concatenates the text segments.
pub fn flatten(directives: &[Directive]) -> String {
    let mut out = String::new();
    for directive in directives {
        if let Directive::Text { text, .. } = directive {
            out.push_str(text);
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Preview,
    Device,
}

struct ReceiptBuilder {
    mode: Mode,
    directives: Vec<Directive>,
}

impl ReceiptBuilder {
    fn new(mode: Mode) -> Self {
        ReceiptBuilder {
            mode,
            directives: Vec::new(),
        }
    }

    /// Appends one text segment, newline-terminated.
    fn line(&mut self, style: Style, text: impl Into<String>) {
        let mut text = text.into();
        text.push('\n');
        self.directives.push(Directive::Text { style, text });
    }

    fn blank(&mut self) {
        self.line(Style::PLAIN, "");
    }

    fn separator(&mut self) {
        self.line(Style::PLAIN, "-".repeat(COLUMNS));
    }

    fn cut(&mut self) {
        if self.mode == Mode::Device {
            self.directives.push(Directive::Cut);
        }
    }
}

fn render_recipe(recipe: &RecipeContent, mode: Mode) -> Vec<Directive> {
    let title_columns = match mode {
        Mode::Preview => COLUMNS,
        Mode::Device => DEVICE_TITLE_COLUMNS,
    };

    let mut receipt = ReceiptBuilder::new(mode);
    receipt.line(Style::TITLE, wrap(&recipe.title, title_columns, ""));
    receipt.separator();

    receipt.line(Style::BOLD, INGREDIENTS_HEADER);
    for ingredient in &recipe.ingredients {
        // indented for the checkbox look
        receipt.line(Style::PLAIN, wrap(&format!("[ ] {ingredient}"), COLUMNS, "    "));
    }
    receipt.blank();

    receipt.line(Style::BOLD, INSTRUCTIONS_HEADER);
    receipt.line(Style::PLAIN, wrap(&recipe.instructions, COLUMNS, ""));
    receipt.blank();
    receipt.cut();
    receipt.directives
}

fn render_todo(document: &Document, mode: Mode) -> Vec<Directive> {
    let mut receipt = ReceiptBuilder::new(mode);
    receipt.line(Style::CENTER_BOLD, wrap(&document.title, COLUMNS, ""));
    receipt.separator();

    for item in &document.items {
        match item.kind {
            ItemKind::HeaderL1 => {
                receipt.blank();
                let text = normalize_fractions(&item.text).to_uppercase();
                let underline = "-".repeat(text.chars().count());
                receipt.line(Style::CENTER_BOLD, text);
                if mode == Mode::Preview {
                    receipt.line(Style::PLAIN, underline);
                }
            }
            ItemKind::HeaderL2 => {
                receipt.blank();
                receipt.line(Style::CENTER_BOLD, item.text.to_uppercase());
            }
            ItemKind::HeaderL3 => {
                receipt.blank();
                receipt.line(Style::BOLD, item.text.clone());
            }
            ItemKind::Task => {
                receipt.line(Style::PLAIN, wrap(&format!("[ ] {}", item.text), COLUMNS, ""));
            }
            ItemKind::Bold => {
                let text = wrap(&item.text, COLUMNS, "");
                match mode {
                    Mode::Preview => receipt.line(Style::BOLD, text.to_uppercase()),
                    Mode::Device => receipt.line(Style::BOLD, text),
                }
            }
            ItemKind::Plain => {
                receipt.line(Style::PLAIN, wrap(&item.text, COLUMNS, ""));
            }
        }
    }

    receipt.blank();
    receipt.blank();
    receipt.cut();
    receipt.directives
}

/// Renders a recipe as plain preview text, width-wrapped for 80mm paper.
pub fn preview_recipe(recipe: &RecipeContent) -> String {
    flatten(&render_recipe(recipe, Mode::Preview))
}

/// Renders a recipe as a device directive stream, trailing cut included.
pub fn print_recipe(recipe: &RecipeContent) -> Vec<Directive> {
    render_recipe(recipe, Mode::Device)
}

/// Renders a to-do document as plain preview text.
pub fn preview_todo(document: &Document) -> String {
    flatten(&render_todo(document, Mode::Preview))
}

/// Renders a to-do document as a device directive stream.
pub fn print_todo(document: &Document) -> Vec<Directive> {
    render_todo(document, Mode::Device)
}
