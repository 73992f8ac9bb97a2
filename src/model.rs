use serde::Serialize;

/// Placeholder title when structured recipe data carries no name.
pub const UNTITLED_RECIPE: &str = "Untitled Recipe";

/// Sentinel title marking a failed extraction. Callers compare against this
/// instead of matching on an error type; the failure detail travels in
/// `instructions`.
pub const EXTRACTION_ERROR_TITLE: &str = "Error Parsing URL";

/// Classification of one line of to-do input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    HeaderL1,
    HeaderL2,
    HeaderL3,
    Task,
    Bold,
    Plain,
}

/// One classified line. `text` is already normalized: the markdown control
/// tokens that produced `kind` are stripped, as are paired inline bold markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub kind: ItemKind,
    pub text: String,
}

impl Item {
    pub fn new(kind: ItemKind, text: impl Into<String>) -> Self {
        Item {
            kind,
            text: text.into(),
        }
    }
}

/// An ordered to-do document. Insertion order is print order.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub title: String,
    pub items: Vec<Item>,
}

impl Document {
    pub fn new(title: impl Into<String>, items: Vec<Item>) -> Self {
        Document {
            title: title.into(),
            items,
        }
    }
}

/// Recipe fields in the shape the renderer consumes. Newlines inside
/// `instructions` are meaningful step/paragraph breaks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecipeContent {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub url: Option<String>,
}

impl RecipeContent {
    /// Builds the sentinel value used for any extraction failure.
    pub fn extraction_error(detail: impl Into<String>) -> Self {
        RecipeContent {
            title: EXTRACTION_ERROR_TITLE.to_string(),
            ingredients: Vec::new(),
            instructions: detail.into(),
            url: None,
        }
    }

    pub fn is_extraction_error(&self) -> bool {
        self.title == EXTRACTION_ERROR_TITLE
    }
}
