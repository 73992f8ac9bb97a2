//! Receipt-style rendering and printing of recipes and to-do lists.
//!
//! The core takes loosely structured input (markdown-like to-do text, scraped
//! recipe fields) and deterministically produces fixed-width output for
//! 80mm thermal printers: a plain preview string and a style-tagged directive
//! stream that transports turn into device bytes. See [`render`] for the
//! layout rules and [`transport`] for the device seam.

pub mod config;
pub mod error;
pub mod extractors;
pub mod joblog;
pub mod markdown;
pub mod model;
pub mod render;
pub mod transport;
pub mod wrap;

use log::{debug, warn};
use scraper::{Html, Selector};

use crate::extractors::{Extractor, JsonLdExtractor};

pub use crate::error::PrintError;
pub use crate::extractors::extract_recipe;
pub use crate::markdown::parse_todo_text;
pub use crate::model::{Document, Item, ItemKind, RecipeContent};
pub use crate::render::{
    preview_recipe, preview_todo, print_recipe, print_todo, Align, Directive, Style,
};

/// Fallback title for manually pasted recipes.
const MANUAL_RECIPE_TITLE: &str = "Quick Recipe";

/// Fetches a page and extracts its recipe.
///
/// Any failure - network, HTTP status, unusable markup - folds into the
/// sentinel error `RecipeContent` rather than an `Err`, so callers have a
/// single shape to render or reject.
pub fn fetch_recipe(url: &str) -> RecipeContent {
    let document = match fetch_document(url) {
        Ok(document) => document,
        Err(err) => {
            warn!("Fetch failed for {url}: {err}");
            return RecipeContent::extraction_error(err.to_string());
        }
    };

    let extractor = JsonLdExtractor;
    if extractor.can_parse(&document) {
        if let Some(mut recipe) = extractor.parse(&document) {
            debug!("Extracted {:?} from {url}", recipe.title);
            recipe.url = Some(url.to_string());
            return recipe;
        }
    }

    fallback_from_meta(&document, url)
}

fn fetch_document(url: &str) -> Result<Html, PrintError> {
    let body = reqwest::blocking::Client::builder()
        .user_agent("Mozilla/5.0")
        .build()?
        .get(url)
        .send()?
        .error_for_status()?
        .text()?;
    Ok(Html::parse_document(&body))
}

/// Naive meta-tag extraction for pages without structured data. We can at
/// least recover a title; the body text points the user at manual entry.
fn fallback_from_meta(document: &Html, url: &str) -> RecipeContent {
    let og_title = Selector::parse("meta[property='og:title']").unwrap();
    let page_title = Selector::parse("title").unwrap();

    let title = document
        .select(&og_title)
        .next()
        .and_then(|el| el.value().attr("content").map(str::to_string))
        .or_else(|| {
            document
                .select(&page_title)
                .next()
                .map(|el| el.text().collect::<String>())
        })
        .unwrap_or_else(|| url.to_string());

    RecipeContent {
        title: title.trim().to_string(),
        ingredients: vec!["(Could not auto-extract ingredients)".to_string()],
        instructions: "(Could not auto-extract instructions. Paste the recipe text instead.)"
            .to_string(),
        url: Some(url.to_string()),
    }
}

/// Builds a recipe from manually pasted text. Separating ingredients from
/// instructions without site markup is guesswork, so the whole blob becomes
/// instructions.
pub fn manual_recipe(title: &str, text: &str) -> RecipeContent {
    let title = title.trim();
    RecipeContent {
        title: if title.is_empty() {
            MANUAL_RECIPE_TITLE.to_string()
        } else {
            title.to_string()
        },
        ingredients: Vec::new(),
        instructions: text.to_string(),
        url: None,
    }
}
