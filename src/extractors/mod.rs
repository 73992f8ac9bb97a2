use crate::model::RecipeContent;
use scraper::Html;

mod json_ld;

pub use self::json_ld::{extract_recipe, JsonLdExtractor};

/// Pulls recipe fields out of a scraped page.
///
/// `parse` returns `None` when the document holds nothing recognizable; that
/// is not an error, the caller falls back to meta-tag extraction.
pub trait Extractor {
    fn can_parse(&self, document: &Html) -> bool;
    fn parse(&self, document: &Html) -> Option<RecipeContent>;
}
