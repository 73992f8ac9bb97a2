//! JSON-LD recipe extraction.
//!
//! Modern recipe sites embed schema.org data in
//! `<script type="application/ld+json">` blocks, either as a bare Recipe
//! object, an array of typed objects, or nested somewhere under `@graph`.

use crate::extractors::Extractor;
use crate::model::{RecipeContent, UNTITLED_RECIPE};
use html_escape::decode_html_entities;
use log::debug;
use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;

pub struct JsonLdExtractor;

#[derive(Debug, Deserialize)]
struct JsonLdRecipe {
    name: Option<String>,
    #[serde(rename = "recipeIngredient")]
    recipe_ingredient: Option<Ingredients>,
    #[serde(rename = "recipeInstructions")]
    recipe_instructions: Option<Instructions>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Ingredients {
    // some sites ship a single ingredient as a bare string
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct InstructionStepObject {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InstructionStep {
    Text(String),
    Object(InstructionStepObject),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Instructions {
    String(String),
    Steps(Vec<InstructionStep>),
}

fn decode_html_symbols(text: &str) -> String {
    // some sites double-escape entities, so decode twice
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

impl From<JsonLdRecipe> for RecipeContent {
    fn from(recipe: JsonLdRecipe) -> Self {
        RecipeContent {
            title: recipe
                .name
                .as_deref()
                .map(decode_html_symbols)
                .unwrap_or_else(|| UNTITLED_RECIPE.to_string()),
            ingredients: match recipe.recipe_ingredient {
                Some(Ingredients::One(ing)) => vec![decode_html_symbols(&ing)],
                Some(Ingredients::Many(ings)) => {
                    ings.iter().map(|ing| decode_html_symbols(ing)).collect()
                }
                None => Vec::new(),
            },
            instructions: match recipe.recipe_instructions {
                Some(Instructions::String(steps)) => decode_html_symbols(&steps),
                Some(Instructions::Steps(steps)) => steps
                    .iter()
                    .map(|step| match step {
                        InstructionStep::Text(text) => decode_html_symbols(text),
                        InstructionStep::Object(obj) => {
                            decode_html_symbols(obj.text.as_deref().unwrap_or_default())
                        }
                    })
                    .collect::<Vec<String>>()
                    .join("\n"),
                None => String::new(),
            },
            url: None,
        }
    }
}

/// Depth-first search for the first object whose `@type` is or contains
/// "Recipe" (case-sensitive, per element when the type is a list). Descends
/// `@graph` first, then remaining object values, then array elements.
fn find_recipe_value(value: &Value) -> Option<&Value> {
    match value {
        Value::Object(map) => {
            match map.get("@type") {
                Some(Value::String(ty)) if ty.contains("Recipe") => return Some(value),
                Some(Value::Array(types))
                    if types
                        .iter()
                        .any(|ty| ty.as_str().is_some_and(|ty| ty.contains("Recipe"))) =>
                {
                    return Some(value)
                }
                _ => {}
            }
            if let Some(found) = map.get("@graph").and_then(find_recipe_value) {
                return Some(found);
            }
            // serde_json objects iterate in sorted key order, not document
            // order; fine for real pages, which hold one recipe at most
            map.iter()
                .filter(|(key, _)| key.as_str() != "@graph")
                .find_map(|(_, value)| find_recipe_value(value))
        }
        Value::Array(items) => items.iter().find_map(find_recipe_value),
        _ => None,
    }
}

/// Extracts recipe fields from a JSON-LD document.
///
/// Always returns a normally-shaped `RecipeContent`; when the value holds no
/// recipe, or the recipe object will not deserialize, the sentinel error
/// shape comes back instead (see [`RecipeContent::is_extraction_error`]).
pub fn extract_recipe(data: &Value) -> RecipeContent {
    let Some(recipe) = find_recipe_value(data) else {
        return RecipeContent::extraction_error("No recipe found in structured data");
    };
    match serde_json::from_value::<JsonLdRecipe>(recipe.clone()) {
        Ok(recipe) => recipe.into(),
        Err(err) => {
            debug!("Recipe object failed to deserialize: {err}");
            RecipeContent::extraction_error(err.to_string())
        }
    }
}

/// Cleans up the junk real-world sites leave inside ld+json blocks.
fn sanitize_json(json_str: &str) -> String {
    let mut cleaned = json_str.trim().to_string();

    // skip leading garbage before the first brace
    if !cleaned.starts_with('{') && !cleaned.starts_with('[') {
        if let Some(start) = cleaned.find('{') {
            cleaned = cleaned[start..].to_string();
        }
    }

    // trailing commas and stray HTML comments
    cleaned = cleaned.replace(",]", "]").replace(",}", "}");
    cleaned = cleaned.replace("<!--", "").replace("-->", "");

    cleaned
}

fn script_selector() -> Selector {
    Selector::parse("script[type='application/ld+json']").unwrap()
}

impl Extractor for JsonLdExtractor {
    fn can_parse(&self, document: &Html) -> bool {
        let selector = script_selector();
        document.select(&selector).any(|script| {
            serde_json::from_str::<Value>(&sanitize_json(&script.inner_html()))
                .ok()
                .as_ref()
                .and_then(find_recipe_value)
                .is_some()
        })
    }

    fn parse(&self, document: &Html) -> Option<RecipeContent> {
        let selector = script_selector();
        for script in document.select(&selector) {
            let Ok(json_ld) = serde_json::from_str::<Value>(&sanitize_json(&script.inner_html()))
            else {
                continue;
            };
            debug!("Trying JSON-LD block: {:#?}", json_ld);

            let recipe = extract_recipe(&json_ld);
            if !recipe.is_extraction_error() {
                return Some(recipe);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_basic_recipe() {
        let data = json!({
            "@type": "Recipe",
            "name": "Soup",
            "recipeIngredient": "salt",
            "recipeInstructions": [{"text": "Boil"}, {"text": "Serve"}]
        });
        let recipe = extract_recipe(&data);
        assert_eq!(recipe.title, "Soup");
        assert_eq!(recipe.ingredients, vec!["salt"]);
        assert_eq!(recipe.instructions, "Boil\nServe");
    }

    #[test]
    fn finds_recipe_inside_graph() {
        let data = json!({
            "@context": "https://schema.org",
            "@graph": [
                {"@type": "WebSite", "name": "Some Blog"},
                {
                    "@type": "Recipe",
                    "name": "Stew",
                    "recipeIngredient": ["beef", "carrots"],
                    "recipeInstructions": "Simmer for hours."
                }
            ]
        });
        let recipe = extract_recipe(&data);
        assert_eq!(recipe.title, "Stew");
        assert_eq!(recipe.ingredients, vec!["beef", "carrots"]);
    }

    #[test]
    fn matches_type_lists_by_substring() {
        let data = json!([{
            "@type": ["NewsArticle", "Recipe"],
            "name": "Pie",
            "recipeIngredient": ["apples"],
            "recipeInstructions": "Bake."
        }]);
        assert_eq!(extract_recipe(&data).title, "Pie");
    }

    #[test]
    fn graph_recipe_wins_over_sibling_branches() {
        // "0promo" sorts before "@graph", but the graph is still checked first
        let data = json!({
            "0promo": {
                "@type": "Recipe",
                "name": "Sidebar Snack",
                "recipeInstructions": "Nibble."
            },
            "@graph": [
                {"@type": "Recipe", "name": "Main Dish", "recipeInstructions": "Cook."}
            ]
        });
        assert_eq!(extract_recipe(&data).title, "Main Dish");
    }

    #[test]
    fn sibling_values_searched_when_graph_has_no_recipe() {
        let data = json!({
            "@graph": [{"@type": "WebSite", "name": "blog"}],
            "mainEntity": {
                "@type": "Recipe",
                "name": "Fallback Fry",
                "recipeInstructions": "Fry."
            }
        });
        assert_eq!(extract_recipe(&data).title, "Fallback Fry");
    }

    #[test]
    fn descends_nested_object_values() {
        let data = json!({
            "mainEntity": {
                "itemListElement": [
                    {"@type": "Recipe", "name": "Nested", "recipeInstructions": "Do it."}
                ]
            }
        });
        assert_eq!(extract_recipe(&data).title, "Nested");
    }

    #[test]
    fn missing_name_gets_placeholder_title() {
        let data = json!({"@type": "Recipe", "recipeInstructions": "Mix."});
        let recipe = extract_recipe(&data);
        assert_eq!(recipe.title, UNTITLED_RECIPE);
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn no_recipe_yields_sentinel() {
        let data = json!({"@type": "NewsArticle", "headline": "Nothing to cook here"});
        let recipe = extract_recipe(&data);
        assert!(recipe.is_extraction_error());
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn step_objects_without_text_become_empty_lines() {
        let data = json!({
            "@type": "Recipe",
            "name": "Odd",
            "recipeInstructions": [{"text": "Chop"}, {"name": "no text field"}]
        });
        assert_eq!(extract_recipe(&data).instructions, "Chop\n");
    }

    #[test]
    fn decodes_html_entities_in_fields() {
        let data = json!({
            "@type": "Recipe",
            "name": "Mac &amp; Cheese",
            "recipeIngredient": ["elbow macaroni &amp;amp; cheddar"],
            "recipeInstructions": "Combine."
        });
        let recipe = extract_recipe(&data);
        assert_eq!(recipe.title, "Mac & Cheese");
        assert_eq!(recipe.ingredients, vec!["elbow macaroni & cheddar"]);
    }

    #[test]
    fn sanitizes_html_comment_wrappers() {
        let html = Html::parse_document(
            r#"<html><head><script type="application/ld+json">
            <!-- {"@type": "Recipe", "name": "Wrapped", "recipeInstructions": "Go."} -->
            </script></head><body></body></html>"#,
        );
        let extractor = JsonLdExtractor;
        assert!(extractor.can_parse(&html));
        assert_eq!(extractor.parse(&html).unwrap().title, "Wrapped");
    }

    #[test]
    fn can_parse_rejects_pages_without_recipes() {
        let html = Html::parse_document(
            r#"<html><head><script type="application/ld+json">
            {"@type": "WebSite", "name": "blog"}
            </script></head><body></body></html>"#,
        );
        assert!(!JsonLdExtractor.can_parse(&html));
    }
}
