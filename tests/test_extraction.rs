use receipt_press::{extract_recipe, fetch_recipe, manual_recipe};
use serde_json::json;

fn recipe_page(json_ld: &str) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>Recipe Page</title>
            <script type="application/ld+json">
                {json_ld}
            </script>
        </head>
        <body>
            <h1>Recipe</h1>
        </body>
        </html>
        "#
    )
}

#[test]
fn fetches_and_extracts_a_recipe() {
    let mut server = mockito::Server::new();
    let json_ld = r#"
    {
        "@context": "https://schema.org",
        "@type": "Recipe",
        "name": "Weeknight Chili",
        "recipeIngredient": ["beans", "tomatoes"],
        "recipeInstructions": [
            {"@type": "HowToStep", "text": "Brown the onion"},
            {"@type": "HowToStep", "text": "Add everything else"}
        ]
    }
    "#;
    let _m = server
        .mock("GET", "/recipe")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(recipe_page(json_ld))
        .create();

    let url = format!("{}/recipe", server.url());
    let recipe = fetch_recipe(&url);

    assert!(!recipe.is_extraction_error());
    assert_eq!(recipe.title, "Weeknight Chili");
    assert_eq!(recipe.ingredients, vec!["beans", "tomatoes"]);
    assert_eq!(recipe.instructions, "Brown the onion\nAdd everything else");
    assert_eq!(recipe.url.as_deref(), Some(url.as_str()));
}

#[test]
fn finds_recipe_nested_in_graph() {
    let mut server = mockito::Server::new();
    let json_ld = r#"
    {
        "@context": "https://schema.org",
        "@graph": [
            {"@type": "Organization", "name": "The Blog"},
            {
                "@type": "Recipe",
                "name": "Graph Granola",
                "recipeIngredient": ["oats"],
                "recipeInstructions": "Toast the oats."
            }
        ]
    }
    "#;
    let _m = server
        .mock("GET", "/graph")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(recipe_page(json_ld))
        .create();

    let recipe = fetch_recipe(&format!("{}/graph", server.url()));
    assert_eq!(recipe.title, "Graph Granola");
}

#[test]
fn falls_back_to_meta_tags_without_structured_data() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/plain")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(
            r#"<html><head>
            <title>fallback</title>
            <meta property="og:title" content="Grandma's Stew">
            </head><body><p>no schema here</p></body></html>"#,
        )
        .create();

    let recipe = fetch_recipe(&format!("{}/plain", server.url()));
    assert!(!recipe.is_extraction_error());
    assert_eq!(recipe.title, "Grandma's Stew");
    assert_eq!(recipe.ingredients, vec!["(Could not auto-extract ingredients)"]);
    assert!(recipe.instructions.contains("Paste the recipe text"));
}

#[test]
fn http_error_yields_sentinel() {
    let mut server = mockito::Server::new();
    let _m = server.mock("GET", "/missing").with_status(404).create();

    let recipe = fetch_recipe(&format!("{}/missing", server.url()));
    assert!(recipe.is_extraction_error());
    assert!(recipe.ingredients.is_empty());
    assert!(!recipe.instructions.is_empty());
}

#[test]
fn unreachable_host_yields_sentinel() {
    let recipe = fetch_recipe("http://127.0.0.1:1/nothing-listens-here");
    assert!(recipe.is_extraction_error());
}

#[test]
fn structured_value_extraction_scenario() {
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
fn manual_entry_becomes_instructions_blob() {
    let recipe = manual_recipe("", "Some pasted recipe text.\nStep two.");
    assert_eq!(recipe.title, "Quick Recipe");
    assert!(recipe.ingredients.is_empty());
    assert_eq!(recipe.instructions, "Some pasted recipe text.\nStep two.");
}
