use std::env;
use std::fs;

use log::{error, warn};

use receipt_press::config::Settings;
use receipt_press::joblog::JobLog;
use receipt_press::transport::encode_job;
use receipt_press::{
    fetch_recipe, parse_todo_text, preview_recipe, preview_todo, print_recipe, print_todo,
    Document, PrintError,
};

const USAGE: &str = "Usage: receipt-press [--escpos] <recipe-url> | [--escpos] --todo <file>";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let escpos = if let Some(pos) = args.iter().position(|arg| arg == "--escpos") {
        args.remove(pos);
        true
    } else {
        false
    };

    let settings = Settings::load().unwrap_or_else(|err| {
        warn!("Falling back to default settings: {err}");
        Settings::default()
    });
    if settings.mode == "mqtt" && settings.printers.is_empty() {
        warn!("MQTT mode configured without a printer roster");
    }

    let (title, preview, directives, url) = match args.first().map(String::as_str) {
        Some("--todo") => {
            let path = args.get(1).ok_or(USAGE)?;
            let raw = fs::read_to_string(path)?;
            let items = parse_todo_text(&raw);
            if items.is_empty() {
                return Err(PrintError::EmptyInput("no to-do items provided".to_string()).into());
            }
            let document = Document::new("To Do", items);
            (
                document.title.clone(),
                preview_todo(&document),
                print_todo(&document),
                None,
            )
        }
        Some(url) => {
            let recipe = fetch_recipe(url);
            if recipe.is_extraction_error() {
                error!("Extraction failed: {}", recipe.instructions);
                return Err("Could not extract a recipe from this URL".into());
            }
            (
                recipe.title.clone(),
                preview_recipe(&recipe),
                print_recipe(&recipe),
                recipe.url.clone(),
            )
        }
        None => return Err(USAGE.into()),
    };

    if escpos {
        let bytes = encode_job(&directives, &settings.mode)?;
        println!(
            "{} device bytes encoded for {} transport",
            bytes.len(),
            settings.mode
        );
    } else {
        println!("{preview}");
    }

    if let Some(path) = settings.job_log.as_deref() {
        JobLog::new(path).record(&title, &preview, url.as_deref());
    }

    Ok(())
}
