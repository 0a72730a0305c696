//! halal-detector: classify ingredients, dishes, brands and restaurants from the command line
//!
//! Usage:
//!   halal-detector ingredient <name>                    Classify an ingredient
//!   halal-detector food <name>                          Classify a food item
//!   halal-detector detailed <ingredient>                Classify with recommendations
//!   halal-detector e-number <code>                      Classify a food additive
//!   halal-detector label <product> <label text>         Classify a packaged product
//!   halal-detector alternatives <item>                  Suggest halal alternatives
//!   halal-detector certification <brand> <product>      Check product certification
//!   halal-detector certificate <number> <body>          Verify a certificate number
//!   halal-detector restaurant <name> <location>         Check a restaurant
//!   halal-detector batch [--kind <kind>] <item>...      Classify several items
//!   halal-detector recipe <name> <ingredient>...        Analyze a recipe
//!   halal-detector meat <type>                          Check a meat type

use halal_detector::{HalalDetector, ItemKind};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let detector = match HalalDetector::new(None) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let rest = &args[2..];
    let outcome = match args[1].as_str() {
        "ingredient" => match rest {
            [name] => print_json(&detector.detect_ingredient(name).await),
            _ => usage_error("ingredient <name>"),
        },
        "food" => match rest {
            [name] => print_json(&detector.detect_food_item(name).await),
            _ => usage_error("food <name>"),
        },
        "detailed" => match rest {
            [name] => print_json(&detector.analyze_ingredient_detailed(name).await),
            _ => usage_error("detailed <ingredient>"),
        },
        "e-number" => match rest {
            [code] => print_json(&detector.check_e_number(code).await),
            _ => usage_error("e-number <code>"),
        },
        "label" => match rest {
            [product, label_text] => {
                print_json(&detector.analyze_product_label(product, label_text).await)
            }
            _ => usage_error("label <product> <label text>"),
        },
        "alternatives" => match rest {
            [item] => print_json(&detector.halal_alternatives(item).await),
            _ => usage_error("alternatives <item>"),
        },
        "certification" => match rest {
            [brand, product] => print_json(&detector.verify_certification(brand, product).await),
            _ => usage_error("certification <brand> <product>"),
        },
        "certificate" => match rest {
            [number, body] => print_json(&detector.verify_certificate_number(number, body).await),
            _ => usage_error("certificate <number> <body>"),
        },
        "restaurant" => match rest {
            [name, location] => print_json(&detector.check_restaurant(name, location).await),
            _ => usage_error("restaurant <name> <location>"),
        },
        "batch" => match batch_args(rest) {
            Ok((kind, items)) => print_json(&detector.batch_detect(items, kind).await),
            Err(message) => {
                eprintln!("{message}");
                usage_error("batch [--kind ingredient|food] <item>...")
            }
        },
        "recipe" => match rest {
            [name, ingredients @ ..] if !ingredients.is_empty() => {
                print_json(&detector.analyze_recipe(name, ingredients).await)
            }
            _ => usage_error("recipe <name> <ingredient>..."),
        },
        "meat" => match rest {
            [meat] => print_json(&serde_json::json!({
                "meat_type": meat,
                "is_halal": detector.check_meat_type(meat).await,
            })),
            _ => usage_error("meat <type>"),
        },
        "version" | "--version" | "-V" => {
            println!("halal-detector {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Split `[--kind <kind>] <item>...` into the item kind and the items.
fn batch_args(args: &[String]) -> Result<(ItemKind, &[String]), String> {
    let (kind, items) = match args {
        [flag, kind, items @ ..] if flag == "--kind" => (kind.parse::<ItemKind>()?, items),
        [flag] if flag == "--kind" => return Err("Missing value for --kind".to_string()),
        items => (ItemKind::Ingredient, items),
    };
    if items.is_empty() {
        return Err("No items given".to_string());
    }
    Ok((kind, items))
}

fn print_json<T: Serialize>(value: &T) -> halal_detector::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn usage_error(expected: &str) -> halal_detector::Result<()> {
    eprintln!("Usage: halal-detector {expected}");
    std::process::exit(2);
}

fn print_usage() {
    println!(
        r#"halal-detector - halal/haram food classification

USAGE:
    halal-detector <COMMAND> [ARGS]

COMMANDS:
    ingredient <name>                 Classify an ingredient
    food <name>                       Classify a food item
    detailed <ingredient>             Classify with recommendations and alternatives
    e-number <code>                   Classify a food additive (E-number or INS code)
    label <product> <label text>      Classify a packaged product from its label
    alternatives <item>               Suggest halal alternatives
    certification <brand> <product>   Check product certification
    certificate <number> <body>       Verify a certificate number
    restaurant <name> <location>      Check a restaurant
    batch [--kind <kind>] <item>...   Classify several items (kind: ingredient, food)
    recipe <name> <ingredient>...     Analyze a recipe
    meat <type>                       Check a meat type
    version                           Show version information
    help                              Show this help message

ENVIRONMENT:
    HALAL_DETECTOR_BASE_URL           Endpoint URL
    HALAL_HTTP_TIMEOUT_SECS           Request timeout in seconds
    HALAL_MAX_CONCURRENCY             Parallel requests for batch and recipe
    RUST_LOG                          Log filter (default: warn)"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_batch_defaults_to_ingredients() {
        let input = args(&["gelatin", "rice"]);
        let (kind, items) = batch_args(&input).unwrap();
        assert_eq!(kind, ItemKind::Ingredient);
        assert_eq!(items, &input[..]);
    }

    #[test]
    fn test_batch_kind_flag() {
        let input = args(&["--kind", "food", "pizza", "falafel"]);
        let (kind, items) = batch_args(&input).unwrap();
        assert_eq!(kind, ItemKind::FoodItem);
        assert_eq!(items, &input[2..]);
    }

    #[test]
    fn test_batch_rejects_bad_input() {
        assert!(batch_args(&args(&[])).is_err());
        assert!(batch_args(&args(&["--kind"])).is_err());
        assert!(batch_args(&args(&["--kind", "food"])).is_err());
        assert_eq!(
            batch_args(&args(&["--kind", "dish", "pizza"])).unwrap_err(),
            "Unknown item kind: dish"
        );
    }
}
