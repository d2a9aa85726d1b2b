/// Inflect Preview: prints every registered inflection of the given words.
///
/// Usage: inflect_preview [--rules <path>] [--category <noun|verb|adjective|adverb>] <word>...
///
/// Without --category, each word is shown under every category that has
/// at least one rule table. Multi-word base forms can be quoted.
use std::process;

use surface_realiser::core::morphology::{
    latinise_neuter_endings, with_indefinite_article, InflectionTarget, Inflector,
};
use surface_realiser::schema::category::Category;
use tracing_subscriber::EnvFilter;

const CATEGORIES: [Category; 4] = [
    Category::Noun,
    Category::Verb,
    Category::Adjective,
    Category::Adverb,
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut rules_path = None;
    let mut category = None;
    let mut words = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rules" if i + 1 < args.len() => {
                i += 1;
                rules_path = Some(args[i].clone());
            }
            "--category" if i + 1 < args.len() => {
                i += 1;
                category = Some(parse_category(&args[i]).unwrap_or_else(|| {
                    eprintln!("Unknown category: {}", args[i]);
                    process::exit(1);
                }));
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
            word => words.push(word.to_string()),
        }
        i += 1;
    }

    let mut builder = Inflector::builder();
    if let Some(ref path) = rules_path {
        builder = builder.rules_file(path);
    }
    let inflector = builder.build().unwrap_or_else(|e| {
        eprintln!("Error loading rules: {}", e);
        process::exit(1);
    });

    let categories: Vec<Category> = match category {
        Some(c) => vec![c],
        None => CATEGORIES.to_vec(),
    };

    for word in &words {
        println!("{}", word);
        println!("  {:<24} {}", "article", with_indefinite_article(word));
        let latinised = latinise_neuter_endings(word);
        if &latinised != word {
            println!("  {:<24} {}", "latin neuter", latinised);
        }
        for &category in &categories {
            for target in InflectionTarget::ALL {
                if inflector.rules().get(category, target).is_none() {
                    continue;
                }
                let label = format!("{}/{}", category, target);
                println!(
                    "  {:<24} {}",
                    label,
                    inflector.inflect(word, category, target)
                );
            }
        }
        println!();
    }
}

fn parse_category(s: &str) -> Option<Category> {
    match s.to_lowercase().as_str() {
        "noun" => Some(Category::Noun),
        "verb" => Some(Category::Verb),
        "adjective" | "adj" => Some(Category::Adjective),
        "adverb" | "adv" => Some(Category::Adverb),
        _ => None,
    }
}

fn print_usage() {
    println!("Usage: inflect_preview [--rules <path>] [--category <noun|verb|adjective|adverb>] <word>...");
}
