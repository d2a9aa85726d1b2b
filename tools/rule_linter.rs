/// Rule Linter: validates inflection rule tables.
///
/// Usage: rule_linter <rules_dir_or_file> [--with-defaults]
///
/// Reports rules that can never fire because an earlier rule in the same
/// table matches every word they would match, tables with no rules, and
/// tables that replace a built-in table.
use std::path::Path;
use std::process;

use surface_realiser::core::morphology::english;
use surface_realiser::core::morphology::{RuleSet, RuleTable};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: rule_linter <rules_dir_or_file> [--with-defaults]");
        process::exit(0);
    }

    let rules_path = Path::new(&args[1]);
    let mut with_defaults = false;
    for arg in &args[2..] {
        match arg.as_str() {
            "--with-defaults" => with_defaults = true,
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
    }

    let mut rules = RuleSet::new();
    let mut load_errors = Vec::new();
    if rules_path.is_file() {
        match RuleSet::load_from_ron(rules_path) {
            Ok(set) => rules.merge(set),
            Err(e) => {
                eprintln!("ERROR: Failed to load rule file: {}", e);
                process::exit(1);
            }
        }
    } else if rules_path.is_dir() {
        load_rules_recursive(rules_path, &mut rules, &mut load_errors);
    } else {
        eprintln!("ERROR: Path '{}' does not exist", rules_path.display());
        process::exit(1);
    }

    println!("Loaded {} rule tables", rules.len());

    let defaults = english::rule_set();
    let (mut errors, warnings) = lint_rules(&rules, with_defaults.then_some(&defaults));
    errors.extend(load_errors);

    println!("\n=== Rule Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn load_rules_recursive(dir: &Path, rules: &mut RuleSet, errors: &mut Vec<String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    let mut paths: Vec<_> = entries.flatten().map(|entry| entry.path()).collect();
    paths.sort();
    for path in paths {
        if path.is_dir() {
            load_rules_recursive(&path, rules, errors);
        } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            match RuleSet::load_from_ron(&path) {
                Ok(set) => {
                    println!("  Loaded: {}", path.display());
                    rules.merge(set);
                }
                Err(e) => errors.push(format!("failed to load {}: {}", path.display(), e)),
            }
        }
    }
}

fn lint_rules(rules: &RuleSet, defaults: Option<&RuleSet>) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for table in rules.tables() {
        lint_table(table, &mut errors, &mut warnings);

        if let Some(defaults) = defaults {
            if defaults.get(table.category, table.target).is_some() {
                warnings.push(format!("Table {} replaces the built-in table", table.key()));
            }
        }
    }

    (errors, warnings)
}

fn lint_table(table: &RuleTable, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    if table.rules.is_empty() && table.exceptions.is_empty() {
        warnings.push(format!(
            "Table {} has no rules; every word takes the default transform",
            table.key()
        ));
    }

    for (shadowed, by) in table.shadowed_rules() {
        errors.push(format!(
            "Rule '{}' in table {} can never fire: rule '{}' comes first and matches every word it would",
            shadowed.name,
            table.key(),
            by.name
        ));
    }

    let mut seen = std::collections::HashSet::new();
    for rule in &table.rules {
        if !seen.insert(rule.name.as_str()) {
            warnings.push(format!(
                "Table {} has more than one rule named '{}'",
                table.key(),
                rule.name
            ));
        }
    }

    for (word, form) in &table.exceptions {
        let (source, regular) = match table.matching_rule(word) {
            Some(rule) => (format!("rule '{}'", rule.name), rule.then.apply(word)),
            None => ("the default transform".to_string(), table.default.apply(word)),
        };
        if &regular == form {
            warnings.push(format!(
                "Exception '{}' in table {} is redundant: {} already gives '{}'",
                word,
                table.key(),
                source,
                regular
            ));
        }
    }
}
