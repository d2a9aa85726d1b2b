//! WASM bindings for surface-realiser, used by the interactive web demo.

use wasm_bindgen::prelude::*;

use surface_realiser::core::morphology::{
    select_article as article_for, InflectionTarget, Inflector, RuleSet,
};
use surface_realiser::schema::category::Category;
use surface_realiser::schema::element::Element;

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct InflectionInfo {
    category: String,
    target: String,
    form: String,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------
fn parse_category(s: &str) -> Option<Category> {
    match s.to_lowercase().as_str() {
        "noun" => Some(Category::Noun),
        "verb" => Some(Category::Verb),
        "adjective" => Some(Category::Adjective),
        "adverb" => Some(Category::Adverb),
        "determiner" => Some(Category::Determiner),
        "pronoun" => Some(Category::Pronoun),
        _ => None,
    }
}

fn parse_target(s: &str) -> Option<InflectionTarget> {
    let s = s.to_lowercase();
    InflectionTarget::ALL.into_iter().find(|t| t.name() == s)
}

fn build_inflector(rules_ron: Option<&str>) -> Result<Inflector, String> {
    let mut builder = Inflector::builder();
    if let Some(src) = rules_ron {
        let rules = RuleSet::parse_ron(src).map_err(|e| format!("Rule parse error: {e}"))?;
        builder = builder.with_rules(rules);
    }
    builder
        .build()
        .map_err(|e| format!("Inflector build error: {e}"))
}

fn inflect_with(
    inflector: &Inflector,
    base_form: &str,
    category: &str,
    target: &str,
) -> Result<String, String> {
    let category = parse_category(category).ok_or_else(|| format!("Unknown category: {category}"))?;
    let target = parse_target(target).ok_or_else(|| format!("Unknown target: {target}"))?;
    Ok(inflector.inflect(base_form, category, target))
}

fn all_inflections(inflector: &Inflector, base_form: &str) -> Vec<InflectionInfo> {
    inflector
        .rules()
        .tables()
        .into_iter()
        .map(|table| InflectionInfo {
            category: table.category.name().to_string(),
            target: table.target.name().to_string(),
            form: inflector.inflect(base_form, table.category, table.target),
        })
        .collect()
}

fn compare_elements(a_json: &str, b_json: &str) -> Result<bool, String> {
    let a: Element =
        serde_json::from_str(a_json).map_err(|e| format!("Invalid element JSON: {e}"))?;
    let b: Element =
        serde_json::from_str(b_json).map_err(|e| format!("Invalid element JSON: {e}"))?;
    Ok(a.equals_element(&b))
}

// ---------------------------------------------------------------------------
// RealiserDemo: the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct RealiserDemo {
    inflector: Inflector,
}

#[wasm_bindgen]
impl RealiserDemo {
    /// Create a demo instance over the built-in English tables, optionally
    /// overridden by a RON rule set.
    #[wasm_bindgen(constructor)]
    pub fn new(rules_ron: Option<String>) -> Result<RealiserDemo, JsError> {
        let inflector = build_inflector(rules_ron.as_deref()).map_err(|e| JsError::new(&e))?;
        Ok(RealiserDemo { inflector })
    }

    /// Inflect a base form, e.g. `inflect("carry", "verb", "past_tense")`.
    pub fn inflect(&self, base_form: &str, category: &str, target: &str) -> Result<String, JsError> {
        inflect_with(&self.inflector, base_form, category, target).map_err(|e| JsError::new(&e))
    }

    /// Every registered inflection of a base form as a JSON array of
    /// `{category, target, form}` objects.
    pub fn inflect_all(&self, base_form: &str) -> Result<String, JsError> {
        serde_json::to_string(&all_inflections(&self.inflector, base_form))
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// "a" or "an" for the following word.
    pub fn select_article(word: &str) -> String {
        article_for(word).to_string()
    }

    /// Compare two JSON-encoded elements.
    pub fn elements_equal(a_json: &str, b_json: &str) -> Result<bool, JsError> {
        compare_elements(a_json, b_json).map_err(|e| JsError::new(&e))
    }

    /// Inflection target names, as a JSON array.
    pub fn targets() -> String {
        let names: Vec<&str> = InflectionTarget::ALL.iter().map(|t| t.name()).collect();
        serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
    }
}
