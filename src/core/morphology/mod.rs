//! Table-driven English inflection.
//!
//! An [`Inflector`] holds one ordered rule table per (category, target)
//! pair. Inflection only touches the head word of a multi-word base form:
//! the first word for verbs ("carry away" → "carried away"), the last word
//! for everything else ("ice cream" → "ice creams"). A pair with no table
//! returns the base form unchanged.

pub mod english;
pub mod rule;
pub mod table;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

use crate::schema::category::Category;
use crate::schema::element::WordElement;
use crate::schema::feature::{names, FeatureMap, FeatureValue, Form, NumberAgreement, Person, Tense};

pub use table::{RuleError, RuleSet, RuleTable, TableKey};

/// The surface form requested for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InflectionTarget {
    Plural,
    Progressive,
    PastTense,
    PastParticiple,
    ThirdPersonSingular,
    Comparative,
    Superlative,
}

impl InflectionTarget {
    pub const ALL: [InflectionTarget; 7] = [
        Self::Plural,
        Self::Progressive,
        Self::PastTense,
        Self::PastParticiple,
        Self::ThirdPersonSingular,
        Self::Comparative,
        Self::Superlative,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Plural => "plural",
            Self::Progressive => "progressive",
            Self::PastTense => "past_tense",
            Self::PastParticiple => "past_participle",
            Self::ThirdPersonSingular => "third_person_singular",
            Self::Comparative => "comparative",
            Self::Superlative => "superlative",
        }
    }

    /// Work out which form a word's features ask for. Returns `None` when
    /// the base form is already the requested form.
    pub fn from_features(category: Category, features: &FeatureMap) -> Option<Self> {
        let text = |name: &str| text_feature(features, name);
        let flag = |name: &str| {
            features
                .get(name)
                .and_then(FeatureValue::as_bool)
                .unwrap_or(false)
        };

        match category {
            Category::Noun => {
                (text(names::NUMBER) == Some(NumberAgreement::Plural.as_str())).then_some(Self::Plural)
            }
            Category::Verb => {
                let form = text(names::FORM);
                if form == Some(Form::PresentParticiple.as_str()) || form == Some(Form::Gerund.as_str()) {
                    return Some(Self::Progressive);
                }
                if form == Some(Form::PastParticiple.as_str()) {
                    return Some(Self::PastParticiple);
                }
                match text(names::TENSE) {
                    Some(t) if t == Tense::Past.as_str() => Some(Self::PastTense),
                    Some(t) if t == Tense::Present.as_str() => {
                        let third = text(names::PERSON)
                            .map_or(true, |p| p == Person::Third.as_str());
                        let singular = text(names::NUMBER)
                            .map_or(true, |n| n == NumberAgreement::Singular.as_str());
                        (third && singular).then_some(Self::ThirdPersonSingular)
                    }
                    _ => None,
                }
            }
            Category::Adjective => {
                if flag(names::IS_SUPERLATIVE) {
                    Some(Self::Superlative)
                } else if flag(names::IS_COMPARATIVE) {
                    Some(Self::Comparative)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

fn text_feature<'a>(features: &'a FeatureMap, name: &str) -> Option<&'a str> {
    features.get(name).and_then(FeatureValue::as_text)
}

impl fmt::Display for InflectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Applies rule tables to base forms. Built via `Inflector::builder()`,
/// or use [`Inflector::english`] for the built-in tables.
#[derive(Debug, Clone)]
pub struct Inflector {
    rules: RuleSet,
}

/// Builder for constructing an `Inflector`.
pub struct InflectorBuilder {
    english_defaults: bool,
    rules_dir: Option<String>,
    rule_files: Vec<String>,
    /// Directly provided rules (for testing without files).
    rules: Option<RuleSet>,
}

impl Inflector {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn builder() -> InflectorBuilder {
        InflectorBuilder {
            english_defaults: true,
            rules_dir: None,
            rule_files: Vec::new(),
            rules: None,
        }
    }

    /// Shared inflector over the built-in English tables.
    pub fn english() -> &'static Inflector {
        static ENGLISH: OnceLock<Inflector> = OnceLock::new();
        ENGLISH.get_or_init(|| Inflector::new(english::rule_set()))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Inflect `base_form` into the `target` form for `category`.
    pub fn inflect(&self, base_form: &str, category: Category, target: InflectionTarget) -> String {
        let Some(table) = self.rules.get(category, target) else {
            debug!(base_form, %category, %target, "no rule table, returning base form");
            return base_form.to_string();
        };
        let (before, head, after) = split_head(base_form, head_position(category));
        if head.is_empty() {
            return base_form.to_string();
        }
        format!("{}{}{}", before, table.apply(head), after)
    }

    /// Inflect a word according to its own features.
    pub fn realise_word(&self, word: &WordElement) -> String {
        match InflectionTarget::from_features(word.category, &word.features) {
            Some(target) => self.inflect(&word.base_form, word.category, target),
            None => word.base_form.clone(),
        }
    }
}

impl InflectorBuilder {
    /// Start from the built-in English tables (on by default).
    pub fn english_defaults(mut self, enabled: bool) -> Self {
        self.english_defaults = enabled;
        self
    }

    /// Load every `.ron` file in a directory, in file name order.
    pub fn rules_dir(mut self, path: &str) -> Self {
        self.rules_dir = Some(path.to_string());
        self
    }

    /// Load a single RON rule file. Files are applied in the order added.
    pub fn rules_file(mut self, path: &str) -> Self {
        self.rule_files.push(path.to_string());
        self
    }

    /// Provide rules directly (for testing without files).
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Later sources override earlier ones table by table: built-in
    /// defaults, then directly provided rules, then the rules directory,
    /// then individual rule files.
    pub fn build(self) -> Result<Inflector, RuleError> {
        let mut rules = if self.english_defaults {
            english::rule_set()
        } else {
            RuleSet::new()
        };

        if let Some(direct) = self.rules {
            rules.merge(direct);
        }

        if let Some(ref dir) = self.rules_dir {
            if Path::new(dir).exists() {
                for path in ron_files_in_dir(dir)? {
                    rules.merge(RuleSet::load_from_ron(&path)?);
                }
            } else {
                debug!(dir = %dir, "rules directory not found, skipping");
            }
        }

        for file in &self.rule_files {
            rules.merge(RuleSet::load_from_ron(Path::new(file))?);
        }

        Ok(Inflector { rules })
    }
}

/// All .ron files in a directory, sorted by path.
fn ron_files_in_dir(dir: &str) -> Result<Vec<PathBuf>, RuleError> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeadPosition {
    First,
    Last,
}

fn head_position(category: Category) -> HeadPosition {
    match category {
        Category::Verb | Category::Modal | Category::Auxiliary => HeadPosition::First,
        _ => HeadPosition::Last,
    }
}

/// Split a base form into (text before head, head word, text after head).
fn split_head(base_form: &str, position: HeadPosition) -> (&str, &str, &str) {
    match position {
        HeadPosition::First => {
            let end = base_form
                .find(char::is_whitespace)
                .unwrap_or(base_form.len());
            ("", &base_form[..end], &base_form[end..])
        }
        HeadPosition::Last => {
            let start = base_form
                .char_indices()
                .rev()
                .find(|(_, c)| c.is_whitespace())
                .map(|(i, c)| i + c.len_utf8())
                .unwrap_or(0);
            (&base_form[..start], &base_form[start..], "")
        }
    }
}

/// Inflect with the built-in English tables.
pub fn inflect(base_form: &str, category: Category, target: InflectionTarget) -> String {
    Inflector::english().inflect(base_form, category, target)
}

/// Choose "a" or "an" for the word that follows. Purely orthographic:
/// "an" before a written vowel, so "university" takes "an" and "hour"
/// takes "a".
pub fn select_article(following_word: &str) -> &'static str {
    match following_word.trim_start().chars().next() {
        Some(c) if "aeiou".contains(c.to_ascii_lowercase()) => "an",
        _ => "a",
    }
}

/// Prefix a phrase with its indefinite article.
pub fn with_indefinite_article(phrase: &str) -> String {
    format!("{} {}", select_article(phrase), phrase)
}

/// Replace "um" and "on" word endings with "a" throughout a phrase
/// ("datum point" → "data point"). Only letters before the ending count
/// as part of the word, and a bare "on" or "um" is left alone.
pub fn latinise_neuter_endings(phrase: &str) -> String {
    let mut out = String::with_capacity(phrase.len());
    let mut word_start = None;

    for (i, c) in phrase.char_indices() {
        if c.is_alphabetic() {
            word_start.get_or_insert(i);
        } else {
            if let Some(start) = word_start.take() {
                push_latinised(&mut out, &phrase[start..i]);
            }
            out.push(c);
        }
    }
    if let Some(start) = word_start {
        push_latinised(&mut out, &phrase[start..]);
    }
    out
}

fn push_latinised(out: &mut String, word: &str) {
    let lower = word.to_ascii_lowercase();
    if word.chars().count() > 2 && (lower.ends_with("um") || lower.ends_with("on")) {
        // Both endings are ASCII, so the cut lands on a char boundary.
        out.push_str(&word[..word.len() - 2]);
        out.push('a');
    } else {
        out.push_str(word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_head_first_and_last() {
        assert_eq!(split_head("carry away", HeadPosition::First), ("", "carry", " away"));
        assert_eq!(split_head("ice cream", HeadPosition::Last), ("ice ", "cream", ""));
        assert_eq!(split_head("dog", HeadPosition::Last), ("", "dog", ""));
        assert_eq!(split_head("dog", HeadPosition::First), ("", "dog", ""));
        assert_eq!(split_head("dog ", HeadPosition::Last), ("dog ", "", ""));
    }

    #[test]
    fn multi_word_forms_inflect_head_only() {
        assert_eq!(inflect("carry away", Category::Verb, InflectionTarget::PastTense), "carried away");
        assert_eq!(inflect("give up", Category::Verb, InflectionTarget::Progressive), "giving up");
        assert_eq!(inflect("ice cream", Category::Noun, InflectionTarget::Plural), "ice creams");
        assert_eq!(inflect("pressure index", Category::Noun, InflectionTarget::Plural), "pressure indices");
    }

    #[test]
    fn unregistered_pair_is_identity() {
        assert_eq!(inflect("quickly", Category::Adverb, InflectionTarget::Plural), "quickly");
        assert_eq!(inflect("dog", Category::Noun, InflectionTarget::Progressive), "dog");
    }

    #[test]
    fn empty_and_trailing_space_inputs() {
        assert_eq!(inflect("", Category::Noun, InflectionTarget::Plural), "");
        assert_eq!(inflect("dog ", Category::Noun, InflectionTarget::Plural), "dog ");
    }

    #[test]
    fn select_article_orthographic() {
        assert_eq!(select_article("enormous"), "an");
        assert_eq!(select_article("Apple"), "an");
        assert_eq!(select_article("banana"), "a");
        assert_eq!(select_article("university"), "an");
        assert_eq!(select_article("hour"), "a");
        assert_eq!(select_article(""), "a");
        assert_eq!(with_indefinite_article("old map"), "an old map");
    }

    #[test]
    fn latinise_neuter() {
        assert_eq!(latinise_neuter_endings("datum point"), "data point");
        assert_eq!(latinise_neuter_endings("criterion, stratum."), "criteria, strata.");
        assert_eq!(latinise_neuter_endings("sit on the rostrum"), "sit on the rostra");
        assert_eq!(latinise_neuter_endings("um"), "um");
        assert_eq!(latinise_neuter_endings(""), "");
    }

    #[test]
    fn from_features_noun() {
        let plural = WordElement::new("dog", Category::Noun)
            .with_feature(names::NUMBER, NumberAgreement::Plural);
        assert_eq!(
            InflectionTarget::from_features(Category::Noun, &plural.features),
            Some(InflectionTarget::Plural)
        );
        assert_eq!(
            InflectionTarget::from_features(Category::Noun, &FeatureMap::default()),
            None
        );
    }

    #[test]
    fn from_features_verb() {
        let target = |word: WordElement| InflectionTarget::from_features(Category::Verb, &word.features);
        let verb = || WordElement::new("walk", Category::Verb);

        assert_eq!(target(verb().with_feature(names::FORM, Form::Gerund)), Some(InflectionTarget::Progressive));
        assert_eq!(
            target(verb().with_feature(names::FORM, Form::PastParticiple).with_feature(names::TENSE, Tense::Past)),
            Some(InflectionTarget::PastParticiple)
        );
        assert_eq!(target(verb().with_feature(names::TENSE, Tense::Past)), Some(InflectionTarget::PastTense));
        assert_eq!(target(verb().with_feature(names::TENSE, Tense::Present)), Some(InflectionTarget::ThirdPersonSingular));
        assert_eq!(
            target(verb().with_feature(names::TENSE, Tense::Present).with_feature(names::PERSON, Person::First)),
            None
        );
        assert_eq!(
            target(verb().with_feature(names::TENSE, Tense::Present).with_feature(names::NUMBER, NumberAgreement::Plural)),
            None
        );
        assert_eq!(target(verb()), None);
    }

    #[test]
    fn from_features_adjective() {
        let adj = WordElement::new("tall", Category::Adjective)
            .with_feature(names::IS_COMPARATIVE, true)
            .with_feature(names::IS_SUPERLATIVE, true);
        assert_eq!(
            InflectionTarget::from_features(Category::Adjective, &adj.features),
            Some(InflectionTarget::Superlative)
        );
    }

    #[test]
    fn realise_word_uses_features() {
        let inflector = Inflector::english();
        let word = WordElement::new("lady", Category::Noun)
            .with_feature(names::NUMBER, NumberAgreement::Plural);
        assert_eq!(inflector.realise_word(&word), "ladies");
        assert_eq!(inflector.realise_word(&WordElement::new("lady", Category::Noun)), "lady");
    }

    #[test]
    fn builder_without_defaults_is_identity() {
        let inflector = Inflector::builder().english_defaults(false).build().unwrap();
        assert!(inflector.rules().is_empty());
        assert_eq!(inflector.inflect("dog", Category::Noun, InflectionTarget::Plural), "dog");
    }

    #[test]
    fn builder_direct_rules_override_defaults() {
        let mut rules = RuleSet::new();
        rules.insert(RuleTable::new(
            Category::Noun,
            InflectionTarget::Plural,
            rule::Transform::Append("z".to_string()),
        ));
        let inflector = Inflector::builder().with_rules(rules).build().unwrap();
        assert_eq!(inflector.inflect("cash", Category::Noun, InflectionTarget::Plural), "cashz");
        assert_eq!(inflector.inflect("come", Category::Verb, InflectionTarget::Progressive), "coming");
    }

    #[test]
    fn builder_missing_dir_is_skipped_missing_file_is_error() {
        assert!(Inflector::builder().rules_dir("no/such/dir").build().is_ok());
        assert!(matches!(
            Inflector::builder().rules_file("no/such/file.ron").build(),
            Err(RuleError::Io(_))
        ));
    }

    #[test]
    fn target_names() {
        assert_eq!(InflectionTarget::PastTense.to_string(), "past_tense");
        assert_eq!(InflectionTarget::ALL.len(), 7);
    }
}
