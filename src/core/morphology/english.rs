//! Built-in English rule tables.

use super::rule::{Condition, Rule, Transform};
use super::table::{RuleSet, RuleTable};
use super::InflectionTarget;
use crate::schema::category::Category;

const VOWELS: &str = "aeiou";
const SIBILANTS: [&str; 5] = ["s", "z", "x", "ch", "sh"];

fn ends_with(suffix: &str) -> Condition {
    Condition::EndsWith(suffix.to_string())
}

fn ends_with_any(suffixes: &[&str]) -> Condition {
    Condition::EndsWithAny(suffixes.iter().map(|s| s.to_string()).collect())
}

fn after(suffix: &str, not_after: &str) -> Condition {
    Condition::After {
        suffix: suffix.to_string(),
        not_after: not_after.to_string(),
    }
}

fn append(text: &str) -> Transform {
    Transform::Append(text.to_string())
}

fn replace(strip: usize, text: &str) -> Transform {
    Transform::Replace {
        strip,
        append: text.to_string(),
    }
}

/// Noun plurals. Greco-Latin endings come before the generic sibilant
/// rule so that "index" and "documentus" take their classical plurals,
/// and the sibilant rule comes before the bare "x" rule so that "wax"
/// becomes "waxes". The bare "x" rule is therefore unreachable here; it
/// only fires in tables that drop the sibilant rule.
pub fn noun_plural() -> RuleTable {
    RuleTable::new(Category::Noun, InflectionTarget::Plural, append("s"))
        .with_rule(Rule::new("consonant_y", after("y", VOWELS), replace(1, "ies")))
        .with_rule(Rule::new("ex", ends_with("ex"), replace(2, "ices")))
        .with_rule(Rule::new("us", ends_with("us"), replace(2, "i")))
        .with_rule(Rule::new("sis", ends_with("sis"), replace(3, "ses")))
        .with_rule(Rule::new("is", ends_with("is"), replace(2, "ides")))
        .with_rule(Rule::new("men", ends_with("men"), replace(3, "mina")))
        .with_rule(Rule::new("um_on", ends_with_any(&["um", "on"]), replace(2, "a")))
        .with_rule(Rule::new("sibilant", ends_with_any(&SIBILANTS), append("es")))
        .with_rule(Rule::new("x", ends_with("x"), replace(1, "ces")))
}

/// Present participle. A final "e" after a consonant other than y is
/// dropped, so "come" gives "coming" while "cooee", "see" and "sundae"
/// keep their "e". A "u" counts here so that "argue" gives "arguing".
pub fn verb_progressive() -> RuleTable {
    RuleTable::new(Category::Verb, InflectionTarget::Progressive, append("ing"))
        .with_exception("be", "being")
        .with_exception("die", "dying")
        .with_exception("lie", "lying")
        .with_exception("tie", "tying")
        .with_rule(Rule::new("drop_e", after("e", "aiyeo"), replace(1, "ing")))
}

fn verb_past(target: InflectionTarget) -> RuleTable {
    RuleTable::new(Category::Verb, target, append("ed"))
        .with_rule(Rule::new("consonant_y", after("y", VOWELS), replace(1, "ied")))
        .with_rule(Rule::new("final_e", ends_with("e"), append("d")))
}

pub fn verb_past_tense() -> RuleTable {
    verb_past(InflectionTarget::PastTense)
}

pub fn verb_past_participle() -> RuleTable {
    verb_past(InflectionTarget::PastParticiple)
}

pub fn verb_third_person_singular() -> RuleTable {
    RuleTable::new(Category::Verb, InflectionTarget::ThirdPersonSingular, append("s"))
        .with_exception("be", "is")
        .with_exception("have", "has")
        .with_rule(Rule::new("consonant_y", after("y", VOWELS), replace(1, "ies")))
        .with_rule(Rule::new("sibilant", ends_with_any(&SIBILANTS), append("es")))
}

fn adjective_degree(target: InflectionTarget, suffix: &str) -> RuleTable {
    RuleTable::new(Category::Adjective, target, append(&format!("e{}", suffix)))
        .with_rule(Rule::new(
            "consonant_y",
            after("y", VOWELS),
            replace(1, &format!("ie{}", suffix)),
        ))
        .with_rule(Rule::new("final_e", ends_with("e"), append(suffix)))
}

pub fn adjective_comparative() -> RuleTable {
    adjective_degree(InflectionTarget::Comparative, "r")
}

pub fn adjective_superlative() -> RuleTable {
    adjective_degree(InflectionTarget::Superlative, "st")
}

/// Every built-in table.
pub fn rule_set() -> RuleSet {
    let mut set = RuleSet::new();
    for table in [
        noun_plural(),
        verb_progressive(),
        verb_past_tense(),
        verb_past_participle(),
        verb_third_person_singular(),
        adjective_comparative(),
        adjective_superlative(),
    ] {
        set.insert(table);
    }
    set
}
