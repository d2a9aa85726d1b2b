//! Ordered rule tables and rule sets: types, RON loading, and merging.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, trace};

use super::rule::{Rule, Transform};
use super::InflectionTarget;
use crate::schema::category::Category;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("RON serialization error: {0}")]
    RonWrite(#[from] ron::Error),
    #[error("rule '{rule}' in table {table} has an empty suffix")]
    EmptySuffix { table: TableKey, rule: String },
    #[error("table {0} is defined more than once")]
    DuplicateTable(TableKey),
}

fn match_case(word: &str, form: String) -> String {
    let mut letters = word.chars().filter(|c| c.is_alphabetic());
    let Some(first) = letters.next() else {
        return form;
    };
    if !first.is_uppercase() {
        return form;
    }
    let rest: Vec<char> = letters.collect();
    if !rest.is_empty() && rest.iter().all(|c| c.is_uppercase()) {
        return form.to_uppercase();
    }
    let mut chars = form.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => form,
    }
}

/// Identifies the table consulted for one inflection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableKey {
    pub category: Category,
    pub target: InflectionTarget,
}

impl fmt::Display for TableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.target)
    }
}

/// An ordered, first-match-wins list of rules for one (category, target)
/// pair, with whole-word exceptions checked first and a default transform
/// applied when no rule matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    pub category: Category,
    pub target: InflectionTarget,
    /// Lowercase word → inflected form.
    #[serde(default)]
    pub exceptions: BTreeMap<String, String>,
    pub rules: Vec<Rule>,
    pub default: Transform,
}

impl RuleTable {
    pub fn new(category: Category, target: InflectionTarget, default: Transform) -> Self {
        Self {
            category,
            target,
            exceptions: BTreeMap::new(),
            rules: Vec::new(),
            default,
        }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_exception(mut self, word: &str, inflected: &str) -> Self {
        self.exceptions
            .insert(word.to_lowercase(), inflected.to_string());
        self
    }

    pub fn key(&self) -> TableKey {
        TableKey {
            category: self.category,
            target: self.target,
        }
    }

    /// The first rule whose condition matches `word`, if any.
    pub fn matching_rule(&self, word: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.when.matches(word))
    }

    /// Inflect a single word. The result follows the capitalisation of
    /// `word`: all-caps stays all-caps, a leading capital is kept.
    pub fn apply(&self, word: &str) -> String {
        if let Some(form) = self.exceptions.get(&word.to_lowercase()) {
            trace!(table = %self.key(), word, "exception");
            return match_case(word, form.clone());
        }
        let form = match self.matching_rule(word) {
            Some(rule) => {
                trace!(table = %self.key(), word, rule = %rule.name, "rule matched");
                rule.then.apply(word)
            }
            None => self.default.apply(word),
        };
        match_case(word, form)
    }

    /// Rules that can never fire because an earlier rule matches every
    /// word they match. Each entry is `(shadowed, shadowing)`.
    pub fn shadowed_rules(&self) -> Vec<(&Rule, &Rule)> {
        let mut shadowed = Vec::new();
        for (i, later) in self.rules.iter().enumerate() {
            if let Some(earlier) = self.rules[..i]
                .iter()
                .find(|earlier| earlier.when.subsumes(&later.when))
            {
                shadowed.push((later, earlier));
            }
        }
        shadowed
    }

    fn validate(&self) -> Result<(), RuleError> {
        for rule in &self.rules {
            if rule.when.has_empty_suffix() {
                return Err(RuleError::EmptySuffix {
                    table: self.key(),
                    rule: rule.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// A set of rule tables keyed by (category, target).
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    tables: HashMap<TableKey, RuleTable>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a table, replacing any table with the same key.
    pub fn insert(&mut self, table: RuleTable) {
        self.tables.insert(table.key(), table);
    }

    pub fn get(&self, category: Category, target: InflectionTarget) -> Option<&RuleTable> {
        self.tables.get(&TableKey { category, target })
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Tables in a stable order (by rendered key).
    pub fn tables(&self) -> Vec<&RuleTable> {
        let mut tables: Vec<&RuleTable> = self.tables.values().collect();
        tables.sort_by_key(|t| t.key().to_string());
        tables
    }

    /// Load a rule set from a RON file containing a list of tables.
    pub fn load_from_ron(path: &Path) -> Result<RuleSet, RuleError> {
        let contents = std::fs::read_to_string(path)?;
        let set = Self::parse_ron(&contents)?;
        debug!(path = %path.display(), tables = set.len(), "loaded rule tables");
        Ok(set)
    }

    /// Parse a rule set from a RON string containing a list of tables.
    pub fn parse_ron(input: &str) -> Result<RuleSet, RuleError> {
        let raw: Vec<RuleTable> = ron::from_str(input)?;
        let mut set = RuleSet::new();
        for mut table in raw {
            table.validate()?;
            let key = table.key();
            if set.tables.contains_key(&key) {
                return Err(RuleError::DuplicateTable(key));
            }
            table.exceptions = table
                .exceptions
                .into_iter()
                .map(|(word, form)| (word.to_lowercase(), form))
                .collect();
            set.tables.insert(key, table);
        }
        Ok(set)
    }

    /// Serialize to the same RON shape `parse_ron` reads.
    pub fn to_ron(&self) -> Result<String, RuleError> {
        let tables = self.tables();
        Ok(ron::ser::to_string_pretty(
            &tables,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Merge another rule set into this one. Tables from `other`
    /// replace tables in `self` with the same key.
    pub fn merge(&mut self, other: RuleSet) {
        for (key, table) in other.tables {
            if self.tables.contains_key(&key) {
                debug!(table = %key, "rule table overridden");
            }
            self.tables.insert(key, table);
        }
    }
}
