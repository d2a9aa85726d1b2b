//! Rule primitives: suffix conditions and ending transforms.
//!
//! Conditions are checked against a single word, ASCII case-insensitively,
//! and never match a word that is nothing but the suffix. A
//! preceding-character class means "an ASCII letter not in this set",
//! which is how consonant classes such as `[^aeiou]` are expressed.

use serde::{Deserialize, Serialize};

/// A predicate over the ending of a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    /// The word ends with this suffix.
    EndsWith(String),
    /// The word ends with any of these suffixes.
    EndsWithAny(Vec<String>),
    /// The word ends with `suffix`, immediately preceded by a letter that
    /// is not one of the characters in `not_after`.
    After { suffix: String, not_after: String },
}

/// How a matching word is rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transform {
    /// Append text to the word.
    Append(String),
    /// Remove `strip` trailing characters, then append.
    Replace { strip: usize, append: String },
}

/// One named entry in an ordered rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub when: Condition,
    pub then: Transform,
}

/// A single suffix alternative of a condition.
#[derive(Debug, Clone, Copy)]
struct Pattern<'a> {
    suffix: &'a str,
    not_after: Option<&'a str>,
}

impl Condition {
    pub fn matches(&self, word: &str) -> bool {
        self.patterns().iter().any(|p| p.matches(word))
    }

    /// Returns true if every word this condition can match is also matched
    /// by `self`. Conservative: a `false` does not prove the two overlap
    /// only partially.
    pub fn subsumes(&self, other: &Condition) -> bool {
        let ours = self.patterns();
        other
            .patterns()
            .iter()
            .all(|theirs| ours.iter().any(|p| p.subsumes(theirs)))
    }

    /// Suffixes that are empty, which would make the condition match
    /// every word.
    pub(crate) fn has_empty_suffix(&self) -> bool {
        match self {
            Self::EndsWithAny(suffixes) => {
                suffixes.is_empty() || suffixes.iter().any(String::is_empty)
            }
            _ => self.patterns().iter().any(|p| p.suffix.is_empty()),
        }
    }

    fn patterns(&self) -> Vec<Pattern<'_>> {
        match self {
            Self::EndsWith(suffix) => vec![Pattern {
                suffix,
                not_after: None,
            }],
            Self::EndsWithAny(suffixes) => suffixes
                .iter()
                .map(|suffix| Pattern {
                    suffix,
                    not_after: None,
                })
                .collect(),
            Self::After { suffix, not_after } => vec![Pattern {
                suffix,
                not_after: Some(not_after),
            }],
        }
    }
}

impl Pattern<'_> {
    fn matches(&self, word: &str) -> bool {
        let Some(stem) = strip_suffix_ignore_case(word, self.suffix) else {
            return false;
        };
        if stem.is_empty() {
            return false;
        }
        match self.not_after {
            None => true,
            Some(excluded) => stem
                .chars()
                .next_back()
                .is_some_and(|c| allowed_before(c, excluded)),
        }
    }

    fn subsumes(&self, other: &Pattern<'_>) -> bool {
        let Some(rest) = strip_suffix_ignore_case(other.suffix, self.suffix) else {
            return false;
        };
        let Some(excluded) = self.not_after else {
            return true;
        };
        match rest.chars().next_back() {
            // The character before our suffix is fixed by the other suffix.
            Some(c) => allowed_before(c, excluded),
            // Same suffix: the other pattern must be at least as restrictive.
            None => other.not_after.is_some_and(|theirs| {
                excluded
                    .chars()
                    .all(|c| theirs.chars().any(|t| t.eq_ignore_ascii_case(&c)))
            }),
        }
    }
}

fn allowed_before(c: char, excluded: &str) -> bool {
    c.is_ascii_alphabetic() && !excluded.chars().any(|x| x.eq_ignore_ascii_case(&c))
}

/// `word` without `suffix`, compared ASCII case-insensitively.
fn strip_suffix_ignore_case<'w>(word: &'w str, suffix: &str) -> Option<&'w str> {
    let cut = word.len().checked_sub(suffix.len())?;
    if !word.is_char_boundary(cut) || !word[cut..].eq_ignore_ascii_case(suffix) {
        return None;
    }
    Some(&word[..cut])
}

impl Transform {
    pub fn apply(&self, word: &str) -> String {
        match self {
            Self::Append(text) => format!("{}{}", word, text),
            Self::Replace { strip, append } => {
                let keep = match strip {
                    0 => word.len(),
                    n => word
                        .char_indices()
                        .rev()
                        .nth(n - 1)
                        .map(|(i, _)| i)
                        .unwrap_or(0),
                };
                format!("{}{}", &word[..keep], append)
            }
        }
    }
}

impl Rule {
    pub fn new(name: &str, when: Condition, then: Transform) -> Self {
        Self {
            name: name.to_string(),
            when,
            then,
        }
    }
}
