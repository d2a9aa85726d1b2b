use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::element::{Element, ElementKind};

/// Feature names understood by this crate. Callers may use any other
/// string as a feature name; these are the ones inflection reads.
pub mod names {
    pub const NUMBER: &str = "number";
    pub const PERSON: &str = "person";
    pub const TENSE: &str = "tense";
    pub const FORM: &str = "form";
    pub const IS_COMPARATIVE: &str = "is_comparative";
    pub const IS_SUPERLATIVE: &str = "is_superlative";
    pub const NEGATED: &str = "negated";
    pub const HEAD: &str = "head";
    pub const SPECIFIER: &str = "specifier";
    pub const COMPLEMENTS: &str = "complements";
}

/// Unordered feature name → value mapping attached to every element.
pub type FeatureMap = FxHashMap<String, FeatureValue>;

/// A dynamically typed feature value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FeatureValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Category(Category),
    Element(Box<Element>),
    List(Vec<Element>),
}

/// The representation kind of a feature value. Two values can only be
/// equivalent when their kinds match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Text,
    Category,
    Element(ElementKind),
    List,
}

impl FeatureValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Category(_) => ValueKind::Category,
            Self::Element(e) => ValueKind::Element(e.kind()),
            Self::List(_) => ValueKind::List,
        }
    }

    /// Render the value as text. Nested elements render through their
    /// `Display` impl, which shows the element's identity but not its
    /// features, so this is a shallow view of the value.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Element]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Text(s) => f.write_str(s),
            Self::Category(c) => f.write_str(c.name()),
            Self::Element(e) => write!(f, "{}", e),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for FeatureValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for FeatureValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for FeatureValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for FeatureValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Category> for FeatureValue {
    fn from(c: Category) -> Self {
        Self::Category(c)
    }
}

impl From<Element> for FeatureValue {
    fn from(e: Element) -> Self {
        Self::Element(Box::new(e))
    }
}

impl From<Vec<Element>> for FeatureValue {
    fn from(items: Vec<Element>) -> Self {
        Self::List(items)
    }
}

/// Grammatical number, stored under [`names::NUMBER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberAgreement {
    Singular,
    Plural,
    Both,
}

impl NumberAgreement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Singular => "singular",
            Self::Plural => "plural",
            Self::Both => "both",
        }
    }
}

/// Grammatical tense, stored under [`names::TENSE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tense {
    Past,
    Present,
    Future,
}

impl Tense {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Past => "past",
            Self::Present => "present",
            Self::Future => "future",
        }
    }
}

/// Grammatical person, stored under [`names::PERSON`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
        }
    }
}

/// Verb form, stored under [`names::FORM`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Form {
    Normal,
    Infinitive,
    BareInfinitive,
    Imperative,
    Gerund,
    PresentParticiple,
    PastParticiple,
}

impl Form {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Infinitive => "infinitive",
            Self::BareInfinitive => "bare_infinitive",
            Self::Imperative => "imperative",
            Self::Gerund => "gerund",
            Self::PresentParticiple => "present_participle",
            Self::PastParticiple => "past_participle",
        }
    }
}

macro_rules! text_feature_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FeatureValue {
                fn from(v: $ty) -> Self {
                    Self::Text(v.as_str().to_string())
                }
            }
        )*
    };
}

text_feature_value!(NumberAgreement, Tense, Person, Form);
