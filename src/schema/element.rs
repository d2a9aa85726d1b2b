use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::feature::{names, FeatureMap, FeatureValue};

/// A single word with its dictionary lemma.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordElement {
    pub base_form: String,
    /// Lexicon-assigned identifier distinguishing homographs and senses.
    pub id: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub features: FeatureMap,
}

/// A literal piece of text, optionally already realised.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringElement {
    pub realisation: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub features: FeatureMap,
}

/// A composite element. Children live in the feature map under
/// [`names::HEAD`], [`names::SPECIFIER`] and [`names::COMPLEMENTS`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseElement {
    pub category: Category,
    #[serde(default)]
    pub features: FeatureMap,
}

/// A node in an abstract linguistic structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Element {
    Word(WordElement),
    String(StringElement),
    Phrase(PhraseElement),
}

/// Which variant an element is, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Word,
    String,
    Phrase,
}

impl WordElement {
    pub fn new(base_form: &str, category: Category) -> Self {
        Self {
            base_form: base_form.to_string(),
            id: None,
            category,
            features: FeatureMap::default(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_feature(mut self, name: &str, value: impl Into<FeatureValue>) -> Self {
        self.set_feature(name, value);
        self
    }

    pub fn set_feature(&mut self, name: &str, value: impl Into<FeatureValue>) {
        self.features.insert(name.to_string(), value.into());
    }

    pub fn feature(&self, name: &str) -> Option<&FeatureValue> {
        self.features.get(name)
    }

    pub fn all_features(&self) -> &FeatureMap {
        &self.features
    }
}

impl StringElement {
    /// A canned-text element with a known realisation.
    pub fn new(text: &str) -> Self {
        Self {
            realisation: Some(text.to_string()),
            category: Category::CannedText,
            features: FeatureMap::default(),
        }
    }

    /// A canned-text element that has not been realised yet.
    pub fn unrealised() -> Self {
        Self {
            realisation: None,
            category: Category::CannedText,
            features: FeatureMap::default(),
        }
    }

    pub fn with_feature(mut self, name: &str, value: impl Into<FeatureValue>) -> Self {
        self.set_feature(name, value);
        self
    }

    pub fn set_feature(&mut self, name: &str, value: impl Into<FeatureValue>) {
        self.features.insert(name.to_string(), value.into());
    }

    pub fn all_features(&self) -> &FeatureMap {
        &self.features
    }
}

impl PhraseElement {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            features: FeatureMap::default(),
        }
    }

    pub fn with_feature(mut self, name: &str, value: impl Into<FeatureValue>) -> Self {
        self.set_feature(name, value);
        self
    }

    pub fn set_feature(&mut self, name: &str, value: impl Into<FeatureValue>) {
        self.features.insert(name.to_string(), value.into());
    }

    pub fn all_features(&self) -> &FeatureMap {
        &self.features
    }

    pub fn set_head(&mut self, head: impl Into<Element>) {
        self.set_feature(names::HEAD, head.into());
    }

    pub fn head(&self) -> Option<&Element> {
        self.features.get(names::HEAD).and_then(FeatureValue::as_element)
    }

    pub fn set_specifier(&mut self, specifier: impl Into<Element>) {
        self.set_feature(names::SPECIFIER, specifier.into());
    }

    pub fn specifier(&self) -> Option<&Element> {
        self.features
            .get(names::SPECIFIER)
            .and_then(FeatureValue::as_element)
    }

    /// Append a complement. A non-list value already stored under the
    /// complements feature is replaced.
    pub fn add_complement(&mut self, complement: impl Into<Element>) {
        let complement = complement.into();
        match self.features.get_mut(names::COMPLEMENTS) {
            Some(FeatureValue::List(items)) => items.push(complement),
            _ => {
                self.features.insert(
                    names::COMPLEMENTS.to_string(),
                    FeatureValue::List(vec![complement]),
                );
            }
        }
    }

    pub fn complements(&self) -> &[Element] {
        self.features
            .get(names::COMPLEMENTS)
            .and_then(FeatureValue::as_list)
            .unwrap_or(&[])
    }

    /// Specifier, head, then complements, in surface order.
    pub fn children(&self) -> Vec<&Element> {
        let mut children = Vec::new();
        children.extend(self.specifier());
        children.extend(self.head());
        children.extend(self.complements().iter());
        children
    }
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Word(_) => ElementKind::Word,
            Self::String(_) => ElementKind::String,
            Self::Phrase(_) => ElementKind::Phrase,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Word(w) => w.category,
            Self::String(s) => s.category,
            Self::Phrase(p) => p.category,
        }
    }

    pub fn all_features(&self) -> &FeatureMap {
        match self {
            Self::Word(w) => &w.features,
            Self::String(s) => &s.features,
            Self::Phrase(p) => &p.features,
        }
    }

    pub fn features_mut(&mut self) -> &mut FeatureMap {
        match self {
            Self::Word(w) => &mut w.features,
            Self::String(s) => &mut s.features,
            Self::Phrase(p) => &mut p.features,
        }
    }

    pub fn feature(&self, name: &str) -> Option<&FeatureValue> {
        self.all_features().get(name)
    }

    pub fn set_feature(&mut self, name: &str, value: impl Into<FeatureValue>) {
        self.features_mut().insert(name.to_string(), value.into());
    }

    pub fn as_word(&self) -> Option<&WordElement> {
        match self {
            Self::Word(w) => Some(w),
            _ => None,
        }
    }
}

impl From<WordElement> for Element {
    fn from(w: WordElement) -> Self {
        Self::Word(w)
    }
}

impl From<StringElement> for Element {
    fn from(s: StringElement) -> Self {
        Self::String(s)
    }
}

impl From<PhraseElement> for Element {
    fn from(p: PhraseElement) -> Self {
        Self::Phrase(p)
    }
}

impl fmt::Display for WordElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordElement[{}:{}]", self.base_form, self.category)
    }
}

impl fmt::Display for StringElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.realisation {
            Some(text) => write!(f, "StringElement[{:?}]", text),
            None => f.write_str("StringElement[]"),
        }
    }
}

impl fmt::Display for PhraseElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhraseElement[{}", self.category)?;
        for (i, child) in self.children().into_iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { ", " })?;
            write!(f, "{}", child)?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(w) => w.fmt(f),
            Self::String(s) => s.fmt(f),
            Self::Phrase(p) => p.fmt(f),
        }
    }
}
