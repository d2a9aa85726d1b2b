//! Structural equality over element trees.
//!
//! Feature values are compared by kind and rendered text, not by a deep
//! walk: two values that print the same are treated as equal even when
//! their nested structure differs (a nested word renders as its lemma and
//! category only). This is best-effort equality for deduplication and
//! tests. A stricter comparison can be plugged in through
//! [`ValueEquivalence`] without changing callers of the element methods.

use std::any::Any;

use crate::schema::category::Category;
use crate::schema::element::{Element, PhraseElement, StringElement, WordElement};
use crate::schema::feature::{FeatureMap, FeatureValue};

/// Decides whether two feature values stored under the same key match.
pub trait ValueEquivalence {
    fn equivalent(&self, a: &FeatureValue, b: &FeatureValue) -> bool;
}

/// Same value kind and identical rendered text.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderedEquivalence;

impl ValueEquivalence for RenderedEquivalence {
    fn equivalent(&self, a: &FeatureValue, b: &FeatureValue) -> bool {
        a.kind() == b.kind() && a.render() == b.render()
    }
}

/// Compare two feature maps with [`RenderedEquivalence`].
pub fn feature_maps_equal(a: &FeatureMap, b: &FeatureMap) -> bool {
    feature_maps_equal_with(&RenderedEquivalence, a, b)
}

/// Compare two feature maps: identical key sets, and every shared key's
/// values equivalent under `eq`.
pub fn feature_maps_equal_with<E>(eq: &E, a: &FeatureMap, b: &FeatureMap) -> bool
where
    E: ValueEquivalence + ?Sized,
{
    if a.len() != b.len() {
        return false;
    }
    if a.keys().any(|k| !b.contains_key(k)) || b.keys().any(|k| !a.contains_key(k)) {
        return false;
    }
    a.iter()
        .all(|(key, va)| b.get(key).is_some_and(|vb| eq.equivalent(va, vb)))
}

/// Positional comparison of two element sequences by category and
/// feature map. Lemmas and realisations are not consulted here.
pub fn element_sequences_equal(a: &[Element], b: &[Element]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(x, y)| {
            x.category() == y.category() && feature_maps_equal(x.all_features(), y.all_features())
        })
}

/// Borrowed view over anything that can stand on either side of a comparison.
#[derive(Clone, Copy)]
enum ElementRef<'a> {
    Word(&'a WordElement),
    String(&'a StringElement),
    Phrase(&'a PhraseElement),
}

impl<'a> ElementRef<'a> {
    fn of(element: &'a Element) -> Self {
        match element {
            Element::Word(w) => Self::Word(w),
            Element::String(s) => Self::String(s),
            Element::Phrase(p) => Self::Phrase(p),
        }
    }

    fn downcast(candidate: &'a dyn Any) -> Option<Self> {
        if let Some(e) = candidate.downcast_ref::<Element>() {
            return Some(Self::of(e));
        }
        if let Some(w) = candidate.downcast_ref::<WordElement>() {
            return Some(Self::Word(w));
        }
        if let Some(s) = candidate.downcast_ref::<StringElement>() {
            return Some(Self::String(s));
        }
        candidate.downcast_ref::<PhraseElement>().map(Self::Phrase)
    }

    fn category(self) -> Category {
        match self {
            Self::Word(w) => w.category,
            Self::String(s) => s.category,
            Self::Phrase(p) => p.category,
        }
    }

    fn features(self) -> &'a FeatureMap {
        match self {
            Self::Word(w) => &w.features,
            Self::String(s) => &s.features,
            Self::Phrase(p) => &p.features,
        }
    }

    /// Dispatches on the receiver's variant only, so the relation is not
    /// symmetric: a phrase may equal a word while the word rejects it.
    fn equals(self, other: ElementRef<'_>) -> bool {
        match (self, other) {
            (Self::Word(a), ElementRef::Word(b)) => a.structurally_equals(b),
            (Self::Word(_), _) => false,
            (Self::String(a), ElementRef::String(b)) => a.structurally_equals(b),
            (Self::String(_), _) => false,
            (Self::Phrase(_), _) => {
                self.category() == other.category()
                    && feature_maps_equal(self.features(), other.features())
            }
        }
    }
}

impl Element {
    /// Compare against an arbitrary candidate. Anything that is not an
    /// element (or one of the element structs) is simply unequal.
    pub fn structurally_equals(&self, other: &dyn Any) -> bool {
        match ElementRef::downcast(other) {
            Some(candidate) => ElementRef::of(self).equals(candidate),
            None => false,
        }
    }

    pub fn equals_element(&self, other: &Element) -> bool {
        ElementRef::of(self).equals(ElementRef::of(other))
    }
}

impl WordElement {
    /// Category, lemma, lexicon id and feature map must all match.
    pub fn structurally_equals(&self, other: &WordElement) -> bool {
        self.category == other.category
            && self.base_form == other.base_form
            && self.id == other.id
            && feature_maps_equal(&self.features, &other.features)
    }
}

impl StringElement {
    /// Category, feature map and realisation must match. Two unrealised
    /// elements compare equal.
    pub fn structurally_equals(&self, other: &StringElement) -> bool {
        self.category == other.category
            && self.realisation == other.realisation
            && feature_maps_equal(&self.features, &other.features)
    }
}
