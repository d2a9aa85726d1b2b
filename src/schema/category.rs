use serde::{Deserialize, Serialize};

/// The grammatical category of an element.
///
/// Lexical categories label single words; phrase categories label
/// composite elements. Equality between elements always starts by
/// comparing these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Any,
    Symbol,
    Noun,
    Adjective,
    Adverb,
    Verb,
    Determiner,
    Pronoun,
    Conjunction,
    Preposition,
    Complementiser,
    Modal,
    Auxiliary,
    Clause,
    NounPhrase,
    VerbPhrase,
    AdjectivePhrase,
    AdverbPhrase,
    PrepositionalPhrase,
    CannedText,
}

impl Category {
    /// Lowercase name used when rendering elements (e.g., "noun_phrase").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Symbol => "symbol",
            Self::Noun => "noun",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Verb => "verb",
            Self::Determiner => "determiner",
            Self::Pronoun => "pronoun",
            Self::Conjunction => "conjunction",
            Self::Preposition => "preposition",
            Self::Complementiser => "complementiser",
            Self::Modal => "modal",
            Self::Auxiliary => "auxiliary",
            Self::Clause => "clause",
            Self::NounPhrase => "noun_phrase",
            Self::VerbPhrase => "verb_phrase",
            Self::AdjectivePhrase => "adjective_phrase",
            Self::AdverbPhrase => "adverb_phrase",
            Self::PrepositionalPhrase => "prepositional_phrase",
            Self::CannedText => "canned_text",
        }
    }

    /// Returns true for word-level categories.
    pub fn is_lexical(&self) -> bool {
        !self.is_phrasal()
    }

    /// Returns true for clause and phrase categories.
    pub fn is_phrasal(&self) -> bool {
        matches!(
            self,
            Self::Clause
                | Self::NounPhrase
                | Self::VerbPhrase
                | Self::AdjectivePhrase
                | Self::AdverbPhrase
                | Self::PrepositionalPhrase
                | Self::CannedText
        )
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
