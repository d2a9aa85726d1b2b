//! Surface Realiser: element equality and English morphology for
//! turning abstract linguistic structures into surface text.
//!
//! Provides a shallow structural comparator over element trees and a
//! table-driven inflection engine (plurals, participles, past tense,
//! comparatives, indefinite articles). Sentence planning, lexicons and
//! orthography are left to the calling pipeline.

pub mod core;
pub mod schema;
