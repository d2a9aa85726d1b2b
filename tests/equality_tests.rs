//! Element equality integration tests: reflexivity, asymmetry, sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use surface_realiser::core::equality::{element_sequences_equal, feature_maps_equal};
use surface_realiser::schema::category::Category;
use surface_realiser::schema::element::{Element, PhraseElement, StringElement, WordElement};
use surface_realiser::schema::feature::{names, FeatureValue, NumberAgreement, Tense};

const LEMMAS: [&str; 6] = ["dog", "carry", "index", "happy", "the", "quickly"];
const CATEGORIES: [Category; 5] = [
    Category::Noun,
    Category::Verb,
    Category::Adjective,
    Category::Determiner,
    Category::Adverb,
];

fn random_feature(rng: &mut StdRng) -> FeatureValue {
    match rng.gen_range(0..5) {
        0 => FeatureValue::Bool(rng.gen()),
        1 => FeatureValue::Int(rng.gen_range(-5..5)),
        2 => FeatureValue::Float(rng.gen_range(0..4) as f64 / 4.0),
        3 => NumberAgreement::Plural.into(),
        _ => Tense::Past.into(),
    }
}

fn random_word(rng: &mut StdRng) -> WordElement {
    let mut word = WordElement::new(
        LEMMAS[rng.gen_range(0..LEMMAS.len())],
        CATEGORIES[rng.gen_range(0..CATEGORIES.len())],
    );
    for i in 0..rng.gen_range(0..4) {
        word.set_feature(&format!("f{}", i), random_feature(rng));
    }
    if rng.gen_bool(0.5) {
        word = word.with_id(&format!("E{}", rng.gen_range(0..100)));
    }
    word
}

fn random_element(rng: &mut StdRng, depth: u32) -> Element {
    match rng.gen_range(0..3) {
        0 => random_word(rng).into(),
        1 => {
            if rng.gen_bool(0.2) {
                StringElement::unrealised().into()
            } else {
                StringElement::new(LEMMAS[rng.gen_range(0..LEMMAS.len())]).into()
            }
        }
        _ if depth == 0 => random_word(rng).into(),
        _ => {
            let mut phrase = PhraseElement::new(Category::NounPhrase);
            phrase.set_head(random_element(rng, depth - 1));
            for _ in 0..rng.gen_range(0..3) {
                phrase.add_complement(random_element(rng, depth - 1));
            }
            phrase.into()
        }
    }
}

#[test]
fn equality_is_reflexive() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..300 {
        let e = random_element(&mut rng, 3);
        assert!(e.equals_element(&e), "not reflexive: {}", e);
        assert!(e.structurally_equals(&e.clone()), "clone differs: {}", e);
    }
}

#[test]
fn sequences_of_unequal_length_differ() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..100 {
        let a: Vec<Element> = (0..rng.gen_range(0..5)).map(|_| random_element(&mut rng, 1)).collect();
        let mut b = a.clone();
        b.push(random_element(&mut rng, 1));
        assert!(!element_sequences_equal(&a, &b));
        assert!(!element_sequences_equal(&b, &a));
        assert!(element_sequences_equal(&a, &a.clone()));
    }
}

#[test]
fn differently_built_phrases_compare_equal() {
    let mut first = PhraseElement::new(Category::NounPhrase);
    first.set_specifier(WordElement::new("the", Category::Determiner));
    first.set_head(WordElement::new("dog", Category::Noun));
    first.set_feature(names::NUMBER, NumberAgreement::Plural);

    let mut second = PhraseElement::new(Category::NounPhrase)
        .with_feature(names::NUMBER, NumberAgreement::Plural);
    second.set_head(WordElement::new("dog", Category::Noun));
    second.set_specifier(WordElement::new("the", Category::Determiner));

    assert!(Element::from(first.clone()).equals_element(&second.clone().into()));

    second.add_complement(StringElement::new("outside"));
    assert!(!Element::from(first).equals_element(&second.into()));
}

#[test]
fn phrases_with_different_heads_differ() {
    let mut a = PhraseElement::new(Category::NounPhrase);
    a.set_head(WordElement::new("dog", Category::Noun));
    let mut b = PhraseElement::new(Category::NounPhrase);
    b.set_head(WordElement::new("cat", Category::Noun));
    assert!(!Element::from(a).equals_element(&b.into()));
}

#[test]
fn heterogeneous_comparison_is_asymmetric() {
    let word: Element = WordElement::new("dog", Category::Noun)
        .with_feature(names::NUMBER, NumberAgreement::Plural)
        .into();
    let phrase: Element = PhraseElement::new(Category::Noun)
        .with_feature(names::NUMBER, NumberAgreement::Plural)
        .into();

    assert!(phrase.equals_element(&word));
    assert!(!word.equals_element(&phrase));
    assert!(phrase.structurally_equals(&word));
    assert!(!word.structurally_equals(&phrase));
}

#[test]
fn non_element_candidates() {
    let word: Element = WordElement::new("dog", Category::Noun).into();
    assert!(!word.structurally_equals(&"WordElement[dog:noun]".to_string()));
    assert!(!word.structurally_equals(&Category::Noun));
    assert!(!word.structurally_equals(&FeatureValue::Text("dog".into())));
}

#[test]
fn nested_feature_values_are_shallow() {
    // Child features are invisible to the rendered comparison.
    let mut a = PhraseElement::new(Category::VerbPhrase);
    a.set_head(WordElement::new("carry", Category::Verb).with_feature(names::TENSE, Tense::Past));
    let mut b = PhraseElement::new(Category::VerbPhrase);
    b.set_head(WordElement::new("carry", Category::Verb));

    assert!(feature_maps_equal(a.all_features(), b.all_features()));
    assert!(Element::from(a).equals_element(&b.into()));
}
