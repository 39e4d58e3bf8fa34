//! Frames assembled from the pizza fixture document.

use std::collections::BTreeSet;

use protege_frame::{
    AnnotationValueData, AxiomPropertyValueTranslator, Frame, LabelRenderer, Mode, PropertyValue,
    State,
};
use protege_owl::{
    Axiom, Class, DataProperty, Entity, Iri, NamedIndividual, ObjectProperty, Ontology,
    SignatureIndex,
};

const PIZZA: &str = include_str!("../../owl/tests/fixtures/pizza.json");
const NS: &str = "http://ex.org/pizza#";

type Translator = AxiomPropertyValueTranslator<LabelRenderer, SignatureIndex>;

fn pizza() -> Ontology {
    match Ontology::from_json_str(PIZZA) {
        Ok(ontology) => ontology,
        Err(e) => panic!("pizza fixture must parse: {e}"),
    }
}

fn iri(name: &str) -> Iri {
    Iri::new(format!("{NS}{name}"))
}

fn translator(ontology: &Ontology) -> Translator {
    AxiomPropertyValueTranslator::new(
        LabelRenderer::with_language(ontology, Some("en")),
        SignatureIndex::new(ontology),
    )
}

fn frame_of(entity: Entity) -> (Ontology, Translator, Frame) {
    let ontology = pizza();
    let translator = translator(&ontology);
    let frame = Frame::build(&entity, &ontology, &translator);
    (ontology, translator, frame)
}

#[test]
fn margherita_frame_lists_restrictions_and_annotations() {
    let (_, _, frame) = frame_of(Class(iri("Margherita")).into());
    assert_eq!(frame.subject.browser_text, "Margherita");
    let kinds: BTreeSet<&str> = frame.property_values.iter().map(PropertyValue::kind).collect();
    assert_eq!(kinds, BTreeSet::from(["annotation", "class", "datatype"]));
    assert_eq!(frame.len(), 4);
    assert_eq!(frame.derived().count(), 0);
    let rendered: Vec<String> = frame.property_values.iter().map(ToString::to_string).collect();
    assert!(rendered.contains(&"has topping Mozzarella [asserted]".to_owned()));
}

#[test]
fn see_also_iri_resolves_to_the_mozzarella_class() {
    let (_, _, frame) = frame_of(Class(iri("Margherita")).into());
    let resolved = frame.property_values.iter().find_map(|value| match value {
        PropertyValue::Annotation {
            value: AnnotationValueData::Entity(data),
            ..
        } => Some(data.entity.clone()),
        _ => None,
    });
    assert_eq!(resolved, Some(Entity::from(Class(iri("Mozzarella")))));
}

#[test]
fn margherita_frame_writes_back_its_own_axioms() {
    let (ontology, translator, frame) = frame_of(Class(iri("Margherita")).into());
    let axioms = frame.to_axioms(&translator, Mode::Strict);
    assert_eq!(axioms.len(), 4);
    for axiom in &axioms {
        assert!(ontology.contains(axiom), "not in the ontology: {axiom}");
    }
}

#[test]
fn defined_class_has_only_derived_values() {
    let (_, translator, frame) = frame_of(Class(iri("CheesyPizza")).into());
    assert_eq!(frame.len(), 1);
    assert!(frame.property_values.iter().all(|v| v.state() == State::Derived));
    assert!(frame.to_axioms(&translator, Mode::Lax).is_empty());
}

#[test]
fn individual_frame_reads_property_assertions() {
    let (ontology, translator, frame) = frame_of(NamedIndividual(iri("myMargherita")).into());
    let expected: BTreeSet<Axiom> = [
        Axiom::object_property_assertion(
            ObjectProperty(iri("hasTopping")),
            NamedIndividual(iri("myMargherita")),
            NamedIndividual(iri("mozz1")),
        ),
        Axiom::data_property_assertion(
            DataProperty(iri("hasCalories")),
            NamedIndividual(iri("myMargherita")),
            protege_owl::Literal::typed("850", protege_owl::vocab::XSD_INTEGER),
        ),
    ]
    .into_iter()
    .collect();
    assert_eq!(frame.to_axioms(&translator, Mode::Strict), expected);
    assert!(expected.iter().all(|axiom| ontology.contains(axiom)));
}

#[test]
fn lax_write_back_declares_what_it_references() {
    let (ontology, translator, frame) = frame_of(NamedIndividual(iri("myMargherita")).into());
    let axioms = frame.to_axioms(&translator, Mode::Lax);
    assert!(axioms.contains(&Axiom::declaration(ObjectProperty(iri("hasTopping")))));
    assert!(axioms.contains(&Axiom::declaration(NamedIndividual(iri("mozz1")))));
    assert!(axioms.iter().all(|axiom| ontology.contains(axiom)));
}

#[test]
fn unrelated_entity_has_an_empty_frame() {
    let (_, _, frame) = frame_of(Class(iri("Calzone")).into());
    assert!(frame.is_empty());
    assert_eq!(frame.subject.browser_text, "Calzone");
}

#[cfg(feature = "serde")]
#[test]
fn frame_serializes_to_json() {
    let (_, _, frame) = frame_of(NamedIndividual(iri("myMargherita")).into());
    let json = match serde_json::to_string(&frame) {
        Ok(json) => json,
        Err(e) => panic!("frame must serialize: {e}"),
    };
    match serde_json::from_str::<Frame>(&json) {
        Ok(back) => assert_eq!(back, frame),
        Err(e) => panic!("frame must deserialize: {e}"),
    }
}
