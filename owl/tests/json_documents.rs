//! Loads the pizza fixture document and checks the model it produces.

use protege_owl::serializer::functional::to_functional;
use protege_owl::{
    Axiom, Class, ClassExpression, EntitiesInSignatureIndex, Entity, Iri, NamedIndividual,
    ObjectProperty, Ontology, SignatureIndex,
};

const PIZZA: &str = include_str!("fixtures/pizza.json");
const NS: &str = "http://ex.org/pizza#";

fn pizza() -> Ontology {
    match Ontology::from_json_str(PIZZA) {
        Ok(ontology) => ontology,
        Err(e) => panic!("pizza fixture must parse: {e}"),
    }
}

fn iri(name: &str) -> Iri {
    Iri::new(format!("{NS}{name}"))
}

#[test]
fn fixture_parses_every_axiom() {
    let ontology = pizza();
    assert_eq!(ontology.axiom_count(), 26);
    assert_eq!(ontology.iri, Some(Iri::new("http://ex.org/pizza")));
}

#[test]
fn every_signature_entity_is_declared() {
    let ontology = pizza();
    let declared = ontology.declared_entities();
    for entity in ontology.signature() {
        assert!(declared.contains(&entity), "undeclared {entity}");
    }
}

#[test]
fn existential_restriction_is_decoded() {
    let ontology = pizza();
    let expected = Axiom::sub_class_of(
        Class(iri("Margherita")),
        ClassExpression::some(ObjectProperty(iri("hasTopping")), Class(iri("Mozzarella"))),
    );
    assert!(ontology.contains(&expected));
}

#[test]
fn equivalent_class_definition_splits_into_two_conjuncts() {
    let ontology = pizza();
    let definition = ontology.axioms().find_map(|ax| match ax {
        Axiom::EquivalentClasses { classes } => classes.iter().find(|ce| ce.is_anonymous()),
        _ => None,
    });
    let Some(definition) = definition else {
        panic!("fixture has an anonymous equivalent class");
    };
    assert_eq!(definition.as_conjunct_set().len(), 2);
}

#[test]
fn signature_index_resolves_fixture_iris() {
    let index = SignatureIndex::new(&pizza());
    let found = index.entities_in_signature(&iri("myMargherita"));
    assert_eq!(
        found.into_iter().collect::<Vec<_>>(),
        vec![Entity::from(NamedIndividual(iri("myMargherita")))]
    );
}

#[test]
fn document_survives_a_json_round_trip() {
    let ontology = pizza();
    let rendered = match ontology.to_json_string() {
        Ok(doc) => doc,
        Err(e) => panic!("serialization failed: {e}"),
    };
    match Ontology::from_json_str(&rendered) {
        Ok(reparsed) => assert_eq!(reparsed, ontology),
        Err(e) => panic!("reparse failed: {e}"),
    }
}

#[test]
fn functional_rendering_lists_every_axiom() {
    let ontology = pizza();
    let doc = to_functional(&ontology);
    assert_eq!(doc.lines().count(), ontology.axiom_count() + 2);
    assert!(doc.contains(&format!(
        "ClassAssertion(<{NS}Margherita> <{NS}myMargherita>)"
    )));
}
