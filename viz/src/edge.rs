//! Edges of the entity graph.

use std::collections::BTreeSet;
use std::fmt;

use protege_owl::{
    Axiom, Class, ClassExpression, Entity, NamedIndividual, ObjectProperty, Ontology,
};
use serde::{Deserialize, Serialize};

/// A directed edge between two entities.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Edge {
    /// `sub` is a named subclass of `sup`.
    SubClassOf {
        /// Subclass.
        sub: Class,
        /// Superclass.
        sup: Class,
    },
    /// `individual` is an instance of `class`.
    InstanceOf {
        /// The instance.
        individual: NamedIndividual,
        /// Its type.
        class: Class,
    },
    /// `tail` is related to `head` through `property`.
    Relationship {
        /// Source entity.
        tail: Entity,
        /// Relating property.
        property: ObjectProperty,
        /// Target entity.
        head: Entity,
    },
}

impl Edge {
    /// Returns the source of the edge.
    #[must_use]
    pub fn tail(&self) -> Entity {
        match self {
            Edge::SubClassOf { sub, .. } => sub.clone().into(),
            Edge::InstanceOf { individual, .. } => individual.clone().into(),
            Edge::Relationship { tail, .. } => tail.clone(),
        }
    }

    /// Returns the target of the edge.
    #[must_use]
    pub fn head(&self) -> Entity {
        match self {
            Edge::SubClassOf { sup, .. } => sup.clone().into(),
            Edge::InstanceOf { class, .. } => class.clone().into(),
            Edge::Relationship { head, .. } => head.clone(),
        }
    }

    /// Returns the relating property of a relationship edge.
    #[must_use]
    pub fn property(&self) -> Option<&ObjectProperty> {
        match self {
            Edge::Relationship { property, .. } => Some(property),
            _ => None,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::SubClassOf { sub, sup } => write!(f, "{} -> {}", sub.iri(), sup.iri()),
            Edge::InstanceOf { individual, class } => {
                write!(f, "{} -: {}", individual.iri(), class.iri())
            }
            Edge::Relationship {
                tail,
                property,
                head,
            } => write!(f, "{} -[{}]-> {}", tail.iri(), property.iri(), head.iri()),
        }
    }
}

/// Computes the entity graph of `ontology`.
///
/// Named superclasses and existential restrictions on named fillers come
/// from `SubClassOf` axioms and from the conjuncts of class definitions.
/// Named class assertions give instance edges; object property assertions
/// between named individuals give relationships.
#[must_use]
pub fn edges(ontology: &Ontology) -> BTreeSet<Edge> {
    let mut edges = BTreeSet::new();
    for axiom in ontology.axioms() {
        match axiom {
            Axiom::SubClassOf { sub, sup } => {
                if let Some(sub) = sub.as_class() {
                    edges.extend(class_edge(sub, sup));
                }
            }
            Axiom::EquivalentClasses { classes } => {
                for named in classes.iter().filter_map(ClassExpression::as_class) {
                    for definition in classes.iter().filter(|ce| ce.is_anonymous()) {
                        for conjunct in definition.as_conjunct_set() {
                            edges.extend(class_edge(named, &conjunct));
                        }
                    }
                }
            }
            Axiom::ClassAssertion { class, individual } => {
                if let (Some(class), Some(individual)) = (class.as_class(), individual.as_named()) {
                    edges.insert(Edge::InstanceOf {
                        individual: individual.clone(),
                        class: class.clone(),
                    });
                }
            }
            Axiom::ObjectPropertyAssertion {
                property,
                subject,
                object,
            } => {
                if let (Some(property), Some(subject), Some(object)) =
                    (property.as_named(), subject.as_named(), object.as_named())
                {
                    edges.insert(Edge::Relationship {
                        tail: subject.clone().into(),
                        property: property.clone(),
                        head: object.clone().into(),
                    });
                }
            }
            _ => {}
        }
    }
    tracing::debug!(axioms = ontology.axiom_count(), edges = edges.len(), "computed entity graph");
    edges
}

fn class_edge(sub: &Class, sup: &ClassExpression) -> Option<Edge> {
    match sup {
        ClassExpression::Class(sup) => Some(Edge::SubClassOf {
            sub: sub.clone(),
            sup: sup.clone(),
        }),
        ClassExpression::ObjectSomeValuesFrom { property, filler } => {
            let (Some(property), Some(filler)) = (property.as_named(), filler.as_class()) else {
                return None;
            };
            Some(Edge::Relationship {
                tail: sub.clone().into(),
                property: property.clone(),
                head: filler.clone().into(),
            })
        }
        ClassExpression::ObjectHasValue { property, value } => {
            let (Some(property), Some(value)) = (property.as_named(), value.as_named()) else {
                return None;
            };
            Some(Edge::Relationship {
                tail: sub.clone().into(),
                property: property.clone(),
                head: value.clone().into(),
            })
        }
        _ => None,
    }
}
