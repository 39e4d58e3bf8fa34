//! Axioms: the logical statements an ontology is made of.

use std::collections::BTreeSet;

use crate::annotation::{AnnotationSubject, AnnotationValue};
use crate::entity::{
    AnnotationProperty, DataProperty, Datatype, Entity, NamedIndividual, ObjectProperty,
};
use crate::expression::{ClassExpression, DataRange, Individual, ObjectPropertyExpression};
use crate::iri::Iri;
use crate::literal::Literal;

/// An OWL 2 axiom.
///
/// Axioms are immutable values; two axioms are equal when they are
/// structurally identical. Use [`Axiom::canonical`] to compare axioms up to
/// the logical equivalences this workspace relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axiom {
    /// `Declaration(E)`.
    Declaration {
        /// Declared entity.
        entity: Entity,
    },
    /// `SubClassOf(C D)`.
    SubClassOf {
        /// Subclass expression.
        sub: ClassExpression,
        /// Superclass expression.
        sup: ClassExpression,
    },
    /// `EquivalentClasses(C1 ... Cn)`.
    EquivalentClasses {
        /// Mutually equivalent expressions.
        classes: Vec<ClassExpression>,
    },
    /// `DisjointClasses(C1 ... Cn)`.
    DisjointClasses {
        /// Pairwise disjoint expressions.
        classes: Vec<ClassExpression>,
    },
    /// `ClassAssertion(C a)`.
    ClassAssertion {
        /// Asserted type.
        class: ClassExpression,
        /// Typed individual.
        individual: Individual,
    },
    /// `ObjectPropertyAssertion(P a b)`.
    ObjectPropertyAssertion {
        /// Asserted property.
        property: ObjectPropertyExpression,
        /// Source individual.
        subject: Individual,
        /// Target individual.
        object: Individual,
    },
    /// `NegativeObjectPropertyAssertion(P a b)`.
    NegativeObjectPropertyAssertion {
        /// Denied property.
        property: ObjectPropertyExpression,
        /// Source individual.
        subject: Individual,
        /// Target individual.
        object: Individual,
    },
    /// `DataPropertyAssertion(R a l)`.
    DataPropertyAssertion {
        /// Asserted property.
        property: DataProperty,
        /// Source individual.
        subject: Individual,
        /// Target literal.
        object: Literal,
    },
    /// `AnnotationAssertion(P s v)`.
    AnnotationAssertion {
        /// Annotation property.
        property: AnnotationProperty,
        /// Annotated subject.
        subject: AnnotationSubject,
        /// Annotation value.
        value: AnnotationValue,
    },
    /// `SubObjectPropertyOf(P Q)`.
    SubObjectPropertyOf {
        /// Sub-property.
        sub: ObjectPropertyExpression,
        /// Super-property.
        sup: ObjectPropertyExpression,
    },
    /// `ObjectPropertyDomain(P C)`.
    ObjectPropertyDomain {
        /// Property.
        property: ObjectPropertyExpression,
        /// Domain.
        domain: ClassExpression,
    },
    /// `ObjectPropertyRange(P C)`.
    ObjectPropertyRange {
        /// Property.
        property: ObjectPropertyExpression,
        /// Range.
        range: ClassExpression,
    },
    /// `DataPropertyDomain(R C)`.
    DataPropertyDomain {
        /// Property.
        property: DataProperty,
        /// Domain.
        domain: ClassExpression,
    },
    /// `DataPropertyRange(R D)`.
    DataPropertyRange {
        /// Property.
        property: DataProperty,
        /// Range.
        range: DataRange,
    },
}

impl Axiom {
    /// `Declaration(entity)`.
    #[must_use]
    pub fn declaration(entity: impl Into<Entity>) -> Self {
        Axiom::Declaration {
            entity: entity.into(),
        }
    }

    /// `SubClassOf(sub sup)`.
    #[must_use]
    pub fn sub_class_of(sub: impl Into<ClassExpression>, sup: impl Into<ClassExpression>) -> Self {
        Axiom::SubClassOf {
            sub: sub.into(),
            sup: sup.into(),
        }
    }

    /// `EquivalentClasses(classes)`.
    #[must_use]
    pub fn equivalent_classes(classes: impl IntoIterator<Item = ClassExpression>) -> Self {
        Axiom::EquivalentClasses {
            classes: classes.into_iter().collect(),
        }
    }

    /// `ClassAssertion(class individual)`.
    #[must_use]
    pub fn class_assertion(
        class: impl Into<ClassExpression>,
        individual: impl Into<Individual>,
    ) -> Self {
        Axiom::ClassAssertion {
            class: class.into(),
            individual: individual.into(),
        }
    }

    /// `ObjectPropertyAssertion(property subject object)` over named terms.
    #[must_use]
    pub fn object_property_assertion(
        property: ObjectProperty,
        subject: NamedIndividual,
        object: NamedIndividual,
    ) -> Self {
        Axiom::ObjectPropertyAssertion {
            property: property.into(),
            subject: subject.into(),
            object: object.into(),
        }
    }

    /// `DataPropertyAssertion(property subject object)`.
    #[must_use]
    pub fn data_property_assertion(
        property: DataProperty,
        subject: impl Into<Individual>,
        object: Literal,
    ) -> Self {
        Axiom::DataPropertyAssertion {
            property,
            subject: subject.into(),
            object,
        }
    }

    /// `AnnotationAssertion(property subject value)` on an IRI subject.
    #[must_use]
    pub fn annotation_assertion(
        property: AnnotationProperty,
        subject: Iri,
        value: impl Into<AnnotationValue>,
    ) -> Self {
        Axiom::AnnotationAssertion {
            property,
            subject: subject.into(),
            value: value.into(),
        }
    }

    /// Returns the OWL 2 functional-syntax keyword of this axiom's shape.
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            Axiom::Declaration { .. } => "Declaration",
            Axiom::SubClassOf { .. } => "SubClassOf",
            Axiom::EquivalentClasses { .. } => "EquivalentClasses",
            Axiom::DisjointClasses { .. } => "DisjointClasses",
            Axiom::ClassAssertion { .. } => "ClassAssertion",
            Axiom::ObjectPropertyAssertion { .. } => "ObjectPropertyAssertion",
            Axiom::NegativeObjectPropertyAssertion { .. } => "NegativeObjectPropertyAssertion",
            Axiom::DataPropertyAssertion { .. } => "DataPropertyAssertion",
            Axiom::AnnotationAssertion { .. } => "AnnotationAssertion",
            Axiom::SubObjectPropertyOf { .. } => "SubObjectPropertyOf",
            Axiom::ObjectPropertyDomain { .. } => "ObjectPropertyDomain",
            Axiom::ObjectPropertyRange { .. } => "ObjectPropertyRange",
            Axiom::DataPropertyDomain { .. } => "DataPropertyDomain",
            Axiom::DataPropertyRange { .. } => "DataPropertyRange",
        }
    }

    /// Returns `true` for declaration axioms.
    #[must_use]
    pub fn is_declaration(&self) -> bool {
        matches!(self, Axiom::Declaration { .. })
    }

    /// Returns the named entities this axiom mentions.
    ///
    /// As in OWL 2, the subject and IRI value of an annotation assertion are
    /// plain IRIs and are not part of the signature; see [`Axiom::iris`].
    #[must_use]
    pub fn signature(&self) -> BTreeSet<Entity> {
        let mut out = BTreeSet::new();
        match self {
            Axiom::Declaration { entity } => {
                out.insert(entity.clone());
            }
            Axiom::SubClassOf { sub, sup } => {
                sub.collect_signature(&mut out);
                sup.collect_signature(&mut out);
            }
            Axiom::EquivalentClasses { classes } | Axiom::DisjointClasses { classes } => {
                for ce in classes {
                    ce.collect_signature(&mut out);
                }
            }
            Axiom::ClassAssertion { class, individual: ind } => {
                class.collect_signature(&mut out);
                insert_named(ind, &mut out);
            }
            Axiom::ObjectPropertyAssertion {
                property,
                subject,
                object,
            }
            | Axiom::NegativeObjectPropertyAssertion {
                property,
                subject,
                object,
            } => {
                out.insert(property.named_property().clone().into());
                insert_named(subject, &mut out);
                insert_named(object, &mut out);
            }
            Axiom::DataPropertyAssertion {
                property,
                subject,
                object,
            } => {
                out.insert(property.clone().into());
                insert_named(subject, &mut out);
                out.insert(Datatype(object.datatype.clone()).into());
            }
            Axiom::AnnotationAssertion {
                property, value, ..
            } => {
                out.insert(property.clone().into());
                if let AnnotationValue::Literal(lit) = value {
                    out.insert(Datatype(lit.datatype.clone()).into());
                }
            }
            Axiom::SubObjectPropertyOf { sub, sup } => {
                out.insert(sub.named_property().clone().into());
                out.insert(sup.named_property().clone().into());
            }
            Axiom::ObjectPropertyDomain {
                property,
                domain: ce,
            }
            | Axiom::ObjectPropertyRange { property, range: ce } => {
                out.insert(property.named_property().clone().into());
                ce.collect_signature(&mut out);
            }
            Axiom::DataPropertyDomain { property, domain } => {
                out.insert(property.clone().into());
                domain.collect_signature(&mut out);
            }
            Axiom::DataPropertyRange { property, range } => {
                out.insert(property.clone().into());
                range.collect_signature(&mut out);
            }
        }
        out
    }

    /// Returns every IRI this axiom mentions: the signature plus the IRI
    /// subject and IRI value of annotation assertions.
    #[must_use]
    pub fn iris(&self) -> BTreeSet<Iri> {
        let mut out: BTreeSet<Iri> = self.signature().iter().map(|e| e.iri().clone()).collect();
        if let Axiom::AnnotationAssertion { subject, value, .. } = self {
            if let Some(iri) = subject.as_iri() {
                out.insert(iri.clone());
            }
            if let Some(iri) = value.as_iri() {
                out.insert(iri.clone());
            }
        }
        out
    }

    /// Maps this axiom onto a canonical representative of its logical
    /// equivalence class.
    ///
    /// - `ClassAssertion(ObjectHasValue(P b) a)` becomes
    ///   `ObjectPropertyAssertion(P a b)` when `P` is named.
    /// - `ClassAssertion(DataHasValue(R l) a)` becomes
    ///   `DataPropertyAssertion(R a l)`.
    /// - The operands of n-ary class axioms are sorted and deduplicated.
    ///
    /// All other axioms are returned unchanged.
    #[must_use]
    pub fn canonical(&self) -> Axiom {
        match self {
            Axiom::ClassAssertion {
                class: ClassExpression::ObjectHasValue { property, value },
                individual,
            } if !property.is_anonymous() => Axiom::ObjectPropertyAssertion {
                property: property.clone(),
                subject: individual.clone(),
                object: value.clone(),
            },
            Axiom::ClassAssertion {
                class: ClassExpression::DataHasValue { property, value },
                individual,
            } => Axiom::DataPropertyAssertion {
                property: property.clone(),
                subject: individual.clone(),
                object: value.clone(),
            },
            Axiom::EquivalentClasses { classes } => Axiom::EquivalentClasses {
                classes: sorted_operands(classes),
            },
            Axiom::DisjointClasses { classes } => Axiom::DisjointClasses {
                classes: sorted_operands(classes),
            },
            other => other.clone(),
        }
    }

    /// Returns `true` if both axioms have the same canonical form.
    #[must_use]
    pub fn is_equivalent_to(&self, other: &Axiom) -> bool {
        self.canonical() == other.canonical()
    }
}

fn insert_named(individual: &Individual, out: &mut BTreeSet<Entity>) {
    if let Some(named) = individual.as_named() {
        out.insert(named.clone().into());
    }
}

fn sorted_operands(classes: &[ClassExpression]) -> Vec<ClassExpression> {
    classes
        .iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
