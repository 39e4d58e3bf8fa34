//! Class expressions, data ranges, and the individual and property
//! expressions they are built from.
//!
//! The grammar is closed: every OWL 2 construct this workspace understands
//! is a variant here, and consumers match on it exhaustively.

use std::collections::BTreeSet;

use crate::entity::{Class, DataProperty, Datatype, Entity, NamedIndividual, ObjectProperty};
use crate::literal::Literal;

/// An individual: either named or an anonymous node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Individual {
    /// A named individual.
    Named(NamedIndividual),
    /// An anonymous individual, identified by its node id.
    Anonymous(String),
}

impl Individual {
    /// Returns the named individual, or `None` for an anonymous one.
    #[must_use]
    pub fn as_named(&self) -> Option<&NamedIndividual> {
        match self {
            Individual::Named(i) => Some(i),
            Individual::Anonymous(_) => None,
        }
    }

    /// Returns `true` for anonymous individuals.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Individual::Anonymous(_))
    }

    /// Returns `true` if this is the named individual `entity`.
    #[must_use]
    pub fn is_entity(&self, entity: &Entity) -> bool {
        match (self, entity) {
            (Individual::Named(i), Entity::NamedIndividual(e)) => i == e,
            _ => false,
        }
    }
}

impl From<NamedIndividual> for Individual {
    fn from(individual: NamedIndividual) -> Self {
        Individual::Named(individual)
    }
}

/// An object property expression: a named property or the inverse of one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectPropertyExpression {
    /// A named object property.
    Named(ObjectProperty),
    /// `ObjectInverseOf(P)`; anonymous.
    Inverse(ObjectProperty),
}

impl ObjectPropertyExpression {
    /// Returns the named property, or `None` for an inverse expression.
    #[must_use]
    pub fn as_named(&self) -> Option<&ObjectProperty> {
        match self {
            ObjectPropertyExpression::Named(p) => Some(p),
            ObjectPropertyExpression::Inverse(_) => None,
        }
    }

    /// Returns `true` for inverse (anonymous) expressions.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, ObjectPropertyExpression::Inverse(_))
    }

    /// Returns the named property this expression is built on.
    #[must_use]
    pub fn named_property(&self) -> &ObjectProperty {
        match self {
            ObjectPropertyExpression::Named(p) | ObjectPropertyExpression::Inverse(p) => p,
        }
    }
}

impl From<ObjectProperty> for ObjectPropertyExpression {
    fn from(property: ObjectProperty) -> Self {
        ObjectPropertyExpression::Named(property)
    }
}

/// A data range.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataRange {
    /// A named datatype.
    Datatype(Datatype),
    /// `DataOneOf(l1 ... ln)`.
    DataOneOf(Vec<Literal>),
    /// `DataComplementOf(D)`.
    DataComplementOf(Box<DataRange>),
    /// `DataIntersectionOf(D1 ... Dn)`.
    DataIntersectionOf(Vec<DataRange>),
    /// `DataUnionOf(D1 ... Dn)`.
    DataUnionOf(Vec<DataRange>),
}

impl DataRange {
    /// Returns the datatype if this range is a named one.
    #[must_use]
    pub fn as_datatype(&self) -> Option<&Datatype> {
        match self {
            DataRange::Datatype(d) => Some(d),
            _ => None,
        }
    }

    pub(crate) fn collect_signature(&self, out: &mut BTreeSet<Entity>) {
        match self {
            DataRange::Datatype(d) => {
                out.insert(d.clone().into());
            }
            DataRange::DataOneOf(literals) => {
                for lit in literals {
                    out.insert(Datatype(lit.datatype.clone()).into());
                }
            }
            DataRange::DataComplementOf(range) => range.collect_signature(out),
            DataRange::DataIntersectionOf(ranges) | DataRange::DataUnionOf(ranges) => {
                for range in ranges {
                    range.collect_signature(out);
                }
            }
        }
    }
}

impl From<Datatype> for DataRange {
    fn from(datatype: Datatype) -> Self {
        DataRange::Datatype(datatype)
    }
}

/// An OWL 2 class expression.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassExpression {
    /// A named class.
    Class(Class),
    /// `ObjectIntersectionOf(C1 ... Cn)`.
    ObjectIntersectionOf(Vec<ClassExpression>),
    /// `ObjectUnionOf(C1 ... Cn)`.
    ObjectUnionOf(Vec<ClassExpression>),
    /// `ObjectComplementOf(C)`.
    ObjectComplementOf(Box<ClassExpression>),
    /// `ObjectOneOf(a1 ... an)`.
    ObjectOneOf(Vec<Individual>),
    /// `ObjectSomeValuesFrom(P C)`.
    ObjectSomeValuesFrom {
        /// Restricted property.
        property: ObjectPropertyExpression,
        /// Filler.
        filler: Box<ClassExpression>,
    },
    /// `ObjectAllValuesFrom(P C)`.
    ObjectAllValuesFrom {
        /// Restricted property.
        property: ObjectPropertyExpression,
        /// Filler.
        filler: Box<ClassExpression>,
    },
    /// `ObjectHasValue(P a)`.
    ObjectHasValue {
        /// Restricted property.
        property: ObjectPropertyExpression,
        /// Required value.
        value: Individual,
    },
    /// `ObjectMinCardinality(n P C)`.
    ObjectMinCardinality {
        /// Cardinality bound.
        cardinality: u32,
        /// Restricted property.
        property: ObjectPropertyExpression,
        /// Filler.
        filler: Box<ClassExpression>,
    },
    /// `ObjectMaxCardinality(n P C)`.
    ObjectMaxCardinality {
        /// Cardinality bound.
        cardinality: u32,
        /// Restricted property.
        property: ObjectPropertyExpression,
        /// Filler.
        filler: Box<ClassExpression>,
    },
    /// `ObjectExactCardinality(n P C)`.
    ObjectExactCardinality {
        /// Cardinality.
        cardinality: u32,
        /// Restricted property.
        property: ObjectPropertyExpression,
        /// Filler.
        filler: Box<ClassExpression>,
    },
    /// `DataSomeValuesFrom(R D)`.
    DataSomeValuesFrom {
        /// Restricted property.
        property: DataProperty,
        /// Data range.
        range: DataRange,
    },
    /// `DataAllValuesFrom(R D)`.
    DataAllValuesFrom {
        /// Restricted property.
        property: DataProperty,
        /// Data range.
        range: DataRange,
    },
    /// `DataHasValue(R l)`.
    DataHasValue {
        /// Restricted property.
        property: DataProperty,
        /// Required literal.
        value: Literal,
    },
}

impl ClassExpression {
    /// `ObjectSomeValuesFrom(property filler)` over a named property.
    #[must_use]
    pub fn some(property: ObjectProperty, filler: impl Into<ClassExpression>) -> Self {
        ClassExpression::ObjectSomeValuesFrom {
            property: property.into(),
            filler: Box::new(filler.into()),
        }
    }

    /// `ObjectHasValue(property value)` over a named property and individual.
    #[must_use]
    pub fn has_value(property: ObjectProperty, value: NamedIndividual) -> Self {
        ClassExpression::ObjectHasValue {
            property: property.into(),
            value: value.into(),
        }
    }

    /// `DataSomeValuesFrom(property datatype)`.
    #[must_use]
    pub fn data_some(property: DataProperty, datatype: Datatype) -> Self {
        ClassExpression::DataSomeValuesFrom {
            property,
            range: datatype.into(),
        }
    }

    /// `DataHasValue(property value)`.
    #[must_use]
    pub fn data_has_value(property: DataProperty, value: Literal) -> Self {
        ClassExpression::DataHasValue { property, value }
    }

    /// `ObjectIntersectionOf(operands)`.
    #[must_use]
    pub fn and(operands: impl IntoIterator<Item = ClassExpression>) -> Self {
        ClassExpression::ObjectIntersectionOf(operands.into_iter().collect())
    }

    /// Returns the class if this expression is a named one.
    #[must_use]
    pub fn as_class(&self) -> Option<&Class> {
        match self {
            ClassExpression::Class(c) => Some(c),
            _ => None,
        }
    }

    /// Returns `true` if this expression is exactly the named class `entity`.
    #[must_use]
    pub fn is_entity(&self, entity: &Entity) -> bool {
        match (self, entity) {
            (ClassExpression::Class(c), Entity::Class(e)) => c == e,
            _ => false,
        }
    }

    /// Returns `true` for anything other than a named class.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        !matches!(self, ClassExpression::Class(_))
    }

    /// Splits this expression into its conjuncts.
    ///
    /// Nested intersections are flattened; any other expression is its own
    /// single conjunct.
    ///
    /// ```
    /// use protege_owl::{Class, ClassExpression};
    ///
    /// let a = ClassExpression::from(Class::new("http://ex.org/A"));
    /// let b = ClassExpression::from(Class::new("http://ex.org/B"));
    /// let c = ClassExpression::from(Class::new("http://ex.org/C"));
    /// let nested = ClassExpression::and([a.clone(), ClassExpression::and([b.clone(), c.clone()])]);
    /// assert_eq!(nested.as_conjunct_set().len(), 3);
    /// assert_eq!(a.as_conjunct_set().len(), 1);
    /// ```
    #[must_use]
    pub fn as_conjunct_set(&self) -> BTreeSet<ClassExpression> {
        let mut out = BTreeSet::new();
        self.collect_conjuncts(&mut out);
        out
    }

    fn collect_conjuncts(&self, out: &mut BTreeSet<ClassExpression>) {
        match self {
            ClassExpression::ObjectIntersectionOf(operands) => {
                for op in operands {
                    op.collect_conjuncts(out);
                }
            }
            other => {
                out.insert(other.clone());
            }
        }
    }

    /// Returns the named entities mentioned by this expression.
    #[must_use]
    pub fn signature(&self) -> BTreeSet<Entity> {
        let mut out = BTreeSet::new();
        self.collect_signature(&mut out);
        out
    }

    pub(crate) fn collect_signature(&self, out: &mut BTreeSet<Entity>) {
        match self {
            ClassExpression::Class(c) => {
                out.insert(c.clone().into());
            }
            ClassExpression::ObjectIntersectionOf(ops) | ClassExpression::ObjectUnionOf(ops) => {
                for op in ops {
                    op.collect_signature(out);
                }
            }
            ClassExpression::ObjectComplementOf(op) => op.collect_signature(out),
            ClassExpression::ObjectOneOf(individuals) => {
                for ind in individuals {
                    if let Some(named) = ind.as_named() {
                        out.insert(named.clone().into());
                    }
                }
            }
            ClassExpression::ObjectSomeValuesFrom { property, filler }
            | ClassExpression::ObjectAllValuesFrom { property, filler }
            | ClassExpression::ObjectMinCardinality {
                property, filler, ..
            }
            | ClassExpression::ObjectMaxCardinality {
                property, filler, ..
            }
            | ClassExpression::ObjectExactCardinality {
                property, filler, ..
            } => {
                out.insert(property.named_property().clone().into());
                filler.collect_signature(out);
            }
            ClassExpression::ObjectHasValue { property, value } => {
                out.insert(property.named_property().clone().into());
                if let Some(named) = value.as_named() {
                    out.insert(named.clone().into());
                }
            }
            ClassExpression::DataSomeValuesFrom { property, range }
            | ClassExpression::DataAllValuesFrom { property, range } => {
                out.insert(property.clone().into());
                range.collect_signature(out);
            }
            ClassExpression::DataHasValue { property, value } => {
                out.insert(property.clone().into());
                out.insert(Datatype(value.datatype.clone()).into());
            }
        }
    }
}

impl From<Class> for ClassExpression {
    fn from(class: Class) -> Self {
        ClassExpression::Class(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab;

    fn class(name: &str) -> ClassExpression {
        Class::new(format!("http://ex.org/{name}")).into()
    }

    #[test]
    fn conjuncts_of_named_class_is_itself() {
        let a = class("A");
        let conj = a.as_conjunct_set();
        assert_eq!(conj.len(), 1);
        assert!(conj.contains(&a));
    }

    #[test]
    fn conjuncts_flatten_nested_intersections_and_dedup() {
        let a = class("A");
        let r = ObjectProperty::new("http://ex.org/r");
        let some = ClassExpression::some(r, class("B"));
        let nested = ClassExpression::and([
            a.clone(),
            ClassExpression::and([a.clone(), some.clone()]),
        ]);
        let conj = nested.as_conjunct_set();
        assert_eq!(conj.len(), 2);
        assert!(conj.contains(&a));
        assert!(conj.contains(&some));
    }

    #[test]
    fn union_is_not_split() {
        let u = ClassExpression::ObjectUnionOf(vec![class("A"), class("B")]);
        assert_eq!(u.as_conjunct_set().len(), 1);
    }

    #[test]
    fn signature_collects_properties_fillers_and_datatypes() {
        let r = ObjectProperty::new("http://ex.org/r");
        let d = DataProperty::new("http://ex.org/d");
        let ce = ClassExpression::and([
            ClassExpression::some(r.clone(), class("B")),
            ClassExpression::data_has_value(d.clone(), Literal::typed("1", vocab::XSD_INTEGER)),
        ]);
        let sig = ce.signature();
        assert!(sig.contains(&Entity::from(r)));
        assert!(sig.contains(&Entity::from(d)));
        assert!(sig.contains(&Entity::from(Class::new("http://ex.org/B"))));
        assert!(sig.contains(&Entity::from(Datatype::new(vocab::XSD_INTEGER))));
    }

    #[test]
    fn inverse_property_is_anonymous() {
        let p = ObjectPropertyExpression::Inverse(ObjectProperty::new("http://ex.org/r"));
        assert!(p.is_anonymous());
        assert!(p.as_named().is_none());
        assert_eq!(p.named_property().iri().as_str(), "http://ex.org/r");
    }
}
