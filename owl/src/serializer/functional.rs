//! OWL 2 functional-syntax serializer.
//!
//! Renders expressions, axioms and whole ontologies with full IRIs. The
//! [`Display`](std::fmt::Display) impls of the model types delegate here, so
//! `axiom.to_string()` yields the functional-syntax form.

use std::fmt::{self, Display, Formatter, Write};

use crate::annotation::{AnnotationSubject, AnnotationValue};
use crate::axiom::Axiom;
use crate::expression::{ClassExpression, DataRange, Individual, ObjectPropertyExpression};
use crate::literal::Literal;
use crate::ontology::Ontology;

/// Serializes a complete ontology to an OWL 2 functional-syntax document.
///
/// Axioms are written in the ontology's structural order, one per line.
#[must_use]
pub fn to_functional(ontology: &Ontology) -> String {
    let mut out = String::with_capacity(64 * ontology.axiom_count() + 64);
    out.push_str("Ontology(");
    if let Some(iri) = &ontology.iri {
        let _ = write!(out, "<{iri}>");
    }
    out.push('\n');
    for axiom in ontology.axioms() {
        let _ = writeln!(out, "  {axiom}");
    }
    out.push_str(")\n");
    out
}

fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_quoted(f: &mut Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            other => f.write_char(other)?,
        }
    }
    f.write_char('"')
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_quoted(f, &self.lexical)?;
        if let Some(lang) = &self.lang {
            write!(f, "@{lang}")
        } else if self.is_plain_string() {
            Ok(())
        } else {
            write!(f, "^^<{}>", self.datatype)
        }
    }
}

impl Display for Individual {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Individual::Named(i) => write!(f, "<{}>", i.iri()),
            Individual::Anonymous(node) => write!(f, "_:{node}"),
        }
    }
}

impl Display for ObjectPropertyExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ObjectPropertyExpression::Named(p) => write!(f, "<{}>", p.iri()),
            ObjectPropertyExpression::Inverse(p) => write!(f, "ObjectInverseOf(<{}>)", p.iri()),
        }
    }
}

impl Display for DataRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DataRange::Datatype(d) => write!(f, "<{}>", d.iri()),
            DataRange::DataOneOf(literals) => {
                f.write_str("DataOneOf(")?;
                write_list(f, literals)?;
                f.write_char(')')
            }
            DataRange::DataComplementOf(range) => write!(f, "DataComplementOf({range})"),
            DataRange::DataIntersectionOf(ranges) => {
                f.write_str("DataIntersectionOf(")?;
                write_list(f, ranges)?;
                f.write_char(')')
            }
            DataRange::DataUnionOf(ranges) => {
                f.write_str("DataUnionOf(")?;
                write_list(f, ranges)?;
                f.write_char(')')
            }
        }
    }
}

impl Display for ClassExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ClassExpression::Class(c) => write!(f, "<{}>", c.iri()),
            ClassExpression::ObjectIntersectionOf(ops) => {
                f.write_str("ObjectIntersectionOf(")?;
                write_list(f, ops)?;
                f.write_char(')')
            }
            ClassExpression::ObjectUnionOf(ops) => {
                f.write_str("ObjectUnionOf(")?;
                write_list(f, ops)?;
                f.write_char(')')
            }
            ClassExpression::ObjectComplementOf(op) => write!(f, "ObjectComplementOf({op})"),
            ClassExpression::ObjectOneOf(individuals) => {
                f.write_str("ObjectOneOf(")?;
                write_list(f, individuals)?;
                f.write_char(')')
            }
            ClassExpression::ObjectSomeValuesFrom { property, filler } => {
                write!(f, "ObjectSomeValuesFrom({property} {filler})")
            }
            ClassExpression::ObjectAllValuesFrom { property, filler } => {
                write!(f, "ObjectAllValuesFrom({property} {filler})")
            }
            ClassExpression::ObjectHasValue { property, value } => {
                write!(f, "ObjectHasValue({property} {value})")
            }
            ClassExpression::ObjectMinCardinality {
                cardinality,
                property,
                filler,
            } => write!(f, "ObjectMinCardinality({cardinality} {property} {filler})"),
            ClassExpression::ObjectMaxCardinality {
                cardinality,
                property,
                filler,
            } => write!(f, "ObjectMaxCardinality({cardinality} {property} {filler})"),
            ClassExpression::ObjectExactCardinality {
                cardinality,
                property,
                filler,
            } => write!(f, "ObjectExactCardinality({cardinality} {property} {filler})"),
            ClassExpression::DataSomeValuesFrom { property, range } => {
                write!(f, "DataSomeValuesFrom(<{}> {range})", property.iri())
            }
            ClassExpression::DataAllValuesFrom { property, range } => {
                write!(f, "DataAllValuesFrom(<{}> {range})", property.iri())
            }
            ClassExpression::DataHasValue { property, value } => {
                write!(f, "DataHasValue(<{}> {value})", property.iri())
            }
        }
    }
}

impl Display for AnnotationSubject {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationSubject::Iri(iri) => write!(f, "<{iri}>"),
            AnnotationSubject::Anonymous(node) => write!(f, "_:{node}"),
        }
    }
}

impl Display for AnnotationValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationValue::Iri(iri) => write!(f, "<{iri}>"),
            AnnotationValue::Literal(lit) => write!(f, "{lit}"),
            AnnotationValue::Anonymous(node) => write!(f, "_:{node}"),
        }
    }
}

impl Display for Axiom {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())?;
        f.write_char('(')?;
        match self {
            Axiom::Declaration { entity } => write!(f, "{entity}")?,
            Axiom::SubClassOf { sub, sup } => write!(f, "{sub} {sup}")?,
            Axiom::EquivalentClasses { classes } | Axiom::DisjointClasses { classes } => {
                write_list(f, classes)?;
            }
            Axiom::ClassAssertion { class, individual } => write!(f, "{class} {individual}")?,
            Axiom::ObjectPropertyAssertion {
                property,
                subject,
                object,
            }
            | Axiom::NegativeObjectPropertyAssertion {
                property,
                subject,
                object,
            } => write!(f, "{property} {subject} {object}")?,
            Axiom::DataPropertyAssertion {
                property,
                subject,
                object,
            } => write!(f, "<{}> {subject} {object}", property.iri())?,
            Axiom::AnnotationAssertion {
                property,
                subject,
                value,
            } => write!(f, "<{}> {subject} {value}", property.iri())?,
            Axiom::SubObjectPropertyOf { sub, sup } => write!(f, "{sub} {sup}")?,
            Axiom::ObjectPropertyDomain {
                property,
                domain: ce,
            }
            | Axiom::ObjectPropertyRange { property, range: ce } => {
                write!(f, "{property} {ce}")?;
            }
            Axiom::DataPropertyDomain { property, domain } => {
                write!(f, "<{}> {domain}", property.iri())?;
            }
            Axiom::DataPropertyRange { property, range } => {
                write!(f, "<{}> {range}", property.iri())?;
            }
        }
        f.write_char(')')
    }
}
