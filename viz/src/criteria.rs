//! Edge criteria: predicates over entity graph edges.

use protege_owl::ObjectProperty;
use serde::{Deserialize, Serialize};

use crate::edge::Edge;

/// How the members of a composite criterion combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MultiMatchType {
    /// Every member must match.
    All,
    /// At least one member must match.
    Any,
}

/// A predicate over [`Edge`]s.
///
/// Documents carry the variant name in a `match` field:
///
/// ```
/// use protege_viz::EdgeCriteria;
///
/// let criteria: EdgeCriteria = serde_json::from_str(
///     r#"{"match":"NegationOf","negatedCriteria":{"match":"AnyInstanceOf"}}"#,
/// ).unwrap();
/// assert_eq!(criteria, EdgeCriteria::not(EdgeCriteria::AnyInstanceOf));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "match")]
pub enum EdgeCriteria {
    /// Matches every edge.
    AnyEdge,
    /// Matches subclass edges.
    AnySubClassOf,
    /// Matches instance edges.
    AnyInstanceOf,
    /// Matches relationship edges.
    AnyRelationship,
    /// Matches relationship edges through `property`.
    RelationshipPropertyEquals {
        /// The relating property.
        property: ObjectProperty,
    },
    /// Combines several criteria.
    CompositeEdgeCriteria {
        /// Combination rule.
        #[serde(rename = "matchType")]
        match_type: MultiMatchType,
        /// Members.
        criteria: Vec<EdgeCriteria>,
    },
    /// Matches the edges `negated_criteria` rejects.
    NegationOf {
        /// The criterion to negate.
        #[serde(rename = "negatedCriteria")]
        negated_criteria: Box<EdgeCriteria>,
    },
}

impl EdgeCriteria {
    /// A composite that matches when every member does. Empty matches
    /// everything.
    #[must_use]
    pub fn all(criteria: impl IntoIterator<Item = EdgeCriteria>) -> Self {
        EdgeCriteria::CompositeEdgeCriteria {
            match_type: MultiMatchType::All,
            criteria: criteria.into_iter().collect(),
        }
    }

    /// A composite that matches when some member does. Empty matches
    /// nothing.
    #[must_use]
    pub fn any(criteria: impl IntoIterator<Item = EdgeCriteria>) -> Self {
        EdgeCriteria::CompositeEdgeCriteria {
            match_type: MultiMatchType::Any,
            criteria: criteria.into_iter().collect(),
        }
    }

    /// The negation of `criteria`.
    #[must_use]
    pub fn not(criteria: EdgeCriteria) -> Self {
        EdgeCriteria::NegationOf {
            negated_criteria: Box::new(criteria),
        }
    }

    /// A criterion that matches no edge.
    #[must_use]
    pub fn none() -> Self {
        Self::any([])
    }

    /// Evaluates the criterion against `edge`.
    #[must_use]
    pub fn matches(&self, edge: &Edge) -> bool {
        match self {
            EdgeCriteria::AnyEdge => true,
            EdgeCriteria::AnySubClassOf => matches!(edge, Edge::SubClassOf { .. }),
            EdgeCriteria::AnyInstanceOf => matches!(edge, Edge::InstanceOf { .. }),
            EdgeCriteria::AnyRelationship => matches!(edge, Edge::Relationship { .. }),
            EdgeCriteria::RelationshipPropertyEquals { property } => {
                edge.property() == Some(property)
            }
            EdgeCriteria::CompositeEdgeCriteria {
                match_type: MultiMatchType::All,
                criteria,
            } => criteria.iter().all(|c| c.matches(edge)),
            EdgeCriteria::CompositeEdgeCriteria {
                match_type: MultiMatchType::Any,
                criteria,
            } => criteria.iter().any(|c| c.matches(edge)),
            EdgeCriteria::NegationOf { negated_criteria } => !negated_criteria.matches(edge),
        }
    }
}
