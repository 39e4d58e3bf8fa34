//! Entity graph settings: named edge filters and layout spacing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::criteria::EdgeCriteria;
use crate::edge::Edge;

/// Identifies a project.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

/// Identifies a user by user name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl ProjectId {
    /// Wraps `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl UserId {
    /// Wraps a user name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the user name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named filter over graph edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityGraphFilter {
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Edges the filter admits.
    pub inclusion_criteria: EdgeCriteria,
    /// Edges the filter rejects even when included.
    pub exclusion_criteria: EdgeCriteria,
    /// Inactive filters admit everything.
    pub active: bool,
}

impl EntityGraphFilter {
    /// Returns `true` if `edge` is included and not excluded.
    #[must_use]
    pub fn admits(&self, edge: &Edge) -> bool {
        self.inclusion_criteria.matches(edge) && !self.exclusion_criteria.matches(edge)
    }
}

impl Default for EntityGraphFilter {
    fn default() -> Self {
        Self {
            name: "All edges".to_owned(),
            description: "Shows every edge".to_owned(),
            inclusion_criteria: EdgeCriteria::AnyEdge,
            exclusion_criteria: EdgeCriteria::none(),
            active: true,
        }
    }
}

/// The filters and layout of one entity graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityGraphSettings {
    /// Edge filters.
    pub filters: Vec<EntityGraphFilter>,
    /// Distance between ranks in the layout.
    pub rank_spacing: f64,
}

impl EntityGraphSettings {
    /// Spacing used when none is configured.
    pub const DEFAULT_RANK_SPACING: f64 = 1.0;

    /// Returns `true` if every active filter admits `edge`.
    #[must_use]
    pub fn passes(&self, edge: &Edge) -> bool {
        self.filters
            .iter()
            .filter(|f| f.active)
            .all(|f| f.admits(edge))
    }

    /// Keeps the edges that pass every active filter.
    pub fn filter_edges<'a>(
        &'a self,
        edges: impl IntoIterator<Item = &'a Edge> + 'a,
    ) -> impl Iterator<Item = &'a Edge> + 'a {
        edges.into_iter().filter(|edge| self.passes(edge))
    }

    /// Returns the active filters.
    pub fn active_filters(&self) -> impl Iterator<Item = &EntityGraphFilter> {
        self.filters.iter().filter(|f| f.active)
    }
}

impl Default for EntityGraphSettings {
    fn default() -> Self {
        Self {
            filters: vec![EntityGraphFilter::default()],
            rank_spacing: Self::DEFAULT_RANK_SPACING,
        }
    }
}

/// Graph settings owned by a project, or by one user within a project.
///
/// A record without a user is the project default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUserEntityGraphSettings {
    /// Owning project.
    pub project_id: ProjectId,
    /// Owning user; `None` for the project default.
    pub user_id: Option<UserId>,
    /// The settings.
    pub settings: EntityGraphSettings,
}

impl ProjectUserEntityGraphSettings {
    /// Field name of the project in stored documents.
    pub const PROJECT_ID: &'static str = "projectId";
    /// Field name of the user in stored documents.
    pub const USER_ID: &'static str = "userId";

    /// The built-in settings for `project_id` and `user_id`.
    #[must_use]
    pub fn default_for(project_id: ProjectId, user_id: Option<UserId>) -> Self {
        Self {
            project_id,
            user_id,
            settings: EntityGraphSettings::default(),
        }
    }

    /// Returns `true` if this is a project default record.
    #[must_use]
    pub fn is_project_default(&self) -> bool {
        self.user_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protege_owl::{Class, NamedIndividual};

    fn sub_class() -> Edge {
        Edge::SubClassOf {
            sub: Class::new("http://ex.org/A"),
            sup: Class::new("http://ex.org/B"),
        }
    }

    fn instance() -> Edge {
        Edge::InstanceOf {
            individual: NamedIndividual::new("http://ex.org/a"),
            class: Class::new("http://ex.org/A"),
        }
    }

    #[test]
    fn default_settings_pass_everything() {
        let settings = EntityGraphSettings::default();
        assert!(settings.passes(&sub_class()));
        assert!(settings.passes(&instance()));
        assert_eq!(settings.active_filters().count(), 1);
        assert!((settings.rank_spacing - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn exclusion_overrides_inclusion() {
        let settings = EntityGraphSettings {
            filters: vec![EntityGraphFilter {
                name: "Classes only".to_owned(),
                exclusion_criteria: EdgeCriteria::AnyInstanceOf,
                ..EntityGraphFilter::default()
            }],
            rank_spacing: 2.0,
        };
        let edges = [sub_class(), instance()];
        let kept: Vec<&Edge> = settings.filter_edges(&edges).collect();
        assert_eq!(kept, vec![&edges[0]]);
    }

    #[test]
    fn inactive_filters_are_ignored() {
        let settings = EntityGraphSettings {
            filters: vec![EntityGraphFilter {
                inclusion_criteria: EdgeCriteria::none(),
                active: false,
                ..EntityGraphFilter::default()
            }],
            rank_spacing: 1.0,
        };
        assert!(settings.passes(&sub_class()));
    }

    #[test]
    fn project_default_serializes_null_user() {
        let record = ProjectUserEntityGraphSettings::default_for(ProjectId::new("p1"), None);
        let value = serde_json::to_value(&record).unwrap_or_default();
        assert_eq!(value[ProjectUserEntityGraphSettings::PROJECT_ID], "p1");
        assert!(value[ProjectUserEntityGraphSettings::USER_ID].is_null());
        assert_eq!(value["settings"]["rankSpacing"], 1.0);
        assert!(record.is_project_default());
    }
}
