//! Settings lookups through the document repository, in memory and on disk.

use protege_viz::{
    DocumentCollection, DocumentSettingsRepository, EdgeCriteria, EntityGraphFilter,
    EntityGraphSettings, EntityGraphSettingsRepository, ProjectId,
    ProjectUserEntityGraphSettings, RepositoryError, UserId,
};

fn custom(rank_spacing: f64) -> EntityGraphSettings {
    EntityGraphSettings {
        filters: vec![EntityGraphFilter {
            name: "No instances".to_owned(),
            exclusion_criteria: EdgeCriteria::AnyInstanceOf,
            ..EntityGraphFilter::default()
        }],
        rank_spacing,
    }
}

fn record(project: &str, user: Option<&str>, rank_spacing: f64) -> ProjectUserEntityGraphSettings {
    ProjectUserEntityGraphSettings {
        project_id: ProjectId::new(project),
        user_id: user.map(|u| UserId::new(u)),
        settings: custom(rank_spacing),
    }
}

fn check<T>(result: Result<T, RepositoryError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("repository call failed: {e}"),
    }
}

#[test]
fn missing_records_fall_back_to_built_in_default() {
    let repo = DocumentSettingsRepository::in_memory();
    let project = ProjectId::new("p");
    let found = check(repo.settings_for_user_or_project_default(&project, Some(&UserId::new("u"))));
    assert_eq!(found, ProjectUserEntityGraphSettings::default_for(project, None));
}

#[test]
fn user_record_wins_over_project_default() {
    let repo = DocumentSettingsRepository::in_memory();
    check(repo.save_settings(&record("p", None, 2.0)));
    check(repo.save_settings(&record("p", Some("alice"), 3.0)));
    let project = ProjectId::new("p");

    let alice = check(repo.settings_for_user_or_project_default(&project, Some(&UserId::new("alice"))));
    assert_eq!(alice.settings.rank_spacing, 3.0);

    let bob = check(repo.settings_for_user_or_project_default(&project, Some(&UserId::new("bob"))));
    assert!(bob.is_project_default());
    assert_eq!(bob.settings.rank_spacing, 2.0);

    let default = check(repo.project_default_settings(&project));
    assert_eq!(default, record("p", None, 2.0));
}

#[test]
fn saving_twice_replaces_the_record() {
    let repo = DocumentSettingsRepository::in_memory();
    check(repo.save_settings(&record("p", Some("alice"), 3.0)));
    check(repo.save_settings(&record("p", Some("alice"), 4.0)));
    check(repo.save_settings(&record("q", Some("alice"), 5.0)));
    assert_eq!(repo.collection().len(), 2);
    let found = check(repo.settings_for_user_or_project_default(
        &ProjectId::new("p"),
        Some(&UserId::new("alice")),
    ));
    assert_eq!(found.settings.rank_spacing, 4.0);
}

#[test]
fn file_repository_persists_across_reopen() {
    let dir = check(tempfile::tempdir().map_err(|source| RepositoryError::Io {
        path: std::env::temp_dir(),
        source,
    }));
    {
        let repo = check(DocumentSettingsRepository::in_directory(dir.path()));
        check(repo.ensure_indexes());
        check(repo.save_settings(&record("p", Some("alice"), 3.0)));
        assert!(repo.collection().path().exists());
    }
    let reopened = check(DocumentSettingsRepository::in_directory(dir.path()));
    let found = check(reopened.settings_for_user_or_project_default(
        &ProjectId::new("p"),
        Some(&UserId::new("alice")),
    ));
    assert_eq!(found, record("p", Some("alice"), 3.0));
}

#[test]
fn malformed_collection_file_is_rejected() {
    let dir = check(tempfile::tempdir().map_err(|source| RepositoryError::Io {
        path: std::env::temp_dir(),
        source,
    }));
    let file = dir.path().join("EntityGraphSettings.json");
    check(std::fs::write(&file, r#"{"not": "an array"}"#).map_err(|source| RepositoryError::Io {
        path: file.clone(),
        source,
    }));
    assert!(matches!(
        DocumentSettingsRepository::in_directory(dir.path()),
        Err(RepositoryError::Malformed { .. })
    ));
}

#[test]
fn failed_write_leaves_the_collection_unchanged() {
    let dir = check(tempfile::tempdir().map_err(|source| RepositoryError::Io {
        path: std::env::temp_dir(),
        source,
    }));
    let store = dir.path().join("store");
    let repo = check(DocumentSettingsRepository::in_directory(&store));
    check(std::fs::write(&store, "not a directory").map_err(|source| RepositoryError::Io {
        path: store.clone(),
        source,
    }));

    let saved = repo.save_settings(&record("p", Some("alice"), 3.0));
    assert!(matches!(saved, Err(RepositoryError::Io { .. })));
    assert!(repo.collection().is_empty());
    let found = check(repo.settings_for_user_or_project_default(
        &ProjectId::new("p"),
        Some(&UserId::new("alice")),
    ));
    assert_eq!(found, ProjectUserEntityGraphSettings::default_for(ProjectId::new("p"), None));
}
