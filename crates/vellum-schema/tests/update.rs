//! End-to-end update pipeline scenarios.

use vellum_schema::{
    EntityTypeUpdate, FieldKindUpdate, FieldUpdate, MigrationAction, SchemaSpecification,
    SchemaSpecificationUpdate, VersionMigration, update, validate,
};

fn string_field_update(name: &str, required: Option<bool>) -> FieldUpdate {
    FieldUpdate {
        name: name.to_string(),
        list: None,
        required,
        admin_only: None,
        is_name: None,
        kind: FieldKindUpdate::String {
            multiline: None,
            match_pattern: None,
            values: None,
            index: None,
        },
    }
}

fn article_update(field: FieldUpdate) -> SchemaSpecificationUpdate {
    SchemaSpecificationUpdate {
        entity_types: vec![EntityTypeUpdate {
            name: "Article".into(),
            admin_only: None,
            publishable: None,
            auth_key_pattern: None,
            name_field: None,
            fields: vec![field],
        }],
        ..SchemaSpecificationUpdate::default()
    }
}

#[test]
fn create_then_rename_field_through_a_migration() {
    // update 1: create Article with a required title field
    let v0 = SchemaSpecification::new();
    let v1 = update(&v0, article_update(string_field_update("title", Some(true))))
        .expect("initial update should be accepted");
    assert_eq!(v1.version, 1);

    // update 2: rename title to headline, alongside the field update
    let v2 = update(
        &v1,
        SchemaSpecificationUpdate {
            migrations: vec![VersionMigration {
                version: 2,
                actions: vec![MigrationAction::RenameField {
                    owner_type: "Article".into(),
                    field: "title".into(),
                    new_name: "headline".into(),
                }],
            }],
            ..article_update(string_field_update("title", None))
        },
    )
    .expect("rename update should be accepted");

    assert_eq!(v2.version, 2);
    let article = v2.get_entity_type("Article").expect("Article should exist");
    assert_eq!(article.fields[0].name, "headline");
    assert!(article.fields[0].required, "merge must preserve required");
    validate(&v2).expect("result should validate standalone");

    // the migration is recorded in the log, newest first
    assert_eq!(v2.migrations[0].version, 2);
}

#[test]
fn noop_update_returns_the_spec_unchanged() {
    let v0 = SchemaSpecification::new();
    let v1 = update(&v0, article_update(string_field_update("title", Some(true))))
        .expect("initial update should be accepted");

    let again = update(&v1, article_update(string_field_update("title", Some(true))))
        .expect("identical update should be accepted");
    assert_eq!(again, v1);
    assert_eq!(again.version, 1);
}

#[test]
fn version_rises_by_one_regardless_of_update_size() {
    let v0 = SchemaSpecification::new();

    let big = SchemaSpecificationUpdate {
        entity_types: vec![
            EntityTypeUpdate {
                name: "Article".into(),
                admin_only: None,
                publishable: None,
                auth_key_pattern: None,
                name_field: Some("title".into()),
                fields: vec![
                    string_field_update("title", Some(true)),
                    string_field_update("summary", None),
                ],
            },
            EntityTypeUpdate {
                name: "Author".into(),
                admin_only: None,
                publishable: None,
                auth_key_pattern: None,
                name_field: None,
                fields: vec![string_field_update("fullName", None)],
            },
        ],
        ..SchemaSpecificationUpdate::default()
    };

    let v1 = update(&v0, big).expect("large update should be accepted");
    assert_eq!(v1.version, 1);
    assert_eq!(v1.entity_types.len(), 2);
    // collections come back sorted by name
    assert_eq!(v1.entity_types[0].name, "Article");
    assert_eq!(v1.entity_types[1].name, "Author");
}

#[test]
fn migration_version_gate_is_strict() {
    let v0 = SchemaSpecification::new();
    let mut v3 = update(&v0, article_update(string_field_update("title", None)))
        .expect("initial update should be accepted");
    v3.version = 3;

    let migration = |version| SchemaSpecificationUpdate {
        migrations: vec![VersionMigration {
            version,
            actions: vec![MigrationAction::DeleteField {
                owner_type: "Article".into(),
                field: "title".into(),
            }],
        }],
        ..SchemaSpecificationUpdate::default()
    };

    let err = update(&v3, migration(5)).expect_err("skipping versions should fail");
    assert_eq!(err.to_string(), "new migration version must be 4, got 5");

    let v4 = update(&v3, migration(4)).expect("next version should be accepted");
    assert_eq!(v4.version, 4);
    assert!(v4.get_entity_type("Article").unwrap().fields.is_empty());
}

#[test]
fn delete_type_propagates_through_reference_lists() {
    let v0 = SchemaSpecification::new();
    let v1 = update(
        &v0,
        SchemaSpecificationUpdate {
            entity_types: vec![
                EntityTypeUpdate {
                    name: "A".into(),
                    admin_only: None,
                    publishable: None,
                    auth_key_pattern: None,
                    name_field: None,
                    fields: vec![FieldUpdate {
                        name: "ref".into(),
                        list: None,
                        required: None,
                        admin_only: None,
                        is_name: None,
                        kind: FieldKindUpdate::Reference {
                            entity_types: Some(vec!["B".into()]),
                        },
                    }],
                },
                EntityTypeUpdate {
                    name: "B".into(),
                    admin_only: None,
                    publishable: None,
                    auth_key_pattern: None,
                    name_field: None,
                    fields: vec![],
                },
            ],
            ..SchemaSpecificationUpdate::default()
        },
    )
    .expect("setup update should be accepted");

    let v2 = update(
        &v1,
        SchemaSpecificationUpdate {
            migrations: vec![VersionMigration {
                version: 2,
                actions: vec![MigrationAction::DeleteType {
                    owner_type: "B".into(),
                }],
            }],
            ..SchemaSpecificationUpdate::default()
        },
    )
    .expect("delete update should be accepted");

    assert!(v2.get_entity_type("B").is_none());
    let reference = &v2.get_entity_type("A").unwrap().fields[0];
    assert_eq!(
        reference.kind,
        vellum_schema::FieldKind::Reference { entity_types: vec![] }
    );
    validate(&v2).expect("scrubbed spec should validate");
}

#[test]
fn accepted_spec_round_trips_through_json() {
    let v0 = SchemaSpecification::new();
    let v1 = update(&v0, article_update(string_field_update("title", Some(true))))
        .expect("initial update should be accepted");

    let json = serde_json::to_string(&v1).expect("spec should serialize");
    assert!(json.contains(r#""type":"String""#));

    let loaded: SchemaSpecification = serde_json::from_str(&json).expect("spec should deserialize");
    assert_eq!(loaded, v1);
    validate(&loaded).expect("loaded spec should validate");
}
