use crate::prelude::*;

/// Apply index-only actions immediately against `indexes` and every String
/// field's `index` pointer.
///
/// Unlike the versioned log these are never recorded in `migrations`;
/// indexes are a storage-layer concern and the replayable history does not
/// cover them. The explicit-version requirement is a guard against
/// invoking structural index changes without an intended version bump.
pub(crate) fn apply_transient_migrations(
    spec: &mut SchemaSpecification,
    version: Option<u32>,
    actions: &[TransientMigrationAction],
) -> Result<(), BadRequest> {
    if actions.is_empty() {
        return Ok(());
    }
    if version.is_none() {
        return Err(BadRequest::new(
            "transientMigrations require the update to specify an explicit version",
        ));
    }

    for action in actions {
        match action {
            TransientMigrationAction::DeleteIndex { index } => {
                let position = spec
                    .indexes
                    .iter()
                    .position(|i| i.name == *index)
                    .ok_or_else(|| unknown_index("deleteIndex", index))?;
                spec.indexes.remove(position);

                for field in spec.fields_mut() {
                    if let FieldKind::String { index: pointer, .. } = &mut field.kind
                        && pointer.as_deref() == Some(index.as_str())
                    {
                        *pointer = None;
                    }
                }
            }

            TransientMigrationAction::RenameIndex { index, new_name } => {
                let renamed = spec
                    .indexes
                    .iter_mut()
                    .find(|i| i.name == *index)
                    .ok_or_else(|| unknown_index("renameIndex", index))?;
                renamed.name = new_name.clone();

                for field in spec.fields_mut() {
                    if let FieldKind::String { index: pointer, .. } = &mut field.kind
                        && pointer.as_deref() == Some(index.as_str())
                    {
                        *pointer = Some(new_name.clone());
                    }
                }
            }
        }
    }

    Ok(())
}

fn unknown_index(action: &str, index: &str) -> BadRequest {
    BadRequest::new(format!(
        "transient migration {action} {index}: index does not exist"
    ))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::*;

    fn spec_with_index() -> SchemaSpecification {
        SchemaSpecification {
            entity_types: vec![entity(
                "Article",
                vec![FieldSpec {
                    name: "slug".into(),
                    list: false,
                    required: false,
                    admin_only: false,
                    kind: FieldKind::String {
                        multiline: false,
                        match_pattern: None,
                        values: vec![],
                        index: Some("slugIndex".into()),
                    },
                }],
            )],
            indexes: vec![IndexSpec {
                name: "slugIndex".into(),
            }],
            ..SchemaSpecification::default()
        }
    }

    #[test]
    fn requires_an_explicit_version() {
        let mut spec = spec_with_index();

        let err = apply_transient_migrations(
            &mut spec,
            None,
            &[TransientMigrationAction::DeleteIndex {
                index: "slugIndex".into(),
            }],
        )
        .expect_err("missing version should be rejected");

        assert!(err.to_string().contains("explicit version"));
    }

    #[test]
    fn rename_index_rewrites_field_pointers() {
        let mut spec = spec_with_index();

        apply_transient_migrations(
            &mut spec,
            Some(1),
            &[TransientMigrationAction::RenameIndex {
                index: "slugIndex".into(),
                new_name: "slugLookup".into(),
            }],
        )
        .expect("rename should succeed");

        assert_eq!(spec.indexes[0].name, "slugLookup");
        let field = spec.get_entity_type("Article").unwrap().get_field("slug").unwrap();
        assert_eq!(field.kind.index(), Some("slugLookup"));
        // never appended to the migration log
        assert!(spec.migrations.is_empty());
    }

    #[test]
    fn delete_index_clears_field_pointers() {
        let mut spec = spec_with_index();

        apply_transient_migrations(
            &mut spec,
            Some(1),
            &[TransientMigrationAction::DeleteIndex {
                index: "slugIndex".into(),
            }],
        )
        .expect("delete should succeed");

        assert!(spec.indexes.is_empty());
        let field = spec.get_entity_type("Article").unwrap().get_field("slug").unwrap();
        assert_eq!(field.kind.index(), None);
    }

    #[test]
    fn unknown_index_is_rejected() {
        let mut spec = spec_with_index();

        let err = apply_transient_migrations(
            &mut spec,
            Some(1),
            &[TransientMigrationAction::RenameIndex {
                index: "missing".into(),
                new_name: "other".into(),
            }],
        )
        .expect_err("unknown index should be rejected");

        assert_eq!(
            err.to_string(),
            "transient migration renameIndex missing: index does not exist"
        );
    }
}
