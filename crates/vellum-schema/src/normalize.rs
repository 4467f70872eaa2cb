use crate::prelude::*;

/// Sort every collection into its canonical order: types, patterns and
/// indexes by name ascending, migrations by version descending. Pure final
/// transform, applied once before the diff/version gate.
pub(crate) fn normalize(spec: &mut SchemaSpecification) {
    spec.entity_types.sort_by(|a, b| a.name.cmp(&b.name));
    spec.component_types.sort_by(|a, b| a.name.cmp(&b.name));
    spec.patterns.sort_by(|a, b| a.name.cmp(&b.name));
    spec.indexes.sort_by(|a, b| a.name.cmp(&b.name));
    spec.migrations.sort_by(|a, b| b.version.cmp(&a.version));
}

/// Deep structural comparison against the previous spec, ignoring
/// `version`: a no-op returns the previous value unchanged, anything else
/// bumps the version by exactly one.
pub(crate) fn version_gate(
    mut candidate: SchemaSpecification,
    current: &SchemaSpecification,
) -> SchemaSpecification {
    candidate.version = current.version;
    if candidate == *current {
        return current.clone();
    }

    candidate.version = current.version + 1;
    candidate
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::*;
    use proptest::prelude::*;

    #[test]
    fn collections_sort_by_name_and_migrations_by_version_descending() {
        let mut spec = SchemaSpecification {
            entity_types: vec![entity("Zebra", vec![]), entity("Apple", vec![])],
            migrations: vec![
                VersionMigration {
                    version: 1,
                    actions: vec![MigrationAction::DeleteType {
                        owner_type: "Old".into(),
                    }],
                },
                VersionMigration {
                    version: 2,
                    actions: vec![MigrationAction::DeleteType {
                        owner_type: "Older".into(),
                    }],
                },
            ],
            ..SchemaSpecification::default()
        };

        normalize(&mut spec);

        assert_eq!(spec.entity_types[0].name, "Apple");
        assert_eq!(spec.entity_types[1].name, "Zebra");
        assert_eq!(spec.migrations[0].version, 2);
        assert_eq!(spec.migrations[1].version, 1);
    }

    #[test]
    fn gate_returns_previous_spec_for_structural_equality() {
        let current = SchemaSpecification {
            version: 7,
            entity_types: vec![entity("Article", vec![string_field("title")])],
            ..SchemaSpecification::default()
        };

        let candidate = current.clone();
        let result = version_gate(candidate, &current);
        assert_eq!(result, current);
        assert_eq!(result.version, 7);
    }

    #[test]
    fn gate_bumps_version_by_exactly_one_for_any_change() {
        let current = SchemaSpecification {
            version: 7,
            ..SchemaSpecification::default()
        };

        let candidate = SchemaSpecification {
            version: 7,
            entity_types: vec![entity("Article", vec![]), entity("Review", vec![])],
            ..SchemaSpecification::default()
        };

        let result = version_gate(candidate, &current);
        assert_eq!(result.version, 8);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent_and_order_insensitive(
            mut names in proptest::collection::vec("[A-Z][a-zA-Z0-9]{0,8}", 0..8)
        ) {
            let spec_from = |names: &[String]| SchemaSpecification {
                entity_types: names.iter().map(|n| entity(n, vec![])).collect(),
                ..SchemaSpecification::default()
            };

            let mut sorted = spec_from(&names);
            normalize(&mut sorted);

            let mut twice = sorted.clone();
            normalize(&mut twice);
            prop_assert_eq!(&twice, &sorted);

            names.reverse();
            let mut reversed = spec_from(&names);
            normalize(&mut reversed);
            prop_assert_eq!(&reversed, &sorted);
        }
    }
}
