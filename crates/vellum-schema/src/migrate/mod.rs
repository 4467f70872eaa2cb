pub mod transient;

use crate::prelude::*;

/// Apply the submitted migration entries against the merged candidate.
///
/// The log is append-only and strictly version-gated: entries already in
/// the history must be resubmitted verbatim (and are not re-applied), at
/// most one new entry is accepted per call, and its version must be
/// exactly `current_version + 1`. Entries with zero actions are treated as
/// absent.
pub(crate) fn apply_migrations(
    candidate: &mut SchemaSpecification,
    current_version: u32,
    submitted: &[VersionMigration],
) -> Result<(), BadRequest> {
    let mut new_migration: Option<&VersionMigration> = None;

    for migration in submitted {
        if migration.actions.is_empty() {
            continue;
        }

        if let Some(accepted) = candidate
            .migrations
            .iter()
            .find(|m| m.version == migration.version)
        {
            // Idempotent resubmission of history; divergence is rejected.
            if accepted != migration {
                return Err(BadRequest::new(format!(
                    "migration {} does not match the previously accepted migration with that version",
                    migration.version
                )));
            }
            continue;
        }

        if migration.version != current_version + 1 {
            return Err(BadRequest::new(format!(
                "new migration version must be {}, got {}",
                current_version + 1,
                migration.version
            )));
        }
        if new_migration.is_some() {
            return Err(BadRequest::new(
                "only one new migration may be submitted per update",
            ));
        }
        new_migration = Some(migration);
    }

    if let Some(migration) = new_migration {
        for action in &migration.actions {
            apply_action(candidate, action)?;
        }
        candidate.migrations.push(migration.clone());
    }

    Ok(())
}

fn apply_action(spec: &mut SchemaSpecification, action: &MigrationAction) -> Result<(), BadRequest> {
    match action {
        MigrationAction::DeleteField { owner_type, field } => {
            let (fields, name_field) = owner_fields_mut(spec, owner_type)
                .ok_or_else(|| unknown_type(action))?;
            let index = fields
                .iter()
                .position(|f| f.name == *field)
                .ok_or_else(|| unknown_field(action))?;
            fields.remove(index);

            if let Some(name_field) = name_field
                && name_field.as_deref() == Some(field.as_str())
            {
                *name_field = None;
            }
        }

        MigrationAction::RenameField {
            owner_type,
            field,
            new_name,
        } => {
            let (fields, name_field) = owner_fields_mut(spec, owner_type)
                .ok_or_else(|| unknown_type(action))?;
            let renamed = fields
                .iter_mut()
                .find(|f| f.name == *field)
                .ok_or_else(|| unknown_field(action))?;
            renamed.name = new_name.clone();

            if let Some(name_field) = name_field
                && name_field.as_deref() == Some(field.as_str())
            {
                *name_field = Some(new_name.clone());
            }
        }

        MigrationAction::DeleteType { owner_type } => {
            let namespace = remove_type(spec, owner_type).ok_or_else(|| unknown_type(action))?;

            // Splice the deleted name out of every reference list in the
            // same namespace; no placeholder is left behind.
            for field in spec.fields_mut() {
                for (list_namespace, list) in field.kind.reference_lists_mut() {
                    if list_namespace == namespace {
                        list.retain(|name| name != owner_type);
                    }
                }
            }
        }

        MigrationAction::RenameType {
            owner_type,
            new_name,
        } => {
            let namespace = rename_type(spec, owner_type, new_name)
                .ok_or_else(|| unknown_type(action))?;

            for field in spec.fields_mut() {
                for (list_namespace, list) in field.kind.reference_lists_mut() {
                    if list_namespace == namespace {
                        for name in list.iter_mut() {
                            if name == owner_type {
                                *name = new_name.clone();
                            }
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

type OwnerFields<'a> = (&'a mut Vec<FieldSpec>, Option<&'a mut Option<String>>);

// Locate a type's field list in either half of the namespace, along with
// the entity-level nameField pointer when the owner is an entity type.
fn owner_fields_mut<'a>(spec: &'a mut SchemaSpecification, name: &str) -> Option<OwnerFields<'a>> {
    if let Some(i) = spec.entity_types.iter().position(|t| t.name == name) {
        let entity = &mut spec.entity_types[i];
        return Some((&mut entity.fields, Some(&mut entity.name_field)));
    }

    spec.component_types
        .iter_mut()
        .find(|t| t.name == name)
        .map(|t| (&mut t.fields, None))
}

fn remove_type(spec: &mut SchemaSpecification, name: &str) -> Option<TypeNamespace> {
    if let Some(i) = spec.entity_types.iter().position(|t| t.name == name) {
        spec.entity_types.remove(i);
        return Some(TypeNamespace::Entity);
    }
    if let Some(i) = spec.component_types.iter().position(|t| t.name == name) {
        spec.component_types.remove(i);
        return Some(TypeNamespace::Component);
    }

    None
}

fn rename_type(spec: &mut SchemaSpecification, old: &str, new: &str) -> Option<TypeNamespace> {
    if let Some(t) = spec.entity_types.iter_mut().find(|t| t.name == old) {
        t.name = new.to_string();
        return Some(TypeNamespace::Entity);
    }
    if let Some(t) = spec.component_types.iter_mut().find(|t| t.name == old) {
        t.name = new.to_string();
        return Some(TypeNamespace::Component);
    }

    None
}

fn unknown_type(action: &MigrationAction) -> BadRequest {
    BadRequest::new(format!("migration {}: type does not exist", action.describe()))
}

fn unknown_field(action: &MigrationAction) -> BadRequest {
    BadRequest::new(format!(
        "migration {}: field does not exist",
        action.describe()
    ))
}

///
/// TESTS
///
