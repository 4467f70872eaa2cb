use crate::{
    patch::{ComponentTypeUpdate, EntityTypeUpdate, FieldKindUpdate, FieldUpdate},
    prelude::*,
};

/// Merge per-type partial updates into the candidate's canonical records.
///
/// Types absent from the request are carried over unchanged; unknown type
/// names create new records. Each scalar attribute resolves as
/// `update ?? existing ?? default`.
pub(crate) fn merge_types(
    candidate: &mut SchemaSpecification,
    entity_updates: &[EntityTypeUpdate],
    component_updates: &[ComponentTypeUpdate],
) -> Result<(), BadRequest> {
    for update in entity_updates {
        merge_entity_type(candidate, update)?;
    }
    for update in component_updates {
        merge_component_type(candidate, update)?;
    }

    Ok(())
}

fn merge_entity_type(
    candidate: &mut SchemaSpecification,
    update: &EntityTypeUpdate,
) -> Result<(), BadRequest> {
    let position = candidate
        .entity_types
        .iter()
        .position(|t| t.name == update.name);

    let mut merged = match position {
        Some(i) => candidate.entity_types[i].clone(),
        None => EntityTypeSpec::new(update.name.clone()),
    };

    merged.admin_only = update.admin_only.unwrap_or(merged.admin_only);
    merged.publishable = update.publishable.unwrap_or(merged.publishable);
    merged.auth_key_pattern = update.auth_key_pattern.clone().or(merged.auth_key_pattern);
    merged.name_field = update.name_field.clone().or(merged.name_field);
    merge_fields(&update.name, &mut merged.fields, &update.fields)?;

    match position {
        Some(i) => candidate.entity_types[i] = merged,
        None => candidate.entity_types.push(merged),
    }

    Ok(())
}

fn merge_component_type(
    candidate: &mut SchemaSpecification,
    update: &ComponentTypeUpdate,
) -> Result<(), BadRequest> {
    let position = candidate
        .component_types
        .iter()
        .position(|t| t.name == update.name);

    let mut merged = match position {
        Some(i) => candidate.component_types[i].clone(),
        None => ComponentTypeSpec::new(update.name.clone()),
    };

    merged.admin_only = update.admin_only.unwrap_or(merged.admin_only);
    merge_fields(&update.name, &mut merged.fields, &update.fields)?;

    match position {
        Some(i) => candidate.component_types[i] = merged,
        None => candidate.component_types.push(merged),
    }

    Ok(())
}

// Merge field updates by name: mentioned fields are fully re-derived in
// place, unmentioned fields are untouched, new fields are appended in
// request order.
fn merge_fields(
    type_name: &str,
    fields: &mut Vec<FieldSpec>,
    updates: &[FieldUpdate],
) -> Result<(), BadRequest> {
    for update in updates {
        let position = fields.iter().position(|f| f.name == update.name);
        let existing = position.map(|i| &fields[i]);
        let merged = merge_field(type_name, existing, update)?;

        match position {
            Some(i) => fields[i] = merged,
            None => fields.push(merged),
        }
    }

    Ok(())
}

fn merge_field(
    type_name: &str,
    existing: Option<&FieldSpec>,
    update: &FieldUpdate,
) -> Result<FieldSpec, BadRequest> {
    if update.is_name.is_some() {
        return Err(BadRequest::for_field(
            type_name,
            &update.name,
            "isName is no longer supported, set nameField on the type instead",
        ));
    }

    if let Some(existing) = existing {
        // kind and list are immutable once declared
        if !update.kind.matches(&existing.kind) {
            return Err(BadRequest::for_field(
                type_name,
                &update.name,
                format!(
                    "can not change type of field (existing {}, got {})",
                    existing.kind.kind_name(),
                    update.kind.kind_name()
                ),
            ));
        }
        if let Some(list) = update.list
            && list != existing.list
        {
            return Err(BadRequest::for_field(
                type_name,
                &update.name,
                "can not change the value of list",
            ));
        }
    }

    Ok(FieldSpec {
        name: update.name.clone(),
        list: update.list.unwrap_or_else(|| existing.is_some_and(|f| f.list)),
        required: update
            .required
            .unwrap_or_else(|| existing.is_some_and(|f| f.required)),
        admin_only: update
            .admin_only
            .unwrap_or_else(|| existing.is_some_and(|f| f.admin_only)),
        kind: merged_kind(&update.kind, existing.map(|f| &f.kind)),
    })
}

// Re-derive the kind-specific attribute set through the same ??-chain.
// The discriminant match against any existing kind was checked above, so
// the fallback arms only fire for newly created fields.
fn merged_kind(update: &FieldKindUpdate, existing: Option<&FieldKind>) -> FieldKind {
    match update {
        FieldKindUpdate::Boolean => FieldKind::Boolean,

        FieldKindUpdate::Location => FieldKind::Location,

        FieldKindUpdate::Number { integer } => {
            let prev = match existing {
                Some(FieldKind::Number { integer }) => *integer,
                _ => false,
            };

            FieldKind::Number {
                integer: integer.unwrap_or(prev),
            }
        }

        FieldKindUpdate::Reference { entity_types } => {
            let prev = match existing {
                Some(FieldKind::Reference { entity_types }) => entity_types.clone(),
                _ => Vec::new(),
            };

            FieldKind::Reference {
                entity_types: entity_types.clone().unwrap_or(prev),
            }
        }

        FieldKindUpdate::Component { component_types } => {
            let prev = match existing {
                Some(FieldKind::Component { component_types }) => component_types.clone(),
                _ => Vec::new(),
            };

            FieldKind::Component {
                component_types: component_types.clone().unwrap_or(prev),
            }
        }

        FieldKindUpdate::RichText {
            rich_text_nodes,
            entity_types,
            link_entity_types,
            component_types,
        } => {
            let (prev_nodes, prev_entities, prev_links, prev_components) = match existing {
                Some(FieldKind::RichText {
                    rich_text_nodes,
                    entity_types,
                    link_entity_types,
                    component_types,
                }) => (
                    rich_text_nodes.clone(),
                    entity_types.clone(),
                    link_entity_types.clone(),
                    component_types.clone(),
                ),
                _ => (Vec::new(), Vec::new(), Vec::new(), Vec::new()),
            };

            FieldKind::RichText {
                rich_text_nodes: rich_text_nodes.clone().unwrap_or(prev_nodes),
                entity_types: entity_types.clone().unwrap_or(prev_entities),
                link_entity_types: link_entity_types.clone().unwrap_or(prev_links),
                component_types: component_types.clone().unwrap_or(prev_components),
            }
        }

        FieldKindUpdate::String {
            multiline,
            match_pattern,
            values,
            index,
        } => {
            let (prev_multiline, prev_pattern, prev_values, prev_index) = match existing {
                Some(FieldKind::String {
                    multiline,
                    match_pattern,
                    values,
                    index,
                }) => (*multiline, match_pattern.clone(), values.clone(), index.clone()),
                _ => (false, None, Vec::new(), None),
            };

            FieldKind::String {
                multiline: multiline.unwrap_or(prev_multiline),
                match_pattern: match_pattern.clone().or(prev_pattern),
                values: values.clone().unwrap_or(prev_values),
                index: index.clone().or(prev_index),
            }
        }
    }
}

///
/// TESTS
///
