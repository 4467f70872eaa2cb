use crate::prelude::*;

/// Every cross-reference must resolve: type-name lists into the right half
/// of the namespace, pattern/index pointers into the declared sets, and
/// `nameField` onto a non-list String field of the same type.
pub(crate) fn validate_references(spec: &SchemaSpecification) -> Result<(), BadRequest> {
    for view in spec.type_views() {
        for field in view.fields {
            for (namespace, list) in field.kind.reference_lists() {
                for name in list {
                    if spec.type_admin_only(namespace, name).is_none() {
                        return Err(BadRequest::for_field(
                            view.name,
                            &field.name,
                            format!("referenced {namespace} type '{name}' does not exist"),
                        ));
                    }
                }
            }

            if let Some(pattern) = field.kind.match_pattern()
                && spec.get_pattern(pattern).is_none()
            {
                return Err(BadRequest::for_field(
                    view.name,
                    &field.name,
                    format!("matchPattern '{pattern}' is not a declared pattern"),
                ));
            }
            if let Some(index) = field.kind.index()
                && spec.get_index(index).is_none()
            {
                return Err(BadRequest::for_field(
                    view.name,
                    &field.name,
                    format!("index '{index}' is not a declared index"),
                ));
            }
        }
    }

    for entity in &spec.entity_types {
        if let Some(pattern) = &entity.auth_key_pattern
            && spec.get_pattern(pattern).is_none()
        {
            return Err(BadRequest::for_type(
                &entity.name,
                format!("authKeyPattern '{pattern}' is not a declared pattern"),
            ));
        }

        if let Some(name_field) = &entity.name_field {
            let Some(field) = entity.get_field(name_field) else {
                return Err(BadRequest::for_type(
                    &entity.name,
                    format!("nameField '{name_field}' does not exist"),
                ));
            };
            if !matches!(field.kind, FieldKind::String { .. }) {
                return Err(BadRequest::for_type(
                    &entity.name,
                    format!("nameField '{name_field}' must be a String field"),
                ));
            }
            if field.list {
                return Err(BadRequest::for_type(
                    &entity.name,
                    format!("nameField '{name_field}' can not be a list field"),
                ));
            }
        }
    }

    Ok(())
}

/// Referencing an `adminOnly` type from a field that is neither
/// `adminOnly` itself nor owned by an `adminOnly` type leaks hidden types
/// into the public view.
pub(crate) fn validate_admin_only(spec: &SchemaSpecification) -> Result<(), BadRequest> {
    for view in spec.type_views() {
        for field in view.fields {
            if view.admin_only || field.admin_only {
                continue;
            }

            for (namespace, list) in field.kind.reference_lists() {
                for name in list {
                    if spec.type_admin_only(namespace, name) == Some(true) {
                        return Err(BadRequest::for_field(
                            view.name,
                            &field.name,
                            format!(
                                "references adminOnly {namespace} type '{name}' but is not adminOnly"
                            ),
                        ));
                    }
                }
            }
        }
    }

    Ok(())
}

///
/// TESTS
///
