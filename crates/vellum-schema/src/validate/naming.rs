use crate::{MAX_FIELD_NAME_LEN, MAX_PATTERN_NAME_LEN, MAX_TYPE_NAME_LEN, prelude::*};
use regex::Regex;
use std::{collections::BTreeSet, sync::LazyLock};

static PASCAL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Z][a-zA-Z0-9]*$").expect("static regex must compile"));

static CAMEL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-z][a-zA-Z0-9]*$").expect("static regex must compile"));

// The serialized form of a component carries its type discriminator in
// this slot.
const RESERVED_COMPONENT_FIELD_NAME: &str = "type";

pub(crate) fn validate_names(spec: &SchemaSpecification) -> Result<(), BadRequest> {
    for view in spec.type_views() {
        if !PASCAL_CASE.is_match(view.name) {
            return Err(BadRequest::for_type(
                view.name,
                "type name must be PascalCase",
            ));
        }
        if view.name.len() > MAX_TYPE_NAME_LEN {
            return Err(BadRequest::for_type(
                view.name,
                format!("type name exceeds {MAX_TYPE_NAME_LEN} characters"),
            ));
        }

        for field in view.fields {
            if !CAMEL_CASE.is_match(&field.name) {
                return Err(BadRequest::for_field(
                    view.name,
                    &field.name,
                    "field name must be camelCase",
                ));
            }
            if field.name.len() > MAX_FIELD_NAME_LEN {
                return Err(BadRequest::for_field(
                    view.name,
                    &field.name,
                    format!("field name exceeds {MAX_FIELD_NAME_LEN} characters"),
                ));
            }
            if view.namespace == TypeNamespace::Component
                && field.name == RESERVED_COMPONENT_FIELD_NAME
            {
                return Err(BadRequest::for_type(
                    view.name,
                    "'type' is a reserved field name on component types",
                ));
            }
        }
    }

    for pattern in &spec.patterns {
        if !CAMEL_CASE.is_match(&pattern.name) || pattern.name.len() > MAX_PATTERN_NAME_LEN {
            return Err(BadRequest::new(format!(
                "pattern name '{}' must be camelCase and at most {MAX_PATTERN_NAME_LEN} characters",
                pattern.name
            )));
        }
    }
    for index in &spec.indexes {
        if !CAMEL_CASE.is_match(&index.name) || index.name.len() > MAX_PATTERN_NAME_LEN {
            return Err(BadRequest::new(format!(
                "index name '{}' must be camelCase and at most {MAX_PATTERN_NAME_LEN} characters",
                index.name
            )));
        }
    }

    Ok(())
}

pub(crate) fn validate_uniqueness(spec: &SchemaSpecification) -> Result<(), BadRequest> {
    // entity and component types share one namespace
    let mut type_names = BTreeSet::new();
    for view in spec.type_views() {
        if !type_names.insert(view.name) {
            return Err(BadRequest::new(format!(
                "duplicate type name '{}'",
                view.name
            )));
        }

        let mut field_names = BTreeSet::new();
        for field in view.fields {
            if !field_names.insert(field.name.as_str()) {
                return Err(BadRequest::for_field(
                    view.name,
                    &field.name,
                    "duplicate field name",
                ));
            }
        }
    }

    let mut pattern_names = BTreeSet::new();
    for pattern in &spec.patterns {
        if !pattern_names.insert(pattern.name.as_str()) {
            return Err(BadRequest::new(format!(
                "duplicate pattern name '{}'",
                pattern.name
            )));
        }
    }

    let mut index_names = BTreeSet::new();
    for index in &spec.indexes {
        if !index_names.insert(index.name.as_str()) {
            return Err(BadRequest::new(format!(
                "duplicate index name '{}'",
                index.name
            )));
        }
    }

    Ok(())
}

///
/// TESTS
///
