use crate::prelude::*;
use regex::Regex;
use std::collections::BTreeSet;

/// Node kinds that must all be present once `richTextNodes` restricts the
/// node set at all.
const REQUIRED_RICH_TEXT_NODES: [&str; 5] = ["root", "paragraph", "text", "linebreak", "tab"];

/// Node kinds that only make sense together: listing part of a group is
/// always a mistake.
const RICH_TEXT_NODE_GROUPS: [[&str; 2]; 2] = [["code", "codeHighlight"], ["list", "listitem"]];

/// Removed node kind. Permanently banned so old schemas surface a clear
/// migration path instead of silently carrying a dead node.
const LEGACY_VALUE_ITEM_NODE: &str = "valueItem";

pub(crate) fn validate_rich_text_fields(spec: &SchemaSpecification) -> Result<(), BadRequest> {
    for view in spec.type_views() {
        for field in view.fields {
            let FieldKind::RichText {
                rich_text_nodes,
                entity_types,
                link_entity_types,
                component_types,
            } = &field.kind
            else {
                continue;
            };

            let mut seen = BTreeSet::new();
            for node in rich_text_nodes {
                if !seen.insert(node.as_str()) {
                    return Err(BadRequest::for_field(
                        view.name,
                        &field.name,
                        format!("richTextNodes contains duplicate node '{node}'"),
                    ));
                }
            }

            if seen.contains(LEGACY_VALUE_ITEM_NODE) {
                return Err(BadRequest::for_field(
                    view.name,
                    &field.name,
                    "richTextNodes must not include the removed node 'valueItem', \
                     migrate it to 'component'",
                ));
            }

            // an empty node list means every node kind is allowed
            if rich_text_nodes.is_empty() {
                continue;
            }

            let missing: Vec<&str> = REQUIRED_RICH_TEXT_NODES
                .iter()
                .filter(|node| !seen.contains(**node))
                .copied()
                .collect();
            if !missing.is_empty() {
                return Err(BadRequest::for_field(
                    view.name,
                    &field.name,
                    format!("richTextNodes must include {}", missing.join(", ")),
                ));
            }

            for group in RICH_TEXT_NODE_GROUPS {
                let present = group.iter().filter(|node| seen.contains(**node)).count();
                if present != 0 && present != group.len() {
                    return Err(BadRequest::for_field(
                        view.name,
                        &field.name,
                        format!("richTextNodes must include all or none of {}", group.join(", ")),
                    ));
                }
            }

            for (list, node) in [
                (entity_types, "entity"),
                (link_entity_types, "entityLink"),
                (component_types, "component"),
            ] {
                if !list.is_empty() && !seen.contains(node) {
                    return Err(BadRequest::for_field(
                        view.name,
                        &field.name,
                        format!("richTextNodes does not include '{node}'"),
                    ));
                }
            }
        }
    }

    Ok(())
}

pub(crate) fn validate_string_fields(spec: &SchemaSpecification) -> Result<(), BadRequest> {
    for view in spec.type_views() {
        for field in view.fields {
            if let FieldKind::String {
                match_pattern: Some(_),
                values,
                ..
            } = &field.kind
                && !values.is_empty()
            {
                return Err(BadRequest::for_field(
                    view.name,
                    &field.name,
                    "matchPattern and values are mutually exclusive",
                ));
            }
        }
    }

    Ok(())
}

pub(crate) fn validate_patterns(spec: &SchemaSpecification) -> Result<(), BadRequest> {
    for pattern in &spec.patterns {
        if let Err(error) = Regex::new(&pattern.pattern) {
            return Err(BadRequest::new(format!(
                "pattern '{}' is not a valid regular expression: {error}",
                pattern.name
            )));
        }
    }

    Ok(())
}

///
/// TESTS
///
