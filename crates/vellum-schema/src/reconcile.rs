use crate::prelude::*;
use std::collections::BTreeSet;

/// Recompute the used-pattern/used-index sets over the in-progress
/// candidate, merge declared updates replace-by-name, prune declarations
/// nothing references, and fail fast on used-but-undeclared names.
pub(crate) fn reconcile_patterns_and_indexes(
    candidate: &mut SchemaSpecification,
    patterns: &[PatternSpec],
    indexes: &[IndexSpec],
) -> Result<(), BadRequest> {
    // Phase 1: merge declarations from the request.
    for pattern in patterns {
        match candidate.patterns.iter_mut().find(|p| p.name == pattern.name) {
            Some(declared) => *declared = pattern.clone(),
            None => candidate.patterns.push(pattern.clone()),
        }
    }
    for index in indexes {
        match candidate.indexes.iter_mut().find(|i| i.name == index.name) {
            Some(declared) => *declared = index.clone(),
            None => candidate.indexes.push(index.clone()),
        }
    }

    // Phase 2: derive the used sets from every reference in the candidate.
    let mut used_patterns = BTreeSet::new();
    let mut used_indexes = BTreeSet::new();

    for entity in &candidate.entity_types {
        if let Some(pattern) = &entity.auth_key_pattern {
            used_patterns.insert(pattern.clone());
        }
    }
    for view in candidate.type_views() {
        for field in view.fields {
            if let Some(pattern) = field.kind.match_pattern() {
                used_patterns.insert(pattern.to_string());
            }
            if let Some(index) = field.kind.index() {
                used_indexes.insert(index.to_string());
            }
        }
    }

    // Phase 3: undeclared-but-used fails the whole update, listing every
    // missing name.
    let missing_patterns: Vec<&str> = used_patterns
        .iter()
        .filter(|name| candidate.get_pattern(name).is_none())
        .map(String::as_str)
        .collect();
    if !missing_patterns.is_empty() {
        return Err(BadRequest::new(format!(
            "patterns are used but not declared: {}",
            missing_patterns.join(", ")
        )));
    }

    let missing_indexes: Vec<&str> = used_indexes
        .iter()
        .filter(|name| candidate.get_index(name).is_none())
        .map(String::as_str)
        .collect();
    if !missing_indexes.is_empty() {
        return Err(BadRequest::new(format!(
            "indexes are used but not declared: {}",
            missing_indexes.join(", ")
        )));
    }

    // Phase 4: prune declarations down to exactly the used sets.
    candidate.patterns.retain(|p| used_patterns.contains(&p.name));
    candidate.indexes.retain(|i| used_indexes.contains(&i.name));

    Ok(())
}

///
/// TESTS
///
