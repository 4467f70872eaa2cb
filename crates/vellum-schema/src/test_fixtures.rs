//! Shared builders for unit tests. Test-only code.

use crate::prelude::*;

pub(crate) fn entity(name: &str, fields: Vec<FieldSpec>) -> EntityTypeSpec {
    EntityTypeSpec {
        fields,
        ..EntityTypeSpec::new(name)
    }
}

pub(crate) fn component(name: &str, fields: Vec<FieldSpec>) -> ComponentTypeSpec {
    ComponentTypeSpec {
        fields,
        ..ComponentTypeSpec::new(name)
    }
}

pub(crate) fn field(name: &str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name: name.to_string(),
        list: false,
        required: false,
        admin_only: false,
        kind,
    }
}

pub(crate) fn string_field(name: &str) -> FieldSpec {
    field(
        name,
        FieldKind::String {
            multiline: false,
            match_pattern: None,
            values: vec![],
            index: None,
        },
    )
}

pub(crate) fn reference_field(name: &str, entity_types: &[&str]) -> FieldSpec {
    field(
        name,
        FieldKind::Reference {
            entity_types: entity_types.iter().map(ToString::to_string).collect(),
        },
    )
}
