use crate::prelude::*;
use derive_more::Display;
use std::ops::Not;

///
/// TypeNamespace
///
/// Which half of the shared type namespace a reference list points into.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum TypeNamespace {
    #[display("entity")]
    Entity,

    #[display("component")]
    Component,
}

///
/// FieldSpec
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: String,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub list: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub admin_only: bool,

    #[serde(flatten)]
    pub kind: FieldKind,
}

///
/// FieldKind
///
/// One variant per field kind, carrying only that kind's attributes, so a
/// field physically cannot hold attributes outside its kind's whitelist.
/// `kind` and `list` are fixed at declaration time; the merger rejects any
/// update that tries to change them.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum FieldKind {
    Boolean,

    Location,

    Number {
        #[serde(default, skip_serializing_if = "Not::not")]
        integer: bool,
    },

    Reference {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        entity_types: Vec<String>,
    },

    Component {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        component_types: Vec<String>,
    },

    RichText {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        rich_text_nodes: Vec<String>,

        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        entity_types: Vec<String>,

        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        link_entity_types: Vec<String>,

        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        component_types: Vec<String>,
    },

    String {
        #[serde(default, skip_serializing_if = "Not::not")]
        multiline: bool,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        match_pattern: Option<String>,

        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        values: Vec<String>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<String>,
    },
}

impl FieldKind {
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Location => "Location",
            Self::Number { .. } => "Number",
            Self::Reference { .. } => "Reference",
            Self::Component { .. } => "Component",
            Self::RichText { .. } => "RichText",
            Self::String { .. } => "String",
        }
    }

    /// Every (namespace, type-name list) pair this kind holds, in a fixed
    /// order, so rename/delete propagation and referential validation walk
    /// the same set of properties.
    #[must_use]
    pub fn reference_lists(&self) -> Vec<(TypeNamespace, &[String])> {
        match self {
            Self::Reference { entity_types } => {
                vec![(TypeNamespace::Entity, entity_types.as_slice())]
            }
            Self::Component { component_types } => {
                vec![(TypeNamespace::Component, component_types.as_slice())]
            }
            Self::RichText {
                entity_types,
                link_entity_types,
                component_types,
                ..
            } => vec![
                (TypeNamespace::Entity, entity_types.as_slice()),
                (TypeNamespace::Entity, link_entity_types.as_slice()),
                (TypeNamespace::Component, component_types.as_slice()),
            ],
            _ => Vec::new(),
        }
    }

    pub(crate) fn reference_lists_mut(&mut self) -> Vec<(TypeNamespace, &mut Vec<String>)> {
        match self {
            Self::Reference { entity_types } => vec![(TypeNamespace::Entity, entity_types)],
            Self::Component { component_types } => {
                vec![(TypeNamespace::Component, component_types)]
            }
            Self::RichText {
                entity_types,
                link_entity_types,
                component_types,
                ..
            } => vec![
                (TypeNamespace::Entity, entity_types),
                (TypeNamespace::Entity, link_entity_types),
                (TypeNamespace::Component, component_types),
            ],
            _ => Vec::new(),
        }
    }

    /// The declared pattern name for a String field, if any.
    #[must_use]
    pub fn match_pattern(&self) -> Option<&str> {
        match self {
            Self::String { match_pattern, .. } => match_pattern.as_deref(),
            _ => None,
        }
    }

    /// The declared index name for a String field, if any.
    #[must_use]
    pub fn index(&self) -> Option<&str> {
        match self {
            Self::String { index, .. } => index.as_deref(),
            _ => None,
        }
    }
}

///
/// TESTS
///
