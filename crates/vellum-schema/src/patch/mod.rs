pub mod merge;

use crate::prelude::*;

///
/// SchemaSpecificationUpdate
///
/// Partial, human-authored update request. Every scalar is optional and
/// every collection defaults to empty; omitting an attribute never erases
/// a previously-declared value.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaSpecificationUpdate {
    /// The intended resulting version. Optional, but required when
    /// `transient_migrations` is present, and checked against
    /// `current.version + 1` whenever supplied.
    pub version: Option<u32>,

    pub entity_types: Vec<EntityTypeUpdate>,
    pub component_types: Vec<ComponentTypeUpdate>,
    pub patterns: Vec<PatternSpec>,
    pub indexes: Vec<IndexSpec>,
    pub migrations: Vec<VersionMigration>,
    pub transient_migrations: Vec<TransientMigrationAction>,
}

///
/// EntityTypeUpdate
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityTypeUpdate {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_only: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publishable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_key_pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_field: Option<String>,

    #[serde(default)]
    pub fields: Vec<FieldUpdate>,
}

///
/// ComponentTypeUpdate
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentTypeUpdate {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_only: Option<bool>,

    #[serde(default)]
    pub fields: Vec<FieldUpdate>,
}

///
/// FieldUpdate
///
/// Mentioned fields are fully re-derived through the
/// `update ?? existing ?? default` chain; fields not mentioned are carried
/// over unchanged. The kind tag is always present so kind immutability can
/// be checked against the existing declaration.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldUpdate {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_only: Option<bool>,

    /// Legacy per-field name-field marker. No longer supported; rejected
    /// whenever present so stale clients fail loudly instead of silently
    /// diverging from the type-level `nameField`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_name: Option<bool>,

    #[serde(flatten)]
    pub kind: FieldKindUpdate,
}

///
/// FieldKindUpdate
///
/// Mirror of `FieldKind` with every attribute optional.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum FieldKindUpdate {
    Boolean,

    Location,

    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        integer: Option<bool>,
    },

    Reference {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        entity_types: Option<Vec<String>>,
    },

    Component {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        component_types: Option<Vec<String>>,
    },

    RichText {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rich_text_nodes: Option<Vec<String>>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        entity_types: Option<Vec<String>>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        link_entity_types: Option<Vec<String>>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        component_types: Option<Vec<String>>,
    },

    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        multiline: Option<bool>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        match_pattern: Option<String>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        values: Option<Vec<String>>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<String>,
    },
}

impl FieldKindUpdate {
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

    /// Whether this update targets the same kind as an existing field.
    #[must_use]
    pub const fn matches(&self, existing: &FieldKind) -> bool {
        matches!(
            (self, existing),
            (Self::Boolean, FieldKind::Boolean)
                | (Self::Location, FieldKind::Location)
                | (Self::Number { .. }, FieldKind::Number { .. })
                | (Self::Reference { .. }, FieldKind::Reference { .. })
                | (Self::Component { .. }, FieldKind::Component { .. })
                | (Self::RichText { .. }, FieldKind::RichText { .. })
                | (Self::String { .. }, FieldKind::String { .. })
        )
    }
}

///
/// TESTS
///
