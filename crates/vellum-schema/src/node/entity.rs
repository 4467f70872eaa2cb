use crate::prelude::*;
use std::ops::Not;

///
/// EntityTypeSpec
///
/// Top-level addressable content type. Shares one name namespace with
/// component types.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityTypeSpec {
    pub name: String,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub admin_only: bool,

    #[serde(default = "default_publishable")]
    pub publishable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_key_pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_field: Option<String>,

    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

const fn default_publishable() -> bool {
    true
}

impl EntityTypeSpec {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            admin_only: false,
            publishable: true,
            auth_key_pattern: None,
            name_field: None,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}
