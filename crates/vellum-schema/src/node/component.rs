use crate::prelude::*;
use std::ops::Not;

///
/// ComponentTypeSpec
///
/// Nested content type, only ever embedded inside entity or component
/// fields, never independently addressable. The serialized form of a
/// component carries a `type` discriminator, so `type` is reserved as a
/// field name on component types.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentTypeSpec {
    pub name: String,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub admin_only: bool,

    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl ComponentTypeSpec {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            admin_only: false,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}
