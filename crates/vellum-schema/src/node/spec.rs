use crate::prelude::*;

///
/// SchemaSpecification
///
/// A fully normalized, internally consistent schema version. Immutable
/// once accepted; every accepted update produces a new value (or returns
/// the prior value unchanged for a no-op).
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaSpecification {
    #[serde(default)]
    pub version: u32,

    #[serde(default)]
    pub entity_types: Vec<EntityTypeSpec>,

    #[serde(default)]
    pub component_types: Vec<ComponentTypeSpec>,

    #[serde(default)]
    pub patterns: Vec<PatternSpec>,

    #[serde(default)]
    pub indexes: Vec<IndexSpec>,

    #[serde(default)]
    pub migrations: Vec<VersionMigration>,
}

///
/// TypeView
///
/// Borrowed, namespace-agnostic view of one type, for passes that treat
/// entity and component types uniformly.
///

#[derive(Clone, Copy)]
pub struct TypeView<'a> {
    pub namespace: TypeNamespace,
    pub name: &'a str,
    pub admin_only: bool,
    pub fields: &'a [FieldSpec],
}

impl SchemaSpecification {
    /// The empty schema at version 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get_entity_type(&self, name: &str) -> Option<&EntityTypeSpec> {
        self.entity_types.iter().find(|t| t.name == name)
    }

    #[must_use]
    pub fn get_component_type(&self, name: &str) -> Option<&ComponentTypeSpec> {
        self.component_types.iter().find(|t| t.name == name)
    }

    #[must_use]
    pub fn get_pattern(&self, name: &str) -> Option<&PatternSpec> {
        self.patterns.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub fn get_index(&self, name: &str) -> Option<&IndexSpec> {
        self.indexes.iter().find(|i| i.name == name)
    }

    /// Look up a type's `adminOnly` flag in the given namespace.
    #[must_use]
    pub fn type_admin_only(&self, namespace: TypeNamespace, name: &str) -> Option<bool> {
        match namespace {
            TypeNamespace::Entity => self.get_entity_type(name).map(|t| t.admin_only),
            TypeNamespace::Component => self.get_component_type(name).map(|t| t.admin_only),
        }
    }

    /// All types across both halves of the namespace, entities first.
    pub fn type_views(&self) -> impl Iterator<Item = TypeView<'_>> {
        let entities = self.entity_types.iter().map(|t| TypeView {
            namespace: TypeNamespace::Entity,
            name: t.name.as_str(),
            admin_only: t.admin_only,
            fields: &t.fields,
        });
        let components = self.component_types.iter().map(|t| TypeView {
            namespace: TypeNamespace::Component,
            name: t.name.as_str(),
            admin_only: t.admin_only,
            fields: &t.fields,
        });

        entities.chain(components)
    }

    /// Every field of every type, mutably, for cross-reference rewrites.
    pub(crate) fn fields_mut(&mut self) -> impl Iterator<Item = &mut FieldSpec> {
        let entities = self.entity_types.iter_mut().flat_map(|t| t.fields.iter_mut());
        let components = self
            .component_types
            .iter_mut()
            .flat_map(|t| t.fields.iter_mut());

        entities.chain(components)
    }
}

///
/// TESTS
///
