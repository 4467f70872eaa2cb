pub mod error;
pub mod migrate;
pub mod node;
pub mod normalize;
pub mod patch;
pub mod reconcile;
pub mod update;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_fixtures;

/// Maximum length for entity/component type identifiers.
pub const MAX_TYPE_NAME_LEN: usize = 64;

/// Maximum length for field identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

/// Maximum length for pattern and index identifiers.
pub const MAX_PATTERN_NAME_LEN: usize = 64;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{error::BadRequest, node::*};
    pub use serde::{Deserialize, Serialize};
}

pub use error::BadRequest;
pub use node::{
    ComponentTypeSpec, EntityTypeSpec, FieldKind, FieldSpec, IndexSpec, MigrationAction,
    PatternSpec, SchemaSpecification, TransientMigrationAction, TypeNamespace, VersionMigration,
};
pub use patch::{
    ComponentTypeUpdate, EntityTypeUpdate, FieldKindUpdate, FieldUpdate,
    SchemaSpecificationUpdate,
};

/// Run the full merge → migrate → reconcile → normalize → validate
/// pipeline against `current`, returning the accepted new specification,
/// the unchanged `current` for a no-op, or a `BadRequest`.
pub fn update(
    current: &SchemaSpecification,
    request: SchemaSpecificationUpdate,
) -> Result<SchemaSpecification, BadRequest> {
    current.update(request)
}

/// Standalone invariant check, usable on specifications not produced by
/// `update` (e.g. after loading from storage).
pub fn validate(spec: &SchemaSpecification) -> Result<(), BadRequest> {
    spec.validate()
}
