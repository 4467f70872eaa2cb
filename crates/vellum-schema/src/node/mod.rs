pub mod component;
pub mod entity;
pub mod field;
pub mod migration;
pub mod pattern;
pub mod spec;

pub use component::ComponentTypeSpec;
pub use entity::EntityTypeSpec;
pub use field::{FieldKind, FieldSpec, TypeNamespace};
pub use migration::{MigrationAction, TransientMigrationAction, VersionMigration};
pub use pattern::{IndexSpec, PatternSpec};
pub use spec::{SchemaSpecification, TypeView};
