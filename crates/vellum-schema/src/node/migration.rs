use crate::prelude::*;

///
/// VersionMigration
///
/// One entry in the append-only, strictly version-gated migration log. A
/// migration with zero actions is treated as absent. History is immutable:
/// a resubmitted migration must match the accepted one verbatim.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionMigration {
    pub version: u32,

    #[serde(default)]
    pub actions: Vec<MigrationAction>,
}

///
/// MigrationAction
///
/// Structural rename/delete applied in array order, after type/field
/// merging for the same call, with propagation to every cross-reference.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum MigrationAction {
    DeleteField {
        owner_type: String,
        field: String,
    },

    DeleteType {
        owner_type: String,
    },

    RenameField {
        owner_type: String,
        field: String,
        new_name: String,
    },

    RenameType {
        owner_type: String,
        new_name: String,
    },
}

impl MigrationAction {
    /// Render the action for migration error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::DeleteField { owner_type, field } => {
                format!("deleteField {owner_type}.{field}")
            }
            Self::DeleteType { owner_type } => format!("deleteType {owner_type}"),
            Self::RenameField {
                owner_type, field, ..
            } => format!("renameField {owner_type}.{field}"),
            Self::RenameType { owner_type, .. } => format!("renameType {owner_type}"),
        }
    }
}

///
/// TransientMigrationAction
///
/// Index rename/delete applied immediately and never appended to the
/// migration log. Indexes are a storage-layer concern; a replica replaying
/// only `migrations` is not expected to reconstruct them.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TransientMigrationAction {
    DeleteIndex { index: String },

    RenameIndex { index: String, new_name: String },
}
