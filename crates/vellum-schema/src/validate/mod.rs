//! Schema validation: staged, deterministic, short-circuiting.
//!
//! Runs over the fully assembled candidate at the end of every update, and
//! is independently callable on any specification (e.g. after loading from
//! storage). The per-kind attribute whitelist needs no runtime stage: the
//! `FieldKind` sum type makes out-of-kind attributes unrepresentable.

pub mod field;
pub mod naming;
pub mod relation;

use crate::prelude::*;

impl SchemaSpecification {
    /// Enforce every naming, uniqueness, referential, visibility and
    /// rich-text invariant, returning the first failure.
    pub fn validate(&self) -> Result<(), BadRequest> {
        // Stage 1: name shapes, reserved names, uniqueness.
        naming::validate_names(self)?;
        naming::validate_uniqueness(self)?;

        // Stage 2: referential existence and adminOnly visibility.
        relation::validate_references(self)?;
        relation::validate_admin_only(self)?;

        // Stage 3: kind-specific field rules.
        field::validate_rich_text_fields(self)?;
        field::validate_string_fields(self)?;
        field::validate_patterns(self)?;

        Ok(())
    }
}
