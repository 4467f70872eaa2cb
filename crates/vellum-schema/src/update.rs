use crate::{
    migrate, normalize,
    patch::{self, SchemaSpecificationUpdate},
    prelude::*,
    reconcile,
};

impl SchemaSpecification {
    /// Apply a partial update request, producing the accepted new
    /// specification, the unchanged current one (no-op), or a
    /// `BadRequest`. Atomic from the caller's perspective: an error means
    /// nothing was applied.
    pub fn update(&self, request: SchemaSpecificationUpdate) -> Result<Self, BadRequest> {
        if let Some(version) = request.version
            && version != self.version + 1
        {
            return Err(BadRequest::new(format!(
                "update version must be {}, got {version}",
                self.version + 1
            )));
        }

        let mut candidate = self.clone();

        // Phase 1: merge partial type/field updates into canonical records.
        patch::merge::merge_types(
            &mut candidate,
            &request.entity_types,
            &request.component_types,
        )?;

        // Phase 2: version-gated migration log, with reference propagation.
        migrate::apply_migrations(&mut candidate, self.version, &request.migrations)?;

        // Phase 3: immediate index-only actions, never logged.
        migrate::transient::apply_transient_migrations(
            &mut candidate,
            request.version,
            &request.transient_migrations,
        )?;

        // Phase 4: merge declared patterns/indexes, re-derive used sets, prune.
        reconcile::reconcile_patterns_and_indexes(
            &mut candidate,
            &request.patterns,
            &request.indexes,
        )?;

        // Phase 5: canonical order, then the full invariant suite.
        normalize::normalize(&mut candidate);
        candidate.validate()?;

        // Phase 6: structural diff decides no-op versus version bump.
        Ok(normalize::version_gate(candidate, self))
    }
}

///
/// TESTS
///
