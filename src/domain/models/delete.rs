//! Outcome of an identifier-addressed delete.

/// Result of asking the reconciler to delete an employee by id.
///
/// Consumed only by the caller-facing layer; downstream components never see
/// it. `NotDeleted` and `Ambiguous` are expected, reportable outcomes rather
/// than errors: they describe upstream's own refusal or the reconciler
/// declining to issue a destructive call it cannot disambiguate. They must
/// never be folded into a generic success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Upstream confirmed the delete and the directory cache was invalidated.
    Deleted,
    /// Upstream declined the delete.
    NotDeleted {
        /// Explanatory text for the caller.
        reason: String,
    },
    /// No employee with the requested id exists upstream.
    NotFound,
    /// The exact-match gate failed: `matches` directory records carry the
    /// resolved name, so a name-addressed delete cannot be guaranteed to hit
    /// the requested record.
    Ambiguous {
        /// How many records matched the resolved name.
        matches: usize,
    },
}
