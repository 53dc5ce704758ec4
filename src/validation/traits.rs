// Content scanner trait: the seam between the HTTP layer and matching.
//
// The web handlers hold an `Arc<dyn ContentScanner>` so they can be
// exercised with a stub scanner in tests. The keyword validator is the
// only production implementation.

use super::validator::ValidationResult;

/// Produces a safety verdict for a piece of text. Implementations must be
/// total: every input string yields a result.
pub trait ContentScanner: Send + Sync {
    fn validate(&self, content: &str) -> ValidationResult;
}
