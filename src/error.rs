//! Crate error types.
//!
//! Errors here are construction-time contract violations only: a controller
//! or focus target built from a host whose geometry is unusable. They are
//! fatal for the instance being built and propagate to the caller
//! synchronously. Runtime lookup misses (unknown identifiers, empty target
//! sequences) are benign no-ops, never errors, and nothing in this domain
//! has transient failures worth retrying.

use thiserror::Error;

use crate::types::BoundingBox;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The host element reports an inverted or non-finite layout box.
    #[error("host element has a degenerate bounding box: {0:?}")]
    DegenerateHost(BoundingBox),
}

pub type Result<T> = std::result::Result<T, Error>;
