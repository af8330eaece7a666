//! Internal traversal bookkeeping.
//!
//! Kept `pub(crate)` so both traversal templates share one place for visited
//! logic without exposing scratch state in the public API.

pub(crate) mod visited;
