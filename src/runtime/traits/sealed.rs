// ABOUTME: Sealed marker for the capability traits.
// ABOUTME: Only backends defined in this crate may implement them.

/// Implemented by this crate's backends only, so capability traits can grow
/// new methods without breaking downstream implementors.
pub trait Sealed {}
