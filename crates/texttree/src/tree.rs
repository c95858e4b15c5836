//! Tree loading and lookup.
//!
//! Loading follows a two-phase approach:
//! 1. **Walk phase** (`walk`): Builds a `Node` tree with children sorted by name
//!    and file contents already read
//! 2. **Construct phase** (`construct`): Assigns a lookup key to every node in
//!    preorder, resolving stem collisions between siblings
//!
//! ## Module Structure
//!
//! - `walk` - Parallel filesystem walking that builds the Node tree
//! - `construct` - Key assignment and collision resolution
//! - `store` - Main API (EntityStore)

mod construct;
mod store;
mod walk;


// Re-export main types
pub use store::EntityStore;
