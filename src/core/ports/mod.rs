//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the pure listing core and the
//! backends that actually read a repository.
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Mock producers for unit tests
//! - **Flexibility**: Swap the command-line backend for libgit2 without
//!   changing the classifier or sorter

mod ref_source;

pub use ref_source::RefSource;

#[cfg(test)]
pub use ref_source::MockRefSource;
