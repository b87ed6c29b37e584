//! # Quantum
//!
//! A container for parallel, lazily-created states of a single underlying
//! value. One factory, many named states: switch between them by
//! identifier, mutate the selected one in place, fork any state into an
//! independent copy, or sweep a mutation across all of them.
//!
//! ## Core Concepts
//!
//! - **States**: named instances of the payload, materialized on first
//!   selection by the caller-supplied factory and kept in creation order
//! - **Cursor**: the most recently selected identifier; mutation and
//!   exposure target it, and it is resolved through the map on every
//!   access so handles always alias live storage
//! - **Fork**: an independent deep copy of an existing state under a new
//!   identifier (`Clone` supplies the copy)
//! - **Traversal**: visit every state mutably without moving the cursor
//!
//! ## Example
//!
//! ```
//! use quantum::Quantum;
//!
//! #[derive(Clone, Default)]
//! struct Draft {
//!     title: String,
//! }
//!
//! # fn main() -> quantum::Result<()> {
//! let mut drafts = Quantum::new(Draft::default);
//!
//! drafts
//!     .select("outline")?
//!     .mutate(|d| d.title = "Outline".into())?
//!     .fork("outline-v2", "outline")?
//!     .mutate(|d| d.title.push_str(" (revised)"))?;
//!
//! assert_eq!(drafts.identifiers(), ["outline", "outline-v2"]);
//! assert_eq!(drafts.current()?.title, "Outline (revised)");
//! # Ok(())
//! # }
//! ```

pub mod container;
pub mod error;
pub mod factory;

// Re-exports
pub use container::Quantum;
pub use error::{BoxError, QuantumError, Result};
pub use factory::{Factory, Fallible};
