//! Symbolic scalar nodes for sizes, strides and predicates that may not be
//! known while a graph is being built.

pub mod infra;
pub mod node;

pub use infra::{Result, SourceSite, SymNodeError};
pub use node::{SymNode, SymNodeImpl, constant, singleton};
