use std::fmt::Display;

use thiserror::Error;

// Fatal precondition checks. These signal a programming error upstream and are
// never turned into a `SymNodeError`.
#[macro_export]
macro_rules! internal_assert {
    ($cond:expr, $msg:expr) => {
        if !$cond {
            panic!("Symbolic node invariant violated: {}", $msg)
        }
    };
}

/// Builds a [`SourceSite`] for the line the macro is expanded on.
#[macro_export]
macro_rules! site {
    () => {
        $crate::infra::SourceSite::new(file!(), line!())
    };
}

pub type Result<T> = std::result::Result<T, SymNodeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymNodeError {
    #[error("Type mismatch: {0}.")]
    TypeMismatch(&'static str),

    #[error("Operation not supported: {0}.")]
    NotSupported(&'static str),

    #[error("{0} is not implemented for this node.")]
    NotImplemented(&'static str),
}

/// Location of a guard call. Only used for diagnostics, it never changes the
/// value a guard returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceSite {
    pub file: &'static str,
    pub line: u32,
}

impl SourceSite {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }
}

impl Display for SourceSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
