use std::{fmt::Debug, sync::Arc};

use crate::infra::{Result, SourceSite, SymNodeError};

pub use constant::{BoolConstant, ConstantSymNode, ConstantValue, IntConstant, Literal, LiteralKind};
pub use singleton::SingletonSymNode;

pub mod constant;
pub mod singleton;

#[cfg(test)]
mod tests;

/// Shared handle to any node. Cloning only bumps the atomic reference count.
pub type SymNode = Arc<dyn SymNodeImpl>;

/// The capability every symbolic node variant implements.
///
/// Each variant is a leaf. Methods a variant does not support keep their
/// default, which reports [`SymNodeError::NotImplemented`].
pub trait SymNodeImpl: Debug + Send + Sync {
    fn is_int(&self) -> bool;
    fn is_bool(&self) -> bool;
    fn is_float(&self) -> bool;

    fn is_constant(&self) -> bool {
        false
    }

    fn is_symbolic(&self) -> bool {
        true
    }

    fn int_(&self) -> Result<i64> {
        Err(SymNodeError::NotImplemented("int_"))
    }

    fn bool_(&self) -> Result<bool> {
        Err(SymNodeError::NotImplemented("bool_"))
    }

    /// Extracts the integer value at a point where the caller is about to
    /// specialize on it.
    fn guard_int(&self, _site: &SourceSite) -> Result<i64> {
        Err(SymNodeError::NotImplemented("guard_int"))
    }

    fn guard_bool(&self, _site: &SourceSite) -> Result<bool> {
        Err(SymNodeError::NotImplemented("guard_bool"))
    }

    fn guard_float(&self, _site: &SourceSite) -> Result<f64> {
        Err(SymNodeError::NotImplemented("guard_float"))
    }

    /// Guards that the node is a boolean holding `true`.
    fn expect_true(&self, site: &SourceSite) -> Result<bool> {
        self.guard_bool(site)
    }

    fn has_hint(&self) -> bool;

    fn maybe_as_int(&self) -> Option<i64> {
        None
    }

    // Constant folding queries. Never fail and never guard.
    fn constant_int(&self) -> Option<i64> {
        None
    }

    fn constant_bool(&self) -> Option<bool> {
        None
    }

    /// Identity of a singleton node, `None` for every other kind.
    fn singleton_int(&self) -> Option<i64> {
        None
    }

    fn singleton_coeff(&self) -> Option<i64> {
        None
    }

    fn str(&self) -> String;

    fn sym_eq(&self, _other: &SymNode) -> Result<SymNode> {
        Err(SymNodeError::NotImplemented("eq"))
    }

    fn sym_ne(&self, _other: &SymNode) -> Result<SymNode> {
        Err(SymNodeError::NotImplemented("ne"))
    }

    fn wrap_int(&self, num: i64) -> SymNode {
        constant(num)
    }

    fn wrap_bool(&self, value: bool) -> SymNode {
        constant(value)
    }
}

pub fn constant<T: Literal>(value: T) -> SymNode {
    Arc::new(ConstantSymNode::new(value))
}

pub fn singleton(val: i64, coeff: i64) -> SymNode {
    Arc::new(SingletonSymNode::new(val, coeff))
}
