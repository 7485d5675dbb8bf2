use tracing::trace;

use crate::{
    infra::{Result, SourceSite, SymNodeError},
    node::{SymNode, SymNodeImpl, constant},
};

/// An unbacked integer with a stable identity, e.g. the ragged dimension of a
/// nested tensor. `coeff` scales the identity (`2*j1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SingletonSymNode {
    val: i64,
    coeff: i64,
}

impl SingletonSymNode {
    pub fn new(val: i64, coeff: i64) -> Self {
        Self { val, coeff }
    }

    // Singletons are equal only to singletons with the same identity and
    // coefficient, and never to a concrete integer.
    fn equals(&self, other: &SymNode) -> Result<bool> {
        if let Some(val) = other.singleton_int() {
            return Ok(self.val == val && Some(self.coeff) == other.singleton_coeff());
        }

        if other.constant_int().is_some() {
            return Ok(false);
        }

        Err(SymNodeError::NotSupported(
            "singleton ints can only be compared against singleton or constant ints",
        ))
    }
}

impl SymNodeImpl for SingletonSymNode {
    fn is_int(&self) -> bool {
        true
    }

    fn is_bool(&self) -> bool {
        false
    }

    fn is_float(&self) -> bool {
        false
    }

    fn int_(&self) -> Result<i64> {
        Err(SymNodeError::NotSupported("singleton ints have no concrete value"))
    }

    fn bool_(&self) -> Result<bool> {
        Err(SymNodeError::TypeMismatch("not a bool"))
    }

    fn guard_int(&self, site: &SourceSite) -> Result<i64> {
        trace!(%site, node = %self.str(), "guard_int on singleton");
        self.int_()
    }

    fn guard_bool(&self, _site: &SourceSite) -> Result<bool> {
        self.bool_()
    }

    fn guard_float(&self, _site: &SourceSite) -> Result<f64> {
        Err(SymNodeError::TypeMismatch("not a float"))
    }

    fn has_hint(&self) -> bool {
        false
    }

    fn singleton_int(&self) -> Option<i64> {
        Some(self.val)
    }

    fn singleton_coeff(&self) -> Option<i64> {
        Some(self.coeff)
    }

    fn str(&self) -> String {
        if self.coeff == 1 {
            format!("j{}", self.val)
        } else {
            format!("{}*j{}", self.coeff, self.val)
        }
    }

    fn sym_eq(&self, other: &SymNode) -> Result<SymNode> {
        Ok(constant(self.equals(other)?))
    }

    fn sym_ne(&self, other: &SymNode) -> Result<SymNode> {
        Ok(constant(!self.equals(other)?))
    }
}
