use std::{fmt::Display, marker::PhantomData, sync::Arc};

use tracing::{debug, trace};

use crate::{
    infra::{Result, SourceSite, SymNodeError},
    internal_assert,
    node::{SymNode, SymNodeImpl},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstantValue {
    Int(i64),
    Bool(bool),
}

impl ConstantValue {
    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    pub fn is_int_value(&self, value: i64) -> bool {
        match self {
            Self::Int(v) => *v == value,
            _ => false,
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    pub fn is_bool_value(&self, value: bool) -> bool {
        match self {
            Self::Bool(v) => *v == value,
            _ => false,
        }
    }
}

impl Display for ConstantValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Bool(true) => write!(f, "true"),
            Self::Bool(false) => write!(f, "false"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Int,
    Bool,
}

mod private {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for bool {}
}

/// Payload types a [`ConstantSymNode`] can be built from.
pub trait Literal: private::Sealed + Copy + std::fmt::Debug + Send + Sync + 'static {
    const KIND: LiteralKind;

    fn boxed(self) -> ConstantValue;
}

impl Literal for i64 {
    const KIND: LiteralKind = LiteralKind::Int;

    fn boxed(self) -> ConstantValue {
        ConstantValue::Int(self)
    }
}

impl Literal for bool {
    const KIND: LiteralKind = LiteralKind::Bool;

    fn boxed(self) -> ConstantValue {
        ConstantValue::Bool(self)
    }
}

/// A node wrapping a literal fixed at construction.
///
/// The kind is chosen by `T`, so `is_int`/`is_bool` never look at the payload.
/// Constants cannot compare themselves against arbitrary nodes: `sym_eq` and
/// `sym_ne` hand the work to a singleton operand, see [`Self::forwarded_operand`].
#[derive(Debug, Clone)]
pub struct ConstantSymNode<T: Literal> {
    value: ConstantValue,
    _kind: PhantomData<T>,
}

pub type IntConstant = ConstantSymNode<i64>;
pub type BoolConstant = ConstantSymNode<bool>;

impl<T: Literal> ConstantSymNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: value.boxed(),
            _kind: PhantomData,
        }
    }

    pub fn value(&self) -> ConstantValue {
        self.value
    }

    // The other side must be a singleton; this node is re-wrapped as an int
    // constant before the call is forwarded.
    fn forwarded_operand(&self, other: &SymNode, op: &'static str) -> Result<SymNode> {
        internal_assert!(
            other.singleton_int().is_some(),
            "constants can only be compared against singleton nodes"
        );

        // Bool constants are not reinterpreted as ints.
        let ConstantValue::Int(value) = self.value else {
            return Err(SymNodeError::TypeMismatch("not an int"));
        };

        debug!(op, constant = value, other = %other.str(), "forwarding comparison");

        Ok(Arc::new(IntConstant::new(value)))
    }
}

impl<T: Literal> SymNodeImpl for ConstantSymNode<T> {
    fn is_int(&self) -> bool {
        T::KIND == LiteralKind::Int
    }

    fn is_bool(&self) -> bool {
        T::KIND == LiteralKind::Bool
    }

    fn is_float(&self) -> bool {
        false
    }

    fn is_constant(&self) -> bool {
        true
    }

    fn is_symbolic(&self) -> bool {
        false
    }

    fn int_(&self) -> Result<i64> {
        match self.value {
            ConstantValue::Int(v) if self.is_int() => Ok(v),
            _ => Err(SymNodeError::TypeMismatch("not an int")),
        }
    }

    fn bool_(&self) -> Result<bool> {
        match self.value {
            ConstantValue::Bool(v) if self.is_bool() => Ok(v),
            _ => Err(SymNodeError::TypeMismatch("not a bool")),
        }
    }

    fn guard_int(&self, site: &SourceSite) -> Result<i64> {
        trace!(%site, node = %self.value, "guard_int on constant");
        self.int_()
    }

    fn guard_bool(&self, site: &SourceSite) -> Result<bool> {
        trace!(%site, node = %self.value, "guard_bool on constant");
        self.bool_()
    }

    fn guard_float(&self, _site: &SourceSite) -> Result<f64> {
        Err(SymNodeError::NotSupported("not a float"))
    }

    fn has_hint(&self) -> bool {
        true
    }

    fn maybe_as_int(&self) -> Option<i64> {
        self.constant_int()
    }

    fn constant_int(&self) -> Option<i64> {
        self.int_().ok()
    }

    fn constant_bool(&self) -> Option<bool> {
        self.bool_().ok()
    }

    fn str(&self) -> String {
        self.value.to_string()
    }

    fn sym_eq(&self, other: &SymNode) -> Result<SymNode> {
        let operand = self.forwarded_operand(other, "eq")?;
        other.sym_eq(&operand)
    }

    fn sym_ne(&self, other: &SymNode) -> Result<SymNode> {
        let operand = self.forwarded_operand(other, "ne")?;
        other.sym_ne(&operand)
    }
}
