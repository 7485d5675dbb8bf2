use proptest::{prop_assert, prop_assert_eq, proptest};

use super::{BoolConstant, ConstantValue, IntConstant, SingletonSymNode, SymNodeImpl, constant, singleton};
use crate::{SymNodeError, site};

proptest! {
    #[test]
    fn int_constant_properties(v in proptest::num::i64::ANY) {
        let node = IntConstant::new(v);

        prop_assert!(node.is_int());
        prop_assert!(!node.is_bool());
        prop_assert!(!node.is_float());
        prop_assert_eq!(node.int_(), Ok(v));
        prop_assert_eq!(node.constant_int(), Some(v));
        prop_assert_eq!(node.constant_bool(), None);
        prop_assert!(node.has_hint());
        prop_assert_eq!(node.str(), v.to_string());
        prop_assert_eq!(node.bool_(), Err(SymNodeError::TypeMismatch("not a bool")));
    }

    #[test]
    fn bool_constant_properties(b in proptest::bool::ANY) {
        let node = BoolConstant::new(b);

        prop_assert!(node.is_bool());
        prop_assert!(!node.is_int());
        prop_assert!(!node.is_float());
        prop_assert_eq!(node.bool_(), Ok(b));
        prop_assert_eq!(node.constant_bool(), Some(b));
        prop_assert_eq!(node.constant_int(), None);
        prop_assert!(node.has_hint());
        prop_assert_eq!(node.str(), if b { "true" } else { "false" });
        prop_assert_eq!(node.int_(), Err(SymNodeError::TypeMismatch("not an int")));
    }

    #[test]
    fn guard_int_ignores_site(v in proptest::num::i64::ANY, line in 0u32..10_000) {
        let node = IntConstant::new(v);
        let site = crate::SourceSite::new("guard.rs", line);

        prop_assert_eq!(node.guard_int(&site), node.int_());
    }
}

#[test]
fn guard_float_is_not_supported() {
    let site = site!();

    assert_eq!(
        IntConstant::new(3).guard_float(&site),
        Err(SymNodeError::NotSupported("not a float"))
    );
    assert_eq!(
        BoolConstant::new(true).guard_float(&site),
        Err(SymNodeError::NotSupported("not a float"))
    );
}

#[test]
fn guard_bool_matches_kind() {
    let site = site!();

    assert_eq!(BoolConstant::new(false).guard_bool(&site), Ok(false));
    assert_eq!(BoolConstant::new(true).expect_true(&site), Ok(true));
    assert_eq!(
        IntConstant::new(1).guard_bool(&site),
        Err(SymNodeError::TypeMismatch("not a bool"))
    );
    assert_eq!(
        BoolConstant::new(true).guard_int(&site),
        Err(SymNodeError::TypeMismatch("not an int"))
    );
}

#[test]
fn constant_value_probes() {
    let value = IntConstant::new(9).value();

    assert!(value.is_int());
    assert!(value.is_int_value(9));
    assert!(!value.is_int_value(8));
    assert!(!value.is_bool_value(true));
    assert_eq!(BoolConstant::new(true).value(), ConstantValue::Bool(true));
    assert_eq!(ConstantValue::Int(-12).to_string(), "-12");
}

#[test]
fn constant_is_not_symbolic() {
    let node = IntConstant::new(4);

    assert!(node.is_constant());
    assert!(!node.is_symbolic());
    assert_eq!(node.maybe_as_int(), Some(4));
    assert_eq!(node.singleton_int(), None);
    assert_eq!(BoolConstant::new(true).maybe_as_int(), None);
}

#[test]
fn wrap_produces_constants() {
    let node = IntConstant::new(0);

    assert_eq!(node.wrap_int(17).constant_int(), Some(17));
    assert_eq!(node.wrap_bool(true).constant_bool(), Some(true));
    assert!(singleton(1, 1).wrap_int(2).is_constant());
}

#[test]
fn singleton_surface() {
    let node = SingletonSymNode::new(3, 1);

    assert!(node.is_int());
    assert!(node.is_symbolic());
    assert!(!node.has_hint());
    assert_eq!(node.singleton_int(), Some(3));
    assert_eq!(node.singleton_coeff(), Some(1));
    assert_eq!(node.constant_int(), None);
    assert_eq!(node.str(), "j3");
    assert_eq!(SingletonSymNode::new(3, 2).str(), "2*j3");
    assert!(matches!(
        node.guard_int(&site!()),
        Err(SymNodeError::NotSupported(_))
    ));
}

#[test]
fn singleton_compares_against_singletons() {
    let j1 = singleton(1, 1);

    assert_eq!(j1.sym_eq(&singleton(1, 1)).unwrap().constant_bool(), Some(true));
    assert_eq!(j1.sym_eq(&singleton(2, 1)).unwrap().constant_bool(), Some(false));
    assert_eq!(j1.sym_eq(&singleton(1, 2)).unwrap().constant_bool(), Some(false));
    assert_eq!(j1.sym_ne(&singleton(2, 1)).unwrap().constant_bool(), Some(true));
}

#[test]
fn singleton_rejects_bool_operand() {
    let result = singleton(1, 1).sym_eq(&constant(true));

    assert!(matches!(result, Err(SymNodeError::NotSupported(_))));
}

#[test]
fn forwarding_bool_constant_is_a_type_mismatch() {
    let result = BoolConstant::new(true).sym_eq(&singleton(1, 1));

    assert_eq!(result.err(), Some(SymNodeError::TypeMismatch("not an int")));
}

#[test]
#[should_panic(expected = "Symbolic node invariant violated")]
fn constant_against_constant_is_fatal() {
    let _ = IntConstant::new(1).sym_eq(&constant(1i64));
}

#[test]
#[should_panic(expected = "constants can only be compared against singleton nodes")]
fn constant_ne_against_constant_is_fatal() {
    let _ = IntConstant::new(1).sym_ne(&constant(false));
}
