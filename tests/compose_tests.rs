//! Integration tests for the composition adaptors.
//!
//! Covers compose!/flow!, argument forwarding through chains, user-defined
//! callables and the helper callables.

#![cfg(feature = "compose")]

use fitting::callable::{Callable, Identity, always};
use fitting::compose::{Compose, compose, fuse, pack};
use fitting::{call, compose, flow};
use rstest::rstest;

fn increment(x: i32) -> i32 {
    x + 1
}

fn decrement(x: i32) -> i32 {
    x - 1
}

// =============================================================================
// compose! tests
// =============================================================================

#[rstest]
#[case(3, 4)]
#[case(0, 1)]
#[case(-7, -6)]
fn test_compose_increment_decrement_increment(#[case] input: i32, #[case] expected: i32) {
    let composed = compose!(increment, decrement, increment);
    assert_eq!(call!(composed, input), expected);
}

#[test]
fn test_compose_builds_right_nested_chain() {
    type Step = fn(i32) -> i32;

    let chain: Compose<Step, Compose<Step, Step>> =
        compose!(increment as Step, decrement as Step, increment as Step);
    assert_eq!(call!(chain, 10), 11);
}

#[test]
fn test_compose_changes_types_along_the_chain() {
    let parse = |text: &str| text.parse::<i32>().unwrap_or_default();
    let double = |x: i32| x * 2;
    let describe = |x: i32| format!("value: {x}");

    let pipeline = compose!(describe, double, parse);
    assert_eq!(call!(pipeline, "21"), "value: 42");
}

#[test]
fn test_compose_with_multi_argument_innermost() {
    let add = |a: i32, b: i32, c: i32| a + b + c;
    let square = |x: i32| x * x;
    assert_eq!(call!(compose!(square, add), 1, 2, 3), 36);
}

#[test]
fn test_compose_with_zero_argument_innermost() {
    let seed = || 5;
    let double = |x: i32| x * 2;
    assert_eq!(call!(compose!(double, seed)), 10);
}

#[test]
fn test_compose_forwards_mutable_reference() {
    let push = |values: &mut Vec<i32>| {
        values.push(1);
        values.len()
    };
    let is_even = |length: usize| length % 2 == 0;

    let mut values = vec![0];
    let composed = compose!(is_even, push);
    assert!(call!(composed, &mut values));
    assert!(!call!(composed, &mut values));
    assert_eq!(values, vec![0, 1, 1]);
}

#[test]
fn test_compose_moves_owned_argument_without_copy() {
    let consume = |text: String| text.into_bytes();
    let length = |bytes: Vec<u8>| bytes.len();
    assert_eq!(call!(compose!(length, consume), String::from("moved")), 5);
}

#[test]
fn test_compose_with_user_overload_set() {
    struct Classify;

    impl Callable<(i32,)> for Classify {
        type Output = &'static str;

        fn call(&self, (value,): (i32,)) -> &'static str {
            if value < 0 { "negative" } else { "non-negative" }
        }
    }

    impl<'a> Callable<(&'a str,)> for Classify {
        type Output = &'static str;

        fn call(&self, _: (&'a str,)) -> &'static str {
            "text"
        }
    }

    let shout = |label: &'static str| label.to_uppercase();

    assert_eq!(call!(compose(shout, Classify), -3), "NEGATIVE");
    assert_eq!(call!(compose(shout, Classify), "x"), "TEXT");
}

#[test]
fn test_compose_function_and_macro_agree() {
    let double = |x: i32| x * 2;
    assert_eq!(call!(compose(increment, double), 4), call!(compose!(increment, double), 4));
}

// =============================================================================
// flow! tests
// =============================================================================

#[rstest]
#[case(1, 4)]
#[case(5, 12)]
fn test_flow_applies_left_to_right(#[case] input: i32, #[case] expected: i32) {
    let double = |x: i32| x * 2;
    let add_two = |x: i32| x + 2;
    assert_eq!(call!(flow!(double, add_two), input), expected);
}

#[test]
fn test_flow_single_function() {
    assert_eq!(call!(flow!(increment), 1), 2);
}

// =============================================================================
// helper callables
// =============================================================================

#[test]
fn test_identity_inside_chain() {
    let chain = compose!(Identity, increment, Identity);
    assert_eq!(call!(chain, 1), 2);
}

#[test]
fn test_always_ignores_inner_result() {
    let chain = compose!(always("done"), increment);
    assert_eq!(call!(chain, 1), "done");
}

#[test]
fn test_fuse_after_tuple_producer() {
    let split = |x: i32| (x / 10, x % 10);
    let add = |tens: i32, units: i32| tens + units;
    assert_eq!(call!(compose!(fuse(add), split), 47), 11);
}

#[test]
fn test_pack_with_move_only_values() {
    let boxed = pack((Box::new(3), Box::new(4)));
    let sum = |a: Box<i32>, b: Box<i32>| *a + *b;
    assert_eq!(call!(boxed, sum), 7);
    assert_eq!(boxed.unpack(&sum), 7);
}
