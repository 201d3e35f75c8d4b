#![cfg(feature = "combinator")]
//! Example-driven tests for the primitive combinators and the way they
//! nest.

use combinars::callable::{Callable, Identity, Plus};
use combinars::combinator::{
    CombineFn, False, Packer, True, always, by, by_each, capture, combine, compose, compress,
    compress_from, conditional, construct, if_, pack, unpack,
};
use combinars::hlist;
use combinars::sequence::{ArrayKind, ListKind, TupleKind};
use rstest::rstest;
use std::cell::RefCell;

// =============================================================================
// unpack
// =============================================================================

#[rstest]
fn unpack_spreads_one_sequence() {
    let describe = |number: i32, letter: char, word: &str| format!("{number}{letter}{word}");
    assert_eq!(unpack(describe).invoke(((1, 'a', "b"),)), "1ab");
}

#[rstest]
fn unpack_concatenates_several_sequences() {
    let describe = |number: i32, letter: char, word: &str| format!("{number}{letter}{word}");
    assert_eq!(unpack(describe).invoke(((1,), ['a'], hlist!["b"])), "1ab");
    assert_eq!(unpack(describe).invoke(((), (1, 'a'), ("b",))), "1ab");
}

#[rstest]
fn nested_unpack_peels_two_levels() {
    let add3 = |a: i32, b: i32, c: i32| a + b + c;
    let nested = ((1, 2), (3,));
    assert_eq!(unpack(unpack(add3)).invoke((nested,)), 6);
}

#[rstest]
fn unpack_of_nothing_calls_with_no_arguments() {
    let answer = || 42;
    assert_eq!(unpack(answer).invoke(()), 42);
    assert_eq!(unpack(answer).invoke(((),)), 42);
}

// =============================================================================
// by / construct
// =============================================================================

#[rstest]
fn by_projects_left_to_right() {
    let order = RefCell::new(String::new());
    let record = |letter: char| {
        order.borrow_mut().push(letter);
        letter.to_ascii_uppercase()
    };
    let gather = construct::<TupleKind>();
    assert_eq!(by(record, gather).invoke(('a', 'b', 'c')), ('A', 'B', 'C'));
    assert_eq!(*order.borrow(), "abc");
}

#[rstest]
fn construct_builds_each_kind() {
    assert_eq!(construct::<TupleKind>().invoke((1, 2)), (1, 2));
    assert_eq!(construct::<ArrayKind>().invoke((1, 2)), [1, 2]);
    assert_eq!(construct::<ListKind>().invoke((1, 'x')), hlist![1, 'x']);
}

#[rstest]
fn by_each_packs_the_projections() {
    let length = |text: &str| text.len();
    assert_eq!(by_each(length).invoke(("a", "bcd")), pack((1, 3)));
}

// =============================================================================
// compose
// =============================================================================

#[rstest]
fn compose_feeds_right_to_left() {
    let add = |left: i32, right: i32| left + right;
    let negate = |value: i32| -value;
    let describe = |value: i32| format!("<{value}>");
    assert_eq!(compose!(describe, negate, add).invoke((2, 3)), "<-5>");
}

#[rstest]
fn compose_groupings_agree() {
    let f = |value: i32| value + 1;
    let g = |value: i32| value * 10;
    let h = |value: i32| value - 2;
    let flat = compose!(f, g, h);
    assert_eq!(flat.invoke((5,)), compose(compose(f, g), h).invoke((5,)));
    assert_eq!(flat.invoke((5,)), compose(f, compose(g, h)).invoke((5,)));
    assert_eq!(flat.invoke((5,)), 31);
}

#[rstest]
fn compose_with_identity_changes_nothing() {
    let g = |value: i32| value * 10;
    assert_eq!(compose(Identity, g).invoke((4,)), g(4));
}

// =============================================================================
// conditional
// =============================================================================

#[rstest]
#[case(-3, "negative")]
#[case(0, "zero")]
#[case(8, "positive")]
fn runtime_guards_pick_in_order(#[case] value: i32, #[case] expected: &str) {
    let chain = conditional!(
        if_(value < 0).then(always("negative")),
        if_(value == 0).then(always("zero")),
        always("positive"),
    );
    assert_eq!(chain.invoke((value,)), expected);
}

#[rstest]
fn earlier_branches_shadow_later_ones() {
    let chain = conditional!(
        if_(true).then(always(1)),
        if_(true).then(always(2)),
        always(3)
    );
    assert_eq!(chain.invoke(()), 1);
}

#[rstest]
fn static_guards_may_change_the_result_type() {
    let chain = conditional(
        if_(False).then(always(0)),
        conditional(if_(True).then(Packer), always(())),
    );
    assert_eq!(chain.invoke(("kept",)), pack(("kept",)));
}

// =============================================================================
// pack / capture
// =============================================================================

#[rstest]
fn pack_applies_later() {
    let packed = pack((3, 4));
    let hypotenuse_squared = |a: i32, b: i32| a * a + b * b;
    assert_eq!(packed.apply_ref(|a: &i32, b: &i32| a + b), 7);
    assert_eq!(packed.apply(hypotenuse_squared), 25);
}

#[rstest]
fn capture_places_captured_arguments_first() {
    let describe = |a: &str, b: &str, c: &str| format!("{a}{b}{c}");
    let partial = capture(describe).with(("x", "y"));
    assert_eq!(partial.invoke(("z",)), "xyz");
}

#[rstest]
fn capture_call_once_moves_the_captured_values() {
    let take = |owned: Vec<i32>, extra: usize| owned.len() + extra;
    let partial = capture(take).with((vec![1, 2, 3],));
    assert_eq!(partial.call_once((10,)), 13);
}

// =============================================================================
// combine
// =============================================================================

#[rstest]
fn combine_applies_each_callable_to_its_argument() {
    let increment = |value: i32| value + 1;
    let shout = |text: &str| text.to_uppercase();
    let combined = combine(construct::<TupleKind>(), (increment, shout));
    assert_eq!(combined.invoke((1, "a")), (2, String::from("A")));
}

#[rstest]
fn combine_reaches_any_continuation() {
    let square = |value: i32| value * value;
    assert_eq!(combine(Plus, (square, square)).invoke((3, 4)), 25);
}

#[rstest]
fn combine_fn_takes_callables_from_a_sequence() {
    let double = |value: i32| value * 2;
    let triple = |value: i32| value * 3;
    let callables = (construct::<TupleKind>(), double, triple);
    let combined = unpack(CombineFn).invoke((callables,));
    assert_eq!(combined.invoke((1, 1)), (2, 3));
}

// =============================================================================
// compress
// =============================================================================

#[rstest]
fn compress_folds_from_the_left() {
    let pair = |left: String, right: char| format!("({left}{right})");
    assert_eq!(compress(pair).invoke((String::from("a"), 'b', 'c')), "((ab)c)");
}

#[rstest]
fn compress_from_accepts_no_arguments() {
    assert_eq!(compress_from(Plus, 5_i32).invoke(()), 5);
    assert_eq!(compress_from(Plus, 5_i32).invoke((1_i32, 2_i32)), 8);
}

#[rstest]
fn compress_composes_with_unpack() {
    let total = unpack(compress(Plus));
    assert_eq!(total.invoke(((1_i32, 2_i32), (3_i32,))), 6);
}
