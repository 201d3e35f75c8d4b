#![cfg(feature = "algorithm")]
//! Tests for how the combinators treat ownership of elements.
//!
//! Owned sequences are consumed, shared borrows lend `&T` elements, and
//! exclusive borrows lend `&mut T` elements. Values that are never cloned
//! can be moved through every algorithm that does not need a copy.

use combinars::algorithm::{filter, fold, fold_from, for_each, transform, zip_with};
use combinars::callable::Callable;
use combinars::combinator::{False, Predicate, True, capture, pack, unpack};
use combinars::hlist;
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Fixtures
// =============================================================================

/// A value without `Clone`, so any hidden copy fails to compile.
#[derive(Debug, PartialEq, Eq)]
struct Token(u32);

/// Counts how many times it has been cloned.
#[derive(Debug)]
struct Tracked<'a> {
    clones: &'a Cell<usize>,
}

impl Clone for Tracked<'_> {
    fn clone(&self) -> Self {
        self.clones.set(self.clones.get() + 1);
        Self {
            clones: self.clones,
        }
    }
}

struct KeepTokens;

impl Predicate<Token> for KeepTokens {
    type Output = True;

    fn test(&self, _: &Token) -> True {
        True
    }
}

impl Predicate<u8> for KeepTokens {
    type Output = False;

    fn test(&self, _: &u8) -> False {
        False
    }
}

// =============================================================================
// Owned sequences
// =============================================================================

#[rstest]
fn transform_moves_owned_elements() {
    let tokens = (Token(1), Token(2));
    let bumped = transform(tokens, |Token(value): Token| Token(value + 10));
    assert_eq!(bumped, (Token(11), Token(12)));
}

#[rstest]
fn fold_moves_owned_elements() {
    let merge = |Token(left): Token, Token(right): Token| Token(left * 10 + right);
    assert_eq!(fold((Token(1), Token(2), Token(3)), merge), Token(123));
}

#[rstest]
fn fold_from_moves_the_seed() {
    let push = |mut tokens: Vec<Token>, token: Token| {
        tokens.push(token);
        tokens
    };
    let collected = fold_from((Token(1), Token(2)), Vec::new(), push);
    assert_eq!(collected, vec![Token(1), Token(2)]);
}

#[rstest]
fn zip_with_moves_owned_elements_of_the_first_sequence() {
    let add = |Token(left): Token, right: u32| left + right;
    assert_eq!(zip_with((Token(1), Token(2)), (10, 20), add), (11, 22));
}

#[rstest]
fn zip_with_never_clones_owned_elements() {
    let clones = Cell::new(0);
    let first = (Tracked { clones: &clones }, Tracked { clones: &clones });
    let pair = |_: Tracked<'_>, index: u8| index;
    assert_eq!(zip_with(first, (1, 2), pair), (1, 2));
    assert_eq!(clones.get(), 0);
}

#[rstest]
fn filter_moves_kept_elements() {
    let mixed: (Token, u8, Token) = (Token(4), 0, Token(5));
    assert_eq!(filter(mixed, KeepTokens), (Token(4), Token(5)));
}

// =============================================================================
// Borrowed sequences
// =============================================================================

#[rstest]
fn transform_of_a_borrow_leaves_the_source_usable() {
    let words = (String::from("alpha"), String::from("be"));
    let lengths = transform(&words, |word: &String| word.len());
    assert_eq!(lengths, (5, 2));
    assert_eq!(words.0, "alpha");
}

#[rstest]
fn for_each_through_an_exclusive_borrow_mutates_in_place() {
    let mut words = [String::from("a"), String::from("b")];
    for_each(&mut words, |word: &mut String| word.push('!'));
    assert_eq!(words, [String::from("a!"), String::from("b!")]);
}

#[rstest]
fn for_each_through_an_exclusive_list_borrow_mutates_in_place() {
    let mut list = hlist![String::from("x"), String::from("y")];
    for_each(&mut list, |word: &mut String| word.push('!'));
    assert_eq!(list, hlist![String::from("x!"), String::from("y!")]);
}

#[rstest]
fn empty_arrays_fold_to_the_seed() {
    let empty: [Token; 0] = [];
    let never = |_: Token, _: Token| Token(0);
    assert_eq!(fold_from(&empty, Token(9), |seed: Token, _: &Token| seed), Token(9));
    assert_eq!(fold_from(empty, Token(1), never), Token(1));
}

#[rstest]
fn zip_with_over_borrows_copies_nothing() {
    let names = (Token(1), Token(2));
    let offsets = (Token(10), Token(20));
    let sum = |Token(left): &Token, Token(right): &Token| left + right;
    assert_eq!(zip_with(&names, &offsets, sum), (11, 22));
    assert_eq!(names.1, Token(2));
}

#[rstest]
fn unpack_of_a_borrowed_list_lends_references() {
    let pair = (Token(3), Token(4));
    let product = unpack(|Token(left): &Token, Token(right): &Token| left * right);
    assert_eq!(product.invoke((&pair,)), 12);
    assert_eq!(pair, (Token(3), Token(4)));
}

// =============================================================================
// Holders: pack and capture
// =============================================================================

#[rstest]
fn pack_apply_moves_and_apply_ref_borrows() {
    let packed = pack((Token(7),));
    assert_eq!(packed.apply_ref(|Token(value): &Token| *value), 7);
    assert_eq!(packed.apply(|token: Token| token), Token(7));
}

#[rstest]
fn pack_call_clones_once_per_call() {
    let clones = Cell::new(0);
    let packed = pack((Tracked { clones: &clones },));
    let ignore = |_: Tracked<'_>| ();

    packed.invoke((ignore,));
    packed.invoke((ignore,));
    assert_eq!(clones.get(), 2);
}

#[rstest]
fn captured_call_clones_while_call_once_moves() {
    let clones = Cell::new(0);
    let consume = |_: Tracked<'_>, extra: u8| extra;
    let partial = capture(consume).with((Tracked { clones: &clones },));

    assert_eq!(partial.invoke((1,)), 1);
    assert_eq!(clones.get(), 1);
    assert_eq!(partial.call_once((2,)), 2);
    assert_eq!(clones.get(), 1);
}

#[rstest]
fn call_once_accepts_values_without_clone() {
    let wrap = |Token(left): Token, Token(right): Token| Token(left + right);
    let partial = capture(wrap).with((Token(1),));
    assert_eq!(partial.call_once((Token(2),)), Token(3));
}
