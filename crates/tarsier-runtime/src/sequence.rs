//! Sequence abstraction and the generic map / reduce / sum helpers
//!
//! The host runtime supplies four primitives over its arrays: `len`, `first`,
//! `rest` and `push`. [`Sequence`] models the read side (`len`, `first`,
//! `rest`) and [`Push`] the accumulator side. The helpers below peel the
//! first element, feed it to the callback and continue on the rest, all in a
//! single forward loop with a mutable accumulator, so stack depth does not
//! grow with the input.
//!
//! # Examples
//!
//! ```
//! use tarsier_runtime::sequence;
//!
//! let input = [1, 2, 3];
//! assert_eq!(sequence::map(&input[..], |x| x * 2), vec![2, 4, 6]);
//! assert_eq!(sequence::reduce(&input[..], 10, |acc, x| acc - x), 4);
//! assert_eq!(sequence::sum(&input[..]), Some(6));
//! assert_eq!(sequence::sum(&[i64::MAX, 1][..]), None);
//! ```

use crate::value::{Value, ValueArray};
use std::convert::Infallible;

/// Read side of the host primitives: `len`, `first`, `rest`
pub trait Sequence: Sized {
    type Item;

    /// Number of elements
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First element, `None` when empty
    fn first(&self) -> Option<&Self::Item>;

    /// Everything but the first element. The rest of an empty sequence is empty.
    fn rest(&self) -> Self;
}

/// Accumulator side of the host primitives: `push`
///
/// Consumes the accumulator and hands back the extended one, so the caller
/// never observes a partially built sequence.
pub trait Push<T>: Sized {
    fn push(self, item: T) -> Self;
}

impl<'a, T> Sequence for &'a [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn first(&self) -> Option<&T> {
        <[T]>::first(self)
    }

    fn rest(&self) -> Self {
        let slice: &'a [T] = *self;
        match slice.split_first() {
            Some((_, tail)) => tail,
            None => slice,
        }
    }
}

impl<T> Push<T> for Vec<T> {
    fn push(mut self, item: T) -> Self {
        Vec::push(&mut self, item);
        self
    }
}

impl Push<Value> for ValueArray {
    fn push(mut self, item: Value) -> Self {
        ValueArray::push(&mut self, item);
        self
    }
}

/// Apply `transform` to each element in order, pushing results onto `acc`.
///
/// Stops at the first error and returns it.
pub fn try_map_into<S, A, U, E, F>(seq: S, mut acc: A, mut transform: F) -> Result<A, E>
where
    S: Sequence,
    A: Push<U>,
    F: FnMut(&S::Item) -> Result<U, E>,
{
    let mut remaining = seq;
    while let Some(element) = remaining.first() {
        acc = acc.push(transform(element)?);
        remaining = remaining.rest();
    }
    Ok(acc)
}

/// Infallible [`try_map_into`]
pub fn map_into<S, A, U, F>(seq: S, acc: A, mut transform: F) -> A
where
    S: Sequence,
    A: Push<U>,
    F: FnMut(&S::Item) -> U,
{
    unwrap_infallible(try_map_into(seq, acc, |e| Ok(transform(e))))
}

/// Map into a fresh `Vec` of the same length as `seq`
pub fn try_map<S, U, E, F>(seq: S, transform: F) -> Result<Vec<U>, E>
where
    S: Sequence,
    F: FnMut(&S::Item) -> Result<U, E>,
{
    let acc = Vec::with_capacity(seq.len());
    try_map_into(seq, acc, transform)
}

pub fn map<S, U, F>(seq: S, mut transform: F) -> Vec<U>
where
    S: Sequence,
    F: FnMut(&S::Item) -> U,
{
    unwrap_infallible(try_map(seq, |e| Ok(transform(e))))
}

/// Left fold: starts at `initial`, then `result = combine(result, e)` for
/// each element `e` in order. An empty sequence yields `initial` untouched.
pub fn try_reduce<S, B, E, F>(seq: S, initial: B, mut combine: F) -> Result<B, E>
where
    S: Sequence,
    F: FnMut(B, &S::Item) -> Result<B, E>,
{
    let mut result = initial;
    let mut remaining = seq;
    while let Some(element) = remaining.first() {
        result = combine(result, element)?;
        remaining = remaining.rest();
    }
    Ok(result)
}

pub fn reduce<S, B, F>(seq: S, initial: B, mut combine: F) -> B
where
    S: Sequence,
    F: FnMut(B, &S::Item) -> B,
{
    unwrap_infallible(try_reduce(seq, initial, |acc, e| Ok(combine(acc, e))))
}

/// Addition that reports overflow instead of panicking or wrapping
pub trait CheckedAdd: Sized {
    fn checked_add(&self, other: &Self) -> Option<Self>;
}

macro_rules! impl_checked_add_int {
    ($($t:ty),*) => {
        $(impl CheckedAdd for $t {
            fn checked_add(&self, other: &Self) -> Option<Self> {
                <$t>::checked_add(*self, *other)
            }
        })*
    };
}

impl_checked_add_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl CheckedAdd for f32 {
    fn checked_add(&self, other: &Self) -> Option<Self> {
        Some(self + other)
    }
}

impl CheckedAdd for f64 {
    fn checked_add(&self, other: &Self) -> Option<Self> {
        Some(self + other)
    }
}

/// `reduce` with the additive identity and `+`
///
/// Returns `None` if any partial sum overflows.
pub fn sum<S>(seq: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: Default + CheckedAdd,
{
    try_reduce(seq, <S::Item as Default>::default(), |acc, e| {
        acc.checked_add(e).ok_or(())
    })
    .ok()
}

fn unwrap_infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
