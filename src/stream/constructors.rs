//! Sources and constructors: from, from_generator, from_fn, empty, once, repeat, repeat_with, unfold
use std::cell::RefCell;
use std::iter;
use std::ops::{Range, RangeFrom, RangeInclusive};
use std::rc::Rc;

use super::core::{Cursor, IterCursor, Slot, Source};
use crate::error::{StreamError, StreamResult};
use crate::lazy_stream::LazyStream;

// ================================
// Repeatable sources
// ================================

/// Iterables whose clone is a handle rather than a copy of the data:
/// borrowed collections, integer ranges and arrays of `Copy` values.
///
/// [`from`] accepts only these, so opening a cursor never duplicates a
/// collection or runs a user `Clone`. Owned collections go through
/// [`from_generator`] or [`from_fn`].
pub trait Reiterable: Clone + IntoIterator {}

impl<'a, C: ?Sized> Reiterable for &'a C where &'a C: IntoIterator {}

impl<A> Reiterable for Range<A> where Range<A>: Iterator + Clone {}

impl<A> Reiterable for RangeFrom<A> where RangeFrom<A>: Iterator + Clone {}

impl<A> Reiterable for RangeInclusive<A> where RangeInclusive<A>: Iterator + Clone {}

impl<T: Copy, const N: usize> Reiterable for [T; N] {}

/// Repeatable source over a cheaply cloned iterable. Every cursor iterates a
/// fresh clone of it.
#[derive(Debug, Clone)]
pub struct Iterable<I> {
    iterable: I,
}

impl<I> Source for Iterable<I>
where
    I: Clone + IntoIterator,
{
    type Item = I::Item;
    type Cursor = IterCursor<I::IntoIter>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor::new(self.iterable.clone().into_iter())
    }
}

/// Repeatable source that calls a factory for every new cursor.
pub struct FromFn<F> {
    factory: Rc<F>,
}

impl<F> Clone for FromFn<F> {
    fn clone(&self) -> Self {
        Self { factory: Rc::clone(&self.factory) }
    }
}

impl<F, I> Source for FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Cursor = IterCursor<I::IntoIter>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor::new((self.factory)().into_iter())
    }
}

/// Repeatable source that threads a state value through `step`.
/// Each cursor starts again from a clone of the seed.
pub struct Unfold<St, F> {
    seed: St,
    step: Rc<F>,
}

impl<St: Clone, F> Clone for Unfold<St, F> {
    fn clone(&self) -> Self {
        Self { seed: self.seed.clone(), step: Rc::clone(&self.step) }
    }
}

impl<St, F, T> Source for Unfold<St, F>
where
    St: Clone,
    F: Fn(St) -> Option<(T, St)>,
{
    type Item = T;
    type Cursor = UnfoldCursor<St, F, T>;

    fn cursor(&self) -> Self::Cursor {
        UnfoldCursor {
            state: Some(self.seed.clone()),
            step: Rc::clone(&self.step),
            slot: Slot::Empty,
        }
    }
}

pub struct UnfoldCursor<St, F, T> {
    state: Option<St>,
    step: Rc<F>,
    slot: Slot<T>,
}

impl<St, F, T> Cursor for UnfoldCursor<St, F, T>
where
    F: Fn(St) -> Option<(T, St)>,
{
    type Item = T;

    fn has_next(&mut self) -> bool {
        match self.slot {
            Slot::Ready(_) => return true,
            Slot::Done => return false,
            Slot::Empty => {}
        }

        match self.state.take().and_then(|state| (self.step)(state)) {
            Some((item, next_state)) => {
                self.state = Some(next_state);
                self.slot = Slot::Ready(item);
                true
            }
            None => {
                self.slot = Slot::Done;
                false
            }
        }
    }

    fn next_item(&mut self) -> StreamResult<T> {
        self.slot.take()
    }
}

// ================================
// Single-use source
// ================================

/// Source over a single `Iterator`. Only the first cursor sees its elements;
/// later cursors are empty.
pub struct Generator<I> {
    iter: RefCell<Option<I>>,
}

impl<I: Iterator> Source for Generator<I> {
    type Item = I::Item;
    type Cursor = GeneratorCursor<I>;

    fn cursor(&self) -> Self::Cursor {
        let inner = self.iter.borrow_mut().take();
        if inner.is_none() {
            log::warn!("single-use generator source asked for another cursor; yielding nothing");
        }
        GeneratorCursor { inner: inner.map(IterCursor::new) }
    }
}

pub struct GeneratorCursor<I: Iterator> {
    inner: Option<IterCursor<I>>,
}

impl<I: Iterator> Cursor for GeneratorCursor<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        self.inner.as_mut().map_or(false, |cursor| cursor.has_next())
    }

    fn next_item(&mut self) -> StreamResult<Self::Item> {
        match self.inner.as_mut() {
            Some(cursor) => cursor.next_item(),
            None => Err(StreamError::Exhausted),
        }
    }
}

// ================================
// Constructor Functions
// ================================

/// Create a stream over a borrowed collection, a range or a `Copy` array.
/// Nothing is read until a cursor is pulled.
pub fn from<I>(iterable: I) -> LazyStream<Iterable<I>>
where
    I: Reiterable,
{
    LazyStream::new(Iterable { iterable })
}

/// Create a stream over a single-use iterator
pub fn from_generator<I>(iter: I) -> LazyStream<Generator<I::IntoIter>>
where
    I: IntoIterator,
{
    LazyStream::new(Generator { iter: RefCell::new(Some(iter.into_iter())) })
}

/// Create a stream whose cursors each iterate a fresh `factory()` result
pub fn from_fn<F, I>(factory: F) -> LazyStream<FromFn<F>>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    LazyStream::new(FromFn { factory: Rc::new(factory) })
}

/// Create an empty stream
pub fn empty<T>() -> LazyStream<Iterable<iter::Empty<T>>> {
    LazyStream::new(Iterable { iterable: iter::empty() })
}

/// Create a stream that emits a single value
pub fn once<T: Clone>(value: T) -> LazyStream<Iterable<iter::Once<T>>> {
    LazyStream::new(Iterable { iterable: iter::once(value) })
}

/// Create a stream that repeats a value indefinitely
pub fn repeat<T: Clone>(value: T) -> LazyStream<Iterable<iter::Repeat<T>>> {
    LazyStream::new(Iterable { iterable: iter::repeat(value) })
}

/// Create an infinite stream that calls `f` for every element
pub fn repeat_with<T, F>(f: F) -> LazyStream<Unfold<(), impl Fn(()) -> Option<(T, ())>>>
where
    F: Fn() -> T,
{
    unfold((), move |()| Some((f(), ())))
}

/// Create a stream from a seed value and a step function
pub fn unfold<St, T, F>(seed: St, step: F) -> LazyStream<Unfold<St, F>>
where
    St: Clone,
    F: Fn(St) -> Option<(T, St)>,
{
    LazyStream::new(Unfold { seed, step: Rc::new(step) })
}
