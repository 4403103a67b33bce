//! Core traits and the `map`/`filter` adaptors
//!
//! A [`Source`] is a capability that hands out fresh [`Cursor`]s. Adaptors wrap
//! an upstream source and only ask it for a cursor when their own cursor is
//! created, so building a chain never touches the underlying data.

use std::mem;
use std::rc::Rc;

use crate::error::{StreamError, StreamResult};

/// A stateful, single-pass handle over a sequence.
///
/// `next_item` must be preceded by a `has_next` call that returned `true`.
/// Calling it otherwise is a contract violation and yields
/// [`StreamError::Exhausted`].
pub trait Cursor {
    type Item;

    /// Returns `true` if `next_item` will produce an element. Asking again
    /// without consuming the element does not advance the cursor, and once
    /// `false` has been returned every later call returns `false` too.
    fn has_next(&mut self) -> bool;

    /// Consumes the element announced by the last `has_next`.
    fn next_item(&mut self) -> StreamResult<Self::Item>;

    /// `has_next` followed by `next_item`, folded into an `Option`.
    ///
    /// # Panics
    ///
    /// Panics with the [`StreamError`] message if `next_item` fails right
    /// after `has_next` returned `true`.
    fn advance(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        match self.next_item() {
            Ok(item) => Some(item),
            Err(err) => panic!("{}", err),
        }
    }

    /// Adapt this cursor to the std `Iterator` protocol.
    fn iter(self) -> CursorIter<Self>
    where
        Self: Sized,
    {
        CursorIter { cursor: self }
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next_item(&mut self) -> StreamResult<Self::Item> {
        (**self).next_item()
    }
}

/// Anything that can produce cursors on demand.
///
/// A source stores no traversal state of its own: every call to `cursor`
/// starts an independent pass, unless the source is single-use by nature.
pub trait Source {
    type Item;
    type Cursor: Cursor<Item = Self::Item>;

    fn cursor(&self) -> Self::Cursor;
}

/// Cache slot shared by the cursors that have to look ahead.
///
/// `Empty` means the next element has not been searched for yet, `Ready`
/// holds an element announced by `has_next`, `Done` is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<T> {
    Empty,
    Ready(T),
    Done,
}

impl<T> Slot<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Slot::Ready(_))
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Slot::Done)
    }

    /// Takes the cached element, moving `Ready` back to `Empty`. `Done` stays `Done`.
    pub fn take(&mut self) -> StreamResult<T> {
        match mem::replace(self, Slot::Empty) {
            Slot::Ready(value) => Ok(value),
            Slot::Done => {
                *self = Slot::Done;
                Err(StreamError::Exhausted)
            }
            Slot::Empty => Err(StreamError::Exhausted),
        }
    }
}

/// `Iterator` view over a [`Cursor`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct CursorIter<C> {
    cursor: C,
}

impl<C> CursorIter<C> {
    /// Give back the underlying cursor, positioned after the last element
    /// this iterator returned.
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.advance()
    }
}

// ================================
// Iterator-backed cursor
// ================================

/// Cursor over a std `Iterator`. `has_next` pulls one element ahead and keeps
/// it in a [`Slot`] until `next_item` hands it out.
pub struct IterCursor<I: Iterator> {
    iter: I,
    slot: Slot<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new(iter: I) -> Self {
        Self { iter, slot: Slot::Empty }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        match self.slot {
            Slot::Ready(_) => true,
            Slot::Done => false,
            Slot::Empty => match self.iter.next() {
                Some(item) => {
                    self.slot = Slot::Ready(item);
                    true
                }
                None => {
                    self.slot = Slot::Done;
                    false
                }
            },
        }
    }

    fn next_item(&mut self) -> StreamResult<Self::Item> {
        self.slot.take()
    }
}

// ================================
// Map
// ================================

/// Source produced by [`LazyStream::map`](crate::LazyStream::map).
pub struct Map<S, F> {
    upstream: S,
    mapper: Rc<F>,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(upstream: S, mapper: F) -> Self {
        Self { upstream, mapper: Rc::new(mapper) }
    }
}

impl<S: Clone, F> Clone for Map<S, F> {
    fn clone(&self) -> Self {
        Self { upstream: self.upstream.clone(), mapper: Rc::clone(&self.mapper) }
    }
}

impl<S, F, R> Source for Map<S, F>
where
    S: Source,
    F: Fn(S::Item) -> R,
{
    type Item = R;
    type Cursor = MapCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        MapCursor { upstream: self.upstream.cursor(), mapper: Rc::clone(&self.mapper) }
    }
}

pub struct MapCursor<C, F> {
    upstream: C,
    mapper: Rc<F>,
}

impl<C, F, R> Cursor for MapCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> R,
{
    type Item = R;

    fn has_next(&mut self) -> bool {
        self.upstream.has_next()
    }

    fn next_item(&mut self) -> StreamResult<R> {
        let item = self.upstream.next_item()?;
        Ok((self.mapper)(item))
    }
}

// ================================
// Filter
// ================================

/// Source produced by [`LazyStream::filter`](crate::LazyStream::filter).
pub struct Filter<S, P> {
    upstream: S,
    predicate: Rc<P>,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Self {
        Self { upstream, predicate: Rc::new(predicate) }
    }
}

impl<S: Clone, P> Clone for Filter<S, P> {
    fn clone(&self) -> Self {
        Self { upstream: self.upstream.clone(), predicate: Rc::clone(&self.predicate) }
    }
}

impl<S, P> Source for Filter<S, P>
where
    S: Source,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor = FilterCursor<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        FilterCursor {
            upstream: self.upstream.cursor(),
            predicate: Rc::clone(&self.predicate),
            slot: Slot::Empty,
        }
    }
}

pub struct FilterCursor<C: Cursor, P> {
    upstream: C,
    predicate: Rc<P>,
    slot: Slot<C::Item>,
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        match self.slot {
            Slot::Ready(_) => return true,
            Slot::Done => return false,
            Slot::Empty => {}
        }

        while let Some(item) = self.upstream.advance() {
            if (self.predicate)(&item) {
                self.slot = Slot::Ready(item);
                return true;
            }
        }
        self.slot = Slot::Done;
        false
    }

    fn next_item(&mut self) -> StreamResult<Self::Item> {
        self.slot.take()
    }
}
