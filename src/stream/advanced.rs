//! Advanced adaptors: flat_map and type-erased (boxed) sources
use std::rc::Rc;

use super::core::{Cursor, Slot, Source};
use crate::error::{StreamError, StreamResult};
use crate::lazy_stream::LazyStream;

// ================================
// FlatMap
// ================================

/// Source produced by [`LazyStream::flat_map`](crate::LazyStream::flat_map).
pub struct FlatMap<S, F> {
    upstream: S,
    mapper: Rc<F>,
}

impl<S, F> FlatMap<S, F> {
    pub(crate) fn new(upstream: S, mapper: F) -> Self {
        Self { upstream, mapper: Rc::new(mapper) }
    }
}

impl<S: Clone, F> Clone for FlatMap<S, F> {
    fn clone(&self) -> Self {
        Self { upstream: self.upstream.clone(), mapper: Rc::clone(&self.mapper) }
    }
}

impl<S, F, Sub> Source for FlatMap<S, F>
where
    S: Source,
    Sub: Source,
    F: Fn(S::Item) -> LazyStream<Sub>,
{
    type Item = Sub::Item;
    type Cursor = FlatMapCursor<S::Cursor, F, Sub::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        FlatMapCursor {
            upstream: self.upstream.cursor(),
            mapper: Rc::clone(&self.mapper),
            current: Slot::Empty,
        }
    }
}

/// Drains one sub-cursor at a time. `current` is `Ready` while a sub-cursor is
/// open, `Empty` before the first one and `Done` once upstream ran dry.
pub struct FlatMapCursor<C, F, D> {
    upstream: C,
    mapper: Rc<F>,
    current: Slot<D>,
}

impl<C, F, D, Sub> Cursor for FlatMapCursor<C, F, D>
where
    C: Cursor,
    Sub: Source<Cursor = D>,
    D: Cursor,
    F: Fn(C::Item) -> LazyStream<Sub>,
{
    type Item = D::Item;

    fn has_next(&mut self) -> bool {
        match &mut self.current {
            Slot::Ready(sub) => {
                if sub.has_next() {
                    return true;
                }
            }
            Slot::Done => return false,
            Slot::Empty => {}
        }

        // Advance upstream only until a non-empty sub-stream turns up.
        while let Some(item) = self.upstream.advance() {
            let mut sub = (self.mapper)(item).cursor();
            if sub.has_next() {
                self.current = Slot::Ready(sub);
                return true;
            }
            log::trace!("flat_map skipped an empty sub-stream");
        }
        self.current = Slot::Done;
        false
    }

    fn next_item(&mut self) -> StreamResult<Self::Item> {
        match &mut self.current {
            Slot::Ready(sub) => sub.next_item(),
            _ => Err(StreamError::Exhausted),
        }
    }
}

// ================================
// Boxed
// ================================

/// Type-erased cursor.
pub type BoxCursor<'a, T> = Box<dyn Cursor<Item = T> + 'a>;

trait ErasedSource<'a, T> {
    fn erased_cursor(&self) -> BoxCursor<'a, T>;
}

impl<'a, S> ErasedSource<'a, S::Item> for S
where
    S: Source,
    S::Cursor: 'a,
{
    fn erased_cursor(&self) -> BoxCursor<'a, S::Item> {
        Box::new(self.cursor())
    }
}

/// Source behind [`BoxedStream`]; hides the concrete adaptor chain.
pub struct Boxed<'a, T> {
    inner: Rc<dyn ErasedSource<'a, T> + 'a>,
}

impl<'a, T> Boxed<'a, T> {
    pub(crate) fn new<S>(source: S) -> Self
    where
        S: Source<Item = T> + 'a,
        S::Cursor: 'a,
    {
        Self { inner: Rc::new(source) }
    }
}

impl<'a, T> Clone for Boxed<'a, T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<'a, T> Source for Boxed<'a, T> {
    type Item = T;
    type Cursor = BoxCursor<'a, T>;

    fn cursor(&self) -> Self::Cursor {
        self.inner.erased_cursor()
    }
}

/// A [`LazyStream`] whose adaptor chain has been erased.
pub type BoxedStream<'a, T> = LazyStream<Boxed<'a, T>>;
