//! The `LazyStream` wrapper and its adaptor methods
//!
//! ```
//! use lazy_stream::stream;
//!
//! let words = ["Hello", ",", "World", "!"];
//! let letters: String = stream::from(words)
//!     .flat_map(|w| stream::from_generator(w.chars()))
//!     .filter(|c| c.is_alphabetic())
//!     .map(|c| c.to_ascii_uppercase())
//!     .iter()
//!     .collect();
//! assert_eq!(letters, "HELLOWORLD");
//! ```

use crate::stream::{Boxed, BoxedStream, CursorIter, Filter, FlatMap, Map};
use crate::stream::{Cursor, Source};
use crate::stream_configuration::MetricsConfig;
use crate::stream_performance_metrics::{Metered, MetricsHandle};

/// A lazily evaluated, composable sequence.
///
/// The stream only holds its source. Adaptors wrap that source in a new one
/// and return a new stream; nothing is read until a cursor is pulled through
/// [`cursor`](Self::cursor), [`iter`](Self::iter), [`for_each`](Self::for_each)
/// or a `for` loop.
#[derive(Debug, Clone)]
#[must_use = "streams are lazy and do nothing unless consumed"]
pub struct LazyStream<S> {
    source: S,
}

impl<S: Source> LazyStream<S> {
    /// Wrap a source. Does not read from it.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The source this stream reads from. Cloning it and passing it to
    /// [`new`](Self::new) gives an equivalent stream.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Open a fresh cursor over the sequence.
    pub fn cursor(&self) -> S::Cursor {
        self.source.cursor()
    }

    /// Open a fresh cursor as a std `Iterator`.
    pub fn iter(&self) -> CursorIter<S::Cursor> {
        self.cursor().iter()
    }

    /// Apply `action` to every element in order.
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(S::Item),
    {
        let mut cursor = self.cursor();
        while let Some(item) = cursor.advance() {
            action(item);
        }
    }

    /// Apply a fallible `action` to every element in order, stopping at and
    /// returning the first error.
    pub fn try_for_each<E, F>(&self, mut action: F) -> Result<(), E>
    where
        F: FnMut(S::Item) -> Result<(), E>,
    {
        let mut cursor = self.cursor();
        while let Some(item) = cursor.advance() {
            action(item)?;
        }
        Ok(())
    }

    /// Transform every element with `mapper`, one call per element, at the
    /// moment the element is taken from the cursor.
    pub fn map<R, F>(self, mapper: F) -> LazyStream<Map<S, F>>
    where
        F: Fn(S::Item) -> R,
    {
        LazyStream::new(Map::new(self.source, mapper))
    }

    /// Replace every element with the elements of the stream `mapper` returns
    /// for it. Sub-streams are drained one after another; empty ones
    /// contribute nothing.
    pub fn flat_map<Sub, F>(self, mapper: F) -> LazyStream<FlatMap<S, F>>
    where
        Sub: Source,
        F: Fn(S::Item) -> LazyStream<Sub>,
    {
        LazyStream::new(FlatMap::new(self.source, mapper))
    }

    /// Keep only the elements for which `predicate` holds.
    pub fn filter<P>(self, predicate: P) -> LazyStream<Filter<S, P>>
    where
        P: Fn(&S::Item) -> bool,
    {
        LazyStream::new(Filter::new(self.source, predicate))
    }

    /// Erase the adaptor chain type.
    pub fn boxed<'a>(self) -> BoxedStream<'a, S::Item>
    where
        S: 'a,
        S::Cursor: 'a,
    {
        LazyStream::new(Boxed::new(self.source))
    }

    /// Count every interaction with this stream's source. The returned handle
    /// reads the counters; they stay at zero until something is pulled.
    pub fn with_metrics(self, config: MetricsConfig) -> (LazyStream<Metered<S>>, MetricsHandle) {
        let (metered, handle) = Metered::new(self.source, config);
        (LazyStream::new(metered), handle)
    }
}

impl<'s, S: Source> IntoIterator for &'s LazyStream<S> {
    type Item = S::Item;
    type IntoIter = CursorIter<S::Cursor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Source> IntoIterator for LazyStream<S> {
    type Item = S::Item;
    type IntoIter = CursorIter<S::Cursor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
