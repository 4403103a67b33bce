//! Sources, cursors and the adaptors behind `LazyStream`
//!
//! Every adaptor is a [`Source`] wrapping another source, paired with one
//! explicit [`Cursor`] type that holds the upstream cursor and any look-ahead
//! slot as plain fields.

pub mod core;
pub mod constructors;
pub mod advanced;

// Re-export core types
pub use self::core::{
    Cursor, Source, Slot, CursorIter, IterCursor,
    Map, MapCursor, Filter, FilterCursor,
};

// Re-export constructors
pub use constructors::{
    from, from_generator, from_fn, empty, once, repeat, repeat_with, unfold,
    Iterable, Reiterable, FromFn, Unfold, UnfoldCursor, Generator, GeneratorCursor,
};

// Re-export advanced adaptors
pub use advanced::{
    FlatMap, FlatMapCursor, Boxed, BoxedStream, BoxCursor,
};
