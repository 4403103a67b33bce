use lazy_stream::stream::{self, BoxedStream};
use lazy_stream::{Cursor, StreamError};
use std::cell::{Cell, RefCell};

fn range_to(n: u32) -> BoxedStream<'static, u32> {
    stream::from(0..n).boxed()
}

#[test]
fn test_flat_map_concatenates_in_order() {
    let counts = vec![2, 0, 3, 1];
    let flattened: Vec<u32> = stream::from(&counts)
        .flat_map(|n| range_to(*n))
        .iter()
        .collect();
    assert_eq!(flattened, vec![0, 1, 0, 1, 2, 0]);
}

#[test]
fn test_flat_map_all_empty_sub_streams() {
    let mapped = Cell::new(0);
    let flattened: Vec<u32> = stream::from(0..4)
        .flat_map(|_| {
            mapped.set(mapped.get() + 1);
            stream::empty::<u32>()
        })
        .iter()
        .collect();

    assert!(flattened.is_empty());
    assert_eq!(mapped.get(), 4);
}

#[test]
fn test_flat_map_stops_at_first_non_empty_sub_stream() {
    let pulled = RefCell::new(Vec::new());
    let stream = stream::from([0, 0, 2, 0, 1]).flat_map(|n| {
        pulled.borrow_mut().push(n);
        range_to(n)
    });

    let mut cursor = stream.cursor();
    assert!(pulled.borrow().is_empty());

    assert!(cursor.has_next());
    assert_eq!(*pulled.borrow(), vec![0, 0, 2]);

    assert_eq!(cursor.next_item(), Ok(0));
    assert!(cursor.has_next());
    assert_eq!(cursor.next_item(), Ok(1));
    assert_eq!(*pulled.borrow(), vec![0, 0, 2]);

    assert!(cursor.has_next());
    assert_eq!(*pulled.borrow(), vec![0, 0, 2, 0, 1]);
    assert_eq!(cursor.next_item(), Ok(0));
    assert!(!cursor.has_next());
    assert!(!cursor.has_next());
    assert_eq!(cursor.next_item(), Err(StreamError::Exhausted));
}

#[test]
fn test_flat_map_next_item_without_has_next() {
    let stream = stream::from([1u32, 2]).flat_map(range_to);
    let mut cursor = stream.cursor();

    assert_eq!(cursor.next_item(), Err(StreamError::Exhausted));
}

#[test]
fn test_flat_map_chained_through_filter_and_map() {
    let sentences = ["the quick", "", "brown  fox", " "];
    let words: Vec<String> = stream::from(sentences)
        .flat_map(|s| stream::from_generator(s.split(' ')))
        .filter(|w| !w.is_empty())
        .map(str::to_uppercase)
        .flat_map(|w| stream::once(w))
        .iter()
        .collect();
    assert_eq!(words, vec!["THE", "QUICK", "BROWN", "FOX"]);
}

#[test]
fn test_nested_flat_map() {
    let pairs: Vec<(u32, u32)> = stream::from(1..4u32)
        .flat_map(|a| stream::from(0..a).map(move |b| (a, b)))
        .iter()
        .collect();
    assert_eq!(pairs, vec![(1, 0), (2, 0), (2, 1), (3, 0), (3, 1), (3, 2)]);
}

#[test]
fn test_flat_map_over_infinite_upstream() {
    let first: Vec<u32> = stream::from(0u32..)
        .flat_map(|n| stream::from_fn(move || std::iter::repeat(n).take(n as usize)))
        .iter()
        .take(6)
        .collect();
    assert_eq!(first, vec![1, 2, 2, 3, 3, 3]);
}

#[test]
#[should_panic(expected = "no sub-stream for 2")]
fn test_flat_map_mapper_panic_propagates_during_scan() {
    let stream = stream::from([0, 0, 2]).flat_map(|n| {
        if n == 2 {
            panic!("no sub-stream for {}", n);
        }
        range_to(n)
    });
    let mut cursor = stream.cursor();
    cursor.has_next();
}

#[test]
fn test_boxed_streams_of_different_shapes() {
    let pick = |n: u32| -> BoxedStream<'static, u32> {
        if n % 2 == 0 {
            stream::from([n, n]).boxed()
        } else {
            stream::from(0..10).filter(move |x| *x == n).map(|x| x * 100).boxed()
        }
    };

    let values: Vec<u32> = stream::from(1..5).flat_map(pick).iter().collect();
    assert_eq!(values, vec![100, 2, 2, 300, 4, 4]);
}

#[test]
fn test_boxed_stream_is_repeatable() {
    let boxed = stream::from(['a', 'b']).map(|c| c.to_ascii_uppercase()).boxed();
    let copy = boxed.clone();

    assert_eq!(boxed.iter().collect::<String>(), "AB");
    assert_eq!(copy.iter().collect::<String>(), "AB");
    assert_eq!(boxed.iter().collect::<String>(), "AB");
}
