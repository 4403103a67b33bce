use lazy_stream::stream;
use quickcheck::{quickcheck, TestResult};

fn step(x: i32) -> i32 {
    x.wrapping_mul(3).wrapping_add(1)
}

fn halve(x: i32) -> i32 {
    x / 2
}

fn expand(x: &i32) -> Vec<i32> {
    let len = x.rem_euclid(4) as usize;
    (0..len as i32).map(|i| x.wrapping_add(i)).collect()
}

quickcheck! {
    fn prop_map_preserves_order(xs: Vec<i32>) -> bool {
        let streamed: Vec<i32> = stream::from(&xs).map(|x| step(*x)).iter().collect();
        let expected: Vec<i32> = xs.into_iter().map(step).collect();
        streamed == expected
    }

    fn prop_filter_is_exact_subsequence(xs: Vec<i32>, modulus: u8) -> TestResult {
        if modulus == 0 {
            return TestResult::discard();
        }
        let m = modulus as i32;
        let keep = move |x: &i32| x.rem_euclid(m) == 0;

        let streamed: Vec<i32> = stream::from(&xs).map(|x| *x).filter(keep).iter().collect();
        let expected: Vec<i32> = xs.into_iter().filter(|x| keep(x)).collect();
        TestResult::from_bool(streamed == expected)
    }

    fn prop_flat_map_concatenates(xs: Vec<i32>) -> bool {
        let streamed: Vec<i32> = stream::from(&xs)
            .flat_map(|x| stream::from_generator(expand(x)))
            .iter()
            .collect();
        let expected: Vec<i32> = xs.iter().flat_map(expand).collect();
        streamed == expected
    }

    fn prop_map_map_equals_composed(xs: Vec<i32>) -> bool {
        let chained: Vec<i32> = stream::from(&xs).map(|x| *x).map(step).map(halve).iter().collect();
        let composed: Vec<i32> = stream::from(&xs).map(|x| halve(step(*x))).iter().collect();
        chained == composed
    }

    fn prop_rejecting_filter_is_empty(xs: Vec<i32>) -> bool {
        stream::from(&xs).filter(|_| false).iter().next().is_none()
    }

    fn prop_repeated_traversal_is_stable(xs: Vec<u16>) -> bool {
        let s = stream::from(&xs).map(|x| *x as u32 + 1).filter(|x| x % 3 != 0);
        let first: Vec<u32> = s.iter().collect();
        let second: Vec<u32> = s.iter().collect();
        first == second
    }
}

#[test]
fn test_full_chain_matches_std_iterators() {
    fn chain_matches(xs: Vec<i16>) -> bool {
        let streamed: Vec<i32> = stream::from(&xs)
            .map(|x| *x as i32)
            .filter(|x| x % 2 != 0)
            .flat_map(|x| stream::from_generator(expand(&x)))
            .map(halve)
            .iter()
            .collect();
        let expected: Vec<i32> = xs
            .iter()
            .map(|x| *x as i32)
            .filter(|x| x % 2 != 0)
            .flat_map(|x| expand(&x))
            .map(halve)
            .collect();
        streamed == expected
    }
    quickcheck(chain_matches as fn(Vec<i16>) -> bool);
}
