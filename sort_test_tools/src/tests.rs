use std::cmp::Ordering;

use crate::patterns;
use crate::Sort;

#[cfg(not(feature = "large_test_sizes"))]
const TEST_SIZES: &[usize] = &[
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 19, 20, 24, 31, 32, 33, 50, 64, 100, 128, 200,
    500, 1_000,
];

#[cfg(feature = "large_test_sizes")]
const TEST_SIZES: &[usize] = &[
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 19, 20, 24, 31, 32, 33, 50, 64, 100, 128, 200,
    500, 1_000, 2_048, 5_000, 10_000,
];

fn sort_comp<S: Sort>(input: &[i64], pattern: &str) {
    let original = input.to_vec();

    let mut expected = input.to_vec();
    expected.sort();

    let result = S::sort(input);

    assert_eq!(
        input,
        original.as_slice(),
        "{} modified its input. pattern: {pattern} len: {}",
        S::name(),
        input.len()
    );

    if result != expected {
        if input.len() <= 20 {
            eprintln!("Input: {input:?}");
            eprintln!("Expected: {expected:?}");
            eprintln!("Got: {result:?}");
        }

        panic!(
            "{} produced a wrong result. pattern: {pattern} len: {} seed: {}",
            S::name(),
            input.len(),
            patterns::get_or_init_rand_seed()
        );
    }
}

fn test_impl<S: Sort>(pattern: &str, pattern_fn: impl Fn(usize) -> Vec<i64>) {
    for test_len in TEST_SIZES {
        let input = pattern_fn(*test_len);
        sort_comp::<S>(&input, pattern);
    }
}

// --- TESTS ---

pub fn basic<S: Sort>() {
    let cases: [(&[i64], &[i64]); 6] = [
        (&[2, 4, 4, 6, 5, 1], &[1, 2, 4, 4, 5, 6]),
        (&[2, 1, 0, -1, -4], &[-4, -1, 0, 1, 2]),
        (&[3, 2], &[2, 3]),
        (&[2], &[2]),
        (&[], &[]),
        (&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5]),
    ];

    for (input, expected) in cases {
        let result = S::sort(input);
        assert_eq!(result, expected, "{} failed for input {input:?}", S::name());
    }
}

pub fn fixed_seed<S: Sort>() {
    let seed_a = patterns::get_or_init_rand_seed();
    let seed_b = patterns::get_or_init_rand_seed();

    assert_eq!(seed_a, seed_b);
    assert_eq!(patterns::random(64), patterns::random(64));
}

pub fn random<S: Sort>() {
    test_impl::<S>("random", patterns::random);
}

pub fn random_narrow<S: Sort>() {
    // Great for debugging.
    test_impl::<S>("random_narrow", |len| {
        patterns::random_uniform(len, 0..=(len / 10) as i64)
    });
}

pub fn random_binary<S: Sort>() {
    test_impl::<S>("random_binary", |len| patterns::random_uniform(len, 0i64..=1));
}

pub fn random_negative<S: Sort>() {
    test_impl::<S>("random_negative", |len| {
        patterns::random_uniform(len, -50i64..=50)
    });
}

pub fn extremes<S: Sort>() {
    test_impl::<S>("extremes", |len| {
        let mut v = patterns::random_uniform(len, -3i64..=3);
        for elem in v.iter_mut() {
            *elem = match *elem {
                -3 => i64::MIN,
                3 => i64::MAX,
                other => other,
            };
        }
        v
    });
}

pub fn random_zipf<S: Sort>() {
    test_impl::<S>("random_zipf", |len| patterns::random_zipf(len, 1.0));
}

pub fn random_sorted<S: Sort>() {
    test_impl::<S>("random_s50", |len| patterns::random_sorted(len, 50.0));
    test_impl::<S>("random_s95", |len| patterns::random_sorted(len, 95.0));
}

pub fn all_equal<S: Sort>() {
    test_impl::<S>("all_equal", patterns::all_equal);
}

pub fn ascending<S: Sort>() {
    test_impl::<S>("ascending", patterns::ascending);
}

pub fn descending<S: Sort>() {
    test_impl::<S>("descending", patterns::descending);
}

pub fn saw_mixed<S: Sort>() {
    test_impl::<S>("saw_mixed", |len| {
        patterns::saw_mixed(len, ((len as f64).log2().round()) as usize)
    });
}

pub fn pipe_organ<S: Sort>() {
    test_impl::<S>("pipe_organ", patterns::pipe_organ);
}

pub fn non_mutation<S: Sort>() {
    for test_len in TEST_SIZES {
        let input = patterns::descending(*test_len);
        let snapshot = input.clone();

        let _ = S::sort(&input);
        let _ = S::sort_by(&input, |a, b| b.cmp(a));

        assert_eq!(input, snapshot, "{} modified its input", S::name());
    }
}

pub fn idempotent<S: Sort>() {
    for test_len in TEST_SIZES {
        let once = S::sort(&patterns::random_uniform(*test_len, -100i64..=100));
        let twice = S::sort(&once);

        assert_eq!(once, twice, "{} is not idempotent, len: {test_len}", S::name());
    }
}

pub fn deterministic<S: Sort>() {
    for test_len in TEST_SIZES {
        let input = patterns::random_zipf(*test_len, 0.8);

        assert_eq!(
            S::sort(&input),
            S::sort(&input),
            "{} is not deterministic, len: {test_len}",
            S::name()
        );
    }
}

pub fn sort_by_reverse<S: Sort>() {
    for test_len in TEST_SIZES {
        let input = patterns::random_uniform(*test_len, -1_000i64..=1_000);

        let mut expected = input.clone();
        expected.sort_by(|a, b| b.cmp(a));

        let result = S::sort_by(&input, |a, b| b.cmp(a));
        assert_eq!(result, expected, "{} reverse failed, len: {test_len}", S::name());
    }
}

pub fn sort_by_key<S: Sort>() {
    for test_len in TEST_SIZES {
        let input = patterns::random_uniform(*test_len, -500i64..=500);

        let result = S::sort_by(&input, |a, b| a.unsigned_abs().cmp(&b.unsigned_abs()));

        let keys = result.iter().map(|x| x.unsigned_abs()).collect::<Vec<_>>();
        assert!(
            keys.windows(2).all(|w| w[0] <= w[1]),
            "{} did not order by key, len: {test_len}",
            S::name()
        );

        let mut sorted_input = input.clone();
        sorted_input.sort();
        let mut sorted_result = result.clone();
        sorted_result.sort();
        assert_eq!(sorted_input, sorted_result, "{} lost elements", S::name());
    }
}

pub fn sort_by_equal<S: Sort>() {
    // Everything compares equal, any permutation of the input is a valid result.
    let input = patterns::random(500);
    let result = S::sort_by(&input, |_, _| Ordering::Equal);

    let mut sorted_input = input.clone();
    sorted_input.sort();
    let mut sorted_result = result;
    sorted_result.sort();

    assert_eq!(sorted_input, sorted_result, "{} lost elements", S::name());
}

#[macro_export]
macro_rules! instantiate_sort_tests_gen {
    ($prefix:ident, $sort_impl:ty, $($test_name:ident),* $(,)?) => {
        $(
            $crate::paste::paste! {
                #[test]
                fn [<$prefix _ $test_name>]() {
                    $crate::tests::$test_name::<$sort_impl>();
                }
            }
        )*
    };
}

// Using a macro to generate the tests allows running them individually with
// `cargo test <prefix>_<test_name>`.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($prefix:ident, $sort_impl:ty) => {
        $crate::instantiate_sort_tests_gen!(
            $prefix,
            $sort_impl,
            basic,
            fixed_seed,
            random,
            random_narrow,
            random_binary,
            random_negative,
            extremes,
            random_zipf,
            random_sorted,
            all_equal,
            ascending,
            descending,
            saw_mixed,
            pipe_organ,
            non_mutation,
            idempotent,
            deterministic,
            sort_by_reverse,
            sort_by_key,
            sort_by_equal,
        );
    };
}
