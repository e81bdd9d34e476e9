//! Input generators shared by the tests and the benchmarks.
//!
//! Every generator seeds its own RNG from [`get_or_init_rand_seed`], so for a given seed and
//! length the output is always the same.

use std::env;

use once_cell::sync::OnceCell;
use rand::distributions::Uniform;
use rand::prelude::*;
use zipf::ZipfDistribution;

static SEED: OnceCell<u64> = OnceCell::new();

pub fn random(len: usize) -> Vec<i64> {
    //     .
    // : . : :
    // :.:::.::

    random_uniform(len, i64::MIN..=i64::MAX)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i64>
where
    R: Into<Uniform<i64>>,
{
    // :.:.:.::

    let mut rng = new_seeded_rng();
    let dist: Uniform<i64> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i64> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_seeded_rng();
    let dist = ZipfDistribution::new(len, exponent)
        .unwrap_or_else(|_| panic!("invalid zipf parameters len: {len} exponent: {exponent}"));

    (0..len).map(|_| dist.sample(&mut rng) as i64).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i64> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    // Simulate pre-existing sorted slice, where len - sorted_percent are the new unsorted values
    // and part of the overall distribution.
    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[..sorted_len.min(len)].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i64> {
    // ......
    // ::::::

    let value = new_seeded_rng().gen::<i64>();
    vec![value; len]
}

pub fn ascending(len: usize) -> Vec<i64> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i64).collect()
}

pub fn descending(len: usize) -> Vec<i64> {
    // :.
    // :::.
    // :::::.

    (0..len as i64).rev().collect()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i64> {
    //     .:  :.
    //   .:::  :::.   :.
    // .:::::  :::::. ::.

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_seeded_rng();
    let mut v = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);

    for chunk in v.chunks_mut(chunk_len) {
        if rng.gen::<bool>() {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    v
}

pub fn pipe_organ(len: usize) -> Vec<i64> {
    //   .:.
    // .:::::.

    let mut v = random(len);
    let first_half = len / 2;

    v[..first_half].sort_unstable();
    v[first_half..].sort_unstable_by(|a, b| b.cmp(a));

    v
}

/// Returns the process wide seed, drawing a fresh one on first use unless `OVERRIDE_SEED` is set.
pub fn get_or_init_rand_seed() -> u64 {
    *SEED.get_or_init(|| {
        let seed = match env::var("OVERRIDE_SEED") {
            Ok(seed) => seed
                .parse::<u64>()
                .unwrap_or_else(|_| panic!("OVERRIDE_SEED must be a u64, got: {seed:?}")),
            Err(_) => thread_rng().gen(),
        };

        println!("Seed: {seed}");
        seed
    })
}

fn new_seeded_rng() -> StdRng {
    StdRng::seed_from_u64(get_or_init_rand_seed())
}
