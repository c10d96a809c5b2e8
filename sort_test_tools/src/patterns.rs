//! Deterministic input generators.
//!
//! All randomness derives from one process wide seed, printed by the test battery on failure. Set
//! `SORT_TEST_SEED` to replay a failing run.

use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("SORT_TEST_SEED")
        .ok()
        .and_then(|seed| seed.trim().parse().ok())
        .unwrap_or_else(|| thread_rng().gen())
});

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_rng(stream: u64) -> StdRng {
    // Different patterns of the same length should not share a prefix.
    StdRng::seed_from_u64(random_init_seed() ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

// --- Pattern generators ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng(1);
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    // :.:.:.::

    let mut rng = new_rng(2);
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Only four distinct values, so almost every element has equal-keyed partners.
pub fn random_d4(len: usize) -> Vec<i32> {
    random_uniform(len, 0..4)
}

pub fn random_d256(len: usize) -> Vec<i32> {
    random_uniform(len, 0..256)
}

pub fn random_zipf_with(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng(3);
    let dist = ZipfDistribution::new(len, exponent).expect("len and exponent are positive");

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_zipf(len: usize) -> Vec<i32> {
    random_zipf_with(len, 1.0)
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn saw_mixed(len: usize) -> Vec<i32> {
    // :.  .:
    // :::.:::
    // Alternating ascending and descending runs of random length.

    let mut rng = new_rng(4);
    let mut v = random(len);
    let mut start = 0;
    let mut ascending = true;

    while start < len {
        let run_len = rng.gen_range(1..=(len / 4).max(2));
        let end = (start + run_len).min(len);
        if ascending {
            v[start..end].sort();
        } else {
            v[start..end].sort_by(|a, b| b.cmp(a));
        }
        ascending = !ascending;
        start = end;
    }

    v
}

pub fn random_strings(len: usize) -> Vec<String> {
    let mut rng = new_rng(5);
    (0..len)
        .map(|_| {
            let str_len = rng.gen_range(0..12);
            random_letters(&mut rng, str_len)
        })
        .collect()
}

/// A record with an identifier and three string fields, ordered by whichever field the caller
/// extracts.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub note: String,
}

pub fn random_records(len: usize) -> Vec<Record> {
    let mut rng = new_rng(6);
    (0..len)
        .map(|_| Record {
            id: rng.gen_range(1..=10_000),
            // Short names so records with equal names are common.
            name: random_letters(&mut rng, 2),
            category: random_letters(&mut rng, 12),
            note: random_letters(&mut rng, 10),
        })
        .collect()
}

fn random_letters(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(*LETTERS.choose(rng).expect("non-empty alphabet")))
        .collect()
}
