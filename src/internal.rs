// Utility functions for tests.

use crate::bits;

use rand::Rng;

//-----------------------------------------------------------------------------

// Returns every `(value, mask)` pair in ascending order.
pub fn all_pairs() -> impl Iterator<Item = (u8, u8)> {
    (0..bits::BYTE_VALUES).flat_map(|value| {
        (0..bits::BYTE_VALUES).map(move |mask| (value as u8, mask as u8))
    })
}

// Returns `n` random `(value, mask)` pairs.
pub fn random_pairs(n: usize) -> Vec<(u8, u8)> {
    let mut result: Vec<(u8, u8)> = Vec::with_capacity(n);
    let mut rng = rand::thread_rng();
    for _ in 0..n {
        result.push(rng.gen());
    }
    result
}

//-----------------------------------------------------------------------------

// Returns the integer literals in the initializer of the declaration named `name` in order.
// The initializer starts after the first `=` following the name and ends at the next `;`.
pub fn scalars(source: &str, name: &str) -> Option<Vec<u8>> {
    let start = source.find(&format!("static {}:", name))?;
    let rest = &source[start..];
    let init = &rest[rest.find('=')? + 1..];
    let init = &init[..init.find(';')?];
    let result = init
        .split(|c: char| c == ',' || c == '[' || c == ']' || c.is_whitespace())
        .filter_map(|token| token.parse::<u8>().ok())
        .collect();
    Some(result)
}

// Returns the number of integer literals in the initializer of the declaration named `name`.
pub fn scalar_count(source: &str, name: &str) -> Option<usize> {
    scalars(source, name).map(|values| values.len())
}

//-----------------------------------------------------------------------------
