//! Uniform roster shuffle.
//!
//! Copy-on-input Fisher–Yates. The caller keeps ownership of the original
//! sequence; the shuffle works on its own copy and returns it. Randomness is
//! injected through [`rand::Rng`] so tests can pass a seeded generator and
//! production callers can use the thread RNG.

use rand::Rng;

/// Return a new `Vec` containing `items` in uniformly random order.
///
/// Modern Fisher–Yates on the copy: walk `i` from the last index down to 1,
/// draw `j` uniformly in `[0, i]`, swap. Each of the `n!` permutations is
/// equally likely assuming a uniform RNG. Empty and single-element inputs
/// come back unchanged.
pub fn shuffle<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}
