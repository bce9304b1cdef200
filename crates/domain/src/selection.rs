use rand::{Rng, seq::index};

/// Draws `n` distinct candidates uniformly at random.
///
/// All candidates are returned if there are not more than `n` of them.
#[must_use]
pub fn sample<T: Clone, R: Rng + ?Sized>(candidates: &[T], n: usize, rng: &mut R) -> Vec<T> {
    if n >= candidates.len() {
        return candidates.to_vec();
    }
    index::sample(rng, candidates.len(), n)
        .into_iter()
        .map(|i| candidates[i].clone())
        .collect()
}
