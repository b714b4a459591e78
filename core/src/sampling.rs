//! Shuffling and sampling built on bounded draws
//!
//! These functions never see raw engine output. They only ask a
//! [`UniformSource`] for indices, so the result depends on nothing but the
//! source's sequence of bounded values.

use crate::error::{RandomError, Result};

/// Something that hands out uniformly distributed indices
pub trait UniformSource {
    /// Index in `[0, bound)`. `bound` is never zero when called from this
    /// module.
    fn uniform_index(&mut self, bound: usize) -> usize;
}

/// In-place Fisher-Yates shuffle
///
/// Walks from the last element down to the second, swapping each with an
/// element at or before it. A slice of length `n` costs exactly `n - 1`
/// draws (none when empty).
pub fn shuffle<T, S>(source: &mut S, items: &mut [T])
where
    S: UniformSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = source.uniform_index(i + 1);
        items.swap(i, j);
    }
}

/// Random selection of `n_choices` elements, in shuffled order
///
/// Copies the population, shuffles the copy and keeps its first
/// `n_choices` elements.
pub fn sample<T, S>(source: &mut S, population: &[T], n_choices: usize) -> Result<Vec<T>>
where
    T: Clone,
    S: UniformSource + ?Sized,
{
    if n_choices == 0 {
        return Ok(Vec::new());
    }
    if n_choices > population.len() {
        return Err(RandomError::InvalidArgument {
            requested: n_choices,
            population: population.len(),
        });
    }

    let mut pool = population.to_vec();
    shuffle(source, &mut pool);
    pool.truncate(n_choices);
    Ok(pool)
}

/// [`sample`] writing `choices.len()` elements into `choices`
pub fn sample_into<T, S>(source: &mut S, population: &[T], choices: &mut [T]) -> Result<()>
where
    T: Clone,
    S: UniformSource + ?Sized,
{
    let picked = sample(source, population, choices.len())?;
    choices.clone_from_slice(&picked);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of indices and records the bounds it was asked for
    struct Scripted {
        picks: Vec<usize>,
        bounds: Vec<usize>,
    }

    impl Scripted {
        fn new(picks: &[usize]) -> Self {
            Self {
                picks: picks.iter().rev().copied().collect(),
                bounds: Vec::new(),
            }
        }
    }

    impl UniformSource for Scripted {
        fn uniform_index(&mut self, bound: usize) -> usize {
            self.bounds.push(bound);
            self.picks.pop().unwrap_or(0) % bound
        }
    }

    #[test]
    fn test_shuffle_draw_count_and_bounds() {
        let mut source = Scripted::new(&[]);
        let mut items = [1, 2, 3, 4, 5];
        shuffle(&mut source, &mut items);
        assert_eq!(source.bounds, vec![5, 4, 3, 2]);
    }

    #[test]
    fn test_shuffle_empty_and_single_draw_nothing() {
        let mut source = Scripted::new(&[]);
        let mut empty: [u8; 0] = [];
        shuffle(&mut source, &mut empty);
        shuffle(&mut source, &mut [42]);
        assert!(source.bounds.is_empty());
    }

    #[test]
    fn test_shuffle_applies_swaps_in_order() {
        // i=3 swaps with 0, i=2 with 2, i=1 with 0
        let mut source = Scripted::new(&[0, 2, 0]);
        let mut items = ['a', 'b', 'c', 'd'];
        shuffle(&mut source, &mut items);
        assert_eq!(items, ['b', 'd', 'c', 'a']);
    }

    #[test]
    fn test_sample_zero_draws_nothing() {
        let mut source = Scripted::new(&[]);
        let picked = sample(&mut source, &[1, 2, 3], 0).unwrap();
        assert!(picked.is_empty());
        assert!(source.bounds.is_empty());
    }

    #[test]
    fn test_sample_too_many_is_invalid_argument() {
        let mut source = Scripted::new(&[]);
        let err = sample(&mut source, &[1, 2, 3], 4).unwrap_err();
        assert!(matches!(
            err,
            RandomError::InvalidArgument {
                requested: 4,
                population: 3
            }
        ));
        assert!(source.bounds.is_empty(), "No draws on invalid argument");
    }

    #[test]
    fn test_sample_into_leaves_output_on_error() {
        let mut source = Scripted::new(&[]);
        let mut out = [7, 7, 7];
        assert!(sample_into(&mut source, &[1, 2], &mut out).is_err());
        assert_eq!(out, [7, 7, 7]);
    }

    #[test]
    fn test_sample_keeps_shuffled_prefix() {
        let mut source = Scripted::new(&[0, 2, 0]);
        let picked = sample(&mut source, &['a', 'b', 'c', 'd'], 2).unwrap();
        assert_eq!(picked, vec!['b', 'd']);
    }
}
