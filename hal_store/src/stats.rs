//! Distribution math over counted observations: weighted sampling and
//! information measures.
//!
//! Both storage backends reduce a context to a [`Weights`] map and share these
//! functions, so they agree on every observable result apart from the random
//! draws themselves.

use rand::Rng;
use std::collections::HashMap;

/// Observed token -> number of times it was observed.
pub type Weights = HashMap<String, u64>;

/// Total number of observations in a distribution.
pub fn total(weights: &Weights) -> u64 {
    weights.values().sum()
}

/// Pick a token with probability proportional to its count.
///
/// Draws a target from `[0, total)` and walks the cumulative sum in the map's
/// enumeration order. The order only decides which token owns which slice of
/// the range, never the size of the slice.
///
/// `rand::distributions::WeightedIndex` would need an index built per call;
/// a single pass over the counts is all one draw needs.
pub fn pick_weighted<'a, R: Rng + ?Sized>(weights: &'a Weights, rng: &mut R) -> Option<&'a str> {
    let total = total(weights);
    if total == 0 {
        return None;
    }

    let target = rng.gen_range(0..total);
    let mut acc = 0;
    for (token, count) in weights {
        acc += count;
        if acc > target {
            return Some(token.as_str());
        }
    }
    None
}

/// Self-information, in bits, of seeing `seen` under this distribution.
///
/// `None` when `seen` was never observed.
pub fn surprise(weights: &Weights, seen: &str) -> Option<f64> {
    let count = *weights.get(seen)?;
    if count == 0 {
        return None;
    }
    let total = total(weights) as f64;
    Some(-(count as f64 / total).log2())
}

/// Shannon entropy, in bits, of the distribution.
///
/// `None` for an empty distribution.
pub fn uncertainty(weights: &Weights) -> Option<f64> {
    let total = total(weights);
    if total == 0 {
        return None;
    }
    let total = total as f64;
    Some(weights.values().filter(|c| **c > 0).fold(0.0, |acc, count| {
        let freq = *count as f64 / total;
        acc - freq * freq.log2()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(pairs: &[(&str, u64)]) -> Weights {
        pairs.iter().map(|(t, c)| (t.to_string(), *c)).collect()
    }

    #[test]
    fn test_single_token_is_certain() {
        let w = weights(&[("bar", 3)]);
        assert_eq!(surprise(&w, "bar"), Some(0.0));
        assert_eq!(uncertainty(&w), Some(0.0));
        assert_eq!(pick_weighted(&w, &mut rand::thread_rng()), Some("bar"));
    }

    #[test]
    fn test_fair_coin() {
        let w = weights(&[("heads", 5), ("tails", 5)]);
        assert_eq!(surprise(&w, "heads"), Some(1.0));
        assert_eq!(uncertainty(&w), Some(1.0));
    }

    #[test]
    fn test_uniform_256_is_eight_bits() {
        let w: Weights = (0..256).map(|i| (format!("t{}", i), 1)).collect();
        assert_eq!(uncertainty(&w), Some(8.0));
    }

    #[test]
    fn test_unseen_and_empty() {
        let w = weights(&[("bar", 1)]);
        assert_eq!(surprise(&w, "baz"), None);
        assert_eq!(uncertainty(&Weights::new()), None);
        assert_eq!(pick_weighted(&Weights::new(), &mut rand::thread_rng()), None);
    }

    #[test]
    fn test_pick_ratio() {
        let w = weights(&[("baz", 1), ("qux", 4)]);
        let mut rng = rand::thread_rng();
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for _ in 0..10_000 {
            *counts.entry(pick_weighted(&w, &mut rng).unwrap()).or_default() += 1;
        }
        let ratio = counts["qux"] as f64 / counts["baz"] as f64;
        assert!((ratio - 4.0).abs() <= 1.0, "ratio was {}", ratio);
    }
}
