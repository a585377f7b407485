use std::collections::HashMap;

use rand::distributions::WeightedIndex;
use rand::prelude::*;

use crate::error::CatalogGenError;
use crate::error::Result;

pub const GENERAL_CATEGORY: &str = "General";

/// Probabilities of ratings 1..=5 before any category bias.
pub const BASE_RATING_PROBS: [f64; 5] = [0.07, 0.11, 0.22, 0.33, 0.27];

pub const CATEGORY_BIASES: [(&str, f64); 21] = [
    ("Electronics", -0.10),
    ("Automotive", -0.08),
    ("Tools", -0.05),
    ("Clothing", 0.02),
    ("Shoes", 0.01),
    ("Toys", 0.03),
    ("Books", 0.08),
    ("Music", 0.06),
    ("Movies", 0.04),
    ("Health", 0.00),
    ("Beauty", 0.03),
    ("Grocery", 0.02),
    ("Home", 0.03),
    ("Garden", 0.01),
    ("Sports", 0.00),
    ("Office", 0.02),
    ("Pets", 0.04),
    ("Baby", 0.05),
    ("Outdoors", -0.02),
    ("Jewelry", 0.05),
    (GENERAL_CATEGORY, 0.0),
];

/// Weights of drawing 0..=5 reviews for a product.
pub const REVIEW_COUNT_WEIGHTS: [f64; 6] = [0.20, 0.28, 0.22, 0.15, 0.10, 0.05];

pub const MAX_REVIEWS_PER_PRODUCT: usize = REVIEW_COUNT_WEIGHTS.len() - 1;

const MAX_SHIFT: f64 = 0.15;
const PROB_FLOOR: f64 = 1e-6;

pub fn category_bias(category: &str) -> Option<f64> {
    CATEGORY_BIASES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, bias)| *bias)
}

/// Maps a category onto the bias table, falling back to "General".
pub fn coerce_category(category: &str) -> &str {
    match category_bias(category) {
        Some(_) => category,
        None => GENERAL_CATEGORY,
    }
}

// moves `amount` out of `from` into `to`, each side proportionally to its own shares
fn move_mass(probs: &mut [f64; 5], from: [usize; 2], to: [usize; 2], amount: f64) {
    let from_total = probs[from[0]] + probs[from[1]];
    for idx in from {
        probs[idx] -= probs[idx] * (amount / from_total);
    }

    let to_total = probs[to[0]] + probs[to[1]];
    if to_total <= 0. {
        probs[to[0]] += amount * 0.5;
        probs[to[1]] += amount * 0.5;
    } else {
        let shares = [probs[to[0]] / to_total, probs[to[1]] / to_total];
        probs[to[0]] += amount * shares[0];
        probs[to[1]] += amount * shares[1];
    }
}

/// Biases `base` towards high ratings (positive bias) or low ratings (negative
/// bias). The result is always a valid distribution: every entry is positive
/// and the entries sum to 1.
pub fn adjust_probs(base: &[f64; 5], bias: f64) -> [f64; 5] {
    let mut probs = *base;
    if bias == 0. {
        return probs;
    }

    let shift = (bias * 0.5).clamp(-MAX_SHIFT, MAX_SHIFT);
    if shift > 0. {
        let amount = shift * (probs[0] + probs[1]);
        if amount > 0. {
            move_mass(&mut probs, [0, 1], [3, 4], amount);
        }
    } else {
        let amount = -shift * (probs[3] + probs[4]);
        if amount > 0. {
            move_mass(&mut probs, [3, 4], [0, 1], amount);
        }
    }

    for p in probs.iter_mut() {
        *p = p.clamp(PROB_FLOOR, 1.0);
    }
    let sum: f64 = probs.iter().sum();
    for p in probs.iter_mut() {
        *p /= sum;
    }

    probs
}

/// Samples star ratings per category, with the adjusted distributions built
/// once up front.
pub struct RatingSampler {
    weight_idx: HashMap<&'static str, WeightedIndex<f64>>,
    general: WeightedIndex<f64>,
}

impl RatingSampler {
    pub fn try_new() -> Result<Self> {
        let mut weight_idx = HashMap::with_capacity(CATEGORY_BIASES.len());
        for (category, bias) in CATEGORY_BIASES.iter() {
            let probs = adjust_probs(&BASE_RATING_PROBS, *bias);
            let idx = WeightedIndex::new(probs)
                .map_err(|err| CatalogGenError::Internal(err.to_string()))?;
            weight_idx.insert(*category, idx);
        }
        let general = WeightedIndex::new(BASE_RATING_PROBS)
            .map_err(|err| CatalogGenError::Internal(err.to_string()))?;

        Ok(Self {
            weight_idx,
            general,
        })
    }

    pub fn sample<R: Rng>(&self, rng: &mut R, category: &str) -> u8 {
        let idx = self.weight_idx.get(category).unwrap_or(&self.general);
        idx.sample(rng) as u8 + 1
    }
}

pub struct ReviewCountSampler {
    weight_idx: Option<WeightedIndex<f64>>,
}

impl ReviewCountSampler {
    /// `max` above [`MAX_REVIEWS_PER_PRODUCT`] is clamped.
    pub fn try_new(max: usize) -> Result<Self> {
        if max == 0 {
            return Ok(Self { weight_idx: None });
        }

        let max = max.min(MAX_REVIEWS_PER_PRODUCT);
        let weights = &REVIEW_COUNT_WEIGHTS[..=max];
        let total: f64 = weights.iter().sum();
        let idx = WeightedIndex::new(weights.iter().map(|w| w / total))
            .map_err(|err| CatalogGenError::Internal(err.to_string()))?;

        Ok(Self {
            weight_idx: Some(idx),
        })
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match &self.weight_idx {
            None => 0,
            Some(idx) => idx.sample(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::Rng;
    use rand::RngCore;
    use rand::SeedableRng;

    use super::*;

    fn assert_valid(probs: &[f64; 5]) {
        assert!(probs.iter().all(|p| *p > 0.), "{probs:?}");
        let sum: f64 = probs.iter().sum();
        assert!((sum - 1.).abs() < 1e-9, "{probs:?} sums to {sum}");
    }

    #[test]
    fn test_neutral_bias_is_identity() {
        assert_eq!(adjust_probs(&BASE_RATING_PROBS, 0.), BASE_RATING_PROBS);
    }

    #[test]
    fn test_positive_bias_moves_mass_up() {
        let probs = adjust_probs(&BASE_RATING_PROBS, 0.08);
        assert_valid(&probs);
        // shift = 0.04 of the low mass
        assert!((probs[0] - 0.07 * 0.96).abs() < 1e-12);
        assert!((probs[1] - 0.11 * 0.96).abs() < 1e-12);
        assert!((probs[2] - 0.22).abs() < 1e-12);
        let moved = 0.04 * 0.18;
        assert!((probs[3] - (0.33 + moved * 0.33 / 0.60)).abs() < 1e-12);
        assert!((probs[4] - (0.27 + moved * 0.27 / 0.60)).abs() < 1e-12);
    }

    #[test]
    fn test_negative_bias_moves_mass_down() {
        let probs = adjust_probs(&BASE_RATING_PROBS, -0.10);
        assert_valid(&probs);
        assert!(probs[0] > BASE_RATING_PROBS[0]);
        assert!(probs[1] > BASE_RATING_PROBS[1]);
        assert!(probs[3] < BASE_RATING_PROBS[3]);
        assert!(probs[4] < BASE_RATING_PROBS[4]);
    }

    #[test]
    fn test_shift_is_clamped() {
        let a = adjust_probs(&BASE_RATING_PROBS, 0.3);
        let b = adjust_probs(&BASE_RATING_PROBS, 1.0);
        assert_eq!(a, b);
        let a = adjust_probs(&BASE_RATING_PROBS, -0.3);
        let b = adjust_probs(&BASE_RATING_PROBS, -1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_buckets() {
        // empty target buckets split the moved mass evenly
        let probs = adjust_probs(&[0.5, 0.5, 0., 0., 0.], 1.0);
        assert_valid(&probs);
        assert!((probs[3] - probs[4]).abs() < 1e-12);

        let probs = adjust_probs(&[0., 0., 0., 0.5, 0.5], -1.0);
        assert_valid(&probs);
        assert!((probs[0] - probs[1]).abs() < 1e-12);

        // nothing to move
        assert_valid(&adjust_probs(&[0., 0., 1., 0., 0.], 1.0));
        assert_valid(&adjust_probs(&[0., 0., 1., 0., 0.], -1.0));
    }

    #[test]
    fn test_random_distributions_stay_valid() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10_000 {
            let mut base = [0f64; 5];
            for p in base.iter_mut() {
                *p = (rng.next_u32() % 100) as f64;
            }
            let sum: f64 = base.iter().sum();
            if sum == 0. {
                continue;
            }
            for p in base.iter_mut() {
                *p /= sum;
            }
            let bias = rng.gen_range(-1.0..=1.0);
            assert_valid(&adjust_probs(&base, bias));
        }
    }

    #[test]
    fn test_coerce_category() {
        assert_eq!(coerce_category("Electronics"), "Electronics");
        assert_eq!(coerce_category("Home & Kitchen"), GENERAL_CATEGORY);
        assert_eq!(coerce_category(""), GENERAL_CATEGORY);
        assert_eq!(category_bias("Gizmos"), None);
    }

    #[test]
    fn test_rating_sampler() {
        let sampler = RatingSampler::try_new().unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let mut counts = [0usize; 5];
        for _ in 0..10_000 {
            let r = sampler.sample(&mut rng, "Unknown Category");
            assert!((1..=5).contains(&r));
            counts[r as usize - 1] += 1;
        }
        // 4 stars is the mode of the base distribution
        assert!(counts[3] > counts[0]);
        assert!(counts[3] > counts[1]);
    }

    #[test]
    fn test_review_count_zero_max() {
        let sampler = ReviewCountSampler::try_new(0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let before = rng.clone().next_u64();
        for _ in 0..100 {
            assert_eq!(sampler.sample(&mut rng), 0);
        }
        // no randomness consumed
        assert_eq!(rng.next_u64(), before);
    }

    #[test]
    fn test_review_count_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        for max in 1..=8 {
            let sampler = ReviewCountSampler::try_new(max).unwrap();
            for _ in 0..1000 {
                let n = sampler.sample(&mut rng);
                assert!(n <= max.min(MAX_REVIEWS_PER_PRODUCT));
            }
        }
    }
}
