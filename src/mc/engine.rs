// src/mc/engine.rs
use crate::error::{PricingError, PricingResult};
use crate::mc::payoffs::OptionType;
use crate::model::PricingModel;
use crate::rng;
use rayon::prelude::*;
use std::f64;

/// Monte Carlo estimate of an option price
///
/// `std_error` is the standard error of the estimator (sample standard
/// deviation of the discounted payoff divided by √n), usable for
/// confidence intervals around `price`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct McEstimate {
    pub price: f64,
    pub std_error: f64,
}

/// Monte Carlo pricer for European options under Geometric Brownian Motion
///
/// # Math Framework
///
/// Simulates the GBM SDE:
/// ```text
/// dS_t = r S_t dt + σ S_t dW_t
/// ```
///
/// With exact terminal solution:
/// ```text
/// S_T = S_0 * exp((r - σ²/2)T + σ√T * Z)
/// ```
/// where Z ~ N(0,1). The price is the discounted average payoff over
/// `iterations` independent samples:
/// ```text
/// price = e^(-rT) * (1/n) Σ payoff(S_T,i)
/// ```
///
/// # Randomness
///
/// Each sample derives its own RNG from `base_seed + sample_index`, so a
/// fixed seed reproduces the estimate bit-for-bit regardless of how Rayon
/// schedules the batch. The unseeded [`price_call`](Self::price_call) and
/// [`price_put`](Self::price_put) draw a fresh base seed per call, so
/// repeated calls yield independent estimates.
#[derive(Debug)]
pub struct MonteCarloPricer {
    model: PricingModel,
}

impl MonteCarloPricer {
    /// Create a pricer, validating the model up front
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidParameter` if any of spot, strike,
    /// maturity, or volatility is non-positive, any parameter is
    /// non-finite, or `iterations` is zero. No simulation is performed
    /// on invalid input.
    pub fn new(model: PricingModel) -> PricingResult<Self> {
        model.validate()?;
        Ok(MonteCarloPricer { model })
    }

    /// The validated model this pricer owns
    pub fn model(&self) -> &PricingModel {
        &self.model
    }

    /// Price a European call from a fresh independent sample batch
    pub fn price_call(&self) -> PricingResult<f64> {
        self.price_call_seeded(rng::entropy_seed())
    }

    /// Price a European put from a fresh independent sample batch
    pub fn price_put(&self) -> PricingResult<f64> {
        self.price_put_seeded(rng::entropy_seed())
    }

    /// Price a European call with a fixed seed (reproducible)
    pub fn price_call_seeded(&self, seed: u64) -> PricingResult<f64> {
        Ok(self.estimate(OptionType::Call, seed)?.price)
    }

    /// Price a European put with a fixed seed (reproducible)
    pub fn price_put_seeded(&self, seed: u64) -> PricingResult<f64> {
        Ok(self.estimate(OptionType::Put, seed)?.price)
    }

    /// Full Monte Carlo pass for one option type
    ///
    /// # Algorithm
    ///
    /// 1. Draw `iterations` independent Z ~ N(0,1)
    /// 2. Map each through the exact GBM terminal solution
    /// 3. Take the call/put intrinsic value
    /// 4. Discount the sample mean by e^(-rT)
    ///
    /// # Returns
    ///
    /// The discounted price estimate together with its standard error.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::NumericalInstability` if the estimate or
    /// its standard error comes out non-finite; a corrupted value is
    /// never returned silently.
    pub fn estimate(&self, option_type: OptionType, seed: u64) -> PricingResult<McEstimate> {
        let n = self.model.iterations;
        let discount = self.model.discount_factor();

        let (sum_payoff, sum_payoff_sq) = (0..n)
            .into_par_iter()
            .map(|i| {
                let mut rng = rng::seed_rng_from_u64(seed.wrapping_add(i as u64));
                let z = rng::get_normal_draw(&mut rng);
                let s_t = self.model.terminal_price(z);
                let payoff = option_type.intrinsic(s_t, self.model.strike);
                (payoff, payoff * payoff)
            })
            .reduce(|| (0.0, 0.0), |a, b| (a.0 + b.0, a.1 + b.1));

        let mean_payoff = sum_payoff / n as f64;
        let mean_payoff_sq = sum_payoff_sq / n as f64;

        let price = discount * mean_payoff;

        // Sample variance of the estimator, in discounted units
        let mut variance_of_estimate = if n > 1 {
            (mean_payoff_sq - mean_payoff * mean_payoff) * discount * discount
                / (n as f64 - 1.0)
        } else {
            0.0
        };

        // Floating-point cancellation can push the variance slightly negative
        if variance_of_estimate < 0.0 {
            if variance_of_estimate > -1e-10 {
                variance_of_estimate = 0.0;
            } else {
                return Err(PricingError::NumericalInstability {
                    method: "Monte Carlo".to_string(),
                    reason: format!(
                        "Variance estimate became significantly negative: {}",
                        variance_of_estimate
                    ),
                });
            }
        }

        if !price.is_finite() {
            return Err(PricingError::NumericalInstability {
                method: "Monte Carlo".to_string(),
                reason: format!("Price estimate is not finite: {}", price),
            });
        }

        Ok(McEstimate {
            price,
            std_error: variance_of_estimate.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_model(iterations: usize) -> PricingModel {
        PricingModel {
            iterations,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_rejects_invalid_model() {
        let model = PricingModel {
            volatility: -0.3,
            ..small_model(1_000)
        };
        assert!(MonteCarloPricer::new(model).is_err());
    }

    #[test]
    fn test_estimates_are_non_negative() {
        let pricer = MonteCarloPricer::new(small_model(10_000)).unwrap();
        assert!(pricer.price_call_seeded(1).unwrap() >= 0.0);
        assert!(pricer.price_put_seeded(1).unwrap() >= 0.0);
    }

    #[test]
    fn test_seeded_estimate_is_reproducible() {
        let pricer = MonteCarloPricer::new(small_model(50_000)).unwrap();
        let a = pricer.estimate(OptionType::Call, 42).unwrap();
        let b = pricer.estimate(OptionType::Call, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_sample_has_zero_std_error() {
        let pricer = MonteCarloPricer::new(small_model(1)).unwrap();
        let est = pricer.estimate(OptionType::Call, 7).unwrap();
        assert!(est.price.is_finite());
        assert_eq!(est.std_error, 0.0);
    }

    #[test]
    fn test_std_error_positive_for_large_batch() {
        let pricer = MonteCarloPricer::new(small_model(10_000)).unwrap();
        let est = pricer.estimate(OptionType::Call, 7).unwrap();
        assert!(est.std_error > 0.0);
    }
}
