// src/model.rs
//! Market and simulation parameters for the Black-Scholes model
//!
//! # Mathematical Foundation
//!
//! Under the risk-neutral measure the underlying follows the GBM SDE:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! With exact terminal solution:
//! ```text
//! S_T = S_0 * exp((r - σ²/2)T + σ√T * Z)
//! ```
//! where Z ~ N(0,1).

use crate::error::{validation::*, PricingResult};

/// Immutable value type holding the Black-Scholes model parameters and
/// the Monte Carlo sample count.
///
/// Constructed once, validated by [`crate::MonteCarloPricer::new`], and
/// never mutated during pricing.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingModel {
    /// Current underlying price S₀, > 0
    pub spot: f64,
    /// Option strike price E, > 0
    pub strike: f64,
    /// Time to expiry T in years, > 0
    pub maturity: f64,
    /// Continuously compounded annual risk-free rate r, finite
    pub risk_free_rate: f64,
    /// Annualized volatility σ, > 0
    pub volatility: f64,
    /// Number of Monte Carlo samples, >= 1
    pub iterations: usize,
}

impl PricingModel {
    /// Validate all parameters before any simulation work
    pub fn validate(&self) -> PricingResult<()> {
        validate_positive("spot", self.spot)?;
        validate_positive("strike", self.strike)?;
        validate_positive("maturity", self.maturity)?;
        validate_finite("risk_free_rate", self.risk_free_rate)?;
        validate_positive("volatility", self.volatility)?;
        validate_iterations(self.iterations)?;
        Ok(())
    }

    /// Terminal price for one normal draw, using the exact GBM solution
    ///
    /// ```text
    /// S_T = S₀ * exp((r - σ²/2)T + σ√T * Z)
    /// ```
    pub fn terminal_price(&self, normal_draw: f64) -> f64 {
        let drift = (self.risk_free_rate - 0.5 * self.volatility * self.volatility) * self.maturity;
        let diffusion = self.volatility * self.maturity.sqrt() * normal_draw;
        self.spot * (drift + diffusion).exp()
    }

    /// Risk-neutral discount factor e^(-rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.maturity).exp()
    }
}

impl Default for PricingModel {
    /// Reference parameters for reproducible smoke-testing
    fn default() -> Self {
        PricingModel {
            spot: 20.0,
            strike: 21.0,
            maturity: 4.0 / 12.0,
            risk_free_rate: 0.1,
            volatility: 0.3,
            iterations: 100_000_000,
        }
    }
}
