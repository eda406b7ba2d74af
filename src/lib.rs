//! # gbm-pricer: Monte Carlo Pricing of European Options
//!
//! A Rust library for estimating the fair price of European call and put
//! options by Monte Carlo simulation under the Black-Scholes risk-neutral
//! model.
//!
//! ## Key Features
//!
//! - **Exact GBM sampling**: Terminal prices drawn from the closed-form
//!   solution of geometric Brownian motion, no discretization error
//! - **Parallel simulation**: Sample generation and reduction with Rayon
//! - **Reproducible**: Per-sample seeding makes results independent of
//!   thread scheduling
//! - **Validated inputs**: Model parameters are checked before any
//!   simulation work starts
//! - **Analytic oracle**: Closed-form Black-Scholes prices for validation
//!
//! ## Quick Start
//!
//! ```rust
//! use gbm_pricer::mc::engine::MonteCarloPricer;
//! use gbm_pricer::model::PricingModel;
//!
//! let model = PricingModel {
//!     spot: 20.0,
//!     strike: 21.0,
//!     maturity: 4.0 / 12.0,
//!     risk_free_rate: 0.1,
//!     volatility: 0.3,
//!     iterations: 100_000,
//! };
//!
//! let pricer = MonteCarloPricer::new(model).expect("valid model");
//! let call = pricer.price_call_seeded(42).expect("finite estimate");
//! let put = pricer.price_put_seeded(42).expect("finite estimate");
//! println!("call: {:.4}, put: {:.4}", call, put);
//! ```
//!
//! ## Mathematical Foundation
//!
//! Under the risk-neutral measure the underlying follows
//! `dS_t = r S_t dt + σ S_t dW_t`, with terminal solution
//! `S_T = S_0 * exp((r - σ²/2)T + σ√T * Z)`, Z ~ N(0,1). The option price
//! is the discounted expected payoff, estimated here by averaging over a
//! large batch of independent terminal-price samples.

// Module declarations
pub mod error;
pub mod rng;
pub mod math_utils;
pub mod model;
pub mod mc;
pub mod analytics;

// Re-export commonly used types for convenience
pub use error::{PricingError, PricingResult};
pub use mc::engine::{McEstimate, MonteCarloPricer};
pub use mc::payoffs::OptionType;
pub use model::PricingModel;
