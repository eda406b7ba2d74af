//! Option Payoff Functions
//!
//! # Mathematical Definitions
//!
//! European options are exercisable only at maturity, so the payoff
//! depends on the terminal price alone:
//!
//! - **Call**: max(S_T - E, 0) - right to buy at strike E
//! - **Put**: max(E - S_T, 0) - right to sell at strike E

use std::f64;

/// The two European option types priced by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    /// European call option: max(S_T - E, 0)
    Call,

    /// European put option: max(E - S_T, 0)
    Put,
}

impl OptionType {
    /// Intrinsic value at expiry for a terminal price and strike
    ///
    /// # Returns
    /// Non-negative payoff value (options cannot have negative intrinsic value)
    pub fn intrinsic(&self, terminal_price: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (terminal_price - strike).max(0.0),
            OptionType::Put => (strike - terminal_price).max(0.0),
        }
    }
}
