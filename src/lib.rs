//! Shapley payments in the LLG auction
//!
//! This library computes Shapley payoffs and payments for the
//! local-local-global auction with two local bidders and one global bidder
//! under four bid orderings, compares them with first-price and VCG
//! payments, and renders the comparison as two LaTeX tables.

pub mod coalition_computation;
pub mod comparison;
pub mod error;
pub mod latex;
pub mod output;
pub mod relation;
pub mod shapley;
pub mod symbolic;
pub mod types;
pub mod valuation;

mod utils;

// Re-export main types and functions
pub use coalition_computation::{Game, MarginalPairs};
pub use comparison::{RegimeReport, RuleOutcome, compute_reports};
pub use error::{LlgError, Result};
pub use latex::{LatexTables, make_tables};
pub use output::{TableWriter, TableWriterBuilder};
pub use relation::{Comparison, Relation};
pub use shapley::{shapley_payment, shapley_payment_with_seller, shapley_payoff};
pub use symbolic::{Expr, Symbol};
pub use types::{Coalition, PaymentRule, Player};
pub use valuation::Regime;
