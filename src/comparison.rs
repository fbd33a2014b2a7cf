//! Payment-rule comparison for each bid ordering regime
//!
//! Produces the symbolic contents of both tables. Nothing here formats
//! LaTeX; see [`crate::latex`].

use crate::{
    relation::Relation,
    shapley::{shapley_payment, shapley_payment_with_seller, shapley_payoff},
    symbolic::{Expr, Symbol},
    types::{PaymentRule, Player},
    valuation::Regime,
};
use tracing::debug;

/// One payment rule's quantities for both local bidders
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub rule: PaymentRule,
    /// Value for local bidder 1 and local bidder 2
    pub values: [Expr; 2],
    /// Partial derivatives of `values` with respect to `A`
    pub derivatives: [Expr; 2],
    /// Difference of the two derivatives
    pub sensitivity: Expr,
    /// When the core projection does not depend on bidder 1's IR constraint
    pub ir_bidder_1: Relation,
    /// Same for bidder 2
    pub ir_bidder_2: Relation,
}

impl RuleOutcome {
    fn new(rule: PaymentRule, values: [Expr; 2], regime: Regime) -> Self {
        let a = Symbol::LocalBidder1;
        let derivatives = [values[0].diff(a), values[1].diff(a)];
        let sensitivity = &derivatives[0] - &derivatives[1];

        let [p1, p2] = &values;
        let g = Expr::from(Symbol::GlobalBidder);
        // p1 >= p2 - G + 2A
        let ir_bidder_1 = Relation::ge(
            p1.clone(),
            p2 - &g + Symbol::LocalBidder1 * 2,
        );
        // p1 <= p2 + G - 2B
        let ir_bidder_2 = Relation::le(
            p1.clone(),
            p2 + &g - Symbol::LocalBidder2 * 2,
        );

        RuleOutcome {
            rule,
            values,
            derivatives,
            sensitivity,
            ir_bidder_1: apply_boundaries(&ir_bidder_1, regime),
            ir_bidder_2: apply_boundaries(&ir_bidder_2, regime),
        }
    }
}

/// Simplify, then rewrite the regime's strict orderings with positive
/// perturbations, simplifying after each substitution
fn apply_boundaries(relation: &Relation, regime: Regime) -> Relation {
    regime
        .boundary_substitutions()
        .iter()
        .fold(relation.simplify(), |rel, (symbol, replacement)| {
            rel.subs(*symbol, replacement).simplify()
        })
}

/// All payment-rule outcomes of one regime, in column order
#[derive(Debug, Clone, PartialEq)]
pub struct RegimeReport {
    pub regime: Regime,
    pub outcomes: Vec<RuleOutcome>,
}

impl RegimeReport {
    pub fn compute(regime: Regime) -> Self {
        let valuation = regime.valuation();
        let locals = [Player::Local1, Player::Local2];

        let payoffs_without = locals.map(|p| shapley_payoff(p, valuation, false));
        let payoffs_with = locals.map(|p| shapley_payoff(p, valuation, true));
        let payments_without = locals.map(|p| shapley_payment(p, valuation));
        let payments_with = locals.map(|p| shapley_payment_with_seller(p, valuation));

        let values = |rule: PaymentRule| -> [Expr; 2] {
            match rule {
                PaymentRule::FirstPrice => locals.map(Player::value),
                PaymentRule::Vcg => regime.vcg_payments(),
                PaymentRule::ShapleyPaymentWithoutSeller => payments_without.clone(),
                PaymentRule::ShapleyPayoffWithoutSeller => payoffs_without.clone(),
                PaymentRule::ShapleyPaymentWithSeller => payments_with.clone(),
                PaymentRule::ShapleyPayoffWithSeller => payoffs_with.clone(),
            }
        };

        let outcomes: Vec<RuleOutcome> = PaymentRule::ALL
            .iter()
            .map(|&rule| RuleOutcome::new(rule, values(rule), regime))
            .collect();

        for outcome in &outcomes {
            debug!(
                regime = ?regime,
                rule = ?outcome.rule,
                p1 = %outcome.values[0],
                p2 = %outcome.values[1],
                ir1 = %outcome.ir_bidder_1,
                ir2 = %outcome.ir_bidder_2,
                "computed payment rule"
            );
        }

        RegimeReport { regime, outcomes }
    }

    pub fn outcome(&self, rule: PaymentRule) -> Option<&RuleOutcome> {
        self.outcomes.iter().find(|o| o.rule == rule)
    }
}

/// Reports for every regime, in table order
pub fn compute_reports() -> Vec<RegimeReport> {
    Regime::ALL.iter().map(|&r| RegimeReport::compute(r)).collect()
}
