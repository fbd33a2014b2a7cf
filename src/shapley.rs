use crate::{
    coalition_computation::Game,
    symbolic::Expr,
    types::{Coalition, Player},
};

/// Shapley payoff of an LLG bidder: its weighted marginal contributions
/// under `valuation`, optionally with the seller as an implicit extra player
pub fn shapley_payoff<V>(player: Player, valuation: V, with_seller: bool) -> Expr
where
    V: Fn(&Coalition) -> Expr,
{
    Game::LLG.payoff_for(player.index(), valuation, with_seller)
}

/// Payment of an LLG bidder: its bid minus its Shapley payoff without seller
pub fn shapley_payment<V>(player: Player, valuation: V) -> Expr
where
    V: Fn(&Coalition) -> Expr,
{
    player.value() - shapley_payoff(player, valuation, false)
}

/// Same as [`shapley_payment`] with the seller-inclusive payoff
pub fn shapley_payment_with_seller<V>(player: Player, valuation: V) -> Expr
where
    V: Fn(&Coalition) -> Expr,
{
    player.value() - shapley_payoff(player, valuation, true)
}
