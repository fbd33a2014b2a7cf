use crate::{
    error::{LlgError, Result},
    symbolic::Expr,
    types::{Coalition, LLG_PLAYERS},
    utils::{FACTORIAL_LIMIT, factorial_ratio},
};
use num_rational::Rational64;

/// Largest game whose seller-inclusive weights still fit the factorial table
pub const MAX_PLAYERS: usize = FACTORIAL_LIMIT - 2;

/// Cooperative game with a fixed number of players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    n_players: usize,
}

impl Game {
    /// The three-bidder LLG game
    pub const LLG: Game = Game {
        n_players: LLG_PLAYERS,
    };

    pub fn new(n_players: usize) -> Result<Self> {
        if n_players == 0 || n_players > MAX_PLAYERS {
            return Err(LlgError::InvalidPlayerCount {
                count: n_players,
                limit: MAX_PLAYERS,
            });
        }
        Ok(Game { n_players })
    }

    pub fn n_players(&self) -> usize {
        self.n_players
    }

    pub fn grand_coalition(&self) -> Coalition {
        Coalition::grand(self.n_players)
    }

    /// All `(S, S + player)` pairs with `S` ranging over coalitions that
    /// do not contain `player`
    pub fn marginal_pairs(&self, player: usize) -> Result<MarginalPairs> {
        self.check_player(player)?;
        Ok(self.pairs_for(player))
    }

    /// Shapley weight of the marginal contribution to a coalition of `size`
    /// players not containing the contributor.
    ///
    /// With the seller, every valued coalition implicitly contains an extra
    /// player, so both the size and the player count shift by one.
    pub fn weight(&self, size: usize, with_seller: bool) -> Result<Rational64> {
        if size >= self.n_players {
            return Err(LlgError::InvalidCoalitionSize {
                size,
                n_players: self.n_players,
            });
        }
        Ok(self.weight_for(size, with_seller))
    }

    fn weight_for(&self, size: usize, with_seller: bool) -> Rational64 {
        let n = self.n_players;
        if with_seller {
            factorial_ratio(&[size + 1, n - size - 1], &[n + 1])
        } else {
            factorial_ratio(&[size, n - size - 1], &[n])
        }
    }

    /// Expected marginal contribution of `player` under `valuation`
    pub fn payoff<V>(&self, player: usize, valuation: V, with_seller: bool) -> Result<Expr>
    where
        V: Fn(&Coalition) -> Expr,
    {
        self.check_player(player)?;
        Ok(self.payoff_for(player, valuation, with_seller))
    }

    pub(crate) fn pairs_for(&self, player: usize) -> MarginalPairs {
        MarginalPairs {
            player,
            next: 0,
            end: 1 << (self.n_players - 1),
        }
    }

    pub(crate) fn payoff_for<V>(&self, player: usize, valuation: V, with_seller: bool) -> Expr
    where
        V: Fn(&Coalition) -> Expr,
    {
        self.pairs_for(player)
            .map(|(without, with)| {
                let marginal = valuation(&with) - valuation(&without);
                marginal.scale(self.weight_for(without.size(), with_seller))
            })
            .sum()
    }

    fn check_player(&self, player: usize) -> Result<()> {
        if player >= self.n_players {
            return Err(LlgError::InvalidPlayer {
                player,
                n_players: self.n_players,
            });
        }
        Ok(())
    }
}

/// Iterator over marginal-contribution pairs of one player.
///
/// The counter runs over the memberships of the other players; the bits
/// above `player` are shifted up by one to leave its slot empty.
#[derive(Debug, Clone)]
pub struct MarginalPairs {
    player: usize,
    next: u32,
    end: u32,
}

impl Iterator for MarginalPairs {
    type Item = (Coalition, Coalition);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let others = self.next;
        self.next += 1;

        let low = others & ((1 << self.player) - 1);
        let high = (others >> self.player) << (self.player + 1);
        let without = Coalition::from_bits(low | high);
        Some((without, without.with_index(self.player)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MarginalPairs {}
