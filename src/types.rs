use crate::symbolic::{Expr, Symbol};
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Number of bidders in the LLG auction
pub const LLG_PLAYERS: usize = 3;

/// Bidders of the LLG auction, in coalition index order
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Player {
    Local1,
    Local2,
    Global,
}

impl Player {
    pub const ALL: [Player; LLG_PLAYERS] = [Player::Local1, Player::Local2, Player::Global];

    /// Zero-based position of this bidder in a coalition
    pub fn index(self) -> usize {
        match self {
            Player::Local1 => 0,
            Player::Local2 => 1,
            Player::Global => 2,
        }
    }

    /// Symbol standing for this bidder's bid value
    pub fn symbol(self) -> Symbol {
        match self {
            Player::Local1 => Symbol::LocalBidder1,
            Player::Local2 => Symbol::LocalBidder2,
            Player::Global => Symbol::GlobalBidder,
        }
    }

    pub fn value(self) -> Expr {
        Expr::symbol(self.symbol())
    }
}

/// Set of players encoded as a bitmap; bit `i` is player `i`
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coalition {
    members: u32,
}

impl Coalition {
    pub const EMPTY: Coalition = Coalition { members: 0 };

    pub fn from_bits(members: u32) -> Self {
        Coalition { members }
    }

    /// Build from 0/1 membership indicators in player index order
    pub fn from_indicators(indicators: &[u8]) -> Self {
        let members = indicators
            .iter()
            .enumerate()
            .filter(|(_, flag)| **flag != 0)
            .fold(0u32, |bits, (idx, _)| bits | (1 << idx));
        Coalition { members }
    }

    /// Coalition holding every one of `n_players` players
    pub fn grand(n_players: usize) -> Self {
        Coalition {
            members: (1u32 << n_players) - 1,
        }
    }

    pub fn bits(self) -> u32 {
        self.members
    }

    pub fn contains_index(self, idx: usize) -> bool {
        (self.members >> idx) & 1 == 1
    }

    pub fn contains(self, player: Player) -> bool {
        self.contains_index(player.index())
    }

    pub fn with_index(self, idx: usize) -> Self {
        Coalition {
            members: self.members | (1 << idx),
        }
    }

    pub fn size(self) -> usize {
        self.members.count_ones() as usize
    }

    /// Membership indicators for the first `n_players` players
    pub fn indicators(self, n_players: usize) -> Vec<u8> {
        (0..n_players)
            .map(|idx| u8::from(self.contains_index(idx)))
            .collect()
    }
}

impl From<[u8; LLG_PLAYERS]> for Coalition {
    fn from(indicators: [u8; LLG_PLAYERS]) -> Self {
        Coalition::from_indicators(&indicators)
    }
}

impl Display for Coalition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let flags: Vec<String> = self
            .indicators(LLG_PLAYERS)
            .iter()
            .map(|flag| flag.to_string())
            .collect();
        write!(f, "({})", flags.join(","))
    }
}

/// Payment rules compared in the tables, in column order
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentRule {
    FirstPrice,
    Vcg,
    ShapleyPaymentWithoutSeller,
    ShapleyPayoffWithoutSeller,
    ShapleyPaymentWithSeller,
    ShapleyPayoffWithSeller,
}

impl PaymentRule {
    pub const ALL: [PaymentRule; 6] = [
        PaymentRule::FirstPrice,
        PaymentRule::Vcg,
        PaymentRule::ShapleyPaymentWithoutSeller,
        PaymentRule::ShapleyPayoffWithoutSeller,
        PaymentRule::ShapleyPaymentWithSeller,
        PaymentRule::ShapleyPayoffWithSeller,
    ];

    /// Column header cell
    pub fn header(self) -> &'static str {
        match self {
            PaymentRule::FirstPrice => r"\multirow{2}{1cm}{First\\Price}",
            PaymentRule::Vcg => r"\multirow{2}{0.6cm}{VCG}",
            PaymentRule::ShapleyPaymentWithoutSeller => {
                r"\multirow{2}{3.1cm}{Shapley payment\\w/o seller}"
            }
            PaymentRule::ShapleyPayoffWithoutSeller => {
                r"\multirow{2}{2.8cm}{Shapley payoff\\w/o seller}"
            }
            PaymentRule::ShapleyPaymentWithSeller => {
                r"\multirow{2}{3.1cm}{Shapley payment\\w/ seller}"
            }
            PaymentRule::ShapleyPayoffWithSeller => {
                r"\multirow{2}{2.8cm}{Shapley payoff\\w/ seller}"
            }
        }
    }
}
