//! Coalition values of the LLG auction under the four bid orderings
//!
//! Each regime fixes a strict ordering of the bids `A` (local 1), `B`
//! (local 2) and `G` (global). The value of a coalition is the revenue of
//! the winning bids among its members.

use crate::{
    symbolic::{Expr, Symbol},
    types::{Coalition, Player},
};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Value of a coalition under a fixed bid ordering
pub type Valuation = fn(&Coalition) -> Expr;

fn bid_if_member(coal: &Coalition, player: Player) -> Expr {
    if coal.contains(player) {
        player.value()
    } else {
        Expr::zero()
    }
}

/// `A < G`, `B < G` and `A + B > G`
pub fn weak_locals(coal: &Coalition) -> Expr {
    if coal.contains(Player::Local1) && coal.contains(Player::Local2) {
        // locals win over global
        Symbol::LocalBidder1 + Symbol::LocalBidder2
    } else if coal.contains(Player::Global) {
        Player::Global.value()
    } else {
        // at most one local is active
        bid_if_member(coal, Player::Local1) + bid_if_member(coal, Player::Local2)
    }
}

/// `A > G > B`
pub fn strong_local_1(coal: &Coalition) -> Expr {
    if coal.contains(Player::Local1) {
        Player::Local1.value() + bid_if_member(coal, Player::Local2)
    } else if coal.contains(Player::Global) {
        Player::Global.value()
    } else {
        bid_if_member(coal, Player::Local2)
    }
}

/// `B > G > A`
pub fn strong_local_2(coal: &Coalition) -> Expr {
    if coal.contains(Player::Local2) {
        Player::Local2.value() + bid_if_member(coal, Player::Local1)
    } else if coal.contains(Player::Global) {
        Player::Global.value()
    } else {
        bid_if_member(coal, Player::Local1)
    }
}

/// `A > G` and `B > G`
pub fn strong_locals(coal: &Coalition) -> Expr {
    if !(coal.contains(Player::Local1) || coal.contains(Player::Local2)) {
        bid_if_member(coal, Player::Global)
    } else {
        bid_if_member(coal, Player::Local1) + bid_if_member(coal, Player::Local2)
    }
}

/// Bid ordering regimes, in table order
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    WeakLocals,
    StrongLocal1,
    StrongLocal2,
    StrongLocals,
}

impl Regime {
    pub const ALL: [Regime; 4] = [
        Regime::WeakLocals,
        Regime::StrongLocal1,
        Regime::StrongLocal2,
        Regime::StrongLocals,
    ];

    pub fn valuation(self) -> Valuation {
        match self {
            Regime::WeakLocals => weak_locals,
            Regime::StrongLocal1 => strong_local_1,
            Regime::StrongLocal2 => strong_local_2,
            Regime::StrongLocals => strong_locals,
        }
    }

    pub fn value(self, coal: &Coalition) -> Expr {
        (self.valuation())(coal)
    }

    /// Row label in the LaTeX tables
    pub fn label(self) -> &'static str {
        match self {
            Regime::WeakLocals => r"locals\\weak",
            Regime::StrongLocal1 => r"local 1\\strong",
            Regime::StrongLocal2 => r"local 2\\strong",
            Regime::StrongLocals => r"locals\\strong",
        }
    }

    /// VCG payments of the two local bidders.
    ///
    /// A local bidder pays `G` minus the other local's bid whenever dropping
    /// her hands the items to the global bidder.
    pub fn vcg_payments(self) -> [Expr; 2] {
        let pays_1 = matches!(self, Regime::WeakLocals | Regime::StrongLocal1);
        let pays_2 = matches!(self, Regime::WeakLocals | Regime::StrongLocal2);
        [
            if pays_1 {
                Symbol::GlobalBidder - Symbol::LocalBidder2
            } else {
                Expr::zero()
            },
            if pays_2 {
                Symbol::GlobalBidder - Symbol::LocalBidder1
            } else {
                Expr::zero()
            },
        ]
    }

    /// Boundary substitutions applied to the IR inequalities, in order.
    ///
    /// A strong local 2 means `B = G + eps2`, a strong local 1 means
    /// `G = A - eps1`.
    pub fn boundary_substitutions(self) -> Vec<(Symbol, Expr)> {
        let mut subs = Vec::new();
        if matches!(self, Regime::StrongLocal2 | Regime::StrongLocals) {
            subs.push((
                Symbol::LocalBidder2,
                Symbol::GlobalBidder + Symbol::Epsilon2,
            ));
        }
        if matches!(self, Regime::StrongLocal1 | Regime::StrongLocals) {
            subs.push((
                Symbol::GlobalBidder,
                Symbol::LocalBidder1 - Symbol::Epsilon1,
            ));
        }
        subs
    }
}
