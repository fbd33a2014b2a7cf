use crate::symbolic::{Expr, Symbol};
use num_rational::Rational64;
use num_traits::Zero;
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Comparison operator of an inequality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Ge,
    Gt,
    Le,
    Lt,
}

impl Comparison {
    /// Operator obtained by swapping the two sides
    pub fn reversed(self) -> Self {
        match self {
            Comparison::Ge => Comparison::Le,
            Comparison::Gt => Comparison::Lt,
            Comparison::Le => Comparison::Ge,
            Comparison::Lt => Comparison::Gt,
        }
    }

    /// Whether `d op 0` holds for a value of `d` with the given sign
    fn holds_for_sign(self, sign: std::cmp::Ordering) -> bool {
        use std::cmp::Ordering::*;
        match self {
            Comparison::Ge => sign != Less,
            Comparison::Gt => sign == Greater,
            Comparison::Le => sign != Greater,
            Comparison::Lt => sign == Less,
        }
    }

    fn latex(self) -> &'static str {
        match self {
            Comparison::Ge => r"\geq",
            Comparison::Gt => ">",
            Comparison::Le => r"\leq",
            Comparison::Lt => "<",
        }
    }

    fn plain(self) -> &'static str {
        match self {
            Comparison::Ge => ">=",
            Comparison::Gt => ">",
            Comparison::Le => "<=",
            Comparison::Lt => "<",
        }
    }
}

/// An inequality between two expressions, or its decided truth value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relation {
    Decided(bool),
    Compare {
        lhs: Expr,
        op: Comparison,
        rhs: Expr,
    },
}

impl Relation {
    pub fn new(lhs: Expr, op: Comparison, rhs: Expr) -> Self {
        Relation::Compare { lhs, op, rhs }
    }

    pub fn ge(lhs: Expr, rhs: Expr) -> Self {
        Self::new(lhs, Comparison::Ge, rhs)
    }

    pub fn le(lhs: Expr, rhs: Expr) -> Self {
        Self::new(lhs, Comparison::Le, rhs)
    }

    /// Canonical form under the assumption that every symbol is positive.
    ///
    /// The relation is rewritten as `d op 0`. A constant `d`, or one whose
    /// terms all share a sign, decides it. Otherwise `d` is scaled to
    /// coprime integer coefficients and split into positive terms on the
    /// left and negative terms on the right, keeping a symbol on the left.
    pub fn simplify(&self) -> Relation {
        let (lhs, op, rhs) = match self {
            Relation::Decided(value) => return Relation::Decided(*value),
            Relation::Compare { lhs, op, rhs } => (lhs, *op, rhs),
        };

        let diff = lhs - rhs;
        if diff.is_constant() {
            let constant = diff.constant_term();
            let sign = constant.cmp(&Rational64::zero());
            return Relation::Decided(op.holds_for_sign(sign));
        }
        if diff.is_positive() {
            return Relation::Decided(op.holds_for_sign(std::cmp::Ordering::Greater));
        }
        if diff.is_negative() {
            return Relation::Decided(op.holds_for_sign(std::cmp::Ordering::Less));
        }

        let (positive, negative) = diff.primitive().split_signs();
        if positive.is_constant() {
            Relation::new(negative, op.reversed(), positive)
        } else {
            Relation::new(positive, op, negative)
        }
    }

    /// Substitute into both sides. The result is not simplified.
    pub fn subs(&self, symbol: Symbol, replacement: &Expr) -> Relation {
        match self {
            Relation::Decided(value) => Relation::Decided(*value),
            Relation::Compare { lhs, op, rhs } => Relation::new(
                lhs.subs(symbol, replacement),
                *op,
                rhs.subs(symbol, replacement),
            ),
        }
    }

    pub fn is_decided(&self) -> bool {
        matches!(self, Relation::Decided(_))
    }

    pub fn to_latex(&self) -> String {
        match self {
            Relation::Decided(true) => r"\text{True}".to_string(),
            Relation::Decided(false) => r"\text{False}".to_string(),
            Relation::Compare { lhs, op, rhs } => {
                format!("{} {} {}", lhs.to_latex(), op.latex(), rhs.to_latex())
            }
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Relation::Decided(value) => write!(f, "{value}"),
            Relation::Compare { lhs, op, rhs } => write!(f, "{lhs} {} {rhs}", op.plain()),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for Relation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_latex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::*;

    #[test]
    fn test_simplify_moves_terms_apart() {
        // A >= B - G + 2A  <=>  G >= A + B
        let rel = Relation::ge(
            Expr::from(LocalBidder1),
            LocalBidder2 - GlobalBidder + LocalBidder1 * 2,
        );
        let simplified = rel.simplify();
        assert_eq!(
            simplified,
            Relation::ge(Expr::from(GlobalBidder), LocalBidder1 + LocalBidder2)
        );
        assert_eq!(simplified.to_latex(), r"G \geq A + B");
        assert_eq!(simplified.to_string(), "G >= A + B");
    }

    #[test]
    fn test_simplify_decides_constant_and_signed_relations() {
        assert_eq!(
            Relation::ge(Expr::zero(), Expr::zero()).simplify(),
            Relation::Decided(true)
        );
        assert_eq!(
            Relation::new(Expr::zero(), Comparison::Lt, Expr::zero()).simplify(),
            Relation::Decided(false)
        );
        // every symbol is positive, so G < G + A and G < G + eps2
        assert_eq!(
            Relation::le(Expr::from(GlobalBidder), GlobalBidder + LocalBidder1).simplify(),
            Relation::Decided(true)
        );
        assert_eq!(
            Relation::ge(Expr::from(GlobalBidder), GlobalBidder + Epsilon2).simplify(),
            Relation::Decided(false)
        );
        assert_eq!(Relation::Decided(true).to_latex(), r"\text{True}");
    }

    #[test]
    fn test_simplify_scales_to_integers() {
        // A/2 >= G/3  <=>  3A >= 2G
        let rel = Relation::ge(
            Expr::from(LocalBidder1) * Rational64::new(1, 2),
            Expr::from(GlobalBidder) * Rational64::new(1, 3),
        );
        assert_eq!(
            rel.simplify(),
            Relation::ge(LocalBidder1 * 3, GlobalBidder * 2)
        );
    }

    #[test]
    fn test_symbol_kept_on_left() {
        // 1 >= A  <=>  A <= 1
        let rel = Relation::ge(Expr::integer(1), Expr::from(LocalBidder1));
        assert_eq!(
            rel.simplify(),
            Relation::le(Expr::from(LocalBidder1), Expr::integer(1))
        );
    }

    #[test]
    fn test_subs_then_simplify() {
        // G >= A + B with B -> G + eps2 becomes false
        let rel = Relation::ge(Expr::from(GlobalBidder), LocalBidder1 + LocalBidder2);
        let rel = rel
            .subs(LocalBidder2, &(GlobalBidder + Epsilon2))
            .simplify();
        assert_eq!(rel, Relation::Decided(false));

        // decided relations are untouched
        let rel = rel.subs(GlobalBidder, &(LocalBidder1 - Epsilon1));
        assert!(rel.is_decided());
    }
}
