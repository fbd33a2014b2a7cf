//! Exact linear expressions over the positive bid symbols
//!
//! Every quantity in the LLG tables is a rational linear combination of the
//! bid values (and, after the boundary substitutions, of the perturbations),
//! so an expression is stored as a map from symbol to a non-zero rational
//! coefficient plus a rational constant. Zero coefficients are never stored,
//! which makes structural equality the same thing as symbolic equality.

use crate::utils::{gcd_of_numerators, lcm_of_denominators};
use num_rational::Rational64;
use num_traits::{One, Signed, Zero};
use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
    ops::{Add, Mul, Neg, Sub},
};

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Free symbols. All of them are assumed strictly positive.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// Bid value of local bidder 1, `A`
    LocalBidder1,
    /// Bid value of local bidder 2, `B`
    LocalBidder2,
    /// Bid value of the global bidder, `G`
    GlobalBidder,
    /// Gap between local bidder 1 and the global bidder
    Epsilon1,
    /// Gap between local bidder 2 and the global bidder
    Epsilon2,
}

impl Symbol {
    pub fn name(self) -> &'static str {
        match self {
            Symbol::LocalBidder1 => "A",
            Symbol::LocalBidder2 => "B",
            Symbol::GlobalBidder => "G",
            Symbol::Epsilon1 => "eps1",
            Symbol::Epsilon2 => "eps2",
        }
    }

    pub fn latex(self) -> &'static str {
        match self {
            Symbol::LocalBidder1 => "A",
            Symbol::LocalBidder2 => "B",
            Symbol::GlobalBidder => "G",
            Symbol::Epsilon1 => r"\varepsilon_{1}",
            Symbol::Epsilon2 => r"\varepsilon_{2}",
        }
    }
}

/// Rational linear expression `sum(c_s * s) + constant`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expr {
    terms: BTreeMap<Symbol, Rational64>,
    constant: Rational64,
}

impl Default for Expr {
    fn default() -> Self {
        Self::zero()
    }
}

impl Expr {
    pub fn zero() -> Self {
        Expr {
            terms: BTreeMap::new(),
            constant: Rational64::zero(),
        }
    }

    pub fn constant(value: Rational64) -> Self {
        Expr {
            terms: BTreeMap::new(),
            constant: value,
        }
    }

    pub fn integer(value: i64) -> Self {
        Self::constant(Rational64::from_integer(value))
    }

    pub fn symbol(symbol: Symbol) -> Self {
        let mut terms = BTreeMap::new();
        terms.insert(symbol, Rational64::one());
        Expr {
            terms,
            constant: Rational64::zero(),
        }
    }

    /// Coefficient of `symbol`, zero when absent
    pub fn coefficient(&self, symbol: Symbol) -> Rational64 {
        self.terms
            .get(&symbol)
            .copied()
            .unwrap_or_else(Rational64::zero)
    }

    pub fn constant_term(&self) -> Rational64 {
        self.constant
    }

    /// Symbols with a non-zero coefficient, in symbol order
    pub fn free_symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.terms.keys().copied()
    }

    pub fn is_constant(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty() && self.constant.is_zero()
    }

    /// True when every coefficient and the constant are non-negative and
    /// the expression is not zero. With positive symbols this means the
    /// expression is strictly positive.
    pub fn is_positive(&self) -> bool {
        !self.is_zero()
            && !self.constant.is_negative()
            && self.terms.values().all(|c| c.is_positive())
    }

    /// Mirror of [`Expr::is_positive`]
    pub fn is_negative(&self) -> bool {
        !self.is_zero()
            && !self.constant.is_positive()
            && self.terms.values().all(|c| c.is_negative())
    }

    pub fn scale(&self, factor: Rational64) -> Expr {
        if factor.is_zero() {
            return Expr::zero();
        }
        Expr {
            terms: self
                .terms
                .iter()
                .map(|(&symbol, &coef)| (symbol, coef * factor))
                .collect(),
            constant: self.constant * factor,
        }
    }

    /// Partial derivative with respect to `symbol`; always a constant
    pub fn diff(&self, symbol: Symbol) -> Expr {
        Expr::constant(self.coefficient(symbol))
    }

    /// Replace every occurrence of `symbol` by `replacement`
    pub fn subs(&self, symbol: Symbol, replacement: &Expr) -> Expr {
        let coef = self.coefficient(symbol);
        if coef.is_zero() {
            return self.clone();
        }
        let mut rest = self.clone();
        rest.terms.remove(&symbol);
        rest + replacement.scale(coef)
    }

    /// Scale by a positive factor so all coefficients and the constant are
    /// coprime integers. Zero stays zero.
    pub fn primitive(&self) -> Expr {
        let values = || self.terms.values().chain(std::iter::once(&self.constant));
        let lcm = lcm_of_denominators(values());
        let scaled = self.scale(Rational64::from_integer(lcm));
        let gcd = gcd_of_numerators(scaled.terms.values().chain(std::iter::once(&scaled.constant)));
        if gcd == 0 {
            return scaled;
        }
        scaled.scale(Rational64::new(1, gcd))
    }

    /// Split into the sum of positive parts and the negated sum of negative
    /// parts, so that `self == positive - negative`
    pub fn split_signs(&self) -> (Expr, Expr) {
        let mut positive = Expr::zero();
        let mut negative = Expr::zero();
        for (&symbol, &coef) in &self.terms {
            let target = if coef.is_positive() {
                &mut positive
            } else {
                &mut negative
            };
            target.terms.insert(symbol, coef.abs());
        }
        if self.constant.is_positive() {
            positive.constant = self.constant;
        } else {
            negative.constant = -self.constant;
        }
        (positive, negative)
    }

    fn add_term(&mut self, symbol: Symbol, coef: Rational64) {
        let entry = self.terms.entry(symbol).or_insert_with(Rational64::zero);
        *entry += coef;
        if entry.is_zero() {
            self.terms.remove(&symbol);
        }
    }

    /// LaTeX rendering with `\cdot` as the multiplication symbol
    pub fn to_latex(&self) -> String {
        // a lone integer keeps its sign attached, as in `-1`
        if self.terms.is_empty() && self.constant.is_integer() {
            return self.constant.to_integer().to_string();
        }
        let parts = self
            .terms
            .iter()
            .map(|(&symbol, &coef)| (coef, Some(symbol.latex())))
            .chain((!self.constant.is_zero()).then_some((self.constant, None)));
        join_signed(parts, latex_term)
    }
}

fn latex_term(magnitude: Rational64, symbol: Option<&str>) -> String {
    let numer = *magnitude.numer();
    let denom = *magnitude.denom();
    let top = match symbol {
        None => numer.to_string(),
        Some(s) if numer == 1 => s.to_string(),
        Some(s) => format!(r"{numer} \cdot {s}"),
    };
    if denom == 1 {
        top
    } else {
        format!(r"\frac{{{top}}}{{{denom}}}")
    }
}

fn plain_term(magnitude: Rational64, symbol: Option<&str>) -> String {
    match symbol {
        None => magnitude.to_string(),
        Some(s) if magnitude.is_one() => s.to_string(),
        Some(s) => format!("{magnitude}*{s}"),
    }
}

/// Joins signed terms as `a + b - c`, rendering magnitudes with `render`
fn join_signed<'a>(
    parts: impl Iterator<Item = (Rational64, Option<&'a str>)>,
    render: fn(Rational64, Option<&str>) -> String,
) -> String {
    let mut out = String::new();
    for (coef, symbol) in parts {
        let term = render(coef.abs(), symbol);
        match (out.is_empty(), coef.is_negative()) {
            (true, false) => out.push_str(&term),
            (true, true) => {
                out.push_str("- ");
                out.push_str(&term);
            }
            (false, false) => {
                out.push_str(" + ");
                out.push_str(&term);
            }
            (false, true) => {
                out.push_str(" - ");
                out.push_str(&term);
            }
        }
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let parts = self
            .terms
            .iter()
            .map(|(&symbol, &coef)| (coef, Some(symbol.name())))
            .chain((!self.constant.is_zero()).then_some((self.constant, None)));
        f.write_str(&join_signed(parts, plain_term))
    }
}

#[cfg(feature = "serde")]
impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_latex())
    }
}

impl From<Symbol> for Expr {
    fn from(symbol: Symbol) -> Self {
        Expr::symbol(symbol)
    }
}

impl From<Rational64> for Expr {
    fn from(value: Rational64) -> Self {
        Expr::constant(value)
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(mut self, rhs: Expr) -> Expr {
        for (symbol, coef) in rhs.terms {
            self.add_term(symbol, coef);
        }
        self.constant += rhs.constant;
        self
    }
}

impl Add<&Expr> for &Expr {
    type Output = Expr;

    fn add(self, rhs: &Expr) -> Expr {
        self.clone() + rhs.clone()
    }
}

impl Add<Symbol> for Expr {
    type Output = Expr;

    fn add(mut self, rhs: Symbol) -> Expr {
        self.add_term(rhs, Rational64::one());
        self
    }
}

impl Add<Symbol> for Symbol {
    type Output = Expr;

    fn add(self, rhs: Symbol) -> Expr {
        Expr::from(self) + rhs
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        self.scale(-Rational64::one())
    }
}

impl Neg for Symbol {
    type Output = Expr;

    fn neg(self) -> Expr {
        -Expr::from(self)
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        self + (-rhs)
    }
}

impl Sub<&Expr> for &Expr {
    type Output = Expr;

    fn sub(self, rhs: &Expr) -> Expr {
        self.clone() - rhs.clone()
    }
}

impl Sub<Symbol> for Expr {
    type Output = Expr;

    fn sub(mut self, rhs: Symbol) -> Expr {
        self.add_term(rhs, -Rational64::one());
        self
    }
}

impl Sub<Symbol> for Symbol {
    type Output = Expr;

    fn sub(self, rhs: Symbol) -> Expr {
        Expr::from(self) - rhs
    }
}

impl Sub<Expr> for Symbol {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::from(self) - rhs
    }
}

impl Mul<Rational64> for Expr {
    type Output = Expr;

    fn mul(self, rhs: Rational64) -> Expr {
        self.scale(rhs)
    }
}

impl Mul<i64> for Expr {
    type Output = Expr;

    fn mul(self, rhs: i64) -> Expr {
        self.scale(Rational64::from_integer(rhs))
    }
}

impl Mul<i64> for Symbol {
    type Output = Expr;

    fn mul(self, rhs: i64) -> Expr {
        Expr::from(self) * rhs
    }
}

impl std::iter::Sum for Expr {
    fn sum<I: Iterator<Item = Expr>>(iter: I) -> Expr {
        iter.fold(Expr::zero(), |acc, e| acc + e)
    }
}
