//! LaTeX `tabular` rendering of the regime reports

use crate::{
    comparison::{RegimeReport, RuleOutcome, compute_reports},
    relation::Relation,
    symbolic::Expr,
    types::PaymentRule,
};

const ROW_END: &str = r"\\[5pt]";
const CELL_SEP: &str = r"& \small ";

/// The two rendered tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatexTables {
    /// Payments, payoffs, derivatives and sensitivity
    pub payments: String,
    /// Independence of the IR constraints
    pub ir_constraints: String,
}

/// Compute every regime and render both tables
pub fn make_tables() -> LatexTables {
    render_tables(&compute_reports())
}

pub fn render_tables(reports: &[RegimeReport]) -> LatexTables {
    LatexTables {
        payments: render_payment_table(reports),
        ir_constraints: render_ir_table(reports),
    }
}

fn formula(latex: &str) -> String {
    format!(r"$ \displaystyle {latex}$")
}

fn expr_cell(expr: &Expr) -> String {
    formula(&expr.to_latex())
}

fn relation_cell(relation: &Relation) -> String {
    formula(&relation.to_latex())
}

fn pair_cell(pair: &[Expr; 2]) -> String {
    format!(
        r"$ \displaystyle \left( {}, {}\right) $",
        pair[0].to_latex(),
        pair[1].to_latex()
    )
}

fn data_row(lead: &str, outcomes: &[RuleOutcome], cell: impl Fn(&RuleOutcome) -> String) -> String {
    let cells: Vec<String> = outcomes.iter().map(cell).collect();
    format!(r"{lead} & \small {}{ROW_END}", cells.join(CELL_SEP))
}

/// Column spec, bold header row and the double rule below it
fn header() -> Vec<String> {
    let n_rules = PaymentRule::ALL.len();
    let labels: Vec<&str> = PaymentRule::ALL.iter().map(|r| r.header()).collect();
    vec![
        format!(r"\begin{{tabular}}{{|l|l|{}}}", "l|".repeat(n_rules)),
        r"\hline".to_string(),
        format!(
            r"\multicolumn{{2}}{{|l|}}{{\bf Case}} & \bf {}\\",
            labels.join(r"& \bf ")
        ),
        format!(r"\multicolumn{{2}}{{|l|}}{{}} &{}\\", "&".repeat(n_rules - 1)),
        format!(r"\hhline{{:=:=:{}}}", "=:".repeat(n_rules)),
    ]
}

fn regime_lead(rows: usize, report: &RegimeReport, cell: &str) -> String {
    format!(
        r"\multirow{{{rows}}}{{1.2cm}}{{\small {}}} & \small {cell}",
        report.regime.label()
    )
}

/// Table 1: `p_1`, `p_2`, derivative and sensitivity rows per regime
pub fn render_payment_table(reports: &[RegimeReport]) -> String {
    let mut lines = header();
    for report in reports {
        let outcomes = &report.outcomes;
        lines.push(data_row(&regime_lead(4, report, "$p_1$"), outcomes, |o| {
            expr_cell(&o.values[0])
        }));
        lines.push(data_row(r"& \small $p_2$", outcomes, |o| {
            expr_cell(&o.values[1])
        }));
        lines.push(data_row(
            r"& \small $\frac{\partial}{\partial A}$",
            outcomes,
            |o| pair_cell(&o.derivatives),
        ));
        lines.push(data_row(r"& \small $sens_1(p(b))$", outcomes, |o| {
            expr_cell(&o.sensitivity)
        }));
        lines.push(r"\hline".to_string());
    }
    lines.push(r"\end{tabular}".to_string());
    lines.join("\n")
}

/// Table 2: one IR row per local bidder and regime
pub fn render_ir_table(reports: &[RegimeReport]) -> String {
    let mut lines = header();
    for report in reports {
        let outcomes = &report.outcomes;
        lines.push(data_row(
            &regime_lead(2, report, "IR bidder 1"),
            outcomes,
            |o| relation_cell(&o.ir_bidder_1),
        ));
        lines.push(data_row(r"& \small IR bidder 2", outcomes, |o| {
            relation_cell(&o.ir_bidder_2)
        }));
        lines.push(r"\hline".to_string());
    }
    lines.push(r"\end{tabular}".to_string());
    lines.join("\n")
}
