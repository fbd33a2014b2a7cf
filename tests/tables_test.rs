use llg_shapley::{
    PaymentRule, Regime, RegimeReport, Relation, TableWriterBuilder, compute_reports,
    latex::render_tables, make_tables,
};

const DATA_ROW_END: &str = r"\\[5pt]";

fn data_rows(table: &str) -> Vec<&str> {
    table
        .lines()
        .filter(|line| line.ends_with(DATA_ROW_END))
        .collect()
}

#[test]
fn test_payment_table_shape() {
    let tables = make_tables();
    let lines: Vec<&str> = tables.payments.lines().collect();

    assert_eq!(lines[0], r"\begin{tabular}{|l|l|l|l|l|l|l|l|}");
    assert_eq!(lines[4], r"\hhline{:=:=:=:=:=:=:=:=:}");
    assert_eq!(*lines.last().unwrap(), r"\end{tabular}");

    let rows = data_rows(&tables.payments);
    assert_eq!(rows.len(), 16);
    for row in &rows {
        // two label columns and six rule columns
        assert_eq!(row.matches(r"& \small ").count(), 7, "{row}");
    }

    // header + 4 regimes * (4 rows + rule) + footer
    assert_eq!(lines.len(), 5 + 4 * 5 + 1);
    for block in lines[5..lines.len() - 1].chunks(5) {
        assert!(block[0].starts_with(r"\multirow{4}{1.2cm}"));
        assert_eq!(block[4], r"\hline");
    }
}

#[test]
fn test_ir_table_shape() {
    let tables = make_tables();
    let lines: Vec<&str> = tables.ir_constraints.lines().collect();

    let rows = data_rows(&tables.ir_constraints);
    assert_eq!(rows.len(), 8);
    assert_eq!(lines.len(), 5 + 4 * 3 + 1);

    let labels: Vec<&str> = Regime::ALL.iter().map(|r| r.label()).collect();
    for (block, label) in lines[5..lines.len() - 1].chunks(3).zip(labels) {
        assert!(block[0].starts_with(&format!(
            r"\multirow{{2}}{{1.2cm}}{{\small {label}}} & \small IR bidder 1"
        )));
        assert!(block[1].starts_with(r"& \small IR bidder 2"));
        assert_eq!(block[2], r"\hline");
    }
}

#[test]
fn test_both_tables_share_the_header() {
    let tables = make_tables();
    let head = |t: &str| t.lines().take(5).map(str::to_string).collect::<Vec<_>>();
    assert_eq!(head(&tables.payments), head(&tables.ir_constraints));
}

#[test]
fn test_render_is_deterministic() {
    let reports = compute_reports();
    assert_eq!(render_tables(&reports), make_tables());
}

#[test]
fn test_strong_locals_vcg_row_entries() {
    let report = RegimeReport::compute(Regime::StrongLocals);
    let vcg = report.outcome(PaymentRule::Vcg).unwrap();
    assert!(vcg.values.iter().all(|v| v.is_zero()));

    let tables = render_tables(std::slice::from_ref(&report));
    let p1_row = data_rows(&tables.payments)[0];
    // first price A, then VCG 0
    assert!(p1_row.contains(r"$ \displaystyle A$& \small $ \displaystyle 0$"));
}

#[test]
fn test_weak_locals_ir_rows_render_relations() {
    let report = RegimeReport::compute(Regime::WeakLocals);
    let fp = report.outcome(PaymentRule::FirstPrice).unwrap();
    assert!(matches!(fp.ir_bidder_1, Relation::Compare { .. }));

    let tables = render_tables(std::slice::from_ref(&report));
    let rows = data_rows(&tables.ir_constraints);
    assert!(rows[0].contains(r"G \geq A + B"));
    assert!(rows[1].contains(r"A + B \leq G"));
}

#[test]
fn test_write_tables_to_directory() {
    let dir = tempfile::tempdir().unwrap();
    let writer = TableWriterBuilder::default()
        .output_dir(dir.path())
        .build()
        .unwrap();
    let tables = make_tables();
    writer.write(&tables).unwrap();

    let table1 = std::fs::read_to_string(dir.path().join("LLG_shapley_table1.tex")).unwrap();
    let table2 = std::fs::read_to_string(dir.path().join("LLG_shapley_table2.tex")).unwrap();
    assert_eq!(table1, tables.payments);
    assert_eq!(table2, tables.ir_constraints);
}
