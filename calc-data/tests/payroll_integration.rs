//! Integration tests for batch processing against on-disk fixtures.

use calc_core::{BracketTable, ProgressiveCalculator};
use calc_data::{PayrollLoader, PayrollResult};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const PAYROLL_CSV: &str = include_str!("../test-data/payroll.csv");
const ALT_TABLE_TOML: &str = include_str!("../test-data/alt_table.toml");

fn run(calculator: &ProgressiveCalculator) -> Vec<PayrollResult> {
    let records = PayrollLoader::parse(PAYROLL_CSV.as_bytes()).expect("Failed to parse fixture");
    PayrollLoader::compute(calculator, &records).expect("Failed to compute fixture")
}

#[test]
fn test_fixture_matches_reference_scenarios() {
    let results = run(&ProgressiveCalculator::new(BracketTable::inss_2025()));

    let summary: Vec<_> = results
        .iter()
        .map(|r| (r.employee.as_str(), r.deduction, r.net))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("Ana Souza", dec!(75.00), dec!(925.00)),
            ("Bruno Lima", dec!(113.85), dec!(1404.15)),
            ("Carla Dias", dec!(157.23), dec!(1842.77)),
            ("Diego Alves", dec!(313.41), dec!(3186.59)),
            ("Elisa Rocha", dec!(876.96), dec!(8123.04)),
        ]
    );
}

#[test]
fn test_fixture_with_alternative_table() {
    let table: BracketTable = toml::from_str(ALT_TABLE_TOML).expect("Failed to parse table");
    assert_eq!(table.validate(), Ok(()));

    let results = run(&ProgressiveCalculator::new(table));

    // 1000 → 100; 1518 → 100 + 103.6; 2000 → 300; 3500 → 300 + 450; 9000 → cap
    let deductions: Vec<_> = results.iter().map(|r| r.deduction).collect();
    assert_eq!(
        deductions,
        vec![dec!(100.00), dec!(203.60), dec!(300.00), dec!(750.00), dec!(900)]
    );
}

#[test]
fn test_write_then_totals() {
    let results = run(&ProgressiveCalculator::default());
    let mut out = Vec::new();

    PayrollLoader::write(&mut out, &results).expect("Failed to write CSV");

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 6);
    assert!(text.contains("Elisa Rocha,9000.00,876.96,8123.04,true"));

    let totals = PayrollLoader::totals(&results);
    assert_eq!(totals.employees, 5);
    assert_eq!(totals.deduction, dec!(1536.45));
}
