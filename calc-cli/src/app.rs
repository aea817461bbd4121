//! Drives the calculator screens from command-line input and renders them
//! as plain text.
//!
//! Each `run_*` function feeds the raw arguments through the screen's
//! `update` exactly as a form would (type into fields, then press the
//! action button) and returns the resulting state. `render_*` functions turn
//! a state into the text printed on stdout. Error alerts are not rendered;
//! the caller reports them.

use std::fmt::Write as _;

use calc_core::screens::{
    CounterAction, CounterScreen, GradeAverageAction, GradeAverageScreen, GradeField, InssAction,
    InssScreen, LoginAction, LoginScreen, UnitConverterAction, UnitConverterScreen,
};
use calc_core::{BracketTable, DeductionBreakdown, ProgressiveCalculator};

use crate::format::{format_brl, format_number, format_percent};

// ─── INSS ────────────────────────────────────────────────────────────────────

pub fn run_inss(
    calculator: &ProgressiveCalculator,
    gross: &str,
) -> InssScreen {
    InssScreen::new()
        .update(InssAction::Input(gross.to_string()), calculator)
        .update(InssAction::Calculate, calculator)
}

pub fn render_inss(
    screen: &InssScreen,
    table: &BracketTable,
) -> String {
    let Some(result) = &screen.result else {
        return String::new();
    };

    let mut out = String::new();
    let _ = writeln!(out, "Gross salary:    {}", format_brl(result.gross));
    let _ = writeln!(out, "INSS deduction: -{}", format_brl(result.deduction));
    let _ = writeln!(out, "Net salary:      {}", format_brl(result.net));
    if result.ceiling_applied {
        let _ = writeln!(
            out,
            "Salary above the INSS ceiling ({})",
            format_brl(table.ceiling)
        );
        let _ = writeln!(
            out,
            "Maximum deduction applied: {}",
            format_brl(table.max_deduction)
        );
    } else if result.max_deduction_applied {
        let _ = writeln!(
            out,
            "Bracket total capped at the maximum deduction ({})",
            format_brl(table.max_deduction)
        );
    }
    out
}

pub fn render_breakdown(breakdown: &DeductionBreakdown) -> String {
    let mut out = String::new();
    for c in &breakdown.contributions {
        let _ = writeln!(
            out,
            "{:>14} – {:<14} {:>6}  on {:>14}  = {}",
            format_brl(c.lower_bound),
            format_brl(c.upper_bound),
            format_percent(c.rate),
            format_brl(c.taxable),
            format_brl(c.amount),
        );
    }
    if !breakdown.cap_adjustment.is_zero() {
        let _ = writeln!(
            out,
            "{:>14}   {:<14} {:>6}  on {:>14}  = -{}",
            "Cap adjustment",
            "",
            "",
            format_brl(breakdown.bracket_sum()),
            format_brl(breakdown.cap_adjustment),
        );
    }
    out
}

pub fn render_table(table: &BracketTable) -> String {
    let mut out = String::new();
    let mut previous = None;
    for bracket in &table.brackets {
        let range = match previous {
            None => format!("up to {}", format_brl(bracket.upper_bound)),
            Some(lower) => format!("{} to {}", format_brl(lower), format_brl(bracket.upper_bound)),
        };
        let _ = writeln!(out, "{range:<32} {}", format_percent(bracket.rate));
        previous = Some(bracket.upper_bound);
    }
    let _ = writeln!(out, "Ceiling:           {}", format_brl(table.ceiling));
    let _ = writeln!(out, "Maximum deduction: {}", format_brl(table.max_deduction));
    out
}

// ─── Grades ──────────────────────────────────────────────────────────────────

pub fn run_grades(grades: [&str; 3]) -> GradeAverageScreen {
    let [first, second, third] = grades;
    GradeAverageScreen::new()
        .update(GradeAverageAction::Input(GradeField::First, first.to_string()))
        .update(GradeAverageAction::Input(GradeField::Second, second.to_string()))
        .update(GradeAverageAction::Input(GradeField::Third, third.to_string()))
        .update(GradeAverageAction::Calculate)
}

pub fn render_grades(screen: &GradeAverageScreen) -> String {
    match &screen.outcome {
        Some(outcome) => format!(
            "Average: {}\n{}\n",
            format_number(outcome.average),
            outcome.status.label()
        ),
        None => String::new(),
    }
}

// ─── Unit converter ──────────────────────────────────────────────────────────

pub fn run_converter(metres: &str) -> UnitConverterScreen {
    UnitConverterScreen::new()
        .update(UnitConverterAction::Input(metres.to_string()))
        .update(UnitConverterAction::Convert)
}

pub fn render_converter(screen: &UnitConverterScreen) -> String {
    match screen.centimetres {
        Some(centimetres) => format!(
            "{} m = {} cm\n1 metre = 100 centimetres\n",
            screen.metres_input.trim(),
            format_number(centimetres)
        ),
        None => String::new(),
    }
}

// ─── Login ───────────────────────────────────────────────────────────────────

pub fn run_login(
    username: &str,
    password: &str,
) -> LoginScreen {
    LoginScreen::new()
        .update(LoginAction::Username(username.to_string()))
        .update(LoginAction::Password(password.to_string()))
        .update(LoginAction::Submit)
}

pub fn render_login(screen: &LoginScreen) -> String {
    match &screen.alert {
        Some(alert) if !alert.is_error() => format!("{}\n", alert.message),
        _ => String::new(),
    }
}

// ─── Counter ─────────────────────────────────────────────────────────────────

pub fn run_counter(actions: &[CounterAction]) -> CounterScreen {
    actions
        .iter()
        .fold(CounterScreen::new(), |screen, action| screen.update(*action))
}

pub fn render_counter(screen: &CounterScreen) -> String {
    if screen.can_decrement() {
        format!("Counter: {}\n", screen.value)
    } else {
        format!("Counter: {} (decrement disabled)\n", screen.value)
    }
}
