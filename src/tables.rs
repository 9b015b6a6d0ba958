use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{analysis::AnalysisReport, npv::discount, savings::MonthlySavings},
    quantity::currency::Euros,
    scenario::Service,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

const fn sign_color(amount: Euros) -> Color {
    if amount.is_negative() { Color::Red } else { Color::Green }
}

pub fn build_savings_table(savings: &MonthlySavings) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Time saved per month", "Savings per month"]).add_row(vec![
        Cell::new(savings.time_saved).set_alignment(CellAlignment::Right),
        Cell::new(savings.amount).set_alignment(CellAlignment::Right),
    ]);
    table
}

pub fn build_summary_table(service: Service, report: &AnalysisReport) -> Table {
    let result = &report.result;
    let payback = match result.payback_period.period() {
        Some(period) => {
            Cell::new(format!("{period} {}", report.period.unit(period))).fg(Color::Green)
        }
        None => Cell::new(result.payback_period).fg(Color::Red),
    };
    let mut table = new_table();
    table
        .set_header(vec![
            "Service",
            "Period",
            "Savings per month",
            "Investment",
            "Discount rate",
            "NPV",
            "Payback",
        ])
        .add_row(vec![
            Cell::new(service),
            Cell::new(report.period),
            Cell::new(report.savings.amount).set_alignment(CellAlignment::Right),
            Cell::new(result.investment).set_alignment(CellAlignment::Right),
            Cell::new(result.discount_rate).set_alignment(CellAlignment::Right),
            Cell::new(result.npv)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold)
                .fg(sign_color(result.npv)),
            payback,
        ]);
    table
}

/// Per-period cash flows with the cumulative totals colored by phase, the textual
/// rendition of the cumulative cash-flow chart.
pub fn build_cash_flow_table(report: &AnalysisReport) -> Table {
    let rate = report.period.periodic_rate(report.result.discount_rate);
    let chart = report.chart();

    let mut table = new_table();
    table.set_header(vec!["Period", "Cash flow", "Present value", "Cumulative"]);
    for (index, cumulative, phase) in chart.points() {
        let cash_flow =
            if index == 0 { -report.result.investment } else { report.cash_flows[index - 1] };
        let mut cumulative =
            Cell::new(cumulative).set_alignment(CellAlignment::Right).fg(phase.color());
        if chart.crossing() == Some(index) {
            cumulative = cumulative.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            Cell::new(index).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
            Cell::new(cash_flow).set_alignment(CellAlignment::Right),
            Cell::new(discount(rate, index, cash_flow)).set_alignment(CellAlignment::Right),
            cumulative,
        ]);
    }
    table
}
