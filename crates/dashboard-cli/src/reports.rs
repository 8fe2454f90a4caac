//! Report generation (console tables, text chart, JSON and theme sheets)

use anyhow::Result;
use dashboard_core::{
    ChartSpec, Measure, PeriodRecord, Theme, ThemeToken, Totals, ViewSnapshot, format_axis_value, format_total,
    value_axis,
};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::constants;

/// Table row for one period
#[derive(Tabled)]
struct PeriodRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Period")]
    label: String,
    #[tabled(rename = "Revenue")]
    revenue: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Profit")]
    profit: String,
}

fn period_rows(records: &[PeriodRecord], first_index: usize) -> Vec<PeriodRow> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| PeriodRow {
            index: first_index + i,
            label: r.label.clone(),
            revenue: format!("{:.0}", r.revenue),
            expenses: format!("{:.0}", r.expenses),
            profit: format!("{:.0}", r.profit),
        })
        .collect()
}

/// Table of every period with its index
pub fn periods_table(records: &[PeriodRecord]) -> String {
    Table::new(period_rows(records, 0)).with(Style::rounded()).to_string()
}

/// Index of the first record of `snapshot` within a source of `source_len` records
fn first_index(snapshot: &ViewSnapshot, source_len: usize) -> usize {
    snapshot.selection.span(source_len).start
}

/// Console summary: banner, filtered table, totals
pub fn summary_text(snapshot: &ViewSnapshot, source: &[PeriodRecord]) -> String {
    let rule = "=".repeat(constants::BANNER_WIDTH);
    let mut out = String::new();

    let first = snapshot.records.first().map(|r| r.label.as_str()).unwrap_or("-");
    let last = snapshot.records.last().map(|r| r.label.as_str()).unwrap_or("-");

    out.push_str(&format!("{}\n  SALES SUMMARY ({} – {})\n{}\n\n", rule, first, last, rule));
    out.push_str(&format!(
        "Showing {} of {} periods\n\n",
        snapshot.records.len(),
        source.len()
    ));

    if !snapshot.records.is_empty() {
        let rows = period_rows(snapshot.records, first_index(snapshot, source.len()));
        out.push_str(&format!("{}\n\n", Table::new(rows).with(Style::rounded())));
    }

    out.push_str("TOTALS:\n");
    for measure in Measure::ALL {
        let value = snapshot.totals.get(measure);
        out.push_str(&format!(
            "  {:<10} {:>12.0}  {:>10}\n",
            measure.label(),
            value,
            format_total(value)
        ));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    start: usize,
    end: usize,
    periods: &'a [PeriodRecord],
    totals: Totals,
    formatted: FormattedTotals,
}

#[derive(Serialize)]
struct FormattedTotals {
    revenue: String,
    expenses: String,
    profit: String,
}

/// Machine-readable summary
pub fn summary_json(snapshot: &ViewSnapshot) -> Result<String> {
    let summary = JsonSummary {
        start: snapshot.selection.start(),
        end: snapshot.selection.end(),
        periods: snapshot.records,
        totals: snapshot.totals,
        formatted: FormattedTotals {
            revenue: format_total(snapshot.totals.revenue),
            expenses: format_total(snapshot.totals.expenses),
            profit: format_total(snapshot.totals.profit),
        },
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}

/// Grouped horizontal bar chart, one line per (period, series)
pub fn text_chart(records: &[PeriodRecord], spec: &ChartSpec, width: usize) -> String {
    let mut out = String::new();

    let legend: Vec<_> = spec
        .series
        .iter()
        .enumerate()
        .map(|(slot, s)| format!("{} {}", glyph(slot), s.name()))
        .collect();
    out.push_str(&legend.join("   "));
    out.push_str("\n\n");

    if records.is_empty() || spec.series.is_empty() {
        out.push_str("(no periods in range)\n");
        return out;
    }

    let axis = value_axis(records, &spec.series);
    let label_width = records.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
    let name_width = spec.series.iter().map(|s| s.name().len()).max().unwrap_or(0);

    for record in records {
        for (slot, series) in spec.series.iter().enumerate() {
            let value = record.value(series.measure);
            let len = ((value / axis.max) * width as f64).round() as usize;
            let label = if slot == 0 { record.label.as_str() } else { "" };
            out.push_str(&format!(
                "{:<lw$}  {:<nw$}  {:<w$}  {}\n",
                label,
                series.name(),
                glyph(slot).to_string().repeat(len),
                format_axis_value(value),
                lw = label_width,
                nw = name_width,
                w = width,
            ));
        }
    }

    out.push_str(&format!(
        "\n{:<pad$}0{:>w$}\n",
        "",
        format_axis_value(axis.max),
        pad = label_width + name_width + 4,
        w = width.saturating_sub(1),
    ));
    out
}

fn glyph(slot: usize) -> char {
    constants::BAR_GLYPHS[slot % constants::BAR_GLYPHS.len()]
}

/// Resolved theme as a CSS custom-property sheet
pub fn theme_sheet(theme: &Theme) -> String {
    let mut out = format!("/* theme: {} */\n:root {{\n", theme.name());
    for token in ThemeToken::ALL {
        out.push_str(&format!("  {}: {};\n", token.css_var(), theme.get(token)));
    }
    out.push_str("}\n");
    out
}
