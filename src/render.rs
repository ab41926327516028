//! Terminal rendering of dashboard views.

use analytics::format::{money, percent, ratio, whole_percent};
use analytics::{
    BenchmarkReport, BenchmarkRow, CumulativeSeries, Insight, InsightSeverity, MetricCard,
    TradeDistribution, Trend, format_profit,
};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use core_types::BenchmarkKind;
use events::{DashboardView, TradeTable};
use rust_decimal::Decimal;

pub fn render(view: &DashboardView, title: &str) -> String {
    let body = match view {
        DashboardView::Summary(cards) => render_summary(cards),
        DashboardView::Performance(series) => render_performance(series),
        DashboardView::Distribution(distribution) => render_distribution(distribution),
        DashboardView::Benchmarks(report) => render_benchmarks(report),
        DashboardView::Trades(table) => render_trades(table),
        DashboardView::Insights(insights) => render_insights(insights),
    };
    format!("{}\n\n{}", title, body)
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn align_right(table: &mut Table, columns: &[usize]) {
    for &index in columns {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn signed_cell(text: String, value: Decimal) -> Cell {
    let cell = Cell::new(text);
    if value > Decimal::ZERO {
        cell.fg(Color::Green)
    } else if value < Decimal::ZERO {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

fn render_summary(cards: &[MetricCard]) -> String {
    let mut table = new_table(vec!["Metric", "Value", "Trend", "Note"]);
    for card in cards {
        let (arrow, color) = match card.trend {
            Trend::Up => ("▲", Some(Color::Green)),
            Trend::Down => ("▼", Some(Color::Red)),
            Trend::Neutral => ("–", None),
        };
        let mut value = Cell::new(&card.value);
        if let Some(color) = color {
            value = value.fg(color);
        }
        table.add_row(vec![
            Cell::new(&card.title),
            value,
            Cell::new(arrow),
            Cell::new(card.subtitle.as_deref().unwrap_or("")),
        ]);
    }
    align_right(&mut table, &[1]);
    table.to_string()
}

fn render_performance(series: &CumulativeSeries) -> String {
    if series.is_empty() {
        return "Cumulative Performance\nNo closed trades.".to_string();
    }

    let mut table = new_table(vec!["#", "Ticket", "Date", "Profit", "Balance"]);
    for point in &series.points {
        table.add_row(vec![
            Cell::new(point.trade_index),
            Cell::new(&point.ticket),
            Cell::new(&point.date),
            signed_cell(format_profit(point.profit), point.profit),
            Cell::new(money(point.balance)),
        ]);
    }
    align_right(&mut table, &[0, 3, 4]);

    let drawdown_pct = series
        .max_drawdown_pct()
        .map(|pct| format!(" ({})", percent(pct)))
        .unwrap_or_default();
    format!(
        "Cumulative Performance\n{}\nStarting balance: {}\nFinal balance:    {}\nNet profit:       {}\nMax drawdown:     {}{}",
        table,
        money(series.starting_balance),
        money(series.final_balance()),
        format_profit(series.net_profit()),
        money(series.max_drawdown()),
        drawdown_pct
    )
}

fn render_distribution(distribution: &TradeDistribution) -> String {
    let outcome = &distribution.outcome;
    let share = |pct: Option<Decimal>| pct.map(whole_percent).unwrap_or_default();

    let mut pie = new_table(vec!["Outcome", "Trades", "Share"]);
    pie.add_row(vec![
        Cell::new("Win Trades").fg(Color::Green),
        Cell::new(outcome.wins),
        Cell::new(share(outcome.win_pct())),
    ]);
    pie.add_row(vec![
        Cell::new("Loss Trades").fg(Color::Red),
        Cell::new(outcome.losses),
        Cell::new(share(outcome.loss_pct())),
    ]);
    align_right(&mut pie, &[1, 2]);

    let mut positions = new_table(vec!["Position", "Total", "Win Rate", "Wins", "Losses"]);
    for row in &distribution.positions {
        positions.add_row(vec![
            Cell::new(&row.name),
            Cell::new(row.total),
            Cell::new(percent(row.win_rate)),
            Cell::new(row.wins).fg(Color::Green),
            Cell::new(row.losses).fg(Color::Red),
        ]);
    }
    align_right(&mut positions, &[1, 2, 3, 4]);

    format!(
        "Win/Loss Distribution\n{}\n\nPosition Type Performance\n{}",
        pie, positions
    )
}

fn render_benchmarks(report: &BenchmarkReport) -> String {
    let mut chart = new_table(vec!["Name", "Return", "Sharpe Ratio", "Kind"]);
    for (ret, sharpe) in report.return_chart.iter().zip(&report.sharpe_chart) {
        let kind = match ret.kind {
            BenchmarkKind::Portfolio => "portfolio",
            BenchmarkKind::Benchmark => "benchmark",
            BenchmarkKind::RiskFree => "risk-free",
        };
        let values = vec![
            ret.name.clone(),
            percent(ret.value),
            ratio(sharpe.value),
            kind.to_string(),
        ];
        add_chart_row(&mut chart, ret.kind, values);
    }
    align_right(&mut chart, &[1, 2]);

    format!(
        "Benchmark Comparison\n{}\n\nReturn Advantage\n{}\n\nRisk-Adjusted Advantage\n{}",
        chart,
        advantage_table(&report.return_advantage),
        advantage_table(&report.risk_adjusted_advantage)
    )
}

fn add_chart_row(table: &mut Table, kind: BenchmarkKind, values: Vec<String>) {
    let cells: Vec<Cell> = values
        .into_iter()
        .map(|v| {
            let cell = Cell::new(v);
            if kind == BenchmarkKind::Portfolio {
                cell.fg(Color::Cyan)
            } else {
                cell
            }
        })
        .collect();
    table.add_row(cells);
}

fn advantage_table(rows: &[BenchmarkRow]) -> String {
    let mut table = new_table(vec!["Comparison", "Benchmark", "Difference"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.name),
            Cell::new(format!("{}{}", row.benchmark_value, row.unit)),
            signed_cell(row.formatted_difference(), row.difference),
        ]);
    }
    align_right(&mut table, &[1, 2]);
    table.to_string()
}

fn render_trades(table: &TradeTable) -> String {
    let mut rows = new_table(vec![
        "Ticket",
        "Type",
        "Item",
        "Size",
        "Open Price",
        "Close Price",
        "Open Time",
        "Close Time",
        "Profit/Loss",
    ]);
    for trade in &table.rows.trades {
        rows.add_row(vec![
            Cell::new(&trade.ticket),
            Cell::new(trade.trade_type.as_str().to_uppercase()),
            Cell::new(&trade.item),
            Cell::new(trade.size),
            Cell::new(trade.open_price),
            Cell::new(trade.close_price),
            Cell::new(&trade.open_time),
            Cell::new(&trade.close_time),
            signed_cell(format_profit(trade.profit), trade.profit),
        ]);
    }
    align_right(&mut rows, &[3, 4, 5, 8]);
    format!("Trade History\n{}\n{}", rows, table.caption)
}

fn render_insights(insights: &[Insight]) -> String {
    let mut table = new_table(vec!["", "Insight", "Details"]);
    for insight in insights {
        let (marker, color) = match insight.severity {
            InsightSeverity::Success => ("✔", Color::Green),
            InsightSeverity::Info => ("ℹ", Color::Blue),
            InsightSeverity::Warning => ("!", Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(marker).fg(color),
            Cell::new(&insight.title),
            Cell::new(&insight.description),
        ]);
    }
    format!("Performance Insights & Tips\n{}", table)
}
