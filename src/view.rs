//! Terminal views: the full dashboard and the plain expense list.

use std::io::Write;

use colored::Colorize;
use comfy_table::{Cell, Table};
use tracing::{debug, warn};

use crate::fmt::money;
use crate::render::{self, CategorySlice, Dashboard, DailySeries};
use crate::store::{AppState, Renderer};

const BAR_WIDTH: usize = 30;

/// A drawn chart. Must be destroyed before its slot is redrawn.
#[derive(Debug)]
pub struct ChartHandle {
    table: Table,
}

impl ChartHandle {
    pub fn destroy(self) {
        drop(self.table);
    }
}

/// Owns the chart handles for the lifetime of the view.
pub struct ViewController<W: Write> {
    out: W,
    line: Option<ChartHandle>,
    doughnut: Option<ChartHandle>,
    destroyed: usize,
}

impl<W: Write> ViewController<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            line: None,
            doughnut: None,
            destroyed: 0,
        }
    }

    pub fn live_charts(&self) -> usize {
        usize::from(self.line.is_some()) + usize::from(self.doughnut.is_some())
    }

    pub fn destroyed_charts(&self) -> usize {
        self.destroyed
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn destroy_charts(&mut self) {
        for handle in [self.line.take(), self.doughnut.take()].into_iter().flatten() {
            handle.destroy();
            self.destroyed += 1;
        }
    }

    fn draw(&mut self, dash: &Dashboard) -> std::io::Result<()> {
        self.destroy_charts();

        writeln!(self.out, "Total Expenses:     {}", money(&dash.symbol, dash.total).bold())?;
        writeln!(self.out, "Total Transactions: {}", dash.count)?;
        writeln!(self.out, "Display Currency:   {}", dash.currency)?;
        writeln!(self.out)?;

        if dash.is_empty() {
            writeln!(self.out, "No expenses recorded yet. Add your first expense!")?;
            writeln!(self.out, "No data to display in trend chart.")?;
            writeln!(self.out, "No data to display in category chart.")?;
            return Ok(());
        }

        writeln!(self.out, "Expenses\n{}", expense_table(dash))?;

        let line = ChartHandle {
            table: line_chart(&dash.daily),
        };
        writeln!(self.out, "{}\n{}", dash.daily.label, line.table)?;
        self.line = Some(line);

        let doughnut = ChartHandle {
            table: category_chart(&dash.categories, &dash.symbol),
        };
        writeln!(self.out, "By Category\n{}", doughnut.table)?;
        self.doughnut = Some(doughnut);
        Ok(())
    }
}

impl<W: Write> Renderer for ViewController<W> {
    fn render(&mut self, state: &AppState) {
        let dash = render::render(&state.expenses, &state.display_currency);
        if let Err(e) = self.draw(&dash) {
            warn!(error = %e, "failed to draw dashboard");
        }
        debug!(
            live = self.live_charts(),
            destroyed = self.destroyed_charts(),
            "dashboard drawn"
        );
    }
}

/// Only the expense list, converted into the display currency.
pub struct ListView<W: Write> {
    out: W,
}

impl<W: Write> ListView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, dash: &Dashboard) -> std::io::Result<()> {
        if dash.is_empty() {
            return writeln!(self.out, "No expenses recorded yet. Add your first expense!");
        }
        writeln!(self.out, "Expenses ({})\n{}", dash.count, expense_table(dash))
    }
}

impl<W: Write> Renderer for ListView<W> {
    fn render(&mut self, state: &AppState) {
        let dash = render::render(&state.expenses, &state.display_currency);
        if let Err(e) = self.draw(&dash) {
            warn!(error = %e, "failed to draw expense list");
        }
    }
}

fn expense_table(dash: &Dashboard) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Category", "Description", "Amount"]);
    for item in &dash.items {
        table.add_row(vec![
            Cell::new(item.id),
            Cell::new(&item.date),
            Cell::new(&item.category),
            Cell::new(&item.description),
            Cell::new(money(&dash.symbol, item.converted_amount)),
        ]);
    }
    table
}

fn bar(value: f64, max: f64) -> String {
    if !value.is_finite() || !max.is_finite() || max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let width = ((value / max) * BAR_WIDTH as f64).round().max(1.0) as usize;
    "\u{2588}".repeat(width.min(BAR_WIDTH))
}

fn line_chart(series: &DailySeries) -> Table {
    let max = series.points.iter().map(|p| p.value).fold(0.0, f64::max);
    let mut table = Table::new();
    table.set_header(vec!["Date", "Amount", ""]);
    for p in &series.points {
        table.add_row(vec![
            Cell::new(&p.label),
            Cell::new(format!("{:.2}", p.value)),
            Cell::new(bar(p.value, max)),
        ]);
    }
    table
}

fn category_chart(slices: &[CategorySlice], symbol: &str) -> Table {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    let mut table = Table::new();
    table.set_header(vec!["Category", "Amount", "%", "Color"]);
    for s in slices {
        let pct = if total > 0.0 { s.value / total * 100.0 } else { 0.0 };
        table.add_row(vec![
            Cell::new(&s.category),
            Cell::new(money(symbol, s.value)),
            Cell::new(format!("{pct:.1}")),
            Cell::new(s.color.unwrap_or("")),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseRecord;

    fn state(rows: Vec<ExpenseRecord>) -> AppState {
        AppState {
            expenses: rows,
            display_currency: "USD".to_string(),
        }
    }

    fn rec(id: i64, date: &str, amount: f64, category: &str) -> ExpenseRecord {
        ExpenseRecord {
            id,
            date: date.to_string(),
            amount,
            category: category.to_string(),
            description: Some("lunch".to_string()),
            currency: None,
        }
    }

    fn output(view: ViewController<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_empty_state_shows_placeholders() {
        colored::control::set_override(false);
        let mut view = ViewController::new(Vec::new());
        view.render(&state(vec![]));
        assert_eq!(view.live_charts(), 0);
        let text = output(view);
        assert!(text.contains("$ 0.00"));
        assert!(text.contains("No expenses recorded yet."));
        assert!(text.contains("No data to display in trend chart."));
        assert!(text.contains("No data to display in category chart."));
    }

    #[test]
    fn test_render_draws_list_and_charts() {
        colored::control::set_override(false);
        let mut view = ViewController::new(Vec::new());
        view.render(&state(vec![rec(1, "2024-01-01", 50.0, "Food & Dining")]));
        assert_eq!(view.live_charts(), 2);
        let text = output(view);
        assert!(text.contains("Total Expenses:     $ 50.00"));
        assert!(text.contains("Total Transactions: 1"));
        assert!(text.contains("Food & Dining"));
        assert!(text.contains("Daily Expenses ($)"));
        assert!(text.contains("#667eea"));
    }

    #[test]
    fn test_rerender_destroys_previous_charts_first() {
        let mut view = ViewController::new(Vec::new());
        let rows = vec![rec(1, "2024-01-01", 5.0, "A")];
        view.render(&state(rows.clone()));
        assert_eq!(view.destroyed_charts(), 0);
        view.render(&state(rows));
        assert_eq!(view.destroyed_charts(), 2);
        assert_eq!(view.live_charts(), 2);
        assert!(view.line.is_some() && view.doughnut.is_some());

        view.render(&state(vec![]));
        assert_eq!(view.destroyed_charts(), 4);
        assert_eq!(view.live_charts(), 0);
    }

    #[test]
    fn test_list_view_converts_to_display_currency() {
        let mut view = ListView::new(Vec::new());
        view.render(&AppState {
            expenses: vec![
                rec(1, "2024-01-01", 100.0, "Food"),
                rec(2, "2024-02-01", 10.0, "Travel"),
            ],
            display_currency: "EUR".to_string(),
        });
        let text = String::from_utf8(view.into_inner()).unwrap();
        assert!(text.starts_with("Expenses (2)"));
        assert!(text.contains("\u{20ac} 92.00"));
        assert!(text.contains("\u{20ac} 9.20"));
        assert!(!text.contains("$ "));
        assert!(text.find("Travel").unwrap() < text.find("Food").unwrap());
        assert!(!text.contains("By Category"));
    }

    #[test]
    fn test_list_view_empty_state() {
        let mut view = ListView::new(Vec::new());
        view.render(&state(vec![]));
        let text = String::from_utf8(view.into_inner()).unwrap();
        assert_eq!(text, "No expenses recorded yet. Add your first expense!\n");
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(10.0, 10.0).chars().count(), BAR_WIDTH);
        assert_eq!(bar(0.01, 10.0).chars().count(), 1);
        assert_eq!(bar(f64::NAN, 10.0), "");
        assert_eq!(bar(0.0, 10.0), "");
    }
}
