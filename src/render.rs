//! Derived views over the loaded collection. Everything here is pure.

use std::collections::BTreeMap;

use crate::currency;
use crate::models::ExpenseRecord;

pub const PALETTE: &[&str] = &[
    "#667eea", "#764ba2", "#a36eeb", "#c7a3ff", "#3a66ff", "#ff7979", "#ffaf79", "#a0ff79",
    "#79fff1",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub id: i64,
    pub date: String,
    pub category: String,
    pub description: String,
    pub converted_amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailySeries {
    pub label: String,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub category: String,
    pub value: f64,
    /// `None` once the palette runs out.
    pub color: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub currency: String,
    pub symbol: String,
    pub total: f64,
    pub count: usize,
    pub items: Vec<ListItem>,
    pub daily: DailySeries,
    pub categories: Vec<CategorySlice>,
}

impl Dashboard {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

pub fn render(expenses: &[ExpenseRecord], display_currency: &str) -> Dashboard {
    let symbol = currency::symbol(display_currency).unwrap_or(display_currency);

    let mut items: Vec<ListItem> = expenses
        .iter()
        .map(|e| ListItem {
            id: e.id,
            date: e.date.clone(),
            category: e.category.clone(),
            description: e.description.clone().unwrap_or_default(),
            converted_amount: currency::convert(e.amount, e.currency(), display_currency),
        })
        .collect();

    let total: f64 = items.iter().map(|i| i.converted_amount).sum();

    // Newest first; stable so same-day entries keep server order.
    items.sort_by(|a, b| b.date.cmp(&a.date));

    let mut daily: BTreeMap<&str, f64> = BTreeMap::new();
    for item in &items {
        *daily.entry(item.date.as_str()).or_insert(0.0) += item.converted_amount;
    }
    let points = daily
        .into_iter()
        .map(|(date, value)| ChartPoint {
            label: date.to_string(),
            value,
        })
        .collect();

    Dashboard {
        currency: display_currency.to_string(),
        symbol: symbol.to_string(),
        total,
        count: expenses.len(),
        daily: DailySeries {
            label: format!("Daily Expenses ({symbol})"),
            points,
        },
        categories: category_slices(&items),
        items,
    }
}

/// Category sums in the order categories first appear in the sorted list.
fn category_slices(items: &[ListItem]) -> Vec<CategorySlice> {
    let mut slices: Vec<CategorySlice> = Vec::new();
    for item in items {
        match slices.iter_mut().find(|s| s.category == item.category) {
            Some(slice) => slice.value += item.converted_amount,
            None => slices.push(CategorySlice {
                category: item.category.clone(),
                value: item.converted_amount,
                color: PALETTE.get(slices.len()).copied(),
            }),
        }
    }
    slices
}
