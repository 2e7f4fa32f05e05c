use rust_decimal::Decimal;

use crate::models::{Category, Transaction};

/// Headline numbers and the recency feed for one aggregation run.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateSummary {
    /// `total_income - total_expenses`, unclamped.
    pub balance: Decimal,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub transaction_count: usize,
    /// Most recent transactions first, at most [`crate::analytics::RECENT_LIMIT`].
    pub recent_transactions: Vec<Transaction>
}

/// Summed Debit amount for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBucket {
    pub category: Category,
    pub total: Decimal
}

/// One point of the expenses-over-time chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpensePoint {
    /// `MM-DD` label of the transaction date.
    pub label: String,
    pub amount: Decimal
}
