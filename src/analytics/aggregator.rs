use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::analytics::rules::classify;
use crate::models::{AggregateSummary, Category, CategoryBucket, ExpensePoint, Transaction, TransactionType};

/// Number of entries in the recency feed.
pub const RECENT_LIMIT: usize = 5;

/// Computes balance, totals and the recency feed for a list of transactions.
///
/// The result depends only on the contents of `transactions`. Transactions sharing a date keep
/// their relative input order in the feed.
pub fn summarize(transactions: &[Transaction]) -> AggregateSummary {
    let total_income = sum_of(transactions, TransactionType::Credit);
    let total_expenses = sum_of(transactions, TransactionType::Debit);

    let mut by_recency: Vec<&Transaction> = transactions.iter().collect();
    by_recency.sort_by(|left, right| right.date.cmp(&left.date));

    AggregateSummary {
        balance: total_income - total_expenses,
        total_income,
        total_expenses,
        transaction_count: transactions.len(),
        recent_transactions: by_recency.into_iter()
            .take(RECENT_LIMIT)
            .cloned()
            .collect()
    }
}

/// Groups Debit transactions into category buckets, largest total first.
///
/// Every Debit lands in exactly one bucket, so the bucket totals add up to the
/// `total_expenses` reported by [`summarize`]. Categories without a matching transaction are
/// omitted. Buckets with equal totals are ordered by rule priority.
pub fn categorize(transactions: &[Transaction]) -> Vec<CategoryBucket> {
    let mut totals = BTreeMap::<Category, Decimal>::new();

    for transaction in transactions.iter().filter(|transaction| transaction.is_debit()) {
        *totals.entry(classify(&transaction.remark)).or_insert(Decimal::ZERO) += transaction.amount;
    }

    let mut buckets: Vec<CategoryBucket> = totals.into_iter()
        .map(|(category, total)| CategoryBucket { category, total })
        .collect();

    buckets.sort_by(|left, right| right.total.cmp(&left.total));
    buckets
}

/// Debit amounts in input order, labelled for an expenses-over-time chart.
pub fn expense_series(transactions: &[Transaction]) -> Vec<ExpensePoint> {
    transactions.iter()
        .filter(|transaction| transaction.is_debit())
        .map(|transaction| ExpensePoint {
            label: transaction.date.label(),
            amount: transaction.amount
        })
        .collect()
}

fn sum_of(transactions: &[Transaction], transaction_type: TransactionType) -> Decimal {
    transactions.iter()
        .filter(|transaction| transaction.transaction_type == transaction_type)
        .map(|transaction| transaction.amount)
        .sum()
}
