use std::io::Write;

use csv::WriterBuilder;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{AggregateSummary, CategoryBucket, ExpensePoint, TransactionType};

const DISPLAY_PLACES: usize = 2;

/// Writes the home dashboard as blank-line separated CSV sections: headline totals,
/// category breakdown, latest transactions and the expenses-over-time series.
pub fn write_dashboard<W: Write>(output: &mut W, summary: &AggregateSummary, buckets: &[CategoryBucket], series: &[ExpensePoint]) -> csv::Result<()> {
    write_section(output, &["balance", "total_income", "total_expenses", "transactions"], [
        vec![
            money(summary.balance),
            money(summary.total_income),
            money(summary.total_expenses),
            summary.transaction_count.to_string()
        ]
    ])?;
    writeln!(output)?;

    write_section(output, &["category", "total"], buckets.iter().map(|bucket| {
        vec![bucket.category.to_string(), money(bucket.total)]
    }))?;
    writeln!(output)?;

    write_section(output, &["id", "date", "type", "amount", "remark"], summary.recent_transactions.iter().map(|transaction| {
        vec![
            transaction.id.clone(),
            transaction.date.to_string(),
            type_label(transaction.transaction_type).to_string(),
            money(transaction.amount),
            transaction.remark.clone()
        ]
    }))?;
    writeln!(output)?;

    write_section(output, &["date", "expense"], series.iter().map(|point| {
        vec![point.label.clone(), money(point.amount)]
    }))?;

    output.flush()?;

    Ok(())
}

fn write_section<W, R>(output: &mut W, header: &[&str], rows: R) -> csv::Result<()>
where
    W: Write,
    R: IntoIterator<Item = Vec<String>>,
{
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(header)?;

    for row in rows {
        writer.write_record(&row)?;
    }

    writer.flush()?;

    Ok(())
}

fn money(amount: Decimal) -> String {
    format!("{:.prec$}", amount.round_dp_with_strategy(DISPLAY_PLACES as u32, RoundingStrategy::MidpointAwayFromZero), prec = DISPLAY_PLACES)
}

fn type_label(transaction_type: TransactionType) -> &'static str {
    match transaction_type {
        TransactionType::Credit => "Credit",
        TransactionType::Debit => "Debit"
    }
}
