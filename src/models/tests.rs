use super::{Category, Transaction, TransactionError, TransactionType, MAX_AMOUNT_UNITS};

use std::str::FromStr;

use anyhow::Result;
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;

use crate::types::TransactionDate;

fn create_transaction(id: &str, date: &str, transaction_type: TransactionType, amount: &str, remark: &str) -> Result<Transaction> {
    Ok(Transaction {
        id: id.to_string(),
        date: TransactionDate::from_str(date)?,
        transaction_type,
        amount: Decimal::from_str(amount)?,
        remark: remark.to_string()
    })
}

fn read_rows(csv_content: &str) -> Vec<Result<Transaction, csv::Error>> {
    ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(csv_content.as_bytes())
        .deserialize::<Transaction>()
        .collect()
}

#[test]
fn test_valid_transaction_passes_validation() -> Result<()> {
    let transaction = create_transaction("1", "2024-05-01", TransactionType::Debit, "300.00", "restaurant dinner")?;

    transaction.validate()?;

    assert!(transaction.is_debit());

    Ok(())
}

#[test]
fn test_zero_amount_transaction_passes_validation() -> Result<()> {
    let transaction = create_transaction("1", "2024-05-01", TransactionType::Credit, "0", "")?;

    assert!(transaction.validate().is_ok());

    Ok(())
}

#[test]
fn test_negative_amount_fails_validation() -> Result<()> {
    let transaction = create_transaction("7", "2024-05-01", TransactionType::Debit, "-15.50", "refund")?;
    let result = transaction.validate();

    assert!(matches!(result, Err(TransactionError::NegativeAmount { ref transaction_id, .. }) if transaction_id == "7"));

    Ok(())
}

#[test]
fn test_amount_above_maximum_fails_validation() -> Result<()> {
    let at_limit = create_transaction("1", "2024-05-01", TransactionType::Credit, &MAX_AMOUNT_UNITS.to_string(), "bonus")?;
    let above_limit = create_transaction("2", "2024-05-01", TransactionType::Debit, "1000000000000.01", "typo")?;
    let decimal_max = create_transaction("3", "2024-05-01", TransactionType::Debit, "79228162514264337593543950335", "typo")?;

    assert!(at_limit.validate().is_ok());
    assert!(matches!(above_limit.validate(), Err(TransactionError::AmountTooLarge { ref transaction_id, .. }) if transaction_id == "2"));
    assert!(matches!(decimal_max.validate(), Err(TransactionError::AmountTooLarge { .. })));

    Ok(())
}

#[test]
fn test_blank_identifier_fails_validation() -> Result<()> {
    let transaction = create_transaction("  ", "2024-05-01", TransactionType::Credit, "10", "salary")?;

    assert!(matches!(transaction.validate(), Err(TransactionError::MissingId { .. })));

    Ok(())
}

#[test]
fn test_transaction_deserializes_from_csv_row() -> Result<()> {
    let rows = read_rows("id,date,type,amount,remark\ntx-1, 2024-05-02 ,Debit, 150.25 ,uber ride");

    assert_eq!(rows.len(), 1);

    let transaction = rows.into_iter().next().expect("one row")?;

    assert_eq!(transaction, create_transaction("tx-1", "2024-05-02", TransactionType::Debit, "150.25", "uber ride")?);

    Ok(())
}

#[test]
fn test_transaction_type_is_accepted_in_common_casings() {
    let rows = read_rows("id,date,type,amount,remark\n1,2024-05-01,credit,1,a\n2,2024-05-01,DEBIT,1,b\n3,2024-05-01,Credit,1,c");
    let types: Vec<TransactionType> = rows.into_iter()
        .filter_map(|row| row.ok())
        .map(|transaction| transaction.transaction_type)
        .collect();

    assert_eq!(types, vec![TransactionType::Credit, TransactionType::Debit, TransactionType::Credit]);
}

#[test]
fn test_malformed_csv_rows_fail_to_deserialize() {
    let rows = read_rows("id,date,type,amount,remark\n1,2024-05-01,refund,1,a\n2,not-a-date,Debit,1,b\n3,2024-05-01,Debit,abc,c\n4,2024-05-01,Debit,5,");

    assert!(rows[0].is_err());
    assert!(rows[1].is_err());
    assert!(rows[2].is_err());
    assert!(rows[3].is_ok());
}

#[test]
fn test_category_names_match_dashboard_labels() {
    let categories = [
        Category::FoodAndDining,
        Category::Transportation,
        Category::Shopping,
        Category::Entertainment,
        Category::BillsAndUtilities,
        Category::Healthcare,
        Category::Others,
    ];
    let names: Vec<&str> = categories.iter().map(|category| category.name()).collect();

    assert_eq!(names, vec![
        "Food & Dining",
        "Transportation",
        "Shopping",
        "Entertainment",
        "Bills & Utilities",
        "Healthcare",
        "Others",
    ]);
    assert_eq!(Category::BillsAndUtilities.to_string(), "Bills & Utilities");
}
