//! Budget tracker: income and expense transactions.
//!
//! Amounts are stored non-negative; whether a transaction adds to or takes
//! from the balance is decided by its [`TransactionKind`].

use super::collection::{Collection, Draft, Placement, Record};
use super::storage::{Storage, StorageKey};
use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default = "default_category")]
    pub category: String,
    pub date: NaiveDate,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Transaction {
    /// Amount with the sign implied by the kind.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl Record for Transaction {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Form input; `amount` is the raw text typed by the user.
#[derive(Debug, Clone, Default)]
pub struct TransactionDraft {
    pub title: String,
    pub amount: String,
    pub kind: TransactionKind,
    pub category: String,
    pub date: Option<NaiveDate>,
}

impl Draft for TransactionDraft {
    type Record = Transaction;

    fn into_record(self, id: u64) -> Option<Transaction> {
        if self.title.trim().is_empty() {
            return None;
        }
        let amount: f64 = self.amount.trim().parse().ok()?;
        if !amount.is_finite() || amount <= 0.0 {
            return None;
        }
        let category = if self.category.trim().is_empty() {
            default_category()
        } else {
            self.category
        };

        Some(Transaction {
            id,
            title: self.title,
            amount,
            kind: self.kind,
            category,
            date: self.date.unwrap_or_else(|| Local::now().date_naive()),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

impl Totals {
    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}

pub fn totals(transactions: &[Transaction]) -> Totals {
    transactions.iter().fold(Totals::default(), |mut acc, tx| {
        match tx.kind {
            TransactionKind::Income => acc.income += tx.amount,
            TransactionKind::Expense => acc.expense += tx.amount,
        }
        acc
    })
}

pub fn balance(transactions: &[Transaction]) -> f64 {
    totals(transactions).balance()
}

/// Expense sums per category, alphabetically.
pub fn expenses_by_category(transactions: &[Transaction]) -> BTreeMap<String, f64> {
    let mut by_category = BTreeMap::new();
    for tx in transactions.iter().filter(|tx| tx.kind == TransactionKind::Expense) {
        *by_category.entry(tx.category.clone()).or_insert(0.0) += tx.amount;
    }
    by_category
}

/// The persisted ledger. New transactions go first.
pub struct Ledger {
    transactions: Collection<Transaction>,
}

impl Ledger {
    pub fn open(storage: &Storage) -> Self {
        Self {
            transactions: Collection::open(storage, StorageKey::TRANSACTIONS, Placement::Front),
        }
    }

    pub fn list(&self) -> &[Transaction] {
        self.transactions.items()
    }

    pub fn add(&mut self, draft: TransactionDraft) -> Option<Transaction> {
        self.transactions.add(draft)
    }

    pub fn delete(&mut self, id: u64) -> bool {
        self.transactions.delete(id)
    }

    pub fn totals(&self) -> Totals {
        totals(self.list())
    }

    pub fn balance(&self) -> f64 {
        self.totals().balance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(amount: f64, kind: TransactionKind, category: &str) -> Transaction {
        Transaction {
            id: 1,
            title: "t".into(),
            amount,
            kind,
            category: category.into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_balance_is_income_minus_expense() {
        let ledger = vec![tx(100.0, TransactionKind::Income, "Job"), tx(40.0, TransactionKind::Expense, "Food")];
        assert_eq!(balance(&ledger), 60.0);
        assert_eq!(totals(&ledger), Totals { income: 100.0, expense: 40.0 });
        assert_eq!(ledger[1].signed_amount(), -40.0);
    }

    #[test]
    fn test_expenses_by_category() {
        let ledger = vec![
            tx(10.0, TransactionKind::Expense, "Food"),
            tx(5.5, TransactionKind::Expense, "Food"),
            tx(20.0, TransactionKind::Expense, "Books"),
            tx(99.0, TransactionKind::Income, "Food"),
        ];
        let by_category = expenses_by_category(&ledger);
        assert_eq!(by_category["Food"], 15.5);
        assert_eq!(by_category["Books"], 20.0);
        assert_eq!(by_category.len(), 2);
    }

    #[test]
    fn test_draft_validation() {
        let draft = |title: &str, amount: &str| TransactionDraft {
            title: title.into(),
            amount: amount.into(),
            ..TransactionDraft::default()
        };

        assert!(draft("Coffee", "").into_record(1).is_none());
        assert!(draft("", "4.50").into_record(1).is_none());
        assert!(draft("Coffee", "abc").into_record(1).is_none());
        assert!(draft("Coffee", "-3").into_record(1).is_none());
        assert!(draft("Coffee", "0").into_record(1).is_none());

        let coffee = draft("Coffee", " 4.50 ").into_record(1).unwrap();
        assert_eq!(coffee.amount, 4.5);
        assert_eq!(coffee.category, DEFAULT_CATEGORY);
        assert_eq!(coffee.kind, TransactionKind::Expense);
    }
}
