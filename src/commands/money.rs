use crate::{
    libs::{
        messages::Message,
        money::{self, Ledger, TransactionDraft, TransactionKind, DEFAULT_CATEGORY},
        storage::Storage,
        view::View,
    },
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MoneyArgs {
    #[command(subcommand)]
    command: Option<MoneyCommand>,
}

#[derive(Debug, Subcommand)]
enum MoneyCommand {
    /// Record income or an expense
    Add {
        title: String,
        /// Positive amount, e.g. 12.50
        amount: String,
        #[arg(short, long, value_enum, default_value_t = TransactionKind::Expense)]
        kind: TransactionKind,
        #[arg(short, long, default_value = DEFAULT_CATEGORY)]
        category: String,
        /// Transaction date (YYYY-MM-DD), today by default
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List transactions with totals
    List,
    /// Totals and expenses per category
    Summary,
    /// Delete a transaction
    Delete { id: u64 },
}

pub fn cmd(args: MoneyArgs, storage: &Storage) -> Result<()> {
    let mut ledger = Ledger::open(storage);

    match args.command {
        Some(MoneyCommand::Add {
            title,
            amount,
            kind,
            category,
            date,
        }) => {
            let draft = TransactionDraft {
                title,
                amount,
                kind,
                category,
                date,
            };
            match ledger.add(draft) {
                Some(transaction) => msg_success!(Message::TransactionAdded(transaction.title)),
                None => msg_warning!(Message::TransactionInvalid),
            }
            Ok(())
        }
        Some(MoneyCommand::Summary) => {
            msg_print!(Message::MoneySummaryHeader, true);
            View::totals(&ledger.totals())?;

            let categories = money::expenses_by_category(ledger.list());
            if !categories.is_empty() {
                msg_print!(Message::ExpensesByCategoryHeader, true);
                View::category_totals(&categories)?;
            }
            Ok(())
        }
        Some(MoneyCommand::Delete { id }) => {
            if ledger.delete(id) {
                msg_success!(Message::TransactionDeleted(id));
            } else {
                msg_info!(Message::TransactionNotFound(id));
            }
            Ok(())
        }
        Some(MoneyCommand::List) | None => list(&ledger),
    }
}

/// Renders the ledger; used by the shell.
pub fn show(storage: &Storage) -> Result<()> {
    list(&Ledger::open(storage))
}

fn list(ledger: &Ledger) -> Result<()> {
    if ledger.list().is_empty() {
        msg_info!(Message::NoTransactions);
        return Ok(());
    }

    msg_print!(Message::TransactionsHeader, true);
    View::transactions(ledger.list())?;
    println!();
    View::totals(&ledger.totals())
}
