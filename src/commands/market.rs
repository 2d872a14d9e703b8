use crate::{
    libs::{
        marketplace::{Condition, ListingCategory, ListingDraft, Marketplace},
        messages::Message,
        storage::Storage,
        view::View,
    },
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MarketArgs {
    #[command(subcommand)]
    command: Option<MarketCommand>,
}

#[derive(Debug, Subcommand)]
enum MarketCommand {
    /// Post a listing
    Add {
        title: String,
        /// Asking price; empty means free
        #[arg(short, long, default_value = "")]
        price: String,
        #[arg(short, long, value_enum, default_value_t = ListingCategory::Sell)]
        category: ListingCategory,
        #[arg(long, value_enum, default_value_t = Condition::Good)]
        condition: Condition,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// List everything on the market
    List,
    /// Search titles and descriptions, optionally within a category
    Search {
        #[arg(default_value = "")]
        query: String,
        #[arg(short, long, value_enum)]
        category: Option<ListingCategory>,
    },
    /// Remove a listing
    Delete { id: u64 },
}

pub fn cmd(args: MarketArgs, storage: &Storage) -> Result<()> {
    let mut market = Marketplace::open(storage);

    match args.command {
        Some(MarketCommand::Add {
            title,
            price,
            category,
            condition,
            description,
        }) => {
            let draft = ListingDraft {
                title,
                price,
                category,
                condition,
                description,
            };
            match market.add(draft) {
                Some(listing) => msg_success!(Message::ListingAdded(listing.title)),
                None => msg_warning!(Message::ListingInvalid),
            }
            Ok(())
        }
        Some(MarketCommand::Search { query, category }) => {
            let found = market.search(&query, category);
            if found.is_empty() {
                msg_info!(Message::NoListingsMatching(query));
                return Ok(());
            }
            msg_print!(Message::ListingsHeader, true);
            View::listings(found)
        }
        Some(MarketCommand::Delete { id }) => {
            if market.delete(id) {
                msg_success!(Message::ListingDeleted(id));
            } else {
                msg_info!(Message::ListingNotFound(id));
            }
            Ok(())
        }
        Some(MarketCommand::List) | None => list(&market),
    }
}

/// Renders all listings; used by the shell.
pub fn show(storage: &Storage) -> Result<()> {
    list(&Marketplace::open(storage))
}

fn list(market: &Marketplace) -> Result<()> {
    if market.list().is_empty() {
        msg_info!(Message::NoListings);
        return Ok(());
    }

    msg_print!(Message::ListingsHeader, true);
    View::listings(market.list())
}
