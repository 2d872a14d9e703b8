//! Campus marketplace listings: things to buy, sell or rent.

use super::collection::{Collection, Draft, Placement, Record};
use super::storage::{Storage, StorageKey};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ListingCategory {
    Buy,
    #[default]
    Sell,
    Rent,
}

impl fmt::Display for ListingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ListingCategory::Buy => "buy",
            ListingCategory::Sell => "sell",
            ListingCategory::Rent => "rent",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    New,
    LikeNew,
    #[default]
    Good,
    Fair,
    Poor,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Condition::New => "new",
            Condition::LikeNew => "like new",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: ListingCategory,
    #[serde(default)]
    pub condition: Condition,
    #[serde(default)]
    pub description: String,
}

impl Record for Listing {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Form input; `price` is the raw text typed by the user, blank meaning free.
#[derive(Debug, Clone, Default)]
pub struct ListingDraft {
    pub title: String,
    pub price: String,
    pub category: ListingCategory,
    pub condition: Condition,
    pub description: String,
}

impl Draft for ListingDraft {
    type Record = Listing;

    fn into_record(self, id: u64) -> Option<Listing> {
        if self.title.trim().is_empty() {
            return None;
        }
        let price = match self.price.trim() {
            "" => 0.0,
            text => text.parse::<f64>().ok()?,
        };
        if !price.is_finite() || price < 0.0 {
            return None;
        }

        Some(Listing {
            id,
            title: self.title,
            price,
            category: self.category,
            condition: self.condition,
            description: self.description,
        })
    }
}

/// Case-insensitive match on title or description, optionally limited to one category.
pub fn search<'a>(listings: &'a [Listing], query: &str, category: Option<ListingCategory>) -> Vec<&'a Listing> {
    let needle = query.trim().to_lowercase();
    listings
        .iter()
        .filter(|listing| category.map_or(true, |c| listing.category == c))
        .filter(|listing| {
            needle.is_empty() || listing.title.to_lowercase().contains(&needle) || listing.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// The persisted listing board. New listings are appended.
pub struct Marketplace {
    listings: Collection<Listing>,
}

impl Marketplace {
    pub fn open(storage: &Storage) -> Self {
        Self {
            listings: Collection::open(storage, StorageKey::LISTINGS, Placement::Back),
        }
    }

    pub fn list(&self) -> &[Listing] {
        self.listings.items()
    }

    pub fn add(&mut self, draft: ListingDraft) -> Option<Listing> {
        self.listings.add(draft)
    }

    pub fn delete(&mut self, id: u64) -> bool {
        self.listings.delete(id)
    }

    pub fn search(&self, query: &str, category: Option<ListingCategory>) -> Vec<&Listing> {
        search(self.list(), query, category)
    }
}
