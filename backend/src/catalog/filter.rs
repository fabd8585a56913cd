use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::models::{Category, ListingKind, Product, Service, Vehicle};

/// What the browse pipeline needs to know about a listing.
pub trait Listing {
    const KIND: ListingKind;

    fn id(&self) -> &str;
    fn owner_id(&self) -> &str;
    fn location(&self) -> Option<&str>;
    /// `None` when the category picker does not apply to this kind.
    fn category(&self) -> Option<Category>;
    fn price(&self) -> f64;
    fn created_at(&self) -> NaiveDate;
    /// `needle` is already lowercased.
    fn matches_search(&self, needle: &str) -> bool;
}

fn title_or_description(title: &str, description: &str, needle: &str) -> bool {
    title.to_lowercase().contains(needle) || description.to_lowercase().contains(needle)
}

impl Listing for Service {
    const KIND: ListingKind = ListingKind::Service;

    fn id(&self) -> &str {
        &self.id
    }
    fn owner_id(&self) -> &str {
        &self.provider_id
    }
    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
    fn category(&self) -> Option<Category> {
        Some(self.category)
    }
    fn price(&self) -> f64 {
        self.price
    }
    fn created_at(&self) -> NaiveDate {
        self.created_at
    }
    fn matches_search(&self, needle: &str) -> bool {
        title_or_description(&self.title, &self.description, needle)
    }
}

impl Listing for Product {
    const KIND: ListingKind = ListingKind::Product;

    fn id(&self) -> &str {
        &self.id
    }
    fn owner_id(&self) -> &str {
        &self.seller_id
    }
    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
    fn category(&self) -> Option<Category> {
        Some(self.category)
    }
    fn price(&self) -> f64 {
        self.price
    }
    fn created_at(&self) -> NaiveDate {
        self.created_at
    }
    fn matches_search(&self, needle: &str) -> bool {
        title_or_description(&self.title, &self.description, needle)
    }
}

impl Listing for Vehicle {
    const KIND: ListingKind = ListingKind::Vehicle;

    fn id(&self) -> &str {
        &self.id
    }
    fn owner_id(&self) -> &str {
        &self.owner_id
    }
    fn location(&self) -> Option<&str> {
        Some(&self.location)
    }
    // Vehicles carry a type, not a category; category selections never hide them.
    fn category(&self) -> Option<Category> {
        None
    }
    fn price(&self) -> f64 {
        self.price
    }
    fn created_at(&self) -> NaiveDate {
        self.created_at
    }
    fn matches_search(&self, needle: &str) -> bool {
        format!("{} {}", self.make, self.model)
            .to_lowercase()
            .contains(needle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    PriceAsc,
    PriceDesc,
    Newest,
}

/// Optional browse predicates. Unset or empty predicates match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    pub search: Option<String>,
    pub location: Option<String>,
    pub categories: Vec<Category>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: Option<SortOrder>,
}

impl ListingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn min_price(mut self, min: f64) -> Self {
        self.min_price = Some(min);
        self
    }

    pub fn max_price(mut self, max: f64) -> Self {
        self.max_price = Some(max);
        self
    }

    pub fn sort(mut self, order: SortOrder) -> Self {
        self.sort = Some(order);
        self
    }

    /// Evaluates search, location, category, min price and max price in turn.
    pub fn matches<L: Listing>(&self, listing: &L) -> bool {
        if let Some(search) = self.search.as_deref()
            && !search.is_empty()
            && !listing.matches_search(&search.to_lowercase())
        {
            return false;
        }

        if let Some(location) = self.location.as_deref()
            && !location.is_empty()
            && listing.location() != Some(location)
        {
            return false;
        }

        if !self.categories.is_empty()
            && let Some(category) = listing.category()
            && !self.categories.contains(&category)
        {
            return false;
        }

        if let Some(min) = self.min_price
            && listing.price() < min
        {
            return false;
        }

        if let Some(max) = self.max_price
            && listing.price() > max
        {
            return false;
        }

        true
    }

    pub fn apply<'a, L: Listing>(&self, listings: &'a [L]) -> Vec<&'a L> {
        let mut matched: Vec<&L> = listings.iter().filter(|l| self.matches(*l)).collect();
        if let Some(order) = self.sort {
            sort_listings(&mut matched, order);
        }
        matched
    }
}

/// Stable sort, so ties keep dataset order.
pub fn sort_listings<L: Listing>(listings: &mut [&L], order: SortOrder) {
    match order {
        SortOrder::PriceAsc => listings.sort_by(|a, b| a.price().total_cmp(&b.price())),
        SortOrder::PriceDesc => listings.sort_by(|a, b| b.price().total_cmp(&a.price())),
        SortOrder::Newest => listings.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
    }
}
