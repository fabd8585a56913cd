pub mod filter;

use serde::Serialize;

use crate::catalog::filter::{Listing, ListingFilter};
use crate::db::models::{Category, CategoryOption, Product, Service, User, Vehicle};
use crate::db::seed;

/// How many listings of each kind the home page shows, in dataset order.
pub const FEATURED_SERVICES: usize = 4;
pub const FEATURED_PRODUCTS: usize = 2;
pub const FEATURED_VEHICLES: usize = 2;

/// Read-only marketplace dataset.
#[derive(Debug, Clone)]
pub struct Catalog {
    users: Vec<User>,
    services: Vec<Service>,
    products: Vec<Product>,
    vehicles: Vec<Vehicle>,
}

/// One view over the three listing collections.
#[derive(Debug, Serialize)]
pub struct BrowseResults<'a> {
    pub services: Vec<&'a Service>,
    pub products: Vec<&'a Product>,
    pub vehicles: Vec<&'a Vehicle>,
}

impl BrowseResults<'_> {
    pub fn total(&self) -> usize {
        self.services.len() + self.products.len() + self.vehicles.len()
    }
}

impl Catalog {
    pub fn new(
        users: Vec<User>,
        services: Vec<Service>,
        products: Vec<Product>,
        vehicles: Vec<Vehicle>,
    ) -> Self {
        Self {
            users,
            services,
            products,
            vehicles,
        }
    }

    pub fn seeded() -> Self {
        Self::new(
            seed::users(),
            seed::services(),
            seed::products(),
            seed::vehicles(),
        )
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// First user whose id matches the listing's owner, if any.
    pub fn owner_of<L: Listing>(&self, listing: &L) -> Option<&User> {
        self.user(listing.owner_id())
    }

    pub fn browse(&self, filter: &ListingFilter) -> BrowseResults<'_> {
        BrowseResults {
            services: filter.apply(&self.services),
            products: filter.apply(&self.products),
            vehicles: filter.apply(&self.vehicles),
        }
    }

    pub fn listings_by_owner(&self, user_id: &str) -> BrowseResults<'_> {
        BrowseResults {
            services: owned_by(&self.services, user_id),
            products: owned_by(&self.products, user_id),
            vehicles: owned_by(&self.vehicles, user_id),
        }
    }

    /// Leading listings of each kind, as shown on the home page.
    pub fn featured(&self) -> BrowseResults<'_> {
        BrowseResults {
            services: self.services.iter().take(FEATURED_SERVICES).collect(),
            products: self.products.iter().take(FEATURED_PRODUCTS).collect(),
            vehicles: self.vehicles.iter().take(FEATURED_VEHICLES).collect(),
        }
    }

    pub fn categories(&self) -> Vec<CategoryOption> {
        Category::all().into_iter().map(CategoryOption::from).collect()
    }

    pub fn locations(&self) -> &'static [&'static str] {
        &seed::LOCATIONS
    }
}

fn owned_by<'a, L: Listing>(listings: &'a [L], user_id: &str) -> Vec<&'a L> {
    listings.iter().filter(|l| l.owner_id() == user_id).collect()
}
