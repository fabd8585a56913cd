use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::api::server::AppState;
use crate::catalog::Catalog;
use crate::catalog::filter::{Listing, ListingFilter, SortOrder};
use crate::db::models::{Category, User};

/// Query string accepted by every browse endpoint. `q` and `category` are the
/// names the home page search form links with.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseQuery {
    #[serde(alias = "q")]
    pub search: Option<String>,
    pub location: Option<String>,
    /// Comma-separated category ids.
    #[serde(alias = "category")]
    pub categories: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: Option<SortOrder>,
}

fn parse_category(id: &str) -> Result<Category, ApiError> {
    serde_json::from_value(serde_json::Value::String(id.to_string()))
        .map_err(|_| ApiError::BadRequest(format!("unknown category '{id}'")))
}

impl TryFrom<BrowseQuery> for ListingFilter {
    type Error = ApiError;

    fn try_from(query: BrowseQuery) -> Result<Self, Self::Error> {
        let categories = match query.categories.as_deref() {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(parse_category)
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        // Price bounds are whole currency units
        Ok(ListingFilter {
            search: query.search,
            location: query.location,
            categories,
            min_price: query.min_price.map(f64::trunc),
            max_price: query.max_price.map(f64::trunc),
            sort: query.sort,
        })
    }
}

#[derive(Serialize)]
struct ListingDetail<'a, L> {
    listing: &'a L,
    owner: Option<&'a User>,
}

#[derive(Serialize)]
struct UserProfile<'a, T> {
    user: &'a User,
    listings: T,
}

pub async fn browse(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BrowseQuery>,
) -> Result<Response, ApiError> {
    let filter = ListingFilter::try_from(query)?;
    Ok(Json(state.catalog.browse(&filter)).into_response())
}

pub async fn services(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BrowseQuery>,
) -> Result<Response, ApiError> {
    let filter = ListingFilter::try_from(query)?;
    Ok(Json(filter.apply(state.catalog.services())).into_response())
}

pub async fn products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BrowseQuery>,
) -> Result<Response, ApiError> {
    let filter = ListingFilter::try_from(query)?;
    Ok(Json(filter.apply(state.catalog.products())).into_response())
}

pub async fn vehicles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BrowseQuery>,
) -> Result<Response, ApiError> {
    let filter = ListingFilter::try_from(query)?;
    Ok(Json(filter.apply(state.catalog.vehicles())).into_response())
}

fn detail<L: Listing + Serialize>(
    catalog: &Catalog,
    listing: Option<&L>,
    id: &str,
) -> Result<Response, ApiError> {
    let listing = listing.ok_or_else(|| ApiError::NotFound(format!("{:?} {id}", L::KIND)))?;
    let owner = catalog.owner_of(listing);
    Ok(Json(ListingDetail { listing, owner }).into_response())
}

pub async fn service_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    detail(&state.catalog, state.catalog.service(&id), &id)
}

pub async fn product_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    detail(&state.catalog, state.catalog.product(&id), &id)
}

pub async fn vehicle_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    detail(&state.catalog, state.catalog.vehicle(&id), &id)
}

pub async fn user_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let user = state
        .catalog
        .user(&id)
        .ok_or_else(|| ApiError::NotFound(format!("user {id}")))?;

    Ok(Json(UserProfile {
        user,
        listings: state.catalog.listings_by_owner(&id),
    })
    .into_response())
}

/// The signed-in user's own profile, listings matched on their session id.
pub async fn my_profile(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let user = state
        .auth
        .current_user()
        .await
        .ok_or(ApiError::Unauthorized)?;

    Ok(Json(UserProfile {
        user: &user,
        listings: state.catalog.listings_by_owner(&user.id),
    })
    .into_response())
}

pub async fn featured(State(state): State<Arc<AppState>>) -> Response {
    Json(state.catalog.featured()).into_response()
}

pub async fn categories(State(state): State<Arc<AppState>>) -> Response {
    Json(state.catalog.categories()).into_response()
}

pub async fn locations(State(state): State<Arc<AppState>>) -> Response {
    Json(state.catalog.locations()).into_response()
}
