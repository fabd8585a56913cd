use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    pub is_verified: bool,
    pub joined_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Service,
    Product,
    Vehicle,
}

/// Marketplace categories, in the order the category picker lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Programming,
    Design,
    Writing,
    Marketing,
    Video,
    Audio,
    Cooking,
    Teaching,
    Salon,
    Cleaning,
    Appliance,
    Classes,
    Music,
    Photography,
    Painting,
    Plumbing,
    Electrician,
    Auto,
    Hotels,
    Comedy,
    Entertainment,
    Vehicle,
    Property,
    Other,
}

impl Category {
    pub fn all() -> Vec<Category> {
        vec![
            Category::Programming,
            Category::Design,
            Category::Writing,
            Category::Marketing,
            Category::Video,
            Category::Audio,
            Category::Cooking,
            Category::Teaching,
            Category::Salon,
            Category::Cleaning,
            Category::Appliance,
            Category::Classes,
            Category::Music,
            Category::Photography,
            Category::Painting,
            Category::Plumbing,
            Category::Electrician,
            Category::Auto,
            Category::Hotels,
            Category::Comedy,
            Category::Entertainment,
            Category::Vehicle,
            Category::Property,
            Category::Other,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Programming => "Programming & Development",
            Category::Design => "Design & Creative",
            Category::Writing => "Writing & Translation",
            Category::Marketing => "Marketing & Sales",
            Category::Video => "Video & Animation",
            Category::Audio => "Audio & Music",
            Category::Cooking => "Cooking & Culinary",
            Category::Teaching => "Teaching & Tutoring",
            Category::Salon => "Salon & Beauty Services",
            Category::Cleaning => "Cleaning & Pest Control",
            Category::Appliance => "Appliance Repair & Services",
            Category::Classes => "Online & Offline Classes",
            Category::Music => "Music Services",
            Category::Photography => "Photography",
            Category::Painting => "Painting & Art",
            Category::Plumbing => "Plumbing Services",
            Category::Electrician => "Electrician Services",
            Category::Auto => "Auto Services",
            Category::Hotels => "Hotels & Accommodation",
            Category::Comedy => "Comedy Shows",
            Category::Entertainment => "Entertainment Services",
            Category::Vehicle => "Vehicle Rental",
            Category::Property => "Property Rental",
            Category::Other => "Other Services",
        }
    }
}

/// Row of the category picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub id: Category,
    pub label: &'static str,
}

impl From<Category> for CategoryOption {
    fn from(id: Category) -> Self {
        Self {
            id,
            label: id.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    Hourly,
    Fixed,
    Daily,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub price: f64,
    pub price_type: PriceType,
    #[serde(default)]
    pub location: Option<String>,
    pub images: Vec<String>,
    pub provider_id: String,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub review_count: Option<u32>,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCondition {
    New,
    LikeNew,
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub price: f64,
    #[serde(default)]
    pub condition: Option<ProductCondition>,
    #[serde(default)]
    pub location: Option<String>,
    pub images: Vec<String>,
    pub seller_id: String,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Bike,
    Scooter,
    Taxi,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub price: f64,
    /// Only `Hourly` or `Daily` for rentals.
    pub price_type: PriceType,
    pub location: String,
    pub images: Vec<String>,
    pub owner_id: String,
    #[serde(default)]
    pub available_from: Option<NaiveDate>,
    #[serde(default)]
    pub available_to: Option<NaiveDate>,
    pub created_at: NaiveDate,
}

// Review, Message and Booking are part of the wire model only; no catalogue or
// session operation produces them yet.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub rating: u8,
    pub comment: String,
    pub author_id: String,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub vehicle_id: Option<String>,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub created_at: NaiveDateTime,
    pub read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub vehicle_id: Option<String>,
    pub user_id: String,
    pub provider_id: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub status: BookingStatus,
    pub total_price: f64,
    pub created_at: NaiveDate,
}
