//! Fixed sample dataset the catalogue and the mock auth user list start from.

use chrono::NaiveDate;

use crate::db::models::{
    Category, PriceType, Product, ProductCondition, Service, User, Vehicle, VehicleType,
};

/// Locations offered by the location pickers.
pub const LOCATIONS: [&str; 5] = [
    "San Francisco, CA",
    "New York, NY",
    "Los Angeles, CA",
    "Chicago, IL",
    "Seattle, WA",
];

const PHOTO_QUERY: &str = "?auto=compress&cs=tinysrgb&w=600";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn photo(path: &str) -> String {
    format!("https://images.pexels.com/photos/{path}{PHOTO_QUERY}")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    name: &str,
    email: &str,
    avatar: &str,
    bio: &str,
    location: &str,
    skills: &[&str],
    is_verified: bool,
    joined_date: NaiveDate,
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        avatar: Some(photo(avatar)),
        bio: Some(bio.to_string()),
        location: Some(location.to_string()),
        skills: strings(skills),
        is_verified,
        joined_date,
    }
}

pub fn users() -> Vec<User> {
    vec![
        user(
            "1",
            "Alex Morgan",
            "alex@example.com",
            "220453/pexels-photo-220453.jpeg",
            "Professional web developer with 5+ years of experience",
            "San Francisco, CA",
            &["React", "Node.js", "TypeScript"],
            true,
            date(2023, 1, 15),
        ),
        user(
            "2",
            "Jessica Chen",
            "jessica@example.com",
            "774909/pexels-photo-774909.jpeg",
            "Freelance graphic designer specializing in branding",
            "New York, NY",
            &["Photoshop", "Illustrator", "Branding"],
            true,
            date(2023, 2, 20),
        ),
        user(
            "3",
            "Marcus Johnson",
            "marcus@example.com",
            "614810/pexels-photo-614810.jpeg",
            "Experienced video editor and filmmaker",
            "Los Angeles, CA",
            &["Premiere Pro", "After Effects", "Storytelling"],
            true,
            date(2023, 3, 10),
        ),
        user(
            "4",
            "Sophia Williams",
            "sophia@example.com",
            "415829/pexels-photo-415829.jpeg",
            "Professional chef with focus on international cuisine",
            "Chicago, IL",
            &["Culinary Arts", "Menu Planning", "Catering"],
            true,
            date(2023, 2, 5),
        ),
        user(
            "5",
            "David Kim",
            "david@example.com",
            "2379004/pexels-photo-2379004.jpeg",
            "Marketing specialist with experience in digital campaigns",
            "Seattle, WA",
            &["SEO", "Content Marketing", "Social Media"],
            false,
            date(2023, 4, 15),
        ),
    ]
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: "1".to_string(),
            title: "Professional Web Development".to_string(),
            description: "Custom web applications built with React and Node.js. Specializing in responsive, performant applications with modern UX.".to_string(),
            category: Category::Programming,
            price: 75.0,
            price_type: PriceType::Hourly,
            location: Some("San Francisco, CA".to_string()),
            images: vec![photo("270348/pexels-photo-270348.jpeg")],
            provider_id: "1".to_string(),
            rating: Some(4.8),
            review_count: Some(24),
            created_at: date(2023, 5, 10),
        },
        Service {
            id: "2".to_string(),
            title: "Brand Identity Design".to_string(),
            description: "Complete branding packages including logo design, color palette, typography, and brand guidelines.".to_string(),
            category: Category::Design,
            price: 1200.0,
            price_type: PriceType::Fixed,
            location: Some("New York, NY".to_string()),
            images: vec![photo("6224/hands-people-woman-working.jpg")],
            provider_id: "2".to_string(),
            rating: Some(4.9),
            review_count: Some(18),
            created_at: date(2023, 4, 22),
        },
        Service {
            id: "3".to_string(),
            title: "Video Editing & Production".to_string(),
            description: "Professional video editing for social media, YouTube, and promotional content. Quick turnaround times.".to_string(),
            category: Category::Video,
            price: 60.0,
            price_type: PriceType::Hourly,
            location: Some("Los Angeles, CA".to_string()),
            images: vec![photo("2833037/pexels-photo-2833037.jpeg")],
            provider_id: "3".to_string(),
            rating: Some(4.7),
            review_count: Some(31),
            created_at: date(2023, 5, 5),
        },
        Service {
            id: "4".to_string(),
            title: "Private Cooking Lessons".to_string(),
            description: "Learn to cook international cuisine from a professional chef. Individual or group sessions available.".to_string(),
            category: Category::Cooking,
            price: 90.0,
            price_type: PriceType::Hourly,
            location: Some("Chicago, IL".to_string()),
            images: vec![photo("3184183/pexels-photo-3184183.jpeg")],
            provider_id: "4".to_string(),
            rating: Some(4.9),
            review_count: Some(15),
            created_at: date(2023, 4, 15),
        },
        Service {
            id: "5".to_string(),
            title: "SEO & Content Marketing".to_string(),
            description: "Boost your online presence with targeted SEO and content strategies. Includes keyword research and content planning.".to_string(),
            category: Category::Marketing,
            price: 850.0,
            price_type: PriceType::Fixed,
            location: Some("Seattle, WA".to_string()),
            images: vec![photo("905163/pexels-photo-905163.jpeg")],
            provider_id: "5".to_string(),
            rating: Some(4.6),
            review_count: Some(9),
            created_at: date(2023, 5, 18),
        },
        Service {
            id: "6".to_string(),
            title: "Mobile App Development".to_string(),
            description: "Native iOS and Android app development. From concept to launch with ongoing support.".to_string(),
            category: Category::Programming,
            price: 85.0,
            price_type: PriceType::Hourly,
            location: Some("San Francisco, CA".to_string()),
            images: vec![photo("1181244/pexels-photo-1181244.jpeg")],
            provider_id: "1".to_string(),
            rating: Some(4.9),
            review_count: Some(16),
            created_at: date(2023, 4, 28),
        },
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            title: "Professional DSLR Camera".to_string(),
            description: "Canon EOS 5D Mark IV in excellent condition. Includes 2 lenses, carrying case, and extra battery.".to_string(),
            category: Category::Other,
            price: 1800.0,
            condition: Some(ProductCondition::Good),
            location: Some("Los Angeles, CA".to_string()),
            images: vec![photo("51383/photo-camera-subject-photographer-51383.jpeg")],
            seller_id: "3".to_string(),
            created_at: date(2023, 5, 12),
        },
        Product {
            id: "2".to_string(),
            title: "Professional Cookware Set".to_string(),
            description: "Complete set of premium stainless steel cookware. Barely used, in perfect condition.".to_string(),
            category: Category::Cooking,
            price: 450.0,
            condition: Some(ProductCondition::LikeNew),
            location: Some("Chicago, IL".to_string()),
            images: vec![photo("1359293/pexels-photo-1359293.jpeg")],
            seller_id: "4".to_string(),
            created_at: date(2023, 5, 8),
        },
    ]
}

pub fn vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: "1".to_string(),
            vehicle_type: VehicleType::Car,
            make: "Tesla".to_string(),
            model: "Model 3".to_string(),
            year: 2022,
            price: 75.0,
            price_type: PriceType::Daily,
            location: "San Francisco, CA".to_string(),
            images: vec![photo("12272200/pexels-photo-12272200.jpeg")],
            owner_id: "1".to_string(),
            available_from: None,
            available_to: None,
            created_at: date(2023, 4, 20),
        },
        Vehicle {
            id: "2".to_string(),
            vehicle_type: VehicleType::Bike,
            make: "Trek".to_string(),
            model: "FX 3".to_string(),
            year: 2023,
            price: 25.0,
            price_type: PriceType::Daily,
            location: "New York, NY".to_string(),
            images: vec![photo("100582/pexels-photo-100582.jpeg")],
            owner_id: "2".to_string(),
            available_from: None,
            available_to: None,
            created_at: date(2023, 5, 14),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(users().len(), 5);
        assert_eq!(services().len(), 6);
        assert_eq!(products().len(), 2);
        assert_eq!(vehicles().len(), 2);
    }

    #[test]
    fn test_seed_emails_are_unique() {
        let users = users();
        let emails: HashSet<_> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails.len(), users.len());
    }

    #[test]
    fn test_seed_dates_are_real() {
        // from_ymd_opt falls back to the epoch on a typo
        assert!(users().iter().all(|u| u.joined_date > NaiveDate::default()));
        assert!(services().iter().all(|s| s.created_at > NaiveDate::default()));
    }

    #[test]
    fn test_every_listing_location_is_pickable() {
        let listed = services()
            .into_iter()
            .filter_map(|s| s.location)
            .chain(vehicles().into_iter().map(|v| v.location));
        for location in listed {
            assert!(LOCATIONS.contains(&location.as_str()), "{location}");
        }
    }

    #[test]
    fn test_photo_urls() {
        assert_eq!(
            vehicles()[1].images[0],
            "https://images.pexels.com/photos/100582/pexels-photo-100582.jpeg?auto=compress&cs=tinysrgb&w=600"
        );
    }
}
