use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A guest's reservation, always read jointly with the reserved property and
/// that property's review average. The listing query only returns
/// reservations whose end date is still in the future.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reservation {
    pub id: i64,
    pub guest_id: i64,
    pub property_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i64,
    pub parking_spaces: i64,
    pub number_of_bathrooms: i64,
    pub number_of_bedrooms: i64,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    #[serde(default)]
    #[sqlx(default)]
    pub average_rating: Option<f64>,
}
