use serde::{Deserialize, Serialize};

/// A property row: every stored column plus the review average the search
/// query computes alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Property {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Stored in cents. Dollar figures must be scaled by 100 before being
    /// compared against this column.
    pub cost_per_night: i64,
    pub parking_spaces: i64,
    pub number_of_bathrooms: i64,
    pub number_of_bedrooms: i64,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    /// Mean of the property's review ratings, computed at query time and
    /// never persisted. `None` on rows read without the aggregate (the
    /// insert-returning path) and on properties with no reviews.
    #[serde(default)]
    #[sqlx(default)]
    pub average_rating: Option<f64>,
}

/// The insertable subset of [`Property`]: the store assigns `id`, and
/// `average_rating` is derived, never written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProperty {
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
}

/// Optional filters for the property search.
///
/// Every field is independently optional; `None` means "no constraint from
/// this field", not a default value. Unrecognized keys in a deserialized
/// options bag are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchOptions {
    /// Case-insensitive substring match on the city name.
    pub city: Option<String>,
    /// Exact owner match.
    pub owner_id: Option<i64>,
    /// Lower price bound in dollars; converted to cents before binding.
    pub minimum_price_per_night: Option<f64>,
    /// Upper price bound in dollars; converted to cents before binding.
    pub maximum_price_per_night: Option<f64>,
    /// Inclusive lower bound on the review rating.
    pub minimum_rating: Option<f64>,
}
