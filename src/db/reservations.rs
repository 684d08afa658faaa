use sqlx::PgPool;

use crate::db::properties::DEFAULT_LIMIT;
use crate::error::DbError;
use crate::models::Reservation;

const ACTIVE_FOR_GUEST: &str = r#"
SELECT reservations.id, reservations.guest_id, reservations.property_id,
       reservations.start_date, reservations.end_date,
       properties.owner_id, properties.title, properties.description,
       properties.thumbnail_photo_url, properties.cover_photo_url,
       properties.cost_per_night, properties.parking_spaces,
       properties.number_of_bathrooms, properties.number_of_bedrooms,
       properties.country, properties.street, properties.city,
       properties.province, properties.post_code,
       avg(property_reviews.rating)::double precision AS average_rating
FROM reservations
JOIN properties ON properties.id = reservations.property_id
LEFT JOIN property_reviews ON property_reviews.property_id = properties.id
WHERE reservations.guest_id = $1
  AND reservations.end_date > now()::date
GROUP BY reservations.id, properties.id
ORDER BY reservations.start_date
LIMIT $2
"#;

/// Lists a guest's active reservations (end date still in the future), each
/// joined with its property and the property's review average, ordered by
/// start date. A guest with no active reservations gets an empty list, not
/// an error.
#[tracing::instrument(skip(pool))]
pub async fn list_reservations(
    pool: &PgPool,
    guest_id: i64,
    limit: Option<i64>,
) -> Result<Vec<Reservation>, DbError> {
    let reservations = sqlx::query_as::<_, Reservation>(ACTIVE_FOR_GUEST)
        .bind(guest_id)
        .bind(limit.unwrap_or(DEFAULT_LIMIT))
        .fetch_all(pool)
        .await?;

    Ok(reservations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_is_scoped_to_future_end_dates() {
        assert!(ACTIVE_FOR_GUEST.contains("reservations.end_date > now()::date"));
        assert!(ACTIVE_FOR_GUEST.contains("WHERE reservations.guest_id = $1"));
        assert!(ACTIVE_FOR_GUEST.contains("ORDER BY reservations.start_date"));
        assert!(ACTIVE_FOR_GUEST.contains("LIMIT $2"));
    }
}
