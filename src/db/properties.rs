//! Property queries: the filtered search and the production insert path.

use sqlx::PgPool;

use crate::db::query::{Param, QueryAssembly};
use crate::error::DbError;
use crate::models::{NewProperty, Property, SearchOptions};

/// Rows returned when the caller does not supply a limit.
pub const DEFAULT_LIMIT: i64 = 10;

const SEARCH_BASE: &str = r#"SELECT properties.id, properties.owner_id, properties.title, properties.description,
       properties.thumbnail_photo_url, properties.cover_photo_url,
       properties.cost_per_night, properties.parking_spaces,
       properties.number_of_bathrooms, properties.number_of_bedrooms,
       properties.country, properties.street, properties.city,
       properties.province, properties.post_code,
       avg(property_reviews.rating)::double precision AS average_rating
FROM properties
LEFT JOIN property_reviews ON property_reviews.property_id = properties.id"#;

/// Dollars to cents, keeping fractional dollars representable before the
/// integer conversion.
fn to_cents(dollars: f64) -> i64 {
    (dollars * 100.0).round() as i64
}

/// Assembles the search statement. Filters are considered in a fixed order,
/// but whichever one is present first introduces the `WHERE`; the limit is
/// always the final parameter, bound by the `LIMIT` tail.
fn build_search(options: &SearchOptions, limit: i64) -> (String, Vec<Param>) {
    let mut query = QueryAssembly::new(SEARCH_BASE);

    if let Some(city) = &options.city {
        query.push_filter("properties.city ILIKE", Param::Text(format!("%{city}%")));
    }
    if let Some(owner_id) = options.owner_id {
        query.push_filter("properties.owner_id =", Param::Int(owner_id));
    }
    if let Some(minimum) = options.minimum_price_per_night {
        query.push_filter(
            "properties.cost_per_night >=",
            Param::Int(to_cents(minimum)),
        );
    }
    if let Some(maximum) = options.maximum_price_per_night {
        query.push_filter(
            "properties.cost_per_night <=",
            Param::Int(to_cents(maximum)),
        );
    }
    if let Some(rating) = options.minimum_rating {
        query.push_filter("property_reviews.rating >=", Param::Float(rating));
    }

    query.push("\nGROUP BY properties.id\nORDER BY properties.cost_per_night\nLIMIT ");
    query.push_bind(Param::Int(limit));

    query.into_parts()
}

/// Runs the filtered property search.
///
/// Every present filter becomes one bound predicate in the generated
/// statement; no post-filtering or re-sorting happens on the client side.
/// `limit` defaults to [`DEFAULT_LIMIT`] and is passed through
/// uninterpreted (a zero limit is the store's problem).
#[tracing::instrument(skip(pool))]
pub async fn search_properties(
    pool: &PgPool,
    options: &SearchOptions,
    limit: Option<i64>,
) -> Result<Vec<Property>, DbError> {
    let (sql, params) = build_search(options, limit.unwrap_or(DEFAULT_LIMIT));
    tracing::debug!(parameters = params.len(), "assembled property search");

    let mut query = sqlx::query_as::<_, Property>(&sql);
    for param in &params {
        query = match param {
            Param::Int(value) => query.bind(*value),
            Param::Float(value) => query.bind(*value),
            Param::Text(value) => query.bind(value.clone()),
        };
    }

    Ok(query.fetch_all(pool).await?)
}

/// Inserts a property and returns the stored row. The store assigns the
/// identifier; this crate never does.
#[tracing::instrument(skip(pool, property))]
pub async fn create_property(pool: &PgPool, property: &NewProperty) -> Result<Property, DbError> {
    let created = sqlx::query_as::<_, Property>(
        r#"
        INSERT INTO properties (owner_id, title, description, thumbnail_photo_url,
                                cover_photo_url, cost_per_night, parking_spaces,
                                number_of_bathrooms, number_of_bedrooms, country,
                                street, city, province, post_code)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        RETURNING id, owner_id, title, description, thumbnail_photo_url,
                  cover_photo_url, cost_per_night, parking_spaces,
                  number_of_bathrooms, number_of_bedrooms, country, street,
                  city, province, post_code
        "#,
    )
    .bind(property.owner_id)
    .bind(&property.title)
    .bind(&property.description)
    .bind(&property.thumbnail_photo_url)
    .bind(&property.cover_photo_url)
    .bind(property.cost_per_night)
    .bind(property.parking_spaces)
    .bind(property.number_of_bathrooms)
    .bind(property.number_of_bedrooms)
    .bind(&property.country)
    .bind(&property.street)
    .bind(&property.city)
    .bind(&property.province)
    .bind(&property.post_code)
    .fetch_one(pool)
    .await?;

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filters_binds_only_the_limit() {
        let (sql, params) = build_search(&SearchOptions::default(), 5);

        assert!(!sql.contains("WHERE"));
        assert!(!sql.contains("AND"));
        assert!(sql.contains("LEFT JOIN property_reviews"));
        assert!(sql.contains("GROUP BY properties.id"));
        assert!(sql.contains("ORDER BY properties.cost_per_night"));
        assert!(sql.ends_with("LIMIT $1"));
        assert_eq!(params, vec![Param::Int(5)]);
    }

    #[test]
    fn sole_filter_uses_where_never_and() {
        let options = SearchOptions {
            minimum_rating: Some(3.0),
            ..Default::default()
        };
        let (sql, params) = build_search(&options, 10);

        assert!(sql.contains("WHERE property_reviews.rating >= $1"));
        assert!(!sql.contains("AND"));
        assert_eq!(params.len(), 2);
        assert_eq!(params[1], Param::Int(10));
    }

    #[test]
    fn all_filters_chain_one_where_and_four_ands() {
        let options = SearchOptions {
            city: Some("Toronto".to_string()),
            owner_id: Some(42),
            minimum_price_per_night: Some(80.0),
            maximum_price_per_night: Some(250.0),
            minimum_rating: Some(4.0),
        };
        let (sql, params) = build_search(&options, 10);

        assert!(sql.contains("WHERE properties.city ILIKE $1"));
        assert!(sql.contains("AND properties.owner_id = $2"));
        assert!(sql.contains("AND properties.cost_per_night >= $3"));
        assert!(sql.contains("AND properties.cost_per_night <= $4"));
        assert!(sql.contains("AND property_reviews.rating >= $5"));
        assert!(sql.ends_with("LIMIT $6"));
        assert_eq!(sql.matches("WHERE").count(), 1);
        assert_eq!(sql.matches("AND").count(), 4);
        assert_eq!(params.len(), 6);
        assert_eq!(params[5], Param::Int(10));
    }

    #[test]
    fn later_filter_takes_the_where_when_earlier_ones_are_absent() {
        let options = SearchOptions {
            owner_id: Some(7),
            minimum_rating: Some(4.5),
            ..Default::default()
        };
        let (sql, _) = build_search(&options, 10);

        assert!(sql.contains("WHERE properties.owner_id = $1"));
        assert!(sql.contains("AND property_reviews.rating >= $2"));
    }

    #[test]
    fn prices_bind_as_cents() {
        let options = SearchOptions {
            minimum_price_per_night: Some(50.0),
            ..Default::default()
        };
        let (_, params) = build_search(&options, 10);

        assert_eq!(params[0], Param::Int(5000));
    }

    #[test]
    fn fractional_dollars_stay_representable() {
        assert_eq!(to_cents(50.5), 5050);
        assert_eq!(to_cents(99.99), 9999);
        assert_eq!(to_cents(0.0), 0);
    }

    #[test]
    fn city_binds_with_wildcards_on_both_sides() {
        let options = SearchOptions {
            city: Some("Vancouver".to_string()),
            ..Default::default()
        };
        let (sql, params) = build_search(&options, 10);

        assert!(sql.contains("properties.city ILIKE $1"));
        assert_eq!(params[0], Param::Text("%Vancouver%".to_string()));
    }

    #[test]
    fn identical_inputs_build_identical_statements() {
        let options = SearchOptions {
            city: Some("Berlin".to_string()),
            owner_id: Some(7),
            ..Default::default()
        };

        assert_eq!(build_search(&options, 20), build_search(&options, 20));
    }

    #[test]
    fn city_and_rating_scenario() {
        let options = SearchOptions {
            city: Some("Paris".to_string()),
            minimum_rating: Some(4.0),
            ..Default::default()
        };
        let (sql, params) = build_search(&options, 10);

        assert!(sql.contains("WHERE properties.city ILIKE $1"));
        assert!(sql.contains("AND property_reviews.rating >= $2"));
        assert_eq!(
            params,
            vec![
                Param::Text("%Paris%".to_string()),
                Param::Float(4.0),
                Param::Int(10),
            ]
        );
    }

    #[test]
    fn zero_limit_passes_through() {
        let (sql, params) = build_search(&SearchOptions::default(), 0);

        assert!(sql.ends_with("LIMIT $1"));
        assert_eq!(params, vec![Param::Int(0)]);
    }
}
