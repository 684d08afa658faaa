//! In-memory placeholder store for property inserts.
//!
//! A stand-in for the relational store on the property-insert placeholder
//! path: process-local, not durable, and gone on restart. Unlike the
//! production insert path, it assigns identifiers itself, from an
//! incrementing counter. The counter and map sit behind a mutex so
//! concurrent writers are serialized and always get distinct ids.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::{NewProperty, Property};

const SEED: &str = include_str!("../data/properties.json");

struct Inner {
    properties: HashMap<i64, Property>,
    next_id: i64,
}

pub struct FixtureStore {
    inner: Mutex<Inner>,
}

impl FixtureStore {
    /// An empty store; the first insert gets id 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                properties: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// A store seeded from the bundled fixture data, continuing the id
    /// sequence after the highest seeded id.
    pub fn seeded() -> Self {
        let properties: HashMap<i64, Property> =
            serde_json::from_str(SEED).expect("bundled property fixtures are valid JSON");
        let next_id = properties.keys().max().copied().unwrap_or(0) + 1;

        Self {
            inner: Mutex::new(Inner {
                properties,
                next_id,
            }),
        }
    }

    /// Inserts a property, self-assigning the next identifier. This is the
    /// placeholder contrast to the production path, where the store assigns
    /// it.
    pub fn add_property(&self, property: NewProperty) -> Property {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;

        let stored = Property {
            id,
            owner_id: property.owner_id,
            title: property.title,
            description: property.description,
            thumbnail_photo_url: property.thumbnail_photo_url,
            cover_photo_url: property.cover_photo_url,
            cost_per_night: property.cost_per_night,
            parking_spaces: property.parking_spaces,
            number_of_bathrooms: property.number_of_bathrooms,
            number_of_bedrooms: property.number_of_bedrooms,
            country: property.country,
            street: property.street,
            city: property.city,
            province: property.province,
            post_code: property.post_code,
            average_rating: None,
        };
        inner.properties.insert(id, stored.clone());
        stored
    }

    pub fn get(&self, id: i64) -> Option<Property> {
        self.lock().properties.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().properties.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new()
    }
}
