//! # LightBnB data-access layer
//!
//! Pool-injected async accessors for the property-rental application's
//! users, reservations, and properties, backed by PostgreSQL.
//!
//! The composing application owns the pool lifecycle: build a [`Config`]
//! from the environment, call [`db::connect`], and pass the resulting pool
//! into each accessor. There is no HTTP surface, session handling, or
//! migration runner here; this crate is only the library boundary between
//! an application and its relational store.
//!
//! The one piece that is more than single-statement glue is the filtered
//! property search ([`db::properties::search_properties`]), which assembles
//! one parameterized `SELECT` from whatever subset of filters the caller
//! supplies. Assembly is handled by [`db::query::QueryAssembly`] so that
//! placeholder numbering and parameter order can never drift apart.

pub mod config;
pub mod db;
pub mod error;
pub mod fixtures;
pub mod models;

pub use config::Config;
pub use error::DbError;
