//! Client-side data pipeline for TheMealDB's dessert catalog.
//!
//! # Overview
//! Fetches the catalog (`filter.php`) and per-meal detail records
//! (`lookup.php`), normalizes the API's inconsistent response shapes into a
//! stable model, and derives presentation-ready state: a query-filtered
//! catalog and a difficulty rating computed from the ingredient count. A
//! presentation layer observes the stores and triggers loads; it never
//! touches the transport or the decoders directly.
//!
//! # Design
//! - [`MealDbClient`] is stateless and splits every endpoint into `build_*`
//!   (produces a request) and `parse_*` (decodes a response), so the I/O
//!   boundary is explicit and the decoders stay deterministic.
//! - The lookup payload encodes its variable-length ingredient list as up
//!   to 20 numbered key pairs; the decoder recovers it with a bounded
//!   scan-and-stop loop rather than assuming a fixed schema.
//! - [`CatalogStore`] and [`DetailStore`] depend only on the [`Fetch`]
//!   capability; production wiring injects [`UreqFetch`], tests inject
//!   stubs.
//! - A failed load records the error but never clears previously loaded
//!   data.

pub mod client;
pub mod difficulty;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod http;
pub mod store;
pub mod types;

pub use client::{MealDbClient, DEFAULT_CATEGORY, MAX_INGREDIENTS};
pub use difficulty::Difficulty;
pub use error::ApiError;
pub use fetch::{Fetch, UreqFetch};
pub use filter::filter_meals;
pub use http::{HttpRequest, HttpResponse};
pub use store::{CancellationToken, CatalogState, CatalogStore, DetailState, DetailStore};
pub use types::{Ingredient, Meal, MealDetail};
