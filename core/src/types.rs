//! Domain model for TheMealDB catalog and lookup endpoints.
//!
//! # Design
//! `Meal` is decoded directly with serde because the catalog schema is
//! fixed: all three keys are required and a missing one is a decode
//! failure, not a null field. `MealDetail` is *not* a serde target — the
//! lookup payload is a loosely typed bag of string keys and is assembled by
//! hand in [`crate::client`], so the struct here carries no serde
//! attributes. These types mirror the mock-server's schema but are defined
//! independently; the integration tests catch any drift between the two
//! crates.

use serde::Deserialize;
use url::Url;

/// Envelope for the catalog endpoint (`filter.php`).
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogResponse {
    pub meals: Vec<Meal>,
}

/// A summary record from the catalog endpoint.
///
/// Identity is `id`, unique within a single catalog response. All fields
/// are schema-required; in particular `image_url` must parse as a URL.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub image_url: Url,
}

/// One ingredient/measure pair from a lookup record.
///
/// Both fields are non-empty by construction: blank pairs are excluded by
/// the scan in [`crate::client`], never represented as empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// The full record for one meal from the lookup endpoint.
///
/// Scalar fields tolerate absence in the payload and default to empty
/// strings; an absent or unparseable thumb URL becomes `None`. The
/// ingredient order matches the numeric key suffixes in the source payload,
/// ascending from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealDetail {
    pub id: String,
    pub name: String,
    pub region: String,
    pub instructions: String,
    pub image_url: Option<Url>,
    pub ingredients: Vec<Ingredient>,
}
