//! Stateless request builder and response decoder for TheMealDB API.
//!
//! # Design
//! `MealDbClient` holds only a `base_url` and carries no mutable state
//! between calls. Each endpoint is split into a `build_*` method that
//! produces an [`HttpRequest`] and a `parse_*` method that consumes an
//! [`HttpResponse`], keeping the decoders deterministic and free of I/O
//! dependencies.
//!
//! The catalog endpoint has a fixed schema and decodes with serde. The
//! lookup endpoint does not: it encodes a variable-length ingredient list
//! as up to [`MAX_INGREDIENTS`] numbered key pairs (`strIngredient1` /
//! `strMeasure1`, `strIngredient2` / ...), most of which may be absent,
//! null, or blank. That payload is decoded as a generic string-keyed record
//! and the ingredient list is recovered with a bounded scan (see
//! [`scan_ingredients`]).

use serde_json::Value;
use url::Url;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CatalogResponse, Ingredient, Meal, MealDetail};

/// The catalog category the original application browses.
pub const DEFAULT_CATEGORY: &str = "Dessert";

/// Highest ingredient index the lookup schema carries.
pub const MAX_INGREDIENTS: usize = 20;

/// Stateless client for TheMealDB read-only API.
///
/// Builds `HttpRequest` values and decodes `HttpResponse` values without
/// touching the network. A [`Fetch`](crate::fetch::Fetch) implementation
/// executes the round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    base_url: String,
}

impl MealDbClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Request for the list of meals in `category`.
    pub fn build_catalog(&self, category: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}/filter.php?c={category}", self.base_url),
        }
    }

    /// Request for the full record of one meal.
    pub fn build_lookup(&self, meal_id: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}/lookup.php?i={meal_id}", self.base_url),
        }
    }

    /// Decode a catalog response into summary records, preserving the
    /// source array's order.
    pub fn parse_catalog(&self, response: HttpResponse) -> Result<Vec<Meal>, ApiError> {
        let body = check_response(response)?;
        let catalog: CatalogResponse = serde_json::from_slice(&body)
            .map_err(|e| ApiError::Decoding(e.to_string()))?;
        Ok(catalog.meals)
    }

    /// Decode a lookup response into one [`MealDetail`].
    ///
    /// The payload's `meals` value must be a non-empty array whose first
    /// element is a string-keyed object. Scalar fields tolerate absence and
    /// default to empty strings; the ingredient list is recovered by
    /// [`scan_ingredients`].
    pub fn parse_detail(&self, response: HttpResponse) -> Result<MealDetail, ApiError> {
        let body = check_response(response)?;
        let envelope: Value = serde_json::from_slice(&body)
            .map_err(|e| ApiError::Decoding(e.to_string()))?;

        let record = envelope
            .get("meals")
            .and_then(Value::as_array)
            .and_then(|meals| meals.first())
            .and_then(Value::as_object)
            .ok_or_else(|| {
                ApiError::Decoding("lookup payload has no meal record".to_string())
            })?;

        let thumb = string_field(record, "strMealThumb");

        Ok(MealDetail {
            id: string_field(record, "idMeal"),
            name: string_field(record, "strMeal"),
            region: string_field(record, "strArea"),
            instructions: string_field(record, "strInstructions"),
            image_url: Url::parse(&thumb).ok(),
            ingredients: scan_ingredients(record),
        })
    }
}

/// Enforce the transport-level contract before any decoding: non-2xx is an
/// `Http` error, a 2xx with an empty body is `NoData`.
fn check_response(response: HttpResponse) -> Result<Vec<u8>, ApiError> {
    if !(200..300).contains(&response.status) {
        return Err(ApiError::Http {
            status: Some(response.status),
            message: format!(
                "unexpected status {}: {}",
                response.status,
                String::from_utf8_lossy(&response.body)
            ),
        });
    }
    if response.body.is_empty() {
        return Err(ApiError::NoData);
    }
    Ok(response.body)
}

/// Read a scalar field from a lookup record, treating anything that is not
/// a string (absent, null, numeric) as empty.
fn string_field(record: &serde_json::Map<String, Value>, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Recover the ingredient list from a lookup record's numbered key pairs.
///
/// Scans `strIngredient{i}` / `strMeasure{i}` for `i` ascending from 1 and
/// stops at the first index where either key is absent, not a string, or
/// blank after trimming. Gaps are not skipped: a blank pair at index `i`
/// ends the scan even if index `i + 1` holds a valid pair. The upstream API
/// places populated entries contiguously from index 1, so anything past the
/// first hole is padding.
fn scan_ingredients(record: &serde_json::Map<String, Value>) -> Vec<Ingredient> {
    let mut ingredients = Vec::new();
    for i in 1..=MAX_INGREDIENTS {
        let name = record
            .get(&format!("strIngredient{i}"))
            .and_then(Value::as_str)
            .map(str::trim);
        let measure = record
            .get(&format!("strMeasure{i}"))
            .and_then(Value::as_str)
            .map(str::trim);

        match (name, measure) {
            (Some(name), Some(measure)) if !name.is_empty() && !measure.is_empty() => {
                ingredients.push(Ingredient {
                    name: name.to_string(),
                    measure: measure.to_string(),
                });
            }
            _ => break,
        }
    }
    ingredients
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> MealDbClient {
        MealDbClient::new("http://localhost:3000")
    }

    #[test]
    fn build_catalog_produces_correct_request() {
        let req = client().build_catalog("Dessert");
        assert_eq!(req.url, "http://localhost:3000/filter.php?c=Dessert");
    }

    #[test]
    fn build_lookup_produces_correct_request() {
        let req = client().build_lookup("52893");
        assert_eq!(req.url, "http://localhost:3000/lookup.php?i=52893");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let c = MealDbClient::new("http://localhost:3000/");
        let req = c.build_catalog("Dessert");
        assert_eq!(req.url, "http://localhost:3000/filter.php?c=Dessert");
    }

    #[test]
    fn parse_catalog_preserves_order_and_fields() {
        let body = r#"{"meals":[
            {"idMeal":"52893","strMeal":"Apple & Blackberry Crumble","strMealThumb":"https://example.com/crumble.jpg"},
            {"idMeal":"52768","strMeal":"Apple Frangipan Tart","strMealThumb":"https://example.com/tart.jpg"}
        ]}"#;
        let meals = client().parse_catalog(HttpResponse::ok(body)).unwrap();
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].id, "52893");
        assert_eq!(meals[0].name, "Apple & Blackberry Crumble");
        assert_eq!(meals[0].image_url.as_str(), "https://example.com/crumble.jpg");
        assert_eq!(meals[1].id, "52768");
    }

    #[test]
    fn parse_catalog_missing_meals_key_is_decoding_error() {
        let err = client().parse_catalog(HttpResponse::ok("{}")).unwrap_err();
        assert!(matches!(err, ApiError::Decoding(_)));
    }

    #[test]
    fn parse_catalog_missing_required_field_is_decoding_error() {
        let body = r#"{"meals":[{"idMeal":"1","strMeal":"No thumb"}]}"#;
        let err = client().parse_catalog(HttpResponse::ok(body)).unwrap_err();
        assert!(matches!(err, ApiError::Decoding(_)));
    }

    #[test]
    fn parse_catalog_invalid_image_url_is_decoding_error() {
        let body = r#"{"meals":[{"idMeal":"1","strMeal":"Bad thumb","strMealThumb":"not a url"}]}"#;
        let err = client().parse_catalog(HttpResponse::ok(body)).unwrap_err();
        assert!(matches!(err, ApiError::Decoding(_)));
    }

    #[test]
    fn parse_catalog_non_2xx_is_http_error() {
        let response = HttpResponse {
            status: 500,
            body: b"internal error".to_vec(),
        };
        let err = client().parse_catalog(response).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: Some(500), .. }));
    }

    #[test]
    fn parse_catalog_empty_body_is_no_data() {
        let response = HttpResponse {
            status: 200,
            body: Vec::new(),
        };
        let err = client().parse_catalog(response).unwrap_err();
        assert_eq!(err, ApiError::NoData);
    }

    #[test]
    fn parse_detail_full_record() {
        let body = r#"{"meals":[{
            "idMeal":"52893",
            "strMeal":"Apple & Blackberry Crumble",
            "strArea":"British",
            "strInstructions":"Heat oven to 190C.",
            "strMealThumb":"https://example.com/crumble.jpg",
            "strIngredient1":"Plain Flour","strMeasure1":"120g",
            "strIngredient2":"Caster Sugar","strMeasure2":"60g",
            "strIngredient3":"","strMeasure3":"",
            "strIngredient4":null,"strMeasure4":null
        }]}"#;
        let detail = client().parse_detail(HttpResponse::ok(body)).unwrap();
        assert_eq!(detail.id, "52893");
        assert_eq!(detail.name, "Apple & Blackberry Crumble");
        assert_eq!(detail.region, "British");
        assert_eq!(detail.instructions, "Heat oven to 190C.");
        assert_eq!(
            detail.image_url.as_ref().map(Url::as_str),
            Some("https://example.com/crumble.jpg")
        );
        assert_eq!(detail.ingredients.len(), 2);
        assert_eq!(detail.ingredients[0].name, "Plain Flour");
        assert_eq!(detail.ingredients[0].measure, "120g");
        assert_eq!(detail.ingredients[1].name, "Caster Sugar");
    }

    #[test]
    fn ingredient_scan_stops_at_first_blank_pair() {
        // Index 3 holds a valid pair but the blank name at index 2 must end
        // the scan before it is reached.
        let body = r#"{"meals":[{
            "idMeal":"1","strMeal":"Gap test",
            "strIngredient1":"Flour","strMeasure1":"200g",
            "strIngredient2":"","strMeasure2":"1",
            "strIngredient3":"Sugar","strMeasure3":"100g"
        }]}"#;
        let detail = client().parse_detail(HttpResponse::ok(body)).unwrap();
        assert_eq!(detail.ingredients.len(), 1);
        assert_eq!(detail.ingredients[0].name, "Flour");
        assert_eq!(detail.ingredients[0].measure, "200g");
    }

    #[test]
    fn ingredient_scan_stops_at_missing_key() {
        let body = r#"{"meals":[{
            "idMeal":"1","strMeal":"Missing key",
            "strIngredient1":"Flour","strMeasure1":"200g",
            "strIngredient3":"Sugar","strMeasure3":"100g"
        }]}"#;
        let detail = client().parse_detail(HttpResponse::ok(body)).unwrap();
        assert_eq!(detail.ingredients.len(), 1);
    }

    #[test]
    fn ingredient_scan_stops_at_non_string_value() {
        let body = r#"{"meals":[{
            "idMeal":"1","strMeal":"Numeric measure",
            "strIngredient1":"Flour","strMeasure1":200,
            "strIngredient2":"Sugar","strMeasure2":"100g"
        }]}"#;
        let detail = client().parse_detail(HttpResponse::ok(body)).unwrap();
        assert!(detail.ingredients.is_empty());
    }

    #[test]
    fn ingredient_scan_treats_whitespace_as_blank() {
        let body = r#"{"meals":[{
            "idMeal":"1","strMeal":"Whitespace",
            "strIngredient1":" Flour ","strMeasure1":" 200g ",
            "strIngredient2":"   ","strMeasure2":"1 tsp"
        }]}"#;
        let detail = client().parse_detail(HttpResponse::ok(body)).unwrap();
        assert_eq!(detail.ingredients.len(), 1);
        assert_eq!(detail.ingredients[0].name, "Flour");
        assert_eq!(detail.ingredients[0].measure, "200g");
    }

    #[test]
    fn parse_detail_missing_scalars_default_to_empty() {
        let body = r#"{"meals":[{"strIngredient1":"Egg","strMeasure1":"1"}]}"#;
        let detail = client().parse_detail(HttpResponse::ok(body)).unwrap();
        assert_eq!(detail.id, "");
        assert_eq!(detail.name, "");
        assert_eq!(detail.region, "");
        assert_eq!(detail.instructions, "");
        assert!(detail.image_url.is_none());
        assert_eq!(detail.ingredients.len(), 1);
    }

    #[test]
    fn parse_detail_empty_meals_array_is_decoding_error() {
        let err = client()
            .parse_detail(HttpResponse::ok(r#"{"meals":[]}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::Decoding(_)));
    }

    #[test]
    fn parse_detail_null_meals_is_decoding_error() {
        let err = client()
            .parse_detail(HttpResponse::ok(r#"{"meals":null}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::Decoding(_)));
    }

    #[test]
    fn parse_detail_non_object_record_is_decoding_error() {
        let err = client()
            .parse_detail(HttpResponse::ok(r#"{"meals":["52893"]}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::Decoding(_)));
    }

    #[test]
    fn parse_detail_bad_json_is_decoding_error() {
        let err = client()
            .parse_detail(HttpResponse::ok("not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Decoding(_)));
    }

    #[test]
    fn ingredient_scan_caps_at_max_index() {
        let mut record = serde_json::Map::new();
        record.insert("idMeal".into(), "1".into());
        record.insert("strMeal".into(), "Everything".into());
        for i in 1..=30 {
            record.insert(format!("strIngredient{i}"), format!("Ingredient {i}").into());
            record.insert(format!("strMeasure{i}"), "1 tsp".into());
        }
        let body = serde_json::json!({ "meals": [record] }).to_string();
        let detail = client().parse_detail(HttpResponse::ok(body)).unwrap();
        assert_eq!(detail.ingredients.len(), MAX_INGREDIENTS);
    }
}
