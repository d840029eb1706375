//! Axum stand-in for TheMealDB used by tests and local runs.
//!
//! Serves the two read-only endpoints the pipeline consumes, with the real
//! API's quirks reproduced: the lookup record carries all 20 numbered
//! `strIngredient{i}` / `strMeasure{i}` keys with blank padding past the
//! populated prefix, and an unmatched category or id answers
//! `{"meals": null}` rather than an empty array or a 404.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;

/// Total ingredient slots in a lookup record, populated or not.
pub const INGREDIENT_SLOTS: usize = 20;

/// One seeded meal, served in summary form by `filter.php` and in full by
/// `lookup.php`.
#[derive(Clone, Debug)]
pub struct MealRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub area: String,
    pub instructions: String,
    pub thumb: String,
    pub ingredients: Vec<(String, String)>,
}

impl MealRecord {
    fn summary(&self) -> Value {
        json!({
            "idMeal": self.id,
            "strMeal": self.name,
            "strMealThumb": self.thumb,
        })
    }

    fn full(&self) -> Value {
        let mut record = Map::new();
        record.insert("idMeal".into(), self.id.clone().into());
        record.insert("strMeal".into(), self.name.clone().into());
        record.insert("strCategory".into(), self.category.clone().into());
        record.insert("strArea".into(), self.area.clone().into());
        record.insert("strInstructions".into(), self.instructions.clone().into());
        record.insert("strMealThumb".into(), self.thumb.clone().into());
        for i in 1..=INGREDIENT_SLOTS {
            let (name, measure) = self
                .ingredients
                .get(i - 1)
                .cloned()
                .unwrap_or_default();
            record.insert(format!("strIngredient{i}"), name.into());
            record.insert(format!("strMeasure{i}"), measure.into());
        }
        Value::Object(record)
    }
}

pub type Db = Arc<Vec<MealRecord>>;

fn record(
    id: &str,
    name: &str,
    category: &str,
    area: &str,
    instructions: &str,
    ingredients: &[(&str, &str)],
) -> MealRecord {
    MealRecord {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        area: area.to_string(),
        instructions: instructions.to_string(),
        thumb: format!("https://example.com/meals/{id}.jpg"),
        ingredients: ingredients
            .iter()
            .map(|(n, m)| (n.to_string(), m.to_string()))
            .collect(),
    }
}

/// A small catalog with varied ingredient counts, so difficulty derivation
/// is exercised across tiers, plus one non-dessert to exercise category
/// filtering.
pub fn seed_meals() -> Vec<MealRecord> {
    vec![
        record(
            "52893",
            "Apple & Blackberry Crumble",
            "Dessert",
            "British",
            "Heat oven to 190C/170C fan/gas 5.",
            &[
                ("Plain Flour", "120g"),
                ("Caster Sugar", "60g"),
                ("Butter", "60g"),
                ("Braeburn Apples", "300g"),
                ("Blackberries", "120g"),
            ],
        ),
        record(
            "52768",
            "Apple Frangipan Tart",
            "Dessert",
            "British",
            "Preheat the oven to 200C/180C Fan/Gas 6.",
            &[
                ("Digestive Biscuits", "175g"),
                ("Butter", "75g"),
                ("Bramley Apples", "200g"),
                ("Butter, Softened", "75g"),
                ("Caster Sugar", "75g"),
                ("Free-range Eggs, Beaten", "2"),
                ("Ground Almonds", "75g"),
                ("Almond Extract", "1 tsp"),
                ("Flaked Almonds", "50g"),
            ],
        ),
        record(
            "52776",
            "Chocolate Gateau",
            "Dessert",
            "French",
            "Preheat the oven to 180C/350F/Gas Mark 4.",
            &[
                ("Plain Chocolate", "250g"),
                ("Butter", "175g"),
                ("Milk", "2 tbsp"),
                ("Eggs", "5"),
                ("Granulated Sugar", "175g"),
                ("Flour", "125g"),
                ("Cocoa Powder", "2 tbsp"),
                ("Baking Powder", "1 tsp"),
                ("Vanilla Extract", "1 tsp"),
                ("Double Cream", "250ml"),
                ("Dark Chocolate", "100g"),
                ("Icing Sugar", "2 tbsp"),
            ],
        ),
        record(
            "53049",
            "Beef Wellington",
            "Beef",
            "British",
            "Sear the beef fillet on all sides.",
            &[("Beef Fillet", "750g"), ("Puff Pastry", "500g")],
        ),
    ]
}

/// Router seeded with the default catalog.
pub fn app() -> Router {
    app_with_meals(seed_meals())
}

/// Router over a caller-provided catalog.
pub fn app_with_meals(meals: Vec<MealRecord>) -> Router {
    let db: Db = Arc::new(meals);
    Router::new()
        .route("/filter.php", get(filter_meals))
        .route("/lookup.php", get(lookup_meal))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

#[derive(Deserialize)]
struct FilterParams {
    c: String,
}

#[derive(Deserialize)]
struct LookupParams {
    i: String,
}

async fn filter_meals(State(db): State<Db>, Query(params): Query<FilterParams>) -> Json<Value> {
    let summaries: Vec<Value> = db
        .iter()
        .filter(|meal| meal.category == params.c)
        .map(MealRecord::summary)
        .collect();
    if summaries.is_empty() {
        Json(json!({ "meals": null }))
    } else {
        Json(json!({ "meals": summaries }))
    }
}

async fn lookup_meal(State(db): State<Db>, Query(params): Query<LookupParams>) -> Json<Value> {
    match db.iter().find(|meal| meal.id == params.i) {
        Some(meal) => Json(json!({ "meals": [meal.full()] })),
        None => Json(json!({ "meals": null })),
    }
}
