//! Case-insensitive substring filter over the catalog.

use crate::types::Meal;

/// Return the meals whose name contains `query`, case-folded, preserving
/// the input order. An empty query returns the whole catalog unchanged.
/// Never mutates the input; no ranking or scoring.
#[must_use]
pub fn filter_meals(query: &str, meals: &[Meal]) -> Vec<Meal> {
    if query.is_empty() {
        return meals.to_vec();
    }
    let needle = query.to_lowercase();
    meals
        .iter()
        .filter(|meal| meal.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
