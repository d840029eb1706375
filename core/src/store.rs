//! Observable state stores orchestrating fetch → decode → derive.
//!
//! # Design
//! Each store owns its state and exposes it two ways: [`CatalogStore::state`]
//! returns the current snapshot, and `subscribe` registers a listener that
//! runs synchronously with the new state. Every external mutation (`load`,
//! `set_query`) publishes exactly one notification, delivered before the
//! call returns, so an observer is never behind the store.
//!
//! A failed load sets the error field but leaves previously loaded data in
//! place — a transient error must not blank an already populated screen.
//!
//! Store methods take `&mut self`, so two loads on one store cannot overlap
//! within a single thread; callers sharing a store across threads serialize
//! through a lock, which makes result application last-completed-wins.
//! Cancellation does not abort the underlying request: a
//! [`CancellationToken`] only tells the store to discard the result before
//! any state is mutated.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::client::{MealDbClient, DEFAULT_CATEGORY};
use crate::difficulty::Difficulty;
use crate::error::ApiError;
use crate::fetch::Fetch;
use crate::filter::filter_meals;
use crate::types::{Meal, MealDetail};

type Listener<S> = Box<dyn FnMut(&S)>;

/// Signals that the owner of an in-flight load is no longer interested in
/// its result. Cancelling never aborts the network call; the store checks
/// the token after the round-trip and before mutating any state.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Snapshot of the catalog pipeline's state.
///
/// `meals` stays `None` until the first successful load; `filtered` is
/// always an order-preserving subsequence of `meals` under the current
/// `query`.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub meals: Option<Vec<Meal>>,
    pub filtered: Vec<Meal>,
    pub query: String,
    pub error: Option<ApiError>,
}

/// Store driving the catalog half of the pipeline.
pub struct CatalogStore<F> {
    client: MealDbClient,
    fetcher: F,
    category: String,
    state: CatalogState,
    listeners: Vec<Listener<CatalogState>>,
}

impl<F: Fetch> CatalogStore<F> {
    pub fn new(client: MealDbClient, fetcher: F) -> Self {
        Self::with_category(client, fetcher, DEFAULT_CATEGORY)
    }

    pub fn with_category(client: MealDbClient, fetcher: F, category: &str) -> Self {
        Self {
            client,
            fetcher,
            category: category.to_string(),
            state: CatalogState::default(),
            listeners: Vec::new(),
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Register a listener invoked synchronously after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&CatalogState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Fetch and decode the catalog, replacing current data on success.
    pub fn load(&mut self) {
        let outcome = self.run();
        self.apply(outcome);
    }

    /// Like [`load`](Self::load), but discards the result without mutating
    /// or notifying if `token` was cancelled while the request was in
    /// flight.
    pub fn load_with_token(&mut self, token: &CancellationToken) {
        let outcome = self.run();
        if token.is_cancelled() {
            debug!(category = %self.category, "catalog load cancelled, discarding result");
            return;
        }
        self.apply(outcome);
    }

    /// Update the search query and recompute the filtered list. Purely
    /// local; never touches the network.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
        self.refilter();
        self.publish();
    }

    fn run(&self) -> Result<Vec<Meal>, ApiError> {
        let request = self.client.build_catalog(&self.category);
        let response = self.fetcher.fetch(&request)?;
        self.client.parse_catalog(response)
    }

    fn apply(&mut self, outcome: Result<Vec<Meal>, ApiError>) {
        match outcome {
            Ok(meals) => {
                debug!(count = meals.len(), "catalog loaded");
                self.state.meals = Some(meals);
                self.state.error = None;
                self.refilter();
            }
            Err(error) => {
                warn!(%error, "catalog load failed");
                self.state.error = Some(error);
            }
        }
        self.publish();
    }

    fn refilter(&mut self) {
        let meals = self.state.meals.as_deref().unwrap_or_default();
        self.state.filtered = filter_meals(&self.state.query, meals);
    }

    fn publish(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }
}

/// Snapshot of the detail pipeline's state.
///
/// `difficulty` is derived from the loaded detail's ingredient count and
/// recomputed on every successful load; `details_fetched` flips once the
/// first load succeeds.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub detail: Option<MealDetail>,
    pub difficulty: Difficulty,
    pub details_fetched: bool,
    pub error: Option<ApiError>,
}

/// Store driving the detail half of the pipeline, one per open detail view.
pub struct DetailStore<F> {
    client: MealDbClient,
    fetcher: F,
    state: DetailState,
    listeners: Vec<Listener<DetailState>>,
}

impl<F: Fetch> DetailStore<F> {
    pub fn new(client: MealDbClient, fetcher: F) -> Self {
        Self {
            client,
            fetcher,
            state: DetailState::default(),
            listeners: Vec::new(),
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Register a listener invoked synchronously after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&DetailState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Fetch and decode the full record for `meal_id`, replacing current
    /// data and rederiving the difficulty on success.
    pub fn load(&mut self, meal_id: &str) {
        let outcome = self.run(meal_id);
        self.apply(outcome);
    }

    /// Like [`load`](Self::load), but discards the result without mutating
    /// or notifying if `token` was cancelled while the request was in
    /// flight.
    pub fn load_with_token(&mut self, meal_id: &str, token: &CancellationToken) {
        let outcome = self.run(meal_id);
        if token.is_cancelled() {
            debug!(meal_id, "detail load cancelled, discarding result");
            return;
        }
        self.apply(outcome);
    }

    fn run(&self, meal_id: &str) -> Result<MealDetail, ApiError> {
        let request = self.client.build_lookup(meal_id);
        let response = self.fetcher.fetch(&request)?;
        self.client.parse_detail(response)
    }

    fn apply(&mut self, outcome: Result<MealDetail, ApiError>) {
        match outcome {
            Ok(detail) => {
                debug!(meal_id = %detail.id, ingredients = detail.ingredients.len(), "detail loaded");
                self.state.difficulty =
                    Difficulty::from_ingredient_count(detail.ingredients.len());
                self.state.detail = Some(detail);
                self.state.details_fetched = true;
                self.state.error = None;
            }
            Err(error) => {
                warn!(%error, "detail load failed");
                self.state.error = Some(error);
            }
        }
        self.publish();
    }

    fn publish(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }
}
