//! Query and mutation logic for the film collection.
//!
//! Every operation reloads the collection from the store; mutations save the
//! whole collection back before returning. The load/save pair is not
//! atomic, so overlapping mutations can lose updates.

use filmstore_core::error::CoreError;
use filmstore_core::film::{
    positive_duration, positive_number, validate_budget, validate_duration,
    validate_required_text, ENTITY_FILM,
};
use filmstore_core::types::RecordId;

use crate::models::film::{CreateFilm, Film, ReplaceFilm, UpdateFilm};
use crate::store::FilmStore;

/// Result of a full replace.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplaceOutcome {
    /// A film with the id existed and was overwritten.
    Replaced(Film),
    /// No film had the id; a new one was appended under it.
    Created(Film),
}

impl ReplaceOutcome {
    pub fn film(&self) -> &Film {
        match self {
            Self::Replaced(film) | Self::Created(film) => film,
        }
    }

    pub fn into_film(self) -> Film {
        match self {
            Self::Replaced(film) | Self::Created(film) => film,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Provides CRUD operations over the `films` document.
pub struct FilmRepo;

impl FilmRepo {
    /// List films, optionally keeping only those at least `min_duration`
    /// minutes long. A missing, non-positive or NaN bound disables the filter.
    pub async fn list(store: &FilmStore, min_duration: Option<f64>) -> Vec<Film> {
        let films = store.load().await;

        match min_duration.filter(|min| *min > 0.0) {
            Some(min) => films
                .into_iter()
                .filter(|film| f64::from(film.duration) >= min)
                .collect(),
            None => films,
        }
    }

    /// Find the first film with the given id.
    pub async fn find_by_id(store: &FilmStore, id: RecordId) -> Option<Film> {
        store.load().await.into_iter().find(|film| film.id == id)
    }

    /// Create a film from a title/director/duration triple.
    ///
    /// The new id is the collection size plus one. After a delete this can
    /// collide with an existing id; callers relying on unique ids must not
    /// mix deletes and creates.
    pub async fn create(store: &FilmStore, input: &CreateFilm) -> Result<Film, CoreError> {
        let title = validate_required_text("title", input.title.as_deref())?;
        let director = validate_required_text("director", input.director.as_deref())?;
        let duration = validate_duration(input.duration)?;

        let mut films = store.load().await;

        if films
            .iter()
            .any(|film| film.same_triple(title, director, duration))
        {
            return Err(CoreError::Conflict("Film already exists".into()));
        }

        let film = Film {
            id: films.len() as RecordId + 1,
            title: title.to_string(),
            director: director.to_string(),
            duration,
            budget: None,
            description: None,
            image_url: None,
        };

        films.push(film.clone());
        store.save(&films).await;

        Ok(film)
    }

    /// Apply a partial update. Returns `None` if no film has the id.
    pub async fn update(store: &FilmStore, id: RecordId, input: &UpdateFilm) -> Option<Film> {
        let mut films = store.load().await;
        let film = films.iter_mut().find(|film| film.id == id)?;

        apply_update(film, input);
        let updated = film.clone();

        store.save(&films).await;
        Some(updated)
    }

    /// Replace the film with the given id, or create it under that exact id.
    ///
    /// Optional fields not present in `input` are dropped from the record.
    pub async fn replace(
        store: &FilmStore,
        id: RecordId,
        input: &ReplaceFilm,
    ) -> Result<ReplaceOutcome, CoreError> {
        if id <= 0 {
            return Err(CoreError::Validation("id must be a positive integer".into()));
        }
        let title = validate_required_text("title", input.title.as_deref())?;
        let director = validate_required_text("director", input.director.as_deref())?;
        let duration = validate_duration(input.duration)?;
        let budget = validate_budget(input.budget.clone())?;

        let replacement = Film {
            id,
            title: title.to_string(),
            director: director.to_string(),
            duration,
            budget,
            description: input.description.clone(),
            image_url: input.image_url.clone(),
        };

        let mut films = store.load().await;

        let outcome = match films.iter().position(|film| film.id == id) {
            Some(index) => {
                films[index] = replacement.clone();
                ReplaceOutcome::Replaced(replacement)
            }
            None => {
                films.push(replacement.clone());
                ReplaceOutcome::Created(replacement)
            }
        };

        store.save(&films).await;
        Ok(outcome)
    }

    /// Delete the first film with the given id. Returns whether one was removed.
    pub async fn delete(store: &FilmStore, id: RecordId) -> bool {
        let mut films = store.load().await;

        let Some(index) = films.iter().position(|film| film.id == id) else {
            return false;
        };

        films.remove(index);
        store.save(&films).await;
        true
    }

    /// Convenience for handlers that need a `NotFound` error.
    pub fn not_found(id: RecordId) -> CoreError {
        CoreError::NotFound {
            entity: ENTITY_FILM,
            id,
        }
    }
}

/// Present text fields overwrite, even when empty. `duration` and `budget`
/// overwrite only with a usable positive value.
fn apply_update(film: &mut Film, input: &UpdateFilm) {
    if let Some(title) = &input.title {
        film.title = title.clone();
    }
    if let Some(director) = &input.director {
        film.director = director.clone();
    }
    if let Some(description) = &input.description {
        film.description = description.clone();
    }
    if let Some(image_url) = &input.image_url {
        film.image_url = image_url.clone();
    }
    if let Some(duration) = input.duration.as_ref().and_then(positive_duration) {
        film.duration = duration;
    }
    if let Some(budget) = input.budget.as_ref().and_then(positive_number) {
        film.budget = Some(budget);
    }
}
