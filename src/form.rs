//! Movie Form State
//!
//! The form draft and its submit-time validation. Fields hold raw input
//! text; nothing is checked until the user submits.

use chrono::NaiveDate;

use crate::models::{Movie, MoviePayload};

/// Fields addressable by [`MovieDraft::set_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    MovieName,
    WatchDate,
    Rating,
    Review,
}

/// Draft of one record, all fields exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieDraft {
    pub movie_name: String,
    pub watch_date: String,
    pub rating: String,
    pub review: String,
}

/// Rejected submit. The display string is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Movie name is required")]
    MissingName,
    #[error("Watch date must be a valid YYYY-MM-DD date")]
    BadDate,
    #[error("Watch date cannot be in the future")]
    FutureDate,
    #[error("Rating must be a whole number from 0 to 10")]
    BadRating,
}

impl MovieDraft {
    /// Replace one field with new input text, leaving the others untouched.
    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::MovieName => self.movie_name = value,
            FormField::WatchDate => self.watch_date = value,
            FormField::Rating => self.rating = value,
            FormField::Review => self.review = value,
        }
    }

    /// Copy a listed record back into the form for editing.
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            movie_name: movie.movie_name.clone(),
            watch_date: movie.watch_date.to_string(),
            rating: movie.rating.to_string(),
            review: movie.review.clone().unwrap_or_default(),
        }
    }

    /// Reset every field to empty, ready for a new entry.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check the draft against `today` and build the request payload.
    ///
    /// Runs before any network call. The draft itself is never mutated, so
    /// on failure the user keeps what they typed and can correct it.
    pub fn validate(&self, today: NaiveDate) -> Result<MoviePayload, FormError> {
        if self.movie_name.is_empty() {
            return Err(FormError::MissingName);
        }
        let watch_date = NaiveDate::parse_from_str(&self.watch_date, "%Y-%m-%d")
            .map_err(|_| FormError::BadDate)?;
        if watch_date > today {
            return Err(FormError::FutureDate);
        }
        let rating = self.rating.parse::<u8>().map_err(|_| FormError::BadRating)?;
        if rating > 10 {
            return Err(FormError::BadRating);
        }
        Ok(MoviePayload {
            movie_name: self.movie_name.clone(),
            watch_date,
            rating,
            review: self.review.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filled_draft() -> MovieDraft {
        MovieDraft {
            movie_name: "Dune".to_string(),
            watch_date: "2024-01-01".to_string(),
            rating: "8".to_string(),
            review: "Good".to_string(),
        }
    }

    #[test]
    fn set_field_replaces_only_the_named_field() {
        let mut draft = filled_draft();
        draft.set_field(FormField::Rating, "9".to_string());

        assert_eq!(draft.rating, "9");
        assert_eq!(draft.movie_name, "Dune");
        assert_eq!(draft.watch_date, "2024-01-01");
        assert_eq!(draft.review, "Good");
    }

    #[test]
    fn valid_draft_builds_the_full_payload() {
        let payload = filled_draft().validate(date(2024, 6, 1)).expect("valid");

        assert_eq!(payload.movie_name, "Dune");
        assert_eq!(payload.watch_date, date(2024, 1, 1));
        assert_eq!(payload.rating, 8);
        assert_eq!(payload.review, "Good");
    }

    #[test]
    fn future_watch_date_is_rejected() {
        let mut draft = filled_draft();
        draft.watch_date = "2099-01-01".to_string();

        assert_eq!(draft.validate(date(2024, 6, 1)), Err(FormError::FutureDate));
    }

    #[test]
    fn watch_date_today_is_accepted() {
        let mut draft = filled_draft();
        draft.watch_date = "2024-06-01".to_string();

        assert!(draft.validate(date(2024, 6, 1)).is_ok());
    }

    #[test]
    fn unparseable_date_is_rejected() {
        let mut draft = filled_draft();
        draft.watch_date = "01/06/2024".to_string();

        assert_eq!(draft.validate(date(2024, 6, 1)), Err(FormError::BadDate));
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut draft = filled_draft();
        draft.movie_name = String::new();

        assert_eq!(draft.validate(date(2024, 6, 1)), Err(FormError::MissingName));
    }

    #[test]
    fn rating_above_ten_is_rejected() {
        let mut draft = filled_draft();
        draft.rating = "11".to_string();

        assert_eq!(draft.validate(date(2024, 6, 1)), Err(FormError::BadRating));
    }

    #[test]
    fn non_numeric_rating_is_rejected() {
        let mut draft = filled_draft();
        draft.rating = "great".to_string();

        assert_eq!(draft.validate(date(2024, 6, 1)), Err(FormError::BadRating));
    }

    #[test]
    fn empty_review_is_allowed() {
        let mut draft = filled_draft();
        draft.review = String::new();

        let payload = draft.validate(date(2024, 6, 1)).expect("valid");
        assert_eq!(payload.review, "");
    }

    #[test]
    fn rejection_leaves_the_draft_untouched() {
        let mut draft = filled_draft();
        draft.watch_date = "2099-01-01".to_string();
        let before = draft.clone();

        let _ = draft.validate(date(2024, 6, 1));

        assert_eq!(draft, before);
    }

    #[test]
    fn editing_mirrors_the_record_fields() {
        let movie = Movie {
            movie_id: 1,
            movie_name: "Dune".to_string(),
            watch_date: date(2024, 1, 1),
            rating: 8,
            review: Some("Good".to_string()),
        };
        let draft = MovieDraft::from_movie(&movie);

        assert_eq!(draft.movie_name, "Dune");
        assert_eq!(draft.watch_date, "2024-01-01");
        assert_eq!(draft.rating, "8");
        assert_eq!(draft.review, "Good");
    }

    #[test]
    fn editing_a_record_without_review_leaves_it_empty() {
        let movie = Movie {
            movie_id: 2,
            movie_name: "Arrival".to_string(),
            watch_date: date(2023, 11, 5),
            rating: 9,
            review: None,
        };

        assert_eq!(MovieDraft::from_movie(&movie).review, "");
    }

    #[test]
    fn clear_resets_every_field() {
        let mut draft = filled_draft();
        draft.clear();

        assert_eq!(draft, MovieDraft::default());
    }
}
