use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::model::api::ResponseDto;

/// Result of listing rows.
///
/// An empty table is a distinct outcome from a populated one, not merely an empty collection:
/// it is answered with 204 No Content and no body.
#[derive(Debug, PartialEq, Eq)]
pub enum ListOutcome<T> {
    Empty,
    Found(Vec<T>),
}

impl<T> ListOutcome<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ListOutcome<U> {
        match self {
            Self::Empty => ListOutcome::Empty,
            Self::Found(items) => ListOutcome::Found(items.into_iter().map(f).collect()),
        }
    }
}

impl<T> From<Vec<T>> for ListOutcome<T> {
    fn from(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Found(items)
        }
    }
}

impl<T: Serialize> IntoResponse for ListOutcome<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Empty => StatusCode::NO_CONTENT.into_response(),
            Self::Found(items) => (StatusCode::OK, Json(ResponseDto::ok(items))).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::ListOutcome;

    /// Expect an empty vector to become the Empty outcome
    #[test]
    fn empty_vec_is_empty_outcome() {
        let outcome: ListOutcome<i32> = Vec::new().into();

        assert_eq!(outcome, ListOutcome::Empty);
    }

    /// Expect Empty to answer 204 and Found to answer 200
    #[test]
    fn status_per_outcome() {
        let empty: ListOutcome<i32> = ListOutcome::Empty;
        assert_eq!(empty.into_response().status(), StatusCode::NO_CONTENT);

        let found = ListOutcome::Found(vec![1, 2]);
        assert_eq!(found.into_response().status(), StatusCode::OK);
    }
}
