//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod cities;
pub mod health;
pub mod points_of_interest;

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::application::services::CityInfoError;
use crate::shared::error::AppError;

impl From<CityInfoError> for AppError {
    fn from(err: CityInfoError) -> Self {
        let message = err.to_string();
        match err {
            CityInfoError::CityNotFound(_) | CityInfoError::PointOfInterestNotFound { .. } => {
                AppError::NotFound(message)
            }
            CityInfoError::InvalidRequest(_) => AppError::BadRequest(message),
            CityInfoError::ValidationFailed(errors) => AppError::Validation(errors),
            CityInfoError::StorageUnavailable => AppError::Internal(message),
        }
    }
}

/// Parse a numeric path segment.
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} ID", what)))
}

/// Turn an extracted JSON body into an optional value.
///
/// Well-formed JSON of the wrong shape is rejected with its decoding error.
/// An absent, empty or unparseable body becomes `None` and is reported by
/// the service as a missing body.
pub(crate) fn optional_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<Option<T>, AppError> {
    match body {
        Ok(Json(value)) => Ok(Some(value)),
        Err(JsonRejection::JsonDataError(e)) => Err(AppError::BadRequest(e.body_text())),
        Err(e) => {
            tracing::debug!(error = %e, "Request body missing or unreadable");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::FieldError;

    #[test]
    fn test_service_errors_map_to_app_errors() {
        assert!(matches!(
            AppError::from(CityInfoError::CityNotFound(7)),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::from(CityInfoError::PointOfInterestNotFound { city_id: 1, poi_id: 9 }),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::from(CityInfoError::InvalidRequest("bad".into())),
            AppError::BadRequest(msg) if msg == "bad"
        ));
        assert!(matches!(
            AppError::from(CityInfoError::StorageUnavailable),
            AppError::Internal(_)
        ));

        let violations = vec![FieldError::new("name", "required")];
        assert!(matches!(
            AppError::from(CityInfoError::ValidationFailed(violations.clone())),
            AppError::Validation(errors) if errors == violations
        ));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42", "city").unwrap(), 42);
        assert!(matches!(
            parse_id("abc", "city"),
            Err(AppError::BadRequest(msg)) if msg == "Invalid city ID"
        ));
    }
}
