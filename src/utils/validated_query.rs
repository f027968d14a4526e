use std::error::Error;

use axum::{
    async_trait,
    extract::{FromRequest, Query, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use super::app_error::AppError;

/// Query string of an endpoint, validated before the handler runs.
pub trait QueryPayload: DeserializeOwned + Validate {
    /// `data` reported alongside a rejected query.
    fn rejection_data() -> Value {
        Value::Null
    }
}

pub struct ValidatedQuery<T>(pub T);

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field| field.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| format!("Invalid query: {}", errors))
}

/// Repeated keys resolve to their first value, like `URLSearchParams::get`.
fn first_occurrences(pairs: Vec<(String, String)>) -> Map<String, Value> {
    let mut params = Map::new();
    for (key, value) in pairs {
        params.entry(key).or_insert(Value::String(value));
    }
    params
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedQuery<T>
where
    T: QueryPayload,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map_err(|e| {
                let message = match e.source() {
                    Some(source) => format!("Invalid query: {}", source),
                    None => e.body_text(),
                };
                AppError::new(StatusCode::BAD_REQUEST, &message).with_data(T::rejection_data())
            })?;

        let data = serde_json::from_value::<T>(Value::Object(first_occurrences(pairs)))
            .map_err(|e| {
                AppError::new(StatusCode::BAD_REQUEST, &format!("Invalid query: {}", e))
                    .with_data(T::rejection_data())
            })?;

        data.validate().map_err(|e| {
            AppError::new(StatusCode::BAD_REQUEST, &first_message(&e))
                .with_data(T::rejection_data())
        })?;

        Ok(ValidatedQuery(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let params = first_occurrences(vec![
            ("query".to_string(), "a".to_string()),
            ("other".to_string(), "x".to_string()),
            ("query".to_string(), "b".to_string()),
        ]);

        assert_eq!(params.len(), 2);
        assert_eq!(params["query"], "a");
        assert_eq!(params["other"], "x");
    }
}
