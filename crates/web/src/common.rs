use axum::{
    extract::{OriginalUri, Request},
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::MethodFilter,
    Json,
};
use climate::RequestError;
use serde::Serialize;
use utility::date::DateParseError;

pub type RouteResult<O> = Result<O, RouteErrorResponse>;

/// A `MethodFilter` that matches all http methods.
pub(crate) const METHOD_FILTER_ALL: MethodFilter = MethodFilter::GET
    .or(MethodFilter::POST)
    .or(MethodFilter::PATCH)
    .or(MethodFilter::PUT)
    .or(MethodFilter::DELETE);

pub(crate) async fn route_not_found(
    OriginalUri(original_uri): OriginalUri,
    req: Request,
) -> impl IntoResponse {
    RouteErrorResponse::not_found(req.method(), original_uri.path())
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteErrorResponse {
    #[serde(skip)]
    pub status_code: StatusCode,
    pub http_method: Option<String>,
    pub requested_uri: Option<String>,
    pub message: Option<String>,
}

impl RouteErrorResponse {
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            http_method: None,
            requested_uri: None,
            message: None,
        }
    }

    pub fn not_found(method: &Method, uri: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND)
            .with_method(method)
            .with_uri(uri)
            .with_default_message()
    }

    pub fn with_method(mut self, method: &Method) -> Self {
        self.http_method = Some(method.to_string());
        self
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.requested_uri = Some(uri.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_default_message(self) -> Self {
        let message = self
            .status_code
            .canonical_reason()
            .unwrap_or("i dunno what happened here :/");
        self.with_message(message)
    }
}

impl From<RequestError> for RouteErrorResponse {
    /// Details stay in the log, the client only learns that the data
    /// source failed.
    fn from(value: RequestError) -> Self {
        tracing::error!("climate data request failed: {}", value);
        let message = match value {
            RequestError::Unavailable(_) => "The climate data source is unavailable.",
            RequestError::Other(_) => "The climate data source could not be queried.",
        };
        Self::new(StatusCode::INTERNAL_SERVER_ERROR).with_message(message)
    }
}

impl From<DateParseError> for RouteErrorResponse {
    fn from(value: DateParseError) -> Self {
        Self::new(StatusCode::BAD_REQUEST).with_message(format!(
            "Invalid date: {}. Dates must be given as YYYY-MM-DD.",
            value
        ))
    }
}

impl IntoResponse for RouteErrorResponse {
    fn into_response(self) -> axum::response::Response {
        (self.status_code, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::{error::Error, fmt};

    use utility::date::parse_date;

    use super::*;

    #[derive(Debug)]
    struct Boom;

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("disk on fire at /var/lib/hawaii.sqlite")
        }
    }

    impl Error for Boom {}

    #[test]
    fn data_source_errors_hide_details() {
        let response = RouteErrorResponse::from(RequestError::other(Boom));
        assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("hawaii.sqlite"));
        assert!(!json.contains("statusCode"));
    }

    #[test]
    fn invalid_dates_are_bad_requests() {
        let response = RouteErrorResponse::from(parse_date("2017-13-40").unwrap_err());
        assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
        assert!(response.message.unwrap().contains("2017-13-40"));
    }

    #[test]
    fn unset_fields_are_omitted() {
        let json = serde_json::to_value(
            RouteErrorResponse::new(StatusCode::NOT_FOUND).with_default_message(),
        )
        .unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Not Found" }));
    }
}
