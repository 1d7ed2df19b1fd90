use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use roster_core::{classify, Failure, TracingSink, UserId};

/// A [`Failure`] on its way out of a handler. Converting it into a
/// response is where classification happens.
#[derive(Debug)]
pub struct ApiFailure(pub Failure);

impl From<Failure> for ApiFailure {
    fn from(failure: Failure) -> Self {
        Self(failure)
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        failure_response(&self.0)
    }
}

/// Classify a failure and render the uniform error body.
pub fn failure_response(failure: &Failure) -> Response {
    let error = classify(failure, &TracingSink);
    let status = StatusCode::from_u16(error.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(error)).into_response()
}

/// Path extractor for user ids.
///
/// A path value that is not a well-formed id reads as a miss, exactly as
/// if the route had not matched. Running this in the parts phase keeps it
/// ahead of body extraction, so a bad id wins over a bad body.
pub struct PathUserId(pub UserId);

#[axum::async_trait]
impl<S> FromRequestParts<S> for PathUserId
where
    S: Send + Sync,
{
    type Rejection = ApiFailure;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiFailure(Failure::not_found("")))?;

        raw.parse()
            .map(Self)
            .map_err(|_| ApiFailure(Failure::not_found("")))
    }
}

/// `Json` that reports body problems through the classifier: the
/// rejection's status rides along as the HTTP hint, so only a plain 400
/// (malformed JSON) surfaces as-is.
pub struct ApiJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiFailure;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiFailure(Failure::http(
                rejection.status().as_u16(),
                rejection.body_text(),
            ))),
        }
    }
}
