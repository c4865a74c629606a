// src/presentation/http/extractors.rs
use crate::{
    application::{dto::Actor, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

/// Header carrying the forwarded `<id>:<username>` credential of the caller.
pub const ACTOR_HEADER: &str = "x-actor";

/// Identity of the caller, resolved from the forwarded credential header.
/// `None` means the request runs as the system.
#[derive(Debug, Clone)]
pub struct RequestActor(pub Option<Actor>);

impl FromRequestParts<()> for RequestActor {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let credential = parts
            .headers
            .get(ACTOR_HEADER)
            .map(|value| {
                value.to_str().map_err(|_| {
                    HttpError::from_error(ApplicationError::Validation(
                        "actor header must be valid ascii".into(),
                    ))
                })
            })
            .transpose()?;

        let actor = app_state
            .services
            .actor_provider()
            .resolve(credential)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(actor))
    }
}
