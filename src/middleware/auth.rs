//! Caller resolution
//!
//! Every non-admin endpoint acts on behalf of a profile named by the
//! `profile_id` request header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, HeaderName, HeaderValue},
};
use axum_extra::TypedHeader;
use headers::Header;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::Profile;
use crate::profile::ProfileService;

static PROFILE_ID: HeaderName = HeaderName::from_static("profile_id");

/// Typed `profile_id` header carrying a numeric profile id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileIdHeader(pub i64);

impl Header for ProfileIdHeader {
    fn name() -> &'static HeaderName {
        &PROFILE_ID
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        values
            .next()
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<i64>().ok())
            .map(ProfileIdHeader)
            .ok_or_else(headers::Error::invalid)
    }

    fn encode<E>(&self, values: &mut E)
    where
        E: Extend<HeaderValue>,
    {
        values.extend(std::iter::once(HeaderValue::from(self.0)));
    }
}

/// The profile on whose behalf the request is made
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(CallerProfile(caller): CallerProfile) -> String {
///     format!("Hello, {}", caller.first_name)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CallerProfile(pub Profile);

#[async_trait]
impl<S> FromRequestParts<S> for CallerProfile
where
    Arc<ProfileService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(ProfileIdHeader(profile_id)) =
            TypedHeader::<ProfileIdHeader>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    ApiError::Unauthorized("profile_id header with a numeric id required".to_string())
                })?;

        let profiles = Arc::<ProfileService>::from_ref(state);

        let profile = profiles.find(profile_id).await?.ok_or_else(|| {
            tracing::debug!(profile_id, "Unknown profile in request");
            ApiError::Unauthorized("Unknown profile".to_string())
        })?;

        Ok(CallerProfile(profile))
    }
}
