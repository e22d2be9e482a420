//! Session-token extraction.
//!
//! A request is authenticated by `Authorization: Bearer <token>` or by a
//! `session` cookie naming an unexpired session row.

use crate::error::AppError;
use crate::models::User;
use crate::server::AppState;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use cookie::Cookie;

pub const SESSION_COOKIE: &str = "session";

/// Value of the named cookie across every `Cookie` header.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

/// Session token from the bearer header, else from the session cookie.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string);

    bearer.or_else(|| cookie_value(headers, SESSION_COOKIE))
}

/// The signed-in user, if the request carries a valid session.
pub async fn optional_user(state: &AppState, headers: &HeaderMap) -> Result<Option<User>, AppError> {
    match session_token(headers) {
        Some(token) => Ok(state.db.user_for_session(&token).await?),
        None => Ok(None),
    }
}

/// Any signed-in user. Rejects with 401 otherwise.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        optional_user(state, &parts.headers)
            .await?
            .map(CurrentUser)
            .ok_or(AppError::Unauthorized)
    }
}

/// A signed-in admin. Regular users get the same 401 as anonymous callers.
pub struct AdminUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        if user.is_admin() {
            Ok(AdminUser(user))
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(header::HeaderName, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(name.clone(), HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_bearer_token() {
        let h = headers(&[(header::AUTHORIZATION, "Bearer abc123")]);
        assert_eq!(session_token(&h).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_session_cookie() {
        let h = headers(&[(header::COOKIE, "locale=ko; session=tok")]);
        assert_eq!(session_token(&h).as_deref(), Some("tok"));
        assert_eq!(cookie_value(&h, "locale").as_deref(), Some("ko"));
    }

    #[test]
    fn test_bearer_wins_over_cookie() {
        let h = headers(&[
            (header::COOKIE, "session=from-cookie"),
            (header::AUTHORIZATION, "Bearer from-header"),
        ]);
        assert_eq!(session_token(&h).as_deref(), Some("from-header"));
    }

    #[test]
    fn test_cookie_across_multiple_headers() {
        let h = headers(&[(header::COOKIE, "a=1"), (header::COOKIE, "session=xyz")]);
        assert_eq!(session_token(&h).as_deref(), Some("xyz"));
    }

    #[test]
    fn test_no_credentials() {
        let h = headers(&[
            (header::AUTHORIZATION, "Basic dXNlcjpwYXNz"),
            (header::COOKIE, "locale=es"),
        ]);
        assert_eq!(session_token(&h), None);

        let empty = headers(&[(header::AUTHORIZATION, "Bearer   ")]);
        assert_eq!(session_token(&empty), None);
    }
}
