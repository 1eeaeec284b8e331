use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{header, request::Parts},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

pub const DEFAULT_LANGUAGE: &str = "en";
pub const LANGUAGE_COOKIE: &str = "lang";

#[derive(Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

/// The language to render in: `?lang=`, then the `lang` cookie, then `Accept-Language`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locale(pub String);

fn accept_language(value: &str) -> Option<&str> {
    let tag = value.split(',').next()?.split(';').next()?.trim();
    match tag {
        "" | "*" => None,
        tag => Some(tag),
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Ok(Query(LangQuery { lang: Some(lang) })) = Query::try_from_uri(&parts.uri) {
            if !lang.is_empty() {
                return Ok(Locale(lang));
            }
        }

        let jar = CookieJar::from_headers(&parts.headers);
        if let Some(cookie) = jar.get(LANGUAGE_COOKIE).filter(|c| !c.value().is_empty()) {
            return Ok(Locale(cookie.value().to_string()));
        }

        let preferred = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .and_then(accept_language);

        Ok(Locale(preferred.unwrap_or(DEFAULT_LANGUAGE).to_string()))
    }
}
