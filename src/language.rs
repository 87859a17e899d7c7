use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use axum_extra::extract::CookieJar;
use bleiner_content::Language;

/// Name of the cookie written by the `/lang/{tag}` switch.
pub const LANG_COOKIE: &str = "lang";

/// Language the current visitor should see the page in.
///
/// Resolution order: the `lang` cookie, then the `Accept-Language`
/// header, then German. Unknown tags at any step are skipped, never
/// guessed at.
pub struct UserLanguage(pub Language);

impl<S> FromRequestParts<S> for UserLanguage
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        if let Some(cookie) = jar.get(LANG_COOKIE)
            && let Ok(language) = Language::parse(cookie.value())
        {
            return Ok(Self(language));
        }

        let language = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .and_then(negotiate)
            .unwrap_or_default();

        Ok(Self(language))
    }
}

/// Pick the first entry of an `Accept-Language` header we have a bundle
/// for. Regions are ignored (`de-AT` counts as `de`), quality weights
/// are taken as list order, which is how browsers emit them.
pub fn negotiate(header: &str) -> Option<Language> {
    header
        .split(',')
        .filter_map(|entry| {
            let tag = entry.split(';').next()?.trim();
            let primary = tag.split('-').next()?;
            Language::parse(primary).ok()
        })
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negotiate_plain_tag() {
        assert_eq!(negotiate("en"), Some(Language::En));
    }

    #[test]
    fn test_negotiate_region_and_weights() {
        assert_eq!(
            negotiate("de-AT,de;q=0.9,en;q=0.8"),
            Some(Language::De)
        );
    }

    #[test]
    fn test_negotiate_skips_unknown_entries() {
        assert_eq!(negotiate("fr-FR,fr;q=0.9,en;q=0.5"), Some(Language::En));
    }

    #[test]
    fn test_negotiate_no_match() {
        assert_eq!(negotiate("fr,it;q=0.8"), None);
        assert_eq!(negotiate(""), None);
    }
}
