use axum::{
    extract::Path,
    http::header::REFERER,
    http::HeaderMap,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use bleiner_content::Language;

use crate::language::LANG_COOKIE;

/// GET /lang/{tag} - switch the site language.
///
/// Unknown tags leave the cookie untouched, the visitor keeps the
/// language they already had. Always redirects back to the referring
/// page.
pub async fn action(
    Path(tag): Path<String>,
    headers: HeaderMap,
    jar: CookieJar,
) -> impl IntoResponse {
    let jar = match Language::parse(&tag) {
        Ok(language) => jar.add(
            Cookie::build((LANG_COOKIE, language.locale()))
                .path("/")
                .permanent(),
        ),
        Err(err) => {
            tracing::debug!("{err}");
            jar
        }
    };

    let back = headers
        .get(REFERER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("/")
        .to_owned();

    (jar, Redirect::to(&back))
}
