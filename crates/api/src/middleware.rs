use axum::{
    extract::State,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};

use crate::context::{Locale, LocaleContext};

#[derive(Debug, Copy, Clone)]
pub struct LocaleState {
    pub default: Locale,
}

/// Negotiate the request locale, expose it to handlers, and stamp it
/// into the `Content-Language` response header.
pub async fn locale_middleware(
    State(state): State<LocaleState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let accept_language = req
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    let locale = resolve_locale(req.uri().query(), accept_language, state.default);

    req.extensions_mut().insert(LocaleContext::new(locale));

    let mut res = next.run(req).await;
    res.headers_mut().insert(
        header::CONTENT_LANGUAGE,
        HeaderValue::from_static(locale.as_str()),
    );
    res
}

/// Precedence: `lang` query parameter, then the `Accept-Language`
/// header's first entry, then the configured default. An unsupported
/// value at one step falls through to the next; negotiation never fails.
fn resolve_locale(query: Option<&str>, accept_language: Option<&str>, default: Locale) -> Locale {
    if let Some(locale) = query.and_then(lang_param).and_then(supported) {
        return locale;
    }

    if let Some(locale) = accept_language.and_then(preferred_tag).and_then(supported) {
        return locale;
    }

    default
}

fn supported(tag: &str) -> Option<Locale> {
    tag.parse().ok()
}

fn lang_param(query: &str) -> Option<&str> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == "lang").then_some(value)
    })
}

/// Primary subtag of the first header entry ("vi-VN,vi;q=0.9" -> "vi").
/// Entries after the first carry no weight, q-values included.
fn preferred_tag(header: &str) -> Option<&str> {
    let entry = header.split(',').next()?.split(';').next()?.trim();
    let primary = entry.split('-').next()?;
    (!primary.is_empty()).then_some(primary)
}
