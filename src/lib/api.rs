//! HTTP client for the portfolio API. All feature clients go through these
//! helpers, which attach the stored access token as a bearer credential,
//! recover from expired sessions with a single silent refresh-and-retry, and
//! surface non-validation failures as transient toasts. Callers always receive
//! the failed result for their own handling; the toast is a side effect only.

use super::{config::AppConfig, errors::AppError};
use crate::features::auth::session;
use serde::de::DeserializeOwned;
use std::future::Future;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
#[cfg(target_arch = "wasm32")]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Normalized list container. The API returns some collections as a bare JSON
/// array and others wrapped in a paginated envelope; decoding through
/// [`ListEnvelope`] here means feature clients never branch on response shape.
#[derive(Clone, Debug)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total: usize,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ListEnvelope<T> {
    Paginated {
        count: usize,
        #[serde(default)]
        #[allow(dead_code)]
        next: Option<String>,
        #[serde(default)]
        #[allow(dead_code)]
        previous: Option<String>,
        results: Vec<T>,
    },
    Bare(Vec<T>),
}

impl<T> From<ListEnvelope<T>> for Listing<T> {
    fn from(envelope: ListEnvelope<T>) -> Self {
        match envelope {
            ListEnvelope::Paginated { count, results, .. } => Listing {
                items: results,
                total: count,
            },
            ListEnvelope::Bare(items) => {
                let total = items.len();
                Listing { items, total }
            }
        }
    }
}

/// Decodes a response body into a normalized [`Listing`].
fn parse_listing<T: DeserializeOwned>(body: &str) -> Result<Listing<T>, AppError> {
    let envelope: ListEnvelope<T> = serde_json::from_str(body)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))?;
    Ok(envelope.into())
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Login and registration return 401 as an "invalid credentials" signal, not a
/// session-expiry signal, so they are never refreshed.
fn is_auth_endpoint(path: &str) -> bool {
    path.contains("/auth/login/") || path.contains("/auth/register/")
}

/// Refresh policy for a failed response. At most one retry per original
/// request; the retry itself never triggers a second refresh.
fn should_attempt_refresh(status: u16, path: &str, already_retried: bool) -> bool {
    status == 401 && !already_retried && !is_auth_endpoint(path)
}

/// Maps a failure status to the toast shown to the user, if any. 401s are
/// handled by the refresh path and 400s are validation errors left to the
/// calling form, so neither produces a toast.
fn toast_message(status: u16, detail: Option<&str>) -> Option<String> {
    match status {
        400 | 401 => None,
        status if status >= 500 => Some("Server error. Please try again later.".to_string()),
        404 => Some("Resource not found.".to_string()),
        _ => detail.map(str::to_string),
    }
}

/// Pulls the server-supplied `detail` (or `error`) message out of a JSON error
/// body, if there is one.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let detail = value
        .get("detail")
        .or_else(|| value.get("error"))?
        .as_str()?;
    let trimmed = detail.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

/// Decodes a JSON success body.
fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

/// One completed HTTP exchange: the status and body text of a response,
/// however the transport produced it.
struct Exchange {
    status: u16,
    body: String,
}

impl Exchange {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Bearer attachment and 401 recovery, generic over the transport. `dispatch`
/// performs one attempt with the given access token; `refresh` trades the
/// refresh token for a new access token. On a refreshable 401 the refresh
/// runs: success re-issues the request once with the new token, failure clears
/// the session and surfaces the *original* error. The caller always receives
/// the result of the last attempt made on its behalf.
async fn send_with_refresh<D, F, R, G>(
    path: &str,
    mut dispatch: D,
    refresh: R,
) -> Result<(u16, String), AppError>
where
    D: FnMut(Option<String>) -> F,
    F: Future<Output = Result<Exchange, AppError>>,
    R: FnOnce(String) -> G,
    G: Future<Output = Result<String, AppError>>,
{
    let first = dispatch(session::access_token()).await?;
    if first.is_success() {
        return Ok((first.status, first.body));
    }

    if should_attempt_refresh(first.status, path, false) {
        if let Some(token) = session::refresh_token() {
            match refresh(token).await {
                Ok(access) => {
                    session::store_access(&access);
                    let retried = dispatch(Some(access)).await?;
                    if retried.is_success() {
                        return Ok((retried.status, retried.body));
                    }
                    // One retry per original request; a second 401 here
                    // propagates without another refresh.
                    return Err(fail(retried.status, retried.body));
                }
                Err(_) => {
                    // Irrecoverable session: drop local state and surface
                    // the original request's error, not the refresh error.
                    leptos::logging::warn!("token refresh failed; clearing session");
                    session::clear();
                    return Err(fail(first.status, first.body));
                }
            }
        }
        // No refresh token stored: propagate the original error unchanged.
    }

    Err(fail(first.status, first.body))
}

/// Converts a failure response into an `AppError`, pushing the transient
/// toast where policy calls for one.
fn fail(status: u16, body: String) -> AppError {
    let detail = extract_detail(&body);
    if let Some(message) = toast_message(status, detail.as_deref()) {
        notify(message);
    }
    AppError::Http {
        status,
        message: detail.unwrap_or_else(|| sanitize_body(body)),
    }
}

#[cfg(target_arch = "wasm32")]
fn notify(message: String) {
    crate::components::ui::toast::error(message);
}

#[cfg(not(target_arch = "wasm32"))]
fn notify(_message: String) {}

/// How a request body travels. Multipart never carries an explicit content
/// type; the browser has to set the boundary header itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BodyEncoding {
    Empty,
    Json,
    Multipart,
}

fn content_type(encoding: BodyEncoding) -> Option<&'static str> {
    match encoding {
        BodyEncoding::Json => Some("application/json"),
        BodyEncoding::Empty | BodyEncoding::Multipart => None,
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use transport::*;

#[cfg(target_arch = "wasm32")]
mod transport {
    use super::*;
    use gloo_net::http::{Request, RequestBuilder, Response};
    use gloo_timers::callback::Timeout;
    use serde::Serialize;
    use web_sys::AbortController;

    /// Rebuildable request body, so the original request can be re-issued once
    /// after a token refresh. `Form` carries a `FormData` handle.
    #[derive(Clone)]
    enum Payload {
        Empty,
        Json(String),
        Form(web_sys::FormData),
    }

    impl Payload {
        fn encoding(&self) -> BodyEncoding {
            match self {
                Payload::Empty => BodyEncoding::Empty,
                Payload::Json(_) => BodyEncoding::Json,
                Payload::Form(_) => BodyEncoding::Multipart,
            }
        }
    }

    #[derive(Serialize)]
    struct RefreshRequest<'a> {
        refresh: &'a str,
    }

    #[derive(serde::Deserialize)]
    struct RefreshResponse {
        access: String,
    }

    /// Fetches JSON from an authenticated (or public) endpoint.
    pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
        let (_, body) = send("GET", path, &Payload::Empty).await?;
        parse_json(&body)
    }

    /// Fetches a list endpoint and normalizes bare-array and paginated shapes.
    pub(crate) async fn get_listing<T: DeserializeOwned>(path: &str) -> Result<Listing<T>, AppError> {
        let (_, body) = send("GET", path, &Payload::Empty).await?;
        parse_listing(&body)
    }

    /// Posts JSON and parses a JSON response.
    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        request: &B,
    ) -> Result<T, AppError> {
        let (_, body) = send("POST", path, &encode(request)?).await?;
        parse_json(&body)
    }

    /// Posts with an empty body and ignores the response.
    pub(crate) async fn post_discard(path: &str) -> Result<(), AppError> {
        send("POST", path, &Payload::Empty).await.map(|_| ())
    }

    /// Posts JSON and ignores the response body.
    pub(crate) async fn post_json_discard<B: Serialize>(
        path: &str,
        request: &B,
    ) -> Result<(), AppError> {
        send("POST", path, &encode(request)?).await.map(|_| ())
    }

    /// Sends a JSON PUT and parses a JSON response.
    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        request: &B,
    ) -> Result<T, AppError> {
        let (_, body) = send("PUT", path, &encode(request)?).await?;
        parse_json(&body)
    }

    /// Sends a JSON PATCH and parses a JSON response.
    pub(crate) async fn patch_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        request: &B,
    ) -> Result<T, AppError> {
        let (_, body) = send("PATCH", path, &encode(request)?).await?;
        parse_json(&body)
    }

    /// Posts a multipart form and parses a JSON response.
    pub(crate) async fn post_form<T: DeserializeOwned>(
        path: &str,
        form: web_sys::FormData,
    ) -> Result<T, AppError> {
        let (_, body) = send("POST", path, &Payload::Form(form)).await?;
        parse_json(&body)
    }

    /// Sends a multipart PUT and parses a JSON response.
    pub(crate) async fn put_form<T: DeserializeOwned>(
        path: &str,
        form: web_sys::FormData,
    ) -> Result<T, AppError> {
        let (_, body) = send("PUT", path, &Payload::Form(form)).await?;
        parse_json(&body)
    }

    /// Deletes a resource, ignoring the response body.
    pub(crate) async fn delete_resource(path: &str) -> Result<(), AppError> {
        send("DELETE", path, &Payload::Empty).await.map(|_| ())
    }

    fn encode<B: Serialize>(request: &B) -> Result<Payload, AppError> {
        serde_json::to_string(request)
            .map(Payload::Json)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
    }

    /// Feeds one browser request cycle into the recovery orchestration in the
    /// parent module, which owns token attachment and the refresh-and-retry
    /// policy. Returns the status and body text of a successful response.
    async fn send(
        method: &'static str,
        path: &str,
        payload: &Payload,
    ) -> Result<(u16, String), AppError> {
        let url = build_url(path);
        let payload = payload.clone();
        send_with_refresh(
            path,
            move |token| {
                let url = url.clone();
                let payload = payload.clone();
                async move {
                    let response = dispatch(method, &url, &payload, token.as_deref()).await?;
                    let status = response.status();
                    let body = response.text().await.unwrap_or_default();
                    Ok(Exchange { status, body })
                }
            },
            |refresh| async move { refresh_access_token(&refresh).await },
        )
        .await
    }

    /// Issues the dedicated refresh call. This bypasses `send` on purpose so a
    /// 401 from the refresh endpoint can never recurse into another refresh.
    async fn refresh_access_token(refresh: &str) -> Result<String, AppError> {
        let url = build_url("/auth/refresh/");
        let payload = encode(&RefreshRequest { refresh })?;
        let response = dispatch("POST", &url, &payload, None).await?;
        if !response.ok() {
            return Err(AppError::Http {
                status: response.status(),
                message: "Token refresh failed.".to_string(),
            });
        }
        let data: RefreshResponse = response
            .json()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))?;
        Ok(data.access)
    }

    /// Builds and sends one attempt, attaching the bearer token when present.
    async fn dispatch(
        method: &str,
        url: &str,
        payload: &Payload,
        token: Option<&str>,
    ) -> Result<Response, AppError> {
        send_with_timeout(|signal| {
            let mut builder = builder_for(method, url)?.abort_signal(Some(signal));
            if let Some(token) = token {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            if let Some(value) = content_type(payload.encoding()) {
                builder = builder.header("Content-Type", value);
            }
            let request = match payload {
                Payload::Empty => builder.build(),
                Payload::Json(body) => builder.body(body.clone()),
                Payload::Form(form) => builder.body(form.clone()),
            };
            request
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await
    }

    fn builder_for(method: &str, url: &str) -> Result<RequestBuilder, AppError> {
        match method {
            "GET" => Ok(Request::get(url)),
            "POST" => Ok(Request::post(url)),
            "PUT" => Ok(Request::put(url)),
            "PATCH" => Ok(Request::patch(url)),
            "DELETE" => Ok(Request::delete(url)),
            other => Err(AppError::Config(format!("Unsupported method: {other}"))),
        }
    }

    /// Sends a request with an abort timeout to avoid hanging UI state.
    async fn send_with_timeout(
        build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
    ) -> Result<Response, AppError> {
        let controller = AbortController::new()
            .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

        let request = build_request(&signal)?;
        request.send().await.map_err(map_request_error)
    }

    /// Maps network errors into user-facing `AppError` variants with timeout detection.
    fn map_request_error(err: gloo_net::Error) -> AppError {
        let message = err.to_string();
        let lowered = message.to_lowercase();

        if lowered.contains("timeout") || lowered.contains("abort") {
            AppError::Timeout("Request timed out. Please try again.".to_string())
        } else {
            AppError::Network(format!("Unable to reach the server: {message}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url_with_base("https://api.foliosite.dev/", "/auth/me/"),
            "https://api.foliosite.dev/auth/me/"
        );
        assert_eq!(build_url_with_base("/api/v1", "projects/"), "/api/v1/projects/");
        assert_eq!(build_url_with_base("", "/auth/me/"), "/auth/me/");
    }

    #[test]
    fn login_and_register_are_auth_endpoints() {
        assert!(is_auth_endpoint("/auth/login/"));
        assert!(is_auth_endpoint("/auth/register/"));
        assert!(!is_auth_endpoint("/auth/me/"));
        assert!(!is_auth_endpoint("/projects/"));
    }

    #[test]
    fn refresh_policy_covers_session_expiry_only() {
        // Plain expiry on a domain endpoint: refresh.
        assert!(should_attempt_refresh(401, "/projects/", false));
        // Invalid credentials on login: never refresh.
        assert!(!should_attempt_refresh(401, "/auth/login/", false));
        assert!(!should_attempt_refresh(401, "/auth/register/", false));
        // Already retried once: propagate immediately.
        assert!(!should_attempt_refresh(401, "/projects/", true));
        // Non-401 statuses never refresh.
        assert!(!should_attempt_refresh(403, "/projects/", false));
        assert!(!should_attempt_refresh(500, "/projects/", false));
    }

    #[test]
    fn toast_policy_matches_status_classes() {
        assert_eq!(
            toast_message(500, None),
            Some("Server error. Please try again later.".to_string())
        );
        assert_eq!(
            toast_message(503, Some("maintenance")),
            Some("Server error. Please try again later.".to_string())
        );
        assert_eq!(toast_message(404, None), Some("Resource not found.".to_string()));
        assert_eq!(toast_message(403, Some("No permission.")), Some("No permission.".to_string()));
        assert_eq!(toast_message(403, None), None);
        // 401 is the refresh path's concern and 400 belongs to form code.
        assert_eq!(toast_message(401, Some("expired")), None);
        assert_eq!(toast_message(400, Some("invalid")), None);
    }

    #[test]
    fn extract_detail_reads_detail_then_error() {
        assert_eq!(
            extract_detail(r#"{"detail":"Not found."}"#),
            Some("Not found.".to_string())
        );
        assert_eq!(
            extract_detail(r#"{"error":"No permission."}"#),
            Some("No permission.".to_string())
        );
        assert_eq!(extract_detail(r#"{"detail":""}"#), None);
        assert_eq!(extract_detail("<html>oops</html>"), None);
    }

    #[test]
    fn sanitize_body_trims_and_truncates() {
        assert_eq!(sanitize_body(String::new()), "Request failed.");
        assert_eq!(sanitize_body("  oops \n".to_string()), "oops");
        let long = "x".repeat(500);
        assert_eq!(sanitize_body(long).len(), MAX_ERROR_CHARS);
    }

    #[test]
    fn listing_normalizes_bare_arrays() {
        let listing: Listing<Item> = parse_listing(r#"[{"id":1},{"id":2}]"#).unwrap();
        assert_eq!(listing.total, 2);
        assert_eq!(listing.items, vec![Item { id: 1 }, Item { id: 2 }]);
    }

    #[test]
    fn listing_normalizes_paginated_envelopes() {
        let body = r#"{"count":12,"next":"/projects/?page=2","previous":null,"results":[{"id":7}]}"#;
        let listing: Listing<Item> = parse_listing(body).unwrap();
        assert_eq!(listing.total, 12);
        assert_eq!(listing.items, vec![Item { id: 7 }]);
    }

    #[test]
    fn listing_rejects_unrecognized_shapes() {
        assert!(parse_listing::<Item>(r#"{"things":[]}"#).is_err());
    }

    #[test]
    fn only_json_bodies_carry_an_explicit_content_type() {
        assert_eq!(content_type(BodyEncoding::Json), Some("application/json"));
        assert_eq!(content_type(BodyEncoding::Multipart), None);
        assert_eq!(content_type(BodyEncoding::Empty), None);
    }

    mod recovery {
        use super::super::{AppError, Exchange, send_with_refresh};
        use crate::features::auth::session;
        use std::cell::RefCell;
        use std::rc::Rc;

        fn reply(status: u16, body: &str) -> Result<Exchange, AppError> {
            Ok(Exchange {
                status,
                body: body.to_string(),
            })
        }

        #[tokio::test]
        async fn success_passes_the_stored_token_and_returns_the_body() {
            session::clear();
            session::store_session("access-value", "refresh-value");
            let seen = Rc::new(RefCell::new(Vec::new()));
            let tokens = seen.clone();

            let result = send_with_refresh(
                "/projects/",
                move |token| {
                    tokens.borrow_mut().push(token);
                    async { reply(200, r#"[{"id":1}]"#) }
                },
                |_refresh| async { unreachable!("successful requests are never refreshed") },
            )
            .await;

            assert_eq!(result, Ok((200, r#"[{"id":1}]"#.to_string())));
            assert_eq!(*seen.borrow(), vec![Some("access-value".to_string())]);
        }

        #[tokio::test]
        async fn refresh_and_retry_returns_the_retried_response() {
            session::clear();
            session::store_session("stale-access", "live-refresh");
            let seen = Rc::new(RefCell::new(Vec::new()));
            let tokens = seen.clone();

            let result = send_with_refresh(
                "/projects/",
                move |token| {
                    tokens.borrow_mut().push(token);
                    let attempt = tokens.borrow().len();
                    async move {
                        if attempt == 1 {
                            reply(401, r#"{"detail":"expired"}"#)
                        } else {
                            reply(200, r#"{"id":7}"#)
                        }
                    }
                },
                |refresh| async move {
                    assert_eq!(refresh, "live-refresh");
                    Ok("fresh-access".to_string())
                },
            )
            .await;

            // The caller receives the retried response, not the 401.
            assert_eq!(result, Ok((200, r#"{"id":7}"#.to_string())));
            assert_eq!(
                *seen.borrow(),
                vec![
                    Some("stale-access".to_string()),
                    Some("fresh-access".to_string())
                ]
            );
            // The rotated access token is persisted; the refresh token survives.
            assert_eq!(session::access_token().as_deref(), Some("fresh-access"));
            assert_eq!(session::refresh_token().as_deref(), Some("live-refresh"));
        }

        #[tokio::test]
        async fn refresh_failure_clears_the_session_and_surfaces_the_original_error() {
            session::clear();
            session::store_session("stale-access", "dead-refresh");
            let calls = Rc::new(RefCell::new(0));
            let dispatches = calls.clone();

            let result = send_with_refresh(
                "/projects/",
                move |_token| {
                    *dispatches.borrow_mut() += 1;
                    async { reply(401, r#"{"detail":"expired"}"#) }
                },
                |_refresh| async {
                    Err(AppError::Http {
                        status: 401,
                        message: "Token refresh failed.".to_string(),
                    })
                },
            )
            .await;

            // The original request's 401 surfaces, not the refresh error.
            assert_eq!(
                result,
                Err(AppError::Http {
                    status: 401,
                    message: "expired".to_string(),
                })
            );
            assert_eq!(*calls.borrow(), 1);
            assert_eq!(session::access_token(), None);
            assert_eq!(session::refresh_token(), None);
        }

        #[tokio::test]
        async fn a_second_unauthorized_after_refresh_propagates_as_is() {
            session::clear();
            session::store_session("stale-access", "live-refresh");
            let calls = Rc::new(RefCell::new(0));
            let dispatches = calls.clone();

            let result = send_with_refresh(
                "/projects/",
                move |_token| {
                    *dispatches.borrow_mut() += 1;
                    async { reply(401, r#"{"detail":"still expired"}"#) }
                },
                |_refresh| async { Ok("fresh-access".to_string()) },
            )
            .await;

            assert_eq!(
                result,
                Err(AppError::Http {
                    status: 401,
                    message: "still expired".to_string(),
                })
            );
            // Exactly one retry; the refreshed session stays in place.
            assert_eq!(*calls.borrow(), 2);
            assert_eq!(session::access_token().as_deref(), Some("fresh-access"));
            assert_eq!(session::refresh_token().as_deref(), Some("live-refresh"));
        }

        #[tokio::test]
        async fn a_missing_refresh_token_propagates_the_original_error() {
            session::clear();
            session::store_access("stale-access");
            let calls = Rc::new(RefCell::new(0));
            let dispatches = calls.clone();

            let result = send_with_refresh(
                "/projects/",
                move |_token| {
                    *dispatches.borrow_mut() += 1;
                    async { reply(401, r#"{"detail":"expired"}"#) }
                },
                |_refresh| async { unreachable!("nothing to refresh with") },
            )
            .await;

            assert_eq!(
                result,
                Err(AppError::Http {
                    status: 401,
                    message: "expired".to_string(),
                })
            );
            assert_eq!(*calls.borrow(), 1);
            // Nothing was cleared; the stored access token is untouched.
            assert_eq!(session::access_token().as_deref(), Some("stale-access"));
        }

        #[tokio::test]
        async fn login_failures_never_trigger_a_refresh() {
            session::clear();
            session::store_session("stale-access", "live-refresh");
            let calls = Rc::new(RefCell::new(0));
            let dispatches = calls.clone();

            let result = send_with_refresh(
                "/auth/login/",
                move |_token| {
                    *dispatches.borrow_mut() += 1;
                    async { reply(401, r#"{"detail":"bad credentials"}"#) }
                },
                |_refresh| async { unreachable!("credential failures are not refreshed") },
            )
            .await;

            assert_eq!(
                result,
                Err(AppError::Http {
                    status: 401,
                    message: "bad credentials".to_string(),
                })
            );
            assert_eq!(*calls.borrow(), 1);
            assert_eq!(session::refresh_token().as_deref(), Some("live-refresh"));
        }

        #[tokio::test]
        async fn transport_errors_propagate_without_touching_the_session() {
            session::clear();
            session::store_session("access-value", "refresh-value");

            let result = send_with_refresh(
                "/projects/",
                |_token| async {
                    Err(AppError::Network(
                        "Unable to reach the server: offline".to_string(),
                    ))
                },
                |_refresh| async { unreachable!("network failures are not refreshed") },
            )
            .await;

            assert_eq!(
                result,
                Err(AppError::Network(
                    "Unable to reach the server: offline".to_string(),
                ))
            );
            assert_eq!(session::access_token().as_deref(), Some("access-value"));
            assert_eq!(session::refresh_token().as_deref(), Some("refresh-value"));
        }
    }
}
