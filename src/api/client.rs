use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use super::{server_message, ApiError, Envelope, UNEXPECTED_RESPONSE};
use crate::blog::{HealthStatus, Post, PostList};
use crate::config::SiteConfig;
use crate::contact::{Ack, AckData, ContactRequest, MessagePage, MessageStatus};

/// Outbound client for the blog and contact backend. One attempt per call: no retry,
/// no cache. Every call either returns the payload or an [`ApiError`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &SiteConfig) -> anyhow::Result<Self> {
        Ok(Self::with_timeout(&config.backend_url, config.request_timeout)?)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: format!("{}/api", base_url.trim_end_matches('/')),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends the request and sorts the outcome into the three error classes.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        label: &str,
    ) -> Result<T, ApiError> {
        info!("[API Request] {label}");
        let response = request.send().await.map_err(|e| {
            warn!("[API Request Error] {label}: {e}");
            ApiError::network(e.to_string())
        })?;

        let status = response.status();
        info!("[API Response] {} {label}", status.as_u16());

        // a body cut off mid-stream means we never got the full response
        let body = response.bytes().await.map_err(|e| {
            warn!("[API Response Error] {label}: {e}");
            ApiError::network(e.to_string())
        })?;

        if !status.is_success() {
            let message = server_message(&body);
            warn!("[API Response Error] {} {label}: {message}", status.as_u16());
            return Err(ApiError::Server {
                status: Some(status.as_u16()),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|e| {
            warn!("[API Response Error] {label}: undecodable body: {e}");
            ApiError::Server {
                status: Some(status.as_u16()),
                message: UNEXPECTED_RESPONSE.to_string(),
            }
        })
    }

    pub async fn fetch_posts(&self, max_results: u32) -> Result<PostList, ApiError> {
        if max_results == 0 {
            return Err(ApiError::Validation(
                "max_results must be at least 1".to_string(),
            ));
        }
        let path = format!("/blog/posts?max_results={max_results}");
        let envelope: Envelope<PostList> = self
            .execute(self.client.get(self.url(&path)), &format!("GET {path}"))
            .await?;
        let list = envelope.into_data()?;
        if list.is_fallback {
            info!("Blog backend served {} fallback posts", list.posts.len());
        }
        Ok(list)
    }

    pub async fn get_post(&self, id: &str) -> Result<Post, ApiError> {
        let id = check_id(id, "post")?;
        let path = format!("/blog/posts/{id}");
        let envelope: Envelope<Post> = self
            .execute(self.client.get(self.url(&path)), &format!("GET {path}"))
            .await?;
        envelope.into_data()
    }

    pub async fn blog_health(&self) -> Result<HealthStatus, ApiError> {
        let path = "/blog/health";
        self.execute(self.client.get(self.url(path)), &format!("GET {path}"))
            .await
    }

    /// Validates locally first; an invalid submission never reaches the network.
    pub async fn submit_contact(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<Ack, ApiError> {
        let request = ContactRequest::new(name, email, message).validated()?;
        let path = "/contact";
        let envelope: Envelope<AckData> = self
            .execute(
                self.client.post(self.url(path)).json(&request),
                &format!("POST {path}"),
            )
            .await?;
        let envelope = envelope.check()?;
        let data = envelope.data.unwrap_or_default();
        Ok(Ack {
            message: envelope
                .message
                .unwrap_or_else(|| "Message sent".to_string()),
            message_id: data.message_id,
            submitted_at: data.submitted_at,
        })
    }

    pub async fn list_messages(
        &self,
        skip: u64,
        limit: u64,
        status: Option<MessageStatus>,
    ) -> Result<MessagePage, ApiError> {
        if limit == 0 {
            return Err(ApiError::Validation("limit must be at least 1".to_string()));
        }
        let mut path = format!("/contact/messages?skip={skip}&limit={limit}");
        if let Some(status) = status {
            path.push_str(&format!("&status={status}"));
        }
        let envelope: Envelope<MessagePage> = self
            .execute(self.client.get(self.url(&path)), &format!("GET {path}"))
            .await?;
        envelope.into_data()
    }

    pub async fn update_message_status(
        &self,
        id: &str,
        new_status: MessageStatus,
    ) -> Result<Ack, ApiError> {
        let id = check_id(id, "message")?;
        let path = format!("/contact/messages/{id}/status?new_status={new_status}");
        let envelope: Envelope<Value> = self
            .execute(self.client.put(self.url(&path)), &format!("PUT {path}"))
            .await?;
        let envelope = envelope.check()?;
        Ok(Ack {
            message: envelope
                .message
                .unwrap_or_else(|| format!("Message status updated to {new_status}")),
            message_id: Some(id.to_string()),
            submitted_at: None,
        })
    }

    /// Raw root payload, used to check the backend is reachable at all.
    pub async fn test_connection(&self) -> Result<Value, ApiError> {
        let path = "/";
        self.execute(self.client.get(self.url(path)), &format!("GET {path}"))
            .await
    }
}

/// Ids go straight into the path, so only plain tokens are allowed.
fn check_id<'a>(id: &'a str, what: &str) -> Result<&'a str, ApiError> {
    let id = id.trim();
    let plain = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if id.is_empty() || !plain {
        return Err(ApiError::Validation(format!("Invalid {what} id")));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc, Mutex,
        },
    };

    use axum::{
        extract::{Path, Query},
        http::StatusCode,
        routing::{get, post, put},
        Json, Router,
    };

    use serde_json::json;

    use super::*;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client(base: &str) -> ApiClient {
        ApiClient::with_timeout(base, Duration::from_secs(2)).unwrap()
    }

    fn counting_router(hits: Arc<AtomicUsize>) -> Router {
        Router::new().fallback(move || {
            hits.fetch_add(1, Ordering::SeqCst);
            async { StatusCode::OK }
        })
    }

    fn post_json(id: &str) -> Value {
        json!({
            "id": id,
            "title": "Agents in production",
            "excerpt": "What breaks first...",
            "content": "<p>What breaks first</p>",
            "publishDate": "March 02, 2025",
            "readTime": "4 min read",
            "category": "LLMs",
            "url": "https://example.blogspot.com/agents.html",
            "author": "G.J. Rahul",
            "featuredImage": null
        })
    }

    #[tokio::test]
    async fn test_fetch_posts_success() {
        let router = Router::new().route(
            "/api/blog/posts",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                let n = q.get("max_results").cloned().unwrap_or_default();
                Json(json!({
                    "status": "success",
                    "data": {
                        "posts": [post_json(&format!("requested-{n}"))],
                        "totalPosts": 1,
                        "lastFetched": "2025-03-02T10:00:00"
                    }
                }))
            }),
        );
        let base = serve(router).await;

        let list = client(&base).fetch_posts(3).await.unwrap();
        assert_eq!(list.posts.len(), 1);
        assert_eq!(list.posts[0].id, "requested-3");
        assert_eq!(list.total_posts, 1);
        assert!(!list.is_fallback);
    }

    #[tokio::test]
    async fn test_fetch_posts_fallback_flag() {
        let router = Router::new().route(
            "/api/blog/posts",
            get(|| async {
                Json(json!({
                    "status": "success",
                    "data": {
                        "posts": [post_json("fallback-1")],
                        "totalPosts": 1,
                        "lastFetched": "2025-03-02T10:00:00",
                        "isFallback": true
                    }
                }))
            }),
        );
        let base = serve(router).await;

        let list = client(&base).fetch_posts(10).await.unwrap();
        assert!(list.is_fallback);
        assert_eq!(list.posts[0].id, "fallback-1");
    }

    #[tokio::test]
    async fn test_fetch_posts_server_error_message() {
        let router = Router::new().route(
            "/api/blog/posts",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "Internal server error" })),
                )
            }),
        );
        let base = serve(router).await;

        let err = client(&base).fetch_posts(10).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: Some(500),
                message: "Internal server error".to_string()
            }
        );
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_server_error_without_body_message() {
        let router = Router::new().route(
            "/api/blog/posts",
            get(|| async { (StatusCode::BAD_GATEWAY, "upstream gone") }),
        );
        let base = serve(router).await;

        let err = client(&base).fetch_posts(10).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: Some(502),
                message: "Server error occurred".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_undecodable_success_body() {
        let router = Router::new().route("/api/blog/posts", get(|| async { "not json" }));
        let base = serve(router).await;

        let err = client(&base).fetch_posts(10).await.unwrap_err();
        assert_eq!(err.to_string(), UNEXPECTED_RESPONSE);
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{addr}"))
            .fetch_posts(10)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Network { .. }));
    }

    #[tokio::test]
    async fn test_timeout_is_network_error() {
        let router = Router::new().route(
            "/api/blog/health",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        );
        let base = serve(router).await;

        let client = ApiClient::with_timeout(&base, Duration::from_millis(200)).unwrap();
        let err = client.blog_health().await.unwrap_err();
        assert!(matches!(err, ApiError::Network { .. }));
    }

    #[tokio::test]
    async fn test_invalid_email_makes_no_request() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = serve(counting_router(hits.clone())).await;
        let client = client(&base);

        let err = client
            .submit_contact("Ada", "not-an-email", "Hello")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let err = client
            .submit_contact("  ", "ada@example.com", "Hello")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let err = client.fetch_posts(0).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let err = client.get_post("../admin").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_submit_contact_sends_trimmed_body() {
        let received = Arc::new(Mutex::new(None::<Value>));
        let sink = received.clone();
        let router = Router::new().route(
            "/api/contact",
            post(move |Json(body): Json<Value>| {
                *sink.lock().unwrap() = Some(body);
                async {
                    Json(json!({
                        "status": "success",
                        "message": "Thank you for your message! I'll get back to you soon.",
                        "data": {
                            "messageId": "65f0c0ffee",
                            "submittedAt": "2025-03-02T10:00:00"
                        }
                    }))
                }
            }),
        );
        let base = serve(router).await;

        let ack = client(&base)
            .submit_contact(" Ada ", "ada@example.com", " Let's build something \n")
            .await
            .unwrap();
        assert_eq!(
            ack.message,
            "Thank you for your message! I'll get back to you soon."
        );
        assert_eq!(ack.message_id.as_deref(), Some("65f0c0ffee"));

        let body = received.lock().unwrap().clone().unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Let's build something"
            })
        );
    }

    #[tokio::test]
    async fn test_submit_contact_validation_from_server() {
        let router = Router::new().route(
            "/api/contact",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "detail": "Message too long" })),
                )
            }),
        );
        let base = serve(router).await;

        let err = client(&base)
            .submit_contact("Ada", "ada@example.com", "hi")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Message too long");
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_get_post_and_health() {
        let router = Router::new()
            .route(
                "/api/blog/posts/{id}",
                get(|Path(id): Path<String>| async move {
                    if id == "42" {
                        (
                            StatusCode::OK,
                            Json(json!({ "status": "success", "data": post_json("42") })),
                        )
                    } else {
                        (
                            StatusCode::NOT_FOUND,
                            Json(json!({ "detail": "Blog post not found" })),
                        )
                    }
                }),
            )
            .route(
                "/api/blog/health",
                get(|| async {
                    Json(json!({
                        "status": "healthy",
                        "service": "blog",
                        "timestamp": "2025-03-02T10:00:00"
                    }))
                }),
            );
        let base = serve(router).await;
        let client = client(&base);

        let post = client.get_post("42").await.unwrap();
        assert_eq!(post.title, "Agents in production");
        assert_eq!(post.author.as_deref(), Some("G.J. Rahul"));

        let err = client.get_post("7").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: Some(404),
                message: "Blog post not found".to_string()
            }
        );

        let health = client.blog_health().await.unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.service, "blog");
    }

    #[tokio::test]
    async fn test_admin_message_endpoints() {
        let router = Router::new()
            .route(
                "/api/contact/messages",
                get(|Query(q): Query<HashMap<String, String>>| async move {
                    let status = q.get("status").cloned().unwrap_or_else(|| "new".into());
                    Json(json!({
                        "status": "success",
                        "data": {
                            "messages": [{
                                "_id": "65f0c0ffee",
                                "id": "2b0c",
                                "name": "Ada",
                                "email": "ada@example.com",
                                "message": "hi",
                                "submittedAt": "2025-03-02T10:00:00",
                                "status": status
                            }],
                            "totalCount": 1,
                            "skip": q.get("skip").and_then(|s| s.parse::<u64>().ok()),
                            "limit": q.get("limit").and_then(|s| s.parse::<u64>().ok())
                        }
                    }))
                }),
            )
            .route(
                "/api/contact/messages/{id}/status",
                put(|Path(id): Path<String>, Query(q): Query<HashMap<String, String>>| async move {
                    let status = q.get("new_status").cloned().unwrap_or_default();
                    Json(json!({
                        "status": "success",
                        "message": format!("{id} -> {status}")
                    }))
                }),
            );
        let base = serve(router).await;
        let client = client(&base);

        let page = client
            .list_messages(5, 20, Some(MessageStatus::Read))
            .await
            .unwrap();
        assert_eq!(page.skip, 5);
        assert_eq!(page.limit, 20);
        assert_eq!(page.total_count, 1);
        assert_eq!(page.messages[0].status, MessageStatus::Read);

        let key = page.messages[0].key().unwrap().to_string();
        let ack = client
            .update_message_status(&key, MessageStatus::Responded)
            .await
            .unwrap();
        assert_eq!(ack.message, "65f0c0ffee -> responded");

        let err = client.list_messages(0, 0, None).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_error_envelope_on_success_status() {
        let router = Router::new().route(
            "/api/blog/posts",
            get(|| async {
                Json(json!({ "status": "error", "message": "Blogger quota exceeded", "data": null }))
            }),
        );
        let base = serve(router).await;

        let err = client(&base).fetch_posts(10).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: None,
                message: "Blogger quota exceeded".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_connection_returns_raw_root() {
        let router = Router::new().route(
            "/api/",
            get(|| async { Json(json!({ "message": "Portfolio API", "version": "1.0" })) }),
        );
        let base = serve(router).await;

        let root = client(&base).test_connection().await.unwrap();
        assert_eq!(root["message"], "Portfolio API");
    }
}
