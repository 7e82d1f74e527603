use serde::{Deserialize, Serialize};

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub read_time: String,
    pub publish_date: String,
    pub category: String,
    #[serde(default)]
    pub url: Option<String>,
    /// Raw HTML as published.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
}

impl Post {
    /// External link to the published post, if there is a real one.
    pub fn link(&self) -> Option<&str> {
        self.url
            .as_deref()
            .filter(|url| !url.is_empty() && *url != "#")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostList {
    pub posts: Vec<Post>,
    #[serde(default)]
    pub total_posts: usize,
    #[serde(default)]
    pub last_fetched: Option<String>,
    /// Backend could not reach the real blog and served placeholder posts.
    #[serde(default)]
    pub is_fallback: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    Loading,
    Error,
    Empty,
    Fallback,
    Live,
}

/// What the blog section currently shows. A failed fetch never clobbers posts that
/// were already on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFeed {
    posts: Vec<Post>,
    is_fallback: bool,
    error: Option<ApiError>,
    loaded: bool,
}

impl BlogFeed {
    pub fn apply(&mut self, result: Result<PostList, ApiError>) {
        match result {
            Ok(list) => {
                self.posts = list.posts;
                self.is_fallback = list.is_fallback;
                self.error = None;
                self.loaded = true;
            }
            Err(e) => self.error = Some(e),
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn view_state(&self) -> FeedState {
        if self.error.is_some() {
            FeedState::Error
        } else if !self.loaded {
            FeedState::Loading
        } else if self.posts.is_empty() {
            FeedState::Empty
        } else if self.is_fallback {
            FeedState::Fallback
        } else {
            FeedState::Live
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            title: format!("Post {id}"),
            excerpt: "excerpt".to_string(),
            read_time: "1 min read".to_string(),
            publish_date: "January 01, 2025".to_string(),
            category: "AI/ML".to_string(),
            url: None,
            content: String::new(),
            author: None,
            featured_image: None,
        }
    }

    fn list(ids: &[&str], is_fallback: bool) -> PostList {
        PostList {
            posts: ids.iter().map(|id| post(id)).collect(),
            total_posts: ids.len(),
            last_fetched: None,
            is_fallback,
        }
    }

    #[test]
    fn test_feed_starts_loading() {
        assert_eq!(BlogFeed::default().view_state(), FeedState::Loading);
    }

    #[test]
    fn test_error_keeps_existing_posts() {
        let mut feed = BlogFeed::default();
        feed.apply(Ok(list(&["1", "2"], false)));
        assert_eq!(feed.view_state(), FeedState::Live);

        feed.apply(Err(ApiError::Server {
            status: Some(500),
            message: "Internal server error".to_string(),
        }));
        assert_eq!(feed.view_state(), FeedState::Error);
        assert_eq!(feed.posts().len(), 2);
        assert_eq!(feed.error().unwrap().to_string(), "Internal server error");

        feed.apply(Ok(list(&["3"], false)));
        assert!(feed.error().is_none());
        assert_eq!(feed.posts()[0].id, "3");
    }

    #[test]
    fn test_fallback_is_not_an_error() {
        let mut feed = BlogFeed::default();
        feed.apply(Ok(list(&["fallback-1"], true)));
        assert_eq!(feed.view_state(), FeedState::Fallback);
        assert!(feed.error().is_none());
    }

    #[test]
    fn test_empty_state() {
        let mut feed = BlogFeed::default();
        feed.apply(Ok(list(&[], false)));
        assert_eq!(feed.view_state(), FeedState::Empty);
    }

    #[test]
    fn test_post_wire_format() {
        let raw = r##"{
            "id": "fallback-1",
            "title": "The Complete AI Playground",
            "excerpt": "Exploring",
            "content": "",
            "publishDate": "Coming Soon",
            "readTime": "8 min read",
            "category": "AI/ML Deep Dive",
            "url": "#",
            "author": "G.J. Rahul",
            "featuredImage": null
        }"##;
        let post: Post = serde_json::from_str(raw).unwrap();
        assert_eq!(post.read_time, "8 min read");
        assert_eq!(post.publish_date, "Coming Soon");
        assert_eq!(post.link(), None);

        let list: PostList =
            serde_json::from_str(r#"{"posts":[],"totalPosts":0,"lastFetched":"2025-01-01T00:00:00"}"#)
                .unwrap();
        assert!(!list.is_fallback);
    }

    #[test]
    fn test_post_link() {
        let mut p = post("9");
        p.url = Some("https://example.blogspot.com/2025/01/post.html".to_string());
        assert_eq!(p.link(), Some("https://example.blogspot.com/2025/01/post.html"));
        p.url = Some(String::new());
        assert_eq!(p.link(), None);
    }
}
