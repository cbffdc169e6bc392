use serde::Deserialize;
use std::path::PathBuf;

/// One entry of the Blogger export. Fields the converter does not use are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    pub metadata: PostMetadata,
    pub content: String,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PostMetadata {
    pub published: Published,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Published {
    pub timestamp: String,
}

impl Post {
    pub fn new(timestamp: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            metadata: PostMetadata {
                published: Published {
                    timestamp: timestamp.into(),
                },
            },
            content: content.into(),
            labels: None,
        }
    }

    pub fn with_labels<I, L>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// The raw timestamp string exactly as it appears in the export.
    pub fn timestamp(&self) -> &str {
        &self.metadata.published.timestamp
    }

    /// Labels joined with ", "; absent or empty labels give an empty string.
    pub fn joined_labels(&self) -> String {
        match &self.labels {
            Some(labels) if !labels.is_empty() => labels.join(", "),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderResult {
    pub html: String,
    pub post_count: usize,
    pub invalid_timestamps: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    pub post_count: usize,
    pub invalid_timestamps: usize,
    /// `None` for dry runs.
    pub output_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let post: Post = serde_json::from_str(
            r#"{
                "metadata": {"published": {"timestamp": "2023-01-01T09:00:00Z"}, "author": "x"},
                "content": "<p>Hi</p>",
                "title": "ignored"
            }"#,
        )
        .unwrap();

        assert_eq!(post.timestamp(), "2023-01-01T09:00:00Z");
        assert_eq!(post.content, "<p>Hi</p>");
        assert_eq!(post.labels, None);
    }

    #[test]
    fn test_null_labels_are_absent() {
        let post: Post = serde_json::from_str(
            r#"{"metadata": {"published": {"timestamp": "t"}}, "content": "c", "labels": null}"#,
        )
        .unwrap();
        assert_eq!(post.labels, None);
        assert_eq!(post.joined_labels(), "");
    }

    #[test]
    fn test_joined_labels() {
        let post = Post::new("t", "c").with_labels(["a", "b"]);
        assert_eq!(post.joined_labels(), "a, b");

        let empty = Post::new("t", "c").with_labels(Vec::<String>::new());
        assert_eq!(empty.joined_labels(), "");
    }

    #[test]
    fn test_missing_content_is_rejected() {
        let result = serde_json::from_str::<Post>(
            r#"{"metadata": {"published": {"timestamp": "t"}}}"#,
        );
        let message = result.unwrap_err().to_string();
        assert!(message.contains("missing field `content`"));
    }
}
