//! Builds the static page: a fixed shell wrapping one block per post.
//!
//! Content is trusted and embedded without escaping. The raw timestamp is
//! used unchanged as both the anchor `id` and the link fragment, so a post
//! can be deep-linked by the value it was published with.

use crate::core::timestamp::{format_timestamp, DisplayZone};
use crate::domain::model::{Post, RenderResult};
use std::fmt::Write;

pub const INVALID_TIMESTAMP_PLACEHOLDER: &str = "Invalid timestamp";

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <link href="https://maxcdn.bootstrapcdn.com/bootstrap/4.5.2/css/bootstrap.min.css" rel="stylesheet">
  </head>
  <body class="p-3">
"#;

const DOCUMENT_TAIL: &str = "  </body>\n</html>\n";

#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    zone: DisplayZone,
}

impl HtmlRenderer {
    pub fn new(zone: DisplayZone) -> Self {
        Self { zone }
    }

    pub fn zone(&self) -> &DisplayZone {
        &self.zone
    }

    /// Renders `posts` in the order given; callers sort first.
    pub fn render(&self, posts: &[Post]) -> RenderResult {
        let mut html = String::from(DOCUMENT_HEAD);
        let mut invalid_timestamps = 0;

        for post in posts {
            let formatted = match format_timestamp(post.timestamp(), &self.zone) {
                Some(formatted) => formatted,
                None => {
                    tracing::warn!(
                        "⚠️ FormatWarning: cannot parse timestamp '{}', showing placeholder",
                        post.timestamp()
                    );
                    invalid_timestamps += 1;
                    INVALID_TIMESTAMP_PLACEHOLDER.to_string()
                }
            };
            push_post(&mut html, post, &formatted);
        }

        // 結尾標籤只輸出一次
        html.push_str(DOCUMENT_TAIL);

        RenderResult {
            html,
            post_count: posts.len(),
            invalid_timestamps,
        }
    }
}

fn push_post(html: &mut String, post: &Post, formatted: &str) {
    let raw = post.timestamp();
    // Writing to a String cannot fail.
    let _ = write!(
        html,
        r##"    <div class="post">
      <a href="#{raw}" class="d-block h2 mt-3">{formatted}</a>
      <a id="{raw}"></a>
      <div class="pl-3">
        <div class="content">
          {content}
        </div>
        <div class="labels">
          {labels}
        </div>
      </div>
    </div>
"##,
        raw = raw,
        formatted = formatted,
        content = post.content,
        labels = post.joined_labels(),
    );
}
