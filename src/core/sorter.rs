use crate::core::timestamp::{parse_timestamp, DisplayZone};
use crate::domain::model::Post;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Orders parsed instants ascending; `None` is greater than every instant
/// and equal to other `None`s.
fn compare_instants(a: &Option<DateTime<Utc>>, b: &Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Returns the posts ordered by published instant, ascending.
///
/// The sort is stable: equal instants keep their input order. Posts whose
/// timestamp does not parse sink to the end, also in input order.
pub fn sort_posts(posts: Vec<Post>, zone: &DisplayZone) -> Vec<Post> {
    let mut keyed: Vec<(Option<DateTime<Utc>>, Post)> = posts
        .into_iter()
        .map(|post| (parse_timestamp(post.timestamp(), zone), post))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare_instants(a, b));
    keyed.into_iter().map(|(_, post)| post).collect()
}
