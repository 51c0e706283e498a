//! Display ordering: viewed items first, newest unviewed after.

use std::collections::HashMap;

use vecto_model::{Video, VideoId};

/// Order `items` for display.
///
/// Items whose id appears in `viewed_ids` come first, in `viewed_ids` order
/// (most recent view first). The rest follow by creation time, newest
/// first. Both sorts are stable, so ties keep their input order.
pub fn order_for_display<'a>(
    items: &'a [Video],
    viewed_ids: &[VideoId],
) -> Vec<&'a Video> {
    let positions: HashMap<&str, usize> = viewed_ids
        .iter()
        .enumerate()
        .rev()
        .map(|(pos, id)| (id.as_str(), pos))
        .collect();

    let (mut viewed, mut unviewed): (Vec<&Video>, Vec<&Video>) = items
        .iter()
        .partition(|video| positions.contains_key(video.id.as_str()));

    viewed.sort_by_key(|video| positions[video.id.as_str()]);
    unviewed.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    viewed.extend(unviewed);
    viewed
}

/// Newest first, stable for equal timestamps.
pub fn sort_newest_first(videos: &mut [Video]) {
    videos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeDelta};

    fn video(id: &str, created_secs: i64) -> Video {
        Video::new(id, id, DateTime::UNIX_EPOCH + TimeDelta::seconds(created_secs))
    }

    fn ids(videos: &[&Video]) -> Vec<String> {
        videos.iter().map(|v| v.id.to_string()).collect()
    }

    #[test]
    fn viewed_first_then_newest() {
        let items = vec![video("A", 1), video("B", 3), video("C", 2)];
        let ordered = order_for_display(&items, &[VideoId::from("C")]);
        assert_eq!(ids(&ordered), ["C", "B", "A"]);
    }

    #[test]
    fn viewed_follow_history_order() {
        let items = vec![video("A", 1), video("B", 2), video("C", 3), video("D", 4)];
        let viewed = [VideoId::from("B"), VideoId::from("D"), VideoId::from("A")];
        let ordered = order_for_display(&items, &viewed);
        assert_eq!(ids(&ordered), ["B", "D", "A", "C"]);
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let items = vec![video("X", 5), video("Y", 5), video("Z", 5)];
        let ordered = order_for_display(&items, &[]);
        assert_eq!(ids(&ordered), ["X", "Y", "Z"]);
    }

    #[test]
    fn duplicate_items_stay_together_and_stable() {
        let items = vec![video("A", 1), video("B", 1), video("A", 9)];
        let ordered = order_for_display(&items, &[VideoId::from("A")]);
        assert_eq!(ordered[0].created_at.timestamp(), 1);
        assert_eq!(ordered[1].created_at.timestamp(), 9);
        assert_eq!(ordered[2].id.as_str(), "B");
    }

    #[test]
    fn history_ids_missing_from_items_are_skipped() {
        let items = vec![video("A", 1)];
        let ordered = order_for_display(&items, &[VideoId::from("gone"), VideoId::from("A")]);
        assert_eq!(ids(&ordered), ["A"]);
    }
}
