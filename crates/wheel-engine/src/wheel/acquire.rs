//! Candidate acquisition from a remote random-item source.
//!
//! Requests are issued strictly one after another: whether to keep or
//! discard each answer depends on what was already collected. Accepted items
//! are staged locally and the finished [`CandidateSet`] is returned in one
//! piece, so callers never observe a partially filled wheel.

use std::future::Future;

use serde::Deserialize;

use crate::error::AcquireError;
use super::candidate::{CandidateItem, CandidateSet, ItemId, Palette, CANDIDATE_COUNT};

/// A named item with a reference link, as returned by the source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RandomItem {
    pub name: String,
    pub url: String,
}

/// Response body of the random-item endpoint. Only the base layer is used.
#[derive(Debug, Deserialize)]
struct RandomItemResponse {
    base_layer: RandomItem,
}

impl RandomItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Parse the endpoint's JSON body, e.g.
    /// `{"base_layer": {"name": "Carnitas", "url": "https://..."}, "shell": {...}}`.
    pub fn from_json(json: &str) -> Result<Self, AcquireError> {
        let response: RandomItemResponse = serde_json::from_str(json)?;
        Ok(response.base_layer)
    }
}

/// Something that yields one random item per call.
pub trait ItemSource {
    fn next_item(&mut self) -> impl Future<Output = Result<RandomItem, AcquireError>>;
}

/// Query `source` until [`CANDIDATE_COUNT`] distinct names are collected.
///
/// Duplicates are dropped without consuming an id or a palette slot. There is
/// no retry cap: a source that never yields enough distinct names keeps this
/// future pending forever. The first source error aborts acquisition.
pub async fn acquire<S: ItemSource>(
    source: &mut S,
    palette: &Palette,
) -> Result<CandidateSet, AcquireError> {
    let mut staged: Vec<CandidateItem> = Vec::with_capacity(CANDIDATE_COUNT);
    let mut requests = 0u32;

    while staged.len() < CANDIDATE_COUNT {
        let item = source.next_item().await?;
        requests += 1;

        if staged.iter().any(|c| c.name == item.name) {
            log::debug!("acquire: discarding duplicate {:?}", item.name);
            continue;
        }

        let index = staged.len();
        log::debug!("acquire: accepted {:?} as sector {}", item.name, index);
        staged.push(CandidateItem {
            id: ItemId(index as u32),
            name: item.name,
            url: item.url,
            weight: 1,
            color: palette.color(index),
        });
    }

    log::info!("acquire: {} candidates after {} requests", staged.len(), requests);
    CandidateSet::new(staged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use crate::wheel::candidate::DEFAULT_PALETTE;

    /// Replays a fixed script of responses.
    struct Scripted {
        replies: VecDeque<Result<RandomItem, AcquireError>>,
        calls: usize,
    }

    impl Scripted {
        fn names(names: &[&str]) -> Self {
            Self {
                replies: names
                    .iter()
                    .map(|n| Ok(RandomItem::new(*n, format!("https://recipes.test/{}", n))))
                    .collect(),
                calls: 0,
            }
        }
    }

    impl ItemSource for Scripted {
        async fn next_item(&mut self) -> Result<RandomItem, AcquireError> {
            self.calls += 1;
            self.replies
                .pop_front()
                .unwrap_or_else(|| Err(AcquireError::Transport("script exhausted".into())))
        }
    }

    #[test]
    fn duplicates_are_discarded_and_colors_follow_acceptance_order() {
        let mut source = Scripted::names(&["Carnitas", "Carnitas", "Al Pastor", "Barbacoa", "Chorizo"]);
        let set = block_on(acquire(&mut source, &DEFAULT_PALETTE)).unwrap();

        let summary: Vec<(u32, &str, &str)> = set
            .iter()
            .map(|c| (c.id.0, c.name.as_str(), c.color))
            .collect();
        assert_eq!(
            summary,
            vec![
                (0, "Carnitas", "#F87171"),
                (1, "Al Pastor", "#FBBF24"),
                (2, "Barbacoa", "#34D399"),
                (3, "Chorizo", "#60A5FA"),
            ]
        );
        assert_eq!(source.calls, 5);
        assert!(set.iter().all(|c| c.weight == 1));
        assert_eq!(set.get(1).unwrap().url, "https://recipes.test/Al Pastor");
    }

    #[test]
    fn stops_as_soon_as_four_are_collected() {
        let mut source = Scripted::names(&["A", "B", "C", "D", "E", "F"]);
        let set = block_on(acquire(&mut source, &DEFAULT_PALETTE)).unwrap();
        assert_eq!(set.len(), 4);
        assert_eq!(source.calls, 4);
        assert_eq!(source.replies.len(), 2);
    }

    #[test]
    fn many_duplicates_still_yield_a_valid_set() {
        let mut source = Scripted::names(&["A", "A", "A", "B", "A", "B", "C", "C", "B", "D"]);
        let set = block_on(acquire(&mut source, &DEFAULT_PALETTE)).unwrap();
        let names: Vec<&str> = set.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        assert_eq!(source.calls, 10);
    }

    #[test]
    fn source_error_aborts_without_partial_result() {
        let mut source = Scripted::names(&["A", "B"]);
        source.replies.push_back(Err(AcquireError::Status(503)));
        let err = block_on(acquire(&mut source, &DEFAULT_PALETTE)).unwrap_err();
        assert!(matches!(err, AcquireError::Status(503)));
        assert_eq!(source.calls, 3);
    }

    #[test]
    fn parses_base_layer_from_endpoint_json() {
        let body = r#"{
            "base_layer": {"name": "Carnitas", "url": "https://github.com/x/carnitas.md", "recipe": "..."},
            "shell": {"name": "Corn tortillas", "url": "https://github.com/x/corn.md"}
        }"#;
        let item = RandomItem::from_json(body).unwrap();
        assert_eq!(item, RandomItem::new("Carnitas", "https://github.com/x/carnitas.md"));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(RandomItem::from_json("{}"), Err(AcquireError::Json(_))));
        assert!(matches!(RandomItem::from_json("<html>"), Err(AcquireError::Json(_))));
    }
}
