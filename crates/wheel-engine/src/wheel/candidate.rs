use serde::Serialize;

use crate::error::AcquireError;

/// Number of sectors on the wheel.
pub const CANDIDATE_COUNT: usize = 4;

/// Sector fill colors, assigned in acquisition order.
pub const DEFAULT_PALETTE: Palette = Palette([
    "#F87171", "#FBBF24", "#34D399", "#60A5FA", "#818CF8",
]);

/// Fixed table of sector colors (CSS hex).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette(pub [&'static str; 5]);

impl Palette {
    /// Color for the sector at `index`. Wraps past the end of the table.
    pub fn color(&self, index: usize) -> &'static str {
        self.0[index % self.0.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        DEFAULT_PALETTE
    }
}

/// Stable identifier of a candidate, assigned in acquisition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ItemId(pub u32);

/// One sector's worth of data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateItem {
    pub id: ItemId,
    pub name: String,
    pub url: String,
    /// Relative sector size. Always 1, so all sectors are equal.
    pub weight: u32,
    pub color: &'static str,
}

/// The wheel's items: exactly [`CANDIDATE_COUNT`] entries with distinct names,
/// in the order they were acquired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CandidateSet {
    items: Vec<CandidateItem>,
}

impl CandidateSet {
    /// Validate and freeze a fully staged list of items.
    pub fn new(items: Vec<CandidateItem>) -> Result<Self, AcquireError> {
        if items.len() != CANDIDATE_COUNT {
            return Err(AcquireError::InvalidSet(format!(
                "expected {} items, got {}",
                CANDIDATE_COUNT,
                items.len()
            )));
        }
        for (i, item) in items.iter().enumerate() {
            if items[..i].iter().any(|other| other.name == item.name) {
                return Err(AcquireError::InvalidSet(format!(
                    "duplicate name {:?}",
                    item.name
                )));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[CandidateItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&CandidateItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sector weights in set order.
    pub fn weights(&self) -> Vec<u32> {
        self.items.iter().map(|item| item.weight).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CandidateItem> {
        self.items.iter()
    }
}

#[cfg(test)]
pub(crate) fn sample_set(names: [&str; CANDIDATE_COUNT]) -> CandidateSet {
    let items = names
        .iter()
        .enumerate()
        .map(|(i, name)| CandidateItem {
            id: ItemId(i as u32),
            name: name.to_string(),
            url: format!("https://example.test/{}", i),
            weight: 1,
            color: DEFAULT_PALETTE.color(i),
        })
        .collect();
    CandidateSet::new(items).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_assigns_in_order() {
        assert_eq!(DEFAULT_PALETTE.color(0), "#F87171");
        assert_eq!(DEFAULT_PALETTE.color(3), "#60A5FA");
        assert_eq!(DEFAULT_PALETTE.color(5), "#F87171");
    }

    #[test]
    fn accepts_four_distinct_names() {
        let set = sample_set(["Carnitas", "Al Pastor", "Barbacoa", "Chorizo"]);
        assert_eq!(set.len(), 4);
        assert_eq!(set.weights(), vec![1, 1, 1, 1]);
        assert_eq!(set.get(1).unwrap().name, "Al Pastor");
    }

    #[test]
    fn rejects_wrong_length() {
        let set = sample_set(["A", "B", "C", "D"]);
        let mut items = set.items().to_vec();
        items.pop();
        assert!(matches!(CandidateSet::new(items), Err(AcquireError::InvalidSet(_))));
    }

    #[test]
    fn rejects_duplicate_names() {
        let set = sample_set(["A", "B", "C", "D"]);
        let mut items = set.items().to_vec();
        items[3].name = "B".to_string();
        let err = CandidateSet::new(items).unwrap_err();
        assert!(err.to_string().contains("duplicate name \"B\""));
    }

    #[test]
    fn names_compare_exactly() {
        // Case and whitespace differences are distinct names
        let set = sample_set(["Carnitas", "carnitas", "Carnitas ", "CARNITAS"]);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn serializes_as_plain_list() {
        let set = sample_set(["A", "B", "C", "D"]);
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json[0]["name"], "A");
        assert_eq!(json[2]["color"], "#34D399");
        assert_eq!(json[3]["id"], 3);
    }
}
