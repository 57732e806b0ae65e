//! Memory timeline state: per-year photo groups with expand/collapse and a
//! presentation-only shuffled display order.
//!
//! The photo data itself is loaded once (see [`crate::media`]) and treated as
//! read-only; this module owns only the ephemeral view state. The display
//! order is reshuffled exactly on the closed-to-open transition edge, never
//! on render, so re-rendering an open group keeps visual continuity.

use rand::seq::SliceRandom;
use rand::Rng;

/// One displayable image. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// Path (or URL) the view hands to the image element.
    pub source_path: String,
    /// Human caption derived from the filename.
    pub caption: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// All photos for one configured year. Groups with zero photos still render
/// as a timeline node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGroup {
    pub year: i32,
    pub photos: Vec<Photo>,
}

/// Cap on photos shown per year.
pub const MAX_PHOTOS_PER_YEAR: usize = 24;
/// Thumbnails in the always-visible preview strip.
pub const PREVIEW_COUNT: usize = 4;
/// Photos in the expanded grid.
pub const GRID_COUNT: usize = 12;

/// Unbiased random permutation of `[0, len)` (Fisher-Yates via
/// `SliceRandom::shuffle`). Pure given the injected rng, which keeps the
/// permutation assertions in tests deterministic.
pub fn shuffled_order(len: usize, rng: &mut impl Rng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    order
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct GroupView {
    open: bool,
    display_order: Vec<usize>,
}

/// Ephemeral view state for the whole timeline, one entry per year group.
/// Reset by dropping it on navigation away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineState {
    entries: Vec<GroupView>,
}

impl TimelineState {
    /// All groups start expanded with a freshly shuffled order, matching the
    /// page's open-by-default presentation.
    pub fn new(groups: &[YearGroup], rng: &mut impl Rng) -> Self {
        let entries = groups
            .iter()
            .map(|g| GroupView {
                open: true,
                display_order: shuffled_order(g.photos.len(), rng),
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_open(&self, idx: usize) -> bool {
        self.entries.get(idx).map(|e| e.open).unwrap_or(false)
    }

    /// Flip a group open/closed. Only the closed-to-open edge reshuffles;
    /// closing keeps the current order.
    pub fn toggle(&mut self, idx: usize, rng: &mut impl Rng) {
        let Some(entry) = self.entries.get_mut(idx) else {
            tracing::warn!("toggle on unknown timeline group {}", idx);
            return;
        };
        entry.open = !entry.open;
        if entry.open && entry.display_order.len() > 1 {
            entry.display_order = shuffled_order(entry.display_order.len(), rng);
        }
    }

    /// Current display order (original photo indices) for a group.
    pub fn display_order(&self, idx: usize) -> &[usize] {
        self.entries
            .get(idx)
            .map(|e| e.display_order.as_slice())
            .unwrap_or(&[])
    }

    /// First [`PREVIEW_COUNT`] entries of the display order, shown whether or
    /// not the group is open.
    pub fn preview(&self, idx: usize) -> &[usize] {
        let order = self.display_order(idx);
        &order[..order.len().min(PREVIEW_COUNT)]
    }

    /// First [`GRID_COUNT`] entries of the display order, for the expanded
    /// grid.
    pub fn grid(&self, idx: usize) -> &[usize] {
        let order = self.display_order(idx);
        &order[..order.len().min(GRID_COUNT)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn photo(name: &str) -> Photo {
        Photo {
            source_path: format!("/memories/2021/{name}.jpg"),
            caption: name.to_string(),
            width: None,
            height: None,
        }
    }

    fn groups(counts: &[usize]) -> Vec<YearGroup> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &n)| YearGroup {
                year: 2019 + i as i32,
                photos: (0..n).map(|p| photo(&format!("p{p}"))).collect(),
            })
            .collect()
    }

    fn is_permutation(order: &[usize], len: usize) -> bool {
        let mut seen = vec![false; len];
        order.len() == len
            && order.iter().all(|&i| {
                let fresh = i < len && !seen[i];
                if fresh {
                    seen[i] = true;
                }
                fresh
            })
    }

    #[test]
    fn starts_open_with_permuted_orders() {
        let groups = groups(&[5, 0, 12]);
        let mut rng = StdRng::seed_from_u64(7);
        let state = TimelineState::new(&groups, &mut rng);
        for (idx, g) in groups.iter().enumerate() {
            assert!(state.is_open(idx));
            assert!(is_permutation(state.display_order(idx), g.photos.len()));
        }
    }

    #[test]
    fn reshuffles_only_on_open_edge() {
        let groups = groups(&[10]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut state = TimelineState::new(&groups, &mut rng);

        let before = state.display_order(0).to_vec();
        state.toggle(0, &mut rng); // open -> closed
        assert!(!state.is_open(0));
        assert_eq!(state.display_order(0), before.as_slice());

        state.toggle(0, &mut rng); // closed -> open: reshuffle
        assert!(state.is_open(0));
        assert!(is_permutation(state.display_order(0), 10));
    }

    #[test]
    fn preview_and_grid_are_prefixes_of_the_order() {
        let groups = groups(&[20]);
        let mut rng = StdRng::seed_from_u64(3);
        let state = TimelineState::new(&groups, &mut rng);
        let order = state.display_order(0);
        assert_eq!(state.preview(0), &order[..PREVIEW_COUNT]);
        assert_eq!(state.grid(0), &order[..GRID_COUNT]);
    }

    #[test]
    fn short_groups_truncate_preview_and_grid() {
        let groups = groups(&[2, 0]);
        let mut rng = StdRng::seed_from_u64(9);
        let state = TimelineState::new(&groups, &mut rng);
        assert_eq!(state.preview(0).len(), 2);
        assert_eq!(state.grid(0).len(), 2);
        assert!(state.preview(1).is_empty());
        assert!(state.grid(1).is_empty());
    }

    #[test]
    fn out_of_range_group_is_ignored() {
        let groups = groups(&[3]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = TimelineState::new(&groups, &mut rng);
        state.toggle(5, &mut rng);
        assert!(state.display_order(5).is_empty());
        assert!(!state.is_open(5));
    }

    #[test]
    fn shuffled_order_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(1234);
        for len in [0usize, 1, 2, 7, 24] {
            assert!(is_permutation(&shuffled_order(len, &mut rng), len));
        }
    }
}
