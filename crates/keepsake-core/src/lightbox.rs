//! Full-screen photo viewer state.
//!
//! The view holds an `Option<LightboxState>`; `None` means closed. Indices
//! refer to the group's *original* photo order, so a click on a shuffled
//! thumbnail must pass the index stored in the display order, not the grid
//! position.

use crate::timeline::YearGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxState {
    pub year_index: usize,
    pub photo_index: usize,
}

impl LightboxState {
    /// Open on a photo. A stale or out-of-range index degrades to a valid
    /// one via modulo instead of failing.
    pub fn open(groups: &[YearGroup], year_index: usize, photo_index: usize) -> Self {
        Self {
            year_index,
            photo_index: photo_index % Self::group_len(groups, year_index),
        }
    }

    /// Advance to the next photo, wrapping within the open group.
    pub fn next(&mut self, groups: &[YearGroup]) {
        let len = Self::group_len(groups, self.year_index);
        self.photo_index = (self.photo_index + 1) % len;
    }

    /// Step back to the previous photo, wrapping within the open group.
    pub fn prev(&mut self, groups: &[YearGroup]) {
        let len = Self::group_len(groups, self.year_index);
        self.photo_index = (self.photo_index + len - 1) % len;
    }

    /// The currently displayed photo, if the group still has one.
    pub fn photo<'a>(&self, groups: &'a [YearGroup]) -> Option<&'a crate::timeline::Photo> {
        groups.get(self.year_index)?.photos.get(self.photo_index)
    }

    // At least 1 so empty groups never divide by zero.
    fn group_len(groups: &[YearGroup], year_index: usize) -> usize {
        groups
            .get(year_index)
            .map(|g| g.photos.len())
            .unwrap_or(0)
            .max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::Photo;

    fn group_of(n: usize) -> Vec<YearGroup> {
        vec![YearGroup {
            year: 2021,
            photos: (0..n)
                .map(|i| Photo {
                    source_path: format!("/memories/2021/p{i}.jpg"),
                    caption: format!("p{i}"),
                    width: None,
                    height: None,
                })
                .collect(),
        }]
    }

    #[test]
    fn wraps_forward_through_all_photos() {
        let groups = group_of(3);
        let mut lb = LightboxState::open(&groups, 0, 2);
        assert_eq!(lb.photo_index, 2);
        lb.next(&groups);
        assert_eq!(lb.photo_index, 0);
        lb.next(&groups);
        lb.next(&groups);
        assert_eq!(lb.photo_index, 2);
    }

    #[test]
    fn wraps_backward_from_zero() {
        let groups = group_of(4);
        let mut lb = LightboxState::open(&groups, 0, 0);
        lb.prev(&groups);
        assert_eq!(lb.photo_index, 3);
    }

    #[test]
    fn open_clamps_out_of_range_index() {
        let groups = group_of(3);
        let lb = LightboxState::open(&groups, 0, 7);
        assert_eq!(lb.photo_index, 1);
    }

    #[test]
    fn empty_group_is_safe() {
        let groups = group_of(0);
        let mut lb = LightboxState::open(&groups, 0, 0);
        lb.next(&groups);
        lb.prev(&groups);
        assert_eq!(lb.photo_index, 0);
        assert!(lb.photo(&groups).is_none());
    }

    #[test]
    fn unknown_year_is_safe() {
        let groups = group_of(2);
        let lb = LightboxState::open(&groups, 9, 1);
        assert!(lb.photo(&groups).is_none());
    }

    #[test]
    fn shows_the_clicked_photo_not_the_grid_position() {
        // Simulate a shuffled preview strip: position 1 maps to original
        // index 2. Opening must show the photo the user actually clicked.
        let groups = group_of(3);
        let display_order = [1usize, 2, 0];
        let clicked_grid_position = 1;
        let original_index = display_order[clicked_grid_position];

        let lb = LightboxState::open(&groups, 0, original_index);
        assert_eq!(
            lb.photo(&groups).unwrap().source_path,
            groups[0].photos[2].source_path
        );
    }
}
