//! Which axis crossings a polyline stretch may connect.
//!
//! Segment group `g` covers axes `2g`, `2g + 1` and `2g + 2`; the last group
//! covers only two axes when the axis count is even. A group is closed by
//! its last axis, which is the reference point for span offsets.

/// Offsets of the connected axes relative to the last axis of the window
pub type SpanOffsets = &'static [isize];

/// Decide the connected span for a 2- or 3-wide validity window.
///
/// Returns `None` when no segment is drawn. A missing middle crossing is
/// never bridged.
pub fn decide(window: &[bool]) -> Option<SpanOffsets> {
    match window {
        [true, true] => Some(&[-1, 0]),
        [true, true, true] => Some(&[-2, -1, 0]),
        [true, true, false] => Some(&[-2, -1]),
        [false, true, true] => Some(&[-1, 0]),
        _ => None,
    }
}

/// Window closed by one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupWindow {
    pub group: usize,
    pub first_axis: usize,
    pub len: usize,
}

impl GroupWindow {
    pub fn last_axis(&self) -> usize {
        self.first_axis + self.len - 1
    }
}

/// Number of segment groups for `width` axes
pub fn group_count(width: usize) -> usize {
    width / 2
}

/// The window `axis` closes, if any: every even axis after the first,
/// plus the final axis.
pub fn closing_window(axis: usize, width: usize) -> Option<GroupWindow> {
    if axis == 0 || axis >= width {
        return None;
    }
    if axis % 2 == 0 {
        Some(GroupWindow {
            group: axis / 2 - 1,
            first_axis: axis - 2,
            len: 3,
        })
    } else if axis == width - 1 {
        Some(GroupWindow {
            group: (axis - 1) / 2,
            first_axis: axis - 1,
            len: 2,
        })
    } else {
        None
    }
}

/// Groups whose window contains `axis`: one for interior and edge axes,
/// two for an axis shared between neighbouring groups.
pub fn groups_touching(axis: usize, width: usize) -> impl Iterator<Item = usize> {
    let first = (axis.saturating_sub(2) + 1) / 2;
    let count = group_count(width);
    (first..=axis / 2).filter(move |&g| g < count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_wide_windows() {
        assert_eq!(decide(&[true, true]), Some(&[-1, 0][..]));
        assert_eq!(decide(&[true, false]), None);
        assert_eq!(decide(&[false, true]), None);
        assert_eq!(decide(&[false, false]), None);
    }

    #[test]
    fn test_three_wide_windows() {
        assert_eq!(decide(&[true, true, true]), Some(&[-2, -1, 0][..]));
        assert_eq!(decide(&[true, true, false]), Some(&[-2, -1][..]));
        assert_eq!(decide(&[false, true, true]), Some(&[-1, 0][..]));

        for window in [
            [false, false, false],
            [false, true, false],
            [true, false, false],
            [false, false, true],
            [true, false, true],
        ] {
            assert_eq!(decide(&window), None, "{window:?}");
        }
    }

    #[test]
    fn test_other_lengths() {
        assert_eq!(decide(&[]), None);
        assert_eq!(decide(&[true]), None);
        assert_eq!(decide(&[true; 4]), None);
    }

    #[test]
    fn test_group_windows() {
        assert_eq!(group_count(0), 0);
        assert_eq!(group_count(1), 0);
        assert_eq!(group_count(2), 1);
        assert_eq!(group_count(3), 1);
        assert_eq!(group_count(4), 2);
        assert_eq!(group_count(5), 2);

        let closing: Vec<_> = (0..4).filter_map(|j| closing_window(j, 4)).collect();
        assert_eq!(
            closing,
            vec![
                GroupWindow { group: 0, first_axis: 0, len: 3 },
                GroupWindow { group: 1, first_axis: 2, len: 2 },
            ]
        );
        assert_eq!(closing[1].last_axis(), 3);

        let closing: Vec<_> = (0..5).filter_map(|j| closing_window(j, 5)).collect();
        assert_eq!(closing.len(), 2);
        assert_eq!(closing[1], GroupWindow { group: 1, first_axis: 2, len: 3 });

        assert_eq!(closing_window(1, 2), Some(GroupWindow { group: 0, first_axis: 0, len: 2 }));
        assert_eq!(closing_window(0, 1), None);
    }

    #[test]
    fn test_groups_touching() {
        let touching = |axis, width| groups_touching(axis, width).collect::<Vec<_>>();
        assert_eq!(touching(0, 5), vec![0]);
        assert_eq!(touching(1, 5), vec![0]);
        assert_eq!(touching(2, 5), vec![0, 1]);
        assert_eq!(touching(3, 5), vec![1]);
        assert_eq!(touching(4, 5), vec![1]);
        assert_eq!(touching(3, 4), vec![1]);
        assert_eq!(touching(0, 1), Vec::<usize>::new());
    }
}
