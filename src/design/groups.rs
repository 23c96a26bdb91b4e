//! Point groups and group-relative indexing.
//!
//! The v points are split into `count` consecutive groups of `size` points
//! each, optionally followed by a single fixed point (∞) that belongs to no
//! group. Group `g` (0-based) holds points `g * size + 1 ..= (g + 1) * size`,
//! and its `x`-th point corresponds to field element `x`.

use super::Point;
use crate::gf::DynamicGf;

/// Index arithmetic over equally sized point groups.
///
/// ```
/// use kirkman::design::PointGroups;
/// use kirkman::gf::DynamicGf;
///
/// let groups = PointGroups::new(DynamicGf::new(7).unwrap(), 2, true);
/// assert_eq!(groups.total_points(), 15);
/// assert_eq!(groups.point(1, 0), 8);
/// assert_eq!(groups.add_mod(5, 4), 2);          // wraps inside the group
/// assert_eq!(groups.locate(1, 5, 4), 10);       // second group, element 2
/// assert_eq!(groups.fixed_point(), Some(15));
/// ```
#[derive(Debug, Clone)]
pub struct PointGroups {
    field: DynamicGf,
    size: u32,
    count: u32,
    fixed_point: bool,
}

impl PointGroups {
    /// Split points into `count` groups of `field.order()` points, plus one
    /// fixed point if `fixed_point` is set.
    #[must_use]
    pub fn new(field: DynamicGf, count: u32, fixed_point: bool) -> Self {
        let size = field.order();
        Self {
            field,
            size,
            count,
            fixed_point,
        }
    }

    /// The field indexing each group.
    #[must_use]
    pub fn field(&self) -> &DynamicGf {
        &self.field
    }

    /// Points per group.
    #[must_use]
    pub fn group_size(&self) -> u32 {
        self.size
    }

    /// Number of groups.
    #[must_use]
    pub fn group_count(&self) -> u32 {
        self.count
    }

    /// Total number of points, including the fixed point.
    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.size * self.count + u32::from(self.fixed_point)
    }

    /// The point outside every group, if there is one. Always the last point.
    #[must_use]
    pub fn fixed_point(&self) -> Option<Point> {
        self.fixed_point.then(|| self.size * self.count + 1)
    }

    /// Translate the group index `number` by `addition`, staying inside the
    /// group's index window `0..size`.
    ///
    /// This is field addition in GF(size), so it is plain `(a + b) mod q` for
    /// prime q and coefficient-wise addition for extension fields. Inputs are
    /// reduced into the window first.
    #[must_use]
    pub fn add_mod(&self, number: u32, addition: u32) -> u32 {
        self.field.add(number % self.size, addition % self.size)
    }

    /// The point at group index `index` of group `group` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `group >= group_count()` or `index >= group_size()`; both
    /// are construction bugs rather than input errors.
    #[must_use]
    pub fn point(&self, group: u32, index: u32) -> Point {
        assert!(
            group < self.count,
            "group {} out of range for {} groups",
            group,
            self.count
        );
        assert!(
            index < self.size,
            "index {} out of range for group size {}",
            index,
            self.size
        );
        group * self.size + index + 1
    }

    /// The point of `group` at field element `element` translated by `offset`.
    #[must_use]
    pub fn locate(&self, group: u32, element: u32, offset: u32) -> Point {
        self.point(group, self.add_mod(element, offset))
    }

    /// The group and index of `point`, or `None` for the fixed point and
    /// points out of range.
    #[must_use]
    pub fn position(&self, point: Point) -> Option<(u32, u32)> {
        let zero_based = point.checked_sub(1)?;
        let group = zero_based / self.size;
        (group < self.count).then(|| (group, zero_based % self.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_groups_with_fixed_point() {
        let groups = PointGroups::new(DynamicGf::new(7).unwrap(), 2, true);
        assert_eq!(groups.group_size(), 7);
        assert_eq!(groups.group_count(), 2);
        assert_eq!(groups.total_points(), 15);
        assert_eq!(groups.fixed_point(), Some(15));
        assert_eq!(groups.point(0, 0), 1);
        assert_eq!(groups.point(0, 6), 7);
        assert_eq!(groups.point(1, 6), 14);
    }

    #[test]
    fn test_three_groups() {
        let groups = PointGroups::new(DynamicGf::new(7).unwrap(), 3, false);
        assert_eq!(groups.total_points(), 21);
        assert_eq!(groups.fixed_point(), None);
        assert_eq!(groups.point(2, 6), 21);
    }

    #[test]
    fn test_add_mod_stays_in_window() {
        let groups = PointGroups::new(DynamicGf::new(7).unwrap(), 3, false);
        for number in 0..7 {
            for addition in 0..7 {
                let sum = groups.add_mod(number, addition);
                assert_eq!(sum, (number + addition) % 7);
            }
        }
        // same window regardless of which group is indexed
        assert_eq!(groups.locate(0, 6, 3), 3);
        assert_eq!(groups.locate(1, 6, 3), 10);
        assert_eq!(groups.locate(2, 6, 3), 17);
    }

    #[test]
    fn test_add_mod_extension_field() {
        let groups = PointGroups::new(DynamicGf::new(25).unwrap(), 2, true);
        // (4 + 1x) + (1 + 4x) = 0 in GF(5^2)
        assert_eq!(groups.add_mod(9, 21), 0);
        // each translation is a bijection of the window
        let mut image: Vec<u32> = (0..25).map(|x| groups.add_mod(x, 13)).collect();
        image.sort_unstable();
        assert_eq!(image, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_position_round_trip() {
        let groups = PointGroups::new(DynamicGf::new(13).unwrap(), 2, true);
        assert_eq!(groups.position(1), Some((0, 0)));
        assert_eq!(groups.position(14), Some((1, 0)));
        assert_eq!(groups.position(26), Some((1, 12)));
        assert_eq!(groups.position(27), None); // fixed point
        assert_eq!(groups.position(0), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_point_out_of_range() {
        let groups = PointGroups::new(DynamicGf::new(7).unwrap(), 2, true);
        let _ = groups.point(2, 0);
    }
}
