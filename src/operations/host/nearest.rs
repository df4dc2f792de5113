use crate::math::{nearly_equal, Segment2};
use crate::model::WallId;

/// Walls tied at the minimum distance seen so far, in scan order.
///
/// The first wall of a tie group anchors the minimum: a later wall within
/// `tolerance` of it joins the group without moving the anchor, so the
/// group cannot drift further than `tolerance` from its first member.
#[derive(Debug)]
pub(super) struct NearestWalls {
    tolerance: f64,
    min_dist_sq: f64,
    walls: Vec<(WallId, Segment2)>,
}

impl NearestWalls {
    pub(super) fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            min_dist_sq: f64::INFINITY,
            walls: Vec::new(),
        }
    }

    /// Records a wall at squared distance `dist_sq` from the opening.
    pub(super) fn offer(&mut self, id: WallId, segment: Segment2, dist_sq: f64) {
        if self.walls.is_empty() {
            self.min_dist_sq = dist_sq;
            self.walls.push((id, segment));
        } else if nearly_equal(dist_sq, self.min_dist_sq, self.tolerance) {
            self.walls.push((id, segment));
        } else if dist_sq < self.min_dist_sq {
            self.min_dist_sq = dist_sq;
            self.walls.clear();
            self.walls.push((id, segment));
        }
    }

    pub(super) fn walls(&self) -> &[(WallId, Segment2)] {
        &self.walls
    }
}

#[cfg(test)]
mod tests {
    use slotmap::SlotMap;

    use super::*;
    use crate::math::Point2;

    fn ids(n: usize) -> Vec<WallId> {
        let mut map: SlotMap<WallId, ()> = SlotMap::with_key();
        (0..n).map(|_| map.insert(())).collect()
    }

    fn seg() -> Segment2 {
        Segment2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0))
    }

    #[test]
    fn keeps_every_tied_wall() {
        let id = ids(4);
        let mut n = NearestWalls::new(1e-3);
        n.offer(id[0], seg(), 1.0);
        n.offer(id[1], seg(), 1.0005);
        n.offer(id[2], seg(), 0.9995);
        n.offer(id[3], seg(), 5.0);
        let got: Vec<WallId> = n.walls().iter().map(|(w, _)| *w).collect();
        assert_eq!(got, vec![id[0], id[1], id[2]]);
    }

    #[test]
    fn strictly_nearer_wall_replaces_group() {
        let id = ids(3);
        let mut n = NearestWalls::new(1e-3);
        n.offer(id[0], seg(), 4.0);
        n.offer(id[1], seg(), 4.0);
        n.offer(id[2], seg(), 1.0);
        let got: Vec<WallId> = n.walls().iter().map(|(w, _)| *w).collect();
        assert_eq!(got, vec![id[2]]);
    }
}
