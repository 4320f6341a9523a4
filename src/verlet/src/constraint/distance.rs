use crate::point::{PointId, PointMap};
use protocol::pr_model::PrStick;

// floor for the current length, coincident endpoints would divide by zero
const MIN_DISTANCE: f32 = 0.01;

#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint {
	ps: [PointId; 2],
	l0: f32,
}

impl DistanceConstraint {
	/// Rest length is the distance between `p1` and `p2` right now.
	///
	/// Returns `None` if either handle is stale or both are the same point.
	pub fn new(p1: PointId, p2: PointId, points: &PointMap) -> Option<Self> {
		if p1 == p2 {
			return None;
		}
		let pos1 = points.get(p1)?.get_pos();
		let pos2 = points.get(p2)?.get_pos();
		Some(Self::new_with_l0(p1, p2, (pos2 - pos1).magnitude()))
	}

	pub fn new_with_l0(p1: PointId, p2: PointId, l0: f32) -> Self {
		Self { ps: [p1, p2], l0 }
	}

	pub fn endpoints(&self) -> [PointId; 2] {
		self.ps
	}

	pub fn rest_length(&self) -> f32 {
		self.l0
	}

	pub fn touches(&self, id: PointId) -> bool {
		self.ps.contains(&id)
	}

	pub fn length(&self, points: &PointMap) -> Option<f32> {
		let pos1 = points.get(self.ps[0])?.get_pos();
		let pos2 = points.get(self.ps[1])?.get_pos();
		Some((pos2 - pos1).magnitude())
	}

	/// One relaxation pass towards the rest length.
	///
	/// Free endpoints share the correction, a single free endpoint takes all
	/// of it, two locked endpoints stay where they are.
	pub fn relax(&self, points: &mut PointMap) {
		let [p1, p2] = match points.get_disjoint_mut(self.ps) {
			Some(ps) => ps,
			None => return,
		};
		let dp = p2.get_pos() - p1.get_pos();
		let l = dp.magnitude().max(MIN_DISTANCE);
		let percent = (self.l0 - l) / l / 2.;
		let offset = dp * percent;
		match (p1.is_locked(), p2.is_locked()) {
			(false, false) => {
				p1.add_pos(-offset);
				p2.add_pos(offset);
			}
			(true, false) => p2.add_pos(offset * 2.),
			(false, true) => p1.add_pos(-offset * 2.),
			(true, true) => {}
		}
	}

	pub fn render(&self, points: &PointMap) -> Option<PrStick> {
		let pos1 = points.get(self.ps[0])?.get_pos();
		let pos2 = points.get(self.ps[1])?.get_pos();
		Some(PrStick {
			points: [self.ps[0].to_raw(), self.ps[1].to_raw()],
			ends: [[pos1[0], pos1[1]], [pos2[0], pos2[1]]],
		})
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::point::PointMass;
	use crate::V2;

	fn pair(a: V2, b: V2, la: bool, lb: bool) -> (PointMap, PointId, PointId) {
		let mut points = PointMap::with_key();
		let p1 = points.insert(PointMass::new(a, a, la));
		let p2 = points.insert(PointMass::new(b, b, lb));
		(points, p1, p2)
	}

	#[test]
	fn test_rest_length_captured() {
		let (mut points, p1, p2) =
			pair(V2::new(0., 0.), V2::new(3., 4.), false, false);
		let dc = DistanceConstraint::new(p1, p2, &points).unwrap();
		assert!((dc.rest_length() - 5.).abs() < 1e-6);
		points[p2].add_pos(V2::new(10., 0.));
		assert!((dc.rest_length() - 5.).abs() < 1e-6);
		assert!(DistanceConstraint::new(p1, p1, &points).is_none());
	}

	#[test]
	fn test_convergence() {
		let (mut points, p1, p2) =
			pair(V2::new(100., 100.), V2::new(110., 100.), false, false);
		let dc = DistanceConstraint::new_with_l0(p1, p2, 4.);
		points[p2].add_pos(V2::new(0., 7.));
		let mut err = (dc.length(&points).unwrap() - 4.).abs();
		for _ in 0..20 {
			dc.relax(&mut points);
			let next = (dc.length(&points).unwrap() - 4.).abs();
			assert!(next <= err + 1e-5);
			err = next;
		}
		assert!(err < 1e-3);
	}

	#[test]
	fn test_free_pair_symmetric() {
		let (mut points, p1, p2) =
			pair(V2::new(0., 0.), V2::new(20., 0.), false, false);
		let dc = DistanceConstraint::new_with_l0(p1, p2, 10.);
		dc.relax(&mut points);
		assert!((points[p1].get_pos()[0] - 5.).abs() < 1e-5);
		assert!((points[p2].get_pos()[0] - 15.).abs() < 1e-5);
		// pushes apart when compressed
		let dc = DistanceConstraint::new_with_l0(p1, p2, 30.);
		dc.relax(&mut points);
		assert!((points[p1].get_pos()[0] + 5.).abs() < 1e-5);
		assert!((points[p2].get_pos()[0] - 25.).abs() < 1e-5);
	}

	#[test]
	fn test_anchored_full_correction() {
		for (la, lb) in [(true, false), (false, true)] {
			let (mut points, p1, p2) =
				pair(V2::new(10., 10.), V2::new(40., 50.), la, lb);
			let dc = DistanceConstraint::new_with_l0(p1, p2, 12.);
			let anchor = if la { p1 } else { p2 };
			let before = points[anchor].get_pos();
			dc.relax(&mut points);
			assert!((dc.length(&points).unwrap() - 12.).abs() < 1e-4);
			assert_eq!(points[anchor].get_pos(), before);
		}
	}

	#[test]
	fn test_both_locked() {
		let (mut points, p1, p2) =
			pair(V2::new(0., 0.), V2::new(20., 0.), true, true);
		let dc = DistanceConstraint::new_with_l0(p1, p2, 5.);
		dc.relax(&mut points);
		assert_eq!(points[p1].get_pos(), V2::new(0., 0.));
		assert_eq!(points[p2].get_pos(), V2::new(20., 0.));
	}

	#[test]
	fn test_coincident_endpoints() {
		let (mut points, p1, p2) =
			pair(V2::new(5., 5.), V2::new(5., 5.), false, false);
		let dc = DistanceConstraint::new_with_l0(p1, p2, 2.);
		dc.relax(&mut points);
		let pos1 = points[p1].get_pos();
		let pos2 = points[p2].get_pos();
		assert!(pos1[0].is_finite() && pos1[1].is_finite());
		assert_eq!(pos1, pos2);
	}

	#[test]
	fn test_render() {
		let (points, p1, p2) =
			pair(V2::new(1., 2.), V2::new(3., 4.), false, true);
		let dc = DistanceConstraint::new(p1, p2, &points).unwrap();
		let pr = dc.render(&points).unwrap();
		assert_eq!(pr.ends, [[1., 2.], [3., 4.]]);
		assert_eq!(pr.points, [p1.to_raw(), p2.to_raw()]);
	}
}
