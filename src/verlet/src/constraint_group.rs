use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::config::IterationOrder;
use crate::constraint::distance::DistanceConstraint;
use crate::point::{PointId, PointMap};
use protocol::pr_model::PrStick;

#[derive(Default)]
pub struct ConstraintGroup {
	constraints: Vec<DistanceConstraint>,
	order: Vec<usize>,
}

impl ConstraintGroup {
	pub fn add_constraint(&mut self, constraint: DistanceConstraint) {
		self.constraints.push(constraint);
	}

	pub fn len(&self) -> usize {
		self.constraints.len()
	}

	pub fn constraints(&self) -> &[DistanceConstraint] {
		&self.constraints
	}

	/// Drops every constraint touching `id`, returns how many went away.
	pub fn remove_touching(&mut self, id: PointId) -> usize {
		let len = self.constraints.len();
		self.constraints.retain(|c| !c.touches(id));
		len - self.constraints.len()
	}

	pub fn solve_constraints(
		&mut self,
		points: &mut PointMap,
		order: IterationOrder,
		rng: &mut StdRng,
	) {
		self.order.clear();
		self.order.extend(0..self.constraints.len());
		if order == IterationOrder::Shuffled {
			self.order.shuffle(rng);
		}
		for &idx in self.order.iter() {
			self.constraints[idx].relax(points);
		}
	}

	pub fn pr_constraints(&self, points: &PointMap) -> Vec<PrStick> {
		self.constraints
			.iter()
			.filter_map(|c| c.render(points))
			.collect()
	}
}
