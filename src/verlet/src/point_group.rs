use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::config::{IterationOrder, WorldConfig};
use crate::point::{PointId, PointMap, PointMass};
use protocol::pr_model::PrPoint;

#[derive(Default)]
pub struct PointGroup {
	data: PointMap,
	order: Vec<PointId>,
}

impl PointGroup {
	pub fn add_point(&mut self, p: PointMass) -> PointId {
		self.data.insert(p)
	}

	pub fn remove_point(&mut self, id: PointId) -> Option<PointMass> {
		self.data.remove(id)
	}

	pub fn get(&self, id: PointId) -> Option<&PointMass> {
		self.data.get(id)
	}

	pub fn get_mut(&mut self, id: PointId) -> Option<&mut PointMass> {
		self.data.get_mut(id)
	}

	pub fn contains(&self, id: PointId) -> bool {
		self.data.contains_key(id)
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = (PointId, &PointMass)> {
		self.data.iter()
	}

	pub fn data(&self) -> &PointMap {
		&self.data
	}

	pub fn data_mut(&mut self) -> &mut PointMap {
		&mut self.data
	}

	#[cfg(not(feature = "parallel"))]
	pub fn update(&mut self, config: &WorldConfig, rng: &mut StdRng) {
		let posbox = config.posbox();
		self.order.clear();
		self.order.extend(self.data.keys());
		if config.order == IterationOrder::Shuffled {
			self.order.shuffle(rng);
		}
		for &id in self.order.iter() {
			self.data[id].integrate(
				config.gravity,
				config.friction,
				config.bounce,
				&posbox,
			);
		}
	}

	// points do not interact while integrating, so the order is irrelevant here
	#[cfg(feature = "parallel")]
	pub fn update(&mut self, config: &WorldConfig, _rng: &mut StdRng) {
		use rayon::prelude::*;
		let posbox = config.posbox();
		let mut ps: Vec<&mut PointMass> = self.data.values_mut().collect();
		ps.par_iter_mut().for_each(|p| {
			p.integrate(config.gravity, config.friction, config.bounce, &posbox)
		});
	}

	pub fn pr_points(&self) -> Vec<(u64, PrPoint)> {
		self.data
			.iter()
			.map(|(id, p)| (id.to_raw(), p.render()))
			.collect()
	}
}
