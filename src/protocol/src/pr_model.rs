// pr_model: snapshot of the world for rendering

use fnv::FnvHashMap;

#[derive(Clone, Debug, PartialEq)]
pub struct PrPoint {
	pub pos: [f32; 2],
	pub locked: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrStick {
	pub points: [u64; 2],
	pub ends: [[f32; 2]; 2],
}

#[derive(Clone, Debug, Default)]
pub struct PrModel {
	pub points: FnvHashMap<u64, PrPoint>,
	pub sticks: Vec<PrStick>,
	pub selected: Option<u64>,
	pub running: bool,
}

impl PrModel {
	pub fn is_selected(&self, id: u64) -> bool {
		self.selected == Some(id)
	}

	// visual radius is owned by the world config, the renderer passes it in
	pub fn point_at(&self, pos: [f32; 2], radius: f32) -> Option<u64> {
		let r2 = radius * radius;
		self.points
			.iter()
			.filter(|(_, p)| {
				let dx = p.pos[0] - pos[0];
				let dy = p.pos[1] - pos[1];
				dx * dx + dy * dy <= r2
			})
			.map(|(id, _)| *id)
			.min()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_point_at() {
		let mut model = PrModel::default();
		model.points.insert(
			3,
			PrPoint {
				pos: [10., 10.],
				locked: false,
			},
		);
		model.points.insert(
			7,
			PrPoint {
				pos: [100., 10.],
				locked: true,
			},
		);
		assert_eq!(model.point_at([12., 14.], 15.), Some(3));
		assert_eq!(model.point_at([100., 24.], 15.), Some(7));
		assert_eq!(model.point_at([50., 50.], 15.), None);
	}
}
