use crate::V2;

#[derive(Clone, Debug, PartialEq)]
pub struct PointTemplate {
	pub pos: V2,
	pub locked: bool,
}

/// Points and links to be added to a world in one go.
///
/// Links index into `points`; rest lengths are taken from the positions when
/// the model is added.
#[derive(Clone, Debug, Default)]
pub struct PhysicalModel {
	pub points: Vec<PointTemplate>,
	pub links: Vec<[usize; 2]>,
}

#[derive(Clone, Debug)]
pub struct GridTemplate {
	pub cols: usize,
	pub rows: usize,
	pub spacing: f32,
	pub origin: V2,
	pub pin_top: bool,
}

impl Default for GridTemplate {
	fn default() -> Self {
		Self {
			cols: 15,
			rows: 10,
			spacing: 70.,
			origin: V2::new(100., 70.),
			pin_top: false,
		}
	}
}

impl GridTemplate {
	pub fn with_size(mut self, cols: usize, rows: usize) -> Self {
		self.cols = cols;
		self.rows = rows;
		self
	}

	pub fn with_spacing(mut self, spacing: f32) -> Self {
		self.spacing = spacing;
		self
	}

	pub fn with_origin(mut self, origin: V2) -> Self {
		self.origin = origin;
		self
	}

	pub fn with_pinned_top(mut self) -> Self {
		self.pin_top = true;
		self
	}

	pub fn build(self) -> PhysicalModel {
		PhysicalModel::new_grid(&self)
	}
}

impl PhysicalModel {
	/// Row-major grid, point `(col, row)` sits at index `row * cols + col`.
	pub fn new_grid(t: &GridTemplate) -> Self {
		let idx = |col: usize, row: usize| row * t.cols + col;
		let mut points = Vec::with_capacity(t.cols * t.rows);
		for row in 0..t.rows {
			for col in 0..t.cols {
				let offset = V2::new(col as f32, row as f32) * t.spacing;
				points.push(PointTemplate {
					pos: t.origin + offset,
					locked: t.pin_top && row == 0,
				});
			}
		}
		let mut links = vec![];
		for row in 0..t.rows {
			for col in 1..t.cols {
				links.push([idx(col - 1, row), idx(col, row)]);
			}
		}
		for col in 0..t.cols {
			for row in 1..t.rows {
				links.push([idx(col, row - 1), idx(col, row)]);
			}
		}
		Self { points, links }
	}

	pub fn new_chain(from: V2, to: V2, segments: usize) -> Self {
		let segments = segments.max(1);
		let points = (0..=segments)
			.map(|i| PointTemplate {
				pos: from + (to - from) * (i as f32 / segments as f32),
				locked: false,
			})
			.collect();
		let links = (1..=segments).map(|i| [i - 1, i]).collect();
		Self { points, links }
	}

	pub fn with_locked(mut self, idx: usize) -> Self {
		if let Some(p) = self.points.get_mut(idx) {
			p.locked = true;
		}
		self
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_grid_topology() {
		let model = GridTemplate::default()
			.with_size(4, 3)
			.with_spacing(10.)
			.with_origin(V2::new(5., 5.))
			.with_pinned_top()
			.build();
		assert_eq!(model.points.len(), 12);
		// 3 rows of 3 horizontal links, 4 columns of 2 vertical links
		assert_eq!(model.links.len(), 9 + 8);
		assert_eq!(model.points[6].pos, V2::new(25., 15.));
		assert_eq!(model.points.iter().filter(|p| p.locked).count(), 4);
		assert!(model.links.contains(&[5, 6]));
		assert!(model.links.contains(&[2, 6]));
		assert!(!model.links.contains(&[3, 4]));
	}

	#[test]
	fn test_chain() {
		let model =
			PhysicalModel::new_chain(V2::new(0., 0.), V2::new(30., 0.), 3)
				.with_locked(0);
		assert_eq!(model.points.len(), 4);
		assert_eq!(model.links, vec![[0, 1], [1, 2], [2, 3]]);
		assert!(model.points[0].locked);
		assert!((model.points[2].pos - V2::new(20., 0.)).magnitude() < 1e-4);
	}
}
