use crate::V2;

// axis-aligned viewport, points collide with its edges
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Posbox {
	pub xmin: f32,
	pub xmax: f32,
	pub ymin: f32,
	pub ymax: f32,
}

impl Posbox {
	pub fn viewport(width: f32, height: f32) -> Self {
		Self {
			xmin: 0.,
			xmax: width,
			ymin: 0.,
			ymax: height,
		}
	}

	/// Clamps `pos` into the box and reflects the clamped axes.
	///
	/// `v` is the velocity the point moved with this step, before gravity.
	/// On a clamped axis `ppos` is placed so that the next implicit velocity
	/// points back inside, scaled by `bounce`. Returns whether any axis hit.
	pub fn apply(&self, pos: &mut V2, ppos: &mut V2, v: V2, bounce: f32) -> bool {
		let bounds = [[self.xmin, self.xmax], [self.ymin, self.ymax]];
		let mut flag = false;
		for (axis, [min, max]) in bounds.into_iter().enumerate() {
			let edge = if pos[axis] > max {
				max
			} else if pos[axis] < min {
				min
			} else {
				continue;
			};
			pos[axis] = edge;
			ppos[axis] = edge + v[axis] * bounce;
			flag = true;
		}
		flag
	}
}
