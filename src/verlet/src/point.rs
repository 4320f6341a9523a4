use slotmap::{new_key_type, Key, KeyData, SlotMap};

use crate::posbox::Posbox;
use crate::V2;
use protocol::pr_model::PrPoint;

new_key_type! {
	/// Stable handle to a point, valid until the point is deleted.
	pub struct PointId;
}

pub type PointMap = SlotMap<PointId, PointMass>;

impl PointId {
	/// Raw form used by render snapshots.
	pub fn to_raw(self) -> u64 {
		self.data().as_ffi()
	}

	pub fn from_raw(raw: u64) -> Self {
		KeyData::from_ffi(raw).into()
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointMass {
	pos: V2,
	ppos: V2,
	locked: bool,
}

impl PointMass {
	/// `ppos == pos` gives a point at rest, anything else seeds a velocity.
	pub fn new(pos: V2, ppos: V2, locked: bool) -> Self {
		Self { pos, ppos, locked }
	}

	pub fn get_pos(&self) -> V2 {
		self.pos
	}

	pub fn get_ppos(&self) -> V2 {
		self.ppos
	}

	pub fn is_locked(&self) -> bool {
		self.locked
	}

	pub fn toggle_lock(&mut self) {
		self.locked = !self.locked;
	}

	pub fn add_pos(&mut self, dp: V2) {
		self.pos += dp
	}

	/// One Verlet step with constant gravity along +y.
	pub fn integrate(
		&mut self,
		gravity: f32,
		friction: f32,
		bounce: f32,
		bounds: &Posbox,
	) {
		if self.locked {
			return;
		}
		// velocity must be taken before ppos is overwritten
		let v = (self.pos - self.ppos) * friction;
		self.ppos = self.pos;
		self.pos += v;
		self.pos[1] += gravity;
		bounds.apply(&mut self.pos, &mut self.ppos, v, bounce);
	}

	pub fn render(&self) -> PrPoint {
		PrPoint {
			pos: [self.pos[0], self.pos[1]],
			locked: self.locked,
		}
	}
}
