use crate::point::PointId;

/// Two-click link gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
	#[default]
	Idle,
	Anchor(PointId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
	Armed,
	Linked(PointId, PointId),
	Cancelled,
}

impl Selection {
	pub fn click(self, id: PointId) -> (Self, SelectOutcome) {
		match self {
			Selection::Idle => (Selection::Anchor(id), SelectOutcome::Armed),
			Selection::Anchor(anchor) if anchor == id => {
				(Selection::Idle, SelectOutcome::Cancelled)
			}
			Selection::Anchor(anchor) => {
				(Selection::Idle, SelectOutcome::Linked(anchor, id))
			}
		}
	}

	pub fn anchor(&self) -> Option<PointId> {
		match self {
			Selection::Idle => None,
			Selection::Anchor(id) => Some(*id),
		}
	}

	// forget the anchor if it is about to disappear
	pub fn release(self, id: PointId) -> Self {
		match self {
			Selection::Anchor(anchor) if anchor == id => Selection::Idle,
			s => s,
		}
	}
}
