use std::fmt;

use crate::point::PointId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditError {
	/// The handle does not name a live point.
	StalePoint(PointId),
}

impl fmt::Display for EditError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			EditError::StalePoint(id) => {
				write!(f, "point {:?} is not in the world", id)
			}
		}
	}
}

impl std::error::Error for EditError {}
