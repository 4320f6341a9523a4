use crate::point::PointId;
use crate::V2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControllerMessage {
	AddPoint { pos: V2, ppos: V2, locked: bool },
	ToggleLock(PointId),
	Select(PointId),
	Delete(PointId),
	TogglePause,
	FrameForward,
}
