#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
	Left,
	Right,
}

// input as the driver sees it, already decoupled from any windowing library
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
	CursorMoved([f32; 2]),
	MouseDown(MouseButton),
	MouseUp(MouseButton),
	// lowercase ascii, space included
	KeyDown(u8),
}

#[derive(Debug)]
pub struct UpdateInfo {
	pub load: f32,
	pub point_len: usize,
	pub stick_len: usize,
}
