use protocol::pr_model::PrModel;
use protocol::user_event::{InputEvent, MouseButton};
use verlet::controller_message::ControllerMessage;
use verlet::point::PointId;
use verlet::world::{Applied, World};
use verlet::V2;

pub struct Viewer {
	world: World,
	cursor: V2,
	hover: Option<PointId>,
	deleting: bool,
	last_model: PrModel,
}

impl Viewer {
	pub fn new(world: World) -> Self {
		let last_model = world.pr_model();
		Self {
			world,
			cursor: V2::zeros(),
			hover: None,
			deleting: false,
			last_model,
		}
	}

	pub fn world(&self) -> &World {
		&self.world
	}

	pub fn world_mut(&mut self) -> &mut World {
		&mut self.world
	}

	pub fn hover(&self) -> Option<PointId> {
		self.hover
	}

	pub fn last_model(&self) -> &PrModel {
		&self.last_model
	}

	// hit-test against what was drawn last, like the user sees it
	fn update_hover(&mut self) {
		let radius = self.world.config().radius;
		self.hover = self
			.last_model
			.point_at([self.cursor[0], self.cursor[1]], radius)
			.map(PointId::from_raw)
			.filter(|id| self.world.point(*id).is_some());
	}

	fn send(&mut self, msg: ControllerMessage) -> Option<Applied> {
		match self.world.handle(msg) {
			Ok(applied) => Some(applied),
			Err(e) => {
				ftlog::warn!("ignored {:?}: {}", msg, e);
				None
			}
		}
	}

	pub fn handle_event(&mut self, event: InputEvent) -> Option<Applied> {
		match event {
			InputEvent::CursorMoved(pos) => {
				self.cursor = V2::new(pos[0], pos[1]);
				self.update_hover();
				None
			}
			InputEvent::MouseDown(MouseButton::Left) => match self.hover {
				Some(id) => self.send(ControllerMessage::Select(id)),
				None => self.send(ControllerMessage::AddPoint {
					pos: self.cursor,
					ppos: self.cursor,
					locked: false,
				}),
			},
			InputEvent::MouseDown(MouseButton::Right) => {
				self.deleting = true;
				None
			}
			InputEvent::MouseUp(MouseButton::Right) => {
				self.deleting = false;
				None
			}
			InputEvent::MouseUp(MouseButton::Left) => None,
			InputEvent::KeyDown(b' ') => {
				self.send(ControllerMessage::TogglePause)
			}
			InputEvent::KeyDown(b'l') => {
				let id = self.hover?;
				self.send(ControllerMessage::ToggleLock(id))
			}
			InputEvent::KeyDown(b's') => {
				self.send(ControllerMessage::FrameForward)
			}
			InputEvent::KeyDown(_) => None,
		}
	}

	/// One driver frame: delete under a held right button, step, snapshot.
	pub fn frame(&mut self) -> &PrModel {
		self.update_hover();
		if self.deleting {
			if let Some(id) = self.hover.take() {
				self.send(ControllerMessage::Delete(id));
			}
		}
		self.world.step();
		self.last_model = self.world.pr_model();
		&self.last_model
	}
}
