use crate::posbox::Posbox;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IterationOrder {
	// fresh random permutation of points and of sticks every step
	Shuffled,
	Insertion,
}

#[derive(Clone, Debug)]
pub struct WorldConfig {
	pub width: f32,
	pub height: f32,
	pub gravity: f32,
	pub friction: f32,
	pub bounce: f32,
	pub radius: f32,
	pub fps: u32,
	pub order: IterationOrder,
	pub seed: Option<u64>,
	pub running: bool,
}

impl Default for WorldConfig {
	fn default() -> Self {
		Self {
			width: 1200.,
			height: 900.,
			gravity: 0.2,
			friction: 0.999,
			bounce: 0.8,
			radius: 15.,
			fps: 60,
			order: IterationOrder::Shuffled,
			seed: None,
			running: false,
		}
	}
}

impl WorldConfig {
	pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
		self.width = width;
		self.height = height;
		self
	}

	pub fn with_gravity(mut self, gravity: f32) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn with_friction(mut self, friction: f32) -> Self {
		self.friction = friction;
		self
	}

	/// Clamped into `[0, 1)`.
	pub fn with_bounce(mut self, bounce: f32) -> Self {
		self.bounce = bounce.clamp(0., 1. - f32::EPSILON);
		self
	}

	pub fn with_radius(mut self, radius: f32) -> Self {
		self.radius = radius;
		self
	}

	pub fn with_fps(mut self, fps: u32) -> Self {
		self.fps = fps.max(1);
		self
	}

	pub fn with_order(mut self, order: IterationOrder) -> Self {
		self.order = order;
		self
	}

	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}

	pub fn with_running(mut self) -> Self {
		self.running = true;
		self
	}

	pub fn posbox(&self) -> Posbox {
		Posbox::viewport(self.width, self.height)
	}

	pub fn frame_time(&self) -> f32 {
		1. / self.fps as f32
	}
}
