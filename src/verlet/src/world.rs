use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::WorldConfig;
use crate::constraint::distance::DistanceConstraint;
use crate::constraint_group::ConstraintGroup;
use crate::controller_message::ControllerMessage;
use crate::error::EditError;
use crate::physical_model::PhysicalModel;
use crate::point::{PointId, PointMass};
use crate::point_group::PointGroup;
use crate::selection::{SelectOutcome, Selection};
use crate::V2;
use protocol::pr_model::PrModel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
	Running,
	Paused,
}

/// What a [`ControllerMessage`] did to the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
	Added(PointId),
	Selected(SelectOutcome),
	Deleted,
	LockToggled(bool),
	RunState(RunState),
	Stepped(bool),
}

pub struct World {
	config: WorldConfig,
	run_state: RunState,
	frame: u64,
	selection: Selection,
	rng: StdRng,

	pg: PointGroup,
	cg: ConstraintGroup,
}

impl Default for World {
	fn default() -> Self {
		Self::new(WorldConfig::default())
	}
}

impl World {
	pub fn new(mut config: WorldConfig) -> Self {
		// fields are public, the builder clamp can be bypassed
		config.bounce = config.bounce.clamp(0., 1. - f32::EPSILON);
		let rng = config
			.seed
			.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
		let run_state = if config.running {
			RunState::Running
		} else {
			RunState::Paused
		};
		ftlog::info!(
			"world {}x{}, gravity {}, friction {}, bounce {}, order {:?}",
			config.width,
			config.height,
			config.gravity,
			config.friction,
			config.bounce,
			config.order
		);
		Self {
			config,
			run_state,
			frame: 0,
			selection: Selection::Idle,
			rng,
			pg: PointGroup::default(),
			cg: ConstraintGroup::default(),
		}
	}

	pub fn config(&self) -> &WorldConfig {
		&self.config
	}

	pub fn run_state(&self) -> RunState {
		self.run_state
	}

	pub fn is_running(&self) -> bool {
		self.run_state == RunState::Running
	}

	pub fn frame(&self) -> u64 {
		self.frame
	}

	pub fn selection(&self) -> Selection {
		self.selection
	}

	pub fn point(&self, id: PointId) -> Option<&PointMass> {
		self.pg.get(id)
	}

	pub fn points(&self) -> impl Iterator<Item = (PointId, &PointMass)> {
		self.pg.iter()
	}

	pub fn point_len(&self) -> usize {
		self.pg.len()
	}

	pub fn sticks(&self) -> &[DistanceConstraint] {
		self.cg.constraints()
	}

	/// Endpoint positions of every stick, for drawing.
	pub fn stick_ends(&self) -> impl Iterator<Item = [V2; 2]> + '_ {
		self.cg.constraints().iter().filter_map(|c| {
			let [p1, p2] = c.endpoints();
			Some([self.pg.get(p1)?.get_pos(), self.pg.get(p2)?.get_pos()])
		})
	}

	pub fn add_point(&mut self, pos: V2, ppos: V2, locked: bool) -> PointId {
		let id = self.pg.add_point(PointMass::new(pos, ppos, locked));
		ftlog::debug!("add point {:?} at {:?}", id, pos);
		id
	}

	/// Returns the new lock state.
	pub fn toggle_lock(&mut self, id: PointId) -> Result<bool, EditError> {
		let p = self.pg.get_mut(id).ok_or(EditError::StalePoint(id))?;
		p.toggle_lock();
		ftlog::debug!("point {:?} locked: {}", id, p.is_locked());
		Ok(p.is_locked())
	}

	pub fn select(&mut self, id: PointId) -> Result<SelectOutcome, EditError> {
		if !self.pg.contains(id) {
			return Err(EditError::StalePoint(id));
		}
		let (selection, outcome) = self.selection.click(id);
		self.selection = selection;
		if let SelectOutcome::Linked(p1, p2) = outcome {
			self.link(p1, p2)?;
		}
		Ok(outcome)
	}

	pub(crate) fn link(
		&mut self,
		p1: PointId,
		p2: PointId,
	) -> Result<(), EditError> {
		// p1 == p2 never reaches here, selection treats it as cancel
		let con = DistanceConstraint::new(p1, p2, self.pg.data()).ok_or_else(
			|| {
				let stale = if self.pg.contains(p1) { p2 } else { p1 };
				EditError::StalePoint(stale)
			},
		)?;
		ftlog::debug!(
			"link {:?} - {:?}, rest length {}",
			p1,
			p2,
			con.rest_length()
		);
		self.cg.add_constraint(con);
		Ok(())
	}

	pub fn delete(&mut self, id: PointId) -> Result<(), EditError> {
		self.pg.remove_point(id).ok_or(EditError::StalePoint(id))?;
		let removed = self.cg.remove_touching(id);
		self.selection = self.selection.release(id);
		ftlog::debug!("delete point {:?} with {} sticks", id, removed);
		Ok(())
	}

	/// Adds every point of `model` at rest and links them as listed.
	///
	/// Handles come back in the order of `model.points`. The pending
	/// selection is left alone.
	pub fn add_model(&mut self, model: PhysicalModel) -> Vec<PointId> {
		let ids: Vec<PointId> = model
			.points
			.iter()
			.map(|p| self.pg.add_point(PointMass::new(p.pos, p.pos, p.locked)))
			.collect();
		for [i, j] in model.links.iter().copied() {
			match (ids.get(i), ids.get(j)) {
				(Some(&p1), Some(&p2)) if p1 != p2 => {
					// both handles were just inserted
					if let Err(e) = self.link(p1, p2) {
						ftlog::warn!("skip link {} - {}: {}", i, j, e);
					}
				}
				_ => ftlog::warn!("skip link {} - {}: bad index", i, j),
			}
		}
		ftlog::info!(
			"add model: {} points, {} links",
			ids.len(),
			model.links.len()
		);
		ids
	}

	pub fn toggle_running(&mut self) -> RunState {
		self.run_state = match self.run_state {
			RunState::Running => RunState::Paused,
			RunState::Paused => RunState::Running,
		};
		ftlog::info!("{:?} at frame {}", self.run_state, self.frame);
		self.run_state
	}

	/// Advances one frame if running. Returns whether anything moved.
	pub fn step(&mut self) -> bool {
		if self.run_state == RunState::Paused {
			return false;
		}
		self.update_frame();
		true
	}

	/// Single frame while paused.
	pub fn frame_forward(&mut self) -> bool {
		if self.run_state == RunState::Running {
			return false;
		}
		self.update_frame();
		true
	}

	fn update_frame(&mut self) {
		// every point moves before any stick is relaxed
		self.pg.update(&self.config, &mut self.rng);
		self.cg.solve_constraints(
			self.pg.data_mut(),
			self.config.order,
			&mut self.rng,
		);
		self.frame += 1;
	}

	pub fn handle(
		&mut self,
		msg: ControllerMessage,
	) -> Result<Applied, EditError> {
		use ControllerMessage::*;
		let applied = match msg {
			AddPoint { pos, ppos, locked } => {
				Applied::Added(self.add_point(pos, ppos, locked))
			}
			ToggleLock(id) => Applied::LockToggled(self.toggle_lock(id)?),
			Select(id) => Applied::Selected(self.select(id)?),
			Delete(id) => {
				self.delete(id)?;
				Applied::Deleted
			}
			TogglePause => Applied::RunState(self.toggle_running()),
			FrameForward => Applied::Stepped(self.frame_forward()),
		};
		Ok(applied)
	}

	pub fn pr_model(&self) -> PrModel {
		PrModel {
			points: self.pg.pr_points().into_iter().collect(),
			sticks: self.cg.pr_constraints(self.pg.data()),
			selected: self.selection.anchor().map(PointId::to_raw),
			running: self.is_running(),
		}
	}
}
