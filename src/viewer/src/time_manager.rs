use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeModel {
	// never sleeps, every frame counts as one frame time
	VideoRender,
	RtFrameLock,
}

pub struct TimeManager {
	pft: Duration,
	model: TimeModel,
	start_time: Instant,
}

impl TimeManager {
	pub fn new(fps: u32, model: TimeModel) -> Self {
		Self {
			pft: Duration::from_secs_f64(1. / fps.max(1) as f64),
			model,
			start_time: Instant::now(),
		}
	}

	/// Ends the current frame. Returns the fraction of the frame budget
	/// spent working, above 1 means the frame ran late.
	pub fn take_time(&mut self) -> f32 {
		let passed = self.start_time.elapsed();
		let load = passed.as_secs_f32() / self.pft.as_secs_f32();
		if self.model == TimeModel::RtFrameLock && passed < self.pft {
			std::thread::sleep(self.pft - passed);
		}
		self.start_time = Instant::now();
		load
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_frame_lock() {
		let mut tm = TimeManager::new(100, TimeModel::RtFrameLock);
		let start = Instant::now();
		tm.take_time();
		assert!(start.elapsed() >= Duration::from_millis(9));
	}

	#[test]
	fn test_video_render() {
		let mut tm = TimeManager::new(1, TimeModel::VideoRender);
		let start = Instant::now();
		let load = tm.take_time();
		assert!(start.elapsed() < Duration::from_millis(500));
		assert!(load < 1.);
	}
}
