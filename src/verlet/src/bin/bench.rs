use std::time::Instant;

use verlet::config::WorldConfig;
use verlet::physical_model::GridTemplate;
use verlet::world::World;

fn main() {
	let config = WorldConfig::default().with_seed(0).with_running();
	let frame_time = config.frame_time();
	let mut world = World::new(config);
	world.add_model(GridTemplate::default().with_pinned_top().build());
	let rframes = 6000;
	let start = Instant::now();
	for _ in 0..rframes {
		world.step();
	}
	let time = rframes as f32 * frame_time;
	let duration = start.elapsed().as_secs_f32();
	println!(
		"{} points, {} sticks: {:.3}% of real time",
		world.point_len(),
		world.sticks().len(),
		duration / time * 100.
	);
}
