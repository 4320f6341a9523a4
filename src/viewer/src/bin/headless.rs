use std::path::PathBuf;

use clap::Parser;
use ftlog::LevelFilter;

use protocol::user_event::{InputEvent, MouseButton, UpdateInfo};
use verlet::config::{IterationOrder, WorldConfig};
use verlet::physical_model::GridTemplate;
use verlet::world::World;
use viewer::time_manager::{TimeManager, TimeModel};
use viewer::utils::configure_logger;
use viewer::viewer::Viewer;

#[derive(Parser, Debug)]
#[command(version, about = "Runs the rope sandbox without a window", long_about = None)]
struct Args {
	/// Number of frames to simulate.
	#[arg(short('n'), long, default_value_t = 600)]
	frames: usize,

	/// Seed for the per-step iteration order.
	#[arg(short('s'), long)]
	seed: Option<u64>,

	/// Relax sticks in insertion order instead of a fresh shuffle each step.
	#[arg(long)]
	fixed_order: bool,

	/// Build a cloth grid of this many columns instead of the scripted rope.
	#[arg(long, default_value_t = 0)]
	cols: usize,

	/// Rows of the cloth grid.
	#[arg(long, default_value_t = 0)]
	rows: usize,

	/// Sleep to keep frames at the configured rate.
	#[arg(long)]
	realtime: bool,

	/// Write logs to this file instead of stderr.
	#[arg(short('l'), long)]
	log_path: Option<PathBuf>,

	/// Log every edit.
	#[arg(short('v'), long)]
	verbose: bool,
}

fn click(viewer: &mut Viewer, pos: [f32; 2]) {
	viewer.handle_event(InputEvent::CursorMoved(pos));
	viewer.handle_event(InputEvent::MouseDown(MouseButton::Left));
	viewer.handle_event(InputEvent::MouseUp(MouseButton::Left));
	viewer.frame();
}

// what a user would do by hand: drop a row of points, chain them, pin the first
fn script_rope(viewer: &mut Viewer) {
	let ps: Vec<[f32; 2]> =
		(0..8).map(|i| [300. + 40. * i as f32, 200.]).collect();
	for &pos in ps.iter() {
		click(viewer, pos);
	}
	for pair in ps.windows(2) {
		click(viewer, pair[0]);
		click(viewer, pair[1]);
	}
	viewer.handle_event(InputEvent::CursorMoved(ps[0]));
	viewer.handle_event(InputEvent::KeyDown(b'l'));
}

fn main() -> Result<(), String> {
	let args = Args::parse();
	let level = if args.verbose {
		LevelFilter::Debug
	} else {
		LevelFilter::Info
	};
	let _guard = configure_logger(args.log_path.as_deref(), level)?;

	let mut config = WorldConfig::default();
	if let Some(seed) = args.seed {
		config = config.with_seed(seed);
	}
	if args.fixed_order {
		config = config.with_order(IterationOrder::Insertion);
	}
	let fps = config.fps;
	let mut viewer = Viewer::new(World::new(config));

	if args.cols > 0 && args.rows > 0 {
		let grid = GridTemplate::default()
			.with_size(args.cols, args.rows)
			.with_pinned_top()
			.build();
		viewer.world_mut().add_model(grid);
		viewer.frame();
	} else {
		script_rope(&mut viewer);
	}
	viewer.handle_event(InputEvent::KeyDown(b' '));

	let model = if args.realtime {
		TimeModel::RtFrameLock
	} else {
		TimeModel::VideoRender
	};
	let mut tm = TimeManager::new(fps, model);
	let mut load = 0f32;
	for frame in 1..=args.frames {
		viewer.frame();
		load = load.max(tm.take_time());
		if frame % fps as usize == 0 {
			let info = UpdateInfo {
				load,
				point_len: viewer.world().point_len(),
				stick_len: viewer.world().sticks().len(),
			};
			ftlog::info!("frame {}: {:?}", frame, info);
			load = 0.;
		}
	}

	let world = viewer.world();
	let worst = world
		.sticks()
		.iter()
		.filter_map(|c| {
			let [p1, p2] = c.endpoints();
			let pos1 = world.point(p1)?.get_pos();
			let pos2 = world.point(p2)?.get_pos();
			Some(((pos2 - pos1).magnitude() - c.rest_length()).abs())
		})
		.fold(0f32, f32::max);
	ftlog::info!(
		"done after {} frames, worst stick error {:.3}",
		world.frame(),
		worst
	);
	Ok(())
}
