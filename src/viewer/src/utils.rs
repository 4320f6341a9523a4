use std::path::Path;

use ftlog::appender::FileAppender;
use ftlog::{LevelFilter, LoggerGuard};

/// Installs the global logger, on stderr unless a file is given.
///
/// The guard flushes pending records when dropped, keep it alive in `main`.
pub fn configure_logger(
	log_path: Option<&Path>,
	level: LevelFilter,
) -> Result<LoggerGuard, String> {
	let builder = ftlog::Builder::new().max_log_level(level);
	let builder = match log_path {
		Some(path) => builder.root(FileAppender::new(path)),
		None => builder,
	};
	builder.try_init().map_err(|e| e.to_string())
}
