pub mod time_manager;
pub mod utils;
pub mod viewer;
