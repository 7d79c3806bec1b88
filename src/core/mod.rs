pub mod camera_manager;
pub mod sun_times;
pub mod trigger_definition;
pub mod trigger_time;
