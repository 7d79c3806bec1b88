pub mod camera_controller;
pub mod mode_switcher;
