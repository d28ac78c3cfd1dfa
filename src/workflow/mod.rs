pub mod run_controller;

pub use run_controller::RunController;
