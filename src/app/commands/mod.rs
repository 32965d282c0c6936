pub mod dataset;
pub mod install;
pub mod scaffold;
