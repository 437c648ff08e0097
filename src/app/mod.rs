pub mod menu;

pub use menu::{Menu, Mode, Outcome, Preset};
