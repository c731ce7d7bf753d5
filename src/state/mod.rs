//! Application state module

pub mod animation;
mod app_state;
mod forms;
mod inquiry;
mod splash_state;

pub use app_state::*;
pub use forms::*;
pub use inquiry::*;
pub use splash_state::*;
