pub mod clock;
pub mod constants;
pub mod error;
pub mod hash;
pub mod init;
pub mod input;
pub mod physics;
pub mod player;
pub mod render;
pub mod replay;
pub mod score;
pub mod session;
pub mod step;
pub mod types;
#[cfg(test)]
mod test_log;

pub use clock::{dt_from_elapsed_ms, FrameClock};
pub use constants::*;
pub use error::ConfigError;
pub use hash::*;
pub use init::*;
pub use input::{default_bindings, keycode, KeyBindings, KeyState};
pub use physics::{apply_player_input, integrate, platform_collision, player_collision};
pub use render::{render_frame, CommandBuffer, DrawCommand, Surface};
pub use replay::{run_replay, ReplayInput, ReplayOutput, ReplayRun, TickInput};
pub use score::{apply_fall_out, leader};
pub use session::Session;
pub use step::{advance, step, step_mut};
pub use types::*;
