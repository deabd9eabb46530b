//! Subcommand handlers. Each returns `Result<(), CliError>`; `run` maps the
//! result to an exit code and prints errors.

mod cfg;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
