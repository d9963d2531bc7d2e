//! Command handler modules for the Sharpshot CLI.
//!
//! Each subcommand lives in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod bench;
mod deal;
mod eval;
mod rng;
mod sim;
mod stats;
mod synth;

pub use bench::handle_bench_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use rng::handle_rng_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;
pub use synth::handle_synth_command;
