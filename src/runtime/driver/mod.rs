//! Console adapters that feed commands to the runtime.

pub mod cli;
