// Interface layer: CLI
pub mod cli;
