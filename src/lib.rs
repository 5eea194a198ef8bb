pub mod cli;
pub mod commands;
pub mod punnett;
pub mod utils;
