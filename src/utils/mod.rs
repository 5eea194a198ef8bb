mod io_utils;
mod util;

pub use io_utils::{create_writer, prompt_line};
pub use util::{handle_error_and_exit, Result};
