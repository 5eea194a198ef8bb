use crate::utils::Result;
use std::{
    fs::File,
    io::{self, BufRead, BufWriter, Write},
    path::Path,
};

/// Buffered writer to `output_path`, or to stdout when no path is given.
pub fn create_writer(output_path: Option<&Path>) -> Result<Box<dyn Write>> {
    match output_path {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("Failed to create {}: {}", path.display(), e))?;
            log::debug!("Writing output to {}", path.display());
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

/// Shows `prompt` and reads one line, without its line ending.
/// End of input reads as an empty line.
pub fn prompt_line<R: BufRead, W: Write>(prompt: &str, input: &mut R, out: &mut W) -> Result<String> {
    write!(out, "{}", prompt)
        .and_then(|_| out.flush())
        .map_err(|e| format!("Failed to write prompt: {}", e))?;
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read input: {}", e))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
