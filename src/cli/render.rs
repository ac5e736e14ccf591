//! Offline "render" command: Markdown in, markup out.

use std::error::Error;
use std::fs;
use std::io;

use crate::ui::markdown;

pub fn run_render(file: Option<&str>) -> Result<(), Box<dyn Error>> {
    let text = read_source(file)?;
    println!("{}", markdown::render(&text));
    Ok(())
}

fn read_source(file: Option<&str>) -> io::Result<String> {
    match file {
        None | Some("-") => io::read_to_string(io::stdin()),
        Some(path) => fs::read_to_string(path),
    }
}
