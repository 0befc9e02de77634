// boolflip: runs the ternary / _Bool increment demonstration

use std::io::{self, Write};
use std::process;

use boolflip::demo;

fn main() {
    let lines = match demo::run() {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in &lines {
        if let Err(e) = writeln!(out, "{}", line) {
            eprintln!("Error: failed to write output: {}", e);
            process::exit(1);
        }
    }
}
