use std::io::{self, BufRead, Write};

use clap::Parser;
use romana::parse_roman_number;

/// romana converts roman numerals in standard subtractive notation into
/// their decimal value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Parse a single numeral and exit instead of starting the interactive
    /// prompt.
    numeral: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(numeral) = args.numeral {
        match parse_roman_number(&numeral) {
            Ok(value) => println!("Result: {value}"),
            Err(e) => {
                eprintln!("Invalid input: {e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let mut input = io::stdin().lock();
    let mut line = String::new();

    loop {
        print!("Write a roman numeral: ");
        if io::stdout().flush().is_err() {
            break;
        }

        line.clear();
        match input.read_line(&mut line) {
            // End of stream ends the loop silently.
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        // A malformed line is reported and the prompt continues.
        match parse_roman_number(&line) {
            Ok(value) => println!("Result: {value}"),
            Err(e) => println!("Invalid input: {e}"),
        }
    }
}
