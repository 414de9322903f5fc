//! The interactive menu loop.
//!
//! The loop prompts for a selection, runs one decode -> transform ->
//! encode pipeline per chosen operation, reports the outcome, and keeps
//! going. Quitting is an explicit `q` command; malformed selections are
//! reported and the loop continues.

use std::io::{self, BufRead, Write};

use log::debug;
use thiserror::Error;

use filmlab_core::{
    read_bmp, transform, write_bmp, DecodeError, EncodeError, Operation, TransformError,
};

/// Failure anywhere in one decode -> transform -> encode run.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// One parsed menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Quit,
    ChangeImage,
    Process(u32),
    Invalid,
}

/// Parse a raw menu line. `q` and `quit` (any case) quit; `0` changes
/// the input image; `1` to `10` select an operation.
pub fn parse_selection(input: &str) -> Selection {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Selection::Quit;
    }
    match trimmed.parse::<u32>() {
        Ok(0) => Selection::ChangeImage,
        Ok(n) if (1..=10).contains(&n) => Selection::Process(n),
        _ => Selection::Invalid,
    }
}

/// Run the menu loop until the user quits.
pub fn run(initial_input: Option<String>) {
    println!();
    println!("Filmlab Image Processing");

    let mut input_filename = match initial_input {
        Some(name) => name,
        None => prompt_line("Enter input BMP filename: "),
    };

    loop {
        print_menu(&input_filename);
        let line = prompt_line("Enter menu selection (q to quit): ");
        match parse_selection(&line) {
            Selection::Quit => {
                println!("Thank you for using Filmlab. Quitting...");
                break;
            }
            Selection::ChangeImage => {
                input_filename = prompt_line("Enter new input BMP filename: ");
                println!("Successfully changed input image!");
            }
            Selection::Process(n) => run_process(n, &input_filename),
            Selection::Invalid => {
                println!("Invalid input. Select an option within the menu bounds.");
            }
        }
    }
}

fn print_menu(input_filename: &str) {
    println!();
    println!("----------------------------------");
    println!("IMAGE PROCESSING MENU");
    println!("0) Change image (current: {input_filename})");
    println!("1) Vignette");
    println!("2) Clarendon");
    println!("3) Grayscale");
    println!("4) Rotate 90 degrees");
    println!("5) Rotate multiple 90 degrees");
    println!("6) Enlarge");
    println!("7) High contrast");
    println!("8) Lighten");
    println!("9) Darken");
    println!("10) Black, white, red, green, blue");
    println!("----------------------------------");
}

/// Prompt for whatever parameters operation `n` needs and build it.
fn build_operation(n: u32) -> Operation {
    match n {
        1 => Operation::Vignette,
        2 => Operation::Clarendon {
            factor: prompt_number("Enter scaling factor: "),
        },
        3 => Operation::Grayscale,
        4 => Operation::Rotate90,
        5 => Operation::RotateMultiple {
            turns: prompt_number("Enter number of 90 degree rotations: "),
        },
        6 => Operation::Enlarge {
            x_scale: prompt_number("Enter X scale: "),
            y_scale: prompt_number("Enter Y scale: "),
        },
        7 => Operation::HighContrast,
        8 => Operation::Lighten {
            factor: prompt_number("Enter scaling factor: "),
        },
        9 => Operation::Darken {
            factor: prompt_number("Enter scaling factor: "),
        },
        _ => Operation::Posterize,
    }
}

fn run_process(n: u32, input_filename: &str) {
    let operation = build_operation(n);
    println!("{} selected", operation.name());
    let output_filename = prompt_line("Enter output BMP filename: ");

    match process(input_filename, &output_filename, &operation) {
        Ok(()) => println!("Successfully applied {}!", operation.name()),
        Err(e) => println!("{} failed: {}", operation.name(), e),
    }
}

/// One full decode -> transform -> encode run.
fn process(input: &str, output: &str, operation: &Operation) -> Result<(), ProcessError> {
    debug!("Applying {} to {}", operation.name(), input);
    let image = read_bmp(input)?;
    let result = transform::apply(&image, operation)?;
    write_bmp(output, &result)?;
    debug!("Wrote {}", output);
    Ok(())
}

/// Print a prompt and read one trimmed line from stdin.
fn prompt_line(message: &str) -> String {
    print!("{message}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    // EOF behaves like an empty answer; the next parse reports it
    let _ = io::stdin().lock().read_line(&mut line);
    line.trim().to_string()
}

/// Prompt repeatedly until the line parses as the requested number type.
fn prompt_number<T: std::str::FromStr>(message: &str) -> T {
    loop {
        let line = prompt_line(message);
        match line.parse::<T>() {
            Ok(value) => return value,
            Err(_) => println!("Please enter a number."),
        }
    }
}
