// src/cli.rs

use std::io::{Read, Write};

use crate::{
    error::AppError,
    models::{book::BookForm, customer::CustomerForm},
    utils::html::Sanitizer,
};

/// Runs one invocation of the command line tool.
///
/// * `TEXT...`: each argument is sanitized and written on its own line.
/// * no arguments: the whole of `input` is sanitized.
/// * `--form customer|book`: `input` holds a JSON form, written back prepared.
pub fn run<R: Read, W: Write>(
    sanitizer: &Sanitizer,
    args: &[String],
    mut input: R,
    mut output: W,
) -> Result<(), AppError> {
    match args.first().map(String::as_str) {
        Some("--form") => {
            let kind = args.get(1).map(String::as_str).unwrap_or_default();
            let payload = read_all(&mut input)?;
            let json = match kind {
                "customer" => {
                    let form: CustomerForm = serde_json::from_str(&payload)?;
                    serde_json::to_string_pretty(&form.prepare(sanitizer)?)?
                }
                "book" => {
                    let form: BookForm = serde_json::from_str(&payload)?;
                    serde_json::to_string_pretty(&form.prepare(sanitizer)?)?
                }
                other => {
                    return Err(AppError::BadRequest(format!(
                        "Unknown form '{}', expected 'customer' or 'book'",
                        other
                    )));
                }
            };
            writeln!(output, "{}", json)?;
        }
        Some(_) => {
            for text in args {
                writeln!(output, "{}", sanitizer.clean(text))?;
            }
        }
        None => {
            let payload = read_all(&mut input)?;
            write!(output, "{}", sanitizer.clean(&payload))?;
        }
    }

    output.flush()?;
    Ok(())
}

/// Process exit status for the outcome of `run`.
pub fn exit_status(result: &Result<(), AppError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

fn read_all<R: Read>(input: &mut R) -> Result<String, AppError> {
    let mut buf = String::new();
    input.read_to_string(&mut buf)?;
    Ok(buf)
}
