//! Check digit validation CLI
//!
//! Usage: damm_validate [options] [<digits>...]
//!
//! Each input must end with its check digit. Exits with status 1 if any
//! input fails validation.
//!
//! Example:
//!   damm_validate 5724 5727
//!   5724: valid
//!   5727: invalid
//!   Checked 2: 1 valid, 1 invalid

#[cfg(feature = "parallel")]
use damm_checksum::app::batch::validate_parallel;
use damm_checksum::app::summary::summarize;
use damm_checksum::infra::digits_file::{read_digit_lines, read_digit_lines_from};
#[cfg(not(feature = "parallel"))]
use damm_checksum::validate;
use std::env;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

struct Args {
    file: Option<PathBuf>,
    quiet: bool,
    digits: Vec<String>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options] [<digits>...]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <digits>           Decimal digit strings ending with their check digit");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --file, -f <PATH>  Read digit strings from a file, one per line ('-' for stdin)");
    eprintln!("  --quiet, -q        Only print invalid inputs and the summary");
    eprintln!("  --help, -h         Show this help message");
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut file: Option<PathBuf> = None;
    let mut quiet = false;
    let mut digits = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                i += 1;
                if i >= args.len() {
                    return Err("--file requires a value".to_string());
                }
                if file.is_some() {
                    return Err("--file given more than once".to_string());
                }
                file = Some(PathBuf::from(&args[i]));
            }
            "--quiet" | "-q" => quiet = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            "--" => {
                digits.extend(args[i + 1..].iter().cloned());
                break;
            }
            value if !value.starts_with('-') => digits.push(value.to_string()),
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(Args {
        file,
        quiet,
        digits,
    })
}

fn collect_inputs(args: &Args) -> Result<Vec<String>, String> {
    let mut inputs = args.digits.clone();

    if let Some(path) = &args.file {
        let lines = if path.as_os_str() == "-" {
            read_digit_lines_from(io::stdin().lock())
        } else {
            read_digit_lines(path)
        }
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;

        inputs.extend(lines.into_iter().map(|l| l.digits));
    }

    Ok(inputs)
}

fn main() {
    let argv: Vec<String> = env::args().collect();

    let args = match parse_args(&argv) {
        Ok(a) => a,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            print_usage(&argv[0]);
            std::process::exit(1);
        }
    };

    let inputs = match collect_inputs(&args) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            std::process::exit(1);
        }
    };

    if inputs.is_empty() {
        print_usage(&argv[0]);
        std::process::exit(1);
    }

    let start = Instant::now();

    #[cfg(feature = "parallel")]
    let results = validate_parallel(&inputs);
    #[cfg(not(feature = "parallel"))]
    let results: Vec<bool> = inputs.iter().map(|d| validate(d)).collect();

    let elapsed = start.elapsed();

    for (digits, &ok) in inputs.iter().zip(&results) {
        if ok && !args.quiet {
            println!("{}: valid", digits);
        } else if !ok {
            println!("{}: invalid", digits);
        }
    }

    let summary = summarize(&results);
    println!(
        "Checked {}: {} valid, {} invalid",
        summary.total, summary.valid, summary.invalid
    );

    if args.file.is_some() {
        eprintln!(
            "Validated in {:.3} seconds ({:.1}% valid).",
            elapsed.as_secs_f64(),
            summary.valid_rate() * 100.0
        );
    }

    if !summary.all_valid() {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("damm_validate")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_positional() {
        let args = parse_args(&argv(&["5724", "5727"])).unwrap();
        assert!(!args.quiet);
        assert_eq!(args.digits, vec!["5724", "5727"]);
    }

    #[test]
    fn test_parse_quiet_and_file() {
        let args = parse_args(&argv(&["-q", "-f", "-"])).unwrap();
        assert!(args.quiet);
        assert_eq!(args.file, Some(PathBuf::from("-")));
    }

    #[test]
    fn test_parse_duplicate_file() {
        assert!(parse_args(&argv(&["-f", "a.txt", "-f", "b.txt"])).is_err());
    }

    #[test]
    fn test_collect_inputs_without_file() {
        let args = parse_args(&argv(&["5724"])).unwrap();
        assert_eq!(collect_inputs(&args).unwrap(), vec!["5724"]);
    }
}
