//! Check digit computation CLI
//!
//! Usage: damm_check [options] [<digits>...]
//!
//! Options:
//!   --append, -a       Print the full number with its check digit appended
//!   --file, -f <PATH>  Read digit strings from a file, one per line ('-' for stdin)
//!   --help, -h         Show help
//!
//! Example:
//!   damm_check 572
//!   572 -> 4

#[cfg(feature = "parallel")]
use damm_checksum::app::batch::check_digits_parallel;
#[cfg(not(feature = "parallel"))]
use damm_checksum::check_digit;
use damm_checksum::infra::digits_file::{read_digit_lines, read_digit_lines_from};
use std::env;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

struct Args {
    append: bool,
    file: Option<PathBuf>,
    digits: Vec<String>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options] [<digits>...]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <digits>           Decimal digit strings without check digit");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --append, -a       Print the full number with its check digit appended");
    eprintln!("  --file, -f <PATH>  Read digit strings from a file, one per line ('-' for stdin)");
    eprintln!("  --help, -h         Show this help message");
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut append = false;
    let mut file: Option<PathBuf> = None;
    let mut digits = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--append" | "-a" => append = true,
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
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            "--" => {
                digits.extend(args[i + 1..].iter().cloned());
                break;
            }
            // The empty string is a valid (empty) digit sequence
            value if !value.starts_with('-') => digits.push(value.to_string()),
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(Args {
        append,
        file,
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
    let results = check_digits_parallel(&inputs);
    #[cfg(not(feature = "parallel"))]
    let results: Vec<_> = inputs.iter().map(|d| check_digit(d)).collect();

    let elapsed = start.elapsed();

    let mut failures = 0usize;
    for (digits, result) in inputs.iter().zip(results) {
        match result {
            Ok(c) if args.append => println!("{}{}", digits, c),
            Ok(c) => println!("{} -> {}", digits, c),
            Err(e) => {
                eprintln!("Error: '{}': {}", digits, e);
                failures += 1;
            }
        }
    }

    if args.file.is_some() {
        eprintln!(
            "Processed {} input(s) in {:.3} seconds ({} failed).",
            inputs.len(),
            elapsed.as_secs_f64(),
            failures
        );
    }

    if failures > 0 {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("damm_check")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_positional_and_append() {
        let args = parse_args(&argv(&["572", "-a", "123"])).unwrap();
        assert!(args.append);
        assert!(args.file.is_none());
        assert_eq!(args.digits, vec!["572", "123"]);
    }

    #[test]
    fn test_parse_file() {
        let args = parse_args(&argv(&["--file", "ids.txt"])).unwrap();
        assert_eq!(args.file, Some(PathBuf::from("ids.txt")));
        assert!(args.digits.is_empty());
    }

    #[test]
    fn test_parse_file_missing_value() {
        assert!(parse_args(&argv(&["--file"])).is_err());
    }

    #[test]
    fn test_parse_unknown_option() {
        assert!(parse_args(&argv(&["--bogus"])).is_err());
    }

    #[test]
    fn test_parse_double_dash_passes_through() {
        let args = parse_args(&argv(&["--", "-12", "572"])).unwrap();
        assert_eq!(args.digits, vec!["-12", "572"]);
    }
}
