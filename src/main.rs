//! Rupee Words CLI
//!
//! Prints amounts in Indian-system English words.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --amount 1234.56
//! cargo run -- amounts.csv > words.csv
//! cargo run -- --rounding half-even --max-rupees 100000 amounts.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use rupee_words::{BatchConverter, Converter, ConverterConfig, Result, WordsError};
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process;

/// What the binary was asked to convert.
enum Input {
    Amount(String),
    CsvFile(String),
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let (config, input) = parse_args(env::args().skip(1))?;
    let converter = Converter::new(config);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match input {
        Input::Amount(value) => {
            let words = converter.convert_str(&value)?;
            writeln!(handle, "{}", words)?;
        }
        Input::CsvFile(path) => {
            let file = File::open(path)?;
            let reader = BufReader::new(file);
            BatchConverter::new(converter).convert_csv(reader, handle)?;
        }
    }

    Ok(())
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<(ConverterConfig, Input)> {
    let mut config = ConverterConfig::default();
    let mut input = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--amount" => input = Some(Input::Amount(flag_value(&arg, args.next())?)),
            "--rounding" => config = config.with_rounding(flag_value(&arg, args.next())?.parse()?),
            "--max-rupees" => {
                let value = flag_value(&arg, args.next())?;
                let max = value
                    .trim()
                    .parse()
                    .map_err(|_| WordsError::InvalidArgument {
                        flag: arg.clone(),
                        value: value.clone(),
                    })?;
                config = config.with_max_rupees(max);
            }
            flag if flag.starts_with("--") => {
                return Err(WordsError::InvalidArgument {
                    flag: flag.to_string(),
                    value: String::new(),
                });
            }
            _ => input = Some(Input::CsvFile(arg.clone())),
        }
    }

    input
        .map(|input| (config, input))
        .ok_or(WordsError::MissingArgument)
}

fn flag_value(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| WordsError::InvalidArgument {
        flag: flag.to_string(),
        value: String::new(),
    })
}
