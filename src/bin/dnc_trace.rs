use std::env;
use std::fs;
use std::process;

use dnc_trace::utils::{format_with_commas, truncate_string};
use dnc_trace::{run_input, Algorithm, Run};

/// Descriptions longer than this are cut in table output.
const TABLE_DESCRIPTION_WIDTH: usize = 96;

/// Per-step divide, merge and combine events are emitted at `TRACE`.
#[cfg(feature = "tracing")]
const LOG_LEVEL: tracing::Level = tracing::Level::TRACE;

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("dnc_trace: {err}");
            Options::print_help();
            process::exit(2);
        }
    };

    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(LOG_LEVEL)
        .init();

    let text = match fs::read_to_string(&options.path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("dnc_trace: cannot read '{}': {err}", options.path);
            process::exit(1);
        }
    };

    let run = match run_input(options.algorithm, &text) {
        Ok(run) => run,
        Err(err) => {
            eprintln!("dnc_trace: invalid {} input: {err}", options.algorithm);
            process::exit(1);
        }
    };

    eprintln!(
        "{}: {} steps recorded from '{}'",
        options.algorithm,
        run.step_count(),
        options.path
    );

    if let Err(err) = options.format.write(&run, options.step) {
        eprintln!("dnc_trace output error: {err}");
        process::exit(1);
    }
}

struct Options {
    algorithm: Algorithm,
    path: String,
    format: OutputFormat,
    step: Option<usize>,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Table;
        let mut step = None;
        let mut positional = Vec::new();

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--step=") {
                step = Some(parse_step(value)?);
            } else if arg == "--step" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --step".to_string())?
                    .into();
                step = Some(parse_step(&value)?);
            } else if arg.starts_with("--") {
                return Err(format!("unrecognized argument '{arg}'"));
            } else {
                positional.push(arg);
            }
        }

        let mut positional = positional.into_iter();
        let algorithm = positional
            .next()
            .ok_or_else(|| "missing algorithm".to_string())?
            .parse::<Algorithm>()?;
        let path = positional
            .next()
            .ok_or_else(|| "missing input file".to_string())?;
        if let Some(extra) = positional.next() {
            return Err(format!("unexpected argument '{extra}'"));
        }

        Ok(Self {
            algorithm,
            path,
            format,
            step,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: dnc_trace <closest-pair|integer-mult> <FILE> [options]

Runs a divide-and-conquer algorithm on FILE and prints its step trace.

Input formats:
  closest-pair    first line n, then n lines of \"x y\"
  integer-mult    two lines, one integer each (non-digits are ignored)

Options:
  --format <table|json>     Output format (default: table)
  --step <N>                Print only step N (0-based, clamped to the last step)
  -h, --help                Print this help message

Examples:
  dnc_trace closest-pair points.txt
  dnc_trace karatsuba numbers.txt --format json
"
        );
    }
}

fn parse_step(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "step must be a non-negative integer".to_string())
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, run: &Run, step: Option<usize>) -> Result<(), String> {
        match self {
            OutputFormat::Table => write_table(run, step),
            OutputFormat::Json => write_json(run, step),
        }
    }
}

/// Index range to print: everything, or the single clamped step.
fn selected(run: &Run, step: Option<usize>) -> std::ops::Range<usize> {
    match step {
        None => 0..run.step_count(),
        Some(_) if run.step_count() == 0 => 0..0,
        Some(i) => {
            let i = i.min(run.step_count() - 1);
            i..i + 1
        }
    }
}

fn write_table(run: &Run, step: Option<usize>) -> Result<(), String> {
    println!("{:>6}  {:<8}  {:>5}  description", "step", "type", "level");
    for i in selected(run, step) {
        let Some(s) = run.step(i) else {
            return Err(format!("step {i} out of range"));
        };
        let level = s
            .level()
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>6}  {:<8}  {:>5}  {}",
            i,
            s.tag(),
            level,
            truncate_string(s.description(), TABLE_DESCRIPTION_WIDTH)
        );
    }
    println!();
    match run {
        Run::Karatsuba(traced) => println!(
            "product ({} digits): {}",
            traced.result.len(),
            format_with_commas(&traced.result)
        ),
        Run::ClosestPair(_) => println!("{}", run.summary()),
    }
    Ok(())
}

fn write_json(run: &Run, step: Option<usize>) -> Result<(), String> {
    let rendered = match (step, run) {
        (None, run) => serde_json::to_string_pretty(run),
        (Some(_), Run::ClosestPair(traced)) => {
            serde_json::to_string_pretty(&traced.steps[selected(run, step)])
        }
        (Some(_), Run::Karatsuba(traced)) => {
            serde_json::to_string_pretty(&traced.steps[selected(run, step)])
        }
    }
    .map_err(|e| e.to_string())?;
    println!("{rendered}");
    Ok(())
}

#[cfg(all(test, feature = "tracing"))]
mod tests {
    use super::*;

    #[test]
    fn subscriber_passes_step_events() {
        let filter = tracing::level_filters::LevelFilter::from_level(LOG_LEVEL);
        assert!(tracing::Level::TRACE <= filter);
        assert!(tracing::Level::DEBUG <= filter);
    }
}
