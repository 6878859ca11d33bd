use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fakecsv", version, about = "Generate fake CSV data")]
pub struct Cli {
    /// Number of rows to include in the generated CSV file.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub rows: i64,
    /// Comma separated list of fields (ex. 'name,age,email') to include in the generated CSV file.
    #[arg(long, default_value = "name,age")]
    pub fields: String,
    /// Name of the file to write the generated CSV data to.
    #[arg(long, default_value = "output.csv")]
    pub filename: String,
    /// Seed for random number generation.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub seed: i64,
    /// Optional TOML settings file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Write a JSON generation report to this path.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
    /// Emit logs as JSON lines.
    #[arg(long, default_value_t = false)]
    pub log_json: bool,
}

impl Cli {
    /// Parse `args`, accepting single-dash long flags such as `-rows 5`.
    pub fn parse_normalized<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_args(args))
    }

    /// The seed as fed to the provider; negative seeds keep their bit pattern.
    pub fn provider_seed(&self) -> u64 {
        self.seed as u64
    }
}

/// Flags that consume the following argument as their value.
const VALUE_FLAGS: &[&str] = &["rows", "fields", "filename", "seed", "config", "report"];

/// Rewrite `-name` / `-name=value` into `--name` / `--name=value`.
///
/// The program name, single-letter flags, negative numbers and everything
/// after a bare `--` pass through untouched. The argument following a
/// value-taking flag is always its value: when it starts with `-` it is
/// joined as `--name=value` so clap does not read it as a flag.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out: Vec<OsString> = Vec::new();
    let mut passthrough = false;
    let mut pending_flag: Option<&'static str> = None;

    for (index, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if index == 0 || passthrough {
            out.push(arg);
            continue;
        }

        if let Some(flag) = pending_flag.take() {
            match arg.to_str() {
                Some(value) if value.starts_with('-') => {
                    out.pop();
                    out.push(format!("--{flag}={value}").into());
                }
                _ => out.push(arg),
            }
            continue;
        }

        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let long = match arg.to_str() {
            Some(text) if is_single_dash_long(text) => format!("-{text}"),
            Some(text) => text.to_string(),
            None => {
                out.push(arg);
                continue;
            }
        };
        pending_flag = long
            .strip_prefix("--")
            .and_then(|name| VALUE_FLAGS.iter().copied().find(|flag| *flag == name));
        out.push(long.into());
    }

    out
}

fn is_single_dash_long(text: &str) -> bool {
    let Some(rest) = text.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split('=').next().unwrap_or_default();
    name.len() > 1 && name.starts_with(|ch: char| ch.is_ascii_alphabetic())
}
