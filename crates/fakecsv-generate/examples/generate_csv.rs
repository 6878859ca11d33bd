use std::env;
use std::path::PathBuf;

use fakecsv_generate::{GenerateOptions, GenerationEngine, GenerationRequest};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut rows = 10_i64;
    let mut fields = String::from("name,email,age");
    let mut seed = 0_u64;
    let mut out_dir: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--rows" => rows = args.next().ok_or("missing --rows value")?.parse()?,
            "--fields" => fields = args.next().ok_or("missing --fields value")?,
            "--seed" => seed = args.next().ok_or("missing --seed value")?.parse()?,
            "--out" => out_dir = args.next().map(PathBuf::from),
            _ => return Err(format!("unexpected argument '{arg}'").into()),
        }
    }

    let request = GenerationRequest::new(rows, &fields, "demo.csv", seed)?;
    let mut options = GenerateOptions::default();
    if let Some(out_dir) = out_dir {
        options.out_dir = out_dir;
    }

    let result = GenerationEngine::new(options).run(&request)?;
    println!("path={}", result.path.display());
    println!("{}", serde_json::to_string_pretty(&result.report)?);
    Ok(())
}
