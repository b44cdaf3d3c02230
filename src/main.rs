use anyhow::{bail, Context, Result};
use std::env;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::info;

use student_registry::{init_logging, run_session, Registry};

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let csv_path = parse_csv_arg(&args)?;

    let mut registry = Registry::new();
    let stdin = io::stdin();
    run_session(&mut registry, stdin.lock(), io::stdout())?;

    if let Some(path) = csv_path {
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        registry.write_csv(file)?;
        info!(path = %path.display(), count = registry.len(), "exported registry");
    }

    Ok(())
}

/// `--csv <path>` exports the registry when the session ends
fn parse_csv_arg(args: &[String]) -> Result<Option<PathBuf>> {
    match args.get(1).map(String::as_str) {
        None => Ok(None),
        Some("--csv") => match args.get(2) {
            Some(path) => Ok(Some(PathBuf::from(path))),
            None => bail!("--csv needs a file path"),
        },
        Some(other) => bail!("unknown argument: {} (usage: student-registry [--csv <path>])", other),
    }
}
