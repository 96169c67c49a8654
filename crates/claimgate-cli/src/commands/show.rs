use anyhow::{Context, Result};

use claimgate_policy::Policy;

use crate::cli::ShowArgs;

pub fn run(args: &ShowArgs) -> Result<i32> {
    let json = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let policy = Policy::from_json(&json).context("decoding policy")?;

    println!("{}", policy.to_json_pretty()?);
    Ok(0)
}
