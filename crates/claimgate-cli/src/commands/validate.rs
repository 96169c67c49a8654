use std::path::Path;

use anyhow::{Context, Result};

use claimgate_policy::Policy;

use crate::cli::ValidateArgs;
use crate::output::{print_error, print_success};

pub fn run(args: &ValidateArgs) -> Result<i32> {
    let mut failures = 0;

    for file in &args.files {
        match validate_file(file) {
            Ok(id) => print_success(&format!("{}: policy {id:?} is valid", file.display())),
            Err(e) => {
                failures += 1;
                print_error(&format!("{}: {e:#}", file.display()));
            }
        }
    }

    Ok(if failures == 0 { 0 } else { 1 })
}

fn validate_file(path: &Path) -> Result<String> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let policy = Policy::from_json(&json).context("decoding policy")?;
    policy.validate().context("validating policy")?;
    Ok(policy.id)
}
