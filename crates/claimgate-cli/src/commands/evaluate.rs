use std::sync::Arc;

use anyhow::{Context, Result, bail};

use claimgate_core::{Claim, ClaimSet};
use claimgate_policy::{Policy, PolicyStore};

use crate::cli::EvaluateArgs;
use crate::output::{print_denied, print_success};

pub fn run(args: &EvaluateArgs) -> Result<i32> {
    let policy = load_policy(args)?;
    let claims = collect_claims(args)?;

    if policy.evaluate(&claims) {
        print_success(&format!("{}: allowed", policy.id));
        Ok(0)
    } else {
        print_denied(&format!("{}: denied", policy.id));
        Ok(2)
    }
}

fn load_policy(args: &EvaluateArgs) -> Result<Arc<Policy>> {
    let store = PolicyStore::new();

    match (&args.policy, &args.policy_dir) {
        (Some(file), _) => Ok(store.load_file(file)?),
        (None, Some(dir)) => {
            let Some(id) = args.id.as_deref() else {
                bail!("--policy-dir requires --id");
            };
            store.load_dir(dir)?;
            store
                .get(id)
                .with_context(|| format!("no policy with id {id:?} in {}", dir.display()))
        }
        (None, None) => bail!("one of --policy or --policy-dir is required"),
    }
}

fn collect_claims(args: &EvaluateArgs) -> Result<ClaimSet> {
    let mut claims: Vec<Claim> = Vec::new();

    if let Some(path) = &args.claims_file {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let set = ClaimSet::from_json(&json)
            .with_context(|| format!("decoding claims from {}", path.display()))?;
        claims.extend(set.iter().cloned());
    }

    for pair in &args.claims {
        claims.push(Claim::parse_pair(pair)?);
    }

    Ok(ClaimSet::new(claims))
}
