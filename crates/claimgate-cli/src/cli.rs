use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "claimgate")]
#[command(about = "ClaimGate CLI — validate and evaluate claim policies")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (CLAIMGATE_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate policy documents
    Validate(ValidateArgs),
    /// Evaluate a policy against a claim set
    Evaluate(EvaluateArgs),
    /// Pretty-print a decoded policy
    Show(ShowArgs),
}

#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Policy JSON files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(clap::Args)]
pub struct EvaluateArgs {
    /// Policy JSON file
    #[arg(long, conflicts_with_all = ["policy_dir", "id"])]
    pub policy: Option<PathBuf>,

    /// Directory of policy JSON files
    #[arg(long, requires = "id")]
    pub policy_dir: Option<PathBuf>,

    /// Id of the policy to evaluate from --policy-dir
    #[arg(long)]
    pub id: Option<String>,

    /// Claim as a type=value pair (repeatable)
    #[arg(short, long = "claim", value_name = "TYPE=VALUE")]
    pub claims: Vec<String>,

    /// JSON file holding an array of claims
    #[arg(long)]
    pub claims_file: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct ShowArgs {
    /// Policy JSON file
    pub file: PathBuf,
}
