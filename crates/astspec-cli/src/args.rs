use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the astspec binary.
#[derive(Parser, Debug)]
#[command(
    name = "astspec",
    version,
    about = "Generate a JSON Schema from a TypeScript AST declaration file"
)]
pub struct CliArgs {
    /// Path to the declaration file (e.g. ast-spec.d.ts).
    pub input: PathBuf,

    /// Where to write the generated schema document.
    #[arg(short = 'o', long = "out", default_value = "ast-spec.json")]
    pub out: PathBuf,
}
