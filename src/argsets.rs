/// Options accepted by every subcommand
pub struct GlobalArgs {
    pub schema: Option<String>,
    pub api_key: Option<String>,
}

/// A JSON input file, or `-` for stdin
pub struct InputArgs {
    pub input: String,
}
