use clap::Parser;

/// Convert Arc's pinned sidebar into browsable and importable bookmark files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Basename for the generated export files
    #[arg(short = 'o', long = "output", value_name = "BASENAME")]
    pub output: Option<String>,
}

impl Cli {
    /// Parse the process arguments, dropping anything unrecognized first
    pub fn parse_args() -> Self {
        Self::parse_from(recognized(std::env::args()))
    }
}

/// Scan argv ahead of clap: keep the program name and any help or version
/// request, remember the last output flag in any of its spellings, and drop
/// every other token. An output flag followed by nothing, or by an empty
/// value, maps nothing and the default basename stays in force.
fn recognized(argv: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut tokens = argv.into_iter().peekable();
    let mut kept: Vec<String> = Vec::new();
    kept.extend(tokens.next());

    let mut output: Option<String> = None;
    while let Some(token) = tokens.next() {
        if token == "-o" || token == "--output" {
            if tokens.peek().map_or(false, |value| !value.is_empty()) {
                output = tokens.next();
            }
        } else if token == "-h" || token == "--help" || token == "-V" || token == "--version" {
            kept.push(token);
        } else if let Some(value) = token.strip_prefix("--output=") {
            if !value.is_empty() {
                output = Some(value.to_string());
            }
        } else if let Some(value) = token.strip_prefix("-o") {
            let value = value.strip_prefix('=').unwrap_or(value);
            if !value.is_empty() {
                output = Some(value.to_string());
            }
        }
    }

    if let Some(value) = output {
        kept.push(format!("--output={value}"));
    }
    kept
}
