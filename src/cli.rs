use clap::Parser;
use std::ffi::OsString;

/// Multi-letter flags that are also accepted with a single dash (`-an 2`).
const SINGLE_DASH_LONG_FLAGS: &[&str] = &["an", "nl", "ap", "cpb", "cpa", "cpo"];

/// Flags whose next argument is their value and must be passed through as is.
const VALUE_FLAGS: &[&str] = &["w", "words", "o", "output", "y", "years", "ap", "an", "nl"];

/// Boolean flags by accepted spelling, with the long name clap knows.
const BOOL_FLAGS: &[(&str, &str)] = &[
    ("cpb", "cpb"),
    ("cpa", "cpa"),
    ("cpo", "cpo"),
    ("q", "quiet"),
    ("quiet", "quiet"),
];

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "brutekit", version)]
#[command(about = "Mutation-based password wordlist generator")]
pub struct Cli {
    /// Comma separated keywords to mutate
    #[arg(short = 'w', long = "words", value_name = "WORDS")]
    pub words: String,

    /// Append numbering range; the value is the minimum digit width (0 disables) [default: 0]
    #[arg(long = "an", value_name = "LEVEL")]
    pub append_numbering: Option<u32>,

    /// Max value of the numbering range [default: 50]
    #[arg(long = "nl", value_name = "LIMIT")]
    pub numbering_limit: Option<u32>,

    /// Years to append: single, comma separated, or range (1990-2000)
    #[arg(short = 'y', long = "years", value_name = "YEARS")]
    pub years: Option<String>,

    /// Comma separated padding values added to the common ones
    #[arg(long = "ap", value_name = "VALUES", allow_hyphen_values = true)]
    pub append_padding: Option<String>,

    /// Put paddings before mutations only
    #[arg(long = "cpb")]
    pub common_paddings_before: bool,

    /// Put paddings after mutations only
    #[arg(long = "cpa")]
    pub common_paddings_after: bool,

    /// Use only the paddings given with -ap
    #[arg(long = "cpo")]
    pub custom_paddings_only: bool,

    /// Output file [default: output.txt]
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<String>,

    /// Do not print the banner
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Cli {
    /// Parse process arguments, accepting single-dash long flags.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn try_parse_normalized<I, S>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }
}

/// Rewrite `-an`, `-cpo=true` and friends into something clap parses.
///
/// Boolean flags take an optional `=value` (`1`, `t`, `true`, `0`, `f`,
/// `false`, ...); a false value drops the flag. The argument following a
/// value-taking flag is never rewritten, nor is anything after a bare `--`.
pub fn normalize_args<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    let mut value_next = false;
    for arg in args {
        let arg: OsString = arg.into();
        if passthrough || value_next {
            value_next = false;
            out.push(arg);
            continue;
        }
        let text = arg.to_str().map(str::to_owned);
        let s = match text.as_deref() {
            Some("--") => {
                passthrough = true;
                out.push(arg);
                continue;
            }
            Some(s) if s.len() > 1 && s.starts_with('-') => s,
            _ => {
                out.push(arg);
                continue;
            }
        };

        let body = s.trim_start_matches('-');
        let (name, value) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        if let Some(&(_, long)) = BOOL_FLAGS.iter().find(|(flag, _)| *flag == name) {
            match value.map(|v| (v, parse_bool(v))) {
                None | Some((_, Some(true))) => out.push(format!("--{}", long).into()),
                Some((_, Some(false))) => {}
                // clap reports the bad value
                Some((v, None)) => out.push(format!("--{}={}", long, v).into()),
            }
        } else if VALUE_FLAGS.contains(&name) {
            value_next = value.is_none();
            if !s.starts_with("--") && SINGLE_DASH_LONG_FLAGS.contains(&name) {
                out.push(format!("-{}", s).into());
            } else {
                out.push(arg);
            }
        } else {
            out.push(arg);
        }
    }
    out
}

/// Boolean spellings accepted by Go's `flag` package.
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
