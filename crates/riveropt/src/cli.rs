// Author: Dustin Pilgrim
// License: MIT

use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

use riveropt_core::{ScopeFlags, ValueKind};

#[derive(Debug, Parser)]
#[command(name = "riveropt", version, about = "Read and change river's runtime options.")]
pub struct Args {
    /// Log to stderr (in addition to the log file)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Override log file path (default: $XDG_STATE_HOME/riveropt/riveropt.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ScopeArgs {
    /// Scope the option to the output with this name (e.g. DP-1)
    #[arg(long, value_name = "NAME", conflicts_with = "focused_output")]
    pub output: Option<String>,

    /// Scope the option to the currently focused output
    #[arg(long)]
    pub focused_output: bool,
}

impl From<ScopeArgs> for ScopeFlags {
    fn from(args: ScopeArgs) -> Self {
        ScopeFlags {
            output: args.output,
            focused_output: args.focused_output,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Declare an option with a type and initial value
    DeclareOption {
        #[command(flatten)]
        scope: ScopeArgs,

        /// Make this global option the default for all outputs
        #[arg(long)]
        output_default: bool,

        #[arg(value_parser = NonEmptyStringValueParser::new())]
        key: String,

        #[arg(value_name = "TYPE")]
        kind: ValueKind,

        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Print the current value of an option
    GetOption {
        #[command(flatten)]
        scope: ScopeArgs,

        #[arg(value_parser = NonEmptyStringValueParser::new())]
        key: String,
    },

    /// Set an option to a new value
    SetOption {
        #[command(flatten)]
        scope: ScopeArgs,

        #[arg(value_parser = NonEmptyStringValueParser::new())]
        key: String,

        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Add a (possibly negative) amount to a numeric option
    ModOption {
        #[command(flatten)]
        scope: ScopeArgs,

        #[arg(value_parser = NonEmptyStringValueParser::new())]
        key: String,

        #[arg(allow_hyphen_values = true)]
        delta: String,
    },
}

/// riverctl spells its long flags with a single dash; accept both.
///
/// Only flags ahead of the subcommand's first positional are rewritten, so an
/// operand that happens to read `-output` reaches clap untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut out: Vec<OsString> = args.next().into_iter().collect();

    // Global flags up to and including the subcommand name.
    while let Some(arg) = args.next() {
        let takes_value = arg.to_str() == Some("--log-file");
        let is_subcommand = !arg.to_string_lossy().starts_with('-');
        out.push(arg);

        if takes_value {
            out.extend(args.next());
        }
        if is_subcommand {
            break;
        }
    }

    while let Some(arg) = args.next() {
        let rewritten = match arg.to_str() {
            Some("-output") | Some("--output") => {
                out.push(OsString::from("--output"));
                out.extend(args.next());
                continue;
            }
            Some("-focused-output") => Some("--focused-output"),
            Some("-output-default") => Some("--output-default"),
            Some(s) if s.starts_with('-') && s != "--" => None,
            // first positional (or `--`): the rest are operands
            _ => {
                out.push(arg);
                break;
            }
        };

        out.push(rewritten.map(OsString::from).unwrap_or(arg));
    }

    out.extend(args);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(normalize_args(args.iter().map(OsString::from)))
    }

    #[test]
    fn test_riverctl_style_flags() {
        let args = parse(&["riveropt", "mod-option", "-output", "DP-1", "gap-size", "-8"]).unwrap();

        match args.cmd {
            Cmd::ModOption { scope, key, delta } => {
                assert_eq!(scope.output.as_deref(), Some("DP-1"));
                assert!(!scope.focused_output);
                assert_eq!(key, "gap-size");
                assert_eq!(delta, "-8");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_declare_option() {
        let args = parse(&[
            "riveropt",
            "declare-option",
            "-output-default",
            "view-padding",
            "uint",
            "6",
        ])
        .unwrap();

        match args.cmd {
            Cmd::DeclareOption {
                scope,
                output_default,
                key,
                kind,
                value,
            } => {
                assert_eq!(ScopeFlags::from(scope), ScopeFlags::default());
                assert!(output_default);
                assert_eq!(key, "view-padding");
                assert_eq!(kind, ValueKind::Uint);
                assert_eq!(value, "6");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_declare_empty_string_value() {
        let args = parse(&["riveropt", "declare-option", "background-color", "string", ""]).unwrap();

        match args.cmd {
            Cmd::DeclareOption { kind, value, .. } => {
                assert_eq!(kind, ValueKind::String);
                assert_eq!(value, "");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        assert!(parse(&["riveropt", "declare-option", "k", "float", "1"]).is_err());
    }

    #[test]
    fn test_output_flags_are_exclusive() {
        assert!(
            parse(&[
                "riveropt",
                "get-option",
                "-output",
                "DP-1",
                "-focused-output",
                "gap-size"
            ])
            .is_err()
        );
    }

    #[test]
    fn test_empty_key_is_rejected() {
        assert!(parse(&["riveropt", "get-option", ""]).is_err());
    }

    #[test]
    fn test_set_negative_value() {
        let args = parse(&["riveropt", "set-option", "--focused-output", "offset", "-3"]).unwrap();

        match args.cmd {
            Cmd::SetOption { scope, value, .. } => {
                assert!(scope.focused_output);
                assert_eq!(value, "-3");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_normalize_stops_at_double_dash() {
        let args = normalize_args(
            ["riveropt", "set-option", "-output", "DP-1", "--", "title", "-output"]
                .into_iter()
                .map(OsString::from),
        );

        assert_eq!(args[2], OsString::from("--output"));
        assert_eq!(args[6], OsString::from("-output"));
    }

    #[test]
    fn test_operand_spelled_like_a_flag_is_kept() {
        let args = parse(&["riveropt", "set-option", "-output", "DP-1", "title", "-output"]).unwrap();

        match args.cmd {
            Cmd::SetOption { scope, key, value } => {
                assert_eq!(scope.output.as_deref(), Some("DP-1"));
                assert_eq!(key, "title");
                assert_eq!(value, "-output");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_output_named_like_a_flag() {
        let args = normalize_args(
            ["riveropt", "-v", "get-option", "-output", "-focused-output", "gap-size"]
                .into_iter()
                .map(OsString::from),
        );

        assert_eq!(args[3], OsString::from("--output"));
        assert_eq!(args[4], OsString::from("-focused-output"));
        assert_eq!(args[5], OsString::from("gap-size"));
    }
}
