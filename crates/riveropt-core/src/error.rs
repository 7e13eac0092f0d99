// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OptionError>;

#[derive(Debug, Error, PartialEq)]
pub enum OptionError {
    #[error("compositor does not advertise {0}")]
    MissingCapability(&'static str),

    #[error("unknown output '{0}'")]
    UnknownOutput(String),

    #[error("no output is currently focused")]
    NoOutputFocused,

    /// `output` is the output's name when the option was scoped to one.
    #[error("{}", not_declared_message(.key, .output))]
    OptionNotDeclared {
        key: String,
        output: Option<String>,
    },

    #[error("invalid int value '{0}'")]
    InvalidInt(String),

    #[error("invalid uint value '{0}'")]
    InvalidUint(String),

    #[error("invalid fixed value '{0}'")]
    InvalidFixed(String),

    #[error("{0}, use set-option instead")]
    UnsupportedOperation(&'static str),

    #[error("-output-default can only be used for global options")]
    OutputDefaultNotGlobal,

    #[error("wayland: {0}")]
    Transport(String),
}

fn not_declared_message(key: &str, output: &Option<String>) -> String {
    match output {
        Some(name) => format!("option '{key}' has not been declared for output '{name}'"),
        None => format!("option '{key}' has not been declared"),
    }
}
