//! Parse command-language lines into typed [`ScriptCommand`]s.

use crate::error::CommandError;
use imagelab_engine::{Axis, Channel, Operation};
use std::path::PathBuf;

/// One parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Load { path: PathBuf, name: String },
    Save { path: PathBuf, name: String },
    /// Write per-value channel frequencies of `name` as CSV.
    Histogram { name: String, path: PathBuf },
    /// An engine transformation. `word` is the command as typed.
    Transform {
        word: &'static str,
        operation: Operation,
    },
    Run { path: PathBuf },
    Quit,
}

impl ScriptCommand {
    /// Parse one line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        if line.trim_start().starts_with('#') {
            return Ok(None);
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&word, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match word {
            "load" => {
                let [path, name] = exact(args)?;
                ScriptCommand::Load {
                    path: PathBuf::from(path),
                    name: name.to_string(),
                }
            }
            "save" => {
                let [path, name] = exact(args)?;
                ScriptCommand::Save {
                    path: PathBuf::from(path),
                    name: name.to_string(),
                }
            }
            "histogram" => {
                let [name, path] = exact(args)?;
                ScriptCommand::Histogram {
                    name: name.to_string(),
                    path: PathBuf::from(path),
                }
            }
            "run" => {
                let [path] = exact(args)?;
                ScriptCommand::Run {
                    path: PathBuf::from(path),
                }
            }
            "quit" => {
                exact::<0>(args)?;
                ScriptCommand::Quit
            }
            "greyscale" => {
                let (method, source, target) = match args {
                    [source, target] => ("luma-component", *source, *target),
                    [method, source, target] => (*method, *source, *target),
                    _ => return Err(CommandError::InvalidFormat),
                };
                let operation =
                    greyscale(method, source, target).ok_or(CommandError::UnknownCommand)?;
                ScriptCommand::Transform {
                    word: "greyscale",
                    operation,
                }
            }
            _ => {
                let (word, operation) = transform(word, args)?;
                ScriptCommand::Transform { word, operation }
            }
        };
        Ok(Some(command))
    }

    /// The command word used in status messages.
    pub fn word(&self) -> &'static str {
        match self {
            ScriptCommand::Load { .. } => "load",
            ScriptCommand::Save { .. } => "save",
            ScriptCommand::Histogram { .. } => "histogram",
            ScriptCommand::Transform { word, .. } => *word,
            ScriptCommand::Run { .. } => "run",
            ScriptCommand::Quit => "quit",
        }
    }
}

/// Exactly `N` arguments, else a format error.
fn exact<'a, const N: usize>(args: &[&'a str]) -> Result<[&'a str; N], CommandError> {
    <[&str; N]>::try_from(args).map_err(|_| CommandError::InvalidFormat)
}

fn greyscale(method: &str, source: &str, target: &str) -> Option<Operation> {
    let source = source.to_string();
    let target = target.to_string();
    let channel = match method {
        "red-component" => Some(Channel::Red),
        "green-component" => Some(Channel::Green),
        "blue-component" => Some(Channel::Blue),
        _ => None,
    };
    if let Some(channel) = channel {
        return Some(Operation::VisualizeChannel {
            source,
            target,
            channel,
        });
    }
    match method {
        "value-component" => Some(Operation::VisualizeValue { source, target }),
        "intensity-component" => Some(Operation::VisualizeIntensity { source, target }),
        "luma-component" => Some(Operation::VisualizeLuma { source, target }),
        _ => None,
    }
}

fn transform(word: &str, args: &[&str]) -> Result<(&'static str, Operation), CommandError> {
    let two = |args: &[&str]| -> Result<(String, String), CommandError> {
        let [source, target] = exact(args)?;
        Ok((source.to_string(), target.to_string()))
    };

    let (word, operation) = match word {
        "red-component" | "green-component" | "blue-component" | "value-component"
        | "intensity-component" | "luma-component" => {
            let [source, target] = exact(args)?;
            let operation =
                greyscale(word, source, target).ok_or(CommandError::UnknownCommand)?;
            (operation.name(), operation)
        }
        "horizontal-flip" | "vertical-flip" => {
            let (source, target) = two(args)?;
            let axis = if word == "horizontal-flip" {
                Axis::Horizontal
            } else {
                Axis::Vertical
            };
            let operation = Operation::Flip {
                source,
                target,
                axis,
            };
            (operation.name(), operation)
        }
        "brighten" => {
            let [increment, source, target] = exact(args)?;
            let increment: i32 = increment.parse().map_err(|_| CommandError::InvalidFormat)?;
            (
                "brighten",
                Operation::Brighten {
                    source: source.to_string(),
                    target: target.to_string(),
                    increment,
                },
            )
        }
        "rgb-split" => {
            let [source, red, green, blue] = exact(args)?;
            (
                "rgb-split",
                Operation::Split {
                    source: source.to_string(),
                    red: red.to_string(),
                    green: green.to_string(),
                    blue: blue.to_string(),
                },
            )
        }
        "rgb-combine" => {
            let [target, red, green, blue] = exact(args)?;
            (
                "rgb-combine",
                Operation::Combine {
                    red: red.to_string(),
                    green: green.to_string(),
                    blue: blue.to_string(),
                    target: target.to_string(),
                },
            )
        }
        "blur" => {
            let (source, target) = two(args)?;
            ("blur", Operation::Blur { source, target })
        }
        "sharpen" => {
            let (source, target) = two(args)?;
            ("sharpen", Operation::Sharpen { source, target })
        }
        "sepia" => {
            let (source, target) = two(args)?;
            ("sepia", Operation::Sepia { source, target })
        }
        "dither" => {
            let (source, target) = two(args)?;
            ("dither", Operation::Dither { source, target })
        }
        _ => return Err(CommandError::UnknownCommand),
    };
    Ok((word, operation))
}
