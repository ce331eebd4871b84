//! Drive an [`ImageEngine`] from command-language text.

use super::command::ScriptCommand;
use crate::codec;
use crate::error::CommandError;
use crate::models::AppConfig;
use imagelab_engine::{Channel, Image, ImageEngine};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// What the caller should do after a line or script finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// `quit` was executed; enclosing scripts stop too.
    Quit,
    /// A command failed with `stop_on_error` set. The error has already
    /// been printed.
    Abort,
}

/// Executes scripts against one engine and prints status lines to `out`.
pub struct Interpreter<W: Write> {
    engine: ImageEngine,
    config: AppConfig,
    out: W,
    depth: usize,
}

impl<W: Write> Interpreter<W> {
    pub fn new(config: AppConfig, out: W) -> Self {
        Self {
            engine: ImageEngine::new(),
            config,
            out,
            depth: 0,
        }
    }

    pub fn engine(&self) -> &ImageEngine {
        &self.engine
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Execute every line of `input` until it ends, `quit` runs, or a
    /// command fails with `stop_on_error` set.
    ///
    /// Only failures to write to the output are returned as errors; command
    /// failures are printed.
    pub fn run_reader<R: BufRead>(&mut self, input: R) -> Result<Flow, CommandError> {
        for line in input.lines() {
            match self.run_line(&line?)? {
                Flow::Continue => {}
                flow => return Ok(flow),
            }
        }
        Ok(Flow::Continue)
    }

    /// Open and execute a script file.
    pub fn run_script(&mut self, path: &Path) -> Result<Flow, CommandError> {
        if self.depth >= self.config.max_script_depth {
            return Err(CommandError::ScriptDepth(self.config.max_script_depth));
        }
        let resolved = self.config.resolve(path);
        let file = File::open(&resolved).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CommandError::ScriptNotFound(path.to_path_buf()),
            _ => CommandError::Io(e),
        })?;
        tracing::info!(path = %resolved.display(), depth = self.depth + 1, "Running script");

        self.depth += 1;
        let flow = self.run_reader(BufReader::new(file));
        self.depth -= 1;
        flow
    }

    /// Parse and execute one line, printing its status or error.
    pub fn run_line(&mut self, line: &str) -> Result<Flow, CommandError> {
        let result = ScriptCommand::parse(line).and_then(|command| match command {
            Some(command) => {
                let word = command.word();
                self.execute(command).map(|flow| (Some(word), flow))
            }
            None => Ok((None, Flow::Continue)),
        });

        match result {
            Ok((Some(word), flow)) => {
                tracing::info!(command = word, "Executed command");
                if self.config.echo_status && flow == Flow::Continue {
                    writeln!(self.out, "Executed command: {word}")?;
                }
                Ok(flow)
            }
            Ok((None, flow)) => Ok(flow),
            Err(e) => {
                tracing::warn!(%e, line = line.trim(), "Command failed");
                writeln!(self.out, "{e}")?;
                if self.config.stop_on_error {
                    Ok(Flow::Abort)
                } else {
                    Ok(Flow::Continue)
                }
            }
        }
    }

    /// Execute one parsed command.
    pub fn execute(&mut self, command: ScriptCommand) -> Result<Flow, CommandError> {
        match command {
            ScriptCommand::Load { path, name } => {
                let resolved = self.config.resolve(&path);
                let image =
                    codec::load(&resolved, &name).map_err(|source| CommandError::Load {
                        path,
                        source,
                    })?;
                self.engine.load_image(image)?;
            }
            ScriptCommand::Save { path, name } => {
                let image = self.engine.get_image(&name)?;
                let resolved = self.config.resolve(&path);
                codec::save(&resolved, image)
                    .map_err(|source| CommandError::Save { path, source })?;
            }
            ScriptCommand::Histogram { name, path } => {
                let csv = histogram_csv(self.engine.get_image(&name)?);
                std::fs::write(self.config.resolve(&path), csv)?;
            }
            ScriptCommand::Transform { operation, .. } => {
                self.engine.apply(&operation)?;
            }
            ScriptCommand::Run { path } => return self.run_script(&path),
            ScriptCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

/// One row per value `0..=max_value`: counts of red, green, blue and
/// intensity.
fn histogram_csv(image: &Image) -> String {
    let red = image.histogram(Channel::Red);
    let green = image.histogram(Channel::Green);
    let blue = image.histogram(Channel::Blue);
    let intensity = image.intensity_histogram();

    let mut csv = String::from("value,red,green,blue,intensity\n");
    csv.extend((0..=image.max_value()).map(|value| {
        format!(
            "{value},{},{},{},{}\n",
            red.count(value),
            green.count(value),
            blue.count(value),
            intensity.count(value)
        )
    }));
    csv
}
