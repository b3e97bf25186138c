//! The interactive menu loop
//!
//! A [`Session`] owns everything one run needs: settings, the command runner,
//! the tool probe and the terminal streams. Each [`Session::step`] draws the
//! menu, reads one line and dispatches it; [`Session::run`] repeats until the
//! user quits or input ends.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::{PkgPickError, Result};
use crate::runner::CommandRunner;
use crate::sanity::{package_for_binary, verify_environment, ToolProbe};
use crate::screen;
use crate::types::Action;

/// What the loop does after one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// One line read from the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Input {
    Line(String),
    Eof,
}

/// Menu state plus the collaborators it drives
pub struct Session<C, P, R, W> {
    pub(crate) settings: Settings,
    pub(crate) runner: C,
    pub(crate) probe: P,
    pub(crate) input: R,
    pub(crate) output: W,
}

impl<C, P, R, W> Session<C, P, R, W>
where
    C: CommandRunner,
    P: ToolProbe,
    R: BufRead,
    W: Write,
{
    pub fn new(settings: Settings, runner: C, probe: P, input: R, output: W) -> Self {
        Self {
            settings,
            runner,
            probe,
            input,
            output,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn runner(&self) -> &C {
        &self.runner
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Give back the runner and output stream
    pub fn into_parts(self) -> (C, W) {
        (self.runner, self.output)
    }

    /// Require the fuzzy finder, printing an install hint if it is missing
    pub fn preflight(&mut self) -> Result<()> {
        debug!("Running pre-flight checks");
        let result = verify_environment(&self.probe, &self.settings.finder);
        if let Some(missing) = result.missing_binaries.first() {
            let install_cmd = format!("sudo pacman -S {}", package_for_binary(missing));
            writeln!(
                self.output,
                "{}",
                self.settings.messages().missing_tool_line(missing, &install_cmd)
            )?;
            self.output.flush()?;
            return Err(PkgPickError::missing_tool(missing.clone()));
        }
        info!("Pre-flight checks passed");
        Ok(())
    }

    /// Check the environment, then loop until the user quits
    pub fn run(&mut self) -> Result<()> {
        self.preflight()?;
        while self.step()? == Step::Continue {}
        info!("Menu loop finished");
        Ok(())
    }

    /// Check the environment and run a single action without the menu
    pub fn run_action(&mut self, action: Action) -> Result<()> {
        self.preflight()?;
        self.dispatch(action)?;
        Ok(())
    }

    /// Draw the menu, read one line and act on it
    pub fn step(&mut self) -> Result<Step> {
        screen::menu(&mut self.output, self.settings.messages())?;

        let line = match self.read_line() {
            Input::Line(line) => line,
            Input::Eof => {
                debug!("Input closed, leaving menu");
                writeln!(self.output)?;
                self.output.flush()?;
                return Ok(Step::Quit);
            }
        };

        match self.settings.tokens.resolve(&line) {
            Some(action) => self.dispatch(action),
            None => {
                debug!("Ignoring unrecognized input {:?}", line.trim());
                Ok(Step::Continue)
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> Result<Step> {
        debug!("Dispatching {}", action);
        match action {
            Action::Install => {
                let outcome = self.install()?;
                debug!("Install flow: {:?}", outcome);
            }
            Action::Remove => {
                let outcome = self.remove()?;
                debug!("Remove flow: {:?}", outcome);
            }
            Action::Quit => {
                writeln!(self.output, "{}", self.settings.messages().farewell)?;
                self.output.flush()?;
                return Ok(Step::Quit);
            }
        }
        Ok(Step::Continue)
    }

    /// Read one line; a read error counts as an empty line
    pub(crate) fn read_line(&mut self) -> Input {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Input::Eof,
            Ok(_) => Input::Line(line),
            Err(e) => {
                warn!("Failed to read input: {}", e);
                Input::Line(String::new())
            }
        }
    }

    /// Show the return prompt and block until Enter (or end of input)
    pub(crate) fn pause(&mut self) -> Result<()> {
        write!(self.output, "\n{}", self.settings.messages().press_enter)?;
        self.output.flush()?;
        let _ = self.read_line();
        Ok(())
    }
}
