//! Install and remove flows
//!
//! Both flows follow the same shape: pipe a package list into the finder,
//! read back the selection, run the package manager on the terminal, then
//! wait for Enter. An empty selection, a cancelled finder and a failed
//! listing all look the same to the user: the flow ends and the menu
//! returns. The log records which one it was.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::finder::{
    list_available, list_installed, preview_available, preview_installed, FinderOptions,
};
use crate::menu::Session;
use crate::runner::{CommandRunner, Invocation};
use crate::sanity::{select_manager, ToolProbe};
use crate::screen;
use crate::types::PackageManager;

/// How a flow ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Nothing was selected, or the listing/finder failed
    Aborted,
    /// The package manager ran on these packages
    Ran { packages: Vec<String>, success: bool },
}

/// Trimmed finder output as one package name, `None` if empty
pub fn parse_single(output: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(output);
    let name = text.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Finder output as an ordered list of names, `None` if nothing was selected.
///
/// Only the block as a whole is trimmed. Lines split on `\n` alone, duplicates
/// are kept and blank lines are dropped.
pub fn parse_multi(output: &[u8]) -> Option<Vec<String>> {
    let text = String::from_utf8_lossy(output);
    let names: Vec<String> = text
        .trim()
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    (!names.is_empty()).then_some(names)
}

/// `<mgr> -S <package>`, run as the current user
pub fn install_invocation(manager: PackageManager, package: &str) -> Invocation {
    Invocation::new(manager.binary(), ["-S", package])
}

/// `pacman -Rns <packages...>` with elevated privileges
pub fn remove_invocation(packages: &[String]) -> Invocation {
    let args = std::iter::once("-Rns".to_string()).chain(packages.iter().cloned());
    Invocation::new(PackageManager::Pacman.binary(), args).privileged()
}

impl<C, P, R, W> Session<C, P, R, W>
where
    C: CommandRunner,
    P: ToolProbe,
    R: BufRead,
    W: Write,
{
    /// Pick one package from the full list and install it
    pub fn install(&mut self) -> Result<FlowOutcome> {
        let manager = select_manager(&self.probe, self.settings.allow_enhanced);
        let messages = self.settings.messages();
        info!("Install flow using {}", manager);

        writeln!(self.output, "{}", messages.fetching_available)?;
        self.output.flush()?;

        let pipeline = FinderOptions::new(
            self.settings.finder.as_str(),
            self.settings.height,
            messages.install_header,
        )
        .preview(preview_available(manager))
        .pipeline(&list_available(manager));

        let Some(package) = self.capture(&pipeline).and_then(|out| parse_single(&out)) else {
            return Ok(FlowOutcome::Aborted);
        };

        screen::clear(&mut self.output)?;
        writeln!(self.output, "{}", messages.installing_line(&package))?;
        self.output.flush()?;

        let success = self.interactive(&install_invocation(manager, &package));
        self.pause()?;
        Ok(FlowOutcome::Ran {
            packages: vec![package],
            success,
        })
    }

    /// Pick any number of installed packages and remove them
    pub fn remove(&mut self) -> Result<FlowOutcome> {
        let messages = self.settings.messages();
        info!("Remove flow");

        writeln!(self.output, "{}", messages.fetching_installed)?;
        self.output.flush()?;

        let pipeline = FinderOptions::new(
            self.settings.finder.as_str(),
            self.settings.height,
            messages.remove_header,
        )
        .preview(preview_installed(PackageManager::Pacman))
        .multi(true)
        .pipeline(&list_installed(PackageManager::Pacman));

        let Some(packages) = self.capture(&pipeline).and_then(|out| parse_multi(&out)) else {
            return Ok(FlowOutcome::Aborted);
        };

        screen::clear(&mut self.output)?;
        writeln!(self.output, "{}", messages.removing_line(&packages))?;
        self.output.flush()?;

        let success = self.interactive(&remove_invocation(&packages));
        self.pause()?;
        Ok(FlowOutcome::Ran { packages, success })
    }

    /// Capture a pipeline; any failure means "no selection"
    fn capture(&mut self, pipeline: &str) -> Option<Vec<u8>> {
        match self.runner.capture_shell(pipeline) {
            Ok(out) => Some(out),
            Err(e) => {
                debug!("No selection: {}", e);
                None
            }
        }
    }

    /// Run on the terminal; failures are logged, never propagated
    fn interactive(&mut self, invocation: &Invocation) -> bool {
        match self.runner.run_interactive(invocation) {
            Ok(exit) if exit.success => true,
            Ok(exit) => {
                warn!("{} exited with {:?}", invocation.program, exit.code);
                false
            }
            Err(e) => {
                warn!("{}", e);
                false
            }
        }
    }
}
