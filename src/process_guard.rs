//! Child process lifecycle helpers
//!
//! pkgpick runs package transactions in the foreground. If pkgpick itself is
//! killed while `pacman -Rns` is running, the child must not keep going on
//! its own, so every child is spawned with a parent-death signal.
//!
//! Children are NOT moved into a new process group: `fzf` and `pacman` need
//! the terminal's foreground group to read the keyboard.

use nix::libc;

/// Extension trait for std::process::Command to tie a child's life to ours
pub trait CommandDeathPact {
    /// Deliver SIGTERM to the child when the parent exits
    fn with_parent_death_signal(&mut self) -> &mut Self;
}

impl CommandDeathPact for std::process::Command {
    fn with_parent_death_signal(&mut self) -> &mut Self {
        use std::os::unix::process::CommandExt;
        // SAFETY: prctl is async-signal-safe and touches only the child
        unsafe {
            self.pre_exec(|| {
                if libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGTERM) == -1 {
                    return Err(std::io::Error::last_os_error());
                }
                Ok(())
            });
        }
        self
    }
}

/// Check if running as root (EUID 0)
pub fn is_running_as_root() -> bool {
    nix::unistd::geteuid().is_root()
}
