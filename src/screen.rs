//! Terminal drawing: clear screen, banner and menu
//!
//! Uses crossterm commands queued onto any `Write`, so the same code renders
//! to the real terminal and to an in-memory buffer in tests.

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;

use crate::messages::Messages;

const BANNER: &str = r"
             _                _      _
  _ __  ___ | | ____ __   ___(_) ___| | __
 | '_ \/ __|| |/ / '_ \ / __| |/ __| |/ /
 | |_) \__ \|   <| |_) | (__| | (__|   <
 | .__/|___/|_|\_\ .__/ \___|_|\___|_|\_\
 |_|             |_|
";

/// Clear the screen and move the cursor home
pub fn clear<W: Write>(out: &mut W) -> std::io::Result<()> {
    queue!(out, Clear(ClearType::All), Clear(ClearType::Purge), MoveTo(0, 0))?;
    out.flush()
}

/// Cyan banner followed by the localized subtitle
pub fn banner<W: Write>(out: &mut W, messages: &Messages) -> std::io::Result<()> {
    queue!(
        out,
        SetForegroundColor(Color::Cyan),
        Print(BANNER),
        Print(format!("   {}\n", messages.subtitle)),
        ResetColor,
        Print("\n"),
    )?;
    out.flush()
}

/// Full menu screen, ending with the input prompt (no trailing newline)
pub fn menu<W: Write>(out: &mut W, messages: &Messages) -> std::io::Result<()> {
    clear(out)?;
    banner(out, messages)?;
    writeln!(out, "{}", messages.menu_install)?;
    writeln!(out, "{}", messages.menu_remove)?;
    writeln!(out, "{}", messages.menu_quit)?;
    write!(out, "\n{}", messages.prompt)?;
    out.flush()
}
