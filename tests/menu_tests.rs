//! Tests for the menu loop and both flows
//!
//! A recording runner stands in for real processes: capture calls return
//! canned finder output and every call is logged, so the tests can check
//! exactly which commands a session would have run.

use std::collections::{HashSet, VecDeque};
use std::io::Cursor;

use pkgpick::{
    Action, ChildExit, CommandRunner, FlowOutcome, Invocation, Language, PkgPickError, Result,
    Session, Settings, Step, TokenTable, ToolProbe,
};

// =============================================================================
// Fakes
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Capture(String),
    Interactive(Invocation),
}

/// Runner that replays queued capture results and records every call
#[derive(Default)]
struct RecordingRunner {
    captures: VecDeque<Result<Vec<u8>>>,
    interactive_exit: Option<i32>,
    calls: Vec<Call>,
}

impl RecordingRunner {
    fn with_captures(captures: Vec<Result<Vec<u8>>>) -> Self {
        Self {
            captures: captures.into(),
            interactive_exit: Some(0),
            calls: Vec::new(),
        }
    }

    fn interactive_calls(&self) -> Vec<&Invocation> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Interactive(inv) => Some(inv),
                Call::Capture(_) => None,
            })
            .collect()
    }

    fn capture_calls(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Capture(cmd) => Some(cmd.as_str()),
                Call::Interactive(_) => None,
            })
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run_interactive(&mut self, invocation: &Invocation) -> Result<ChildExit> {
        self.calls.push(Call::Interactive(invocation.clone()));
        Ok(ChildExit {
            code: self.interactive_exit,
            success: self.interactive_exit == Some(0),
        })
    }

    fn capture_shell(&mut self, command_line: &str) -> Result<Vec<u8>> {
        self.calls.push(Call::Capture(command_line.to_string()));
        self.captures.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

struct FakeProbe(HashSet<&'static str>);

impl FakeProbe {
    fn with(tools: &[&'static str]) -> Self {
        Self(tools.iter().copied().collect())
    }
}

impl ToolProbe for FakeProbe {
    fn exists(&self, name: &str) -> bool {
        self.0.contains(name)
    }
}

type TestSession = Session<RecordingRunner, FakeProbe, Cursor<Vec<u8>>, Vec<u8>>;

fn session_with(
    input: &str,
    tools: &[&'static str],
    captures: Vec<Result<Vec<u8>>>,
) -> TestSession {
    Session::new(
        Settings::default(),
        RecordingRunner::with_captures(captures),
        FakeProbe::with(tools),
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
    )
}

fn output_text(session: &TestSession) -> String {
    String::from_utf8_lossy(session.output()).to_string()
}

const ALL_TOOLS: &[&str] = &["fzf", "pacman", "yay", "sudo"];
const NO_YAY: &[&str] = &["fzf", "pacman", "sudo"];

// =============================================================================
// Menu Loop Tests
// =============================================================================

#[test]
fn test_unrecognized_input_spawns_nothing() {
    let mut session = session_with("hello\n4\n\n  \ninstall\n", ALL_TOOLS, vec![]);
    for _ in 0..5 {
        assert_eq!(session.step().unwrap(), Step::Continue);
    }
    assert!(session.runner().calls.is_empty());

    // Menu was drawn once per step
    let text = output_text(&session);
    assert_eq!(text.matches("3. [Q]uit").count(), 5);
}

#[test]
fn test_every_quit_token_ends_with_single_farewell() {
    for token in ["3", "c", "q", "e", "Q", " E ", "\tC\t", "3\r"] {
        let mut session = session_with(&format!("{}\n", token), ALL_TOOLS, vec![]);
        session.run().expect("quit should end the loop cleanly");

        let text = output_text(&session);
        assert_eq!(text.matches("See you!").count(), 1, "token {:?}", token);
        assert!(session.runner().calls.is_empty());
    }
}

#[test]
fn test_quit_after_unknown_input() {
    let mut session = session_with("x\ny?\nq\n", ALL_TOOLS, vec![]);
    session.run().unwrap();

    let text = output_text(&session);
    assert_eq!(text.matches("Your choice: ").count(), 3);
    assert_eq!(text.matches("See you!").count(), 1);
}

#[test]
fn test_end_of_input_ends_loop() {
    let mut session = session_with("zzz\n", ALL_TOOLS, vec![]);
    session.run().expect("EOF should end the loop");
    assert!(!output_text(&session).contains("See you!"));
}

#[test]
fn test_missing_finder_fails_before_menu() {
    let mut session = session_with("q\n", &["pacman", "yay"], vec![]);
    let err = session.run().unwrap_err();

    assert!(matches!(err, PkgPickError::MissingTool(ref t) if t == "fzf"));
    assert_eq!(err.exit_code(), 1);

    let text = output_text(&session);
    assert!(text.contains("Error: 'fzf' is required but was not found."));
    assert!(text.contains("sudo pacman -S fzf"));
    assert!(!text.contains("Your choice"));
    assert!(session.runner().calls.is_empty());
}

#[test]
fn test_missing_finder_message_is_localized() {
    let settings = Settings::new("fzf", 90, Language::Tr).unwrap();
    let mut session = Session::new(
        settings,
        RecordingRunner::default(),
        FakeProbe::with(&["pacman"]),
        Cursor::new(Vec::new()),
        Vec::new(),
    );
    assert!(session.run().is_err());
    assert!(output_text(&session).contains(
        "Hata: 'fzf' gerekli ancak bulunamadı. Lütfen yükleyin (sudo pacman -S fzf)."
    ));
}

#[test]
fn test_custom_token_table() {
    let mut tokens = TokenTable::empty();
    tokens.bind("bye", Action::Quit);
    let settings = Settings::default().with_tokens(tokens);

    let mut session = Session::new(
        settings,
        RecordingRunner::default(),
        FakeProbe::with(ALL_TOOLS),
        Cursor::new(b"q\nBYE\n".to_vec()),
        Vec::new(),
    );
    session.run().unwrap();

    // "q" is no longer bound, so the menu was drawn twice
    let text = output_text(&session);
    assert_eq!(text.matches("Your choice: ").count(), 2);
    assert_eq!(text.matches("See you!").count(), 1);
}

// =============================================================================
// Install Flow Tests
// =============================================================================

#[test]
fn test_install_uses_yay_when_present() {
    let mut session = session_with("\n", ALL_TOOLS, vec![Ok(b"neovim\n".to_vec())]);
    let outcome = session.install().unwrap();

    assert_eq!(
        outcome,
        FlowOutcome::Ran {
            packages: vec!["neovim".to_string()],
            success: true
        }
    );

    let runner = session.runner();
    let captures = runner.capture_calls();
    assert_eq!(captures.len(), 1);
    assert!(captures[0].starts_with("yay -Slq | fzf "));
    assert!(captures[0].contains("--preview 'yay -Si {}'"));
    assert!(!captures[0].contains(" -m "));

    let interactive = runner.interactive_calls();
    assert_eq!(interactive.len(), 1);
    assert_eq!(interactive[0].program, "yay");
    assert_eq!(interactive[0].args, vec!["-S", "neovim"]);

    let text = output_text(&session);
    assert!(text.contains("Installing package neovim..."));
    assert!(text.contains("Press Enter to return to the menu..."));
}

#[test]
fn test_install_falls_back_to_pacman() {
    let mut session = session_with("\n", NO_YAY, vec![Ok(b"vim".to_vec())]);
    session.install().unwrap();

    for call in &session.runner().calls {
        match call {
            Call::Capture(cmd) => {
                assert!(!cmd.contains("yay"), "unexpected yay in {:?}", cmd);
                assert!(cmd.starts_with("pacman -Slq | "));
            }
            Call::Interactive(inv) => {
                assert_eq!(inv.program, "pacman");
                assert!(!inv.args.iter().any(|a| a == "yay"));
                assert!(!inv.privileged, "install must not go through sudo");
            }
        }
    }
}

#[test]
fn test_install_no_aur_setting_ignores_yay() {
    let mut settings = Settings::default();
    settings.allow_enhanced = false;
    let mut session = Session::new(
        settings,
        RecordingRunner::with_captures(vec![Ok(b"vim".to_vec())]),
        FakeProbe::with(ALL_TOOLS),
        Cursor::new(b"\n".to_vec()),
        Vec::new(),
    );
    session.install().unwrap();
    assert_eq!(session.runner().interactive_calls()[0].program, "pacman");
}

#[test]
fn test_install_empty_selection_stops() {
    let mut session = session_with("", ALL_TOOLS, vec![Ok(b"  \n".to_vec())]);
    assert_eq!(session.install().unwrap(), FlowOutcome::Aborted);
    assert_eq!(session.runner().calls.len(), 1);
    assert!(!output_text(&session).contains("Press Enter"));
}

#[test]
fn test_install_finder_failure_stops() {
    let mut session = session_with(
        "",
        ALL_TOOLS,
        vec![Err(PkgPickError::exit_status("bash", Some(130)))],
    );
    assert_eq!(session.install().unwrap(), FlowOutcome::Aborted);
    assert_eq!(session.runner().calls.len(), 1);
}

#[test]
fn test_install_failure_still_waits_for_enter() {
    let mut runner = RecordingRunner::with_captures(vec![Ok(b"broken-pkg".to_vec())]);
    runner.interactive_exit = Some(1);
    let mut session = Session::new(
        Settings::default(),
        runner,
        FakeProbe::with(ALL_TOOLS),
        Cursor::new(b"\n".to_vec()),
        Vec::new(),
    );

    let outcome = session.install().unwrap();
    assert_eq!(
        outcome,
        FlowOutcome::Ran {
            packages: vec!["broken-pkg".to_string()],
            success: false
        }
    );
    assert!(output_text(&session).contains("Press Enter"));
}

// =============================================================================
// Remove Flow Tests
// =============================================================================

#[test]
fn test_remove_args_preserve_order() {
    let mut session = session_with("\n", ALL_TOOLS, vec![Ok(b"foo\nbar\nbaz".to_vec())]);
    session.remove().unwrap();

    let runner = session.runner();
    let interactive = runner.interactive_calls();
    assert_eq!(interactive.len(), 1);
    assert_eq!(interactive[0].program, "pacman");
    assert_eq!(interactive[0].args, vec!["-Rns", "foo", "bar", "baz"]);
    assert!(interactive[0].privileged);

    assert!(output_text(&session).contains("Removing: foo, bar, baz"));
}

#[test]
fn test_remove_lists_installed_with_multi_select() {
    let mut session = session_with("", ALL_TOOLS, vec![]);
    session.remove().unwrap();

    let runner = session.runner();
    let captures = runner.capture_calls();
    assert_eq!(captures.len(), 1);
    assert!(captures[0].starts_with("pacman -Qq | fzf -m "));
    assert!(captures[0].contains("--preview 'pacman -Qi {}'"));
}

#[test]
fn test_remove_keeps_duplicates() {
    let mut session = session_with("\n", ALL_TOOLS, vec![Ok(b"\nfoo\nfoo\n\n".to_vec())]);
    session.remove().unwrap();
    assert_eq!(
        session.runner().interactive_calls()[0].args,
        vec!["-Rns", "foo", "foo"]
    );
}

#[test]
fn test_remove_empty_selection_stops() {
    let mut session = session_with("", ALL_TOOLS, vec![Ok(Vec::new())]);
    assert_eq!(session.remove().unwrap(), FlowOutcome::Aborted);
    assert!(session.runner().interactive_calls().is_empty());
}

// =============================================================================
// Full Session Tests
// =============================================================================

#[test]
fn test_session_install_then_remove_then_quit() {
    // Menu choice, Enter after install, menu choice, Enter after remove, quit
    let input = "y\n\nK\n\n3\n";
    let mut session = session_with(
        input,
        NO_YAY,
        vec![Ok(b"htop\n".to_vec()), Ok(b"nano\nvi\n".to_vec())],
    );
    session.run().unwrap();

    let runner = session.runner();
    assert_eq!(runner.calls.len(), 4);
    let interactive = runner.interactive_calls();
    assert_eq!(interactive[0].args, vec!["-S", "htop"]);
    assert_eq!(interactive[1].args, vec!["-Rns", "nano", "vi"]);

    let text = output_text(&session);
    assert_eq!(text.matches("See you!").count(), 1);
}

#[test]
fn test_session_cancelled_finder_returns_to_menu() {
    let mut session = session_with("i\nq\n", ALL_TOOLS, vec![Ok(Vec::new())]);
    session.run().unwrap();

    let runner = session.runner();
    assert_eq!(runner.calls.len(), 1);
    assert!(matches!(runner.calls[0], Call::Capture(_)));
    assert_eq!(output_text(&session).matches("Your choice: ").count(), 2);
}

#[test]
fn test_run_action_skips_menu() {
    let mut session = session_with("\n", ALL_TOOLS, vec![Ok(b"foo\n".to_vec())]);
    session.run_action(Action::Remove).unwrap();

    assert_eq!(session.runner().interactive_calls().len(), 1);
    assert!(!output_text(&session).contains("Your choice"));
}

#[test]
fn test_run_action_requires_finder() {
    let mut session = session_with("", &["pacman"], vec![]);
    assert!(session.run_action(Action::Install).is_err());
    assert!(session.runner().calls.is_empty());
}
