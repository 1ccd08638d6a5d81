//! Full-screen terminal view: trigger searches with single keys.
//!
//! | Key | Action |
//! |---|---|
//! | `b` `d` `u` `g` `a` | BFS, DFS, UCS, greedy, A* |
//! | `m` | multi-goal greedy tour |
//! | `r` | new grid |
//! | `q`, Esc | quit |

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, ClearType},
};
use trove_paths::Algorithm;

use crate::render::Renderer;
use crate::session::{Report, Session};

/// What a key press asks for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Search(Algorithm),
    Tour,
    Regenerate,
    Quit,
}

/// Map a key to an [`Action`].
pub fn action_for(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('b') => Some(Action::Search(Algorithm::Bfs)),
        KeyCode::Char('d') => Some(Action::Search(Algorithm::Dfs)),
        KeyCode::Char('u') => Some(Action::Search(Algorithm::Ucs)),
        KeyCode::Char('g') => Some(Action::Search(Algorithm::Greedy)),
        KeyCode::Char('a') => Some(Action::Search(Algorithm::Astar)),
        KeyCode::Char('m') => Some(Action::Tour),
        KeyCode::Char('r') => Some(Action::Regenerate),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Puts the terminal in raw mode on the alternate screen; restores it on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the interactive view until the user quits.
pub fn run(session: &mut Session, color: bool) -> io::Result<()> {
    let _guard = TerminalGuard::enter()?;
    let renderer = if color {
        Renderer::colored()
    } else {
        Renderer::plain()
    }
    .raw();

    let mut report: Option<Report> = None;
    let mut status = String::from("press a key");

    loop {
        draw(&renderer, session, report.as_ref(), &status)?;

        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        else {
            continue;
        };
        let Some(action) = action_for(code, modifiers) else {
            continue;
        };

        match action {
            Action::Quit => return Ok(()),
            Action::Search(algorithm) => {
                report = session.run(algorithm);
                status = format!("{algorithm} done");
            }
            Action::Tour => {
                report = session.run_tour();
                status = "greedy tour done".to_string();
            }
            Action::Regenerate => {
                report = None;
                status = if !session.can_regenerate() {
                    "fixed layout: nothing to regenerate".to_string()
                } else {
                    match session.regenerate() {
                        Ok(()) => "new grid".to_string(),
                        Err(e) => {
                            log::warn!("regeneration failed: {e}");
                            format!("regeneration failed: {e}")
                        }
                    }
                };
            }
        }
    }
}

fn draw(
    renderer: &Renderer,
    session: &Session,
    report: Option<&Report>,
    status: &str,
) -> io::Result<()> {
    let mut stdout = io::stdout();
    queue!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    let path = report.map_or(&[][..], |r| r.result.path());
    renderer.grid(&mut stdout, session.grid(), path)?;
    queue!(stdout, Print("\r\n"))?;
    if let Some(r) = report {
        renderer.table(&mut stdout, std::slice::from_ref(r))?;
    }
    queue!(
        stdout,
        Print("\r\n"),
        Print("[b]fs [d]fs [u]cs [g]reedy [a]* [m]ulti [r]eset [q]uit\r\n"),
        Print(status),
    )?;
    stdout.flush()
}
