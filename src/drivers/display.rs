// TiltFlex — Terminal Display
//
// Raw-mode, alternate-screen renderer. Pull model: the UI task hands it a
// state snapshot and the whole frame is repainted. Also owns the keyboard,
// since raw mode swallows Ctrl+C.

use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};

use crate::events::Mode;
use crate::state::Snapshot;

pub struct TermDisplay {
    out: Stdout,
}

impl TermDisplay {
    pub fn new() -> anyhow::Result<Self> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { out })
    }

    /// True when the user asked to quit (q, Esc or Ctrl+C).
    pub fn quit_requested(&mut self) -> anyhow::Result<bool> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(true)
                    }
                    _ => {}
                }
            }
        }
        Ok(false)
    }

    pub fn render(&mut self, snap: &Snapshot) -> anyhow::Result<()> {
        queue!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        match snap.mode {
            Mode::Debug => self.render_debug(snap)?,
            Mode::Game => self.render_game(snap)?,
        }
        queue!(
            self.out,
            cursor::MoveTo(0, 8),
            SetForegroundColor(Color::DarkGrey),
            Print("[L/ZL] mode   [SL/SR] re-zero   [q] quit"),
            ResetColor
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn render_debug(&mut self, snap: &Snapshot) -> anyhow::Result<()> {
        queue!(
            self.out,
            Print("DEBUG — calibrated accelerometer"),
            cursor::MoveTo(0, 2),
            Print(format!("X: {:+.3} G", snap.sample.x)),
            cursor::MoveTo(0, 3),
            Print(format!("Y: {:+.3} G", snap.sample.y)),
            cursor::MoveTo(0, 4),
            Print(format!("Z: {:+.3} G", snap.sample.z)),
            cursor::MoveTo(0, 6),
            Print(format!("Direction: {}", snap.direction)),
        )?;
        Ok(())
    }

    fn render_game(&mut self, snap: &Snapshot) -> anyhow::Result<()> {
        queue!(self.out, Print("TILT REFLEX"))?;
        if snap.round.waiting {
            queue!(
                self.out,
                cursor::MoveTo(0, 3),
                SetForegroundColor(Color::Yellow),
                Print(format!("Tilt {} !", snap.round.instruction)),
                ResetColor
            )?;
        } else if !snap.round.feedback.is_empty() {
            queue!(
                self.out,
                cursor::MoveTo(0, 3),
                SetForegroundColor(Color::Green),
                Print(&snap.round.feedback),
                ResetColor
            )?;
        } else {
            queue!(self.out, cursor::MoveTo(0, 3), Print("Get ready…"))?;
        }
        Ok(())
    }
}

impl Drop for TermDisplay {
    fn drop(&mut self) {
        let _ = execute!(self.out, terminal::LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}
