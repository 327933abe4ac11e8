use crossterm::cursor::MoveTo;
use crossterm::cursor::MoveToColumn;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;
use vocab_drill::{CancelFlag, Console, PracticeError, Result, HINT_MARKER};

/// How long feedback stays on screen before the next question.
const FEEDBACK_DELAY: Duration = Duration::from_secs(1);

/// A [`Console`] that reads single key presses from a raw-mode terminal.
///
/// Raw mode is enabled for as long as this exists. Ctrl+C cancels the shared flag and interrupts
/// whichever prompt is waiting.
pub struct TerminalConsole {
    stdout: Stdout,
    cancel: CancelFlag,
}

impl TerminalConsole {
    pub fn new(cancel: CancelFlag) -> io::Result<TerminalConsole> {
        terminal::enable_raw_mode()?;
        Ok(TerminalConsole {
            stdout: io::stdout(),
            cancel,
        })
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        // Raw mode doesn't translate "\n" into a carriage return.
        execute!(self.stdout, Print(line), Print("\r\n"))
    }

    /// Waits for the next key press.
    fn next_key(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    self.cancel.cancel();
                    return Err(PracticeError::Interrupted);
                }
                return Ok(key);
            }
        }
    }
}

impl Drop for TerminalConsole {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl Console for TerminalConsole {
    fn clear(&mut self) {
        let _ = execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0));
    }

    fn show(&mut self, line: &str) {
        let _ = self.write_line(line);
    }

    fn select_one(&mut self, title: &str, choices: &[String]) -> Result<usize> {
        let mut choice = 0;
        loop {
            self.clear();
            if !title.is_empty() {
                self.write_line(title)?;
            }
            self.write_line("Use up/down arrows or W/S to change selection and Enter to select.")?;
            for (index, option) in choices.iter().enumerate() {
                let marker = if index == choice { '>' } else { ' ' };
                self.write_line(&format!("{} {}", marker, option))?;
            }
            match self.next_key()?.code {
                KeyCode::Enter => return Ok(choice),
                KeyCode::Up | KeyCode::Char('w') => choice = choice.saturating_sub(1),
                KeyCode::Down | KeyCode::Char('s') => {
                    if choice + 1 < choices.len() {
                        choice += 1;
                    }
                }
                _ => {}
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let mut answer = String::new();
        loop {
            execute!(
                self.stdout,
                MoveToColumn(0),
                Clear(ClearType::CurrentLine),
                Print(prompt),
                Print(&answer)
            )?;
            match self.next_key()?.code {
                KeyCode::Char(letter) if letter.is_ascii_lowercase() => answer.push(letter),
                KeyCode::Backspace => {
                    answer.pop();
                }
                KeyCode::Enter => break,
                KeyCode::Char(marker) if marker == HINT_MARKER => {
                    answer.push(marker);
                    break;
                }
                _ => {}
            }
        }
        self.write_line("")?;
        Ok(answer)
    }

    fn pause(&mut self) {
        let _ = self.stdout.flush();
        thread::sleep(FEEDBACK_DELAY);
    }
}
