//! Line-oriented terminal session.
//!
//! Reads lines of keys, feeds them to the engine and prints the display
//! after each line.

use crate::calculator::{Action, CalculatorEngine, copy_to_clipboard};
use crate::config::Config;
use crate::display::Display;
use crate::error::Result;
use crate::input::parse_keys;
use std::io::{BufRead, Write};

/// Words that end an interactive session.
const QUIT_WORDS: &[&str] = &["quit", "exit"];

pub struct Session {
    engine: CalculatorEngine,
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            config,
        }
    }

    /// Apply every key in `line` and return the resulting display.
    pub fn feed(&mut self, line: &str) -> Display {
        for action in parse_keys(line, &self.config.keys) {
            self.engine.apply(action);
            if action == Action::Equals && self.config.copy_on_equals {
                self.copy_result();
            }
        }
        self.engine.render()
    }

    /// Run until the input is exhausted or a quit word is read.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
        prompt: bool,
    ) -> Result<()> {
        self.show_prompt(&mut output, prompt)?;

        for line in input.lines() {
            let line = line?;
            if QUIT_WORDS.iter().any(|word| *word == line.trim()) {
                break;
            }

            let display = self.feed(&line);
            self.write_display(&mut output, &display)?;
            self.show_prompt(&mut output, prompt)?;
        }

        Ok(())
    }

    /// Print a display in the configured format.
    pub fn write_display<W: Write>(&self, output: &mut W, display: &Display) -> Result<()> {
        if self.config.json {
            writeln!(output, "{}", display.to_json()?)?;
        } else {
            writeln!(output, "{}", display)?;
        }
        Ok(())
    }

    fn show_prompt<W: Write>(&self, output: &mut W, prompt: bool) -> Result<()> {
        if prompt {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;
        }
        Ok(())
    }

    fn copy_result(&self) {
        let display = self.engine.render();
        if let Err(e) = copy_to_clipboard(&display.text_for_clipboard()) {
            tracing::warn!("{}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(config: Config, input: &str) -> String {
        let mut session = Session::new(config);
        let mut output = Vec::new();
        session.run(Cursor::new(input), &mut output, false).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_feed_accumulates_across_lines() {
        let mut session = Session::new(Config::default());
        session.feed("2 +");
        let display = session.feed("3 * 4 =");
        assert_eq!(display.current, "20");
        assert_eq!(display.expression, "5 × 4 =");
    }

    #[test]
    fn test_letter_keys() {
        let mut session = Session::new(Config::default());
        let display = session.feed("123bn");
        assert_eq!(display.current, "-12");
        let display = session.feed("c");
        assert_eq!(display.expression, "");
        assert_eq!(display.current, "0");
    }

    #[test]
    fn test_text_output() {
        let output = run_session(Config::default(), "1200+34=\n");
        assert_eq!(output, "1,200 + 34 =\n1,234\n");
    }

    #[test]
    fn test_json_output() {
        let config = Config {
            json: true,
            ..Config::default()
        };
        let output = run_session(config, "8/0=\n");
        assert_eq!(
            output,
            "{\"expression\":\"Cannot divide by 0\",\"current\":\"0\"}\n"
        );
    }

    #[test]
    fn test_quit_word_stops() {
        let output = run_session(Config::default(), "5\nquit\n6\n");
        assert_eq!(output, "\n5\n");
    }

    #[test]
    fn test_prompt() {
        let mut session = Session::new(Config::default());
        let mut output = Vec::new();
        session.run(Cursor::new("7\n"), &mut output, true).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "> \n7\n> ");
    }
}
