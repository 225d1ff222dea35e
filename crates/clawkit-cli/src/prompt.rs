use dialoguer::{Input, theme::ColorfulTheme};
use std::io::{self, BufRead, IsTerminal, Write};

use clawkit_skills::Prompter;

/// Line prompts on stdin.
///
/// On a terminal the prompt is a dialoguer input; a terminal error (Ctrl+C,
/// closed tty) reads as no answer. Piped input is read line by line and only
/// end of input is no answer.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Option<String> {
        if !io::stdin().is_terminal() {
            return read_answer(prompt, &mut io::stdin().lock(), &mut io::stdout());
        }

        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .ok()
    }
}

/// Show `prompt` on `output` and read one line from `input`, without the line ending.
fn read_answer(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> Option<String> {
    // A prompt that cannot be shown must not swallow the answer.
    let _ = write!(output, "{prompt}: ");
    let _ = output.flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => {
            let _ = writeln!(output);
            None
        }
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}
