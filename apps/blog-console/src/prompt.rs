//! Terminal implementation of the client's prompt port.

use std::io::{self, BufRead, Write};

use blog_client::Prompt;

pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn alert(&self, message: &str) {
        eprintln!("!! {message}");
    }

    fn confirm(&self, question: &str) -> bool {
        print!("{question} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read confirmation");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
