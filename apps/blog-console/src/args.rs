//! Command-line surface: the startup flags and the commands typed at the prompt.

use clap::{Parser, Subcommand};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api/";

#[derive(Parser, Debug)]
#[command(name = "blog-console", version, about = "Terminal front end for the blog API", long_about = None)]
pub struct Cli {
    /// API prefix the posts resource lives under
    #[arg(long, env = "BLOG_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

/// One line typed at the prompt. The first word names the command.
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct Repl {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Redraw the list
    #[command(alias = "list")]
    Show,
    /// Fetch the list from the server again
    Reload,
    /// Set the new post's title
    Title {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Set the new post's content
    Content {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Create the post from title and content
    Publish,
    /// Filter by title or content; no text clears the filter
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Jump to a page
    Page { page: usize },
    /// Next page
    Next,
    /// Previous page
    Prev,
    /// Start editing a post
    Edit { id: i64 },
    /// Change the title being edited
    EditTitle {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Change the content being edited
    EditContent {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Send the edit
    Save,
    /// Abandon the edit
    Cancel,
    /// Delete a post (asks first)
    Delete { id: i64 },
    /// Leave the console
    #[command(alias = "exit")]
    Quit,
}

impl Command {
    /// Parse a prompt line. A blank line redraws the list.
    pub fn parse(line: &str) -> Result<Self, clap::Error> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(Command::Show);
        }
        Repl::try_parse_from(words).map(|repl| repl.command)
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn test_startup_flag() {
        let cli = Cli::try_parse_from(["blog-console", "--api-url", "http://example.test/api/"])
            .unwrap();
        assert_eq!(cli.api_url, "http://example.test/api/");
    }

    #[test]
    fn test_text_arguments_are_word_lists() {
        assert_eq!(
            Command::parse("title Hello  world\n").unwrap(),
            Command::Title {
                words: vec!["Hello".into(), "world".into()]
            }
        );
        assert_eq!(
            Command::parse("search\n").unwrap(),
            Command::Search { words: vec![] }
        );
        assert_eq!(
            Command::parse("edit-content new body").unwrap(),
            Command::EditContent {
                words: vec!["new".into(), "body".into()]
            }
        );
    }

    #[test]
    fn test_numeric_arguments() {
        assert_eq!(Command::parse("delete 42").unwrap(), Command::Delete { id: 42 });
        assert_eq!(Command::parse("page 3\r\n").unwrap(), Command::Page { page: 3 });

        let err = Command::parse("edit abc").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = Command::parse("page").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_bare_commands_and_aliases() {
        assert_eq!(Command::parse("\n").unwrap(), Command::Show);
        assert_eq!(Command::parse("list").unwrap(), Command::Show);
        assert_eq!(Command::parse("next").unwrap(), Command::Next);
        assert_eq!(Command::parse("exit\n").unwrap(), Command::Quit);
        assert!(Command::parse("frobnicate").is_err());
    }

    #[test]
    fn test_help_is_generated() {
        let err = Command::parse("help").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        let text = err.to_string();
        assert!(text.contains("edit-title"));
        assert!(text.contains("publish"));
    }
}
