//! # Blog Console
//!
//! Line-oriented terminal front end over the blog API. Type `help` for the
//! command list.

use std::io::{self, BufRead, Write};

use blog_client::{HttpPostsApi, Outcome, PostListClient};

use clap::Parser;

mod args;
mod prompt;
mod render;

use args::{Cli, Command};
use prompt::TerminalPrompt;

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let api = HttpPostsApi::new(&cli.api_url).map_err(io::Error::other)?;
    let mut client = PostListClient::new(api, TerminalPrompt);

    tracing::info!(api_url = %cli.api_url, "Loading posts");
    client.load().await;
    print!("{}", render::render(&client));

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                // Help text and usage errors alike.
                err.print()?;
                continue;
            }
        };

        let outcome = match command {
            Command::Quit => break,
            Command::Show => None,
            Command::Reload => {
                client.load().await;
                None
            }
            Command::Title { words } => {
                client.set_title(words.join(" "));
                None
            }
            Command::Content { words } => {
                client.set_content(words.join(" "));
                None
            }
            Command::Publish => Some(client.submit_create().await),
            Command::Search { words } => {
                client.set_search(words.join(" "));
                None
            }
            Command::Page { page } => {
                client.go_to_page(page);
                None
            }
            Command::Next => {
                client.next_page();
                None
            }
            Command::Prev => {
                client.prev_page();
                None
            }
            Command::Edit { id } => {
                if !client.begin_edit(id) {
                    eprintln!("No post {id} in the list");
                }
                None
            }
            Command::EditTitle { words } => {
                client.set_edit_title(words.join(" "));
                None
            }
            Command::EditContent { words } => {
                client.set_edit_content(words.join(" "));
                None
            }
            Command::Save => Some(client.submit_edit().await),
            Command::Cancel => {
                client.cancel_edit();
                None
            }
            Command::Delete { id } => Some(client.submit_delete(id).await),
        };

        if let Some(outcome) = outcome {
            tracing::debug!(?outcome, "Command finished");
            if outcome == Outcome::Skipped {
                eprintln!("Nothing is being edited");
            }
        }

        print!("{}", render::render(&client));
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(io::stderr),
        )
        .init();
}
