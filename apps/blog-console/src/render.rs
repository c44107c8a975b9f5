//! Plain-text rendering of the list view.

use std::fmt;

use chrono::Local;

use blog_client::{EditingSlot, ListView, PostInput, PostListClient, PostsApi, Prompt};

pub fn render<A: PostsApi, P: Prompt>(client: &PostListClient<A, P>) -> String {
    render_parts(
        &client.view(),
        client.editing(),
        client.input(),
        client.search(),
    )
}

pub fn render_parts(
    view: &ListView<'_>,
    editing: Option<&EditingSlot>,
    input: &PostInput,
    search: &str,
) -> String {
    Screen {
        view,
        editing,
        input,
        search,
    }
    .to_string()
}

/// Everything shown after each command.
struct Screen<'a> {
    view: &'a ListView<'a>,
    editing: Option<&'a EditingSlot>,
    input: &'a PostInput,
    search: &'a str,
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n== New post ==")?;
        writeln!(f, "  title:   {}", self.input.title)?;
        writeln!(f, "  content: {}", self.input.content)?;

        if self.search.is_empty() {
            writeln!(f, "\n== Posts ==")?;
        } else {
            writeln!(f, "\n== Posts matching \"{}\" ==", self.search)?;
        }

        if self.view.is_empty() {
            writeln!(f, "  No posts found…")?;
        }

        for post in &self.view.posts {
            match self.editing {
                Some(slot) if slot.id == post.id => {
                    writeln!(f, "  [{}] (editing)", post.id)?;
                    writeln!(f, "      title:   {}", slot.input.title)?;
                    writeln!(f, "      content: {}", slot.input.content)?;
                }
                _ => {
                    writeln!(f, "  [{}] {}", post.id, post.title)?;
                    writeln!(f, "      {}", post.content)?;
                    writeln!(
                        f,
                        "      {}",
                        post.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
                    )?;
                }
            }
        }

        let prev = if self.view.prev_disabled() { "(prev)" } else { "<prev" };
        write!(f, "\n  {prev} ")?;
        for page in self.view.pages() {
            if page == self.view.current_page {
                write!(f, "[{page}] ")?;
            } else {
                write!(f, "{page} ")?;
            }
        }
        let next = if self.view.next_disabled() { "(next)" } else { "next>" };
        writeln!(f, "{next}")
    }
}
