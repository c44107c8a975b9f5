//! The post list client: cache, forms, and mutation reconciliation.

use blog_core::domain::Post;
use blog_shared::dto::PostPayload;

use crate::api::PostsApi;
use crate::prompt::Prompt;
use crate::view::{ListView, filter_posts, total_pages};

/// Which path a mutating call took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// The server accepted the request and the cache was reconciled.
    Applied,
    /// Rejected locally before any request was sent.
    Invalid,
    /// The user declined the confirmation.
    Cancelled,
    /// The request failed; the user was alerted.
    Failed,
    /// Nothing to do (e.g. saving with no edit in progress).
    Skipped,
}

/// Create-form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostInput {
    pub title: String,
    pub content: String,
}

impl PostInput {
    fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }

    fn payload(&self) -> PostPayload {
        PostPayload::new(self.title.clone(), self.content.clone())
    }
}

/// Working copy of the one post being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingSlot {
    pub id: i64,
    pub input: PostInput,
}

/// Client-side state over the blog API.
///
/// Mutations take `&mut self`, so a single client applies responses in the
/// order it issued requests. Separate clients are not coordinated: the last
/// update to reach the server wins.
pub struct PostListClient<A, P> {
    api: A,
    prompt: P,
    posts: Vec<Post>,
    input: PostInput,
    editing: Option<EditingSlot>,
    search: String,
    page: usize,
}

impl<A: PostsApi, P: Prompt> PostListClient<A, P> {
    pub const CREATE_INCOMPLETE: &'static str = "Enter title & content";
    pub const CREATE_FAILED: &'static str = "Failed to create post";
    pub const DELETE_CONFIRM: &'static str = "Delete this post?";
    pub const DELETE_FAILED: &'static str = "Failed to delete";
    pub const EDIT_INCOMPLETE: &'static str = "Title & content required";
    pub const EDIT_FAILED: &'static str = "Failed to update post";

    /// Client with an empty cache. Call [`load`](Self::load) once at startup.
    pub fn new(api: A, prompt: P) -> Self {
        Self {
            api,
            prompt,
            posts: Vec::new(),
            input: PostInput::default(),
            editing: None,
            search: String::new(),
            page: 1,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn input(&self) -> &PostInput {
        &self.input
    }

    pub fn editing(&self) -> Option<&EditingSlot> {
        self.editing.as_ref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Replace the cache with the server's list. Failures are logged and
    /// otherwise ignored; the cache keeps its previous contents.
    pub async fn load(&mut self) {
        match self.api.list().await {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "Loaded posts");
                self.posts = posts;
                self.clamp_page();
            }
            Err(e) => tracing::warn!(error = %e, "Failed to load posts"),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.input.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.input.content = content.into();
    }

    /// Create a post from the form. New posts go to the front of the cache.
    pub async fn submit_create(&mut self) -> Outcome {
        if !self.input.is_complete() {
            self.prompt.alert(Self::CREATE_INCOMPLETE);
            return Outcome::Invalid;
        }

        match self.api.create(&self.input.payload()).await {
            Ok(post) => {
                self.posts.insert(0, post);
                self.input = PostInput::default();
                self.clamp_page();
                Outcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, "Create failed");
                self.prompt.alert(Self::CREATE_FAILED);
                Outcome::Failed
            }
        }
    }

    /// Delete after the user confirms.
    pub async fn submit_delete(&mut self, id: i64) -> Outcome {
        if !self.prompt.confirm(Self::DELETE_CONFIRM) {
            return Outcome::Cancelled;
        }

        match self.api.delete(id).await {
            Ok(_) => {
                self.posts.retain(|p| p.id != id);
                self.clamp_page();
                Outcome::Applied
            }
            Err(e) => {
                tracing::warn!(post_id = id, error = %e, "Delete failed");
                self.prompt.alert(Self::DELETE_FAILED);
                Outcome::Failed
            }
        }
    }

    /// Open the editing slot on a cached post, replacing any edit in progress.
    /// Returns `false` if the id is not in the cache.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        let Some(post) = self.posts.iter().find(|p| p.id == id) else {
            return false;
        };
        self.editing = Some(EditingSlot {
            id,
            input: PostInput {
                title: post.title.clone(),
                content: post.content.clone(),
            },
        });
        true
    }

    pub fn set_edit_title(&mut self, title: impl Into<String>) {
        if let Some(slot) = self.editing.as_mut() {
            slot.input.title = title.into();
        }
    }

    pub fn set_edit_content(&mut self, content: impl Into<String>) {
        if let Some(slot) = self.editing.as_mut() {
            slot.input.content = content.into();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Send the working copy. On failure the slot stays open so the user
    /// can retry.
    pub async fn submit_edit(&mut self) -> Outcome {
        let (id, payload) = match self.editing.as_ref() {
            None => return Outcome::Skipped,
            Some(slot) if !slot.input.is_complete() => {
                self.prompt.alert(Self::EDIT_INCOMPLETE);
                return Outcome::Invalid;
            }
            Some(slot) => (slot.id, slot.input.payload()),
        };

        match self.api.update(id, &payload).await {
            Ok(updated) => {
                if let Some(cached) = self.posts.iter_mut().find(|p| p.id == updated.id) {
                    *cached = updated;
                }
                self.editing = None;
                self.clamp_page();
                Outcome::Applied
            }
            Err(e) => {
                tracing::warn!(post_id = id, error = %e, "Update failed");
                self.prompt.alert(Self::EDIT_FAILED);
                Outcome::Failed
            }
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.clamp_page();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
        self.clamp_page();
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page + 1);
    }

    /// The current page of the filtered cache.
    pub fn view(&self) -> ListView<'_> {
        ListView::build(&self.posts, &self.search, self.page)
    }

    // Keeps the page within [1, max(total_pages, 1)] as the filtered set changes.
    fn clamp_page(&mut self) {
        let total = total_pages(filter_posts(&self.posts, &self.search).len());
        self.page = self.page.clamp(1, total.max(1));
    }
}
