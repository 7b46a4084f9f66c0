//! View state for the portfolio screens.
//!
//! These structs carry everything the renderer reads and the key handlers
//! mutate. The blog pane keeps the unfiltered metadata list and derives the
//! visible rows through the pure filter layer, so the filter controls and the
//! list can never disagree.

use std::sync::Arc;

use crate::blog::{all_tags, filter_posts, PostFilter};
use crate::content::{Post, PostMeta};
use crate::profile::SkillCategory;
use crate::ui::sections::Section;

/// Top-level view state, owned by the application loop.
pub struct UiState {
    pub section: Section,
    pub skills_category: Option<SkillCategory>,
    pub blog: BlogPane,
    pub booking_open: bool,
    pub spinner_frame: usize,
}

impl UiState {
    pub fn new() -> Self {
        UiState {
            section: Section::Home,
            skills_category: None,
            blog: BlogPane::new(),
            booking_open: false,
            spinner_frame: 0,
        }
    }

    /// All categories in order, then back to no filter.
    pub fn cycle_skills_category(&mut self) {
        self.skills_category = match self.skills_category {
            None => Some(SkillCategory::ALL[0]),
            Some(current) => {
                let index = SkillCategory::ALL
                    .iter()
                    .position(|c| *c == current)
                    .unwrap_or(0);
                SkillCategory::ALL.get(index + 1).copied()
            }
        };
    }

    pub fn advance_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }
}

impl Default for UiState {
    fn default() -> Self {
        UiState::new()
    }
}

/// Blog list, filter controls and the optional reading view.
pub struct BlogPane {
    /// Unfiltered metadata for the active language, newest first.
    pub posts: Vec<PostMeta>,
    pub filter: PostFilter,
    /// Selection index into [`Self::visible`].
    pub selected: usize,
    /// A listing load is in flight.
    pub loading: bool,
    /// `/` pressed; printable keys edit the query.
    pub search_editing: bool,
    pub reading: Option<ReadingPane>,
    /// A single-post load is in flight.
    pub post_loading: bool,
}

impl BlogPane {
    pub fn new() -> Self {
        BlogPane {
            posts: Vec::new(),
            filter: PostFilter::default(),
            selected: 0,
            loading: true,
            search_editing: false,
            reading: None,
            post_loading: false,
        }
    }

    /// The rows the list shows: published, filtered, newest first.
    pub fn visible(&self) -> Vec<PostMeta> {
        filter_posts(&self.posts, &self.filter)
    }

    /// Distinct tags across the whole listing, for the tag cycle.
    pub fn tags(&self) -> Vec<String> {
        all_tags(&self.posts)
    }

    pub fn selected_post(&self) -> Option<PostMeta> {
        self.visible().into_iter().nth(self.selected)
    }

    /// Replace the listing after a load completes.
    pub fn set_posts(&mut self, posts: Vec<PostMeta>) {
        self.posts = posts;
        self.loading = false;
        self.clamp_selection();
    }

    pub fn select_next(&mut self) {
        let count = self.visible().len();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let count = self.visible().len();
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    /// No tag, then each known tag in alphabetical order, then no tag again.
    pub fn cycle_tag(&mut self) {
        let tags = self.tags();
        self.filter.active_tag = match self.filter.active_tag.take() {
            None => tags.first().cloned(),
            Some(current) => {
                let index = tags.iter().position(|t| *t == current);
                match index {
                    Some(i) => tags.get(i + 1).cloned(),
                    None => None,
                }
            }
        };
        self.selected = 0;
    }

    pub fn push_query_char(&mut self, c: char) {
        self.filter.query.push(c);
        self.selected = 0;
    }

    pub fn pop_query_char(&mut self) {
        self.filter.query.pop();
        self.selected = 0;
    }

    pub fn clear_filters(&mut self) {
        self.filter = PostFilter::default();
        self.search_editing = false;
        self.selected = 0;
    }
}

impl Default for BlogPane {
    fn default() -> Self {
        BlogPane::new()
    }
}

/// An open post and its scroll offset.
pub struct ReadingPane {
    pub post: Arc<Post>,
    pub scroll: u16,
    body_lines: u16,
}

impl ReadingPane {
    pub fn new(post: Arc<Post>) -> Self {
        let body_lines = post.body.lines().count().min(u16::MAX as usize) as u16;
        ReadingPane {
            post,
            scroll: 0,
            body_lines,
        }
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.body_lines {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(slug: &str, date: &str, tags: &[&str]) -> PostMeta {
        PostMeta {
            slug: slug.to_string(),
            title: slug.to_string(),
            date: date.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            description: String::new(),
            published: true,
        }
    }

    fn pane_with_posts() -> BlogPane {
        let mut pane = BlogPane::new();
        pane.set_posts(vec![
            meta("newest", "2025-03-01", &["rust"]),
            meta("middle", "2025-02-01", &["terminal"]),
            meta("oldest", "2025-01-01", &["rust", "terminal"]),
        ]);
        pane
    }

    #[test]
    fn test_selection_clamps_to_visible_rows() {
        let mut pane = pane_with_posts();
        pane.select_next();
        pane.select_next();
        pane.select_next();
        assert_eq!(pane.selected, 2);
        pane.select_prev();
        assert_eq!(pane.selected, 1);
    }

    #[test]
    fn test_tag_cycle_walks_alphabetically_then_clears() {
        let mut pane = pane_with_posts();
        assert_eq!(pane.filter.active_tag, None);
        pane.cycle_tag();
        assert_eq!(pane.filter.active_tag.as_deref(), Some("rust"));
        pane.cycle_tag();
        assert_eq!(pane.filter.active_tag.as_deref(), Some("terminal"));
        pane.cycle_tag();
        assert_eq!(pane.filter.active_tag, None);
    }

    #[test]
    fn test_filter_change_resets_selection() {
        let mut pane = pane_with_posts();
        pane.select_next();
        pane.select_next();
        pane.cycle_tag();
        assert_eq!(pane.selected, 0);
        pane.push_query_char('z');
        assert!(pane.visible().is_empty());
        assert_eq!(pane.selected, 0);
    }

    #[test]
    fn test_set_posts_clamps_stale_selection() {
        let mut pane = pane_with_posts();
        pane.select_next();
        pane.select_next();
        pane.set_posts(vec![meta("only", "2025-01-01", &[])]);
        assert_eq!(pane.selected, 0);
    }

    #[test]
    fn test_selected_post_follows_filter() {
        let mut pane = pane_with_posts();
        pane.cycle_tag();
        pane.cycle_tag();
        // The "terminal" tag keeps middle and oldest, newest first.
        assert_eq!(pane.selected_post().unwrap().slug, "middle");
    }

    #[test]
    fn test_category_cycle_ends_back_at_all() {
        let mut ui = UiState::new();
        assert_eq!(ui.skills_category, None);
        for expected in SkillCategory::ALL {
            ui.cycle_skills_category();
            assert_eq!(ui.skills_category, Some(expected));
        }
        ui.cycle_skills_category();
        assert_eq!(ui.skills_category, None);
    }

    #[test]
    fn test_reading_scroll_saturates() {
        let post = Arc::new(Post {
            meta: meta("p", "2025-01-01", &[]),
            body: "one\ntwo\nthree".to_string(),
        });
        let mut reading = ReadingPane::new(post);
        reading.scroll_up();
        assert_eq!(reading.scroll, 0);
        for _ in 0..10 {
            reading.scroll_down();
        }
        assert_eq!(reading.scroll, 2);
    }
}
