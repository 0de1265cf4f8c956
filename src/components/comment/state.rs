use crate::environment::types::Comment;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct State {
    /// Keyed by the id of the parent post. A key may exist for a post that
    /// is not (or no longer) loaded.
    pub comments: im::HashMap<String, im::Vector<Comment>>,
    /// Posts whose comments came in as a complete list
    pub loaded: im::HashSet<String>,
}

impl State {
    pub fn comments(&self, post_id: &str) -> Option<&im::Vector<Comment>> {
        self.comments.get(post_id)
    }

    pub fn is_loaded(&self, post_id: &str) -> bool {
        self.loaded.contains(post_id)
    }
}
