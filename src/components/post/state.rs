use crate::environment::types::{Category, Post};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct State {
    pub categories: im::Vector<Category>,
    /// Never contains a post marked as `deleted`, never two posts with one id
    pub posts: im::Vector<Post>,
}

impl State {
    pub fn new(categories: Vec<Category>, posts: Vec<Post>) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            posts: posts.into_iter().filter(|post| !post.deleted).collect(),
        }
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.posts.iter().position(|post| post.id == id)
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub(super) fn post_mut(&mut self, id: &str) -> Option<&mut Post> {
        let index = self.position(id)?;
        self.posts.get_mut(index)
    }
}
