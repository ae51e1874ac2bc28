use std::collections::HashMap;

use super::post::Post;

/// Ordered, keyed collection of the posts on screen.
///
/// Iteration order is insertion order. Replacing an existing id keeps its
/// original position. There is no removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostStore {
    posts: Vec<Post>,
    /// id -> position in `posts`
    index: HashMap<String, usize>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.index.get(id).map(|&i| &self.posts[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Insert a new post at the end, or replace the post with the same id in place.
    pub fn upsert(&mut self, post: Post) {
        match self.index.get(&post.id) {
            Some(&i) => self.posts[i] = post,
            None => {
                self.index.insert(post.id.clone(), self.posts.len());
                self.posts.push(post);
            }
        }
    }

    /// Merge a whole load result at once.
    pub fn load_batch(&mut self, posts: impl IntoIterator<Item = Post>) {
        for post in posts {
            self.upsert(post);
        }
    }

    pub fn values(&self) -> &[Post] {
        &self.posts
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Post)> {
        self.posts.iter().map(|p| (p.id.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
