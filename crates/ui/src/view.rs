//! View model for the comment list
//!
//! Built from decoded comments, then mounted into the DOM in one step by
//! `dom::mount_list`.

use portfolio_comments_protocol::Comment;

/// Child of a list item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    LineBreak,
    Image { src: String },
}

/// One `<li>`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListItem {
    pub children: Vec<Node>,
}

impl From<&Comment> for ListItem {
    fn from(comment: &Comment) -> Self {
        let mut children = Vec::new();
        // Newlines become line breaks, as with `innerText`
        for (i, line) in comment.content.split('\n').enumerate() {
            if i > 0 {
                children.push(Node::LineBreak);
            }
            if !line.is_empty() {
                children.push(Node::Text(line.to_string()));
            }
        }
        if let Some(src) = comment.image() {
            children.push(Node::LineBreak);
            children.push(Node::Image {
                src: src.to_string(),
            });
        }
        Self { children }
    }
}

/// The `<ul>` that replaces the container's contents
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentList {
    pub items: Vec<ListItem>,
}

impl CommentList {
    pub fn from_comments(comments: &[Comment]) -> Self {
        Self {
            items: comments.iter().map(ListItem::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
