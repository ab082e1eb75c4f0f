// SPDX-License-Identifier: MPL-2.0

//! Toolkit-free description of what the window shows.
//!
//! Views build a [`ViewNode`] tree; [`super::render`] turns it into widgets.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    Page,
    Item,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    Heading { level: HeadingLevel, text: String },
    Text(String),
    Column(Vec<ViewNode>),
    List(Vec<ListItem>),
}

/// One entry of a [`ViewNode::List`]. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListItem {
    pub children: Vec<ViewNode>,
}

impl ListItem {
    pub fn new(content: Option<ViewNode>) -> Self {
        Self {
            children: content.into_iter().collect(),
        }
    }

    pub fn text_content(&self) -> String {
        join_text(&self.children)
    }
}

impl ViewNode {
    /// The first list in the tree, depth first.
    pub fn find_list(&self) -> Option<&[ListItem]> {
        match self {
            ViewNode::List(items) => Some(items),
            ViewNode::Column(children) => children.iter().find_map(ViewNode::find_list),
            ViewNode::Heading { .. } | ViewNode::Text(_) => None,
        }
    }

    /// All visible text, space separated, in display order.
    pub fn text_content(&self) -> String {
        match self {
            ViewNode::Heading { text, .. } | ViewNode::Text(text) => text.clone(),
            ViewNode::Column(children) => join_text(children),
            ViewNode::List(items) => items
                .iter()
                .map(ListItem::text_content)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

fn join_text(nodes: &[ViewNode]) -> String {
    nodes
        .iter()
        .map(ViewNode::text_content)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
