// SPDX-License-Identifier: MPL-2.0

pub mod node;
pub mod service_item;
pub mod service_list;

pub use node::{HeadingLevel, ListItem, ViewNode};
pub use service_list::ServiceListView;

use crate::message::Message;
use cosmic::Element;
use cosmic::widget;

/// Turns a view tree into libcosmic widgets.
pub fn render<'a>(node: ViewNode) -> Element<'a, Message> {
    let spacing = cosmic::theme::spacing();

    match node {
        ViewNode::Heading { level: HeadingLevel::Page, text } => widget::text::title1(text).into(),
        ViewNode::Heading { level: HeadingLevel::Item, text } => widget::text::title3(text).into(),
        ViewNode::Text(text) => widget::text::body(text).into(),
        ViewNode::Column(children) => children
            .into_iter()
            .fold(widget::column().spacing(spacing.space_m), |column, child| {
                column.push(render(child))
            })
            .into(),
        ViewNode::List(items) => items
            .into_iter()
            .fold(widget::list_column().spacing(spacing.space_xs), |list, item| {
                list.add(render_item(item))
            })
            .into(),
    }
}

fn render_item<'a>(item: ListItem) -> Element<'a, Message> {
    item.children
        .into_iter()
        .fold(widget::column(), |column, child| column.push(render(child)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child_count(element: &Element<'_, Message>) -> usize {
        element.as_widget().children().len()
    }

    fn item_heading(text: &str) -> ViewNode {
        ViewNode::Heading {
            level: HeadingLevel::Item,
            text: text.to_string(),
        }
    }

    #[test]
    fn empty_item_renders_empty_column() {
        let element = render_item(ListItem::new(None));
        assert_eq!(child_count(&element), 0);
    }

    #[test]
    fn item_renders_its_content() {
        let element = render_item(ListItem::new(Some(item_heading("1 - A"))));
        assert_eq!(child_count(&element), 1);
    }

    #[test]
    fn column_renders_one_widget_per_child() {
        let tree = ViewNode::Column(vec![
            ViewNode::Text("Loading services...".into()),
            item_heading("1 - A"),
            item_heading("2 - B"),
        ]);

        assert_eq!(child_count(&render(tree)), 3);
    }
}
