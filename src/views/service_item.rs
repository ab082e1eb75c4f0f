// SPDX-License-Identifier: MPL-2.0

use super::node::{HeadingLevel, ViewNode};
use crate::service::Service;

/// Renders one service as `"{id} - {name}"`. Nothing without a service.
pub fn view_service_item(service: Option<&Service>) -> Option<ViewNode> {
    let service = service?;

    Some(ViewNode::Column(vec![ViewNode::Heading {
        level: HeadingLevel::Item,
        text: format!("{} - {}", service.id, service.name),
    }]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_id_and_name() {
        let service = Service::new("1", "A");

        let node = view_service_item(Some(&service)).unwrap();

        assert_eq!(
            node,
            ViewNode::Column(vec![ViewNode::Heading {
                level: HeadingLevel::Item,
                text: "1 - A".to_string(),
            }])
        );
    }

    #[test]
    fn renders_nothing_without_service() {
        assert!(view_service_item(None).is_none());
    }
}
