// SPDX-License-Identifier: MPL-2.0

use crate::message::Message;
use cosmic::widget::menu;

/// The context page to display in the context drawer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
}

/// Menu actions for the application's menu bar.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuAction {
    Refresh,
    About,
}

impl menu::action::MenuAction for MenuAction {
    type Message = Message;

    fn message(&self) -> Self::Message {
        match self {
            MenuAction::Refresh => Message::LoadServices,
            MenuAction::About => Message::ToggleContextPage(ContextPage::About),
        }
    }
}
