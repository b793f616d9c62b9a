pub mod actions_panel;
pub mod chat_panel;
pub mod header;
pub mod message_bubble;
