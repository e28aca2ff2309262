pub mod nav_bar;
pub mod notification_overlay;
pub mod reminder_card;
pub mod status_bar;
