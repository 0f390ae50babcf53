pub mod about;
pub mod contact;
pub mod game_card;
pub mod header;
pub mod navbar;
pub mod project_card;
pub mod scroll_top;
pub mod sections;
