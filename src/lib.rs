//! markpick: Terminal list picker with a markdown detail view and
//! adaptive form theming.

pub mod filter;
pub mod item;
pub mod markdown;
pub mod palette;
pub mod picker;
pub mod theme;
