//! One builder module per add-on content kind.

pub mod animation_controller;
pub mod attachable;
pub mod block;
pub mod components;
pub mod entity;
pub mod item;
pub mod lang;
pub mod loot_table;
pub mod recipe;
pub mod render_controller;
pub mod ui;
