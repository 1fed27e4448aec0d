//! Addonkit — fluent builders for Minecraft Bedrock add-on packs.
//!
//! Accumulates block, entity, item, recipe, loot table, UI, and
//! localization content through chained setter calls, then serializes
//! each builder's documents into the pack's JSON and `.lang` files on
//! an explicit `build` against an [`Emitter`](core::emitter::Emitter).

pub mod core;
pub mod schema;

pub use crate::core::document::{Document, JsonStyle};
pub use crate::core::emitter::{Category, EmitReport, Emitter, WriteError};
pub use crate::core::identifier::{Identifier, IdentifierError};
pub use crate::core::BuildError;
pub use crate::schema::animation_controller::AnimationControllerBuilder;
pub use crate::schema::attachable::AttachableBuilder;
pub use crate::schema::block::BlockBuilder;
pub use crate::schema::components::{BlockComponent, EntityComponent, ItemComponent, MenuCategory};
pub use crate::schema::entity::EntityBuilder;
pub use crate::schema::item::ItemBuilder;
pub use crate::schema::lang::{LangBuilder, Locale};
pub use crate::schema::loot_table::LootTableBuilder;
pub use crate::schema::recipe::RecipeBuilder;
pub use crate::schema::render_controller::RenderControllerBuilder;
pub use crate::schema::ui::UiBuilder;
