/// Item builder — behavior document plus the `item_texture.json` atlas.
use serde_json::{json, Value};

use crate::core::document::Document;
use crate::core::emitter::{Category, EmitReport, Emitter};
use crate::core::identifier::Identifier;
use crate::core::BuildError;
use crate::schema::components::{ItemComponent, MenuCategory};

const FORMAT_VERSION: &str = "1.21.90";
const ATLAS_STEM: &str = "item_texture";
const ATLAS_NAME: &str = "atlas.items";

/// Accumulates one item's behavior document and, when `add_texture` is
/// used, a short-name→path atlas entry for `item_texture.json`.
///
/// ```no_run
/// use addonkit::{Emitter, ItemBuilder};
/// use addonkit::schema::components::MenuCategory;
///
/// let emitter = Emitter::new("out");
/// let report = ItemBuilder::new()
///     .identifier("id:apple")
///     .menu_category(MenuCategory::Items, None, None)
///     .add_component("minecraft:icon", "itemTexture")
///     .add_texture("itemTexture", "textures/items/apple")
///     .build(&emitter)
///     .unwrap();
/// assert!(report.is_complete());
/// ```
#[derive(Debug)]
pub struct ItemBuilder {
    identifier: Option<String>,
    behavior: Document,
    textures: Vec<(String, String)>,
}

impl Default for ItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemBuilder {
    pub fn new() -> ItemBuilder {
        ItemBuilder {
            identifier: None,
            behavior: Document::with_root(FORMAT_VERSION, "minecraft:item"),
            textures: Vec::new(),
        }
    }

    /// The item's `namespace:name` identifier; accepts the
    /// `@name<stem>` file-name override form. Validated at `build`.
    pub fn identifier(mut self, raw: &str) -> Self {
        self.identifier = Some(raw.to_string());
        self
    }

    pub fn menu_category(
        mut self,
        category: MenuCategory,
        group: Option<&str>,
        hidden_in_commands: Option<bool>,
    ) -> Self {
        let mut entry = json!({ "category": category.as_str() });
        if let Some(group) = group {
            entry["group"] = json!(group);
        }
        if let Some(hidden) = hidden_in_commands {
            entry["is_hidden_in_commands"] = json!(hidden);
        }
        self.behavior.set_description_field("menu_category", entry);
        self
    }

    pub fn is_experimental(mut self, value: bool) -> Self {
        self.behavior
            .set_description_field("is_experimental", json!(value));
        self
    }

    /// Merge one component entry; last call per key wins, siblings are
    /// preserved.
    pub fn add_component(mut self, key: impl Into<ItemComponent>, value: impl Into<Value>) -> Self {
        self.behavior.insert_component(key.into().key(), value.into());
        self
    }

    /// Register a short texture name for the `item_texture.json` atlas.
    /// The atlas file is only written when at least one texture was
    /// added; note that it is written whole (no merging with an
    /// existing atlas on disk).
    pub fn add_texture(mut self, name: &str, path: &str) -> Self {
        self.textures.push((name.to_string(), path.to_string()));
        self
    }

    /// Validate the identifier, then write the behavior document and
    /// the atlas (when non-empty).
    pub fn build(mut self, emitter: &Emitter) -> Result<EmitReport, BuildError> {
        let raw = self.identifier.ok_or(BuildError::MissingIdentifier)?;
        let id = Identifier::parse(&raw)?;
        self.behavior
            .set_description_field("identifier", json!(id.stored()));

        let mut report = EmitReport::default();
        emitter.write_json(Category::Items, id.file_base(), &self.behavior, &mut report);

        if !self.textures.is_empty() {
            let atlas = texture_atlas(ATLAS_NAME, &self.textures);
            emitter.write_json(Category::Textures, ATLAS_STEM, &atlas, &mut report);
        }
        Ok(report)
    }
}

/// Assemble a texture atlas document from short-name→path entries.
/// Shared with the block builder's `terrain_texture.json`.
pub(crate) fn texture_atlas(atlas_name: &str, entries: &[(String, String)]) -> Document {
    let mut atlas = Document::empty();
    atlas.insert_top_level("resource_pack_name", json!("pack"));
    atlas.insert_top_level("texture_name", json!(atlas_name));
    for (name, path) in entries {
        atlas.insert_keyed("texture_data", name, json!({ "textures": path }));
    }
    atlas
}
