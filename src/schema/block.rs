/// Block builder — behavior document plus the `terrain_texture.json`
/// atlas.
use serde_json::{json, Value};

use crate::core::document::Document;
use crate::core::emitter::{Category, EmitReport, Emitter};
use crate::core::identifier::Identifier;
use crate::core::BuildError;
use crate::schema::components::{BlockComponent, MenuCategory};
use crate::schema::item::texture_atlas;

const FORMAT_VERSION: &str = "1.21.90";
const ATLAS_STEM: &str = "terrain_texture";
const ATLAS_NAME: &str = "atlas.terrain";

/// Accumulates one block's behavior document: description fields,
/// components (keyed merge), permutations (append-only, call order),
/// and optional terrain-atlas texture entries.
#[derive(Debug)]
pub struct BlockBuilder {
    identifier: Option<String>,
    behavior: Document,
    textures: Vec<(String, String)>,
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockBuilder {
    pub fn new() -> BlockBuilder {
        BlockBuilder {
            identifier: None,
            behavior: Document::with_root(FORMAT_VERSION, "minecraft:block"),
            textures: Vec::new(),
        }
    }

    /// The block's `namespace:name` identifier; accepts the
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

    /// Declare a block state and its value domain, e.g.
    /// `add_state("mypack:lit", [true, false])`.
    pub fn add_state(mut self, name: &str, values: impl Into<Value>) -> Self {
        self.behavior
            .insert_keyed_description("states", name, values.into());
        self
    }

    /// Declare a block trait, e.g. `minecraft:placement_direction`.
    pub fn add_trait(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.behavior
            .insert_keyed_description("traits", name, value.into());
        self
    }

    /// Merge one component entry; last call per key wins, siblings are
    /// preserved.
    pub fn add_component(mut self, key: impl Into<BlockComponent>, value: impl Into<Value>) -> Self {
        self.behavior.insert_component(key.into().key(), value.into());
        self
    }

    /// Append a conditional component override. The consumer evaluates
    /// `condition` as a Molang predicate; entries keep call order.
    pub fn add_permutation(mut self, condition: &str, components: impl Into<Value>) -> Self {
        self.behavior.append(
            "permutations",
            json!({ "condition": condition, "components": components.into() }),
        );
        self
    }

    /// Register a short texture name for the `terrain_texture.json`
    /// atlas, written whole at `build` when any entry exists.
    pub fn add_terrain_texture(mut self, name: &str, path: &str) -> Self {
        self.textures.push((name.to_string(), path.to_string()));
        self
    }

    pub fn build(mut self, emitter: &Emitter) -> Result<EmitReport, BuildError> {
        let raw = self.identifier.ok_or(BuildError::MissingIdentifier)?;
        let id = Identifier::parse(&raw)?;
        self.behavior
            .set_description_field("identifier", json!(id.stored()));

        let mut report = EmitReport::default();
        emitter.write_json(Category::Blocks, id.file_base(), &self.behavior, &mut report);

        if !self.textures.is_empty() {
            let atlas = texture_atlas(ATLAS_NAME, &self.textures);
            emitter.write_json(Category::Textures, ATLAS_STEM, &atlas, &mut report);
        }
        Ok(report)
    }
}
