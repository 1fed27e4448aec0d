/// Document accumulation — the ordered nested mapping behind every
/// output file.
///
/// A `Document` is seeded with its schema skeleton (format version plus
/// the single root key) at construction and mutated only by its owning
/// builder. Keyed inserts are merge-on-call: the target section is
/// created lazily and sibling keys are never cleared, so the last write
/// per key wins and everything else survives. Array sections are
/// append-only in call order.
use serde_json::{Map, Value};

/// Output serialization style. Compact matches the consumer's expected
/// wire shape; pretty is for humans diffing the generated pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    Compact,
    Pretty,
}

/// One output JSON file in the making.
#[derive(Debug, Clone)]
pub struct Document {
    top: Map<String, Value>,
    root_key: Option<String>,
    writes: usize,
}

impl Document {
    /// A document with a `format_version` and a single root key whose
    /// value is pre-seeded with empty `description` and `components`
    /// sub-mappings (the block/entity/item behavior shape).
    pub fn with_root(format_version: &str, root_key: &str) -> Document {
        let mut root = Map::new();
        root.insert("description".to_string(), Value::Object(Map::new()));
        root.insert("components".to_string(), Value::Object(Map::new()));
        Self::assemble(format_version, root_key, root)
    }

    /// A document with a `format_version` and an empty root mapping
    /// (render controllers, animation controllers, client entities).
    pub fn with_section_root(format_version: &str, root_key: &str) -> Document {
        Self::assemble(format_version, root_key, Map::new())
    }

    /// A document carrying only a `format_version`; everything else is
    /// written at top level (recipes).
    pub fn versioned(format_version: &str) -> Document {
        let mut top = Map::new();
        top.insert(
            "format_version".to_string(),
            Value::String(format_version.to_string()),
        );
        Document {
            top,
            root_key: None,
            writes: 0,
        }
    }

    /// A document with no skeleton at all (loot tables, UI, atlases).
    pub fn empty() -> Document {
        Document {
            top: Map::new(),
            root_key: None,
            writes: 0,
        }
    }

    fn assemble(format_version: &str, root_key: &str, root: Map<String, Value>) -> Document {
        let mut top = Map::new();
        top.insert(
            "format_version".to_string(),
            Value::String(format_version.to_string()),
        );
        top.insert(root_key.to_string(), Value::Object(root));
        Document {
            top,
            root_key: Some(root_key.to_string()),
            writes: 0,
        }
    }

    /// The mapping under the root key, or the top-level mapping for
    /// documents without one.
    fn root_mut(&mut self) -> &mut Map<String, Value> {
        match &self.root_key {
            Some(key) => {
                // Seeded at construction; re-seed if a caller stored a
                // non-object over it.
                let entry = self
                    .top
                    .entry(key.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !entry.is_object() {
                    *entry = Value::Object(Map::new());
                }
                entry.as_object_mut().unwrap()
            }
            None => &mut self.top,
        }
    }

    fn section_mut<'a>(map: &'a mut Map<String, Value>, section: &str) -> &'a mut Map<String, Value> {
        let entry = map
            .entry(section.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        entry.as_object_mut().unwrap()
    }

    fn array_mut<'a>(map: &'a mut Map<String, Value>, section: &str) -> &'a mut Vec<Value> {
        let entry = map
            .entry(section.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if !entry.is_array() {
            *entry = Value::Array(Vec::new());
        }
        entry.as_array_mut().unwrap()
    }

    /// Set one field of the root's `description` sub-mapping.
    pub fn set_description_field(&mut self, key: &str, value: Value) {
        self.writes += 1;
        let desc = Self::section_mut(self.root_mut(), "description");
        desc.insert(key.to_string(), value);
    }

    /// Merge one entry into the root's `components` sub-mapping.
    pub fn insert_component(&mut self, key: &str, value: Value) {
        self.insert_keyed("components", key, value);
    }

    /// Merge one entry into a keyed section directly under the root,
    /// creating the section on first use (`component_groups`, `events`,
    /// `texture_data`, ...).
    pub fn insert_keyed(&mut self, section: &str, key: &str, value: Value) {
        self.writes += 1;
        let map = Self::section_mut(self.root_mut(), section);
        map.insert(key.to_string(), value);
    }

    /// Merge one entry into a keyed section inside `description`
    /// (client-entity `textures`, `geometry`, `materials`, ...).
    pub fn insert_keyed_description(&mut self, section: &str, key: &str, value: Value) {
        self.writes += 1;
        let desc = Self::section_mut(self.root_mut(), "description");
        let map = Self::section_mut(desc, section);
        map.insert(key.to_string(), value);
    }

    /// Append to an array section under the root (`permutations`,
    /// `pools`), creating it on first use. Call order is preserved.
    pub fn append(&mut self, section: &str, value: Value) {
        self.writes += 1;
        let arr = Self::array_mut(self.root_mut(), section);
        arr.push(value);
    }

    /// Append to an array section inside `description`
    /// (`render_controllers` of a client entity).
    pub fn append_description(&mut self, section: &str, value: Value) {
        self.writes += 1;
        let desc = Self::section_mut(self.root_mut(), "description");
        let arr = Self::array_mut(desc, section);
        arr.push(value);
    }

    /// Set a field directly under the root key (or at top level for
    /// documents without one).
    pub fn insert_root(&mut self, key: &str, value: Value) {
        self.writes += 1;
        self.root_mut().insert(key.to_string(), value);
    }

    /// Set a field at the top level of the document.
    pub fn insert_top_level(&mut self, key: &str, value: Value) {
        self.writes += 1;
        self.top.insert(key.to_string(), value);
    }

    /// True when nothing beyond the seeded skeleton has been written.
    /// Secondary documents in this state are skipped at emit time.
    pub fn is_effectively_empty(&self) -> bool {
        self.writes == 0
    }

    /// Snapshot as a JSON value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.top.clone())
    }

    /// Serialize to text in the given style.
    pub fn render(&self, style: JsonStyle) -> serde_json::Result<String> {
        let value = Value::Object(self.top.clone());
        match style {
            JsonStyle::Compact => serde_json::to_string(&value),
            JsonStyle::Pretty => serde_json::to_string_pretty(&value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn skeleton_has_description_and_components() {
        let doc = Document::with_root("1.21.90", "minecraft:block");
        assert_eq!(
            doc.to_value(),
            json!({
                "format_version": "1.21.90",
                "minecraft:block": {"description": {}, "components": {}}
            })
        );
        assert!(doc.is_effectively_empty());
    }

    #[test]
    fn component_merge_preserves_siblings() {
        let mut doc = Document::with_root("1.21.90", "minecraft:item");
        doc.insert_component("minecraft:icon", json!("itemTexture"));
        doc.insert_component("minecraft:max_stack_size", json!(16));
        doc.insert_component("minecraft:icon", json!("otherTexture"));

        let value = doc.to_value();
        let components = &value["minecraft:item"]["components"];
        assert_eq!(components["minecraft:icon"], json!("otherTexture"));
        assert_eq!(components["minecraft:max_stack_size"], json!(16));
        assert_eq!(components.as_object().unwrap().len(), 2);
    }

    #[test]
    fn keyed_section_created_lazily() {
        let mut doc = Document::with_root("1.21.90", "minecraft:entity");
        assert!(doc.to_value()["minecraft:entity"].get("events").is_none());
        doc.insert_keyed("events", "ns:on_hit", json!({"trigger": "hit"}));
        doc.insert_keyed("events", "ns:on_death", json!({"trigger": "death"}));
        let events = doc.to_value()["minecraft:entity"]["events"].clone();
        assert_eq!(events.as_object().unwrap().len(), 2);
    }

    #[test]
    fn append_preserves_call_order() {
        let mut doc = Document::with_root("1.21.90", "minecraft:block");
        doc.append("permutations", json!({"condition": "a"}));
        doc.append("permutations", json!({"condition": "b"}));
        doc.append("permutations", json!({"condition": "a"}));
        let perms = doc.to_value()["minecraft:block"]["permutations"].clone();
        assert_eq!(
            perms,
            json!([{"condition": "a"}, {"condition": "b"}, {"condition": "a"}])
        );
    }

    #[test]
    fn versioned_document_writes_at_top_level() {
        let mut doc = Document::versioned("1.12");
        doc.insert_root("minecraft:recipe_shaped", json!({"tags": ["crafting_table"]}));
        assert_eq!(
            doc.to_value(),
            json!({
                "format_version": "1.12",
                "minecraft:recipe_shaped": {"tags": ["crafting_table"]}
            })
        );
    }

    #[test]
    fn description_keyed_sections() {
        let mut doc = Document::with_section_root("1.10.0", "minecraft:client_entity");
        doc.set_description_field("identifier", json!("ns:mob"));
        doc.insert_keyed_description("textures", "default", json!("textures/entity/mob"));
        doc.append_description("render_controllers", json!("controller.render.mob"));
        assert_eq!(
            doc.to_value(),
            json!({
                "format_version": "1.10.0",
                "minecraft:client_entity": {
                    "description": {
                        "identifier": "ns:mob",
                        "textures": {"default": "textures/entity/mob"},
                        "render_controllers": ["controller.render.mob"]
                    }
                }
            })
        );
    }

    #[test]
    fn render_round_trips() {
        let mut doc = Document::with_root("1.21.90", "minecraft:item");
        doc.set_description_field("identifier", json!("id:apple"));
        doc.insert_component("minecraft:icon", json!("itemTexture"));
        let compact = doc.render(JsonStyle::Compact).unwrap();
        let parsed: Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(parsed, doc.to_value());
    }

    #[test]
    fn compact_render_matches_consumer_shape() {
        let mut doc = Document::with_root("1.21.90", "minecraft:item");
        doc.set_description_field("identifier", json!("id:apple"));
        doc.insert_component("minecraft:icon", json!("itemTexture"));
        assert_eq!(
            doc.render(JsonStyle::Compact).unwrap(),
            "{\"format_version\":\"1.21.90\",\"minecraft:item\":{\"description\":{\"identifier\":\"id:apple\"},\"components\":{\"minecraft:icon\":\"itemTexture\"}}}"
        );
    }
}
