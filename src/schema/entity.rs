/// Entity builder — server behavior document plus an optional client
/// entity resource document.
///
/// The client document is written only when at least one presentation
/// setter (`client_texture`, `client_geometry`, ...) was used, so a
/// purely logical entity emits a single file.
use serde_json::{json, Value};

use crate::core::document::Document;
use crate::core::emitter::{Category, EmitReport, Emitter};
use crate::core::identifier::Identifier;
use crate::core::BuildError;
use crate::schema::components::EntityComponent;

const FORMAT_VERSION: &str = "1.21.90";
const CLIENT_FORMAT_VERSION: &str = "1.10.0";

#[derive(Debug)]
pub struct EntityBuilder {
    identifier: Option<String>,
    behavior: Document,
    client: Document,
    animate: Vec<String>,
}

impl Default for EntityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityBuilder {
    pub fn new() -> EntityBuilder {
        EntityBuilder {
            identifier: None,
            behavior: Document::with_root(FORMAT_VERSION, "minecraft:entity"),
            client: Document::with_section_root(CLIENT_FORMAT_VERSION, "minecraft:client_entity"),
            animate: Vec::new(),
        }
    }

    /// The entity's `namespace:name` identifier; accepts the
    /// `@name<stem>` file-name override form. Validated at `build` and
    /// stored in both documents.
    pub fn identifier(mut self, raw: &str) -> Self {
        self.identifier = Some(raw.to_string());
        self
    }

    pub fn spawn_category(mut self, value: &str) -> Self {
        self.behavior
            .set_description_field("spawn_category", json!(value));
        self
    }

    pub fn is_spawnable(mut self, value: bool) -> Self {
        self.behavior
            .set_description_field("is_spawnable", json!(value));
        self
    }

    pub fn is_summonable(mut self, value: bool) -> Self {
        self.behavior
            .set_description_field("is_summonable", json!(value));
        self
    }

    pub fn is_experimental(mut self, value: bool) -> Self {
        self.behavior
            .set_description_field("is_experimental", json!(value));
        self
    }

    /// Vanilla entity whose engine-side behavior this entity borrows.
    pub fn runtime_identifier(mut self, value: &str) -> Self {
        self.behavior
            .set_description_field("runtime_identifier", json!(value));
        self
    }

    /// Register a behavior-side animation or controller under a short
    /// name usable from `animate_on` scripts.
    pub fn add_animation(mut self, name: &str, reference: &str) -> Self {
        self.behavior
            .insert_keyed_description("animations", name, json!(reference));
        self
    }

    /// Add a short animation name to `description.scripts.animate`.
    pub fn animate_on(mut self, name: &str) -> Self {
        self.animate.push(name.to_string());
        self
    }

    /// Declare a synced entity property (`description.properties`).
    pub fn add_property(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.behavior
            .insert_keyed_description("properties", name, value.into());
        self
    }

    /// Merge one component entry; last call per key wins, siblings are
    /// preserved.
    pub fn add_component(
        mut self,
        key: impl Into<EntityComponent>,
        value: impl Into<Value>,
    ) -> Self {
        self.behavior.insert_component(key.into().key(), value.into());
        self
    }

    /// Merge a named component group (`component_groups`), toggled by
    /// events at runtime.
    pub fn add_component_group(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.behavior
            .insert_keyed("component_groups", name, value.into());
        self
    }

    /// Merge a named event (`events`).
    pub fn add_event(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.behavior.insert_keyed("events", name, value.into());
        self
    }

    // Client resource document setters. Touching any of these causes
    // the client document to be emitted.

    pub fn client_material(mut self, name: &str, material: &str) -> Self {
        self.client
            .insert_keyed_description("materials", name, json!(material));
        self
    }

    pub fn client_texture(mut self, name: &str, path: &str) -> Self {
        self.client
            .insert_keyed_description("textures", name, json!(path));
        self
    }

    pub fn client_geometry(mut self, name: &str, geometry_id: &str) -> Self {
        self.client
            .insert_keyed_description("geometry", name, json!(geometry_id));
        self
    }

    pub fn client_animation(mut self, name: &str, animation_id: &str) -> Self {
        self.client
            .insert_keyed_description("animations", name, json!(animation_id));
        self
    }

    /// Append a render controller reference (call order preserved).
    pub fn add_render_controller(mut self, controller_id: &str) -> Self {
        self.client
            .append_description("render_controllers", json!(controller_id));
        self
    }

    pub fn spawn_egg(mut self, base_color: &str, overlay_color: &str) -> Self {
        self.client.set_description_field(
            "spawn_egg",
            json!({ "base_color": base_color, "overlay_color": overlay_color }),
        );
        self
    }

    pub fn build(mut self, emitter: &Emitter) -> Result<EmitReport, BuildError> {
        let raw = self.identifier.ok_or(BuildError::MissingIdentifier)?;
        let id = Identifier::parse(&raw)?;

        if !self.animate.is_empty() {
            self.behavior
                .set_description_field("scripts", json!({ "animate": self.animate }));
        }
        self.behavior
            .set_description_field("identifier", json!(id.stored()));

        let mut report = EmitReport::default();
        emitter.write_json(Category::Entities, id.file_base(), &self.behavior, &mut report);

        if !self.client.is_effectively_empty() {
            self.client
                .set_description_field("identifier", json!(id.stored()));
            emitter.write_json(Category::ClientEntity, id.file_base(), &self.client, &mut report);
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_json(path: &std::path::Path) -> Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn behavior_only_entity_emits_one_file() {
        let tmp = tempfile::tempdir().unwrap();
        let emitter = Emitter::new(tmp.path());
        let report = EntityBuilder::new()
            .identifier("mypack:golem")
            .is_spawnable(true)
            .add_component(EntityComponent::Health, json!({"value": 40}))
            .build(&emitter)
            .unwrap();
        assert_eq!(report.written.len(), 1);
        assert!(tmp.path().join("behavior/entities/mypack_golem.json").exists());
        assert!(!tmp.path().join("resources/entity/mypack_golem.json").exists());
    }

    #[test]
    fn client_document_written_when_touched() {
        let tmp = tempfile::tempdir().unwrap();
        let emitter = Emitter::new(tmp.path());
        let report = EntityBuilder::new()
            .identifier("mypack:golem")
            .client_texture("default", "textures/entity/golem")
            .add_render_controller("controller.render.golem")
            .build(&emitter)
            .unwrap();
        assert_eq!(report.written.len(), 2);

        let client = read_json(&tmp.path().join("resources/entity/mypack_golem.json"));
        let desc = &client["minecraft:client_entity"]["description"];
        assert_eq!(desc["identifier"], "mypack:golem");
        assert_eq!(desc["textures"]["default"], "textures/entity/golem");
        assert_eq!(desc["render_controllers"], json!(["controller.render.golem"]));
    }

    #[test]
    fn component_groups_and_events_merge_by_key() {
        let tmp = tempfile::tempdir().unwrap();
        let emitter = Emitter::new(tmp.path());
        let report = EntityBuilder::new()
            .identifier("mypack:golem")
            .add_component_group("mypack:angry", json!({"minecraft:angry": {}}))
            .add_component_group("mypack:calm", json!({}))
            .add_event("mypack:on_anger", json!({"add": {"component_groups": ["mypack:angry"]}}))
            .add_event("mypack:on_anger", json!({"remove": {"component_groups": ["mypack:calm"]}}))
            .build(&emitter)
            .unwrap();

        let doc = read_json(&report.written[0]);
        let root = &doc["minecraft:entity"];
        assert_eq!(root["component_groups"].as_object().unwrap().len(), 2);
        // last write per event key wins
        assert_eq!(
            root["events"]["mypack:on_anger"],
            json!({"remove": {"component_groups": ["mypack:calm"]}})
        );
    }

    #[test]
    fn animate_scripts_assembled_at_build() {
        let tmp = tempfile::tempdir().unwrap();
        let emitter = Emitter::new(tmp.path());
        let report = EntityBuilder::new()
            .identifier("mypack:golem")
            .add_animation("walk", "animation.golem.walk")
            .animate_on("walk")
            .build(&emitter)
            .unwrap();
        let doc = read_json(&report.written[0]);
        let desc = &doc["minecraft:entity"]["description"];
        assert_eq!(desc["animations"]["walk"], "animation.golem.walk");
        assert_eq!(desc["scripts"], json!({"animate": ["walk"]}));
    }
}
