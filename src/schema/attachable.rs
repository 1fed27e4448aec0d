/// Attachable builder — the resource document for items rendered on an
/// entity (worn armor, held tools).
use serde_json::json;

use crate::core::document::Document;
use crate::core::emitter::{Category, EmitReport, Emitter};
use crate::core::identifier::Identifier;
use crate::core::BuildError;

const FORMAT_VERSION: &str = "1.10.0";

#[derive(Debug)]
pub struct AttachableBuilder {
    identifier: Option<String>,
    resource: Document,
    animate: Vec<String>,
}

impl Default for AttachableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AttachableBuilder {
    pub fn new() -> AttachableBuilder {
        AttachableBuilder {
            identifier: None,
            resource: Document::with_section_root(FORMAT_VERSION, "minecraft:attachable"),
            animate: Vec::new(),
        }
    }

    /// Usually the identifier of the item this attachable renders for;
    /// accepts the `@name<stem>` file-name override form.
    pub fn identifier(mut self, raw: &str) -> Self {
        self.identifier = Some(raw.to_string());
        self
    }

    pub fn add_material(mut self, name: &str, material: &str) -> Self {
        self.resource
            .insert_keyed_description("materials", name, json!(material));
        self
    }

    pub fn add_texture(mut self, name: &str, path: &str) -> Self {
        self.resource
            .insert_keyed_description("textures", name, json!(path));
        self
    }

    pub fn add_geometry(mut self, name: &str, geometry_id: &str) -> Self {
        self.resource
            .insert_keyed_description("geometry", name, json!(geometry_id));
        self
    }

    pub fn add_animation(mut self, name: &str, animation_id: &str) -> Self {
        self.resource
            .insert_keyed_description("animations", name, json!(animation_id));
        self
    }

    /// Add a short animation name to `description.scripts.animate`.
    pub fn animate_on(mut self, name: &str) -> Self {
        self.animate.push(name.to_string());
        self
    }

    /// Append a render controller reference (call order preserved).
    pub fn add_render_controller(mut self, controller_id: &str) -> Self {
        self.resource
            .append_description("render_controllers", json!(controller_id));
        self
    }

    pub fn build(mut self, emitter: &Emitter) -> Result<EmitReport, BuildError> {
        let raw = self.identifier.ok_or(BuildError::MissingIdentifier)?;
        let id = Identifier::parse(&raw)?;

        if !self.animate.is_empty() {
            self.resource
                .set_description_field("scripts", json!({ "animate": self.animate }));
        }
        self.resource
            .set_description_field("identifier", json!(id.stored()));

        let mut report = EmitReport::default();
        emitter.write_json(Category::Attachables, id.file_base(), &self.resource, &mut report);
        Ok(report)
    }
}
