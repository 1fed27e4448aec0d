/// Render controller builder — selects geometry, materials, and
/// textures for a client entity, optionally through Molang-indexed
/// arrays.
use serde_json::{json, Map, Value};

use crate::core::document::Document;
use crate::core::emitter::{Category, EmitReport, Emitter};
use crate::core::BuildError;

const FORMAT_VERSION: &str = "1.10.0";

/// Builds one `controller.render.<name>` definition. The short name
/// doubles as the output file stem; `build` fails without it.
#[derive(Debug)]
pub struct RenderControllerBuilder {
    name: Option<String>,
    geometry: Option<String>,
    materials: Vec<Value>,
    textures: Vec<String>,
    arrays: Map<String, Value>,
}

impl Default for RenderControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderControllerBuilder {
    pub fn new() -> RenderControllerBuilder {
        RenderControllerBuilder {
            name: None,
            geometry: None,
            materials: Vec::new(),
            textures: Vec::new(),
            arrays: Map::new(),
        }
    }

    /// Short controller name: `name("fox")` defines
    /// `controller.render.fox` in `fox.json`.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Geometry reference or Molang expression, e.g.
    /// `geometry.default`.
    pub fn geometry(mut self, expr: &str) -> Self {
        self.geometry = Some(expr.to_string());
        self
    }

    /// Append a bone-pattern→material binding; call order is the
    /// consumer's application order.
    pub fn add_material(mut self, bone_pattern: &str, material: &str) -> Self {
        let mut binding = Map::new();
        binding.insert(bone_pattern.to_string(), json!(material));
        self.materials.push(Value::Object(binding));
        self
    }

    /// Append a texture reference or Molang expression.
    pub fn add_texture(mut self, expr: &str) -> Self {
        self.textures.push(expr.to_string());
        self
    }

    /// Define an `arrays.textures` entry (`array_name` conventionally
    /// starts with `Array.`); last call per name wins.
    pub fn add_texture_array(mut self, array_name: &str, entries: &[&str]) -> Self {
        Self::array_section(&mut self.arrays, "textures", array_name, entries);
        self
    }

    /// Define an `arrays.geometries` entry; last call per name wins.
    pub fn add_geometry_array(mut self, array_name: &str, entries: &[&str]) -> Self {
        Self::array_section(&mut self.arrays, "geometries", array_name, entries);
        self
    }

    fn array_section(arrays: &mut Map<String, Value>, section: &str, name: &str, entries: &[&str]) {
        let slot = arrays
            .entry(section.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Some(map) = slot.as_object_mut() {
            map.insert(name.to_string(), json!(entries));
        }
    }

    pub fn build(self, emitter: &Emitter) -> Result<EmitReport, BuildError> {
        let name = self.name.ok_or(BuildError::MissingIdentifier)?;

        let mut body = Map::new();
        if !self.arrays.is_empty() {
            body.insert("arrays".to_string(), Value::Object(self.arrays));
        }
        if let Some(geometry) = self.geometry {
            body.insert("geometry".to_string(), json!(geometry));
        }
        if !self.materials.is_empty() {
            body.insert("materials".to_string(), Value::Array(self.materials));
        }
        if !self.textures.is_empty() {
            body.insert("textures".to_string(), json!(self.textures));
        }

        let mut doc = Document::with_section_root(FORMAT_VERSION, "render_controllers");
        doc.insert_root(&format!("controller.render.{}", name), Value::Object(body));

        let mut report = EmitReport::default();
        emitter.write_json(Category::RenderControllers, &name, &doc, &mut report);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controller_shape() {
        let tmp = tempfile::tempdir().unwrap();
        let emitter = Emitter::new(tmp.path());
        let report = RenderControllerBuilder::new()
            .name("golem")
            .geometry("geometry.default")
            .add_material("*", "material.default")
            .add_texture("texture.default")
            .add_texture_array("Array.skins", &["texture.default", "texture.mossy"])
            .build(&emitter)
            .unwrap();
        assert!(report.is_complete());

        let path = tmp.path().join("resources/render_controllers/golem.json");
        let doc: Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        let ctrl = &doc["render_controllers"]["controller.render.golem"];
        assert_eq!(ctrl["geometry"], "geometry.default");
        assert_eq!(ctrl["materials"], json!([{"*": "material.default"}]));
        assert_eq!(
            ctrl["arrays"]["textures"]["Array.skins"],
            json!(["texture.default", "texture.mossy"])
        );
    }

    #[test]
    fn name_required() {
        let tmp = tempfile::tempdir().unwrap();
        let emitter = Emitter::new(tmp.path());
        let err = RenderControllerBuilder::new()
            .geometry("geometry.default")
            .build(&emitter)
            .unwrap_err();
        assert!(matches!(err, BuildError::MissingIdentifier));
    }
}
