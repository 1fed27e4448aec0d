/// UI builder — a namespaced JSON-UI definition file.
use serde_json::{json, Value};

use crate::core::document::Document;
use crate::core::emitter::{Category, EmitReport, Emitter};
use crate::core::BuildError;

/// Accumulates one `ui/<namespace>.json` document: the `namespace`
/// field plus element definitions keyed at top level.
#[derive(Debug)]
pub struct UiBuilder {
    namespace: Option<String>,
    elements: Vec<(String, Value)>,
}

impl Default for UiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UiBuilder {
    pub fn new() -> UiBuilder {
        UiBuilder {
            namespace: None,
            elements: Vec::new(),
        }
    }

    /// The UI namespace; doubles as the output file stem. `build`
    /// fails without it.
    pub fn namespace(mut self, value: &str) -> Self {
        self.namespace = Some(value.to_string());
        self
    }

    /// Define an element (`"main_panel"`, `"label@common.label"`, ...);
    /// last call per name wins.
    pub fn add_element(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.elements.push((name.to_string(), value.into()));
        self
    }

    pub fn build(self, emitter: &Emitter) -> Result<EmitReport, BuildError> {
        let namespace = self.namespace.ok_or(BuildError::MissingIdentifier)?;

        let mut doc = Document::empty();
        doc.insert_top_level("namespace", json!(namespace));
        for (name, value) in self.elements {
            doc.insert_top_level(&name, value);
        }

        let mut report = EmitReport::default();
        emitter.write_json(Category::Ui, &namespace, &doc, &mut report);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_first_then_elements() {
        let tmp = tempfile::tempdir().unwrap();
        let emitter = Emitter::new(tmp.path());
        let report = UiBuilder::new()
            .namespace("mypack_hud")
            .add_element("health_bar", json!({"type": "image", "texture": "textures/ui/heart"}))
            .add_element("health_bar", json!({"type": "image", "texture": "textures/ui/heart2"}))
            .build(&emitter)
            .unwrap();
        assert!(report.is_complete());

        let text =
            std::fs::read_to_string(tmp.path().join("resources/ui/mypack_hud.json")).unwrap();
        assert!(text.starts_with("{\"namespace\":\"mypack_hud\""));
        let doc: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["health_bar"]["texture"], "textures/ui/heart2");
    }

    #[test]
    fn namespace_required() {
        let tmp = tempfile::tempdir().unwrap();
        let emitter = Emitter::new(tmp.path());
        let err = UiBuilder::new()
            .add_element("panel", json!({}))
            .build(&emitter)
            .unwrap_err();
        assert!(matches!(err, BuildError::MissingIdentifier));
        assert!(std::fs::read_dir(tmp.path()).unwrap().next().is_none());
    }
}
