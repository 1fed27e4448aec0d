/// Animation controller builder — client-side animation state machines.
use serde_json::{json, Map, Value};

use crate::core::document::Document;
use crate::core::emitter::{Category, EmitReport, Emitter};
use crate::core::BuildError;

const FORMAT_VERSION: &str = "1.19.0";

/// One state of an animation controller, assembled fluently and added
/// via [`AnimationControllerBuilder::add_state`].
#[derive(Debug, Clone, Default)]
pub struct AnimationState {
    animations: Vec<String>,
    transitions: Vec<(String, String)>,
    blend_transition: Option<f64>,
}

impl AnimationState {
    pub fn new() -> AnimationState {
        AnimationState::default()
    }

    /// Short animation name played while this state is active.
    pub fn animation(mut self, name: &str) -> Self {
        self.animations.push(name.to_string());
        self
    }

    /// Transition to `target` when the Molang `condition` holds.
    /// Entries keep call order; the consumer takes the first match.
    pub fn transition(mut self, target: &str, condition: &str) -> Self {
        self.transitions
            .push((target.to_string(), condition.to_string()));
        self
    }

    pub fn blend_transition(mut self, seconds: f64) -> Self {
        self.blend_transition = Some(seconds);
        self
    }

    fn to_value(&self) -> Value {
        let mut body = Map::new();
        if !self.animations.is_empty() {
            body.insert("animations".to_string(), json!(self.animations));
        }
        if !self.transitions.is_empty() {
            let entries: Vec<Value> = self
                .transitions
                .iter()
                .map(|(target, condition)| {
                    let mut entry = Map::new();
                    entry.insert(target.clone(), json!(condition));
                    Value::Object(entry)
                })
                .collect();
            body.insert("transitions".to_string(), Value::Array(entries));
        }
        if let Some(seconds) = self.blend_transition {
            body.insert("blend_transition".to_string(), json!(seconds));
        }
        Value::Object(body)
    }
}

/// Builds one `controller.animation.<name>` definition. States merge by
/// name, so redefining a state replaces it without touching siblings.
#[derive(Debug)]
pub struct AnimationControllerBuilder {
    name: Option<String>,
    initial_state: Option<String>,
    states: Map<String, Value>,
}

impl Default for AnimationControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationControllerBuilder {
    pub fn new() -> AnimationControllerBuilder {
        AnimationControllerBuilder {
            name: None,
            initial_state: None,
            states: Map::new(),
        }
    }

    /// Short controller name: `name("golem_moods")` defines
    /// `controller.animation.golem_moods` in `golem_moods.json`.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Entry state; the consumer defaults to `default` when unset.
    pub fn initial_state(mut self, name: &str) -> Self {
        self.initial_state = Some(name.to_string());
        self
    }

    pub fn add_state(mut self, name: &str, state: AnimationState) -> Self {
        self.states.insert(name.to_string(), state.to_value());
        self
    }

    /// Escape hatch for state shapes the typed [`AnimationState`] does
    /// not cover (particle effects, sound events, ...).
    pub fn add_state_value(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.states.insert(name.to_string(), value.into());
        self
    }

    pub fn build(self, emitter: &Emitter) -> Result<EmitReport, BuildError> {
        let name = self.name.ok_or(BuildError::MissingIdentifier)?;

        let mut body = Map::new();
        if let Some(initial) = self.initial_state {
            body.insert("initial_state".to_string(), json!(initial));
        }
        body.insert("states".to_string(), Value::Object(self.states));

        let mut doc = Document::with_section_root(FORMAT_VERSION, "animation_controllers");
        doc.insert_root(
            &format!("controller.animation.{}", name),
            Value::Object(body),
        );

        let mut report = EmitReport::default();
        emitter.write_json(Category::AnimationControllers, &name, &doc, &mut report);
        Ok(report)
    }
}
