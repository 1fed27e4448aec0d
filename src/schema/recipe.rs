/// Recipe builder — shaped, shapeless, and furnace recipes, plus a
/// custom-kind escape hatch for recipe schemas the typed structs do
/// not cover.
///
/// Unlike block/entity/item behavior documents, a recipe document's
/// single root key is the recipe kind tag itself, with the
/// `description.identifier` nested inside its value.
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

use crate::core::document::Document;
use crate::core::emitter::{Category, EmitReport, Emitter};
use crate::core::identifier::Identifier;
use crate::core::BuildError;

const FORMAT_VERSION: &str = "1.12";

/// An item reference in a recipe key, ingredient list, or result.
#[derive(Debug, Clone, Serialize)]
pub struct Ingredient {
    pub item: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<i32>,
}

impl Ingredient {
    pub fn item(id: &str) -> Ingredient {
        Ingredient {
            item: id.to_string(),
            count: None,
            data: None,
        }
    }

    pub fn counted(id: &str, count: u32) -> Ingredient {
        Ingredient {
            item: id.to_string(),
            count: Some(count),
            data: None,
        }
    }
}

/// A 3x3-or-smaller pattern recipe for a crafting-table-tagged bench.
#[derive(Debug, Clone)]
pub struct ShapedRecipe {
    tags: Vec<String>,
    pattern: Vec<String>,
    key: BTreeMap<String, Ingredient>,
    result: Ingredient,
}

impl ShapedRecipe {
    pub fn new(pattern: &[&str], result: Ingredient) -> ShapedRecipe {
        ShapedRecipe {
            tags: vec!["crafting_table".to_string()],
            pattern: pattern.iter().map(|row| row.to_string()).collect(),
            key: BTreeMap::new(),
            result,
        }
    }

    /// Replace the default `crafting_table` tag set.
    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Bind a pattern symbol to an ingredient; last call per symbol
    /// wins.
    pub fn key(mut self, symbol: char, ingredient: Ingredient) -> Self {
        self.key.insert(symbol.to_string(), ingredient);
        self
    }
}

/// An unordered ingredient-list recipe.
#[derive(Debug, Clone)]
pub struct ShapelessRecipe {
    tags: Vec<String>,
    ingredients: Vec<Ingredient>,
    result: Ingredient,
}

impl ShapelessRecipe {
    pub fn new(result: Ingredient) -> ShapelessRecipe {
        ShapelessRecipe {
            tags: vec!["crafting_table".to_string()],
            ingredients: Vec::new(),
            result,
        }
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }
}

/// A furnace (or smoker/blast-furnace, via tags) input→output recipe.
#[derive(Debug, Clone)]
pub struct FurnaceRecipe {
    tags: Vec<String>,
    input: String,
    output: String,
}

impl FurnaceRecipe {
    pub fn new(input: &str, output: &str) -> FurnaceRecipe {
        FurnaceRecipe {
            tags: vec!["furnace".to_string()],
            input: input.to_string(),
            output: output.to_string(),
        }
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }
}

#[derive(Debug, Clone)]
enum RecipeKind {
    Shaped(ShapedRecipe),
    Shapeless(ShapelessRecipe),
    Furnace(FurnaceRecipe),
    Custom { tag: String, value: Value },
}

/// Accumulates one recipe document. Setting a second recipe payload
/// replaces the first (one recipe per file).
#[derive(Debug)]
pub struct RecipeBuilder {
    identifier: Option<String>,
    kind: Option<RecipeKind>,
}

impl Default for RecipeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeBuilder {
    pub fn new() -> RecipeBuilder {
        RecipeBuilder {
            identifier: None,
            kind: None,
        }
    }

    /// The recipe's `namespace:name` identifier; accepts the
    /// `@name<stem>` file-name override form. Validated at `build`.
    pub fn identifier(mut self, raw: &str) -> Self {
        self.identifier = Some(raw.to_string());
        self
    }

    pub fn shaped(mut self, recipe: ShapedRecipe) -> Self {
        self.kind = Some(RecipeKind::Shaped(recipe));
        self
    }

    pub fn shapeless(mut self, recipe: ShapelessRecipe) -> Self {
        self.kind = Some(RecipeKind::Shapeless(recipe));
        self
    }

    pub fn furnace(mut self, recipe: FurnaceRecipe) -> Self {
        self.kind = Some(RecipeKind::Furnace(recipe));
        self
    }

    /// Escape hatch: an arbitrary recipe kind tag and payload. The
    /// builder still injects `description.identifier` into the payload.
    pub fn custom(mut self, tag: &str, value: impl Into<Value>) -> Self {
        self.kind = Some(RecipeKind::Custom {
            tag: tag.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn build(self, emitter: &Emitter) -> Result<EmitReport, BuildError> {
        let raw = self.identifier.ok_or(BuildError::MissingIdentifier)?;
        let id = Identifier::parse(&raw)?;
        let kind = self.kind.ok_or(BuildError::MissingRecipe)?;

        let description = json!({ "identifier": id.stored() });
        let (tag, payload) = match kind {
            RecipeKind::Shaped(recipe) => {
                let mut body = Map::new();
                body.insert("description".to_string(), description);
                body.insert("tags".to_string(), json!(recipe.tags));
                body.insert("pattern".to_string(), json!(recipe.pattern));
                body.insert("key".to_string(), serde_json::to_value(&recipe.key)?);
                body.insert("result".to_string(), serde_json::to_value(&recipe.result)?);
                ("minecraft:recipe_shaped", Value::Object(body))
            }
            RecipeKind::Shapeless(recipe) => {
                let mut body = Map::new();
                body.insert("description".to_string(), description);
                body.insert("tags".to_string(), json!(recipe.tags));
                body.insert(
                    "ingredients".to_string(),
                    serde_json::to_value(&recipe.ingredients)?,
                );
                body.insert("result".to_string(), serde_json::to_value(&recipe.result)?);
                ("minecraft:recipe_shapeless", Value::Object(body))
            }
            RecipeKind::Furnace(recipe) => {
                let mut body = Map::new();
                body.insert("description".to_string(), description);
                body.insert("tags".to_string(), json!(recipe.tags));
                body.insert("input".to_string(), json!(recipe.input));
                body.insert("output".to_string(), json!(recipe.output));
                ("minecraft:recipe_furnace", Value::Object(body))
            }
            RecipeKind::Custom { tag, value } => {
                let mut body = match value {
                    Value::Object(map) => map,
                    other => {
                        let mut map = Map::new();
                        map.insert("value".to_string(), other);
                        map
                    }
                };
                body.insert("description".to_string(), description);
                let mut doc = Document::versioned(FORMAT_VERSION);
                doc.insert_root(&tag, Value::Object(body));
                let mut report = EmitReport::default();
                emitter.write_json(Category::Recipes, id.file_base(), &doc, &mut report);
                return Ok(report);
            }
        };

        let mut doc = Document::versioned(FORMAT_VERSION);
        doc.insert_root(tag, payload);

        let mut report = EmitReport::default();
        emitter.write_json(Category::Recipes, id.file_base(), &doc, &mut report);
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
    fn shaped_recipe_shape() {
        let tmp = tempfile::tempdir().unwrap();
        let emitter = Emitter::new(tmp.path());
        let report = RecipeBuilder::new()
            .identifier("mypack:diamond_chest")
            .shaped(
                ShapedRecipe::new(&["DDD", "DAD", "DDD"], Ingredient::counted("minecraft:chest", 1))
                    .key('D', Ingredient::item("minecraft:diamond"))
                    .key('A', Ingredient::item("minecraft:apple")),
            )
            .build(&emitter)
            .unwrap();
        assert!(report.is_complete());

        let doc = read_json(&tmp.path().join("behavior/recipes/mypack_diamond_chest.json"));
        assert_eq!(doc["format_version"], "1.12");
        let body = &doc["minecraft:recipe_shaped"];
        assert_eq!(body["description"]["identifier"], "mypack:diamond_chest");
        assert_eq!(body["tags"], json!(["crafting_table"]));
        assert_eq!(body["pattern"], json!(["DDD", "DAD", "DDD"]));
        assert_eq!(body["key"]["D"], json!({"item": "minecraft:diamond"}));
        assert_eq!(body["result"], json!({"item": "minecraft:chest", "count": 1}));
    }

    #[test]
    fn furnace_recipe_shape() {
        let tmp = tempfile::tempdir().unwrap();
        let emitter = Emitter::new(tmp.path());
        RecipeBuilder::new()
            .identifier("mypack:roasted_root")
            .furnace(FurnaceRecipe::new("mypack:root", "mypack:roasted_root"))
            .build(&emitter)
            .unwrap();

        let doc = read_json(&tmp.path().join("behavior/recipes/mypack_roasted_root.json"));
        let body = &doc["minecraft:recipe_furnace"];
        assert_eq!(body["input"], "mypack:root");
        assert_eq!(body["output"], "mypack:roasted_root");
        assert_eq!(body["tags"], json!(["furnace"]));
    }

    #[test]
    fn custom_kind_gets_identifier_injected() {
        let tmp = tempfile::tempdir().unwrap();
        let emitter = Emitter::new(tmp.path());
        RecipeBuilder::new()
            .identifier("mypack:brew")
            .custom(
                "minecraft:recipe_brewing_mix",
                json!({"tags": ["brewing_stand"], "input": "minecraft:potion", "reagent": "mypack:herb", "output": "mypack:tonic"}),
            )
            .build(&emitter)
            .unwrap();

        let doc = read_json(&tmp.path().join("behavior/recipes/mypack_brew.json"));
        let body = &doc["minecraft:recipe_brewing_mix"];
        assert_eq!(body["description"]["identifier"], "mypack:brew");
        assert_eq!(body["reagent"], "mypack:herb");
    }

    #[test]
    fn missing_payload_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let emitter = Emitter::new(tmp.path());
        let err = RecipeBuilder::new()
            .identifier("mypack:nothing")
            .build(&emitter)
            .unwrap_err();
        assert!(matches!(err, BuildError::MissingRecipe));
        assert!(std::fs::read_dir(tmp.path()).unwrap().next().is_none());
    }
}
