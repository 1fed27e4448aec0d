/// Loot table builder — typed pools, entries, and functions.
///
/// Loot tables are not identifier-named; the caller supplies the file
/// stem directly (they are referenced by path, e.g.
/// `loot_tables/gifts.json`, not by `namespace:name`).
use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::document::Document;
use crate::core::emitter::{Category, EmitReport, Emitter};
use crate::core::BuildError;

/// A weighted roll over a set of entries.
#[derive(Debug, Clone, Serialize)]
pub struct LootPool {
    pub rolls: Value,
    pub entries: Vec<LootEntry>,
}

impl LootPool {
    /// Fixed roll count. Use [`LootPool::rolls_range`] for `{min, max}`.
    pub fn new(rolls: u32) -> LootPool {
        LootPool {
            rolls: Value::from(rolls),
            entries: Vec::new(),
        }
    }

    pub fn rolls_range(min: u32, max: u32) -> LootPool {
        LootPool {
            rolls: serde_json::json!({ "min": min, "max": max }),
            entries: Vec::new(),
        }
    }

    pub fn entry(mut self, entry: LootEntry) -> Self {
        self.entries.push(entry);
        self
    }
}

/// One drop candidate within a pool.
#[derive(Debug, Clone, Serialize)]
pub struct LootEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<LootFunction>,
}

impl LootEntry {
    pub fn item(name: &str) -> LootEntry {
        LootEntry {
            kind: "item".to_string(),
            name: name.to_string(),
            weight: None,
            functions: Vec::new(),
        }
    }

    /// Reference another loot table by path.
    pub fn loot_table(path: &str) -> LootEntry {
        LootEntry {
            kind: "loot_table".to_string(),
            name: path.to_string(),
            weight: None,
            functions: Vec::new(),
        }
    }

    pub fn weight(mut self, weight: u32) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn function(mut self, function: LootFunction) -> Self {
        self.functions.push(function);
        self
    }
}

/// A consumer-side item transform (`set_count`, `set_data`,
/// `enchant_randomly`, ...); parameters are free-form and flattened
/// next to the function name.
#[derive(Debug, Clone, Serialize)]
pub struct LootFunction {
    pub function: String,
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl LootFunction {
    pub fn new(function: &str) -> LootFunction {
        LootFunction {
            function: function.to_string(),
            params: Map::new(),
        }
    }

    pub fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }
}

/// Accumulates one loot table; pools append in call order.
#[derive(Debug)]
pub struct LootTableBuilder {
    file_stem: String,
    kind: Option<String>,
    pools: Vec<LootPool>,
}

impl LootTableBuilder {
    /// `file_stem` names the output file (`<stem>.json`).
    pub fn new(file_stem: &str) -> LootTableBuilder {
        LootTableBuilder {
            file_stem: file_stem.to_string(),
            kind: None,
            pools: Vec::new(),
        }
    }

    /// Optional top-level `type` field, e.g. `minecraft:chest`.
    pub fn kind(mut self, kind: &str) -> Self {
        self.kind = Some(kind.to_string());
        self
    }

    pub fn add_pool(mut self, pool: LootPool) -> Self {
        self.pools.push(pool);
        self
    }

    pub fn build(self, emitter: &Emitter) -> Result<EmitReport, BuildError> {
        let mut doc = Document::empty();
        if let Some(kind) = &self.kind {
            doc.insert_top_level("type", Value::from(kind.as_str()));
        }
        for pool in &self.pools {
            doc.append("pools", serde_json::to_value(pool)?);
        }

        let mut report = EmitReport::default();
        emitter.write_json(Category::LootTables, &self.file_stem, &doc, &mut report);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pools_serialize_in_call_order() {
        let tmp = tempfile::tempdir().unwrap();
        let emitter = Emitter::new(tmp.path());
        let report = LootTableBuilder::new("golem_drops")
            .add_pool(
                LootPool::new(1).entry(
                    LootEntry::item("mypack:gear").function(
                        LootFunction::new("set_count").param("count", json!({"min": 5, "max": 5})),
                    ),
                ),
            )
            .add_pool(LootPool::rolls_range(0, 2).entry(LootEntry::item("minecraft:iron_ingot").weight(3)))
            .build(&emitter)
            .unwrap();
        assert!(report.is_complete());

        let text = std::fs::read_to_string(
            tmp.path().join("behavior/loot_tables/golem_drops.json"),
        )
        .unwrap();
        let doc: Value = serde_json::from_str(&text).unwrap();
        let pools = doc["pools"].as_array().unwrap();
        assert_eq!(pools.len(), 2);
        assert_eq!(pools[0]["rolls"], json!(1));
        assert_eq!(
            pools[0]["entries"][0],
            json!({
                "type": "item",
                "name": "mypack:gear",
                "functions": [{"function": "set_count", "count": {"min": 5, "max": 5}}]
            })
        );
        assert_eq!(pools[1]["rolls"], json!({"min": 0, "max": 2}));
        assert_eq!(pools[1]["entries"][0]["weight"], json!(3));
    }

    #[test]
    fn chest_table_has_type_field() {
        let tmp = tempfile::tempdir().unwrap();
        let emitter = Emitter::new(tmp.path());
        LootTableBuilder::new("dungeon_chest")
            .kind("minecraft:chest")
            .add_pool(LootPool::new(1).entry(LootEntry::item("minecraft:apple")))
            .build(&emitter)
            .unwrap();
        let text = std::fs::read_to_string(
            tmp.path().join("behavior/loot_tables/dungeon_chest.json"),
        )
        .unwrap();
        let doc: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["type"], "minecraft:chest");
    }
}
