/// Pack Preview — assembles a small sample add-on pack and prints what
/// was written.
///
/// Usage: pack_preview <out_dir> [--pretty]
use addonkit::schema::loot_table::{LootEntry, LootFunction, LootPool};
use addonkit::schema::recipe::{Ingredient, ShapedRecipe};
use addonkit::{
    BlockBuilder, EmitReport, Emitter, EntityBuilder, ItemBuilder, JsonStyle, LangBuilder,
    Locale, LootTableBuilder, MenuCategory, RecipeBuilder, RenderControllerBuilder,
};
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: pack_preview <out_dir> [--pretty]");
        process::exit(0);
    }

    let out_dir = &args[1];
    let mut emitter = Emitter::new(out_dir);
    if args.iter().any(|a| a == "--pretty") {
        emitter = emitter.json_style(JsonStyle::Pretty);
    }

    let mut reports: Vec<(&str, EmitReport)> = Vec::new();

    match ItemBuilder::new()
        .identifier("preview:apple")
        .menu_category(MenuCategory::Items, None, None)
        .add_component("minecraft:icon", "preview_apple")
        .add_texture("preview_apple", "textures/items/preview_apple")
        .build(&emitter)
    {
        Ok(report) => reports.push(("item preview:apple", report)),
        Err(e) => fail("item", e),
    }

    match BlockBuilder::new()
        .identifier("preview:lamp")
        .menu_category(MenuCategory::Construction, None, None)
        .add_state("preview:lit", serde_json::json!([false, true]))
        .add_component("minecraft:light_emission", 0)
        .add_permutation(
            "q.block_state('preview:lit')",
            serde_json::json!({"minecraft:light_emission": 15}),
        )
        .add_terrain_texture("preview_lamp", "textures/blocks/preview_lamp")
        .build(&emitter)
    {
        Ok(report) => reports.push(("block preview:lamp", report)),
        Err(e) => fail("block", e),
    }

    match EntityBuilder::new()
        .identifier("preview:spirit")
        .spawn_category("creature")
        .is_spawnable(true)
        .is_summonable(true)
        .add_component("minecraft:health", serde_json::json!({"value": 20}))
        .client_texture("default", "textures/entity/spirit")
        .client_geometry("default", "geometry.preview.spirit")
        .add_render_controller("controller.render.spirit")
        .build(&emitter)
    {
        Ok(report) => reports.push(("entity preview:spirit", report)),
        Err(e) => fail("entity", e),
    }

    match RenderControllerBuilder::new()
        .name("spirit")
        .geometry("geometry.default")
        .add_material("*", "material.default")
        .add_texture("texture.default")
        .build(&emitter)
    {
        Ok(report) => reports.push(("render controller spirit", report)),
        Err(e) => fail("render controller", e),
    }

    match RecipeBuilder::new()
        .identifier("preview:lamp_recipe")
        .shaped(
            ShapedRecipe::new(&["GGG", "GTG", "GGG"], Ingredient::counted("preview:lamp", 1))
                .key('G', Ingredient::item("minecraft:glass"))
                .key('T', Ingredient::item("minecraft:torch")),
        )
        .build(&emitter)
    {
        Ok(report) => reports.push(("recipe preview:lamp_recipe", report)),
        Err(e) => fail("recipe", e),
    }

    match LootTableBuilder::new("spirit_drops")
        .add_pool(
            LootPool::new(1).entry(
                LootEntry::item("preview:apple")
                    .function(LootFunction::new("set_count").param(
                        "count",
                        serde_json::json!({"min": 1, "max": 3}),
                    )),
            ),
        )
        .build(&emitter)
    {
        Ok(report) => reports.push(("loot table spirit_drops", report)),
        Err(e) => fail("loot table", e),
    }

    let lang = LangBuilder::new()
        .add_entry("item.preview:apple.name", "Preview Apple")
        .add_entry("tile.preview:lamp.name", "Preview Lamp")
        .add_entry("entity.preview:spirit.name", "Preview Spirit");
    match lang.build(Locale::EnUs, &emitter) {
        Ok(report) => reports.push(("lang en_US", report)),
        Err(e) => fail("lang", e),
    }

    println!("\n=== Pack Preview Report ===\n");
    let mut total = 0;
    let mut failed = 0;
    for (label, report) in &reports {
        for path in &report.written {
            println!("  wrote {} ({})", path.display(), label);
            total += 1;
        }
        for err in &report.failed {
            println!("  FAILED {} ({}): {}", err.path.display(), label, err.source);
            failed += 1;
        }
    }
    println!("\n{} files written, {} failed", total, failed);
    if failed > 0 {
        process::exit(1);
    }
}

fn fail(what: &str, err: addonkit::BuildError) -> ! {
    eprintln!("ERROR: failed to build {}: {}", what, err);
    process::exit(1);
}
