/// Emitter behavior — layout configuration, styles, and failure
/// reporting.
use addonkit::{Emitter, ItemBuilder, JsonStyle, LangBuilder, Locale};
use serde_json::Value;

#[test]
fn legacy_tree_names() {
    // The original generator used `beh`/`reh` trees; both are plain
    // configuration here.
    let tmp = tempfile::tempdir().unwrap();
    let emitter = Emitter::new(tmp.path()).behavior_dir("beh").resource_dir("reh");

    ItemBuilder::new()
        .identifier("id:apple")
        .build(&emitter)
        .unwrap();
    LangBuilder::new()
        .add_entry("item.id:apple", "Apple")
        .build(Locale::EnUs, &emitter)
        .unwrap();

    assert!(tmp.path().join("beh/items/id_apple.json").exists());
    assert!(tmp.path().join("reh/texts/en_US.lang").exists());
}

#[test]
fn pretty_style_round_trips_to_same_value() {
    let tmp = tempfile::tempdir().unwrap();
    let compact = Emitter::new(tmp.path().join("compact"));
    let pretty = Emitter::new(tmp.path().join("pretty")).json_style(JsonStyle::Pretty);

    let make = || {
        ItemBuilder::new()
            .identifier("id:apple")
            .add_component("minecraft:icon", "itemTexture")
    };
    let a = make().build(&compact).unwrap();
    let b = make().build(&pretty).unwrap();

    let av: Value =
        serde_json::from_str(&std::fs::read_to_string(&a.written[0]).unwrap()).unwrap();
    let bv: Value =
        serde_json::from_str(&std::fs::read_to_string(&b.written[0]).unwrap()).unwrap();
    assert_eq!(av, bv);
}

#[test]
fn report_lists_written_paths_in_write_order() {
    let tmp = tempfile::tempdir().unwrap();
    let emitter = Emitter::new(tmp.path());

    let report = ItemBuilder::new()
        .identifier("id:apple")
        .add_texture("itemTexture", "textures/items/apple")
        .build(&emitter)
        .unwrap();

    assert_eq!(report.written.len(), 2);
    assert!(report.written[0].ends_with("behavior/items/id_apple.json"));
    assert!(report.written[1].ends_with("resources/textures/item_texture.json"));
}

#[test]
fn write_failure_is_reported_not_swallowed() {
    let tmp = tempfile::tempdir().unwrap();
    // A plain file where the behavior tree should go makes directory
    // creation fail regardless of process privileges.
    std::fs::write(tmp.path().join("behavior"), "in the way").unwrap();

    let emitter = Emitter::new(tmp.path());
    let report = ItemBuilder::new()
        .identifier("id:apple")
        .build(&emitter)
        .unwrap();

    assert!(!report.is_complete());
    assert_eq!(report.failed.len(), 1);
    assert!(report.failed[0].path.ends_with("behavior/items/id_apple.json"));
}
