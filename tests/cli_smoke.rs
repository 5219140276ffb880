use std::process::Command;

use serde_json::Value;

const CONFIG: &str = r#"{
  "items": [
    {
      "item": "ITEM_GLASS",
      "instance": "instances/glass_128.vmf",
      "material": "glass/glasswindow",
      "offset": "0.5",
      "frames": { "corner": "instances/frame_corner.vmf" }
    }
  ]
}"#;

fn marker(target: &str, origin: &str, angles: &str) -> String {
    format!(
        "  - classname: func_instance\n    keys: {{ file: instances/glass_128.vmf, targetname: {target}, origin: \"{origin}\", angles: \"{angles}\" }}\n"
    )
}

fn entities_named<'a>(doc: &'a Value, name: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
    doc["entities"]
        .as_array()
        .into_iter()
        .flatten()
        .filter(move |e| e["keys"]["targetname"] == name)
}

#[test]
fn builds_a_pane_and_writes_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut level = String::from("entities:\n  - classname: worldspawn\n");
    for x in [0, 128] {
        for y in [0, 128, 256] {
            level.push_str(&marker("floor", &format!("{x} {y} 64"), "-90 0 0"));
        }
    }
    std::fs::write(dir.path().join("level.yaml"), level).expect("write level");
    std::fs::write(dir.path().join("glass.json"), CONFIG).expect("write config");

    let out = Command::new(env!("CARGO_BIN_EXE_paneforge"))
        .current_dir(dir.path())
        .args(["level.yaml", "--config", "glass.json", "--output", "built.json"])
        .output()
        .expect("run paneforge");
    assert!(
        out.status.success(),
        "paneforge failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout.trim(),
        "floor: 6 cells -> floor-surf, floor-clip, 6 frames (single 0, corner 4, edge 2, ubend 0)"
    );

    let text = std::fs::read_to_string(dir.path().join("built.json")).expect("read output");
    let doc: Value = serde_json::from_str(&text).expect("output is json");

    let surf: Vec<_> = entities_named(&doc, "floor-surf").collect();
    assert_eq!(surf.len(), 1);
    assert_eq!(surf[0]["classname"], "func_breakable_surf");
    assert_eq!(surf[0]["outputs"][0]["target"], "floor-clip");
    assert_eq!(surf[0]["outputs"][0]["input"], "Kill");

    let clip: Vec<_> = entities_named(&doc, "floor-clip").collect();
    assert_eq!(clip.len(), 1);
    assert_eq!(clip[0]["classname"], "func_brush");

    let frames: Vec<_> = entities_named(&doc, "floor").collect();
    assert_eq!(frames.len(), 6);
    let corners = frames
        .iter()
        .filter(|f| f["keys"]["file"] == "instances/frame_corner.vmf")
        .count();
    assert_eq!(corners, 4);
    assert!(frames
        .iter()
        .all(|f| f["keys"]["file"] != "instances/glass_128.vmf"));

    assert_eq!(doc["entities"][0]["classname"], "worldspawn");
}

#[test]
fn keep_going_skips_broken_panes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut level = String::from("entities:\n");
    level.push_str(&marker("bad", "0 0 64", "-90 0 0"));
    level.push_str(&marker("bad", "0 0 64", "0 45 0"));
    level.push_str(&marker("good", "64 0 0", "0 0 0"));
    std::fs::write(dir.path().join("level.yaml"), level).expect("write level");
    std::fs::write(dir.path().join("glass.json"), CONFIG).expect("write config");

    let out = Command::new(env!("CARGO_BIN_EXE_paneforge"))
        .current_dir(dir.path())
        .args(["level.yaml", "--config", "glass.json", "--keep-going"])
        .output()
        .expect("run paneforge");
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("skipping pane"));

    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("good: 1 cells"));

    let text = std::fs::read_to_string(dir.path().join("out.json")).expect("read output");
    let doc: Value = serde_json::from_str(&text).expect("output is json");
    assert_eq!(entities_named(&doc, "bad-surf").count(), 0);
    assert_eq!(entities_named(&doc, "good-surf").count(), 1);
}
