use paneforge_parser::{ConfigRegistry, Error, FrameKind};

const YAML: &str = r#"
items:
  - item: ITEM_BREAKABLE_GLASS
    instance: instances/glass/glass_128.vmf
    material: glass/glasswindow001a
    offset: "0.75"
    border_size: 2
    frames:
      corner: instances/glass/frame_corner.vmf
  - item: ITEM_THICK_GLASS
    instance: instances/glass/thick_128.vmf
    material: glass/thick
    thickness: 8
"#;

#[test]
fn yaml_description_builds_registry() {
    let registry = ConfigRegistry::from_yaml_str(YAML).unwrap();
    assert_eq!(registry.len(), 2);

    let glass = registry.lookup("INSTANCES/glass/GLASS_128.vmf").unwrap();
    assert_eq!(glass.item_id, "ITEM_BREAKABLE_GLASS");
    assert_eq!(glass.material, "glass/glasswindow001a");
    assert_eq!(glass.offset, 0.75);
    assert_eq!(glass.border_size, 2.0);
    assert_eq!(glass.thickness, 4.0);
    assert_eq!(
        glass.frames.get(FrameKind::Corner),
        "instances/glass/frame_corner.vmf"
    );
    assert_eq!(
        glass.frames.get(FrameKind::Edge),
        "instances/glass/glass_128_frame_edge.vmf"
    );

    let thick = registry.lookup("instances/glass/thick_128.vmf").unwrap();
    assert_eq!(thick.thickness, 8.0);
    assert_eq!(thick.offset, 0.5);
}

#[test]
fn json_description_builds_registry() {
    let json = serde_json::json!({
        "items": [{
            "item": "glass",
            "instance": "glass.vmf",
            "material": "glass/clear",
            "offset": 1
        }]
    });
    let registry = ConfigRegistry::from_json_str(&json.to_string()).unwrap();
    assert_eq!(registry.lookup("glass.vmf").unwrap().offset, 1.0);
}

#[test]
fn bad_number_reports_field() {
    let yaml = "items:\n  - item: g\n    instance: g.vmf\n    material: m\n    offset: deep\n";
    let err = ConfigRegistry::from_yaml_str(yaml).unwrap_err();
    assert!(
        matches!(&err, Error::InvalidNumber { field, .. } if field == "offset"),
        "{err}"
    );
}

#[test]
fn malformed_yaml_is_an_error() {
    assert!(matches!(
        ConfigRegistry::from_yaml_str("items: [1, 2,"),
        Err(Error::Yaml(_))
    ));
}

#[test]
fn missing_instance_is_an_error() {
    let yaml = "items:\n  - item: g\n    material: m\n";
    let err = ConfigRegistry::from_yaml_str(yaml).unwrap_err();
    assert!(matches!(err, Error::MissingField { ref field, .. } if field == "instance"));
}
