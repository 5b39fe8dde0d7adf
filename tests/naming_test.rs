//! Integration tests for name cleaning, derivation and uniqueness

use filtered_export::core::naming::{
    clean_component_path, clean_name, derive_file_name, ComponentNameMode, NameRegistry,
    NamingOptions,
};
use filtered_export::domain::{Component, ComponentId};
use std::collections::HashSet;
use test_case::test_case;

fn component(id: &str, name: &str) -> Component {
    Component::new(ComponentId::new(id).unwrap(), name)
}

#[test_case("Bracket v3", true, false, "Bracket" ; "version tag stripped")]
#[test_case("Bracket v3x", true, false, "Bracket v3x" ; "version tag must be digits")]
#[test_case("Bracket v", true, false, "Bracket" ; "bare v is a version tag")]
#[test_case("Bracket v3", false, false, "Bracket v3" ; "version tag kept")]
#[test_case("Part 1.2", false, false, "Part 1__2" ; "dots always replaced")]
#[test_case("Leg:2", false, false, "Leg__2" ; "colons always replaced")]
#[test_case(" Side Panel ", false, true, "Side_Panel" ; "spacing normalized")]
#[test_case("Frame v12.1", true, true, "Frame_v12__1" ; "tag only stripped at end")]
fn test_clean_name(raw: &str, strip: bool, normalize: bool, expected: &str) {
    assert_eq!(clean_name(raw, strip, normalize), expected);
}

#[test_case("A:2+B:1+C:3", true, "A-B-C" ; "instance suffixes stripped")]
#[test_case("A:2+B:1+C:3", false, "A__2__B__1__C__3" ; "separators replaced")]
#[test_case("Leg v2:1", true, "Leg" ; "version tag after suffix removal")]
fn test_clean_component_path(path: &str, strip: bool, expected: &str) {
    assert_eq!(clean_component_path(path, strip, false), expected);
}

#[test]
fn test_end_to_end_names() {
    let root = component("assy", "Assy");
    let leg = component("leg", "Leg").with_body("Foot");
    let top = component("top", "Top").with_body("Surface");
    let options = NamingOptions {
        strip_version_tag: false,
        ..NamingOptions::default()
    };
    let mut registry = NameRegistry::new();

    let leg_name = derive_file_name(&leg.bodies[0], &leg, "Leg:1", &root, &options, &mut registry);
    let top_name = derive_file_name(&top.bodies[0], &top, "Top:1", &root, &options, &mut registry);

    assert_eq!(leg_name, "Assy-Leg-Foot");
    assert_eq!(top_name, "Assy-Top-Surface");
}

#[test]
fn test_root_name_stands_in_for_component_name() {
    let root = component("assy", "Assy").with_body("Frame");
    let body = &root.bodies[0];

    let with_component = NamingOptions::default();
    let without_component = NamingOptions {
        add_component_name: false,
        ..NamingOptions::default()
    };

    let mut registry = NameRegistry::new();
    assert_eq!(
        derive_file_name(body, &root, "Assy", &root, &with_component, &mut registry),
        "Assy-Frame"
    );

    let mut registry = NameRegistry::new();
    assert_eq!(
        derive_file_name(body, &root, "Assy", &root, &without_component, &mut registry),
        "Assy-Frame"
    );
}

#[test]
fn test_full_path_mode() {
    let root = component("robot", "Robot v2");
    let gripper = component("gripper", "Gripper").with_body("Jaw");
    let options = NamingOptions {
        component_name_mode: ComponentNameMode::FullPath,
        ..NamingOptions::default()
    };
    let mut registry = NameRegistry::new();

    let name = derive_file_name(
        &gripper.bodies[0],
        &gripper,
        "Arm:1+Gripper:2",
        &root,
        &options,
        &mut registry,
    );

    assert_eq!(name, "Robot-Arm-Gripper-Jaw");
}

#[test]
fn test_refinement_prefix() {
    let root = component("assy", "Assy");
    let leg = component("leg", "Leg").with_body("Foot");
    let options = NamingOptions {
        add_refinement_name: true,
        ..NamingOptions::default()
    }
    .with_refinement_label("High");
    let mut registry = NameRegistry::new();

    let name = derive_file_name(&leg.bodies[0], &leg, "Leg:1", &root, &options, &mut registry);

    assert_eq!(name, "High-Assy-Leg-Foot");
}

#[test]
fn test_collision_suffixing() {
    let mut registry: NameRegistry = ["Arm"].into_iter().collect();
    assert_eq!(registry.claim("Arm"), "Arm_(1)");
    assert_eq!(registry.claim("Arm"), "Arm_(2)");
    assert_eq!(registry.claim("Arm_(1)"), "Arm_(1)_(1)");
}

#[test]
fn test_names_are_unique_within_a_run() {
    let root = component("assy", "Assy");
    let parts: Vec<Component> = (0..5)
        .map(|i| component(&format!("p{i}"), "Part").with_body("Body").with_body("Body"))
        .collect();
    let options = NamingOptions::default();
    let mut registry = NameRegistry::new();

    let names: Vec<String> = parts
        .iter()
        .flat_map(|part| part.bodies.iter().map(move |body| (part, body)))
        .map(|(part, body)| derive_file_name(body, part, "Part:1", &root, &options, &mut registry))
        .collect();

    let distinct: HashSet<&String> = names.iter().collect();
    assert_eq!(names.len(), 10);
    assert_eq!(distinct.len(), names.len());
    assert_eq!(names[0], "Assy-Part-Body");
    assert_eq!(names[1], "Assy-Part-Body_(1)");
}

#[test]
fn test_derivation_is_deterministic() {
    let root = component("assy", "Table v4");
    let leg = component("leg", "Leg v2").with_body("Foot Pad.1");
    let options = NamingOptions::default();

    let first = derive_file_name(
        &leg.bodies[0],
        &leg,
        "Leg v2:1",
        &root,
        &options,
        &mut NameRegistry::new(),
    );
    let second = derive_file_name(
        &leg.bodies[0],
        &leg,
        "Leg v2:1",
        &root,
        &options,
        &mut NameRegistry::new(),
    );

    assert_eq!(first, second);
    assert_eq!(first, "Table-Leg-Foot_Pad__1");
}
