//! Command-line output paths: per-class reports, field rendering and the
//! canonical hex dump

use suidgen::render::hex_dump;
use suidgen::semantic::ClassHierarchy;
use suidgen::{canonical_bytes_of, serial_version_uids, Config, Error, InterfaceMode};

const SNAPSHOT: &str = r#"{
  "classes": [
    { "name": "com.example.Empty", "modifiers": ["public"], "interfaces": ["java.io.Serializable"] },
    { "name": "com.example.Plain", "modifiers": ["public"] },
    { "name": "com.example.Shape", "kind": "interface", "modifiers": ["public"] },
    {
      "name": "com.example.Tagged",
      "modifiers": ["public"],
      "interfaces": ["java.io.Serializable"],
      "fields": [
        { "name": "serialVersionUID", "modifiers": ["private", "static", "final"], "type": "long",
          "initializer": { "expression": "1L", "constant": true } }
      ]
    }
  ]
}"#;

const EMPTY_UID: i64 = -46_896_829_455_833_474;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn names(config: &Config) -> Vec<String> {
    let hierarchy = ClassHierarchy::from_json(SNAPSHOT).unwrap();
    serial_version_uids(&hierarchy, None, config)
        .unwrap()
        .into_iter()
        .map(|r| r.class)
        .collect()
}

#[test]
fn test_candidates_skip_interfaces() {
    init_logger();
    assert_eq!(names(&Config::default()), ["com.example.Empty", "com.example.Plain", "com.example.Tagged"]);
}

#[test]
fn test_as_declared_reports_only_serializable_classes() {
    init_logger();
    let config = Config::default().with_add_serializable(false);
    assert_eq!(names(&config), ["com.example.Empty", "com.example.Tagged"]);
}

#[test]
fn test_single_class_report() {
    init_logger();
    let hierarchy = ClassHierarchy::from_json(SNAPSHOT).unwrap();
    let config = Config::default().with_interface_mode(InterfaceMode::Direct);

    let reports = serial_version_uids(&hierarchy, Some("com.example.Empty"), &config).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].uid, EMPTY_UID);
    assert!(!reports[0].declared);
    assert_eq!(reports[0].render(false, true), format!("com.example.Empty: {}", EMPTY_UID));
    assert_eq!(
        reports[0].render(true, true),
        format!("// com.example.Empty\n@Serial\nprivate static final long serialVersionUID = {}L;", EMPTY_UID)
    );

    let tagged = serial_version_uids(&hierarchy, Some("com.example.Tagged"), &config).unwrap();
    assert!(tagged[0].declared);

    assert!(matches!(
        serial_version_uids(&hierarchy, Some("com.example.Gone"), &config),
        Err(Error::UnknownClass { .. })
    ));
}

#[test]
fn test_canonical_hex_dump() {
    init_logger();
    let hierarchy = ClassHierarchy::from_json(SNAPSHOT).unwrap();
    let bytes = canonical_bytes_of(&hierarchy, "com.example.Empty", &Config::default()).unwrap();

    // class name, class modifiers, one interface, the implicit constructor
    let mut expected = vec![0x00, 0x11];
    expected.extend_from_slice(b"com.example.Empty");
    expected.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]);
    expected.extend_from_slice(&[0x00, 0x14]);
    expected.extend_from_slice(b"java.io.Serializable");
    expected.extend_from_slice(&[0x00, 0x06]);
    expected.extend_from_slice(b"<init>");
    expected.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]);
    expected.extend_from_slice(&[0x00, 0x03]);
    expected.extend_from_slice(b"()V");
    assert_eq!(bytes, expected);

    let dump = hex_dump(&bytes);
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), (bytes.len() + 15) / 16);
    assert!(lines[0].starts_with("00 11 63 6f 6d 2e"));
    assert!(lines.iter().all(|line| line.split(' ').count() <= 16));
}
