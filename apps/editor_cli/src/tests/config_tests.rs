use super::*;

use std::{
    env,
    time::{SystemTime, UNIX_EPOCH},
};

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        r#"
max_list_items = "40"
list_axis = "horizontal"
log_filter = "reorder=debug"
"#,
    );

    assert_eq!(settings.max_list_items, 40);
    assert_eq!(settings.list_axis, Axis::Horizontal);
    assert_eq!(settings.log_filter, "reorder=debug");
    assert_eq!(settings.names_file, None);
}

#[test]
fn env_wins_over_file() {
    let mut settings = Settings::default();
    apply_file(&mut settings, "max_list_items = \"40\"");
    apply_env(&mut settings, |key| match key {
        "APP__MAX_LIST_ITEMS" => Some("12".into()),
        "EDITOR_LOG" => Some("warn".into()),
        _ => None,
    });

    assert_eq!(settings.max_list_items, 12);
    assert_eq!(settings.log_filter, "warn");
}

#[test]
fn invalid_values_fall_back_to_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        "max_list_items = \"lots\"\nlist_axis = \"diagonal\"",
    );
    apply_env(&mut settings, |key| (key == "APP__MAX_LIST_ITEMS").then(|| "0".into()));

    assert_eq!(settings, Settings::default());
}

#[test]
fn unparseable_file_is_ignored() {
    let mut settings = Settings::default();
    apply_file(&mut settings, "this is not toml = = =");
    assert_eq!(settings, Settings::default());
}

#[test]
fn catalog_falls_back_to_placeholder_and_reads_file() {
    let settings = Settings::default();
    assert_eq!(
        load_catalog(&settings).expect("placeholder"),
        ObjectiveCatalog::placeholder()
    );

    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("rotation_editor_names_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let names_path = temp_root.join("names.toml");
    fs::write(
        &names_path,
        r#"lines = [["a", "b", "c"], ["d", "e", "f"], ["g", "h", "i"], ["j", "k", "l"], ["m", "n", "o"]]"#,
    )
    .expect("write names");

    let settings = Settings {
        names_file: Some(names_path.clone()),
        ..Settings::default()
    };
    let catalog = load_catalog(&settings).expect("catalog");
    assert_eq!(catalog.name(4, 2), Some("o"));

    fs::write(&names_path, "lines = []").expect("rewrite");
    let err = load_catalog(&settings).expect_err("malformed");
    assert!(err.to_string().contains("invalid objective names file"));

    fs::remove_dir_all(temp_root).expect("cleanup");
}
