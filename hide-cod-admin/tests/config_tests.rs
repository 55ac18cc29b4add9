use hide_cod_admin::AdminConfig;

#[test]
fn test_defaults_when_no_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = AdminConfig::load(dir.path()).unwrap();
    assert_eq!(cfg.metafield.namespace, "$app:hide-cod");
    assert_eq!(cfg.metafield.key, "function-configuration");
    assert_eq!(cfg.metafield.value_type, "json");
    assert_eq!(cfg.customization.title, "Hide COD by City");
    assert!(cfg.customization.enabled_on_create);
    assert!(cfg.catalog.extra_cities.is_empty());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        r#"
[customization]
title = "COD rules (staging)"

[catalog]
extra_cities = ["Kotli Sattian"]
"#,
    )
    .unwrap();
    let cfg = AdminConfig::load(dir.path()).unwrap();
    assert_eq!(cfg.customization.title, "COD rules (staging)");
    assert_eq!(cfg.customization.functions_page_size, 25);
    assert_eq!(cfg.catalog.extra_cities, ["Kotli Sattian"]);
    assert_eq!(cfg.metafield.namespace, "$app:hide-cod");
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[customization\noops").unwrap();
    assert!(AdminConfig::load(dir.path()).is_err());
}
