use modkit::config::Config;
use modkit::descriptor::{is_kebab_case, Difficulty};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_defaults_without_config_file() {
    let dir = TempDir::new().unwrap();

    let config = Config::load_dir(dir.path()).unwrap();
    assert_eq!(config.defaults.category, "programming");
    assert_eq!(config.defaults.difficulty, Difficulty::Beginner);
    assert_eq!(config.defaults.language, "en");
    assert!(config.template_roots.is_empty());
}

#[test]
fn test_loads_json_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("modkit.json"),
        r#"{
  "defaults": { "author": "A. Author", "difficulty": "advanced" },
  "template_roots": ["/opt/modkit/templates"]
}
"#,
    )
    .unwrap();

    let config = Config::load_dir(dir.path()).unwrap();
    assert_eq!(config.defaults.author, "A. Author");
    assert_eq!(config.defaults.difficulty, Difficulty::Advanced);
    // Unset fields keep their defaults.
    assert_eq!(config.defaults.category, "programming");
    assert_eq!(config.template_roots, vec![PathBuf::from("/opt/modkit/templates")]);
}

#[test]
fn test_loads_yaml_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("modkit.yml"),
        "defaults:\n  language: ru\n  difficulty: intermediate\n",
    )
    .unwrap();

    let config = Config::load_dir(dir.path()).unwrap();
    assert_eq!(config.defaults.language, "ru");
    assert_eq!(config.defaults.difficulty, Difficulty::Intermediate);
}

#[test]
fn test_invalid_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("modkit.yaml"), "defaults: [not, a, map]").unwrap();

    assert!(Config::load_dir(dir.path()).is_err());
}

#[test]
fn test_kebab_case_rule() {
    for valid in ["a", "abc", "python-basics", "linux-admin-2", "a1-b2"] {
        assert!(is_kebab_case(valid), "'{}' should be accepted", valid);
    }
    for invalid in
        ["Invalid_Name", "UPPER", "has space", "123start", "", "-leading", "trailing-", "a--b"]
    {
        assert!(!is_kebab_case(invalid), "'{}' should be rejected", invalid);
    }
}
