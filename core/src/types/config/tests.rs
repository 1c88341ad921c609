use super::*;
use crate::types::KeyScheme;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

mod engine_config {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();

        assert!(config.validate().is_empty());
        assert_eq!(config.index.key_scheme, KeyScheme::Namespaced);
        assert!(!config.index.stopword_removal);
        assert_eq!(
            config.document_types.available,
            vec!["advcampaign".to_string(), "campaign".to_string()]
        );
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let temp = tempdir().unwrap();

        let config = EngineConfig::load(&temp.path().join("missing.toml")).unwrap();
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("development.toml");
        std::fs::write(&path, "[index]\nkey_scheme = \"bare\"\n").unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.index.key_scheme, KeyScheme::Bare);
        assert!(!config.index.stopword_removal);
        assert_eq!(config.document_types.available.len(), 2);
    }

    #[test]
    fn test_save_then_load() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("staging.toml");

        let mut config = EngineConfig::default();
        config.document_types.available = vec!["article".to_string()];
        config.index.stopword_removal = true;
        config.stopwords.path = Some("stopwords.json".into());
        config.save(&path).unwrap();

        let loaded = EngineConfig::load(&path).unwrap();
        assert_eq!(loaded.document_types.available, vec!["article".to_string()]);
        assert!(loaded.index.stopword_removal);
        assert_eq!(loaded.stopwords.path, Some(PathBuf::from("stopwords.json")));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("broken.toml");
        std::fs::write(&path, "[index\n").unwrap();

        assert!(matches!(
            EngineConfig::load(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validate_reports_empty_type_list() {
        let mut config = EngineConfig::default();
        config.document_types.available = vec![];

        let errors = config.validate();
        assert_eq!(
            errors,
            vec!["document_types.available must list at least one type".to_string()]
        );
    }

    #[test]
    fn test_stopword_removal_without_path() {
        let mut config = EngineConfig::default();
        config.index.stopword_removal = true;

        assert!(config.validate().is_empty());
        let settings = config.settings(Path::new(".")).unwrap();
        assert!(settings.stopword_removal);
        assert!(settings.stopwords.is_empty());
    }

    #[test]
    fn test_store_config_resolves_against_base_dir() {
        let temp = tempdir().unwrap();
        let config = EngineConfig::default();

        let store = config.store_config(temp.path());
        assert_eq!(store.data_dir, temp.path().join("data"));
        assert_eq!(store.db_path(), temp.path().join("data").join("elasthink.redb"));
    }

    #[test]
    fn test_store_config_keeps_absolute_data_dir() {
        let temp = tempdir().unwrap();
        let mut config = EngineConfig::default();
        config.store.data_dir = temp.path().join("postings");

        let store = config.store_config(Path::new("config"));
        assert_eq!(store.data_dir, temp.path().join("postings"));
    }

    #[test]
    fn test_validate_reports_unusable_type_name() {
        let mut config = EngineConfig::default();
        config.document_types.available = vec!["news:daily".to_string()];

        assert_eq!(config.validate().len(), 1);
    }

    #[test]
    fn test_path_uses_environment_name() {
        let path = EngineConfig::path(Path::new("config"), Environment::Production);
        assert_eq!(path, Path::new("config").join("production.toml"));
    }

    #[test]
    fn test_settings_loads_relative_stopwords() {
        let temp = tempdir().unwrap();
        std::fs::write(
            temp.path().join("stopwords.json"),
            r#"{"words": ["Dan", "di"]}"#,
        )
        .unwrap();

        let mut config = EngineConfig::default();
        config.index.stopword_removal = true;
        config.stopwords.path = Some("stopwords.json".into());

        let settings = config.settings(temp.path()).unwrap();
        assert!(settings.stopword_removal);
        assert!(settings.stopwords.contains("dan"));
        assert!(settings.stopwords.contains("di"));
        assert_eq!(settings.registry.len(), 2);
    }

    #[test]
    fn test_settings_rejects_bad_type_names() {
        let mut config = EngineConfig::default();
        config.document_types.available = vec!["  ".to_string()];

        assert!(matches!(
            config.settings(Path::new(".")),
            Err(ConfigError::Validation(_))
        ));
    }
}

mod stopwords {
    use super::*;

    #[test]
    fn test_new_normalizes_words() {
        let set = StopwordSet::new(["The", " a ", ""]);

        assert_eq!(set.len(), 2);
        assert!(set.contains("the"));
        assert!(set.contains("a"));
    }

    #[test]
    fn test_from_json_without_words_is_empty() {
        let set = StopwordSet::from_json("{}").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            StopwordSet::from_json(r#"{"words": 5}"#),
            Err(ConfigError::Stopwords(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp = tempdir().unwrap();

        assert!(matches!(
            StopwordSet::load(&temp.path().join("nope.json")),
            Err(ConfigError::Io(_))
        ));
    }
}

mod environment {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!(Environment::from_name("stg"), Environment::Staging);
        assert_eq!(Environment::from_name("STAGING"), Environment::Staging);
        assert_eq!(Environment::from_name("prod"), Environment::Production);
        assert_eq!(Environment::from_name("production"), Environment::Production);
    }

    #[test]
    fn test_unknown_falls_back_to_development() {
        assert_eq!(Environment::from_name("qa"), Environment::Development);
        assert_eq!(Environment::from_name(""), Environment::Development);
    }
}
