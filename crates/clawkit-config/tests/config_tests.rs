#[cfg(test)]
mod tests {
    use clawkit_config::ConfigLoader;
    use clawkit_config::schema::*;
    use std::collections::HashMap;
    use std::io::Write;
    use std::path::Path;

    // ── Default tests ──────────────────────────────────────────

    #[test]
    fn test_remote_config_defaults() {
        let config = RemoteConfig::default();
        assert!(config.enabled);
        assert_eq!(config.api_url, "https://api.github.com");
        assert_eq!(config.marker, "openclaw");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.timeout_secs, 0);
        assert!(config.token.is_none());
        assert!(config.user_agent.starts_with("clawkit/"));
    }

    #[test]
    fn test_skills_and_logging_defaults() {
        let config = KitConfig::default();
        assert_eq!(config.skills.doc_file, "SKILL.md");
        assert!(config.skills.dir.ends_with(".openclaw/skills"));
        assert!(config.ledger.path.is_none());
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_defaults_validate_cleanly() {
        let warnings = KitConfig::default().validate().unwrap();
        assert!(warnings.is_empty());
    }

    // ── TOML tests ─────────────────────────────────────────────

    #[test]
    fn test_config_toml_roundtrip() {
        let config = KitConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let restored: KitConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(restored.remote.api_url, config.remote.api_url);
        assert_eq!(restored.skills.dir, config.skills.dir);
    }

    #[test]
    fn test_partial_toml_applies_defaults() {
        let toml_str = r#"
[remote]
marker = "openclaw-skill"

[logging]
format = "json"
"#;
        let config: KitConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.remote.marker, "openclaw-skill");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.remote.page_size, 10);
        assert_eq!(config.skills.doc_file, "SKILL.md");
    }

    // ── Validation tests ───────────────────────────────────────

    #[test]
    fn test_validate_rejects_bad_page_size() {
        let mut config = KitConfig::default();
        config.remote.page_size = 0;
        let err = config.validate().unwrap_err();
        assert!(err.contains("remote.page_size"));

        config.remote.page_size = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let mut config = KitConfig::default();
        config.remote.api_url = "ftp://example.com".into();
        let err = config.validate().unwrap_err();
        assert!(err.contains("remote.api_url"));
    }

    #[test]
    fn test_validate_warns_on_unknown_format_and_empty_marker() {
        let mut config = KitConfig::default();
        config.logging.format = "xml".into();
        config.remote.marker = "  ".into();
        let warnings = config.validate().unwrap();
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.severity == WarningSeverity::Warning));
        assert!(warnings[0].to_string().contains("remote.marker"));
    }

    // ── Override tests ─────────────────────────────────────────

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("CLAWKIT_SKILLS_DIR", "/srv/skills"),
            ("CLAWKIT_LOG_LEVEL", "debug"),
            ("CLAWKIT_REMOTE_URL", "http://127.0.0.1:9999"),
            ("GITHUB_TOKEN", "ghp_example"),
        ]
        .into_iter()
        .collect();

        let config = ConfigLoader::apply_overrides(KitConfig::default(), |k| {
            env.get(k).map(|v| v.to_string())
        });
        assert_eq!(config.skills.dir, Path::new("/srv/skills"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.remote.api_url, "http://127.0.0.1:9999");
        assert_eq!(config.remote.token.as_deref(), Some("ghp_example"));
    }

    #[test]
    fn test_config_token_wins_over_env() {
        let mut config = KitConfig::default();
        config.remote.token = Some("from-file".into());
        let config = ConfigLoader::apply_overrides(config, |k| {
            (k == "GITHUB_TOKEN").then(|| "from-env".to_string())
        });
        assert_eq!(config.remote.token.as_deref(), Some("from-file"));
    }

    // ── ConfigLoader tests ─────────────────────────────────────

    #[test]
    fn test_config_loader_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("clawkit.toml");
        let mut f = std::fs::File::create(&config_path).unwrap();
        writeln!(
            f,
            r#"
[skills]
dir = "/opt/openclaw/skills"

[remote]
page_size = 25

[ledger]
path = "/var/lib/clawkit/ledger.json"
"#
        )
        .unwrap();

        let loader = ConfigLoader::load(Some(config_path.as_path())).unwrap();
        let config = loader.get();
        assert_eq!(config.skills.dir, Path::new("/opt/openclaw/skills"));
        assert_eq!(config.remote.page_size, 25);
        assert_eq!(
            loader.ledger_path(),
            Path::new("/var/lib/clawkit/ledger.json")
        );
        assert_eq!(loader.path(), config_path.as_path());
    }

    #[test]
    fn test_ledger_defaults_next_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("clawkit.toml");
        std::fs::write(&config_path, "").unwrap();

        let loader = ConfigLoader::load(Some(config_path.as_path())).unwrap();
        assert_eq!(loader.ledger_path(), dir.path().join("skills-db.json"));
    }

    #[test]
    fn test_config_loader_keeps_warnings_for_later_reporting() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("clawkit.toml");
        std::fs::write(
            &config_path,
            "[remote]\nmarker = \"\"\n\n[logging]\nformat = \"xml\"\n",
        )
        .unwrap();

        let loader = ConfigLoader::load(Some(config_path.as_path())).unwrap();
        let fields: Vec<_> = loader.warnings().iter().map(|w| w.field.as_str()).collect();
        assert!(fields.contains(&"remote.marker"));
        assert!(fields.contains(&"logging.format"));
        assert!(
            loader
                .warnings()
                .iter()
                .all(|w| w.severity == WarningSeverity::Warning)
        );
    }

    #[test]
    fn test_clean_config_has_no_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("clawkit.toml");
        std::fs::write(&config_path, "").unwrap();

        let loader = ConfigLoader::load(Some(config_path.as_path())).unwrap();
        assert!(loader.warnings().is_empty());
    }

    #[test]
    fn test_config_loader_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("clawkit.toml");
        std::fs::write(&config_path, "[remote]\npage_size = 0\n").unwrap();

        let result = ConfigLoader::load(Some(config_path.as_path()));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_loader_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("clawkit.toml");
        std::fs::write(&config_path, "[remote\n").unwrap();

        let err = ConfigLoader::load(Some(config_path.as_path()))
            .err()
            .unwrap();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_set_skills_dir_override() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("missing.toml");
        let mut loader = ConfigLoader::load(Some(config_path.as_path())).unwrap();
        loader.set_skills_dir(Path::new("/tmp/elsewhere"));
        assert_eq!(loader.get().skills.dir, Path::new("/tmp/elsewhere"));
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = clawkit_config::loader::expand_tilde(Path::new("/abs/path"));
        assert_eq!(expanded, Path::new("/abs/path"));
        if let Some(home) = dirs::home_dir() {
            let expanded = clawkit_config::loader::expand_tilde(Path::new("~/skills"));
            assert_eq!(expanded, home.join("skills"));
        }
    }

    // ── JSON roundtrip ─────────────────────────────────────────

    #[test]
    fn test_config_json_roundtrip() {
        let config = KitConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: KitConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.remote.marker, config.remote.marker);
    }
}
