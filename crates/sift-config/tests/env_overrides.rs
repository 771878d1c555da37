use figment::Jail;
use sift_config::SiftConfig;

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".sift")?;
        jail.create_file(".sift/config.toml", "[store]\npath = \"from-toml.db\"\n")?;
        jail.set_env("SIFT_STORE__PATH", "from-env.db");

        let config = SiftConfig::load().expect("config loads");
        assert_eq!(config.store.path, "from-env.db");
        Ok(())
    });
}

#[test]
fn env_sets_nested_flags() {
    Jail::expect_with(|jail| {
        jail.set_env("SIFT_STORE__STRICT_DESCRIPTIONS", "true");
        jail.set_env("SIFT_GENERAL__DEFAULT_LIMIT", "5");

        let config = SiftConfig::load().expect("config loads");
        assert!(config.store.strict_descriptions);
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn unrelated_sift_env_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("SIFT_LOG", "debug");

        let config = SiftConfig::load().expect("config loads");
        assert_eq!(config.store.path, ".sift/sift.db");
        Ok(())
    });
}
