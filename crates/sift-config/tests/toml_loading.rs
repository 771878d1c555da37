//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directory and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use sift_config::SiftConfig;

#[test]
fn loads_store_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[store]
path = "reviews.db"
strict_descriptions = true
description_limit = 120

[general]
default_limit = 10
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(SiftConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = SiftConfig::from_figment(&figment).expect("config loads");

        assert_eq!(config.store.path, "reviews.db");
        assert!(config.store.strict_descriptions);
        assert_eq!(config.store.description_limit, 120);
        assert_eq!(config.general.default_limit, 10);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[store]\nstrict_descriptions = true\n")?;

        let figment = Figment::from(Serialized::defaults(SiftConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = SiftConfig::from_figment(&figment).expect("config loads");

        assert!(config.store.strict_descriptions);
        assert_eq!(config.store.path, ".sift/sift.db");
        assert_eq!(config.store.description_limit, 200);
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".sift")?;
        jail.create_file(".sift/config.toml", "[store]\npath = \"local.db\"\n")?;

        let config = SiftConfig::load().expect("config loads");
        assert_eq!(config.store.path, "local.db");
        Ok(())
    });
}

#[test]
fn zero_description_limit_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[store]\ndescription_limit = 0\n")?;

        let figment = Figment::from(Serialized::defaults(SiftConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = SiftConfig::from_figment(&figment).unwrap_err();
        assert!(err.to_string().contains("description_limit"));
        Ok(())
    });
}

#[test]
fn description_limit_cannot_exceed_cap() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[store]\ndescription_limit = 500\n")?;

        let figment = Figment::from(Serialized::defaults(SiftConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = SiftConfig::from_figment(&figment).unwrap_err();
        assert!(err.to_string().contains("must not exceed 200"));
        Ok(())
    });
}
