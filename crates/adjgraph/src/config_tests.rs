//! Tests for layered graph configuration.
//!
//! Tests that read the environment run inside `figment::Jail`, which holds a
//! global lock and restores the environment and working directory on exit.

use std::io::Write;

use figment::Jail;

use crate::config::{ConfigError, GraphConfig, LimitsConfig};
use crate::error::Error;
use crate::graph::{DirectedGraph, SimpleVertexGraph};

#[test]
fn test_defaults() {
    let config = GraphConfig::default();
    assert_eq!(config.capacity.vertices, 0);
    assert_eq!(config.capacity.edges, 0);
    assert_eq!(config.limits.max_vertices, None);
    assert_eq!(config.limits.max_walk_length, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_toml_str_overrides_defaults() {
    let config = GraphConfig::from_toml_str(
        r"
        [capacity]
        vertices = 128

        [limits]
        max_vertices = 500
        ",
    )
    .unwrap();

    assert_eq!(config.capacity.vertices, 128);
    assert_eq!(config.capacity.edges, 0);
    assert_eq!(config.limits.max_vertices, Some(500));
    assert_eq!(config.limits.max_walk_length, None);
}

#[test]
fn test_from_toml_str_empty_is_default() {
    let config = GraphConfig::from_toml_str("").unwrap();
    assert_eq!(config, GraphConfig::default());
}

#[test]
fn test_invalid_walk_length_rejected() {
    let err = GraphConfig::from_toml_str("[limits]\nmax_walk_length = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_zero_vertex_limit_rejected() {
    let config = GraphConfig {
        limits: LimitsConfig {
            max_vertices: Some(0),
            ..LimitsConfig::default()
        },
        ..GraphConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_malformed_toml_is_load_error() {
    let err = GraphConfig::from_toml_str("[limits\nmax_vertices = ").unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));
}

#[test]
fn test_wrong_type_is_load_error() {
    let err = GraphConfig::from_toml_str("[limits]\nmax_walk_length = \"long\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));
    assert!(err.to_string().starts_with("Failed to load configuration"));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[limits]\nmax_walk_length = 16").unwrap();

    Jail::expect_with(|_jail| {
        let config = GraphConfig::load(file.path()).unwrap();
        assert_eq!(config.limits.max_walk_length, Some(16));
        Ok(())
    });
}

#[test]
fn test_load_missing_file_uses_defaults() {
    Jail::expect_with(|_jail| {
        let config = GraphConfig::load("absent.toml").unwrap();
        assert_eq!(config.limits, LimitsConfig::default());
        Ok(())
    });
}

#[test]
fn test_from_env_reads_nested_keys() {
    Jail::expect_with(|jail| {
        jail.set_env("ADJGRAPH_LIMITS__MAX_VERTICES", "10");
        jail.set_env("ADJGRAPH_CAPACITY__EDGES", "64");

        let config = GraphConfig::from_env().unwrap();
        assert_eq!(config.limits.max_vertices, Some(10));
        assert_eq!(config.capacity.edges, 64);
        assert_eq!(config.limits.max_walk_length, None);
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "adjgraph.toml",
            "[limits]\nmax_vertices = 500\nmax_walk_length = 16\n",
        )?;
        jail.set_env("ADJGRAPH_LIMITS__MAX_VERTICES", "10");

        let config = GraphConfig::load("adjgraph.toml").unwrap();
        assert_eq!(config.limits.max_vertices, Some(10));
        assert_eq!(config.limits.max_walk_length, Some(16));
        Ok(())
    });
}

#[test]
fn test_env_without_prefix_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("LIMITS__MAX_VERTICES", "10");

        let config = GraphConfig::from_env().unwrap();
        assert_eq!(config, GraphConfig::default());
        Ok(())
    });
}

#[test]
fn test_invalid_env_value_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("ADJGRAPH_LIMITS__MAX_WALK_LENGTH", "0");

        let err = GraphConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        Ok(())
    });
}

#[test]
fn test_config_drives_graph_limits() {
    let config = GraphConfig::from_toml_str("[limits]\nmax_vertices = 1\n").unwrap();
    let mut graph: DirectedGraph<u8> = DirectedGraph::with_config(&config);
    assert_eq!(graph.limits().max_vertices, Some(1));
    assert!(graph.insert_vertex(1));
    assert!(!graph.insert_vertex(2));
}

#[test]
fn test_try_with_config_rejects_invalid_limits() {
    let config = GraphConfig {
        limits: LimitsConfig {
            max_walk_length: Some(0),
            ..LimitsConfig::default()
        },
        ..GraphConfig::default()
    };

    let err = DirectedGraph::<u8>::try_with_config(&config).err().unwrap();
    assert!(matches!(err, Error::Config(ConfigError::Invalid(_))));
    assert!(err.to_string().starts_with("Invalid configuration"));
}

#[test]
fn test_try_with_config_accepts_valid_limits() {
    let config = GraphConfig::from_toml_str("[limits]\nmax_vertices = 2\n").unwrap();
    let mut graph = DirectedGraph::<u8>::try_with_config(&config).unwrap();
    assert!(graph.insert_vertex(1));
    assert!(graph.insert_vertex(2));
    assert!(!graph.insert_vertex(3));
}
