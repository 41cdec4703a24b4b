//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use std::io::Write;
    use supermarket::config::{Config, LogFormat};
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_example_config_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/inventory.yaml.example");
        let config = Config::from_file(path).await.unwrap();

        assert_eq!(config.server().port, 8000);
        assert_eq!(config.server().address(), "0.0.0.0:8000");
        assert_eq!(config.logging().format, LogFormat::Json);
        assert!(config.inventory.seed_data);
    }

    #[tokio::test]
    async fn test_yaml_round_trip_through_file() {
        let mut config = Config::default();
        config.inventory.server.port = 9100;
        config.inventory.server.workers = Some(2);
        config.inventory.seed_data = false;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(config.to_yaml().unwrap().as_bytes())
            .unwrap();

        let loaded = Config::from_file(temp_file.path()).await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_empty_sections_fall_back_to_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"logging:\n  level: debug\n").unwrap();

        let config = Config::from_file(temp_file.path()).await.unwrap();
        assert_eq!(config.server(), Config::default().server());
        assert_eq!(config.logging().level, "debug");
        assert_eq!(config.logging().format, LogFormat::Text);
    }
}
