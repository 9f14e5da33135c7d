use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub export: ExportConfig,
    #[serde(default)]
    pub print: PrintConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Static `productos.json` read once at start-up
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    /// Where saved PDFs land
    pub output_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PrintConfig {
    /// Spooler that reads a PDF on stdin, e.g. `lp`. Unset disables host printing.
    pub command: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Machine-local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `MOSTRADOR_SERVER__PORT=8080` sets `server.port`
            .add_source(config::Environment::with_prefix("MOSTRADOR").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization_with_defaults() {
        let s = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                    [server]
                    port = 3000

                    [catalog]
                    path = "public/productos.json"

                    [export]
                    output_dir = "exports"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let cfg: Config = s.try_deserialize().expect("Failed to deserialize");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.catalog.path, PathBuf::from("public/productos.json"));
        assert!(cfg.print.command.is_none());
        assert!(cfg.print.args.is_empty());
    }

    #[test]
    fn test_print_section() {
        let s = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                    [server]
                    port = 8080
                    [catalog]
                    path = "p.json"
                    [export]
                    output_dir = "."
                    [print]
                    command = "lp"
                    args = ["-d", "mostrador"]
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let cfg: Config = s.try_deserialize().unwrap();
        assert_eq!(cfg.print.command.as_deref(), Some("lp"));
        assert_eq!(cfg.print.args, vec!["-d", "mostrador"]);
    }
}
