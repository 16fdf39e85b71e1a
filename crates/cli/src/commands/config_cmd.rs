//! `pathways config` — Show the effective configuration.

use std::path::Path;

use pathways_config::AppConfig;

use super::Output;

pub async fn run(
    config: &AppConfig,
    out: &Output,
    explicit_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = explicit_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| AppConfig::config_dir().join("config.toml"));

    out.emit(config, |config| {
        println!("# {}", path.display());
        if !path.exists() {
            println!("# (file not found; showing defaults)");
        }
        println!("{}", config.to_toml());
    })
}
