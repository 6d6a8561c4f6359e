//! 配置诊断工具
//!
//! 按 SPIDERD_ENV 选择运行环境，输出解析后的完整配置，
//! 便于部署前核对各环境的实际生效值。

use anyhow::Result;
use spiderd_config::{ConfigStore, EmbeddedDocuments};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let store = ConfigStore::from_env(&EmbeddedDocuments)?;
    info!(env = store.env(), "configuration resolved");

    let dump = serde_json::json!({
        "env": store.env(),
        "listen": store.listen_addr(),
        "crawlers": store.crawlers(),
        "detect": store.detect(),
    });
    println!("{}", serde_json::to_string_pretty(&dump)?);

    Ok(())
}
