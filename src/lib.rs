//! Spiderd - 爬虫服务配置模块
//!
//! 以内嵌的 default 配置为基础，按运行环境叠加覆盖配置，
//! 对外提供带默认值回退的类型化查询接口。

pub mod duration;
pub mod error;
pub mod source;
pub mod store;

pub use error::{ConfigError, Result};
pub use source::{DocumentSource, EmbeddedDocuments, MemoryDocuments};
pub use store::{ConfigStore, Crawler, Detect};
