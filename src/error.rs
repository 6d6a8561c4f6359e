//! 错误处理模块
//!
//! 仅初始化阶段会产生错误；查询阶段缺失的键一律走默认值回退，
//! 不向调用方传播。

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 找不到指定名称的配置文档
    #[error("找不到配置文档: {0}")]
    NotFound(String),

    /// 配置文档无法解析
    #[error("配置文档 {name} 解析失败: {source}")]
    Invalid {
        name: String,
        #[source]
        source: figment::Error,
    },
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, ConfigError>;
