//! 配置解析模块
//!
//! 先注册 default 文档中的全部配置项，再按运行环境叠加同名文档，
//! 叠加时相同键以环境文档为准，其余键保持默认值。
//! 加载完成后配置只读，可在任意线程并发查询。

use std::time::Duration;

use figment::providers::{Data, Format, Yaml};
use figment::{Figment, Provider};
use serde::Serialize;
use tracing::{debug, info};

use crate::duration::parse_duration;
use crate::error::{ConfigError, Result};
use crate::source::DocumentSource;

/// 运行环境：开发
pub const DEV: &str = "dev";
/// 运行环境：测试
pub const TEST: &str = "test";
/// 运行环境：生产
pub const PRODUCTION: &str = "production";

/// 选择运行环境的环境变量
pub const ENV_VAR: &str = "SPIDERD_ENV";

/// 基础配置文档名称
const BASE_DOCUMENT: &str = "default";

const DEFAULT_LISTEN_ADDR: &str = ":4000";
const DEFAULT_CRAWL_INTERVAL: Duration = Duration::from_secs(2 * 60);
const DEFAULT_DETECT_URL: &str = "https://www.baidu.com/";
const DEFAULT_DETECT_INTERVAL: Duration = Duration::from_secs(30 * 60);
const DEFAULT_DETECT_TIMEOUT: Duration = Duration::from_secs(3);
const DEFAULT_DETECT_MAX_TIMES: u32 = 3;

/// 抓取站点配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crawler {
    /// 站点名称
    pub name: String,
    /// 抓取间隔
    pub interval: Duration,
    /// 单轮最大抓取页数，0 表示不限制
    pub max_page: u32,
}

/// 连通性检测配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detect {
    /// 检测地址
    pub url: String,
    /// 检测间隔
    pub interval: Duration,
    /// 单次检测超时
    pub timeout: Duration,
    /// 连续失败多少次视为异常
    pub max_times: u32,
}

/// 解析完成的配置存储
///
/// 由 [`ConfigStore::load`] 或 [`ConfigStore::from_env`] 一次性构建，
/// 此后只读。查询接口不会失败：缺失的键按文档化的默认值回退。
#[derive(Debug, Clone)]
pub struct ConfigStore {
    figment: Figment,
    env: String,
}

impl ConfigStore {
    /// 按显式指定的运行环境加载配置
    ///
    /// `env` 为空字符串时仅加载 default 文档；非空时必须存在
    /// 同名文档，否则返回错误。default 文档缺失或无法解析
    /// 同样返回错误，进程不应继续启动。
    pub fn load(source: &dyn DocumentSource, env: &str) -> Result<Self> {
        let base = source
            .find(BASE_DOCUMENT)
            .ok_or_else(|| ConfigError::NotFound(BASE_DOCUMENT.to_string()))?;
        let mut figment = Figment::from(parse_document(BASE_DOCUMENT, &base)?);
        debug!("base configuration registered");

        if !env.is_empty() {
            let overlay = source
                .find(env)
                .ok_or_else(|| ConfigError::NotFound(env.to_string()))?;
            figment = figment.merge(parse_document(env, &overlay)?);
            info!(env, "environment overlay applied");
        }

        Ok(Self {
            figment,
            env: env.to_string(),
        })
    }

    /// 按 `SPIDERD_ENV` 环境变量选择运行环境并加载配置
    pub fn from_env(source: &dyn DocumentSource) -> Result<Self> {
        let env = std::env::var(ENV_VAR).unwrap_or_default();
        Self::load(source, &env)
    }

    /// 加载时使用的运行环境，仅加载 default 时为空字符串
    pub fn env(&self) -> &str {
        &self.env
    }

    /// 获取抓取站点配置
    ///
    /// 站点顺序与 `crawler` 序列中的顺序一致；未配置抓取间隔或
    /// 配置为零时取 2 分钟。`crawler` 键不存在时返回空列表。
    pub fn crawlers(&self) -> Vec<Crawler> {
        let names: Vec<String> = self.figment.extract_inner("crawler").unwrap_or_default();
        names
            .into_iter()
            .map(|name| {
                let interval = self
                    .duration_at(&format!("{name}.interval"))
                    .filter(|d| !d.is_zero())
                    .unwrap_or(DEFAULT_CRAWL_INTERVAL);
                let max_page = self.int_at(&format!("{name}.maxPage")).unwrap_or(0);
                Crawler {
                    name,
                    interval,
                    max_page,
                }
            })
            .collect()
    }

    /// 获取连通性检测配置
    ///
    /// 四个字段各自独立回退，返回值总是完整的。
    pub fn detect(&self) -> Detect {
        let url = self
            .str_at("detect.url")
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_DETECT_URL.to_string());
        let interval = self
            .duration_at("detect.interval")
            .filter(|d| !d.is_zero())
            .unwrap_or(DEFAULT_DETECT_INTERVAL);
        let timeout = self
            .duration_at("detect.timeout")
            .filter(|d| !d.is_zero())
            .unwrap_or(DEFAULT_DETECT_TIMEOUT);
        let max_times = self
            .int_at("detect.maxTimes")
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_DETECT_MAX_TIMES);
        Detect {
            url,
            interval,
            timeout,
            max_times,
        }
    }

    /// 获取服务监听地址，未配置或为空时取 ":4000"
    pub fn listen_addr(&self) -> String {
        self.str_at("listen")
            .filter(|addr| !addr.is_empty())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
    }

    fn str_at(&self, key: &str) -> Option<String> {
        self.figment.extract_inner(key).ok()
    }

    fn int_at(&self, key: &str) -> Option<u32> {
        self.figment.extract_inner(key).ok()
    }

    fn duration_at(&self, key: &str) -> Option<Duration> {
        self.str_at(key).and_then(|s| parse_duration(&s))
    }
}

/// 解析单篇文档，保证加载阶段即暴露格式错误
fn parse_document(name: &str, content: &str) -> Result<Data<Yaml>> {
    let provider = Yaml::string(content);
    provider.data().map_err(|source| ConfigError::Invalid {
        name: name.to_string(),
        source,
    })?;
    Ok(provider)
}
