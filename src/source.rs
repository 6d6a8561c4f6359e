//! 配置文档来源
//!
//! 配置文档随二进制一同打包，按名称查找；
//! 测试可通过 [`MemoryDocuments`] 注入内存文档。

use std::borrow::Cow;
use std::collections::BTreeMap;

/// 按名称提供配置文档内容
pub trait DocumentSource: Send + Sync {
    /// 返回名为 `name` 的文档内容，不存在时返回 None
    fn find(&self, name: &str) -> Option<Cow<'_, str>>;
}

/// 编译期内嵌的配置文档
///
/// `configs/` 目录在编译时打包进二进制，运行时不读取文件系统。
pub struct EmbeddedDocuments;

const EMBEDDED: &[(&str, &str)] = &[
    ("default", include_str!("../configs/default.yml")),
    ("dev", include_str!("../configs/dev.yml")),
    ("test", include_str!("../configs/test.yml")),
    ("production", include_str!("../configs/production.yml")),
];

impl DocumentSource for EmbeddedDocuments {
    fn find(&self, name: &str) -> Option<Cow<'_, str>> {
        EMBEDDED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, content)| Cow::Borrowed(*content))
    }
}

/// 内存中的配置文档集合
#[derive(Debug, Default, Clone)]
pub struct MemoryDocuments {
    docs: BTreeMap<String, String>,
}

impl MemoryDocuments {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一篇文档
    pub fn with(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.docs.insert(name.into(), content.into());
        self
    }
}

impl DocumentSource for MemoryDocuments {
    fn find(&self, name: &str) -> Option<Cow<'_, str>> {
        self.docs.get(name).map(|content| Cow::Borrowed(content.as_str()))
    }
}
