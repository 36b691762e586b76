//! # 后端连接配置
//!
//! 决定 REST 后端的基础地址和可选的部署保护绕过令牌。
//!
//! ## 配置层级（后者覆盖前者）
//! 1. 内置默认地址
//! 2. 配置文件 `~/.portfolio-studio/config.json`（可选）
//! 3. 环境变量 `PORTFOLIO_API_URL` / `PORTFOLIO_VERCEL_BYPASS`
//!
//! 空字符串视为未设置。配置在应用启动时构建一次，之后不再变化。

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::path;

/// 未做任何配置时使用的后端地址
pub const DEFAULT_BASE_URL: &str =
    "https://portfoliobackend-git-main-shahriarshishirs-projects.vercel.app";

/// 覆盖后端地址的环境变量
pub const ENV_API_URL: &str = "PORTFOLIO_API_URL";

/// 部署保护绕过令牌的环境变量
pub const ENV_BYPASS_TOKEN: &str = "PORTFOLIO_VERCEL_BYPASS";

/// 配置文件内容
///
/// ```json
/// { "apiUrl": "http://localhost:5000", "bypassToken": "..." }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub bypass_token: Option<String>,
}

/// 最终生效的后端连接配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// 基础地址，不带末尾斜杠
    pub base_url: String,
    /// 设置后每个请求都会携带 `x-vercel-protection-bypass` 请求头
    pub bypass_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            bypass_token: None,
        }
    }
}

impl ApiConfig {
    /// 从配置文件和进程环境变量加载配置
    ///
    /// 配置文件缺失或解析失败不会中断启动，只记录日志后回退到下一层。
    pub fn load() -> Self {
        let file = match path::get_api_config_path() {
            Ok(p) => read_config_file(&p),
            Err(e) => {
                log::warn!("{}，跳过配置文件", e);
                None
            }
        };
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// 按层级合并配置
    ///
    /// `env` 为环境变量查询函数，便于测试时注入。
    pub fn resolve(file: Option<ConfigFile>, env: impl Fn(&str) -> Option<String>) -> Self {
        let file = file.unwrap_or_default();

        let base_url = non_empty(env(ENV_API_URL))
            .or_else(|| non_empty(file.api_url))
            .map(|url| path::normalize_base_url(&url))
            .unwrap_or_else(|| {
                log::info!("{} 未设置，使用默认后端地址: {}", ENV_API_URL, DEFAULT_BASE_URL);
                DEFAULT_BASE_URL.to_string()
            });

        let bypass_token =
            non_empty(env(ENV_BYPASS_TOKEN)).or_else(|| non_empty(file.bypass_token));

        Self {
            base_url,
            bypass_token,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 读取配置文件，不存在时返回 None
fn read_config_file(config_path: &Path) -> Option<ConfigFile> {
    if !config_path.exists() {
        return None;
    }

    let content = std::fs::read_to_string(config_path)
        .map_err(|e| log::warn!("读取配置文件失败: {}", e))
        .ok()?;

    serde_json::from_str(&content)
        .map_err(|e| log::warn!("解析配置文件失败: {}", e))
        .ok()
}
