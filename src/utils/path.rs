//! # 路径工具函数
//!
//! 提供与文件路径相关的工具函数：
//! - 获取应用自身配置目录路径（`~/.portfolio-studio/`）
//! - 获取 API 配置文件路径（`~/.portfolio-studio/config.json`）

use std::path::PathBuf;

/// 配置目录名称（位于用户主目录下）
const CONFIG_DIR_NAME: &str = ".portfolio-studio";

/// 获取应用配置目录的绝对路径
///
/// 使用 `dirs` crate 获取跨平台的主目录路径。
///
/// # 错误
/// 如果无法确定用户主目录（极端情况，如无 HOME 环境变量），返回错误信息。
///
/// # 示例
/// - Windows: `C:\Users\username\.portfolio-studio`
/// - Linux/macOS: `/home/username/.portfolio-studio`
pub fn get_config_dir() -> Result<PathBuf, String> {
    let home = dirs::home_dir().ok_or_else(|| "无法获取用户主目录".to_string())?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// 获取 API 配置文件的绝对路径
pub fn get_api_config_path() -> Result<PathBuf, String> {
    Ok(get_config_dir()?.join("config.json"))
}

/// 规范化后端基础地址：去掉首尾空白和末尾的 `/`
///
/// 请求路径统一以 `/application/...` 开头，基础地址末尾多余的斜杠会产生 `//`。
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
