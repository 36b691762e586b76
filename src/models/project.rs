//! # 项目数据模型
//!
//! 定义了作品集项目（Project）的 Rust 结构体，对应后端 `/application/projects` 返回的 JSON。
//! 项目同时也是首页轮播（carousel）中的一张幻灯片。
//!
//! 除 `_id` 外，展示字段对 Rust 端是透传数据：只做反序列化和 IPC 转发，不做任何计算。

use serde::{Deserialize, Serialize};

/// 项目数据结构
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface Project {
///   _id: string;
///   title: string;
///   description: string;
///   technologies: string[];
///   githubUrl: string;
///   liveUrl: string;
///   featured: boolean;
///   color: string;
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// 后端分配的唯一标识符（MongoDB ObjectId 字符串）
    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// 技术标签，按录入顺序排列
    #[serde(default)]
    pub technologies: Vec<String>,

    #[serde(default)]
    pub github_url: String,

    #[serde(default)]
    pub live_url: String,

    #[serde(default)]
    pub featured: bool,

    /// 展示用渐变色标签（如 "from-blue-500 to-purple-600"）
    /// 由管理端在创建时随机分配，后端不做计算
    #[serde(default)]
    pub color: String,
}

/// 项目外链类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectLink {
    /// GitHub 仓库地址
    Github,
    /// 在线演示地址
    Live,
}

impl Project {
    /// 取出指定类型的外链地址，空字符串视为未设置
    pub fn link(&self, kind: ProjectLink) -> Option<&str> {
        let url = match kind {
            ProjectLink::Github => self.github_url.trim(),
            ProjectLink::Live => self.live_url.trim(),
        };
        (!url.is_empty()).then_some(url)
    }
}
