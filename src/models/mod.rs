//! # 数据模型模块
//!
//! 定义了与前端 TypeScript 类型一一对应的 Rust 数据结构。
//! 后端实体均派生 `Serialize` 和 `Deserialize`，用于 REST 请求 / 响应和 Tauri IPC 传输。
//! - `project` - 作品集项目（轮播幻灯片）
//! - `experience` - 工作经历及图标映射
//! - `blog` - 博客文章及最新优先排序
//! - `message` - 联系留言
//! - `section` - 页面区块、区块位置和相交记录
//! - `profile` - 静态技能列表和导航条目

pub mod blog;
pub mod experience;
pub mod message;
pub mod profile;
pub mod project;
pub mod section;
