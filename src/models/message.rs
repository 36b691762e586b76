//! # 联系留言数据模型
//!
//! 访客通过首页联系表单提交的留言，管理端可查看和删除。

use serde::{Deserialize, Serialize};

/// 联系留言数据结构
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface ContactMessage {
///   _id: string;
///   name: string;
///   email: string;
///   message: string;
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactMessage {
    /// 后端分配的唯一标识符，删除时使用
    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub message: String,
}
