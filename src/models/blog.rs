//! # 博客数据模型
//!
//! 博客文章（BlogPost）以及"最新优先"排序规则。
//!
//! ## 排序规则
//! 1. 有创建时间（`createdAt`，RFC 3339）的文章按时间降序
//! 2. 有时间的排在没有时间的前面
//! 3. 时间相同或都缺失时，按 `_id` 降序
//!
//! 第 3 条依赖标识符字典序与创建顺序一致（MongoDB ObjectId 满足，一般 ID 方案不保证）。

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// 博客文章数据结构
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface BlogPost {
///   _id: string;
///   title: string;
///   content: string;
///   author: string;
///   category: string;
///   createdAt?: string;
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub category: String,

    /// 创建时间（可选），仅用于排序
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl BlogPost {
    /// 解析创建时间，缺失或格式不合法时返回 None
    fn created(&self) -> Option<DateTime<FixedOffset>> {
        self.created_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    }
}

/// "最新优先"比较函数，可直接用于 `sort_by`
pub fn newest_first(a: &BlogPost, b: &BlogPost) -> Ordering {
    match (a.created(), b.created()) {
        (Some(ta), Some(tb)) => tb.cmp(&ta).then_with(|| b.id.cmp(&a.id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.id.cmp(&a.id),
    }
}

/// 将博客列表原地排序为最新优先
pub fn sort_newest_first(posts: &mut [BlogPost]) {
    posts.sort_by(newest_first);
}
