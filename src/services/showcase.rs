//! # 展示页内容加载
//!
//! 首页挂载时并发拉取博客、项目、工作经历三个列表。三个请求互不依赖，
//! 使用 `tokio::join!` 等待全部结束（all-settled）：某一个失败只会让对应列表为空，
//! 不会影响另外两个列表的填充。
//!
//! 博客列表在这里统一排序为最新优先，前端无需再处理。

use serde::Serialize;

use crate::models::blog::{BlogPost, sort_newest_first};
use crate::models::experience::Experience;
use crate::models::project::Project;
use crate::services::api::{ApiClient, ApiError};

/// 单个列表的加载结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Loaded<T> {
    pub items: Vec<T>,
    /// 加载失败时的错误描述，成功时为 None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Loaded<T> {
    fn settle(label: &str, result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(items) => Self { items, error: None },
            Err(e) => {
                log::error!("拉取{}失败: {}", label, e);
                Self {
                    items: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// 首页全部动态内容
#[derive(Debug, Clone, Serialize)]
pub struct SiteContent {
    pub blogs: Loaded<BlogPost>,
    pub projects: Loaded<Project>,
    pub experiences: Loaded<Experience>,
}

/// 并发拉取首页内容，每个列表独立结算
pub async fn load_site_content(api: &ApiClient) -> SiteContent {
    let (blogs, projects, experiences) = tokio::join!(
        api.list_blogs(),
        api.list_projects(),
        api.list_experiences(),
    );

    let mut blogs = Loaded::settle("博客列表", blogs);
    sort_newest_first(&mut blogs.items);

    let content = SiteContent {
        blogs,
        projects: Loaded::settle("项目列表", projects),
        experiences: Loaded::settle("工作经历列表", experiences),
    };
    if content.blogs.is_ok() && content.projects.is_ok() && content.experiences.is_ok() {
        log::info!(
            "首页内容加载完成: {} 篇博客, {} 个项目, {} 段经历",
            content.blogs.items.len(),
            content.projects.items.len(),
            content.experiences.items.len()
        );
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::MockBackend;

    #[tokio::test]
    async fn test_one_failure_does_not_block_others() {
        let backend = MockBackend::start().await;
        backend.route(
            "GET",
            "/application/blogs",
            200,
            r#"[{"_id":"a1","title":"One"},{"_id":"a3","title":"Three"},{"_id":"a2","title":"Two"}]"#,
        );
        backend.route("GET", "/application/projects", 500, r#"{"message":"db down"}"#);
        backend.route(
            "GET",
            "/application/experiences",
            200,
            r#"[{"title":"Engineer","company":"Acme","period":"2024","description":"","icon":"Code"}]"#,
        );

        let content = load_site_content(&backend.client()).await;

        let blog_ids: Vec<&str> = content.blogs.items.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(blog_ids, vec!["a3", "a2", "a1"]);

        assert!(!content.projects.is_ok());
        assert!(content.projects.items.is_empty());

        assert!(content.experiences.is_ok());
        assert_eq!(content.experiences.items.len(), 1);
        assert_eq!(backend.count("GET"), 3);
    }

    #[tokio::test]
    async fn test_empty_bodies_become_empty_lists() {
        let backend = MockBackend::start().await;
        backend.route("GET", "/application/blogs", 200, "");
        backend.route("GET", "/application/projects", 200, "null");
        backend.route("GET", "/application/experiences", 200, "[]");

        let content = load_site_content(&backend.client()).await;
        assert!(content.blogs.is_ok() && content.blogs.items.is_empty());
        assert!(content.projects.is_ok() && content.projects.items.is_empty());
        assert!(content.experiences.is_ok() && content.experiences.items.is_empty());
    }

    #[tokio::test]
    async fn test_incomplete_record_keeps_collection() {
        let backend = MockBackend::start().await;
        backend.route("GET", "/application/blogs", 200, "[]");
        backend.route(
            "GET",
            "/application/projects",
            200,
            r#"[{"_id":"p1","title":"Folio"},{"_id":"p2","description":"x"},{"_id":"p3","featured":"yes"}]"#,
        );
        backend.route("GET", "/application/experiences", 200, "[]");

        let content = load_site_content(&backend.client()).await;

        assert!(content.projects.is_ok());
        let ids: Vec<&str> = content.projects.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
        assert_eq!(content.projects.items[1].title, "");
        assert_eq!(content.projects.items[1].description, "x");
    }
}
