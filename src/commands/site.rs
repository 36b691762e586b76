//! # 展示页 Tauri Commands
//!
//! 提供首页相关的 Tauri command 处理函数：
//! - `load_site_content` - 并发拉取博客 / 项目 / 经历，并启动轮播自动播放
//! - `track_sections` / `select_section` - 激活区块跟踪
//! - `scroll_progress` / `pointer_offset` - 滚动进度条和背景视差
//! - `report_intersections` / `disconnect_reveal` - 区块显现跟踪
//! - `carousel_state` / `carousel_next` / `carousel_previous` / `carousel_go_to` - 轮播控制
//! - `get_skills` / `get_nav_items` / `resolve_icon` / `experience_icon_options` - 静态内容和图标映射
//! - `get_blog` - 博客详情弹窗
//! - `open_project_link` - 在系统浏览器中打开项目外链
//!
//! 自动播放每前进一次，向前端发送 `carousel://advanced` 事件，载荷为 [`CarouselSnapshot`]。

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tauri::{AppHandle, Emitter, State};
use tauri_plugin_opener::OpenerExt;

use crate::models::blog::BlogPost;
use crate::models::experience::{ADMIN_ICON_OPTIONS, ExperienceIcon};
use crate::models::profile::{self, NavItem, SkillGroups};
use crate::models::project::ProjectLink;
use crate::models::section::{IntersectionEntry, SectionId, SectionRegion};
use crate::services::api::ApiClient;
use crate::services::carousel::{AutoplayDriver, Carousel, CarouselSnapshot, SharedCarousel};
use crate::services::reveal::RevealTracker;
use crate::services::section_tracker::{self, PointerOffset, SectionTracker};
use crate::services::showcase::{self, SiteContent};

/// 轮播自动前进事件名
pub const CAROUSEL_EVENT: &str = "carousel://advanced";

/// 展示页的全部视图状态
///
/// 通过 `manage()` 注册为应用状态。每块状态各自加锁，只由对应的 command 修改。
/// 轮播使用 tokio 互斥锁，因为自动播放任务会跨 await 访问它。
pub struct SiteState {
    tracker: Mutex<SectionTracker>,
    reveal: Mutex<RevealTracker>,
    carousel: SharedCarousel,
    autoplay: Mutex<AutoplayDriver>,
    blogs: Mutex<Vec<BlogPost>>,
}

impl Default for SiteState {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteState {
    pub fn new() -> Self {
        Self {
            tracker: Mutex::new(SectionTracker::default()),
            reveal: Mutex::new(RevealTracker::default()),
            carousel: Arc::new(tokio::sync::Mutex::new(Carousel::new())),
            autoplay: Mutex::new(AutoplayDriver::default()),
            blogs: Mutex::new(Vec::new()),
        }
    }

    /// 根据轮播当前状态启动或停止自动播放
    fn restart_autoplay(&self, app: AppHandle, running: bool) {
        let Ok(mut driver) = self.autoplay.lock() else {
            return;
        };
        if !running {
            if driver.is_running() {
                log::info!("轮播已暂停或为空，停止自动播放");
            }
            driver.stop();
            return;
        }
        driver.start(self.carousel.clone(), move |snapshot| {
            if let Err(e) = app.emit(CAROUSEL_EVENT, &snapshot) {
                log::warn!("发送轮播事件失败: {}", e);
            }
        });
    }

    fn stop_autoplay(&self) {
        if let Ok(mut driver) = self.autoplay.lock() {
            driver.stop();
        }
    }

    /// 应用退出时释放定时器和观察回调
    pub fn shutdown(&self) {
        self.stop_autoplay();
        if let Ok(mut reveal) = self.reveal.lock() {
            reveal.disconnect();
        }
    }
}

fn poisoned<T>(_: T) -> String {
    "视图状态锁已损坏".to_string()
}

// ======== 内容加载 ========

/// 并发拉取首页内容
///
/// 三个列表独立结算，失败的列表为空并带有 `error` 描述。
/// 项目列表同时作为轮播幻灯片载入，非空时（重新）启动自动播放。
#[tauri::command]
pub async fn load_site_content(
    app: AppHandle,
    api: State<'_, ApiClient>,
    site: State<'_, SiteState>,
) -> Result<SiteContent, String> {
    let content = showcase::load_site_content(&api).await;

    *site.blogs.lock().map_err(poisoned)? = content.blogs.items.clone();

    let running = {
        let mut carousel = site.carousel.lock().await;
        carousel.load(content.projects.items.clone());
        carousel.autoplay_running()
    };
    site.restart_autoplay(app, running);

    Ok(content)
}

/// 查找博客详情
#[tauri::command]
pub fn get_blog(id: String, site: State<'_, SiteState>) -> Result<Option<BlogPost>, String> {
    let blogs = site.blogs.lock().map_err(poisoned)?;
    Ok(blogs.iter().find(|b| b.id == id).cloned())
}

// ======== 区块跟踪 ========

/// 滚动或挂载时上报区块位置，返回激活区块
#[tauri::command]
pub fn track_sections(
    regions: Vec<SectionRegion>,
    site: State<'_, SiteState>,
) -> Result<SectionId, String> {
    Ok(site.tracker.lock().map_err(poisoned)?.observe(&regions))
}

/// 点击导航链接
#[tauri::command]
pub fn select_section(id: SectionId, site: State<'_, SiteState>) -> Result<SectionId, String> {
    let mut tracker = site.tracker.lock().map_err(poisoned)?;
    tracker.select(id);
    Ok(tracker.active())
}

#[tauri::command]
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    section_tracker::scroll_progress(scroll_y, document_height, viewport_height)
}

#[tauri::command]
pub fn pointer_offset(client_x: f64, client_y: f64, width: f64, height: f64) -> PointerOffset {
    section_tracker::pointer_offset(client_x, client_y, width, height)
}

/// 上报一批相交记录，返回最新可见性表
#[tauri::command]
pub fn report_intersections(
    entries: Vec<IntersectionEntry>,
    site: State<'_, SiteState>,
) -> Result<HashMap<SectionId, bool>, String> {
    let mut reveal = site.reveal.lock().map_err(poisoned)?;
    reveal.apply(&entries);
    Ok(reveal.snapshot())
}

/// 页面卸载时停止接收相交记录
#[tauri::command]
pub fn disconnect_reveal(site: State<'_, SiteState>) -> Result<(), String> {
    site.reveal.lock().map_err(poisoned)?.disconnect();
    Ok(())
}

// ======== 轮播 ========

#[tauri::command]
pub async fn carousel_state(site: State<'_, SiteState>) -> Result<CarouselSnapshot, String> {
    Ok(site.carousel.lock().await.snapshot())
}

#[tauri::command]
pub async fn carousel_next(site: State<'_, SiteState>) -> Result<CarouselSnapshot, String> {
    manual_navigation(&site, Carousel::next).await
}

#[tauri::command]
pub async fn carousel_previous(site: State<'_, SiteState>) -> Result<CarouselSnapshot, String> {
    manual_navigation(&site, Carousel::previous).await
}

#[tauri::command]
pub async fn carousel_go_to(
    index: usize,
    site: State<'_, SiteState>,
) -> Result<CarouselSnapshot, String> {
    manual_navigation(&site, |carousel| carousel.go_to(index)).await
}

/// 手动切换：执行转换，生效后立即停止自动播放任务
async fn manual_navigation(
    site: &SiteState,
    action: impl FnOnce(&mut Carousel) -> Option<usize>,
) -> Result<CarouselSnapshot, String> {
    let (moved, snapshot) = {
        let mut carousel = site.carousel.lock().await;
        let moved = action(&mut carousel).is_some();
        (moved, carousel.snapshot())
    };
    if moved {
        site.stop_autoplay();
    }
    Ok(snapshot)
}

// ======== 静态内容 ========

#[tauri::command]
pub fn get_skills() -> SkillGroups {
    profile::skills()
}

#[tauri::command]
pub fn get_nav_items() -> Vec<NavItem> {
    profile::nav_items()
}

/// 图标解析结果
#[derive(Debug, Clone, Serialize)]
pub struct IconView {
    pub name: &'static str,
    pub asset: &'static str,
}

impl From<ExperienceIcon> for IconView {
    fn from(icon: ExperienceIcon) -> Self {
        Self {
            name: icon.name(),
            asset: icon.asset(),
        }
    }
}

/// 将经历图标名称解析为图标资源，未知名称返回兜底图标
#[tauri::command]
pub fn resolve_icon(name: String) -> IconView {
    ExperienceIcon::from_name(&name).into()
}

/// 管理端"新增经历"表单的图标下拉选项
#[tauri::command]
pub fn experience_icon_options() -> Vec<IconView> {
    ADMIN_ICON_OPTIONS.into_iter().map(IconView::from).collect()
}

// ======== 外链 ========

/// 在系统默认浏览器中打开项目的 GitHub 或在线演示地址
///
/// # 错误
/// 项目不存在、对应地址为空或系统打开失败时返回错误
#[tauri::command]
pub async fn open_project_link(
    app: AppHandle,
    project_id: String,
    kind: ProjectLink,
    site: State<'_, SiteState>,
) -> Result<(), String> {
    let url = {
        let carousel = site.carousel.lock().await;
        let project = carousel
            .slides()
            .iter()
            .find(|p| p.id == project_id)
            .ok_or_else(|| format!("未找到项目 {}", project_id))?;
        project
            .link(kind)
            .map(str::to_string)
            .ok_or_else(|| format!("项目 {} 没有设置 {:?} 链接", project.title, kind))?
    };

    app.opener()
        .open_url(url, None::<&str>)
        .map_err(|e| format!("打开链接失败: {}", e))
}
