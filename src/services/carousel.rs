//! # 项目轮播控制器
//!
//! 管理首页项目轮播的当前索引和自动播放状态。
//!
//! ## 状态机
//! | 事件 | 前置状态 | 索引变化 | 后置状态 |
//! |------|----------|----------|----------|
//! | 定时器 tick | Active | `+1 mod n` | Active |
//! | 手动下一张 | 任意 | `+1 mod n` | Suspended |
//! | 手动上一张 | 任意 | `-1 mod n`（0 回绕到 n-1） | Suspended |
//! | 跳转到 k | 任意 | `k` | Suspended |
//!
//! Suspended 是终态：用户一旦手动操作，本次会话内不再自动播放。
//! 幻灯片为空时控制器处于非激活状态，所有事件都是空操作，也不显示箭头和圆点。
//!
//! ## 自动播放驱动
//! [`AutoplayDriver`] 在 tokio 上运行一个周期任务，每个周期调用一次 [`Carousel::tick`]
//! 并通过回调上报新状态。轮播进入 Suspended 或变为空集合后任务自行退出；
//! `stop()` 或 Drop 时任务被中止。

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

use crate::models::project::Project;

/// 自动播放周期
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(4000);

/// 自动播放状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AutoplayState {
    Active,
    Suspended,
}

/// 轮播状态快照，通过 IPC 和事件发送给前端
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSnapshot {
    /// 当前索引；幻灯片为空时为 null
    pub index: Option<usize>,
    pub slide_count: usize,
    pub autoplay: AutoplayState,
    /// 是否显示左右箭头和圆点指示器
    pub show_controls: bool,
}

/// 轮播控制器
///
/// 不变量：`slides` 非空时 `index < slides.len()`；为空时 `index` 无意义且保持为 0。
#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Vec<Project>,
    index: usize,
    autoplay: AutoplayState,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
}

impl Carousel {
    /// 创建空轮播（非激活），自动播放状态为 Active
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            index: 0,
            autoplay: AutoplayState::Active,
        }
    }

    #[cfg(test)]
    pub fn with_slides(slides: Vec<Project>) -> Self {
        let mut carousel = Self::new();
        carousel.load(slides);
        carousel
    }

    /// 替换幻灯片集合，索引回到第一张
    ///
    /// 自动播放状态保持不变：已暂停的轮播重新加载后仍然是暂停的。
    pub fn load(&mut self, slides: Vec<Project>) {
        self.slides = slides;
        self.index = 0;
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Project] {
        &self.slides
    }

    /// 当前索引，空集合时为 None
    pub fn current(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index)
    }

    pub fn autoplay(&self) -> AutoplayState {
        self.autoplay
    }

    /// 定时器是否还有事可做
    pub fn autoplay_running(&self) -> bool {
        !self.is_empty() && self.autoplay == AutoplayState::Active
    }

    /// 定时器触发：仅在 Active 且非空时前进一张
    pub fn tick(&mut self) -> Option<usize> {
        if !self.autoplay_running() {
            return None;
        }
        self.index = (self.index + 1) % self.slides.len();
        Some(self.index)
    }

    /// 手动下一张
    pub fn next(&mut self) -> Option<usize> {
        let n = self.len();
        if n == 0 {
            return None;
        }
        self.index = (self.index + 1) % n;
        self.suspend();
        Some(self.index)
    }

    /// 手动上一张，第一张时回绕到最后一张
    pub fn previous(&mut self) -> Option<usize> {
        let n = self.len();
        if n == 0 {
            return None;
        }
        self.index = (self.index + n - 1) % n;
        self.suspend();
        Some(self.index)
    }

    /// 跳转到指定索引；越界时不做任何改变
    pub fn go_to(&mut self, target: usize) -> Option<usize> {
        if target >= self.len() {
            return None;
        }
        self.index = target;
        self.suspend();
        Some(self.index)
    }

    fn suspend(&mut self) {
        if self.autoplay == AutoplayState::Active {
            log::debug!("用户手动切换轮播，自动播放永久暂停");
        }
        self.autoplay = AutoplayState::Suspended;
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            index: self.current(),
            slide_count: self.len(),
            autoplay: self.autoplay,
            show_controls: !self.is_empty(),
        }
    }
}

/// 多个 command 与自动播放任务共享的轮播
pub type SharedCarousel = Arc<Mutex<Carousel>>;

/// 自动播放驱动
pub struct AutoplayDriver {
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl Default for AutoplayDriver {
    fn default() -> Self {
        Self::new(AUTOPLAY_INTERVAL)
    }
}

impl AutoplayDriver {
    pub fn new(period: Duration) -> Self {
        Self { period, task: None }
    }

    /// 启动自动播放任务，已有任务会先被中止
    ///
    /// 必须在 tokio 运行时内调用。`on_advance` 在每次自动前进后以新快照调用。
    pub fn start<F>(&mut self, carousel: SharedCarousel, on_advance: F)
    where
        F: Fn(CarouselSnapshot) + Send + 'static,
    {
        self.stop();
        let period = self.period;

        self.task = Some(tokio::spawn(async move {
            // 首次触发在一个周期之后，而不是立即触发
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                let snapshot = {
                    let mut carousel = carousel.lock().await;
                    if carousel.tick().is_none() {
                        break;
                    }
                    carousel.snapshot()
                };
                on_advance(snapshot);
            }
            log::debug!("轮播自动播放任务退出");
        }));
    }

    /// 中止自动播放任务
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for AutoplayDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
