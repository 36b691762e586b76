//! # 区块跟踪服务
//!
//! 根据前端上报的区块位置，决定当前"激活"的页面区块（用于导航高亮），
//! 并计算滚动进度条和背景视差偏移。
//!
//! ## 激活规则
//! 按 [`SectionId::ALL`] 的声明顺序线性扫描，选出第一个满足
//! `top <= 阈值 && bottom >= 阈值` 的区块。阈值是固定导航栏下方的一条水平线。
//! 没有区块满足条件时保留上一次的结果，避免闪到"无激活"状态。
//!
//! 区块数量很少（≤ 10），每次滚动事件 O(n) 扫描即可，不需要索引结构。

use serde::Serialize;

use crate::models::section::{SectionId, SectionRegion};

/// 默认激活阈值：距视口顶部 100px（固定导航栏下方）
pub const DEFAULT_ACTIVATION_THRESHOLD: f64 = 100.0;

/// 激活区块跟踪器
#[derive(Debug, Clone)]
pub struct SectionTracker {
    threshold: f64,
    active: SectionId,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_THRESHOLD)
    }
}

impl SectionTracker {
    /// 创建跟踪器，初始激活区块为 `home`
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            active: SectionId::Home,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// 处理一次滚动（或挂载）时测得的区块位置，返回更新后的激活区块
    ///
    /// `regions` 可以是任意顺序、可以缺少部分区块（对应 DOM 元素不存在）；
    /// 同一区块出现多次时取第一条。
    pub fn observe(&mut self, regions: &[SectionRegion]) -> SectionId {
        let hit = SectionId::ALL.iter().copied().find(|id| {
            regions
                .iter()
                .find(|r| r.id == *id)
                .is_some_and(|r| r.top <= self.threshold && r.bottom >= self.threshold)
        });

        if let Some(id) = hit {
            self.active = id;
        }
        self.active
    }

    /// 用户点击导航链接时直接设置激活区块
    pub fn select(&mut self, id: SectionId) {
        self.active = id;
    }
}

/// 滚动进度百分比，范围 [0, 100]
///
/// # 参数
/// - `scroll_y` - 当前滚动位置（`window.scrollY`）
/// - `document_height` - 文档总高度（`scrollHeight`）
/// - `viewport_height` - 视口高度（`innerHeight`）
///
/// 页面不可滚动（文档不高于视口）时返回 0。
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// 指针位置归一化结果，两个分量都在 [-1, 1]
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

/// 将指针坐标归一化为以视口中心为原点的偏移，用于背景视差
pub fn pointer_offset(client_x: f64, client_y: f64, width: f64, height: f64) -> PointerOffset {
    let axis = |pos: f64, size: f64| {
        if size > 0.0 {
            (pos / size * 2.0 - 1.0).clamp(-1.0, 1.0)
        } else {
            0.0
        }
    };
    PointerOffset {
        x: axis(client_x, width),
        y: axis(client_y, height),
    }
}
