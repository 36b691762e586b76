//! # 页面区块数据模型
//!
//! 单页布局中从上到下排列的命名区块，以及前端上报的区块位置和可见度数据。
//! 这些数据不做持久化，每次滚动 / 尺寸变化 / 相交事件时由前端重新测量上报。

use serde::{Deserialize, Serialize};

/// 页面区块标识
///
/// 声明顺序即页面顺序，也是激活区块扫描时的优先级（越靠前越优先）。
/// 序列化为小写字符串，与 DOM 中 `<section id="...">` 一致。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
    Blogs,
}

impl SectionId {
    /// 所有区块，按扫描顺序排列
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
        SectionId::Blogs,
    ];
}

/// 单个区块相对视口的垂直位置（CSS 像素）
///
/// 由前端 `getBoundingClientRect()` 测得：`top` / `bottom` 为区块上下边缘到视口顶部的距离，
/// 已滚出视口上方时为负数。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SectionRegion {
    pub id: SectionId,
    pub top: f64,
    pub bottom: f64,
}

/// 一条视口相交记录
///
/// `ratio` 为区块可见部分占自身面积的比例，取值 [0, 1]。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IntersectionEntry {
    pub id: SectionId,
    pub ratio: f64,
}
