//! # 区块显现跟踪
//!
//! 记录每个区块当前是否进入视口，前端据此触发进入动画（技能进度条、经历卡片滑入等）。
//! 输入是前端 IntersectionObserver 回调中的相交记录。
//!
//! 组件卸载时调用 [`RevealTracker::disconnect`]，之后到达的回调一律忽略，
//! 不会再修改可见性表。

use std::collections::HashMap;

use crate::models::section::{IntersectionEntry, SectionId};

/// 默认可见阈值：区块露出 10% 即视为可见
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    visible: HashMap<SectionId, bool>,
    connected: bool,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBILITY_THRESHOLD)
    }
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: HashMap::new(),
            connected: true,
        }
    }

    /// 应用一批相交记录，返回本次实际生效的条数
    pub fn apply(&mut self, entries: &[IntersectionEntry]) -> usize {
        if !self.is_connected() {
            return 0;
        }
        for entry in entries {
            self.visible.insert(entry.id, entry.ratio >= self.threshold);
        }
        entries.len()
    }

    pub fn is_visible(&self, id: SectionId) -> bool {
        self.visible.get(&id).copied().unwrap_or(false)
    }

    /// 当前可见性表的快照，尚未上报过的区块记为不可见
    pub fn snapshot(&self) -> HashMap<SectionId, bool> {
        SectionId::ALL
            .into_iter()
            .map(|id| (id, self.is_visible(id)))
            .collect()
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: SectionId, ratio: f64) -> IntersectionEntry {
        IntersectionEntry { id, ratio }
    }

    #[test]
    fn test_threshold_decides_visibility() {
        let mut tracker = RevealTracker::default();
        tracker.apply(&[entry(SectionId::Skills, 0.25), entry(SectionId::Blogs, 0.05)]);

        assert!(tracker.is_visible(SectionId::Skills));
        assert!(!tracker.is_visible(SectionId::Blogs));
        // 从未上报过的区块默认不可见
        assert!(!tracker.is_visible(SectionId::Home));
    }

    #[test]
    fn test_leaving_viewport_hides_again() {
        let mut tracker = RevealTracker::default();
        tracker.apply(&[entry(SectionId::Experience, 1.0)]);
        tracker.apply(&[entry(SectionId::Experience, 0.0)]);
        assert!(!tracker.is_visible(SectionId::Experience));
    }

    #[test]
    fn test_disconnect_ignores_later_entries() {
        let mut tracker = RevealTracker::default();
        tracker.apply(&[entry(SectionId::About, 0.5)]);
        tracker.disconnect();

        assert_eq!(tracker.apply(&[entry(SectionId::About, 0.0)]), 0);
        assert!(tracker.is_visible(SectionId::About));
        assert!(!tracker.is_connected());
    }

    #[test]
    fn test_snapshot_covers_every_section() {
        let mut tracker = RevealTracker::default();
        tracker.apply(&[entry(SectionId::Projects, 0.4)]);

        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.len(), SectionId::ALL.len());
        assert_eq!(snapshot[&SectionId::Projects], true);
        assert_eq!(snapshot[&SectionId::Contact], false);
    }
}
