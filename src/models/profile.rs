//! # 静态个人资料内容
//!
//! 技能列表和导航项是写死在展示页中的内容，不经过后端。
//! 放在 Rust 端统一提供，前端只负责渲染。

use serde::Serialize;

use crate::models::section::SectionId;

/// 单项技能及熟练度（0-100，对应进度条百分比）
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

/// 按类别分组的技能
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillGroups {
    pub frontend: Vec<Skill>,
    pub backend: Vec<Skill>,
    pub languages: Vec<Skill>,
}

/// 导航栏条目
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NavItem {
    pub id: SectionId,
    pub label: &'static str,
    /// lucide 图标资源名
    pub icon: &'static str,
}

fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

fn nav(id: SectionId, label: &'static str, icon: &'static str) -> NavItem {
    NavItem { id, label, icon }
}

/// 技能区块内容
pub fn skills() -> SkillGroups {
    SkillGroups {
        frontend: vec![
            skill("React", 95),
            skill("JavaScript", 90),
            skill("HTML/CSS", 95),
            skill("Tailwind CSS", 90),
            skill("Redux", 85),
        ],
        backend: vec![
            skill("Node.js", 90),
            skill("Express", 90),
            skill("MongoDB", 85),
            skill("REST APIs", 90),
            skill("WebSockets", 80),
        ],
        languages: vec![
            skill("Python", 85),
            skill("C/C++", 80),
            skill("JavaScript", 90),
            skill("TypeScript", 75),
            skill("SQL", 80),
        ],
    }
}

/// 移动端菜单的导航条目（博客区块不在其中）
pub fn nav_items() -> Vec<NavItem> {
    vec![
        nav(SectionId::Home, "Home", "globe"),
        nav(SectionId::About, "About", "user"),
        nav(SectionId::Skills, "Skills", "zap"),
        nav(SectionId::Experience, "Experience", "briefcase"),
        nav(SectionId::Projects, "Projects", "folder-git-2"),
        nav(SectionId::Contact, "Contact", "message-square"),
    ]
}
