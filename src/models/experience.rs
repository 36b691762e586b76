//! # 工作经历数据模型
//!
//! 工作经历（Experience）以及经历卡片图标的封闭映射。
//!
//! 后端只存储图标的符号名称（如 `"Briefcase"`），前端原先通过动态查表把名称映射为图标组件，
//! 名称无法识别时会得到 `undefined`。这里改为封闭枚举 [`ExperienceIcon`]：
//! 所有可识别名称一一列出，未知名称统一落到 [`FALLBACK_ICON`]。

use serde::{Deserialize, Serialize};

/// 工作经历数据结构
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface Experience {
///   _id?: string;
///   title: string;
///   company: string;
///   period: string;
///   description: string;
///   icon: string;
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub company: String,

    /// 任职时间段，原样展示（如 "2022 - Present"）
    #[serde(default)]
    pub period: String,

    #[serde(default)]
    pub description: String,

    /// 图标符号名称，通过 [`ExperienceIcon::from_name`] 解析
    #[serde(default)]
    pub icon: String,
}

/// 经历卡片可用的图标
///
/// 覆盖展示页与管理端下拉框中出现过的全部名称。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExperienceIcon {
    Briefcase,
    Code,
    Rocket,
    FolderGit2,
    Github,
    Linkedin,
}

/// 名称无法识别时使用的图标
pub const FALLBACK_ICON: ExperienceIcon = ExperienceIcon::Briefcase;

/// 管理端"新增经历"表单中可选的图标
pub const ADMIN_ICON_OPTIONS: [ExperienceIcon; 4] = [
    ExperienceIcon::Briefcase,
    ExperienceIcon::FolderGit2,
    ExperienceIcon::Github,
    ExperienceIcon::Linkedin,
];

impl ExperienceIcon {
    /// 按符号名称查找图标，未知名称返回 [`FALLBACK_ICON`]
    ///
    /// 名称区分大小写，与后端存储的值保持一致
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "Briefcase" => Self::Briefcase,
            "Code" => Self::Code,
            "Rocket" => Self::Rocket,
            "FolderGit2" => Self::FolderGit2,
            "Github" => Self::Github,
            "Linkedin" => Self::Linkedin,
            _ => FALLBACK_ICON,
        }
    }

    /// 后端存储使用的符号名称
    pub fn name(self) -> &'static str {
        match self {
            Self::Briefcase => "Briefcase",
            Self::Code => "Code",
            Self::Rocket => "Rocket",
            Self::FolderGit2 => "FolderGit2",
            Self::Github => "Github",
            Self::Linkedin => "Linkedin",
        }
    }

    /// 前端图标资源名（lucide 图标的 kebab-case 名称）
    pub fn asset(self) -> &'static str {
        match self {
            Self::Briefcase => "briefcase",
            Self::Code => "code",
            Self::Rocket => "rocket",
            Self::FolderGit2 => "folder-git-2",
            Self::Github => "github",
            Self::Linkedin => "linkedin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_resolve() {
        assert_eq!(ExperienceIcon::from_name("Rocket"), ExperienceIcon::Rocket);
        assert_eq!(ExperienceIcon::from_name("FolderGit2").asset(), "folder-git-2");
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(ExperienceIcon::from_name("Spaceship"), FALLBACK_ICON);
        assert_eq!(ExperienceIcon::from_name(""), FALLBACK_ICON);
        // 大小写不同视为未知
        assert_eq!(ExperienceIcon::from_name("rocket"), FALLBACK_ICON);
    }

    #[test]
    fn test_names_round_trip() {
        for icon in ADMIN_ICON_OPTIONS {
            assert_eq!(ExperienceIcon::from_name(icon.name()), icon);
        }
    }
}
