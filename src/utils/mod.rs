//! # 通用工具模块
//!
//! - `path` - 配置目录定位和地址规范化

pub mod path;
