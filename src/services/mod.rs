//! # 业务逻辑服务模块
//!
//! 包含核心业务逻辑的实现，与 Tauri command 层解耦：
//! - `config` - 后端连接配置（默认值 / 配置文件 / 环境变量）
//! - `api` - 作品集后端 REST 客户端
//! - `showcase` - 首页内容并发加载（all-settled）
//! - `section_tracker` - 激活区块跟踪、滚动进度、指针视差
//! - `reveal` - 区块进入视口的显现跟踪
//! - `carousel` - 项目轮播状态机和自动播放驱动
//! - `forms` - 表单注册表和表单状态管理
//! - `message_board` - 管理端留言列表与删除

pub mod api;
pub mod carousel;
pub mod config;
pub mod forms;
pub mod message_board;
pub mod reveal;
pub mod section_tracker;
pub mod showcase;

#[cfg(test)]
pub mod test_support;
