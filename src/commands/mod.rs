//! # Tauri Command 处理模块
//!
//! 本模块包含所有注册到 Tauri 的 command 处理函数。
//! 每个子模块对应一个功能域：
//! - `site` - 首页内容、区块跟踪、显现动画、轮播、外链
//! - `forms` - 管理端录入表单和首页联系表单
//! - `messages` - 管理端留言列表与删除

pub mod forms;
pub mod messages;
pub mod site;
