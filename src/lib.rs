//! # Portfolio Studio - Tauri 应用核心初始化模块
//!
//! 本模块负责 Tauri 应用的完整初始化流程，包括：
//! - 注册 Tauri 官方插件（外链打开、日志）
//! - 加载后端连接配置，构造唯一的 `ApiClient`
//! - 初始化应用状态（展示页视图状态、表单、留言板）
//! - 注册自定义 Tauri commands
//! - 应用退出时停止轮播定时器、断开显现跟踪
//!
//! ## 模块结构
//! - `commands/` - Tauri command 处理函数（IPC 接口层）
//! - `models/` - 数据模型（对应后端 JSON 和前端 TypeScript 类型）
//! - `services/` - 核心业务逻辑（API 客户端、区块跟踪、轮播、表单、留言板）
//! - `utils/` - 通用工具函数

mod commands;
mod models;
mod services;
mod utils;

use tauri::{Manager, RunEvent};

use commands::site::SiteState;
use services::api::ApiClient;
use services::config::ApiConfig;
use services::forms::FormDesk;
use services::message_board::MessageDesk;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
/// Tauri 应用启动函数
///
/// 1. 创建 `tauri::Builder` 默认实例并注册插件
/// 2. 注册不依赖配置的应用状态（视图状态、表单、留言板）
/// 3. 注册所有自定义 Tauri commands
/// 4. 在 `setup` 钩子中启用日志、加载配置并注册 `ApiClient`
/// 5. 运行事件循环，`Exit` 时释放定时器
///
/// # Panics
/// 如果 Tauri 应用构建失败（例如配置文件缺失或窗口创建失败），
/// 将通过 `.expect()` 触发 panic 并输出错误信息。
pub fn run() {
    tauri::Builder::default()
        // Opener 插件：在系统浏览器中打开项目 GitHub / 在线演示地址
        .plugin(tauri_plugin_opener::init())
        .manage(SiteState::new())
        .manage(FormDesk::new())
        .manage(MessageDesk::new())
        .invoke_handler(tauri::generate_handler![
            // 展示页内容
            commands::site::load_site_content,
            commands::site::get_blog,
            commands::site::get_skills,
            commands::site::get_nav_items,
            commands::site::resolve_icon,
            commands::site::experience_icon_options,
            commands::site::open_project_link,
            // 区块跟踪与显现
            commands::site::track_sections,
            commands::site::select_section,
            commands::site::scroll_progress,
            commands::site::pointer_offset,
            commands::site::report_intersections,
            commands::site::disconnect_reveal,
            // 轮播
            commands::site::carousel_state,
            commands::site::carousel_next,
            commands::site::carousel_previous,
            commands::site::carousel_go_to,
            // 表单
            commands::forms::form_schema,
            commands::forms::form_state,
            commands::forms::update_form_field,
            commands::forms::submit_form,
            // 留言管理
            commands::messages::load_messages,
            commands::messages::delete_message,
            commands::messages::select_message,
            commands::messages::clear_selected_message,
        ])
        .setup(|app| {
            // 仅在开发调试模式下启用日志插件
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            // 配置只在启动时读取一次，客户端随后以 managed state 注入各 command
            let api = ApiClient::new(&ApiConfig::load())?;
            log::info!("作品集后端地址: {}", api.base_url());
            app.manage(api);
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app, event| {
            if let RunEvent::Exit = event {
                app.state::<SiteState>().shutdown();
            }
        });
}
