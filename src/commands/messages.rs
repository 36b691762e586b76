//! # 留言管理 Tauri Commands
//!
//! 提供管理端留言区块的 Tauri command 处理函数：
//! - `load_messages` - 拉取留言列表
//! - `delete_message` - 删除单条留言（服务端确认后才从列表移除）
//! - `select_message` / `clear_selected_message` - 打开 / 关闭留言详情弹窗
//!
//! 拉取失败时只记录日志，列表保持原样，返回值仍是当前视图。
//! 网络请求期间不持有留言板锁，请求挂起时详情弹窗仍可开关。

use tauri::State;

use crate::services::api::ApiClient;
use crate::services::message_board::{MessageBoardView, MessageDesk};

/// 拉取留言列表
#[tauri::command]
pub async fn load_messages(
    api: State<'_, ApiClient>,
    desk: State<'_, MessageDesk>,
) -> Result<MessageBoardView, String> {
    match desk.load(&api).await {
        Ok(view) => Ok(view),
        // 失败已在服务层记录日志，列表保持原样
        Err(_) => Ok(desk.board().lock().await.view()),
    }
}

/// 删除指定留言
///
/// # 错误
/// 删除请求失败时返回错误描述，本地列表不变
#[tauri::command]
pub async fn delete_message(
    id: String,
    api: State<'_, ApiClient>,
    desk: State<'_, MessageDesk>,
) -> Result<MessageBoardView, String> {
    desk.delete(&api, &id)
        .await
        .map_err(|e| format!("删除留言失败: {}", e))
}

#[tauri::command]
pub async fn select_message(
    id: String,
    desk: State<'_, MessageDesk>,
) -> Result<MessageBoardView, String> {
    let mut board = desk.board().lock().await;
    if !board.select(&id) {
        return Err(format!("未找到留言 {}", id));
    }
    Ok(board.view())
}

#[tauri::command]
pub async fn clear_selected_message(
    desk: State<'_, MessageDesk>,
) -> Result<MessageBoardView, String> {
    let mut board = desk.board().lock().await;
    board.clear_selection();
    Ok(board.view())
}
