//! # 留言板服务
//!
//! 管理端"消息"区块的状态：留言列表、加载状态、当前打开详情弹窗的留言。
//!
//! 删除遵循"服务端确认后再移除"：先发送 DELETE 请求，只有成功后才从本地列表移除；
//! 失败时列表保持不变，只记录日志。
//!
//! [`MessageDesk`] 持有留言板的锁，网络请求期间不持有锁，
//! 请求挂起时详情弹窗仍可打开和关闭。

use serde::Serialize;
use tokio::sync::Mutex;

use crate::models::message::ContactMessage;
use crate::services::api::{ApiClient, ApiError};

/// 发给前端的留言板视图
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageBoardView {
    pub messages: Vec<ContactMessage>,
    pub loading: bool,
    pub selected: Option<ContactMessage>,
}

#[derive(Debug, Clone)]
pub struct MessageBoard {
    messages: Vec<ContactMessage>,
    loading: bool,
    selected: Option<String>,
}

impl Default for MessageBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBoard {
    /// 新建留言板，挂载后尚未加载完成前处于 loading 状态
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            loading: true,
            selected: None,
        }
    }

    /// 进入 loading 状态，准备发起拉取
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// 应用一次拉取结果
    pub fn apply_loaded(
        &mut self,
        result: Result<Vec<ContactMessage>, ApiError>,
    ) -> Result<(), ApiError> {
        self.loading = false;
        match result {
            Ok(messages) => {
                self.messages = messages;
                self.prune_selection();
                Ok(())
            }
            Err(e) => {
                log::error!("拉取留言列表失败: {}", e);
                Err(e)
            }
        }
    }

    /// 应用一次删除结果
    pub fn apply_deleted(
        &mut self,
        id: &str,
        result: Result<(), ApiError>,
    ) -> Result<(), ApiError> {
        match result {
            Ok(()) => {
                self.messages.retain(|m| m.id != id);
                self.prune_selection();
                log::info!("已删除留言 {}", id);
                Ok(())
            }
            Err(e) => {
                log::error!("删除留言 {} 失败: {}", id, e);
                Err(e)
            }
        }
    }

    /// 打开留言详情，标识符不存在时返回 false
    pub fn select(&mut self, id: &str) -> bool {
        if self.messages.iter().any(|m| m.id == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&ContactMessage> {
        let id = self.selected.as_deref()?;
        self.messages.iter().find(|m| m.id == id)
    }

    /// 被选中的留言已不在列表中时清除选择
    fn prune_selection(&mut self) {
        if self.selected().is_none() {
            self.selected = None;
        }
    }

    pub fn view(&self) -> MessageBoardView {
        MessageBoardView {
            messages: self.messages.clone(),
            loading: self.loading,
            selected: self.selected().cloned(),
        }
    }
}

/// 留言板的 managed state
pub struct MessageDesk {
    board: Mutex<MessageBoard>,
}

impl Default for MessageDesk {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageDesk {
    pub fn new() -> Self {
        Self {
            board: Mutex::new(MessageBoard::new()),
        }
    }

    pub fn board(&self) -> &Mutex<MessageBoard> {
        &self.board
    }

    /// 拉取留言列表
    ///
    /// 无论成功与否，结束后都退出 loading 状态；失败时保留原有列表。
    pub async fn load(&self, api: &ApiClient) -> Result<MessageBoardView, ApiError> {
        self.board.lock().await.begin_load();

        let result = api.list_messages().await;

        let mut board = self.board.lock().await;
        board.apply_loaded(result)?;
        Ok(board.view())
    }

    /// 删除一条留言，服务端确认后才从本地移除
    pub async fn delete(&self, api: &ApiClient, id: &str) -> Result<MessageBoardView, ApiError> {
        let result = api.delete_message(id).await;

        let mut board = self.board.lock().await;
        board.apply_deleted(id, result)?;
        Ok(board.view())
    }
}
