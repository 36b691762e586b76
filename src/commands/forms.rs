//! # 表单 Tauri Commands
//!
//! 管理端三个录入表单和首页联系表单共用的 command：
//! - `form_schema` - 获取表单字段描述（渲染输入框、标记必填）
//! - `form_state` - 获取表单当前记录和提示
//! - `update_form_field` - 输入框 change 事件
//! - `submit_form` - 提交表单
//!
//! 所有 command 通过 `kind` 参数（"project" | "experience" | "blog" | "contact"）选择表单。

use tauri::State;

use crate::services::api::ApiClient;
use crate::services::forms::{self, FieldChange, FieldSpec, FormDesk, FormKind, FormView};

#[tauri::command]
pub fn form_schema(kind: FormKind) -> Vec<FieldSpec> {
    forms::schema(kind).fields.to_vec()
}

#[tauri::command]
pub async fn form_state(kind: FormKind, desk: State<'_, FormDesk>) -> Result<FormView, String> {
    Ok(desk.form(kind).lock().await.view())
}

/// 修改单个字段，返回修改后的表单视图
///
/// # 错误
/// 字段名不属于该表单时返回错误，记录保持不变
#[tauri::command]
pub async fn update_form_field(
    kind: FormKind,
    change: FieldChange,
    desk: State<'_, FormDesk>,
) -> Result<FormView, String> {
    let mut form = desk.form(kind).lock().await;
    form.apply_change(change).map_err(|e| e.to_string())?;
    Ok(form.view())
}

/// 提交表单
///
/// 成功时返回已重置的表单视图；失败时返回错误描述，
/// 此时表单记录保持不变，可通过 `form_state` 读取错误提示。
#[tauri::command]
pub async fn submit_form(
    kind: FormKind,
    api: State<'_, ApiClient>,
    desk: State<'_, FormDesk>,
) -> Result<FormView, String> {
    desk.submit(kind, &api).await.map_err(|e| e.to_string())
}
