//! # 表单状态管理
//!
//! 管理端三个录入表单（项目 / 经历 / 博客）和首页联系表单共用同一套状态管理：
//! 一个字段名 → 字段值的记录、逐字段修改、一次性提交。
//!
//! ## 表单注册表
//! 每种表单由一个静态 [`FormSchema`] 描述：字段列表、默认值、目标集合、提交载荷的构造方式。
//! 新增表单时：
//! 1. 定义字段列表 `const XXX_FIELDS: &[FieldSpec]`
//! 2. 实现默认值函数（以及需要时的载荷转换函数）
//! 3. 声明 `static XXX_FORM: FormSchema`，并在 [`FormKind`] / [`schema`] 中登记
//!
//! ## 提交流程
//! 1. 检查必填字段，缺失时不发请求
//! 2. 发送一次 POST（不重试）
//! 3. 成功：记录恢复默认值，显示成功提示
//! 4. 失败：记录保持不变，显示错误提示（优先使用后端返回的 `message`）
//!
//! 提示信息是临时的，[`NOTICE_TTL`] 后自动消失。

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::services::api::{ApiClient, ApiError, Collection};

/// 提示信息的显示时长
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// 新建项目时可随机分配的展示渐变色
pub const PROJECT_GRADIENTS: [&str; 15] = [
    "from-blue-500 to-purple-600",
    "from-purple-500 to-pink-600",
    "from-pink-500 to-orange-600",
    "from-teal-500 to-blue-500",
    "from-green-500 to-emerald-600",
    "from-cyan-500 to-blue-600",
    "from-indigo-500 to-purple-600",
    "from-violet-500 to-fuchsia-600",
    "from-rose-500 to-pink-600",
    "from-amber-500 to-orange-600",
    "from-lime-500 to-green-600",
    "from-sky-500 to-indigo-600",
    "from-fuchsia-500 to-purple-600",
    "from-emerald-500 to-teal-600",
    "from-orange-500 to-red-600",
];

// ============ 数据结构 ============

/// 表单种类
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Project,
    Experience,
    Blog,
    Contact,
}

/// 字段输入类型，决定修改事件取 `value` 还是 `checked`
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Checkbox,
}

/// 表单字段描述
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn text(name: &'static str, required: bool) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Text,
        required,
    }
}

/// 字段值：文本或勾选状态
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Flag(_) => None,
        }
    }
}

/// 表单记录：字段名 → 当前值
pub type FormRecord = BTreeMap<String, FieldValue>;

/// 一次字段修改事件，对应前端输入框的 change 事件
///
/// 勾选框字段读取 `checked`，其余字段读取 `value`。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldChange {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
}

/// 表单操作失败的原因
#[derive(Debug, Error)]
pub enum FormError {
    #[error("表单 {form:?} 不包含字段 {field}")]
    UnknownField { form: FormKind, field: String },

    #[error("必填字段 {0} 不能为空")]
    MissingField(&'static str),

    #[error("表单正在提交中")]
    Busy,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// 提示类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Loading,
    Success,
    Error,
}

/// 临时提示
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    raised_at: Instant,
}

impl Notice {
    /// 提示在 `now` 时刻是否仍应显示；Loading 提示直到请求结束前一直显示
    pub fn is_visible_at(&self, now: Instant) -> bool {
        self.kind == NoticeKind::Loading || now.duration_since(self.raised_at) < NOTICE_TTL
    }
}

/// 表单描述（注册表条目）
pub struct FormSchema {
    pub kind: FormKind,
    /// 提交目标集合
    pub collection: Collection,
    /// 用户可编辑的字段，按表单显示顺序排列
    pub fields: &'static [FieldSpec],
    /// 默认记录（也是提交成功后的重置值）
    pub defaults: fn() -> FormRecord,
    /// 由记录构造提交载荷
    pub payload: fn(&FormRecord) -> Value,
    pub success_message: &'static str,
    pub failure_message: &'static str,
}

impl FormSchema {
    fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

// ============ 注册表 ============

const PROJECT_FIELDS: &[FieldSpec] = &[
    text("title", true),
    text("description", true),
    text("technologies", true),
    text("githubUrl", false),
    text("liveUrl", false),
    FieldSpec {
        name: "featured",
        kind: FieldKind::Checkbox,
        required: false,
    },
];

const EXPERIENCE_FIELDS: &[FieldSpec] = &[
    text("title", true),
    text("company", true),
    text("period", true),
    text("description", true),
    text("icon", false),
];

const BLOG_FIELDS: &[FieldSpec] = &[
    text("title", true),
    text("content", true),
    text("author", false),
    text("category", false),
];

const CONTACT_FIELDS: &[FieldSpec] = &[
    text("name", true),
    text("email", true),
    text("message", true),
];

pub static PROJECT_FORM: FormSchema = FormSchema {
    kind: FormKind::Project,
    collection: Collection::Projects,
    fields: PROJECT_FIELDS,
    defaults: project_defaults,
    payload: project_payload,
    success_message: "Project added!",
    failure_message: "Error adding project",
};

pub static EXPERIENCE_FORM: FormSchema = FormSchema {
    kind: FormKind::Experience,
    collection: Collection::Experiences,
    fields: EXPERIENCE_FIELDS,
    defaults: experience_defaults,
    payload: record_payload,
    success_message: "Experience added!",
    failure_message: "Error adding experience",
};

pub static BLOG_FORM: FormSchema = FormSchema {
    kind: FormKind::Blog,
    collection: Collection::Blogs,
    fields: BLOG_FIELDS,
    defaults: blog_defaults,
    payload: record_payload,
    success_message: "Blog added!",
    failure_message: "Error adding blog",
};

pub static CONTACT_FORM: FormSchema = FormSchema {
    kind: FormKind::Contact,
    collection: Collection::Messages,
    fields: CONTACT_FIELDS,
    defaults: contact_defaults,
    payload: record_payload,
    success_message: "Message sent successfully!",
    failure_message: "Failed to send message. Please try again.",
};

/// 按种类查找表单描述
pub fn schema(kind: FormKind) -> &'static FormSchema {
    match kind {
        FormKind::Project => &PROJECT_FORM,
        FormKind::Experience => &EXPERIENCE_FORM,
        FormKind::Blog => &BLOG_FORM,
        FormKind::Contact => &CONTACT_FORM,
    }
}

fn blank(fields: &[FieldSpec]) -> FormRecord {
    fields
        .iter()
        .map(|f| {
            let value = match f.kind {
                FieldKind::Text => FieldValue::Text(String::new()),
                FieldKind::Checkbox => FieldValue::Flag(false),
            };
            (f.name.to_string(), value)
        })
        .collect()
}

fn project_defaults() -> FormRecord {
    let mut record = blank(PROJECT_FIELDS);
    record.insert("color".into(), FieldValue::Text(random_gradient().to_string()));
    record
}

fn experience_defaults() -> FormRecord {
    let mut record = blank(EXPERIENCE_FIELDS);
    record.insert("icon".into(), FieldValue::Text("Briefcase".into()));
    record
}

fn blog_defaults() -> FormRecord {
    blank(BLOG_FIELDS)
}

fn contact_defaults() -> FormRecord {
    blank(CONTACT_FIELDS)
}

/// 记录原样作为 JSON 对象提交
fn record_payload(record: &FormRecord) -> Value {
    serde_json::to_value(record).unwrap_or_else(|_| json!({}))
}

/// 项目载荷：技术栈字符串拆分为数组
fn project_payload(record: &FormRecord) -> Value {
    let mut payload = record_payload(record);
    let technologies = record
        .get("technologies")
        .and_then(FieldValue::as_text)
        .map(split_technologies)
        .unwrap_or_default();
    payload["technologies"] = json!(technologies);
    payload
}

/// 将逗号分隔的技术栈拆分为去空白、非空的有序列表
pub fn split_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// 随机挑选一个展示渐变色
pub fn random_gradient() -> &'static str {
    PROJECT_GRADIENTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(PROJECT_GRADIENTS[0])
}

// ============ 表单状态 ============

/// 发给前端的表单视图
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub kind: FormKind,
    pub record: FormRecord,
    pub notice: Option<NoticeView>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NoticeView {
    pub kind: NoticeKind,
    pub message: String,
}

/// 单个表单的运行时状态
pub struct FormState {
    schema: &'static FormSchema,
    record: FormRecord,
    notice: Option<Notice>,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        let schema = schema(kind);
        Self {
            schema,
            record: (schema.defaults)(),
            notice: None,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.schema.kind
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// 修改单个字段，其他字段保持不变
    pub fn apply_change(&mut self, change: FieldChange) -> Result<(), FormError> {
        let spec = self
            .schema
            .field(&change.name)
            .ok_or_else(|| FormError::UnknownField {
                form: self.kind(),
                field: change.name.clone(),
            })?;

        let value = match spec.kind {
            FieldKind::Checkbox => FieldValue::Flag(change.checked),
            FieldKind::Text => FieldValue::Text(change.value),
        };
        self.record.insert(change.name, value);
        Ok(())
    }

    /// 第一个为空的必填字段
    pub fn missing_required(&self) -> Option<&'static str> {
        self.schema
            .fields
            .iter()
            .filter(|f| f.required)
            .find(|f| {
                self.record
                    .get(f.name)
                    .and_then(FieldValue::as_text)
                    .is_none_or(str::is_empty)
            })
            .map(|f| f.name)
    }

    /// 提交第一阶段：校验并生成载荷，进入 Loading 状态
    ///
    /// 校验失败时记录不变、不发请求。
    pub fn begin_submit(&mut self) -> Result<Value, FormError> {
        if self
            .notice
            .as_ref()
            .is_some_and(|n| n.kind == NoticeKind::Loading)
        {
            return Err(FormError::Busy);
        }

        if let Some(field) = self.missing_required() {
            let err = FormError::MissingField(field);
            self.raise(NoticeKind::Error, err.to_string());
            return Err(err);
        }

        self.raise(NoticeKind::Loading, "Sending...".to_string());
        Ok((self.schema.payload)(&self.record))
    }

    /// 提交第二阶段：根据请求结果重置记录或保留记录
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> Result<(), FormError> {
        match result {
            Ok(()) => {
                log::info!("{:?} 表单提交成功", self.kind());
                self.record = (self.schema.defaults)();
                self.raise(NoticeKind::Success, self.schema.success_message.to_string());
                Ok(())
            }
            Err(e) => {
                log::error!("{:?} 表单提交失败: {}", self.kind(), e);
                let message = e
                    .backend_message()
                    .unwrap_or(self.schema.failure_message)
                    .to_string();
                self.raise(NoticeKind::Error, message);
                Err(e.into())
            }
        }
    }

    /// 完整提交流程（两阶段之间持有 `&mut self`）
    pub async fn submit(&mut self, api: &ApiClient) -> Result<(), FormError> {
        let payload = self.begin_submit()?;
        let result = api.create(self.schema.collection, &payload).await;
        self.finish_submit(result)
    }

    fn raise(&mut self, kind: NoticeKind, message: String) {
        self.notice = Some(Notice {
            kind,
            message,
            raised_at: Instant::now(),
        });
    }

    /// 当前仍在显示期内的提示
    pub fn notice_at(&self, now: Instant) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| n.is_visible_at(now))
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice_at(Instant::now())
    }

    pub fn view(&self) -> FormView {
        FormView {
            kind: self.kind(),
            record: self.record.clone(),
            notice: self.notice().map(|n| NoticeView {
                kind: n.kind,
                message: n.message.clone(),
            }),
        }
    }
}

/// 全部四个表单，每个表单独立加锁
pub struct FormDesk {
    project: Mutex<FormState>,
    experience: Mutex<FormState>,
    blog: Mutex<FormState>,
    contact: Mutex<FormState>,
}

impl Default for FormDesk {
    fn default() -> Self {
        Self::new()
    }
}

impl FormDesk {
    pub fn new() -> Self {
        Self {
            project: Mutex::new(FormState::new(FormKind::Project)),
            experience: Mutex::new(FormState::new(FormKind::Experience)),
            blog: Mutex::new(FormState::new(FormKind::Blog)),
            contact: Mutex::new(FormState::new(FormKind::Contact)),
        }
    }

    pub fn form(&self, kind: FormKind) -> &Mutex<FormState> {
        match kind {
            FormKind::Project => &self.project,
            FormKind::Experience => &self.experience,
            FormKind::Blog => &self.blog,
            FormKind::Contact => &self.contact,
        }
    }

    /// 提交指定表单，网络请求期间不持有表单锁
    ///
    /// 请求进行中前端仍可读取表单（看到 Loading 提示）和继续编辑字段；
    /// 提交成功后记录被重置为默认值。
    pub async fn submit(&self, kind: FormKind, api: &ApiClient) -> Result<FormView, FormError> {
        let form = self.form(kind);
        let payload = form.lock().await.begin_submit()?;

        let result = api.create(schema(kind).collection, &payload).await;

        let mut state = form.lock().await;
        state.finish_submit(result)?;
        Ok(state.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::MockBackend;

    fn change(name: &str, value: &str) -> FieldChange {
        FieldChange {
            name: name.into(),
            value: value.into(),
            checked: false,
        }
    }

    fn text_of<'a>(state: &'a FormState, field: &str) -> &'a str {
        state.record().get(field).and_then(FieldValue::as_text).unwrap()
    }

    fn fill_project(state: &mut FormState) {
        state.apply_change(change("title", "Folio")).unwrap();
        state.apply_change(change("description", "Portfolio site")).unwrap();
        state.apply_change(change("technologies", "React, Node, Mongo")).unwrap();
    }

    #[test]
    fn test_split_technologies() {
        assert_eq!(split_technologies("React, Node, Mongo"), vec!["React", "Node", "Mongo"]);
        assert_eq!(split_technologies(" Rust ,, ,Tauri,"), vec!["Rust", "Tauri"]);
        assert!(split_technologies("").is_empty());
    }

    #[test]
    fn test_defaults() {
        let project = FormState::new(FormKind::Project);
        assert_eq!(project.record().get("featured"), Some(&FieldValue::Flag(false)));
        assert!(PROJECT_GRADIENTS.contains(&text_of(&project, "color")));

        let experience = FormState::new(FormKind::Experience);
        assert_eq!(text_of(&experience, "icon"), "Briefcase");

        let contact = FormState::new(FormKind::Contact);
        assert_eq!(contact.record().len(), 3);
    }

    #[test]
    fn test_change_touches_only_one_key() {
        let mut state = FormState::new(FormKind::Blog);
        let before = state.record().clone();

        state.apply_change(change("author", "Shishir")).unwrap();

        for (key, value) in state.record() {
            if key == "author" {
                assert_eq!(value, &FieldValue::Text("Shishir".into()));
            } else {
                assert_eq!(Some(value), before.get(key));
            }
        }
    }

    #[test]
    fn test_checkbox_reads_checked_not_value() {
        let mut state = FormState::new(FormKind::Project);
        state
            .apply_change(FieldChange {
                name: "featured".into(),
                value: "on".into(),
                checked: true,
            })
            .unwrap();
        assert_eq!(state.record().get("featured"), Some(&FieldValue::Flag(true)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut state = FormState::new(FormKind::Contact);
        let before = state.record().clone();
        let err = state.apply_change(change("phone", "123")).unwrap_err();
        assert!(matches!(err, FormError::UnknownField { .. }));
        assert_eq!(state.record(), &before);
    }

    #[test]
    fn test_project_payload_shape() {
        let mut state = FormState::new(FormKind::Project);
        fill_project(&mut state);
        let payload = (PROJECT_FORM.payload)(state.record());

        assert_eq!(payload["technologies"], json!(["React", "Node", "Mongo"]));
        assert_eq!(payload["featured"], json!(false));
        assert_eq!(payload["title"], json!("Folio"));
        assert!(payload["color"].is_string());
    }

    #[test]
    fn test_notice_expires() {
        let mut state = FormState::new(FormKind::Contact);
        state.raise(NoticeKind::Success, "ok".into());
        let raised = state.notice.as_ref().unwrap().raised_at;

        assert!(state.notice_at(raised + Duration::from_secs(4)).is_some());
        assert!(state.notice_at(raised + NOTICE_TTL).is_none());
    }

    #[tokio::test]
    async fn test_missing_required_sends_nothing() {
        let backend = MockBackend::start().await;
        let mut state = FormState::new(FormKind::Contact);
        state.apply_change(change("name", "Ada")).unwrap();

        let err = state.submit(&backend.client()).await.unwrap_err();
        assert!(matches!(err, FormError::MissingField("email")));
        assert_eq!(backend.requests().len(), 0);
        assert_eq!(text_of(&state, "name"), "Ada");
    }

    #[test]
    fn test_whitespace_satisfies_required() {
        let mut state = FormState::new(FormKind::Contact);
        state.apply_change(change("name", " ")).unwrap();
        state.apply_change(change("email", "ada@example.com")).unwrap();
        assert_eq!(state.missing_required(), Some("message"));

        state.apply_change(change("message", "  ")).unwrap();
        assert_eq!(state.missing_required(), None);
    }

    #[tokio::test]
    async fn test_project_submit_success_resets() {
        let backend = MockBackend::start().await;
        backend.route("POST", "/application/projects", 201, "{}");

        let mut state = FormState::new(FormKind::Project);
        fill_project(&mut state);
        state.submit(&backend.client()).await.unwrap();

        let sent = backend.requests()[0].json();
        assert_eq!(sent["technologies"], json!(["React", "Node", "Mongo"]));

        assert_eq!(text_of(&state, "title"), "");
        assert_eq!(text_of(&state, "technologies"), "");
        let notice = state.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, "Project added!");
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_record() {
        let backend = MockBackend::start().await;
        backend.route(
            "POST",
            "/application/messages",
            500,
            r#"{"message":"Mailbox full"}"#,
        );

        let mut state = FormState::new(FormKind::Contact);
        state.apply_change(change("name", "Ada")).unwrap();
        state.apply_change(change("email", "ada@example.com")).unwrap();
        state.apply_change(change("message", "Hello")).unwrap();
        let before = state.record().clone();

        assert!(matches!(
            state.submit(&backend.client()).await,
            Err(FormError::Api(_))
        ));
        assert_eq!(state.record(), &before);
        assert_eq!(backend.count("POST"), 1);

        let notice = state.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Mailbox full");
    }

    #[tokio::test]
    async fn test_failure_without_backend_message_uses_default() {
        let backend = MockBackend::start().await;
        backend.route("POST", "/application/blogs", 502, "Bad Gateway");

        let mut state = FormState::new(FormKind::Blog);
        state.apply_change(change("title", "T")).unwrap();
        state.apply_change(change("content", "C")).unwrap();

        assert!(state.submit(&backend.client()).await.is_err());
        assert_eq!(state.notice().unwrap().message, "Error adding blog");
    }

    #[tokio::test]
    async fn test_desk_submit_and_busy_guard() {
        let backend = MockBackend::start().await;
        backend.route("POST", "/application/experiences", 201, "{}");

        let desk = FormDesk::new();
        {
            let mut form = desk.form(FormKind::Experience).lock().await;
            for (name, value) in [
                ("title", "Engineer"),
                ("company", "Acme"),
                ("period", "2023 - Present"),
                ("description", "Built things"),
            ] {
                form.apply_change(change(name, value)).unwrap();
            }

            // 请求进行中再次提交被拒绝
            form.begin_submit().unwrap();
            assert!(matches!(form.begin_submit(), Err(FormError::Busy)));
            form.finish_submit(Err(ApiError::Invalid("aborted".into()))).unwrap_err();
        }

        let view = desk.submit(FormKind::Experience, &backend.client()).await.unwrap();
        assert_eq!(view.record.get("icon"), Some(&FieldValue::Text("Briefcase".into())));
        assert_eq!(view.record.get("company"), Some(&FieldValue::Text(String::new())));
        assert_eq!(backend.requests()[0].json()["icon"], json!("Briefcase"));
    }
}
