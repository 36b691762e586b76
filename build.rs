//! # Portfolio Studio - Tauri Cargo 构建脚本
//!
//! 在编译主项目之前执行，根据 `tauri.conf.json` 生成 Tauri 运行时所需的资源绑定代码，
//! 并处理应用图标和权限清单（`capabilities/`）。

fn main() {
    tauri_build::build()
}
