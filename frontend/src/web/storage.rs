//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 提供简洁的本地存储接口，并在其上定义
//! 页面状态快照的注入式存储接口 `StateStore`，测试中可替换为内存实现。

use std::sync::Mutex;

use campushire_shared::{PAGE_STATE_KEY, TOKEN_KEY};

use super::route::PageState;

/// 本地存储操作封装
///
/// 提供静态方法访问浏览器 LocalStorage API。
pub struct LocalStorage;

impl LocalStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 获取存储的字符串值；键不存在或发生错误时返回 None
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 设置存储值，返回操作是否成功
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 删除存储的键值对，返回操作是否成功
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

// =========================================================
// 会话令牌 (Bearer Token)
// =========================================================

pub fn token() -> Option<String> {
    LocalStorage::get(TOKEN_KEY)
}

pub fn set_token(token: &str) {
    LocalStorage::set(TOKEN_KEY, token);
}

pub fn clear_token() {
    LocalStorage::delete(TOKEN_KEY);
}

// =========================================================
// 页面状态快照 (PageState Snapshot)
// =========================================================

/// 快照编解码：与存储介质无关的纯函数，便于单测
///
/// 损坏的 JSON 解码为 None（静默回退到 URL 解析结果）。
pub fn decode_snapshot(raw: &str) -> Option<PageState> {
    serde_json::from_str(raw).ok()
}

pub fn encode_snapshot(state: &PageState) -> Option<String> {
    serde_json::to_string(state).ok()
}

/// 页面状态快照的注入式存储接口
///
/// 路由服务只依赖这个 trait，不直接触碰全局 localStorage。
/// Send + Sync 约束来自 Leptos 的响应式闭包。
pub trait StateStore: Send + Sync {
    /// 读取快照；不存在或损坏时返回 None
    fn load(&self) -> Option<PageState>;
    /// 写入快照（尽力而为，失败静默）
    fn save(&self, state: &PageState);
}

/// 生产实现：localStorage["pageState"]
pub struct LocalStateStore;

impl StateStore for LocalStateStore {
    fn load(&self) -> Option<PageState> {
        decode_snapshot(&LocalStorage::get(PAGE_STATE_KEY)?)
    }

    fn save(&self, state: &PageState) {
        if let Some(json) = encode_snapshot(state) {
            LocalStorage::set(PAGE_STATE_KEY, &json);
        }
    }
}

/// 测试实现：进程内存
#[derive(Default)]
pub struct MemoryStateStore {
    snapshot: Mutex<Option<PageState>>,
}

impl StateStore for MemoryStateStore {
    fn load(&self) -> Option<PageState> {
        self.snapshot.lock().ok()?.clone()
    }

    fn save(&self, state: &PageState) {
        if let Ok(mut snapshot) = self.snapshot.lock() {
            *snapshot = Some(state.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_round_trips_through_the_codec() {
        let state = PageState::JobSeekerDashboard {
            section: Some("alerts".to_string()),
        };
        let json = encode_snapshot(&state).unwrap();
        assert_eq!(decode_snapshot(&json), Some(state));
    }

    #[test]
    fn malformed_snapshot_decodes_to_none() {
        assert_eq!(decode_snapshot("not json at all"), None);
        assert_eq!(decode_snapshot(r#"{"page":"no-such-page"}"#), None);
        assert_eq!(decode_snapshot(r#"{"page":"job-details"}"#), None); // 缺少 jobId
        assert_eq!(decode_snapshot(""), None);
    }

    #[test]
    fn memory_store_saves_and_loads() {
        let store = MemoryStateStore::default();
        assert_eq!(store.load(), None);

        store.save(&PageState::Pricing);
        assert_eq!(store.load(), Some(PageState::Pricing));

        // 整体替换，不做增量合并
        store.save(&PageState::Admin {
            section: Some("ads".to_string()),
        });
        assert_eq!(
            store.load(),
            Some(PageState::Admin {
                section: Some("ads".to_string())
            })
        );
    }
}
