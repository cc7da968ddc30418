//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 显式导航会整体替换页面状态、写入快照并 pushState；
//! 浏览器前进/后退只重新解析 URL，不写快照。

use std::sync::Arc;

use campushire_shared::Profile;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{PageState, redirect_after_auth};
use super::storage::StateStore;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于初始快照恢复）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 平滑滚动回页面顶部
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 快照存储与认证信号都从外部注入，保持与存储介质、认证系统解耦。
/// 保持 `Copy`，事件闭包直接复制句柄即可。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前页面状态（只读信号）
    current: ReadSignal<PageState>,
    /// 设置当前页面状态（写入信号）
    set_current: WriteSignal<PageState>,
    /// 注入的快照存储
    store: StoredValue<Arc<dyn StateStore>>,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// 初始状态来自 URL 解析；落在默认落地页时回退到持久化快照，
    /// 并用 replaceState 把地址栏对齐到快照的规范 URL。
    fn new(store: Arc<dyn StateStore>) -> Self {
        let mut initial = PageState::from_path(&current_path());
        if initial == PageState::Landing {
            if let Some(saved) = store.load() {
                replace_history_state(&saved.to_path());
                initial = saved;
            }
        }
        let (current, set_current) = signal(initial);

        Self {
            current,
            set_current,
            store: StoredValue::new(store),
        }
    }

    /// 获取当前页面状态信号
    pub fn current(&self) -> ReadSignal<PageState> {
        self.current
    }

    /// **核心方法：显式导航**
    ///
    /// 整体替换状态（不做增量合并），持久化快照，
    /// 再把规范 URL 推入 History，不触发页面重载。
    pub fn navigate(&self, state: PageState) {
        self.store.with_value(|store| store.save(&state));
        push_history_state(&state.to_path());
        self.set_current.set(state);
    }

    /// 初始化浏览器后退/前进按钮监听
    ///
    /// popstate 与初始加载走同一个 `PageState::from_path`，
    /// 且不写快照（快照只记录显式导航）。
    fn init_popstate_listener(&self) {
        let set_current = self.set_current;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_current.set(PageState::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 每次状态变化后平滑滚动回顶部
    fn setup_scroll_reset(&self) {
        let current = self.current;
        Effect::new(move |_| {
            current.track();
            scroll_to_top();
        });
    }

    /// 认证解析完成后的自动重定向守卫
    ///
    /// 只在用户停留于公共/认证页时按角色跳转，
    /// 深链上的已登录用户不会被弹走。页面级权限由渲染层再查。
    fn setup_auth_redirect(&self, loading: Signal<bool>, profile: Signal<Option<Profile>>) {
        let current = self.current;
        let service = self.clone();

        Effect::new(move |_| {
            if loading.get() {
                return;
            }
            let Some(profile) = profile.get() else {
                return;
            };

            // 路由用 untracked 读取：守卫只响应认证变化，不响应导航
            let route = current.get_untracked();
            if let Some(target) = redirect_after_auth(&route, &profile) {
                web_sys::console::log_1(
                    &format!("[Router] Auth resolved, redirecting to {}.", target.to_path())
                        .into(),
                );
                service.navigate(target);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化监听与守卫
fn provide_router(
    store: Arc<dyn StateStore>,
    loading: Signal<bool>,
    profile: Signal<Option<Profile>>,
) -> RouterService {
    let router = RouterService::new(store);

    router.init_popstate_listener();
    router.setup_scroll_reset();
    router.setup_auth_redirect(loading, profile);

    provide_context(router.clone());
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 页面状态快照存储
    store: Arc<dyn StateStore>,
    /// 认证是否仍在加载
    loading: Signal<bool>,
    /// 已解析的账户档案
    profile: Signal<Option<Profile>>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(store, loading, profile);

    children()
}
