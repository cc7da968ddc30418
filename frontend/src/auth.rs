//! 认证模块
//!
//! 管理账户认证状态，与路由系统解耦。
//! 路由服务通过注入的档案/加载信号实现重定向守卫。

use campushire_shared::protocol::{
    CollegeLoginRequest, CollegeRegisterRequest, MeRequest, SignInRequest, SignUpRequest,
};
use campushire_shared::{AuthResponse, Profile};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ApiError};
use crate::web::storage;

/// 认证状态
#[derive(Clone, PartialEq)]
pub struct AuthState {
    /// 已解析的账户档案（未登录为 None）
    pub profile: Option<Profile>,
    /// 会话恢复是否仍在进行
    pub is_loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        // 冷启动时先按"加载中"处理，守卫在 me 请求落定前不动作
        Self {
            profile: None,
            is_loading: true,
        }
    }
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 档案信号（用于路由服务注入）
    pub fn profile_signal(&self) -> Signal<Option<Profile>> {
        let state = self.state;
        Signal::derive(move || state.get().profile)
    }

    /// 加载信号（用于路由服务注入）
    pub fn loading_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_loading)
    }

    fn resolve(&self, profile: Option<Profile>) {
        self.set_state.update(|state| {
            state.profile = profile;
            state.is_loading = false;
        });
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 存有令牌时向后端换取档案；令牌失效则清除并保持未登录。
pub fn init_auth(ctx: &AuthContext, api: ApiClient) {
    if storage::token().is_none() {
        ctx.resolve(None);
        return;
    }

    let ctx = *ctx;
    spawn_local(async move {
        match api.send(&MeRequest).await {
            Ok(profile) => ctx.resolve(Some(profile)),
            Err(err) => {
                web_sys::console::warn_1(&format!("[Auth] Session restore failed: {err}").into());
                storage::clear_token();
                ctx.resolve(None);
            }
        }
    });
}

/// 保存令牌并写入档案（登录类接口共用）
fn apply_session(ctx: &AuthContext, auth: AuthResponse) {
    storage::set_token(&auth.token);
    ctx.resolve(Some(auth.profile));
}

/// 登录；成功后守卫会按角色跳转
pub async fn sign_in(
    ctx: &AuthContext,
    api: &ApiClient,
    email: String,
    password: String,
) -> Result<(), ApiError> {
    let auth = api.send(&SignInRequest { email, password }).await?;
    apply_session(ctx, auth);
    Ok(())
}

/// 注册；不自动登录，调用方引导用户回登录页
pub async fn sign_up(api: &ApiClient, req: SignUpRequest) -> Result<Profile, ApiError> {
    api.send(&req).await
}

/// 学院登录（独立于 `/auth/...` 的入口）
pub async fn college_sign_in(
    ctx: &AuthContext,
    api: &ApiClient,
    email: String,
    password: String,
) -> Result<(), ApiError> {
    let auth = api.send(&CollegeLoginRequest { email, password }).await?;
    apply_session(ctx, auth);
    Ok(())
}

/// 学院注册；同注册一样回到登录页
pub async fn college_register(
    api: &ApiClient,
    req: CollegeRegisterRequest,
) -> Result<Profile, ApiError> {
    api.send(&req).await
}

/// 注销并清除状态
///
/// 守卫只在公共页生效，离开受限页面由调用方自行导航。
pub fn logout(ctx: &AuthContext) {
    storage::clear_token();
    ctx.set_state.update(|state| {
        state.profile = None;
    });
}
