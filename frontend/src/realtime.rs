//! 实时通道
//!
//! 订阅后端以 socket 推送的广告统计更新（`ad:stats-updated`）。
//! 通道与 REST 使用同一枚 bearer 令牌，通过查询参数携带。

use campushire_shared::{AdStatsUpdate, EVENT_AD_STATS_UPDATED};

use crate::web::socket;
use crate::web::storage;

/// 构造带令牌的通道地址：`ws(s)://{host}/ws?token=...`
fn channel_url() -> Option<String> {
    let window = web_sys::window()?;
    let location = window.location();
    let protocol = location.protocol().ok()?;
    let host = location.host().ok()?;
    let scheme = if protocol == "https:" { "wss" } else { "ws" };
    let token = storage::token()?;
    Some(format!("{scheme}://{host}/ws?token={token}"))
}

/// 订阅广告统计更新
///
/// 未登录（无令牌）时不建立连接。重连与帧解析由 socket 层处理。
pub fn subscribe_ad_stats<F>(on_update: F)
where
    F: Fn(AdStatsUpdate) + 'static,
{
    let Some(url) = channel_url() else {
        web_sys::console::warn_1(&"[Realtime] No session token, channel not opened.".into());
        return;
    };

    socket::open_event_channel(url, move |frame| {
        if frame.event != EVENT_AD_STATS_UPDATED {
            return;
        }
        match serde_json::from_value::<AdStatsUpdate>(frame.payload) {
            Ok(update) => on_update(update),
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("[Realtime] Bad {EVENT_AD_STATS_UPDATED} payload: {err}").into(),
                );
            }
        }
    });
}
