//! WebSocket 封装模块
//!
//! 使用 `web_sys::WebSocket` 提供事件通道：
//! 服务端以 `{"event": "...", "payload": ...}` 帧推送，
//! 断线后按固定次数、固定间隔自动重连（不做退避）。

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// 固定重连次数
const MAX_RECONNECT_ATTEMPTS: u32 = 5;
/// 固定重连间隔（毫秒）
const RECONNECT_DELAY_MS: u32 = 3_000;

/// 服务端事件帧
#[derive(Debug, Clone, Deserialize)]
pub struct ServerEvent {
    pub event: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

/// 打开事件通道
///
/// 连接是尽力而为的：建立失败或超过重连次数时只记录日志，
/// 不向上抛错。通道存活期为整个应用生命周期，不提供关闭句柄。
pub fn open_event_channel<F>(url: String, on_event: F)
where
    F: Fn(ServerEvent) + 'static,
{
    connect(Rc::new(url), Rc::new(on_event), Rc::new(Cell::new(0)));
}

fn connect(url: Rc<String>, handler: Rc<dyn Fn(ServerEvent)>, attempts: Rc<Cell<u32>>) {
    let ws = match web_sys::WebSocket::new(&url) {
        Ok(ws) => ws,
        Err(err) => {
            web_sys::console::warn_1(
                &format!("[Socket] Failed to open connection: {err:?}").into(),
            );
            schedule_reconnect(url, handler, attempts);
            return;
        }
    };

    // onopen：连接成功后重置重连计数
    {
        let attempts = attempts.clone();
        let on_open = Closure::<dyn Fn()>::new(move || {
            attempts.set(0);
            web_sys::console::log_1(&"[Socket] Connected.".into());
        });
        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        on_open.forget();
    }

    // onmessage：只处理文本帧，解析失败静默丢弃
    {
        let handler = handler.clone();
        let on_message = Closure::<dyn Fn(web_sys::MessageEvent)>::new(
            move |event: web_sys::MessageEvent| {
                let Some(text) = event.data().as_string() else {
                    return;
                };
                match serde_json::from_str::<ServerEvent>(&text) {
                    Ok(frame) => handler(frame),
                    Err(err) => {
                        web_sys::console::warn_1(
                            &format!("[Socket] Dropped malformed frame: {err}").into(),
                        );
                    }
                }
            },
        );
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        on_message.forget();
    }

    // onclose：固定间隔重连
    {
        let on_close = Closure::<dyn Fn(web_sys::CloseEvent)>::new(
            move |_event: web_sys::CloseEvent| {
                schedule_reconnect(url.clone(), handler.clone(), attempts.clone());
            },
        );
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));
        // 泄漏闭包以保持监听器存活
        on_close.forget();
    }
}

fn schedule_reconnect(url: Rc<String>, handler: Rc<dyn Fn(ServerEvent)>, attempts: Rc<Cell<u32>>) {
    let attempt = attempts.get() + 1;
    if attempt > MAX_RECONNECT_ATTEMPTS {
        web_sys::console::warn_1(&"[Socket] Giving up after repeated failures.".into());
        return;
    }
    attempts.set(attempt);
    web_sys::console::log_1(
        &format!("[Socket] Reconnecting ({attempt}/{MAX_RECONNECT_ATTEMPTS})...").into(),
    );

    Timeout::new(RECONNECT_DELAY_MS, move || {
        connect(url, handler, attempts);
    })
    .forget();
}
