//! 后台广告管理：投放列表 + 模态编辑器 + 实时统计
//!
//! 统计数字由实时通道推送（`ad:stats-updated`），页面打开期间
//! 无需刷新即可看到曝光/点击增长。

use campushire_shared::protocol::{DeleteAdRequest, ListAdsRequest, UpsertAdRequest};
use campushire_shared::{AdCampaign, AdStatsUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::icons::{Plus, Radio, Trash};
use crate::components::toast::{Notification, Toast};
use crate::realtime;

/// 把推送的统计增量套到对应投放上；未知投放的更新直接丢弃
fn apply_stats_update(campaigns: &mut [AdCampaign], update: &AdStatsUpdate) {
    if let Some(campaign) = campaigns.iter_mut().find(|c| c.id == update.campaign_id) {
        campaign.stats = update.stats;
    }
}

/// 编辑器表单状态
#[derive(Clone, Copy)]
struct AdForm {
    editing_id: RwSignal<Option<String>>,
    advertiser: RwSignal<String>,
    headline: RwSignal<String>,
    target_url: RwSignal<String>,
    active: RwSignal<bool>,
}

impl AdForm {
    fn new() -> Self {
        Self {
            editing_id: RwSignal::new(None),
            advertiser: RwSignal::new(String::new()),
            headline: RwSignal::new(String::new()),
            target_url: RwSignal::new(String::new()),
            active: RwSignal::new(true),
        }
    }

    fn reset(&self) {
        self.editing_id.set(None);
        self.advertiser.set(String::new());
        self.headline.set(String::new());
        self.target_url.set(String::new());
        self.active.set(true);
    }

    fn load(&self, campaign: &AdCampaign) {
        self.editing_id.set(Some(campaign.id.clone()));
        self.advertiser.set(campaign.advertiser.clone());
        self.headline.set(campaign.headline.clone());
        self.target_url.set(campaign.target_url.clone());
        self.active.set(campaign.active);
    }

    fn to_request(self) -> UpsertAdRequest {
        UpsertAdRequest {
            id: self.editing_id.get_untracked(),
            advertiser: self.advertiser.get_untracked().trim().to_string(),
            headline: self.headline.get_untracked().trim().to_string(),
            target_url: self.target_url.get_untracked().trim().to_string(),
            active: self.active.get_untracked(),
        }
    }
}

#[component]
pub fn AdsSection() -> impl IntoView {
    let api = use_api();

    let (campaigns, set_campaigns) = signal(Vec::<AdCampaign>::new());
    let (loading, set_loading) = signal(true);
    let (notification, set_notification) = signal(Notification::None);

    let form = AdForm::new();
    let (open, set_open) = signal(false);
    let (saving, set_saving) = signal(false);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.send(&ListAdsRequest).await {
                Ok(data) => set_campaigns.set(data),
                Err(e) => {
                    set_notification.set(Some((format!("Failed to load campaigns: {e}"), true)));
                }
            }
            set_loading.set(false);
        });
    });

    // 订阅实时统计；组件体只执行一次，不会重复建连
    realtime::subscribe_ad_stats(move |update| {
        set_campaigns.update(|list| apply_stats_update(list, &update));
    });

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let api_save = use_api();
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let req = form.to_request();
        if req.advertiser.is_empty() || req.headline.is_empty() || req.target_url.is_empty() {
            set_notification.set(Some(("All fields are required".to_string(), true)));
            return;
        }

        let api = api_save.clone();
        set_saving.set(true);
        spawn_local(async move {
            match api.send(&req).await {
                Ok(saved) => {
                    set_campaigns.update(|list| {
                        match list.iter_mut().find(|c| c.id == saved.id) {
                            Some(slot) => *slot = saved,
                            None => list.push(saved),
                        }
                    });
                    set_open.set(false);
                    form.reset();
                }
                Err(e) => {
                    set_notification.set(Some((format!("Failed to save campaign: {e}"), true)));
                }
            }
            set_saving.set(false);
        });
    };

    let api_delete = use_api();
    let on_delete = move |id: String| {
        let api = api_delete.clone();
        spawn_local(async move {
            match api.send_ok(&DeleteAdRequest { id: id.clone() }).await {
                Ok(()) => {
                    set_campaigns.update(|list| list.retain(|c| c.id != id));
                    set_notification.set(Some(("Campaign deleted.".to_string(), false)));
                }
                Err(e) => {
                    set_notification.set(Some((format!("Failed to delete campaign: {e}"), true)));
                }
            }
        });
    };

    let open_create = move |_| {
        form.reset();
        set_open.set(true);
    };

    view! {
        <div class="space-y-4">
            <Toast notification=notification set_notification=set_notification />

            <div class="flex items-center justify-between">
                <div class="flex items-center gap-2 text-base-content/60">
                    <Radio attr:class="h-4 w-4" />
                    <span class="text-sm">"Impression and click counts update live."</span>
                </div>
                <button class="btn btn-primary btn-sm gap-1" on:click=open_create>
                    <Plus attr:class="h-4 w-4" />
                    "New campaign"
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="flex justify-center py-8">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                }
            >
                <Show
                    when=move || !campaigns.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="text-center text-base-content/60 py-8">
                                "No ad campaigns yet."
                            </p>
                        }
                    }
                >
                    <div class="overflow-x-auto">
                        <table class="table bg-base-100">
                            <thead>
                                <tr>
                                    <th>"Advertiser"</th>
                                    <th>"Headline"</th>
                                    <th>"Impressions"</th>
                                    <th>"Clicks"</th>
                                    <th>"Active"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || campaigns.get()
                                    key=|c| c.id.clone()
                                    let:campaign
                                >
                                    {
                                        let on_delete = on_delete.clone();
                                        let id = campaign.id.clone();
                                        let edit_campaign = campaign.clone();
                                        view! {
                                            <tr>
                                                <td class="font-medium">
                                                    {campaign.advertiser.clone()}
                                                </td>
                                                <td>{campaign.headline.clone()}</td>
                                                <td>{campaign.stats.impressions}</td>
                                                <td>{campaign.stats.clicks}</td>
                                                <td>
                                                    {if campaign.active {
                                                        view! {
                                                            <span class="badge badge-success">"Live"</span>
                                                        }
                                                            .into_any()
                                                    } else {
                                                        view! {
                                                            <span class="badge badge-ghost">"Paused"</span>
                                                        }
                                                            .into_any()
                                                    }}
                                                </td>
                                                <td class="flex gap-1">
                                                    <button
                                                        class="btn btn-ghost btn-xs"
                                                        on:click=move |_| {
                                                            form.load(&edit_campaign);
                                                            set_open.set(true);
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn-ghost btn-xs text-error"
                                                        on:click=move |_| on_delete(id.clone())
                                                    >
                                                        <Trash attr:class="h-4 w-4" />
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                </For>
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>

            <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_open.set(false)>
                <div class="modal-box">
                    <h3 class="font-bold text-lg">
                        {move || {
                            if form.editing_id.get().is_some() {
                                "Edit campaign"
                            } else {
                                "New campaign"
                            }
                        }}
                    </h3>

                    <form on:submit=on_submit class="space-y-4 mt-4">
                        <div class="form-control">
                            <label for="ad-advertiser" class="label">
                                <span class="label-text">"Advertiser"</span>
                            </label>
                            <input
                                id="ad-advertiser"
                                type="text"
                                class="input input-bordered w-full"
                                placeholder="Acme Corp"
                                on:input=move |ev| form.advertiser.set(event_target_value(&ev))
                                prop:value=form.advertiser
                                required
                            />
                        </div>

                        <div class="form-control">
                            <label for="ad-headline" class="label">
                                <span class="label-text">"Headline"</span>
                            </label>
                            <input
                                id="ad-headline"
                                type="text"
                                class="input input-bordered w-full"
                                placeholder="Hire faster with Acme"
                                on:input=move |ev| form.headline.set(event_target_value(&ev))
                                prop:value=form.headline
                                required
                            />
                        </div>

                        <div class="form-control">
                            <label for="ad-url" class="label">
                                <span class="label-text">"Target URL"</span>
                            </label>
                            <input
                                id="ad-url"
                                type="url"
                                class="input input-bordered w-full"
                                placeholder="https://acme.example/hiring"
                                on:input=move |ev| form.target_url.set(event_target_value(&ev))
                                prop:value=form.target_url
                                required
                            />
                        </div>

                        <div class="form-control">
                            <label class="label cursor-pointer">
                                <span class="label-text">"Serve this campaign"</span>
                                <input
                                    type="checkbox"
                                    class="toggle toggle-success"
                                    prop:checked=form.active
                                    on:change=move |ev| {
                                        form.active.set(event_target_checked(&ev))
                                    }
                                />
                            </label>
                        </div>

                        <div class="modal-action">
                            <button
                                type="button"
                                class="btn btn-ghost"
                                on:click=move |_| set_open.set(false)
                            >
                                "Cancel"
                            </button>
                            <button type="submit" disabled=move || saving.get() class="btn btn-primary">
                                {move || {
                                    if saving.get() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            "Saving..."
                                        }
                                            .into_any()
                                    } else {
                                        "Save".into_any()
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
                <form method="dialog" class="modal-backdrop">
                    <button>"close"</button>
                </form>
            </dialog>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campushire_shared::AdStats;

    fn campaign(id: &str) -> AdCampaign {
        AdCampaign {
            id: id.to_string(),
            advertiser: "Acme".to_string(),
            headline: "Hire faster".to_string(),
            target_url: "https://acme.example".to_string(),
            active: true,
            stats: AdStats::default(),
        }
    }

    #[test]
    fn stats_update_patches_only_the_matching_campaign() {
        let mut list = vec![campaign("a"), campaign("b")];
        apply_stats_update(
            &mut list,
            &AdStatsUpdate {
                campaign_id: "b".to_string(),
                stats: AdStats {
                    impressions: 42,
                    clicks: 7,
                },
            },
        );

        assert_eq!(list[0].stats, AdStats::default());
        assert_eq!(list[1].stats.impressions, 42);
        assert_eq!(list[1].stats.clicks, 7);
    }

    #[test]
    fn stats_update_for_unknown_campaign_is_dropped() {
        let mut list = vec![campaign("a")];
        apply_stats_update(
            &mut list,
            &AdStatsUpdate {
                campaign_id: "ghost".to_string(),
                stats: AdStats {
                    impressions: 1,
                    clicks: 1,
                },
            },
        );
        assert_eq!(list[0].stats, AdStats::default());
    }
}
