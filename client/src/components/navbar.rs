//! Top navigation bar: logo, search, links, and the session menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the shared session to decide between the login link and the avatar
//! menu, and gates the dashboard link on the profile's admin flag. Logout
//! clears the session only when the backend confirms it.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::state::session::SessionState;

/// Navigation bar. `on_search` receives the current search text on every
/// input event and again when the search button is clicked.
#[component]
pub fn Navbar(on_search: Callback<String>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let query = RwSignal::new(String::new());
    let dropdown_open = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = StoredValue::new_local(leptos_router::hooks::use_navigate());

    let on_logout = Callback::new(move |()| {
        dropdown_open.set(false);

        #[cfg(feature = "hydrate")]
        {
            use crate::state::session::{LogoutEffect, stored_token};

            leptos::task::spawn_local(async move {
                let token = stored_token();
                let outcome = crate::net::api::ApiClient::default().logout(token.as_deref()).await;
                let effect = session
                    .try_update(|s| s.apply_logout(&outcome))
                    .unwrap_or(LogoutEffect::Unchanged);
                match (effect, outcome) {
                    (LogoutEffect::RedirectToLogin, _) => {
                        navigate.with_value(|nav| nav("/login", leptos_router::NavigateOptions::default()));
                    }
                    (LogoutEffect::Unchanged, Err(e)) => log::error!("Đăng xuất thất bại: {e}"),
                    (LogoutEffect::Unchanged, Ok(())) => {}
                }
            });
        }
    });

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <div class="navbar__left">
                    <a href="/" class="navbar__brand">
                        <img src="/logo.png" alt="Logo" class="navbar__logo"/>
                        <span class="navbar__brand-name">"HomifyMe"</span>
                    </a>
                    <div class="navbar__search">
                        <input
                            type="text"
                            class="navbar__search-input"
                            placeholder="Tìm kiếm..."
                            prop:value=move || query.get()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                query.set(value.clone());
                                on_search.run(value);
                            }
                        />
                        <button
                            class="btn btn--primary navbar__search-button"
                            title="Tìm kiếm"
                            on:click=move |_| on_search.run(query.get_untracked())
                        >
                            <Icon kind=IconKind::Search class="icon--md"/>
                        </button>
                    </div>
                </div>

                <ul class="navbar__links">
                    <Show when=move || session.get().is_admin()>
                        <li class="navbar__item">
                            <Icon kind=IconKind::Adjustments class="icon--md icon--accent"/>
                            <a href="/dashboard">"Bảng điều khiển"</a>
                        </li>
                    </Show>
                    <li class="navbar__item">
                        <Icon kind=IconKind::Home class="icon--md icon--accent"/>
                        <a href="/">"Trang chủ"</a>
                    </li>
                    <li class="navbar__item">
                        <Icon kind=IconKind::Info class="icon--md icon--accent"/>
                        <a href="/about">"Về chúng tôi"</a>
                    </li>
                    <li class="navbar__item">
                        <Icon kind=IconKind::Phone class="icon--md icon--accent"/>
                        <a href="/contact">"Liên hệ"</a>
                    </li>
                    <Show
                        when=move || session.get().is_logged_in()
                        fallback=|| {
                            view! {
                                <li class="navbar__item">
                                    <Icon kind=IconKind::Login class="icon--md icon--accent"/>
                                    <a href="/login">"Đăng nhập/Đăng ký"</a>
                                </li>
                            }
                        }
                    >
                        <li class="navbar__item navbar__account">
                            <img
                                class="navbar__avatar"
                                src=move || session.get().avatar_url()
                                alt="Avatar người dùng"
                                on:click=move |_| dropdown_open.update(|open| *open = !*open)
                            />
                            <Show when=move || dropdown_open.get()>
                                <ul class="navbar__dropdown">
                                    <li><a class="navbar__dropdown-item" href="/profile">"Thông tin cá nhân"</a></li>
                                    <li><a class="navbar__dropdown-item" href="/user-history">"Lịch sử giao dịch"</a></li>
                                    <li><a class="navbar__dropdown-item" href="/settings">"Cài đặt"</a></li>
                                    <li>
                                        <p class="navbar__dropdown-item navbar__logout" on:click=move |_| on_logout.run(())>
                                            "Đăng xuất"
                                        </p>
                                    </li>
                                </ul>
                            </Show>
                        </li>
                    </Show>
                </ul>
            </div>
        </nav>
    }
}
