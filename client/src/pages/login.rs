//! Login landing page.
//!
//! Sign-in itself is handled by the account service; this route is where
//! logout and protected actions send the user.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"HomifyMe"</h1>
                <p class="login-card__subtitle">"Đăng nhập/Đăng ký"</p>
                <p class="login-message">
                    {move || {
                        if session.get().is_logged_in() {
                            "Bạn đã đăng nhập."
                        } else {
                            "Phiên đăng nhập đã kết thúc. Vui lòng đăng nhập lại."
                        }
                    }}
                </p>
                <a href="/" class="btn btn--primary">"Về trang chủ"</a>
            </div>
        </div>
    }
}
