//! Avatar Component

use leptos::prelude::*;
use taskflow_core::display::initials;
use taskflow_core::User;

/// Member picture, or initials when there is none
#[component]
pub fn Avatar(user: User, #[prop(into, optional)] class: String) -> impl IntoView {
    let class = format!("avatar {}", class);
    match user.avatar_url {
        Some(url) => view! {
            <img class=class src=url alt=user.name.clone() title=user.name />
        }
        .into_any(),
        None => view! {
            <span class=format!("{} avatar-fallback", class) title=user.name.clone()>
                {initials(&user.name)}
            </span>
        }
        .into_any(),
    }
}
