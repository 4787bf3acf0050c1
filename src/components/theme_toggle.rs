use yew::prelude::*;

use crate::hooks::use_theme;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();

    let onclick = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let label = if theme.is_dark {
        "Switch to light theme"
    } else {
        "Switch to dark theme"
    };

    html! {
        <button class="theme-toggle" {onclick} aria-label={label} title={label}>
            { if theme.is_dark { "☀️" } else { "🌙" } }
        </button>
    }
}
