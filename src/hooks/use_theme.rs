use yew::prelude::*;

use crate::utils::constants::STORAGE_KEY_THEME;
use crate::utils::storage::{load_string, save_string};

#[derive(Clone, PartialEq)]
pub struct UseThemeHandle {
    pub is_dark: bool,
    pub toggle: Callback<()>,
}

/// Light/dark preference, persisted under its own storage key. Falls back
/// to the OS `prefers-color-scheme` when nothing is stored. Unrelated to
/// the session.
#[hook]
pub fn use_theme() -> UseThemeHandle {
    let is_dark = use_state(|| false);

    {
        let is_dark = is_dark.clone();
        use_effect_with((), move |_| {
            let initial = match load_string(STORAGE_KEY_THEME) {
                Some(stored) => stored == "dark",
                None => prefers_dark(),
            };
            apply_theme(initial);
            is_dark.set(initial);
            || ()
        });
    }

    let toggle = {
        let is_dark = is_dark.clone();
        Callback::from(move |_| {
            let next = !*is_dark;
            apply_theme(next);
            let _ = save_string(STORAGE_KEY_THEME, if next { "dark" } else { "light" });
            is_dark.set(next);
        })
    };

    UseThemeHandle {
        is_dark: *is_dark,
        toggle,
    }
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme(is_dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    if is_dark {
        let _ = root.class_list().add_1("dark");
    } else {
        let _ = root.class_list().remove_1("dark");
    }
}
