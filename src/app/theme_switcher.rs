use leptos::{html, prelude::*};
use leptos_use::on_click_outside;

use super::theme::use_theme;

#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let theme = use_theme();
    let (is_open, set_is_open) = signal(false);
    let target = NodeRef::<html::Div>::new();

    let _ = on_click_outside(target, move |_| set_is_open.set(false));

    view! {
        <div node_ref=target class="relative">
            <button
                on:click=move |_| set_is_open.update(|open| *open = !*open)
                class="flex items-center gap-2 px-4 py-2 bg-secondary border-theme border rounded-lg text-secondary hover:text-primary transition-theme"
                aria-label="Select theme"
            >
                <span aria-hidden="true">"🎨"</span>
                <span class="hidden sm:inline">{move || theme.get().label()}</span>
                <span class=move || {
                    if is_open.get() { "transition-transform rotate-180" } else { "transition-transform" }
                }>"▾"</span>
            </button>
            <Show when=move || is_open.get()>
                <div class="absolute top-full right-0 mt-2 w-48 bg-secondary border-theme border rounded-lg shadow-lg z-50">
                    {theme
                        .options()
                        .iter()
                        .map(|option| {
                            let name = option.name;
                            view! {
                                <button
                                    on:click=move |_| {
                                        theme.set(name);
                                        set_is_open.set(false);
                                    }
                                    class=move || {
                                        if theme.get() == name {
                                            "w-full px-4 py-3 text-left hover:bg-tertiary transition-theme first:rounded-t-lg last:rounded-b-lg flex items-center gap-3 text-primary"
                                        } else {
                                            "w-full px-4 py-3 text-left hover:bg-tertiary transition-theme first:rounded-t-lg last:rounded-b-lg flex items-center gap-3 text-secondary"
                                        }
                                    }
                                >
                                    <div class=format!(
                                        "w-4 h-4 rounded-full bg-gradient-to-r {}",
                                        option.colors,
                                    ) />
                                    <span>{option.label}</span>
                                    {move || {
                                        (theme.get() == name)
                                            .then(|| {
                                                view! {
                                                    <div class="ml-auto w-2 h-2 rounded-full bg-gradient-to-r from-blue-500 to-purple-600" />
                                                }
                                            })
                                    }}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
