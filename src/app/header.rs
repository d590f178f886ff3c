use leptos::prelude::*;

use crate::spy::{ScrollSpy, SECTIONS};

use super::{
    scroll::{scroll_to_section, use_scroll_spy},
    theme_switcher::ThemeSwitcher,
};

fn nav_label(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let active = use_scroll_spy(ScrollSpy::default());
    let (is_menu_open, set_is_menu_open) = signal(false);

    let go_to = move |id: &'static str| {
        scroll_to_section(id);
        set_is_menu_open.set(false);
    };

    let nav_item = move |id: &'static str, mobile: bool| {
        view! {
            <button
                on:click=move |_| go_to(id)
                class=move || {
                    let base = if mobile {
                        "block w-full text-left px-3 py-2 transition-theme"
                    } else {
                        "relative px-3 py-2 transition-theme"
                    };
                    if active.get() == id {
                        format!("{base} text-accent font-medium")
                    } else {
                        format!("{base} text-secondary hover:text-primary")
                    }
                }
            >
                {nav_label(id)}
                {move || {
                    (!mobile && active.get() == id)
                        .then(|| {
                            view! {
                                <span class="absolute bottom-0 left-0 right-0 h-0.5 bg-gradient-to-r from-blue-500 to-purple-600" />
                            }
                        })
                }}
            </button>
        }
    };

    view! {
        <header class="fixed top-0 w-full z-40 bg-primary backdrop-blur-md border-b border-theme">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <button
                        on:click=move |_| go_to("home")
                        class="text-2xl font-bold bg-gradient-to-r from-blue-400 to-purple-600 bg-clip-text text-transparent"
                    >
                        "Portfolio"
                    </button>
                    <nav class="hidden md:flex items-center space-x-4">
                        {SECTIONS.into_iter().map(|id| nav_item(id, false)).collect_view()}
                        <ThemeSwitcher />
                    </nav>
                    <div class="md:hidden flex items-center gap-2">
                        <ThemeSwitcher />
                        <button
                            on:click=move |_| set_is_menu_open.update(|open| *open = !*open)
                            class="p-2 text-secondary hover:text-primary"
                            aria-label="Toggle menu"
                        >
                            {move || if is_menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || is_menu_open.get()>
                <nav class="md:hidden bg-secondary border-t border-theme px-4 py-2">
                    {SECTIONS.into_iter().map(|id| nav_item(id, true)).collect_view()}
                </nav>
            </Show>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_label() {
        assert_eq!(nav_label("home"), "Home");
        assert_eq!(nav_label("projects"), "Projects");
        assert_eq!(nav_label(""), "");
    }
}
