mod cursor;
mod header;
mod homepage;
mod scroll;
pub mod theme;
mod theme_switcher;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use cursor::CustomCursor;
use header::Navigation;
use homepage::HomePage;
use theme::ThemeProvider;

pub use theme::{try_use_theme, use_theme, ThemeContext};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-primary text-primary transition-theme">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Portfolio - {title}") />

        <ThemeProvider>
            <Router>
                <CustomCursor />
                <Navigation />
                <main class="flex flex-col w-full">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
            </Router>
        </ThemeProvider>
    }
}
