use leptos::prelude::*;
use leptos_meta::Title;

use super::scroll::scroll_to_section;

const BUILD_TIME: &str = env!("BUILD_TIME");

struct SkillGroup {
    name: &'static str,
    items: &'static [&'static str],
}

static SKILLS: [SkillGroup; 3] = [
    SkillGroup {
        name: "Languages",
        items: &["Rust", "TypeScript", "SQL"],
    },
    SkillGroup {
        name: "Frontend",
        items: &["Leptos", "HTML5", "CSS3", "TailwindCSS"],
    },
    SkillGroup {
        name: "Tooling",
        items: &["Git", "Docker", "Linux"],
    },
];

struct Project {
    title: &'static str,
    description: &'static str,
    tech: &'static [&'static str],
    source: Option<&'static str>,
}

static PROJECTS: [Project; 2] = [
    Project {
        title: "Algorithm Visualizer",
        description: "Step-by-step animations of sorting and path finding algorithms.",
        tech: &["Rust", "WebAssembly", "Canvas"],
        source: Some("https://github.com/"),
    },
    Project {
        title: "Event Management System",
        description: "Event scheduling with role based access and notifications.",
        tech: &["SQL", "HTML", "JavaScript"],
        source: None,
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <Contact />
        <footer class="py-8 text-center text-sm text-secondary border-t border-theme">
            "Last built " {BUILD_TIME}
        </footer>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="min-h-screen flex items-center justify-center px-4 pt-16">
            <div class="max-w-4xl text-center">
                <h1 class="text-5xl md:text-7xl font-bold mb-6">
                    "Hi, I'm a "
                    <span class="bg-gradient-to-r from-blue-400 to-purple-600 bg-clip-text text-transparent">
                        "Full-Stack Developer"
                    </span>
                </h1>
                <p class="text-xl text-secondary mb-8">
                    "I build fast, accessible web applications."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <button
                        on:click=move |_| scroll_to_section("projects")
                        class="px-8 py-3 rounded-full bg-gradient-to-r from-blue-500 to-purple-600 text-white font-medium"
                    >
                        "View My Work"
                    </button>
                    <button
                        on:click=move |_| scroll_to_section("contact")
                        class="px-8 py-3 rounded-full border border-theme font-medium"
                    >
                        "Get In Touch"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-4 bg-secondary">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-4xl font-bold text-center mb-12">"About Me"</h2>
                <p class="text-lg text-secondary leading-relaxed mb-4">
                    "I enjoy turning complex problems into simple, reliable interfaces."
                </p>
                <p class="text-lg text-secondary leading-relaxed">
                    "Most of my time goes into frontend work, with enough backend to ship the whole thing."
                </p>
            </div>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl font-bold text-center mb-12">"Skills"</h2>
                <div class="grid md:grid-cols-3 gap-8">
                    {SKILLS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="p-6 rounded-xl bg-secondary border border-theme">
                                    <h3 class="text-xl font-semibold mb-4">{group.name}</h3>
                                    <div class="flex flex-wrap gap-2">
                                        {group
                                            .items
                                            .iter()
                                            .map(|item| {
                                                view! {
                                                    <span class="px-3 py-1 rounded-full bg-tertiary text-sm">
                                                        {*item}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 px-4 bg-secondary">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl font-bold text-center mb-12">"Featured Projects"</h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <article class="p-6 rounded-xl bg-primary border border-theme">
                                    <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
                                    <p class="text-secondary mb-4">{project.description}</p>
                                    <div class="flex flex-wrap gap-2 mb-4">
                                        {project
                                            .tech
                                            .iter()
                                            .map(|t| {
                                                view! {
                                                    <span class="px-2 py-1 rounded bg-tertiary text-xs">
                                                        {*t}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    {project
                                        .source
                                        .map(|href| {
                                            view! {
                                                <a
                                                    href=href
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="text-accent hover:underline"
                                                >
                                                    "Source"
                                                </a>
                                            }
                                        })}
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-4">
            <div class="max-w-2xl mx-auto">
                <h2 class="text-4xl font-bold text-center mb-12">"Get In Touch"</h2>
                // no submission backend, the form only stays on the page
                <form class="space-y-6" on:submit=move |ev| ev.prevent_default()>
                    <input
                        type="text"
                        placeholder="Your Name"
                        class="w-full px-4 py-3 rounded-lg bg-secondary border border-theme focus:outline-none"
                    />
                    <input
                        type="email"
                        placeholder="Your Email"
                        class="w-full px-4 py-3 rounded-lg bg-secondary border border-theme focus:outline-none"
                    />
                    <textarea
                        rows="5"
                        placeholder="Your Message"
                        class="w-full px-4 py-3 rounded-lg bg-secondary border border-theme focus:outline-none"
                    ></textarea>
                    <button
                        type="submit"
                        class="w-full py-3 rounded-lg bg-gradient-to-r from-blue-500 to-purple-600 text-white font-medium"
                    >
                        "Send Message"
                    </button>
                </form>
            </div>
        </section>
    }
}
