use axum::extract::State;
use chrono::{Datelike, Local};
use maud::html;

use super::components::auth_buttons::auth_buttons;
use super::components::feature::{feature_card, Icon};
use super::components::layout;
use super::RenderOutcome;
use crate::auth::{AuthLinks, AuthState};
use crate::routing::DASHBOARD_PATH;
use crate::state::AppState;

pub const HEADLINE: &str = "Shorten links, share smarter.";

const FEATURES: &[(&str, &str, Icon)] = &[
    (
        "One-click shortening",
        "Paste a long link and generate a short URL instantly — fast and reliable.",
        Icon::Link,
    ),
    (
        "Custom aliases",
        "Create branded or custom slugs so your links are easy to remember and share.",
        Icon::Settings,
    ),
    (
        "Analytics & tracking",
        "See clicks, referrers, and geo data so you can measure performance.",
        Icon::BarChart,
    ),
    (
        "QR codes",
        "Instantly generate QR codes for physical or social sharing.",
        Icon::QrCode,
    ),
];

/// GET / - public landing page
pub async fn show(State(state): State<AppState>, auth: AuthState) -> RenderOutcome {
    render(&auth, state.provider.links(), Local::now().year())
}

/// Signed-in visitors go to the dashboard; everyone else gets the same page
/// for a given `year`.
pub fn render(auth: &AuthState, links: &AuthLinks, year: i32) -> RenderOutcome {
    if auth.is_signed_in() {
        return RenderOutcome::Redirect(DASHBOARD_PATH.to_string());
    }

    RenderOutcome::Content(layout::base(
        "Shorten links, share smarter",
        html! {
            div class="flex min-h-screen w-full items-center justify-center bg-zinc-50 font-sans dark:bg-black" {
                main class="w-full max-w-6xl px-8 py-20" {
                    div class="mx-auto max-w-4xl" {
                        header class="mb-12 flex items-center justify-between" {
                            div class="flex items-center gap-3" {
                                (layout::logo())
                                span class="text-xl font-semibold text-black dark:text-zinc-50" { "Shortly" }
                            }
                            nav {
                                (auth_buttons(links))
                            }
                        }

                        // Hero
                        section class="mb-16 flex flex-col items-start gap-8" {
                            h1 class="text-4xl font-extrabold leading-tight text-black dark:text-zinc-50" {
                                (HEADLINE)
                            }
                            p class="max-w-2xl text-lg text-zinc-700 dark:text-zinc-400" {
                                "Create short, memorable links, get actionable analytics, and share with confidence — all in one lightweight app built for teams and creators."
                            }

                            div class="mt-4 flex w-full max-w-md gap-4" {
                                a
                                    href=(DASHBOARD_PATH)
                                    class="inline-flex h-12 items-center justify-center rounded-full bg-foreground px-6 text-sm font-medium text-background hover:opacity-95" {
                                    "Get started"
                                }
                                a
                                    href="#features"
                                    class="inline-flex h-12 items-center justify-center rounded-full border border-solid border-black/[.08] px-6 text-sm font-medium hover:bg-black/[.04]" {
                                    "See features"
                                }
                            }

                            // Static preview, nothing behind it yet
                            div class="mt-8 w-full max-w-xl rounded-lg border border-black/[.06] bg-white p-3 shadow-sm dark:bg-transparent" {
                                div class="flex items-center justify-between gap-4" {
                                    div class="flex flex-col" {
                                        span class="text-sm text-zinc-500 dark:text-zinc-400" { "Preview" }
                                        div class="mt-2 flex items-center gap-3" {
                                            div class="rounded-md bg-zinc-100 px-3 py-2 text-sm dark:bg-zinc-800" { "short.ly/abc123" }
                                            button type="button" class="rounded-full border border-black/[.06] px-3 py-1 text-sm hover:bg-black/[.04]" { "Copy" }
                                        }
                                    }
                                    div class="text-sm text-zinc-500 dark:text-zinc-400" { "0 clicks • 0 visits" }
                                }
                            }
                        }

                        section id="features" {
                            h2 class="mb-6 text-2xl font-semibold text-black dark:text-zinc-50" { "Features" }
                            div class="grid grid-cols-1 gap-4 sm:grid-cols-2" {
                                @for (title, description, icon) in FEATURES {
                                    (feature_card(title, description, *icon))
                                }
                            }
                        }

                        footer class="mt-16 border-t border-black/[.06] pt-8 text-sm text-zinc-600 dark:text-zinc-400" {
                            div class="flex items-center justify-between" {
                                span { "© " (year) " Shortly" }
                                div class="flex gap-4" {
                                    a href=(DASHBOARD_PATH) class="hover:underline" { "Dashboard" }
                                    a href="/docs" class="hover:underline" { "Docs" }
                                }
                            }
                        }
                    }
                }
            }
        },
    ))
}
