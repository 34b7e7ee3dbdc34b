use maud::{html, Markup, Render};

/// Line icons used on the feature grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Link,
    Settings,
    BarChart,
    QrCode,
}

impl Render for Icon {
    fn render(&self) -> Markup {
        html! {
            svg
                class="h-5 w-5 text-foreground"
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true" {
                @match self {
                    Icon::Link => {
                        path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71" {}
                        path d="M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71" {}
                    }
                    Icon::Settings => {
                        path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z" {}
                        circle cx="12" cy="12" r="3" {}
                    }
                    Icon::BarChart => {
                        line x1="18" x2="18" y1="20" y2="10" {}
                        line x1="12" x2="12" y1="20" y2="4" {}
                        line x1="6" x2="6" y1="20" y2="14" {}
                    }
                    Icon::QrCode => {
                        rect width="5" height="5" x="3" y="3" rx="1" {}
                        rect width="5" height="5" x="16" y="3" rx="1" {}
                        rect width="5" height="5" x="3" y="16" rx="1" {}
                        path d="M21 16h-3a2 2 0 0 0-2 2v3" {}
                        path d="M12 7v3a2 2 0 0 1-2 2H7" {}
                        path d="M16 12h1M21 12v.01M12 16v.01M12 21v-1M3 12h.01M12 3h.01M21 21v.01" {}
                    }
                }
            }
        }
    }
}

pub fn feature_card(title: &str, description: &str, icon: Icon) -> Markup {
    html! {
        div class="flex gap-4 rounded-2xl border border-black/[.06] bg-white p-6 shadow-sm dark:border-white/[.06] dark:bg-transparent" {
            div class="flex h-12 w-12 items-center justify-center rounded-xl bg-foreground/5 text-foreground" {
                (icon)
            }
            div {
                h3 class="text-sm font-semibold text-black dark:text-zinc-50" { (title) }
                p class="mt-1 max-w-xs text-sm text-zinc-600 dark:text-zinc-400" { (description) }
            }
        }
    }
}
