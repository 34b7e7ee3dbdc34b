use maud::{html, Markup, DOCTYPE};

use crate::routing::INTERNAL_ASSET_PREFIX;

/// Base HTML layout with Tailwind CSS
pub fn base(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - Shortly" }
                link rel="icon" href=(format!("{}/logo.svg", INTERNAL_ASSET_PREFIX));

                // Tailwind CSS (using CDN for now, can switch to build later)
                script src="https://cdn.tailwindcss.com" {}

                // Custom configuration for Tailwind
                script {
                    r#"
                    tailwind.config = {
                        darkMode: 'media',
                        theme: {
                            extend: {
                                colors: {
                                    foreground: '#171717',
                                    background: '#ffffff',
                                }
                            }
                        }
                    }
                    "#
                }
            }
            body class="antialiased" {
                (content)
            }
        }
    }
}

pub fn logo() -> Markup {
    html! {
        img
            src=(format!("{}/logo.svg", INTERNAL_ASSET_PREFIX))
            alt="Shortly logo"
            width="36"
            height="36";
    }
}

/// Container for main content
pub fn container(content: Markup) -> Markup {
    html! {
        main class="container mx-auto p-4" {
            (content)
        }
    }
}

/// Error message box
pub fn alert(message: &str) -> Markup {
    html! {
        div class="rounded-md p-4 mb-4 border bg-red-50 border-red-200" role="alert" {
            p class="text-sm font-medium text-red-800" {
                (message)
            }
        }
    }
}
