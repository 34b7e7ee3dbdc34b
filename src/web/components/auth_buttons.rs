use maud::{html, Markup};

use super::button::{Button, ButtonVariant};
use crate::auth::AuthLinks;

pub const SIGN_IN_TRIGGER_ID: &str = "sign-in-trigger";
pub const SIGN_UP_TRIGGER_ID: &str = "sign-up-trigger";

/// Sign-in and sign-up triggers for the page header
pub fn auth_buttons(links: &AuthLinks) -> Markup {
    html! {
        div class="flex gap-4 sm:flex-row" {
            (sign_in_trigger(
                &links.sign_in,
                Button::new("Sign in").aria_label("Sign in").variant(ButtonVariant::Primary),
            ))
            (sign_up_trigger(
                &links.sign_up,
                Button::new("Sign up").aria_label("Sign up").variant(ButtonVariant::Outline),
            ))
        }
    }
}

/// Turn `button` into a trigger for the hosted sign-in page
pub fn sign_in_trigger(url: &str, button: Button) -> Button {
    attach_navigation(button, SIGN_IN_TRIGGER_ID, url)
}

/// Turn `button` into a trigger for the hosted sign-up page
pub fn sign_up_trigger(url: &str, button: Button) -> Button {
    attach_navigation(button, SIGN_UP_TRIGGER_ID, url)
}

fn attach_navigation(button: Button, default_id: &str, url: &str) -> Button {
    let button = match button.reference() {
        Some(_) => button,
        None => button.id(default_id),
    };

    // JSON string literal doubles as a safely quoted JS string
    let target = serde_json::Value::String(url.to_string());
    button.on_click(format!("window.location.assign({})", target))
}
