use maud::html;

use super::components::layout;
use super::RenderOutcome;
use crate::auth::AuthState;
use crate::routing::ROOT_PATH;

/// GET /dashboard - placeholder for signed-in users
pub async fn show(auth: AuthState) -> RenderOutcome {
    render(&auth)
}

/// Second guard behind the access-control middleware; both must refuse a
/// signed-out request on their own.
pub fn render(auth: &AuthState) -> RenderOutcome {
    if !auth.is_signed_in() {
        return RenderOutcome::Redirect(ROOT_PATH.to_string());
    }

    RenderOutcome::Content(layout::base(
        "Dashboard",
        layout::container(html! {
            h1 class="text-3xl font-semibold" { "Dashboard" }
        }),
    ))
}
