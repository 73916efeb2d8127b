//! Root component
//!
//! Provides the shared page state, then renders the cursor over the hero.

use leptos::prelude::*;

use crate::components::{Cursor, Hero};
use crate::state::provide_landing_state;

#[component]
pub fn App() -> impl IntoView {
    provide_landing_state();

    view! {
        <main class="app">
            <Cursor />
            <Hero />
        </main>
    }
}
