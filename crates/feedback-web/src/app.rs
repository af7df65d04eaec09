//! Main Leptos application component with routing

use leptos::*;
use leptos_router::*;

use crate::pages::{admin::AdminDashboard, not_found::NotFound, submit::SubmitPage};

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Header/>
                <div class="content">
                    <Routes>
                        <Route path="/" view=SubmitPage/>
                        <Route path="/admin" view=AdminDashboard/>
                        <Route path="/*any" view=NotFound/>
                    </Routes>
                </div>
            </main>
        </Router>
    }
}

/// Application header with navigation
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-content">
                <h1 class="logo">
                    <A href="/">"Feedback Insights"</A>
                </h1>
                <nav class="nav">
                    <A href="/" class="nav-link">"Submit"</A>
                    <A href="/admin" class="nav-link">"Admin"</A>
                </nav>
            </div>
        </header>
    }
}
