//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `AuthState` and `CartState` signals. Nothing routes until the
//! stored session has been read once; after that each route is wrapped in a
//! guard that either renders it or redirects per `AuthState::route_decision`.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::hooks::use_navigate;
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{login::LoginPage, product::ProductPage, products::ProductsPage};
use crate::state::auth::{AuthState, RouteAccess, RouteDecision, sign_out};
use crate::state::cart::CartState;
use crate::util::auth::install_route_guard;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let cart = RwSignal::new(CartState::default());
    provide_context(auth);
    provide_context(cart);

    Effect::new(move || {
        let restored = AuthState::restore(crate::net::web_client().session());
        log::debug!("restored auth state: authenticated={}", restored.is_authenticated());
        auth.set(restored);
    });

    view! {
        <Title text="MediCare"/>
        <Show
            when=move || !auth.with(AuthState::is_loading)
            fallback=|| view! { <div class="app-loading">"Loading..."</div> }
        >
            <Router>
                <div class="App">
                    <SessionBar/>
                    <main>
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route
                                path=StaticSegment("login")
                                view=|| view! { <Guarded access=RouteAccess::GuestOnly><LoginPage/></Guarded> }
                            />
                            <Route
                                path=StaticSegment("products")
                                view=|| view! { <Guarded access=RouteAccess::Protected><ProductsPage/></Guarded> }
                            />
                            <Route
                                path=(StaticSegment("product"), ParamSegment("id"))
                                view=|| view! { <Guarded access=RouteAccess::Protected><ProductPage/></Guarded> }
                            />
                            <Route path=StaticSegment("") view=|| view! { <Guarded access=RouteAccess::Entry>""</Guarded> }/>
                        </Routes>
                    </main>
                </div>
            </Router>
        </Show>
    }
}

/// Render `children` only when `access` allows it; otherwise redirect.
#[component]
fn Guarded(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, access, use_navigate());

    view! {
        <Show when=move || auth.with(|state| state.route_decision(access) == RouteDecision::Render)>
            {children()}
        </Show>
    }
}

/// Brand, greeting and logout for signed-in users.
#[component]
fn SessionBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            let next = sign_out(&crate::net::web_client()).await;
            auth.set(next);
        });
    };

    view! {
        <Show when=move || auth.with(AuthState::is_authenticated)>
            <header class="session-bar">
                <div>
                    <h1 class="session-bar__brand">"MediGen Pharmaceuticals"</h1>
                    {move || auth.with(AuthState::welcome_text).map(|text| view! {
                        <p class="session-bar__welcome">{text}</p>
                    })}
                </div>
                <button class="session-bar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>
        </Show>
    }
}
