/// Main application entry point for MyFeeds.
/// Routes between the feedback view (menu + review form) and the analytics
/// view, with the whole application state held in a single signal.
use crate::components::{
    analytics_panel::AnalyticsPanel, menu_grid::MenuGrid, review_form::ReviewForm,
    reviews_list::ReviewsList,
};
use crate::store::Store;
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use leptos_router::{Route, Router, Routes, A};
use wasm_bindgen_futures::spawn_local;

/// Outcome banner shown above the review form.
#[derive(Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Single signal holding the menu and the review collection; every
    // interaction recomputes the derived views from it.
    let (store, set_store) = create_signal(Store::with_menu());
    provide_context(store);
    provide_context(set_store);

    view! {
        <Stylesheet id="leptos" href="/pkg/myfeeds.css"/>
        <Title text="MyFeeds"/>
        <Router>
            <main class="app">
                <h1>{ "🍕 MyFeeds Feedback Analyzer" }</h1>
                <nav class="nav">
                    <A href="/">{ "Feedback" }</A>
                    <A href="/analytics">{ "Analytics" }</A>
                </nav>
                <Routes>
                    <Route path="" view=FeedbackPage/>
                    <Route path="/analytics" view=AnalyticsPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn FeedbackPage() -> impl IntoView {
    let store = expect_context::<ReadSignal<Store>>();
    let set_store = expect_context::<WriteSignal<Store>>();

    let products = Signal::derive(move || store.get().catalog().to_vec());
    // The menu is fixed, so the form can take the names eagerly.
    let product_names: Vec<String> = store
        .get_untracked()
        .catalog()
        .iter()
        .map(|p| p.name.clone())
        .collect();

    let (notice, set_notice) = create_signal(None::<Notice>);

    // Function to handle a review submission from the form.
    let submit_review = move |email: String, product: String, rating: u8, text: String| {
        let mut outcome = Ok(());
        set_store.update(|store| {
            outcome = store.submit_review(&email, &product, rating, &text).map(|_| ());
        });

        match outcome {
            Ok(()) => {
                set_notice.set(Some(Notice::Success("Thank you for your feedback!".into())));
                // Clear the banner shortly after, like the original's rerun.
                spawn_local(async move {
                    TimeoutFuture::new(1_200).await;
                    set_notice.set(None);
                });
            }
            Err(e) => set_notice.set(Some(Notice::Error(e.to_string()))),
        }
    };

    view! {
        <div>
            <h2>{ "🍽 Explore Menu" }</h2>
            <MenuGrid products=products/>
            <hr/>
            <ReviewForm
                products=product_names
                on_submit=Box::new(submit_review)
                notice=notice
            />
        </div>
    }
}

#[component]
fn AnalyticsPage() -> impl IntoView {
    let store = expect_context::<ReadSignal<Store>>();

    let stats = Signal::derive(move || store.get().analytics());
    let feed = Signal::derive(move || store.get().feed());

    view! {
        <div>
            <h2>{ "📊 Performance Insights" }</h2>
            <AnalyticsPanel stats=stats/>
            <h2>{ "📝 Recent Reviews" }</h2>
            <ReviewsList reviews=feed/>
        </div>
    }
}
