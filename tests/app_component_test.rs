// Browser-side component tests; run with
// `wasm-pack test --headless --chrome -- --features wasm-test --no-default-features`
#![cfg(target_arch = "wasm32")]

use leptos::*;
use myfeeds::components::menu_grid::MenuGrid;
use myfeeds::store::Store;
use std::time::Duration;
use gloo_timers::future::sleep;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn menu_grid_renders_all_seeded_products() {
    let document = web_sys::window().unwrap().document().unwrap();

    let store = Store::with_menu();
    let products = Signal::derive(move || store.catalog().to_vec());
    mount_to_body(move || view! { <MenuGrid products=products/> });

    // Wait a bit for the DOM to settle
    sleep(Duration::from_millis(50)).await;

    let body_html = document.body().unwrap().inner_html();
    assert_eq!(body_html.matches("menu-card").count(), 4);

    for name in ["Pizza", "Burger", "French Fries", "Nuggets"] {
        assert!(body_html.contains(name), "missing card for {name}");
    }
    // Unreviewed products render a zero average
    assert!(body_html.contains("⭐ 0 (0 reviews)"));
}
