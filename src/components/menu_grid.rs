/// Component to display the menu as a grid of product cards.
/// Each card shows the running star average, review count, dietary tag,
/// category, ingredients and price.
use crate::models::product::Product;
use leptos::*;

#[component]
pub fn MenuGrid(products: Signal<Vec<Product>>) -> impl IntoView {
    view! {
        <div class="menu-grid">
            {move || products.get().into_iter().map(|product| {
                let average = product.average_rating();
                view! {
                    <div class="menu-card">
                        <h3>{ product.name.clone() }</h3>
                        <p>{ format!("⭐ {} ({} reviews)", average, product.review_count) }</p>
                        <p>{ format!("{} | {}", product.dietary, product.category) }</p>
                        <p>{ product.description.clone() }</p>
                        <div class="price-tag">{ format!("₹{}", product.price) }</div>
                    </div>
                }
            }).collect::<Vec<_>>() }
        </div>
    }
}
