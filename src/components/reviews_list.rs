use crate::models::review::Review;
use leptos::*;

/// Most-recent-first review feed. Each entry is bordered with its
/// sentiment color.
#[component]
pub fn ReviewsList(reviews: Signal<Vec<Review>>) -> impl IntoView {
    view! {
        <div class="reviews">
            {move || reviews.get().into_iter().map(|review| {
                let border = format!("border-color: {};", review.sentiment.color());
                view! {
                    <div class="review-box" style=border>
                        <b>{ review.email.clone() }</b>
                        { format!(" | {} | {}", review.product, review.sentiment.label()) }
                        <br/>
                        { "⭐".repeat(review.rating as usize) }
                        <br/>
                        { format!("\"{}\"", review.text) }
                    </div>
                }
            }).collect::<Vec<_>>() }
        </div>
    }
}
