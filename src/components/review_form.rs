use crate::app::Notice;
use leptos::*;
use leptos::ev::SubmitEvent;

#[component]
pub fn ReviewForm(
    products: Vec<String>,
    on_submit: Box<dyn Fn(String, String, u8, String)>,
    notice: ReadSignal<Option<Notice>>,
) -> impl IntoView {
    let first_product = products.first().cloned().unwrap_or_default();

    let (email, set_email) = create_signal(String::new());
    let (product, set_product) = create_signal(first_product);
    let (rating, set_rating) = create_signal(3u8); // Default rating to 3
    let (text, set_text) = create_signal(String::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit(email.get(), product.get(), rating.get(), text.get());
    };

    view! {
        <form class="review-form" on:submit=handle_submit>
            <h3>{ "✍ Submit Review" }</h3>
            <input
                type="email"
                placeholder="Email Address"
                prop:value=email
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <select on:change=move |ev| set_product.set(event_target_value(&ev))>
                {products.iter().map(|name| view! {
                    <option value={name.clone()}>{ name.clone() }</option>
                }).collect::<Vec<_>>() }
            </select>
            <label>{ move || format!("Rate the Item: {}", rating.get()) }</label>
            <input
                type="range"
                min="1"
                max="5"
                prop:value=move || rating.get().to_string()
                on:input=move |ev| set_rating.set(event_target_value(&ev).parse::<u8>().unwrap_or(3))
            />
            <textarea
                placeholder="Write your feedback"
                prop:value=text
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <button type="submit">{ "Submit Review" }</button>
            {move || notice.get().map(|notice| match notice {
                Notice::Success(message) => view! { <p class="banner success">{ message }</p> },
                Notice::Error(message) => view! { <p class="banner error">{ message }</p> },
            })}
        </form>
    }
}
