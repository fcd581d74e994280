/// Chart panel for the analytics view: grouped sentiment-distribution bars
/// and average-rating bars per product, rendered as scaled divs from the
/// aggregated stats.
use crate::analytics::ProductStats;
use crate::sentiment::Sentiment;
use leptos::*;
use std::collections::BTreeMap;

const LABELS: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

#[component]
pub fn AnalyticsPanel(stats: Signal<BTreeMap<String, ProductStats>>) -> impl IntoView {
    view! {
        <div class="analytics">
            {move || {
                let stats = stats.get();
                if stats.is_empty() {
                    return view! { <p class="info">{ "No reviews submitted yet." }</p> }.into_view();
                }

                view! {
                    <div class="charts">
                        <div class="chart">
                            <h3>{ "Sentiment Distribution" }</h3>
                            {stats.iter().map(|(product, entry)| view! {
                                <div class="chart-group">
                                    <span class="chart-label">{ product.clone() }</span>
                                    {LABELS.iter().map(|sentiment| {
                                        let count = entry.sentiment_count(*sentiment);
                                        let style = format!(
                                            "width: {}px; background-color: {};",
                                            count * 24,
                                            sentiment.color(),
                                        );
                                        view! {
                                            <div class="bar-row">
                                                <div class="bar" style=style></div>
                                                <span>{ format!("{} {}", sentiment.label(), count) }</span>
                                            </div>
                                        }
                                    }).collect::<Vec<_>>() }
                                </div>
                            }).collect::<Vec<_>>() }
                        </div>
                        <div class="chart">
                            <h3>{ "Average Rating by Product" }</h3>
                            {stats.iter().map(|(product, entry)| {
                                let style = format!(
                                    "width: {}%;",
                                    entry.average_rating / 5.0 * 100.0,
                                );
                                view! {
                                    <div class="bar-row">
                                        <span class="chart-label">{ product.clone() }</span>
                                        <div class="bar rating" style=style></div>
                                        <span>{ format!("{}", entry.average_rating) }</span>
                                    </div>
                                }
                            }).collect::<Vec<_>>() }
                        </div>
                    </div>
                }.into_view()
            }}
        </div>
    }
}
