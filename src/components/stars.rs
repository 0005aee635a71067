use leptos::prelude::*;

use crate::catalog::star_breakdown;

/// Five stars for a store rating.
///
/// There is no half-filled glyph: the half star is a filled star drawn at
/// reduced opacity.
#[component]
pub fn StarRating(rating: f64) -> impl IntoView {
    let stars = star_breakdown(rating);

    view! {
        <span class="stars" aria-label=format!("{rating} de 5")>
            {(0..stars.full).map(|_| view! { <span class="star star-full">"★"</span> }).collect_view()}
            {stars.half.then(|| view! { <span class="star star-half">"★"</span> })}
            {(0..stars.empty).map(|_| view! { <span class="star star-empty">"☆"</span> }).collect_view()}
        </span>
    }
}
