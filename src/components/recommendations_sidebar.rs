//! Recommendations Sidebar
//!
//! Read-only view of the server's suggestions for the board.
//! Loaded once each time the sidebar is opened.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::forms::format_due_date;
use crate::models::{List, Recommendation};

#[component]
pub fn RecommendationsSidebar(
    board_id: String,
    /// Used to show list titles instead of raw ids in move suggestions
    #[prop(into)] lists: Signal<Vec<List>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (recommendations, set_recommendations) = signal(None::<Recommendation>);
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match ctx.api().get_recommendations(&board_id).await {
            Ok(rec) => {
                log::debug!(
                    "recommendations: {} due, {} moves, {} groups",
                    rec.due_date_suggestions.len(),
                    rec.move_suggestions.len(),
                    rec.related_groups.len()
                );
                set_recommendations.try_set(Some(rec));
            }
            Err(e) => ctx.report(&e, "Could not load recommendations."),
        }
        set_loading.try_set(false);
    });

    let list_name = move |list_id: &str| {
        lists.with(|ls| ls.iter().find(|l| l.id == list_id).map(|l| l.title.clone()))
            .unwrap_or_else(|| list_id.to_string())
    };

    view! {
        <aside class="recommendations-sidebar">
            <div class="sidebar-header">
                <h2>"AI Recommendations"</h2>
                <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
            </div>

            {move || {
                if loading.get() {
                    return view! { <div class="spinner" /> }.into_any();
                }
                let Some(rec) = recommendations.get() else {
                    return view! { <p class="muted">"No recommendations available"</p> }.into_any();
                };
                if rec.is_empty() {
                    return view! { <p class="muted">"No recommendations at this time. Keep working on your board!"</p> }.into_any();
                }
                view! {
                    {(!rec.due_date_suggestions.is_empty()).then(|| view! {
                        <section class="rec-section">
                            <h3>"Due Date Suggestions"</h3>
                            {rec.due_date_suggestions.iter().map(|s| view! {
                                <div class="rec-item">
                                    <p class="rec-card-title">{s.card_title.clone()}</p>
                                    <p class="rec-reason">{s.reason.clone()}</p>
                                    <span class="badge">{format_due_date(&s.suggested_due)}</span>
                                </div>
                            }).collect_view()}
                        </section>
                    })}
                    {(!rec.move_suggestions.is_empty()).then(|| view! {
                        <section class="rec-section">
                            <h3>"Move Suggestions"</h3>
                            {rec.move_suggestions.iter().map(|s| view! {
                                <div class="rec-item">
                                    <p class="rec-card-title">{s.card_title.clone()}</p>
                                    <p class="rec-reason">{s.reason.clone()}</p>
                                    <span class="badge">"→ " {list_name(&s.suggested_list_id)}</span>
                                </div>
                            }).collect_view()}
                        </section>
                    })}
                    {(!rec.related_groups.is_empty()).then(|| view! {
                        <section class="rec-section">
                            <h3>"Related Groups"</h3>
                            {rec.related_groups.iter().map(|g| view! {
                                <div class="rec-item">
                                    <p class="rec-reason">{g.reason.clone()}</p>
                                    <div class="badge-row">
                                        {g.cards.iter().map(|c| view! {
                                            <span class="badge secondary">{c.title.clone()}</span>
                                        }).collect_view()}
                                    </div>
                                </div>
                            }).collect_view()}
                        </section>
                    })}
                }.into_any()
            }}
        </aside>
    }
}
