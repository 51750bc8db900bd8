//! Card Tile Component
//!
//! A draggable card inside a list column. A click that never crossed the
//! drag threshold opens the card detail dialog.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::forms::format_due_date;
use crate::models::Card;

/// How many labels fit on a tile before collapsing into "+N"
const VISIBLE_LABELS: usize = 2;

#[component]
pub fn CardTile(
    card: Card,
    dnd: DndSignals,
    /// Card whose move request is still outstanding
    moving_id: ReadSignal<Option<String>>,
    #[prop(into)] on_open: Callback<Card>,
) -> impl IntoView {
    let id = card.id.clone();

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let on_mouseover = make_on_card_mouseover(dnd, id.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    // Visual state
    let tile_class = {
        let id = id.clone();
        move || {
            let mut c = String::from("card-tile");
            if dnd.dragging_id_read.with(|d| d.as_deref() == Some(id.as_str())) { c.push_str(" dragging"); }
            if dnd.drop_target_read.with(|t| matches!(t, Some(DropTarget::Card(tid)) if *tid == id)) { c.push_str(" drop-target"); }
            if moving_id.with(|m| m.as_deref() == Some(id.as_str())) { c.push_str(" in-flight"); }
            c
        }
    };

    let on_click = {
        let card = card.clone();
        move |_: web_sys::MouseEvent| {
            // Trailing click of a drag
            if dnd.drag_just_ended_read.get_untracked() || dnd.dragging_id_read.get_untracked().is_some() {
                return;
            }
            on_open.run(card.clone());
        }
    };

    let priority = card.priority;
    let hidden_labels = card.labels.len().saturating_sub(VISIBLE_LABELS);

    view! {
        <div
            class=tile_class
            on:mousedown=on_mousedown
            on:mouseover=on_mouseover
            on:mouseleave=on_mouseleave
            on:click=on_click
        >
            <h4 class="card-title">{card.title.clone()}</h4>
            {card.description.clone().filter(|d| !d.is_empty()).map(|d| view! {
                <p class="card-description">{d}</p>
            })}
            <div class="card-meta">
                {priority.map(|p| view! {
                    <span class=format!("badge priority-{}", p.as_str())>{p.as_str()}</span>
                })}
                {card.due_date.as_deref().map(|due| view! {
                    <span class="badge due-date">"📅 " {format_due_date(due)}</span>
                })}
                {card.labels.iter().take(VISIBLE_LABELS).map(|label| view! {
                    <span class="badge label">{label.clone()}</span>
                }).collect_view()}
                {(hidden_labels > 0).then(|| view! {
                    <span class="badge label more">{format!("+{}", hidden_labels)}</span>
                })}
            </div>
        </div>
    }
}
