//! Lane Column Component
//!
//! One vertical lane with its ordered cards and drop slots between them.

use leptos::prelude::*;

use leptos_dnd::{
    make_on_card_slot_mouseenter, make_on_mousedown, make_on_mouseleave, DndSignals, DragKind,
    DropTarget,
};

use crate::components::CardTile;
use crate::models::{Card, Lane};

/// Lane column with header actions, card list and add-card button
#[component]
pub fn LaneColumn(
    lane: Lane,
    dnd: DndSignals,
    on_add_card: Callback<i64>,
    on_edit_card: Callback<Card>,
    on_delete_card: Callback<i64>,
    on_edit_lane: Callback<Lane>,
    on_delete_lane: Callback<i64>,
) -> impl IntoView {
    let lane_id = lane.id;
    let lane_for_edit = lane.clone();
    let cards = lane.cards.clone();

    let on_mousedown = make_on_mousedown(dnd, DragKind::Lane, lane_id);

    let is_dragging =
        move || matches!(dnd.dragging_read.get(), Some((DragKind::Lane, id)) if id == lane_id);
    let lane_class = move || {
        let mut c = String::from("lane");
        if is_dragging() {
            c.push_str(" dragging");
        }
        c
    };

    view! {
        <div class=lane_class on:mousedown=on_mousedown>
            <div class="lane-header">
                <h3 class="lane-name">{lane.name.clone()}</h3>
                <div class="lane-actions">
                    <button
                        class="lane-action-btn"
                        on:click=move |_| on_edit_lane.run(lane_for_edit.clone())
                    >
                        "Edit"
                    </button>
                    <button
                        class="lane-action-btn danger"
                        on:click=move |_| on_delete_lane.run(lane_id)
                    >
                        "Delete"
                    </button>
                </div>
            </div>

            <div class="lane-cards">
                <CardSlot dnd=dnd lane_id=lane_id index=0 />
                <For
                    each=move || cards.clone()
                    // Key on the full card value so any edit re-renders the tile
                    key=|card| card.clone()
                    children=move |card| {
                        // Positions are contiguous, so the slot after a card
                        // is its position + 1
                        let slot_after = (card.position + 1) as usize;
                        view! {
                            <CardTile
                                card=card
                                dnd=dnd
                                on_edit=on_edit_card
                                on_delete=on_delete_card
                            />
                            <CardSlot dnd=dnd lane_id=lane_id index=slot_after />
                        }
                    }
                />
            </div>

            <button class="btn btn-secondary add-card-btn" on:click=move |_| on_add_card.run(lane_id)>
                "+ Add Card"
            </button>
        </div>
    }
}

/// Drop slot between cards in a lane (also the only target in an empty lane)
#[component]
pub fn CardSlot(dnd: DndSignals, lane_id: i64, index: usize) -> impl IntoView {
    let on_mouseenter = make_on_card_slot_mouseenter(dnd, lane_id, index);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_active = move || {
        matches!(
            dnd.drop_target_read.get(),
            Some(DropTarget::CardSlot(l, i)) if l == lane_id && i == index
        )
    };
    let is_dragging = move || matches!(dnd.dragging_read.get(), Some((DragKind::Card, _)));

    let slot_class = move || {
        let mut c = String::from("card-slot");
        if !is_dragging() {
            c.push_str(" hidden");
        }
        if is_active() {
            c.push_str(" active");
        }
        c
    };

    view! {
        <div
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
