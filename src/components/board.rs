//! Board View Component
//!
//! Renders the lane strip for one board and owns the board snapshot.
//! Drag drops are applied to the snapshot optimistically before the backend
//! call; a failed call throws the optimistic state away and reloads the
//! board from the server. CRUD operations patch the snapshot structurally
//! after the backend confirms them.

use leptos::prelude::*;
use leptos::task::spawn_local;

use leptos_dnd::{
    bind_global_mouseup, create_dnd_signals, make_on_lane_slot_mouseenter, make_on_mouseleave,
    DndSignals, DragKind, DropTarget,
};

use crate::api;
use crate::components::{CardDraft, CardModal, LaneColumn, LaneModal, SearchBar};
use crate::context::AppContext;
use crate::models::{Board, Card, Lane};
use crate::reorder::{apply_reorder, DragLocation, DragResult, ItemKind, RemoteMutation};
use crate::search::filter_board;

/// Loading phase of the board view
#[derive(Clone, Debug, PartialEq)]
pub enum BoardPhase {
    Loading,
    Loaded(Board),
    Failed(String),
}

/// Which modal is open and which entity it is bound to
#[derive(Clone, Debug, PartialEq)]
pub enum ModalState {
    Idle,
    /// `None` = create a new lane
    EditingLane(Option<Lane>),
    /// `None` card = create a new card in the lane
    EditingCard { lane_id: i64, card: Option<Card> },
}

/// Translate a finished drop gesture into a `DragResult` against the given
/// snapshot. Drop slots are insertion points in the rendered list (before
/// removal); the destination index of a `DragResult` is interpreted after
/// removal, so slots past the source shift down by one.
fn drag_result_for_drop(
    board: &Board,
    kind: DragKind,
    item_id: i64,
    target: DropTarget,
) -> Option<DragResult> {
    match (kind, target) {
        (DragKind::Lane, DropTarget::LaneSlot(slot)) => {
            let source_index = board.lanes.iter().position(|l| l.id == item_id)?;
            let index = if slot > source_index { slot - 1 } else { slot };
            Some(DragResult {
                kind: ItemKind::Lane,
                item_id,
                source: DragLocation { container_id: board.id, index: source_index },
                destination: Some(DragLocation { container_id: board.id, index }),
            })
        }
        (DragKind::Card, DropTarget::CardSlot(lane_id, slot)) => {
            let (source_lane, source_index) = board.lanes.iter().find_map(|l| {
                l.cards
                    .iter()
                    .position(|c| c.id == item_id)
                    .map(|i| (l.id, i))
            })?;
            let index = if lane_id == source_lane && slot > source_index {
                slot - 1
            } else {
                slot
            };
            Some(DragResult {
                kind: ItemKind::Card,
                item_id,
                source: DragLocation { container_id: source_lane, index: source_index },
                destination: Some(DragLocation { container_id: lane_id, index }),
            })
        }
        // Kind and slot type disagree (stale hover state)
        _ => None,
    }
}

/// Issue the remote half of an applied reorder
async fn push_mutation(mutation: &RemoteMutation) -> Result<(), api::ApiError> {
    match mutation {
        RemoteMutation::ReorderLanes { board_id, lane_order } => {
            api::reorder_lanes(*board_id, lane_order).await.map(|_| ())
        }
        RemoteMutation::MoveCard {
            card_id,
            lane_id,
            position,
            card_order,
            source_reorder,
        } => {
            api::move_card(*card_id, *lane_id, *position as i64, card_order).await?;
            if let Some((source_lane, order)) = source_reorder {
                api::reorder_cards(*source_lane, order).await?;
            }
            Ok(())
        }
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Board view with lanes, cards, search and drag-and-drop
#[component]
pub fn BoardView(board_id: i64) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (phase, set_phase) = signal(BoardPhase::Loading);
    let (search_term, set_search_term) = signal(String::new());
    let (modal, set_modal) = signal(ModalState::Idle);

    // Fetch the board on mount and whenever a reload is requested
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::get_board(board_id).await {
                Ok(board) => set_phase.set(BoardPhase::Loaded(board)),
                Err(e) => {
                    web_sys::console::log_1(&format!("[BOARD] load failed: {}", e).into());
                    set_phase.set(BoardPhase::Failed("Failed to load board data".to_string()));
                }
            }
        });
    });

    // Reload the snapshot from the server, discarding local state
    let reload_board = move || {
        spawn_local(async move {
            match api::get_board(board_id).await {
                Ok(board) => set_phase.set(BoardPhase::Loaded(board)),
                Err(e) => {
                    web_sys::console::log_1(&format!("[BOARD] reload failed: {}", e).into());
                    set_phase.set(BoardPhase::Failed("Failed to load board data".to_string()));
                }
            }
        });
    };

    // DnD signals + global mouseup for drop handling
    let dnd = create_dnd_signals();
    // The mouseup listener outlives this view (it is forgotten on the
    // document), so a stale firing after a board switch must bail out
    bind_global_mouseup(dnd, move |kind, item_id, target| {
        let Some(BoardPhase::Loaded(current)) = phase.try_get_untracked() else {
            return;
        };
        let Some(drag) = drag_result_for_drop(&current, kind, item_id, target) else {
            return;
        };
        let Some((next, mutation)) = apply_reorder(&current, &drag) else {
            return;
        };

        // Optimistic: the snapshot is replaced before any network call
        set_phase.set(BoardPhase::Loaded(next));

        spawn_local(async move {
            if let Err(e) = push_mutation(&mutation).await {
                // Server is truth: drop the optimistic state and re-fetch
                web_sys::console::log_1(
                    &format!("[BOARD] reorder failed, reloading: {}", e).into(),
                );
                reload_board();
            }
        });
    });

    // Structural snapshot patches shared by the CRUD handlers
    let with_board = move |f: &dyn Fn(&mut Board)| {
        if let BoardPhase::Loaded(board) = phase.get_untracked() {
            let mut next = board;
            f(&mut next);
            set_phase.set(BoardPhase::Loaded(next));
        }
    };

    // Lane CRUD
    let save_lane = Callback::new(move |(lane_id, name): (Option<i64>, String)| {
        set_modal.set(ModalState::Idle);
        spawn_local(async move {
            match lane_id {
                Some(id) => {
                    let args = api::UpdateLaneArgs { name: Some(&name), position: None };
                    match api::update_lane(id, &args).await {
                        Ok(updated) => with_board(&|b| {
                            if let Some(lane) = b.lanes.iter_mut().find(|l| l.id == updated.id) {
                                *lane = updated.clone();
                            }
                        }),
                        Err(e) => {
                            web_sys::console::log_1(&format!("[BOARD] {}", e).into());
                            ctx.set_error("Failed to save lane");
                        }
                    }
                }
                None => match api::create_lane(board_id, &name, None).await {
                    Ok(created) => with_board(&|b| b.lanes.push(created.clone())),
                    Err(e) => {
                        web_sys::console::log_1(&format!("[BOARD] {}", e).into());
                        ctx.set_error("Failed to save lane");
                    }
                },
            }
        });
    });

    let delete_lane = Callback::new(move |lane_id: i64| {
        if !confirm("Are you sure you want to delete this lane and all its cards?") {
            return;
        }
        spawn_local(async move {
            match api::delete_lane(lane_id).await {
                Ok(()) => with_board(&|b| {
                    b.lanes.retain(|l| l.id != lane_id);
                    // Keep positions contiguous after the removal
                    for (i, lane) in b.lanes.iter_mut().enumerate() {
                        lane.position = i as i64;
                    }
                }),
                Err(e) => {
                    web_sys::console::log_1(&format!("[BOARD] {}", e).into());
                    ctx.set_error("Failed to delete lane");
                }
            }
        });
    });

    // Card CRUD
    let save_card = Callback::new(move |(lane_id, card_id, draft): (i64, Option<i64>, CardDraft)| {
        set_modal.set(ModalState::Idle);
        spawn_local(async move {
            match card_id {
                Some(id) => {
                    let args = api::UpdateCardArgs {
                        title: Some(&draft.title),
                        description: Some(draft.description.as_deref().unwrap_or("")),
                        color: Some(draft.color),
                        due_date: Some(draft.due_date.as_deref()),
                    };
                    match api::update_card(id, &args).await {
                        Ok(updated) => with_board(&|b| {
                            if let Some(lane) = b.lanes.iter_mut().find(|l| l.id == updated.lane_id)
                            {
                                if let Some(card) =
                                    lane.cards.iter_mut().find(|c| c.id == updated.id)
                                {
                                    *card = updated.clone();
                                }
                            }
                        }),
                        Err(e) => {
                            web_sys::console::log_1(&format!("[BOARD] {}", e).into());
                            ctx.set_error("Failed to save card");
                        }
                    }
                }
                None => {
                    let args = api::CreateCardArgs {
                        title: &draft.title,
                        description: draft.description.as_deref(),
                        color: draft.color,
                        position: None,
                        due_date: draft.due_date.as_deref(),
                    };
                    match api::create_card(lane_id, &args).await {
                        Ok(created) => with_board(&|b| {
                            if let Some(lane) = b.lanes.iter_mut().find(|l| l.id == lane_id) {
                                lane.cards.push(created.clone());
                            }
                        }),
                        Err(e) => {
                            web_sys::console::log_1(&format!("[BOARD] {}", e).into());
                            ctx.set_error("Failed to save card");
                        }
                    }
                }
            }
        });
    });

    let delete_card = Callback::new(move |card_id: i64| {
        if !confirm("Are you sure you want to delete this card?") {
            return;
        }
        spawn_local(async move {
            match api::delete_card(card_id).await {
                Ok(()) => with_board(&|b| {
                    for lane in b.lanes.iter_mut() {
                        if lane.cards.iter().any(|c| c.id == card_id) {
                            lane.cards.retain(|c| c.id != card_id);
                            // Keep positions contiguous after the removal
                            for (i, card) in lane.cards.iter_mut().enumerate() {
                                card.position = i as i64;
                            }
                        }
                    }
                }),
                Err(e) => {
                    web_sys::console::log_1(&format!("[BOARD] {}", e).into());
                    ctx.set_error("Failed to delete card");
                }
            }
        });
    });

    // Modal openers
    let add_lane = move |_| set_modal.set(ModalState::EditingLane(None));
    let edit_lane = Callback::new(move |lane: Lane| set_modal.set(ModalState::EditingLane(Some(lane))));
    let add_card =
        Callback::new(move |lane_id: i64| set_modal.set(ModalState::EditingCard { lane_id, card: None }));
    let edit_card = Callback::new(move |card: Card| {
        set_modal.set(ModalState::EditingCard { lane_id: card.lane_id, card: Some(card) })
    });
    let close_modal = Callback::new(move |_: ()| set_modal.set(ModalState::Idle));

    // Search is a view projection over the snapshot; it never touches the
    // snapshot itself and never reaches the backend
    let filtered = move || match phase.get() {
        BoardPhase::Loaded(board) => Some(filter_board(&board, &search_term.get())),
        _ => None,
    };
    let on_search = Callback::new(move |term: String| set_search_term.set(term));

    // Track only the phase variant here, so snapshot replacements re-render
    // the lane strip without remounting the whole view (the search box would
    // lose its state otherwise)
    let phase_tag = Memo::new(move |_| match phase.get() {
        BoardPhase::Loading => PhaseTag::Loading,
        BoardPhase::Loaded(_) => PhaseTag::Loaded,
        BoardPhase::Failed(_) => PhaseTag::Failed,
    });
    let board_name = move || match phase.get() {
        BoardPhase::Loaded(board) => board.name,
        _ => String::new(),
    };
    let board_description = move || match phase.get() {
        BoardPhase::Loaded(board) => board.description,
        _ => String::new(),
    };
    let failure_message = move || match phase.get() {
        BoardPhase::Failed(message) => message,
        _ => String::new(),
    };

    view! {
        {move || match phase_tag.get() {
            PhaseTag::Loading => view! { <div class="board-message">"Loading board..."</div> }.into_any(),
            PhaseTag::Failed => {
                view! { <div class="board-message error">{failure_message}</div> }.into_any()
            }
            PhaseTag::Loaded => {
                view! {
                    <div class="board">
                        <div class="board-header">
                            <h1 class="board-title">{board_name}</h1>
                            <button class="btn btn-primary" on:click=add_lane>"Add Lane"</button>
                        </div>

                        {move || {
                            let description = board_description();
                            (!description.is_empty()).then(|| view! {
                                <div class="board-description">{description}</div>
                            })
                        }}

                        <SearchBar
                            on_search=on_search
                            placeholder="Search cards by title or description..."
                        />

                        <div class="lane-strip">
                            <LaneSlot dnd=dnd index=0 />
                            <For
                                each=move || filtered().map(|b| b.lanes).unwrap_or_default()
                                // Key on the full lane value so edits, moves and
                                // card changes all force a re-render
                                key=|lane| lane.clone()
                                children=move |lane| {
                                    // Positions are contiguous, so the slot after a
                                    // lane is its position + 1
                                    let slot_after = (lane.position + 1) as usize;
                                    view! {
                                        <LaneColumn
                                            lane=lane
                                            dnd=dnd
                                            on_add_card=add_card
                                            on_edit_card=edit_card
                                            on_delete_card=delete_card
                                            on_edit_lane=edit_lane
                                            on_delete_lane=delete_lane
                                        />
                                        <LaneSlot dnd=dnd index=slot_after />
                                    }
                                }
                            />
                        </div>

                        {move || match modal.get() {
                            ModalState::Idle => view! { <div></div> }.into_any(),
                            ModalState::EditingLane(lane) => view! {
                                <LaneModal lane=lane on_save=save_lane on_close=close_modal />
                            }
                            .into_any(),
                            ModalState::EditingCard { lane_id, card } => view! {
                                <CardModal lane_id=lane_id card=card on_save=save_card on_close=close_modal />
                            }
                            .into_any(),
                        }}
                    </div>
                }
                .into_any()
            }
        }}
    }
}

/// Phase variant without its payload, for coarse view switching
#[derive(Clone, Copy, PartialEq)]
enum PhaseTag {
    Loading,
    Loaded,
    Failed,
}

/// Drop slot between lanes in the horizontal strip
#[component]
pub fn LaneSlot(dnd: DndSignals, index: usize) -> impl IntoView {
    let on_mouseenter = make_on_lane_slot_mouseenter(dnd, index);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_active = move || {
        matches!(dnd.drop_target_read.get(), Some(DropTarget::LaneSlot(i)) if i == index)
    };
    let is_dragging = move || matches!(dnd.dragging_read.get(), Some((DragKind::Lane, _)));

    let slot_class = move || {
        let mut c = String::from("lane-slot");
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Card, CardColor};

    fn card(id: i64, lane_id: i64, position: i64) -> Card {
        Card {
            id,
            title: format!("Card {}", id),
            description: None,
            color: CardColor::White,
            position,
            due_date: None,
            lane_id,
        }
    }

    fn board() -> Board {
        Board {
            id: 1,
            name: "Board".to_string(),
            description: String::new(),
            lanes: vec![
                Lane {
                    id: 10,
                    name: "Todo".to_string(),
                    position: 0,
                    board_id: 1,
                    cards: vec![card(100, 10, 0), card(101, 10, 1)],
                },
                Lane {
                    id: 11,
                    name: "Done".to_string(),
                    position: 1,
                    board_id: 1,
                    cards: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_lane_slot_past_source_shifts_down() {
        let b = board();
        // Slot 2 sits after both lanes; dragging lane 10 there means
        // post-removal index 1
        let drag = drag_result_for_drop(&b, DragKind::Lane, 10, DropTarget::LaneSlot(2)).unwrap();
        assert_eq!(drag.source.index, 0);
        assert_eq!(drag.destination.unwrap().index, 1);
    }

    #[test]
    fn test_lane_slot_before_source_is_unchanged() {
        let b = board();
        let drag = drag_result_for_drop(&b, DragKind::Lane, 11, DropTarget::LaneSlot(0)).unwrap();
        assert_eq!(drag.source.index, 1);
        assert_eq!(drag.destination.unwrap().index, 0);
    }

    #[test]
    fn test_card_slot_in_same_lane_adjusts() {
        let b = board();
        let drag =
            drag_result_for_drop(&b, DragKind::Card, 100, DropTarget::CardSlot(10, 2)).unwrap();
        assert_eq!(drag.source, DragLocation { container_id: 10, index: 0 });
        assert_eq!(drag.destination.unwrap(), DragLocation { container_id: 10, index: 1 });
    }

    #[test]
    fn test_card_slot_in_other_lane_keeps_index() {
        let b = board();
        let drag =
            drag_result_for_drop(&b, DragKind::Card, 101, DropTarget::CardSlot(11, 0)).unwrap();
        assert_eq!(drag.source, DragLocation { container_id: 10, index: 1 });
        assert_eq!(drag.destination.unwrap(), DragLocation { container_id: 11, index: 0 });
    }

    #[test]
    fn test_unknown_item_or_mismatched_slot_is_none() {
        let b = board();
        assert!(drag_result_for_drop(&b, DragKind::Card, 999, DropTarget::CardSlot(10, 0)).is_none());
        assert!(drag_result_for_drop(&b, DragKind::Lane, 10, DropTarget::CardSlot(10, 0)).is_none());
        assert!(drag_result_for_drop(&b, DragKind::Card, 100, DropTarget::LaneSlot(0)).is_none());
    }
}
