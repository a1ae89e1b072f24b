//! The pannable/zoomable canvas hosting all group cards.
//!
//! ARCHITECTURE
//! ============
//! This component bridges the reactive UI and the imperative `canvas`
//! engine. Cards are ordinary DOM nodes positioned in world coordinates
//! inside a layer that carries the camera as a CSS
//! `translate(pan) scale(zoom)` transform, so the engine never renders;
//! it only does gesture math.
//!
//! Pointer dispatch is delegated: one listener on the container classifies
//! each press by DOM target (resize handle, card header, or background) and
//! routes it to the matching engine entry point. Cards stay presentational
//! and never touch the engine.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen::JsCast;

use canvas::camera::{Camera, Point};
use canvas::engine::{Action, Engine};
use canvas::input::{Button, ResizeDirection};
use canvas::layout::CardLayout;

use crate::components::group_card::GroupCard;
use crate::state::canvas_view::CanvasViewState;
use crate::state::groups::GroupsState;
use crate::state::ui::UiState;
use crate::util::layout::{self, BoardLayout};

/// The canvas widget: owns the interaction engine and the camera.
#[component]
pub fn BoardCanvas(initial_camera: Camera) -> impl IntoView {
    let groups = expect_context::<RwSignal<GroupsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();

    let engine = Rc::new(RefCell::new(Engine::new()));
    engine.borrow_mut().set_camera(initial_camera);

    // Keep the engine's card store in step with the authoritative group
    // list. Re-running during a gesture is harmless: the snapshot contains
    // the geometry the engine itself just produced.
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let layouts: Vec<CardLayout> = groups.with(|s| s.groups.iter().map(|bg| bg.layout).collect());
            engine.borrow_mut().load_snapshot(layouts);
        });
    }

    let on_mouse_down = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::MouseEvent| {
            let Some(button) = Button::from_dom(ev.button()) else {
                return;
            };
            let screen = event_point(&ev);
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
                return;
            };

            if let Some(handle) = closest(&target, ".resize-handle") {
                let Some((id, card_el)) = owning_card(&handle) else {
                    return;
                };
                let Some(direction) = resize_direction_of(&handle) else {
                    return;
                };
                ev.prevent_default();
                let width = f64::from(card_el.offset_width());
                let height = f64::from(card_el.offset_height());
                engine
                    .borrow_mut()
                    .on_resize_pointer_down(id, direction, screen, width, height);
            } else if let Some(header) = closest(&target, ".group-card__header") {
                // Presses on the name editor or header buttons are theirs.
                if closest(&target, "input, button").is_some() {
                    return;
                }
                let Some((id, _)) = owning_card(&header) else {
                    return;
                };
                ev.prevent_default();
                engine.borrow_mut().on_card_pointer_down(id, screen, button);
            } else if ev.target() == ev.current_target() {
                ev.prevent_default();
                ui.update(|u| u.color_picker_group = None);
                engine.borrow_mut().on_background_pointer_down(screen, button);
            }
        }
    };

    let on_mouse_move = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::MouseEvent| {
            let action = engine.borrow_mut().on_pointer_move(event_point(&ev));
            if !matches!(action, Action::None) {
                ev.prevent_default();
            }
            apply_action(action, groups, canvas_view, &engine);
        }
    };

    let on_mouse_up = {
        let engine = Rc::clone(&engine);
        move |_ev: leptos::ev::MouseEvent| {
            let action = engine.borrow_mut().on_pointer_up();
            apply_action(action, groups, canvas_view, &engine);
        }
    };

    let on_wheel = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::WheelEvent| {
            ev.prevent_default();
            let cursor = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
            let action = engine.borrow_mut().on_wheel(cursor, ev.delta_y());
            if matches!(action, Action::CameraChanged) {
                apply_action(action, groups, canvas_view, &engine);
                persist_layout(groups, &engine);
            }
        }
    };

    let world_style = move || {
        let v = canvas_view.get();
        format!("transform: translate({}px, {}px) scale({});", v.pan_x, v.pan_y, v.zoom)
    };

    view! {
        <div
            class="board-canvas"
            on:mousedown=on_mouse_down
            on:mousemove=on_mouse_move
            on:mouseup=on_mouse_up
            on:wheel=on_wheel
        >
            <div class="board-canvas__world" style=world_style>
                <For
                    each=move || groups.with(|s| s.groups.iter().map(|bg| bg.group.id).collect::<Vec<_>>())
                    key=|id| *id
                    children=move |id: Uuid| view! { <GroupCard id=id/> }
                />
            </div>
        </div>
    }
}

/// Apply an engine action to the reactive state.
fn apply_action(
    action: Action,
    groups: RwSignal<GroupsState>,
    canvas_view: RwSignal<CanvasViewState>,
    engine: &Rc<RefCell<Engine>>,
) {
    match action {
        Action::None => {}
        Action::CameraChanged => {
            let camera = engine.borrow().camera();
            canvas_view.set(CanvasViewState::from_camera(camera));
        }
        Action::CardMoved { id, x, y } => {
            groups.update(|s| s.move_card(id, x, y));
        }
        Action::CardResized { id, width, height } => {
            groups.update(|s| s.resize_card(id, width, height));
        }
        Action::CardCommitted { layout } => {
            groups.update(|s| s.set_layout(layout));
            persist_layout(groups, engine);
        }
    }
}

/// Save every card rectangle plus the camera to browser storage.
fn persist_layout(groups: RwSignal<GroupsState>, engine: &Rc<RefCell<Engine>>) {
    let cards = groups.with_untracked(GroupsState::layouts);
    let camera = engine.borrow().camera();
    layout::save(&BoardLayout { cards, camera });
}

fn event_point(ev: &leptos::ev::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

fn closest(element: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    element.closest(selector).ok().flatten()
}

/// Resolve the card element and group id owning `element`.
fn owning_card(element: &web_sys::Element) -> Option<(Uuid, web_sys::HtmlElement)> {
    let card = closest(element, ".group-card")?;
    let id = Uuid::parse_str(&card.get_attribute("data-group-id")?).ok()?;
    let html = card.dyn_into::<web_sys::HtmlElement>().ok()?;
    Some((id, html))
}

fn resize_direction_of(handle: &web_sys::Element) -> Option<ResizeDirection> {
    match handle.get_attribute("data-direction")?.as_str() {
        "right" => Some(ResizeDirection::Right),
        "bottom" => Some(ResizeDirection::Bottom),
        "corner" => Some(ResizeDirection::Corner),
        _ => None,
    }
}
