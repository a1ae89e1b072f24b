use crate::camera::{Camera, Point};
use crate::consts::{MAX_ZOOM, MIN_CARD_HEIGHT, MIN_CARD_WIDTH, MIN_ZOOM};
use crate::input::{Button, Gesture, ResizeDirection};
use crate::layout::{CardId, CardLayout, CardPatch, LayoutStore};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Action returned from input handlers for the host to process.
///
/// `CardMoved` / `CardResized` are live geometry updates emitted on every
/// pointer-move during a gesture; `CardCommitted` fires once on release so
/// the host can persist the final rectangle and notify its owner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    None,
    CameraChanged,
    CardMoved { id: CardId, x: f64, y: f64 },
    CardResized { id: CardId, width: f64, height: f64 },
    CardCommitted { layout: CardLayout },
}

/// The canvas interaction engine.
///
/// Owns the camera, the card layout store, and the active gesture. The host
/// feeds it pointer events (pre-dispatched by DOM target: background, card
/// header, or resize handle) and applies the returned [`Action`]s.
pub struct Engine {
    pub camera: Camera,
    pub layout: LayoutStore,
    gesture: Gesture,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            layout: LayoutStore::new(),
            gesture: Gesture::Idle,
        }
    }
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Replace all card layouts from a host snapshot.
    pub fn load_snapshot(&mut self, cards: Vec<CardLayout>) {
        self.layout.load_snapshot(cards);
    }

    /// Insert or replace one card layout.
    pub fn insert_card(&mut self, card: CardLayout) {
        self.layout.insert(card);
    }

    /// Remove a card layout. Safe mid-gesture: a drag or resize of the
    /// removed card degrades to no-op moves and emits no commit.
    pub fn remove_card(&mut self, id: &CardId) {
        self.layout.remove(id);
    }

    /// Restore a previously saved camera, clamping zoom into range.
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = Camera {
            pan_x: camera.pan_x,
            pan_y: camera.pan_y,
            zoom: camera.zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        };
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// The active gesture.
    #[must_use]
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// The card currently being dragged, if any.
    #[must_use]
    pub fn dragging_card(&self) -> Option<CardId> {
        match self.gesture {
            Gesture::DraggingCard { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Whether the canvas background is being panned.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.gesture, Gesture::Panning { .. })
    }

    /// Look up a card layout by id.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&CardLayout> {
        self.layout.get(id)
    }

    // --- Input events ---

    /// Pointer-down on the canvas background: begin panning.
    ///
    /// Only the primary button pans, and only from idle (a stray second
    /// button press mid-gesture is ignored).
    pub fn on_background_pointer_down(&mut self, screen: Point, button: Button) -> Action {
        if button != Button::Primary || self.gesture.is_active() {
            return Action::None;
        }
        self.gesture = Gesture::Panning {
            anchor: Point::new(screen.x - self.camera.pan_x, screen.y - self.camera.pan_y),
        };
        Action::None
    }

    /// Pointer-down on a card header: begin dragging that card.
    ///
    /// The grab offset (screen distance from the card origin to the pointer)
    /// is held fixed so the card does not jump under the cursor.
    pub fn on_card_pointer_down(&mut self, id: CardId, screen: Point, button: Button) -> Action {
        if button != Button::Primary || self.gesture.is_active() {
            return Action::None;
        }
        let Some(card) = self.layout.get(&id) else {
            return Action::None;
        };
        let origin_screen = self.camera.world_to_screen(Point::new(card.x, card.y));
        self.gesture = Gesture::DraggingCard {
            id,
            grab: Point::new(screen.x - origin_screen.x, screen.y - origin_screen.y),
        };
        Action::None
    }

    /// Pointer-down on a resize handle: begin resizing that card.
    ///
    /// `start_width` / `start_height` are the card's rendered dimensions at
    /// gesture start. Cards that have never been explicitly sized render at
    /// their content size, so the store's numbers may disagree with what is
    /// on screen; the measured ones win.
    pub fn on_resize_pointer_down(
        &mut self,
        id: CardId,
        direction: ResizeDirection,
        screen: Point,
        start_width: f64,
        start_height: f64,
    ) -> Action {
        if self.gesture.is_active() || self.layout.get(&id).is_none() {
            return Action::None;
        }
        self.gesture = Gesture::ResizingCard { id, direction, start_screen: screen, start_width, start_height };
        Action::None
    }

    /// Pointer-move: advance the active gesture.
    pub fn on_pointer_move(&mut self, screen: Point) -> Action {
        match self.gesture {
            Gesture::Idle => Action::None,
            Gesture::Panning { anchor } => {
                self.camera.pan_x = screen.x - anchor.x;
                self.camera.pan_y = screen.y - anchor.y;
                Action::CameraChanged
            }
            Gesture::DraggingCard { id, grab } => {
                let world = self.camera.screen_to_world(Point::new(screen.x - grab.x, screen.y - grab.y));
                let applied = self
                    .layout
                    .apply_patch(&id, CardPatch { x: Some(world.x), y: Some(world.y), ..CardPatch::default() });
                if applied {
                    Action::CardMoved { id, x: world.x, y: world.y }
                } else {
                    Action::None
                }
            }
            Gesture::ResizingCard { id, direction, start_screen, start_width, start_height } => {
                let dx = self.camera.screen_dist_to_world(screen.x - start_screen.x);
                let dy = self.camera.screen_dist_to_world(screen.y - start_screen.y);
                let width = if direction.affects_width() {
                    (start_width + dx).max(MIN_CARD_WIDTH)
                } else {
                    start_width
                };
                let height = if direction.affects_height() {
                    (start_height + dy).max(MIN_CARD_HEIGHT)
                } else {
                    start_height
                };
                let applied = self.layout.apply_patch(
                    &id,
                    CardPatch { width: Some(width), height: Some(height), ..CardPatch::default() },
                );
                if applied {
                    Action::CardResized { id, width, height }
                } else {
                    Action::None
                }
            }
        }
    }

    /// Pointer-up: end the active gesture.
    ///
    /// Drags and resizes commit the card's final rectangle; pans end
    /// silently (the camera was already updated on each move).
    pub fn on_pointer_up(&mut self) -> Action {
        let ended = std::mem::take(&mut self.gesture);
        match ended {
            Gesture::Idle | Gesture::Panning { .. } => Action::None,
            Gesture::DraggingCard { id, .. } | Gesture::ResizingCard { id, .. } => match self.layout.get(&id) {
                Some(layout) => Action::CardCommitted { layout: *layout },
                None => Action::None,
            },
        }
    }

    /// Wheel event: step the zoom toward the cursor.
    ///
    /// Positive `delta_y` (scrolling down) zooms out by one notch, negative
    /// zooms in, matching browser wheel conventions.
    pub fn on_wheel(&mut self, cursor: Point, delta_y: f64) -> Action {
        if delta_y == 0.0 {
            return Action::None;
        }
        let steps = if delta_y > 0.0 { -1.0 } else { 1.0 };
        if self.camera.zoom_at(cursor, steps) {
            Action::CameraChanged
        } else {
            Action::None
        }
    }
}
