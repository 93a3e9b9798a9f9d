use glam::Vec2;
use grm_map_edit::app::ContextActionDescriptor;
use grm_map_edit::{
    CollectionId, EditablePointCollection, EditorController, EditorHost, EditorIntent,
    EditorState, InputOutcome, Key, Modifiers, PointCollectionCapabilities, PointRef,
    PointerButton, ScaledViewport, TerrainPoint, TerrainPolygon, Viewport,
};

/// Host, der alle Rückmeldungen des Editors mitschreibt.
#[derive(Default)]
pub struct RecordingHost {
    pub viewport: ScaledViewport,
    pub free_points: Vec<TerrainPoint>,
    pub cleared: usize,
    pub deleted: usize,
    pub selected_polygons: Vec<(TerrainPolygon, bool)>,
    pub point_menus: Vec<(PointRef, Vec<ContextActionDescriptor>)>,
    pub selection_menus: Vec<Vec2>,
}

impl EditorHost for RecordingHost {
    fn viewport(&self) -> &dyn Viewport {
        &self.viewport
    }

    fn insert_free_point(&mut self, point: TerrainPoint) {
        self.free_points.push(point);
    }

    fn clear_selection(&mut self) {
        self.cleared += 1;
    }

    fn delete_selection(&mut self) {
        self.deleted += 1;
    }

    fn select_items_in(&mut self, polygon: &TerrainPolygon, additive: bool) {
        self.selected_polygons.push((polygon.clone(), additive));
    }

    fn open_point_context_menu(&mut self, point: PointRef, actions: &[ContextActionDescriptor]) {
        self.point_menus.push((point, actions.to_vec()));
    }

    fn open_selection_context_menu(&mut self, screen_pos: Vec2) {
        self.selection_menus.push(screen_pos);
    }
}

/// Controller, State und Host mit einem bearbeiteten Pfad.
///
/// Der Viewport ist die Identität: Screen-Pixel = Terrain-Einheiten.
pub struct Fixture {
    pub controller: EditorController,
    pub state: EditorState,
    pub host: RecordingHost,
    pub path: CollectionId,
}

impl Fixture {
    pub fn with_path(points: &[(f32, f32)]) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut state = EditorState::new();
        let path = state.collections.add(EditablePointCollection::new(
            points.iter().map(|&(x, y)| TerrainPoint::new(x, y)).collect(),
            PointCollectionCapabilities::path(),
        ));
        state.set_edit_points(Some(path));
        Self {
            controller: EditorController::new(),
            state,
            host: RecordingHost::default(),
            path,
        }
    }

    /// Pfad A(0,0) → B(100,0) → C(200,0).
    pub fn abc() -> Self {
        Self::with_path(&[(0.0, 0.0), (100.0, 0.0), (200.0, 0.0)])
    }

    pub fn send(&mut self, intent: EditorIntent) -> InputOutcome {
        self.controller
            .handle_intent(&mut self.state, &mut self.host, intent)
            .expect("Intent sollte ohne unerwarteten Fehler durchlaufen")
    }

    pub fn press(&mut self, x: f32, y: f32) -> InputOutcome {
        self.press_with(x, y, 1, Modifiers::NONE)
    }

    pub fn double_click(&mut self, x: f32, y: f32) -> InputOutcome {
        self.press_with(x, y, 2, Modifiers::NONE)
    }

    pub fn press_with(&mut self, x: f32, y: f32, click_count: u8, modifiers: Modifiers) -> InputOutcome {
        self.send(EditorIntent::PointerPressed {
            button: PointerButton::Primary,
            screen_pos: Vec2::new(x, y),
            click_count,
            modifiers,
        })
    }

    pub fn drag_to(&mut self, x: f32, y: f32) -> InputOutcome {
        self.move_with(x, y, true, Modifiers::NONE)
    }

    pub fn hover(&mut self, x: f32, y: f32) -> InputOutcome {
        self.move_with(x, y, false, Modifiers::NONE)
    }

    pub fn move_with(&mut self, x: f32, y: f32, primary_down: bool, modifiers: Modifiers) -> InputOutcome {
        self.send(EditorIntent::PointerMoved {
            screen_pos: Vec2::new(x, y),
            primary_down,
            modifiers,
        })
    }

    pub fn release(&mut self, x: f32, y: f32) -> InputOutcome {
        self.release_with(x, y, Modifiers::NONE)
    }

    pub fn release_with(&mut self, x: f32, y: f32, modifiers: Modifiers) -> InputOutcome {
        self.send(EditorIntent::PointerReleased {
            button: PointerButton::Primary,
            screen_pos: Vec2::new(x, y),
            modifiers,
        })
    }

    /// Klick ohne Bewegung (Drücken + Loslassen).
    pub fn click(&mut self, x: f32, y: f32) {
        self.press(x, y);
        self.release(x, y);
    }

    pub fn key_down(&mut self, key: Key, modifiers: Modifiers) -> InputOutcome {
        self.send(EditorIntent::KeyPressed { key, modifiers })
    }

    pub fn key_up(&mut self, key: Key, modifiers: Modifiers) -> InputOutcome {
        self.send(EditorIntent::KeyReleased { key, modifiers })
    }

    pub fn point_ref(&self, index: usize) -> PointRef {
        PointRef::new(self.path, index)
    }

    /// Übernommene Punkte des Pfades als Tupel.
    pub fn points(&self) -> Vec<(f32, f32)> {
        self.points_of(self.path)
    }

    pub fn points_of(&self, id: CollectionId) -> Vec<(f32, f32)> {
        self.state
            .collections
            .get(id)
            .map(|c| c.points().iter().map(|p| (p.x(), p.y())).collect())
            .unwrap_or_default()
    }
}
