use verlet_sandbox::{
    Bounds, Command, GridConfig, Mode, NoOpStepObserver, Press, Release, Sandbox, SimConfig, Vec2,
};
use wasm_bindgen::prelude::*;

/// Browser shell around a [`Sandbox`]. The page forwards pointer and key
/// events and redraws from the flat buffers returned here.
#[wasm_bindgen]
pub struct SandboxDemo {
    sandbox: Sandbox<f32>,
    pointer: Vec2<f32>,
    drawing: bool,
}

#[wasm_bindgen]
impl SandboxDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<SandboxDemo, JsValue> {
        let config = SimConfig::new().with_bounds(Bounds::from_size(width, height));
        let sandbox = Sandbox::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(SandboxDemo {
            sandbox,
            pointer: Vec2::zero(),
            drawing: false,
        })
    }

    /// Left button down. Returns 0 placed, 1 link started, 2 cut started.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> u8 {
        self.pointer = Vec2::new(x, y);
        match self.sandbox.press(self.pointer) {
            Press::Placed(_) => 0,
            Press::LinkStarted(_) => 1,
            Press::CutStarted => 2,
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
        if self.drawing {
            self.sandbox.extend_polyline(self.pointer);
        }
    }

    /// Left button up. Returns the number of constraints added or cut.
    pub fn pointer_up(&mut self, x: f32, y: f32) -> usize {
        self.pointer = Vec2::new(x, y);
        match self.sandbox.release(self.pointer) {
            Release::Linked(_) => 1,
            Release::Cut(n) => n,
            Release::Nothing => 0,
        }
    }

    pub fn toggle_pin(&mut self, x: f32, y: f32) {
        self.sandbox.toggle_pin_at(Vec2::new(x, y));
    }

    pub fn delete_at(&mut self, x: f32, y: f32) -> usize {
        self.sandbox.delete_at(Vec2::new(x, y))
    }

    /// Start or finish a freehand rope at the pointer.
    pub fn set_drawing(&mut self, drawing: bool) {
        self.drawing = drawing;
        if drawing {
            self.sandbox.extend_polyline(self.pointer);
        } else {
            self.sandbox.end_polyline();
        }
    }

    pub fn spawn_cloth(&mut self, x: f32, y: f32, rows: usize, cols: usize, spacing: f32) -> Result<(), JsValue> {
        let grid = GridConfig::new(Vec2::new(x, y), rows, cols, spacing).with_pinned_top(4);
        self.sandbox
            .spawn_grid(&grid)
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Key binding: "space", "b", "up", "down", "p", "o" or "c".
    pub fn key(&mut self, name: &str) {
        let command = match name {
            "space" => Command::TogglePhysics,
            "b" => Command::ToggleBounce,
            "up" => Command::IncreaseStiffness,
            "down" => Command::DecreaseStiffness,
            "p" => Command::TogglePoints,
            "o" => Command::ToggleOptions,
            "c" => Command::Clear,
            _ => return,
        };
        self.sandbox.apply(command);
    }

    pub fn tick(&mut self) -> bool {
        self.sandbox.tick(&mut NoOpStepObserver)
    }

    /// Flat [x0, y0, x1, y1, ...] in slot order.
    pub fn positions(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.sandbox.scene().particle_count() * 2);
        for (_, p) in self.sandbox.scene().particles() {
            out.push(p.pos.x);
            out.push(p.pos.y);
        }
        out
    }

    /// One byte per particle, matching `positions`.
    pub fn pinned(&self) -> Vec<u8> {
        self.sandbox.scene().particles().map(|(_, p)| p.pinned as u8).collect()
    }

    /// Flat [ax, ay, bx, by, ...] for every constraint.
    pub fn segments(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.sandbox.scene().constraint_count() * 4);
        for (a, b) in self.sandbox.scene().segments() {
            out.extend_from_slice(&[a.x, a.y, b.x, b.y]);
        }
        out
    }

    /// [ax, ay, bx, by] of the rubber band under the pointer, or empty.
    pub fn drag_preview(&self) -> Vec<f32> {
        match self.sandbox.drag_preview(self.pointer) {
            Some((a, b)) => vec![a.x, a.y, b.x, b.y],
            None => Vec::new(),
        }
    }

    pub fn simulating(&self) -> bool {
        self.sandbox.mode() == Mode::Simulate
    }

    pub fn bounce_enabled(&self) -> bool {
        self.sandbox.status().bounce_enabled
    }

    pub fn stiffness(&self) -> usize {
        self.sandbox.status().stiffness
    }

    pub fn show_points(&self) -> bool {
        self.sandbox.status().show_points
    }

    pub fn show_options(&self) -> bool {
        self.sandbox.status().show_options
    }

    pub fn particle_count(&self) -> usize {
        self.sandbox.scene().particle_count()
    }

    pub fn constraint_count(&self) -> usize {
        self.sandbox.scene().constraint_count()
    }
}
