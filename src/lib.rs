use wasm_bindgen::prelude::*;

// ============================================================================
// WATER WORLD - Spring-mesh water surface with splashing bodies
// ============================================================================

pub mod config;
pub mod error;
pub mod render;
pub mod sim;

pub use config::WaterConfig;
pub use error::ConfigError;
pub use render::{Encoder, NullRenderer, Renderer};
pub use sim::{Scene, Wave, WaterSpring};

#[wasm_bindgen]
pub struct WaterWorld {
    scene: Scene,
    out: Encoder,
}

#[wasm_bindgen]
impl WaterWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(w: u32, h: u32) -> Self {
        // Canvases report 0x0 before layout
        Self::with_config(WaterConfig::for_screen(w.max(1) as f32, h.max(1) as f32))
    }

    /// Build from a JSON config; missing fields take their defaults.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<WaterWorld, JsValue> {
        let config = WaterConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::with_config(config))
    }

    pub fn tick(&mut self) {
        self.scene.tick();
        self.out.clear();
        self.scene.draw(&mut self.out);
    }

    pub fn drop_rock(&mut self, x: f32, y: f32) -> bool {
        self.scene.drop_rock(x, y)
    }

    pub fn drop_float(&mut self, x: f32, y: f32) -> bool {
        self.scene.drop_float(x, y)
    }

    pub fn reset(&mut self) {
        self.scene.reset();
        self.out.clear();
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.scene.resize(w as f32, h as f32);
        self.out.clear();
    }

    // Toggles
    pub fn toggle_smooth(&mut self) -> bool {
        let on = !self.scene.config().smooth;
        self.scene.set_smooth(on);
        on
    }

    pub fn toggle_volume_rise(&mut self) -> bool {
        let on = !self.scene.config().volume_rise;
        self.scene.set_volume_rise(on);
        on
    }

    pub fn toggle_physics(&mut self) -> bool {
        let on = !self.scene.config().physics;
        self.scene.set_physics(on);
        on
    }

    pub fn rest_level(&self) -> f32 {
        self.scene.wave().rest_level()
    }

    /// Copy of the surface buffer as a typed array.
    pub fn surface_array(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.out.surface_buf())
    }

    // Accessors for WASM
    pub fn surface_ptr(&self) -> *const f32 { self.out.surface_ptr() }
    pub fn surface_len(&self) -> usize { self.out.surface_len() }
    pub fn crest_len(&self) -> usize { self.out.crest_len() }
    pub fn bodies_ptr(&self) -> *const f32 { self.out.bodies_ptr() }
    pub fn bodies_len(&self) -> usize { self.out.bodies_len() }
    pub fn width(&self) -> f32 { self.scene.config().screen_width }
    pub fn height(&self) -> f32 { self.scene.config().screen_height }
}

impl WaterWorld {
    pub fn with_config(config: WaterConfig) -> Self {
        let scene = Scene::new(config);
        let mut out = Encoder::new();
        scene.draw(&mut out);
        Self { scene, out }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn encoder(&self) -> &Encoder {
        &self.out
    }
}
