// Trunk builds this binary for the browser; on native targets it has nothing to do.

fn main() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn boot() {
    tactics_web::start();
}
