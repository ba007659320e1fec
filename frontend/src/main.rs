#[cfg(target_arch = "wasm32")]
fn main() {
    tienda_frontend::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("tienda-frontend only runs in the browser; build it with `trunk build`");
}
