//! Tap Cart Frontend Entry Point

mod app;
mod components;
mod events;
mod logging;
mod mount;
mod storage;
mod store;
mod surface;

use app::CartApp;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    events::on_ready(|| {
        let app = CartApp::init(surface::load_config());
        mount::mount_cart(app);
        events::bind_cart_controls(app);
    });
}
