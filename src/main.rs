//! CSR entry point: console logging, panic hook, and mounting the root
//! component onto `<body>`.

use signalbox_web::app::App;

pub fn main() {
    let _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
