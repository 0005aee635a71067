use appfolio::{config, App};

fn main() {
    // set up logging
    _ = console_log::init_with_level(config::log_level());
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
