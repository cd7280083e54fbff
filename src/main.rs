//! Browser entry point: install logging, then mount the app on `<body>`.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Debug).is_err() {
            log::warn!("console logger already installed");
        }
        log::info!("folio starting");
        leptos::mount::mount_to_body(folio::app::App);
    }
}
