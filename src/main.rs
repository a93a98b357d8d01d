#[cfg(feature = "csr")]
use applicant_portal::App;
#[cfg(feature = "csr")]
use leptos::prelude::*;

#[cfg(feature = "csr")]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    mount_to_body(App);
}

// The binary only exists for the WASM bundle; native builds are a no-op.
#[cfg(not(feature = "csr"))]
pub fn main() {}
