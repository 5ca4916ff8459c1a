mod app;
#[path = "lib/mod.rs"]
mod app_lib;
mod components;
mod features;
mod routes;

use crate::app::App;
use leptos::prelude::mount_to_body;

pub fn main() {
    mount_to_body(App);
}
