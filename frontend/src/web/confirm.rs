//! Native confirm dialog wrapper; destructive row actions go through
//! here before any request is issued.

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
