#[cfg(debug_assertions)]
pub fn asset_base() -> &'static str {
    "/assets"  // Local assets when running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn asset_base() -> &'static str {
    "https://mvtalc.com/wp-content/uploads"
}
