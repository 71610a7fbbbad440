//! Device class detection

use crate::tuning::DeviceClass;

const COMPACT_MARKERS: [&str; 4] = ["iphone", "ipad", "ipod", "android"];

/// Phones and tablets, judged by user agent
pub fn is_compact_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    COMPACT_MARKERS.iter().any(|m| ua.contains(m))
}

/// Device class of the current browser
#[cfg(target_arch = "wasm32")]
pub fn detect_device_class() -> DeviceClass {
    let user_agent = web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default();
    let class = DeviceClass::from_compact_flag(is_compact_user_agent(&user_agent));
    log::info!("Device class: {}", class.as_str());
    class
}

/// Native builds always count as standard
#[cfg(not(target_arch = "wasm32"))]
pub fn detect_device_class() -> DeviceClass {
    DeviceClass::Standard
}
