//! Session and API-client context for the UI.

use api::{ApiClient, ApiConfig, Session};
use dioxus::prelude::*;

/// Durable slot used on the current platform: `localStorage` on the web,
/// an in-memory slot elsewhere (native shells and tests).
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformSlot = store::WebSlot;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformSlot = store::MemorySlot;

/// Construct the durable slot for the current platform.
pub fn platform_slot() -> PlatformSlot {
    PlatformSlot::new()
}

/// The shared HTTP client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// The process-wide session. Reads are cheap; to run login/register,
/// clone the session out, await the call, and write the updated value
/// back on success.
pub fn use_session() -> Signal<Session<PlatformSlot>> {
    use_context::<Signal<Session<PlatformSlot>>>()
}

/// Provider component owning the session and the API client.
/// Wrap the app with this component; the stored login (if any) is
/// restored synchronously from the durable slot before the first render.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    use_context_provider(|| ApiClient::new(ApiConfig::default()));
    let session = use_signal(|| Session::restore(platform_slot()));
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}
