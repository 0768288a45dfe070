/// Runs `f` after `millis`; used to auto-dismiss banners. No-op off the browser.
#[cfg(target_arch = "wasm32")]
pub fn run_after(millis: u32, f: impl FnOnce() + 'static) {
    leptos::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(millis).await;
        f();
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn run_after(_millis: u32, _f: impl FnOnce() + 'static) {}
