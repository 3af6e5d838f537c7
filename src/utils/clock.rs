/// Wall-clock milliseconds; the controller only compares these against each other.
pub fn now_ms() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

/// Sleeps until `deadline` (in `now_ms` terms); returns immediately if it already passed.
pub async fn sleep_until(deadline: u64) {
    let wait = deadline.saturating_sub(now_ms());
    if wait > 0 {
        sleep_ms(wait).await;
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(
                &resolve,
                ms.min(i32::MAX as u64) as i32
            )
        });
        if !matches!(scheduled, Some(Ok(_))) {
            log::debug!("setTimeout unavailable, resolving sleep immediately");
            let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
