//! Millisecond stopwatch for frame stats: `Date.now` in the browser,
//! `Instant` everywhere else

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn now() -> Stamp {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now() -> Stamp {
    std::time::Instant::now()
}

// Date.now can step backwards when the system clock is adjusted
#[cfg(target_arch = "wasm32")]
fn millis_since(started: Stamp) -> f64 {
    (js_sys::Date::now() - started).max(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
fn millis_since(started: Stamp) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    started: Stamp,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        Self { started: now() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        millis_since(self.started)
    }
}
