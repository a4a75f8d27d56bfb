// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Distance (in pixels) that maps to one full zoom step in [`scale_zoom_default`].
pub const DEFAULT_ZOOM_FACTOR: f64 = 100.0;

/// Largest multiplicative step applied by a single [`scale_zoom_default`] call.
pub const DEFAULT_ZOOM_CLAMP: f64 = 2.0;

/// Scales a zoom level by a signed delta.
///
/// The step is `min(1 + |delta| / factor, clamp)`. A positive `delta`
/// multiplies `value` by the step, a negative one divides by it, and a zero
/// delta returns `value` unchanged.
///
/// The result is not bounded to any zoom range; callers clamp it.
#[must_use]
pub fn scale_zoom(value: f64, delta: f64, factor: f64, clamp: f64) -> f64 {
    if delta == 0.0 {
        return value;
    }
    let step = (1.0 + delta.abs() / factor).min(clamp);
    if delta > 0.0 { value * step } else { value / step }
}

/// [`scale_zoom`] with [`DEFAULT_ZOOM_FACTOR`] and [`DEFAULT_ZOOM_CLAMP`].
#[must_use]
pub fn scale_zoom_default(value: f64, delta: f64) -> f64 {
    scale_zoom(value, delta, DEFAULT_ZOOM_FACTOR, DEFAULT_ZOOM_CLAMP)
}
