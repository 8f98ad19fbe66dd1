pub const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// Hue span covered by a full trajectory; stops short of wrapping back to red
const PROGRESS_HUE_SPAN: f32 = 0.8;

pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let c = v * s;
    let h_prime = (h.rem_euclid(1.0) * 6.0) % 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

/// Colour for sample `index` of a `len`-sample trajectory, sweeping hue with time
pub fn progress_color(index: usize, len: usize) -> [f32; 3] {
    if len <= 1 {
        return hsv_to_rgb(0.0, 0.85, 1.0);
    }
    let t = index.min(len - 1) as f32 / (len - 1) as f32;
    hsv_to_rgb(t * PROGRESS_HUE_SPAN, 0.85, 1.0)
}
