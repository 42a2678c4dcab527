// src/math_utils.rs

/// Zero of the straight line through two points.
///
/// Falls back to `a.0` when the line is flat.
pub fn linear_root(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (x0, y0) = a;
    let (x1, y1) = b;
    if y1 == y0 {
        return x0;
    }
    x0 + (x1 - x0) * (-y0) / (y1 - y0)
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new()
    }
}
