/// 所有情感颜色使用的固定透明度
pub const ALPHA: f64 = 0.6;

pub fn clamp_channel(intensity: f64) -> f64 {
    intensity.clamp(0.0, 255.0)
}

pub fn green(intensity: f64) -> String {
    format!("rgba(0, {:.0}, 0, {})", intensity, ALPHA)
}

pub fn red(intensity: f64) -> String {
    format!("rgba({:.0}, 0, 0, {})", intensity, ALPHA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rgba_strings() {
        assert_eq!(green(170.0), "rgba(0, 170, 0, 0.6)");
        assert_eq!(red(84.9), "rgba(85, 0, 0, 0.6)");
        assert_eq!(green(0.0), "rgba(0, 0, 0, 0.6)");
    }

    #[test]
    fn clamp_keeps_channel_in_range() {
        assert_eq!(clamp_channel(300.0), 255.0);
        assert_eq!(clamp_channel(-12.0), 0.0);
        assert_eq!(clamp_channel(128.0), 128.0);
    }
}
