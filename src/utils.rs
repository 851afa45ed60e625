use ggez::graphics::Color;

pub type Rgb = [u8; 3];

pub fn interpolate_color(start_color: Rgb, end_color: Rgb, interpolation: f32) -> Color {
    let interpolate =
        |start: u8, end: u8| (start as f32 + interpolation * (end as f32 - start as f32)) as u8;
    Color::from_rgb(
        interpolate(start_color[0], end_color[0]),
        interpolate(start_color[1], end_color[1]),
        interpolate(start_color[2], end_color[2]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let start = [10, 20, 30];
        let end = [200, 100, 50];
        assert_eq!(interpolate_color(start, end, 0.0), Color::from_rgb(10, 20, 30));
        assert_eq!(interpolate_color(start, end, 1.0), Color::from_rgb(200, 100, 50));
    }

    #[test]
    fn midpoint_truncates() {
        // 127.5 truncates to 127
        let mid = interpolate_color([0, 0, 0], [255, 255, 255], 0.5);
        assert_eq!(mid, Color::from_rgb(127, 127, 127));
    }

    #[test]
    fn overshoot_saturates() {
        let over = interpolate_color([0, 0, 0], [255, 255, 255], 1.05);
        assert_eq!(over, Color::from_rgb(255, 255, 255));
    }
}
