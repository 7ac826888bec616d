use crate::config;
use crate::drum::zone::DrumZone;
use cgmath::{MetricSpace, Point2};

/// Static drum geometry for one window size: two concentric half-circles
/// anchored at the bottom centre of the window. The rim circle bounds the
/// visible drum; the centre circle (at [`config::CENTRE_REGION`] of the rim
/// radius) splits centre hits from rim hits.
#[derive(Clone, Copy, Debug)]
pub struct OverlayLayout {
    origin: Point2<f32>,
    centre_x: f32,
    rim_radius: f32,
    centre_radius: f32,
}

impl OverlayLayout {
    pub fn for_window(px_w: u32, px_h: u32) -> Self {
        let w = px_w as f32;
        let h = px_h as f32;
        let scale = if h > 0.0 { h / config::OVERLAY_REF_HEIGHT } else { 1.0 };
        let rim_radius = config::OVERLAY_RIM_RADIUS_REF * scale;

        Self {
            origin: Point2::new(0.5 * w, h - config::OVERLAY_BOTTOM_OFFSET_REF * scale),
            centre_x: 0.5 * w,
            rim_radius,
            centre_radius: rim_radius * config::CENTRE_REGION,
        }
    }

    /// Whether the point falls on the drum itself (inside the rim circle).
    /// Mouse presses are gated on this; touches are accepted anywhere.
    #[inline(always)]
    pub fn contains(&self, point: Point2<f32>) -> bool {
        point.distance2(self.origin) <= self.rim_radius * self.rim_radius
    }

    #[inline(always)]
    fn centre_contains(&self, point: Point2<f32>) -> bool {
        point.distance2(self.origin) <= self.centre_radius * self.centre_radius
    }

    /// Classifies a window-space point into a zone. Centre containment is
    /// checked first, then the left/right half split; every point lands in
    /// exactly one zone.
    pub fn zone_at(&self, point: Point2<f32>) -> DrumZone {
        let centre_hit = self.centre_contains(point);
        let left_side = point.x < self.centre_x;

        if left_side {
            if centre_hit { DrumZone::LeftCentre } else { DrumZone::LeftRim }
        } else {
            if centre_hit { DrumZone::RightCentre } else { DrumZone::RightRim }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1280x720 gives rim radius 350 and centre radius 280 around (640, 700).
    fn layout() -> OverlayLayout {
        OverlayLayout::for_window(1280, 720)
    }

    #[test]
    fn left_point_inside_centre_is_left_centre() {
        assert_eq!(layout().zone_at(Point2::new(600.0, 690.0)), DrumZone::LeftCentre);
    }

    #[test]
    fn left_point_outside_centre_is_left_rim() {
        // Between the centre radius (280) and the rim radius (350).
        assert_eq!(layout().zone_at(Point2::new(330.0, 700.0)), DrumZone::LeftRim);
        // Far away from the drum entirely still classifies.
        assert_eq!(layout().zone_at(Point2::new(10.0, 10.0)), DrumZone::LeftRim);
    }

    #[test]
    fn right_side_is_symmetric() {
        assert_eq!(layout().zone_at(Point2::new(680.0, 690.0)), DrumZone::RightCentre);
        assert_eq!(layout().zone_at(Point2::new(950.0, 700.0)), DrumZone::RightRim);
        assert_eq!(layout().zone_at(Point2::new(1270.0, 10.0)), DrumZone::RightRim);
    }

    #[test]
    fn exact_centre_line_counts_as_right() {
        assert_eq!(layout().zone_at(Point2::new(640.0, 690.0)), DrumZone::RightCentre);
    }

    #[test]
    fn contains_matches_rim_circle() {
        let l = layout();
        assert!(l.contains(Point2::new(640.0, 700.0)));
        assert!(l.contains(Point2::new(640.0 + 349.0, 700.0)));
        assert!(!l.contains(Point2::new(640.0 + 351.0, 700.0)));
        assert!(!l.contains(Point2::new(0.0, 0.0)));
    }

    #[test]
    fn geometry_scales_with_window_height() {
        // Half the reference height halves every radius.
        let l = OverlayLayout::for_window(640, 360);
        assert!(l.contains(Point2::new(320.0 + 170.0, 350.0)));
        assert!(!l.contains(Point2::new(320.0 + 180.0, 350.0)));
    }
}
