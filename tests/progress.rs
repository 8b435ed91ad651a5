#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use taskboard::libs::progress::{dash_offset, ProgressRing, GAUGE_WIDTH, RING_RADIUS};

    const EPSILON: f64 = 1e-9;

    fn circumference() -> f64 {
        2.0 * PI * RING_RADIUS
    }

    #[test]
    fn test_forty_percent_offset() {
        let ring = ProgressRing::new(40.0);
        let c = circumference();

        assert!((ring.circumference - c).abs() < EPSILON);
        assert!((ring.offset - (c - 0.40 * c)).abs() < EPSILON);
        assert!((ring.filled_fraction() - 0.40).abs() < EPSILON);
        assert_eq!(ring.label(), "40%");
    }

    #[test]
    fn test_empty_and_full_ring() {
        let empty = ProgressRing::new(0.0);
        assert!((empty.offset - circumference()).abs() < EPSILON);
        assert_eq!(empty.gauge(GAUGE_WIDTH), "░".repeat(GAUGE_WIDTH));

        let full = ProgressRing::new(100.0);
        assert!(full.offset.abs() < EPSILON);
        assert_eq!(full.gauge(GAUGE_WIDTH), "█".repeat(GAUGE_WIDTH));
        assert_eq!(full.label(), "100%");
    }

    #[test]
    fn test_out_of_range_percentages_are_clamped() {
        assert_eq!(ProgressRing::new(-20.0).percentage, 0.0);
        assert_eq!(ProgressRing::new(140.0).percentage, 100.0);
        assert_eq!(ProgressRing::new(f64::NAN).percentage, 0.0);
        assert_eq!(ProgressRing::new(f64::INFINITY).percentage, 0.0);
    }

    #[test]
    fn test_gauge_width_and_fill() {
        let ring = ProgressRing::new(50.0);
        let gauge = ring.gauge(10);

        assert_eq!(gauge.chars().count(), 10);
        assert_eq!(gauge, "█████░░░░░");
    }

    #[test]
    fn test_label_rounds_fractional_progress() {
        assert_eq!(ProgressRing::new(100.0 / 3.0).label(), "33%");
        assert_eq!(ProgressRing::new(66.6666).label(), "67%");
    }

    #[test]
    fn test_custom_radius() {
        let ring = ProgressRing::with_radius(25.0, 10.0);
        let c = 2.0 * PI * 10.0;

        assert!((ring.offset - dash_offset(25.0, c)).abs() < EPSILON);
        assert!((ring.offset - 0.75 * c).abs() < EPSILON);
    }
}
