use tinhatben_branding::{
    CoordinateSpace, DrawingSurface, FontStyle, HorizontalAlignment, RecordingSurface,
    TINHATBEN_GRAY, TINHATBEN_YELLOW, TextStyle, VerticalAlignment, add_watermark,
};

const OFFSETS: [f64; 6] = [0.0, 0.02, 0.06, 0.09, 0.135, 0.16];

fn record(pos: (f64, f64)) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    add_watermark(&mut surface, pos).unwrap();
    surface
}

#[test]
fn test_exactly_six_calls() {
    let surface = record((0.3, 0.7));
    assert_eq!(surface.len(), 6);
}

#[test]
fn test_positions_follow_offsets() {
    let (x, y) = (0.41, 0.83);
    let surface = record((x, y));

    for (call, offset) in surface.calls().iter().zip(OFFSETS) {
        assert_eq!(call.x, x + offset, "fragment {:?}", call.text);
        assert_eq!(call.y, y, "fragment {:?}", call.text);
    }
}

#[test]
fn test_fragments_spell_watermark() {
    let surface = record((0.5, 0.5));
    let text: String = surface.calls().iter().map(|c| c.text.as_str()).collect();
    assert_eq!(text, "tinhatben.com");
}

#[test]
fn test_shared_style() {
    let surface = record((0.1, 0.1));

    for call in surface.calls() {
        assert_eq!(call.style.vertical, VerticalAlignment::Bottom);
        assert_eq!(call.style.horizontal, HorizontalAlignment::Left);
        assert_eq!(call.style.coordinates, CoordinateSpace::Axes);
        assert_eq!(call.style.font_size, 25.0);
        assert_eq!(call.style.font_style, FontStyle::Normal);
    }
}

#[test]
fn test_origin_scenario() {
    let surface = record((0.0, 0.0));
    let calls = surface.calls();

    let xs: Vec<f64> = calls.iter().map(|c| c.x).collect();
    assert_eq!(xs, vec![0.0, 0.02, 0.06, 0.09, 0.135, 0.16]);
    assert!(calls.iter().all(|c| c.y == 0.0));

    let fragments: Vec<&str> = calls.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(fragments, vec!["t", "in", "h", "at", "b", "en.com"]);

    let colors: Vec<String> = calls.iter().map(|c| c.style.color.to_hex()).collect();
    assert_eq!(
        colors,
        vec!["#ffaf1f", "#7a7a7a", "#ffaf1f", "#7a7a7a", "#ffaf1f", "#7a7a7a"]
    );
}

#[test]
fn test_colours_alternate_from_yellow() {
    let surface = record((0.2, 0.2));
    for (i, call) in surface.calls().iter().enumerate() {
        let expected = if i % 2 == 0 {
            TINHATBEN_YELLOW
        } else {
            TINHATBEN_GRAY
        };
        assert_eq!(call.style.color, expected, "call {}", i);
    }
}

#[test]
fn test_repeated_calls_are_independent() {
    let mut surface = RecordingSurface::new();
    add_watermark(&mut surface, (0.1, 0.2)).unwrap();
    add_watermark(&mut surface, (0.6, 0.9)).unwrap();

    let calls = surface.calls();
    assert_eq!(calls.len(), 12);

    let (first, second) = calls.split_at(6);
    assert_eq!(first, record((0.1, 0.2)).calls());
    assert_eq!(second, record((0.6, 0.9)).calls());

    // Constants are untouched by drawing
    assert_eq!(TINHATBEN_YELLOW.to_hex(), "#ffaf1f");
    assert_eq!(TINHATBEN_GRAY.to_hex(), "#7a7a7a");
}

#[test]
fn test_out_of_range_position_is_not_checked() {
    let surface = record((-0.5, 1.5));
    assert_eq!(surface.len(), 6);
    assert_eq!(surface.calls()[5].x, -0.5 + 0.16);
}

#[derive(Debug, PartialEq)]
struct SurfaceGone {
    call: usize,
}

/// Fails on the `fail_on`-th call (1-based)
struct FailingSurface {
    fail_on: usize,
    attempts: Vec<String>,
}

impl DrawingSurface for FailingSurface {
    type Error = SurfaceGone;

    fn draw_text(
        &mut self,
        _x: f64,
        _y: f64,
        text: &str,
        _style: &TextStyle,
    ) -> Result<(), Self::Error> {
        self.attempts.push(text.to_string());
        if self.attempts.len() == self.fail_on {
            Err(SurfaceGone {
                call: self.attempts.len(),
            })
        } else {
            Ok(())
        }
    }
}

#[test]
fn test_surface_error_propagates_unmodified() {
    let mut surface = FailingSurface {
        fail_on: 3,
        attempts: Vec::new(),
    };

    let result = add_watermark(&mut surface, (0.0, 0.0));
    assert_eq!(result, Err(SurfaceGone { call: 3 }));
    assert_eq!(surface.attempts, vec!["t", "in", "h"]);
}

#[test]
fn test_works_through_trait_object() {
    let mut recorder = RecordingSurface::new();
    {
        let surface: &mut dyn DrawingSurface<Error = std::convert::Infallible> = &mut recorder;
        add_watermark(surface, (0.25, 0.25)).unwrap();
    }
    assert_eq!(recorder.len(), 6);
}
