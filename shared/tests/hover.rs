use nalgebra::vector;
use shared::{Bounds, HoverEffect, HoverSettings, Magnet, Tilt, TiltAngles};

const CARD: Bounds = Bounds {
    left: 100.0,
    top: 50.0,
    width: 200.0,
    height: 100.0,
};

#[test]
fn tilt_is_flat_at_centre() {
    let mut tilt = Tilt::new(HoverSettings::default());

    tilt.on_move(&CARD, vector![200.0, 100.0]);

    assert_eq!(tilt.angles(), Some(TiltAngles::default()));
}

#[test]
fn tilt_corners() {
    let mut tilt = Tilt::new(HoverSettings::default());

    tilt.on_move(&CARD, vector![100.0, 50.0]);
    assert_eq!(
        tilt.angles(),
        Some(TiltAngles {
            rx: 6.0,
            ry: -6.0,
            sx: -4.0,
            sy: -4.0
        })
    );

    tilt.on_move(&CARD, vector![300.0, 150.0]);
    assert_eq!(
        tilt.angles(),
        Some(TiltAngles {
            rx: -6.0,
            ry: 6.0,
            sx: 4.0,
            sy: 4.0
        })
    );
}

#[test]
fn tilt_style_and_reset() {
    let mut tilt = Tilt::new(HoverSettings::default());

    tilt.on_move(&CARD, vector![300.0, 150.0]);
    let style = tilt.style();

    assert_eq!(
        style.transform,
        "perspective(800px) rotateX(-6deg) rotateY(6deg) translateZ(6px)"
    );
    assert_eq!(
        style.box_shadow.as_deref(),
        Some("0 12px 34px rgba(139,92,246,0.15), inset 0 0 0 1px rgba(255,255,255,.03)")
    );

    tilt.on_leave();
    let style = tilt.style();

    assert_eq!(tilt.angles(), None);
    assert_eq!(style.transform, "");
    assert_eq!(style.box_shadow.as_deref(), Some(""));
}

#[test]
fn tilt_survives_collapsed_bounds() {
    let mut tilt = Tilt::new(HoverSettings::default());

    tilt.on_move(&Bounds::new(10.0, 10.0, 0.0, 0.0), vector![50.0, -20.0]);

    assert_eq!(tilt.angles(), Some(TiltAngles::default()));
}

#[test]
fn magnet_follows_offset_from_centre() {
    let mut magnet = Magnet::new(HoverSettings::default());

    magnet.on_move(&CARD, vector![200.0, 100.0]);
    assert_eq!(magnet.offset(), vector![0.0, 0.0]);

    magnet.on_move(&CARD, vector![300.0, 60.0]);
    let offset = magnet.offset();
    assert!((offset.x - 15.0).abs() < 1e-12);
    assert!((offset.y + 6.0).abs() < 1e-12);

    magnet.on_move(&CARD, vector![400.0, 20.0]);
    let doubled = magnet.offset();
    assert!((doubled.x - 30.0).abs() < 1e-12);
    assert!((doubled.y + 12.0).abs() < 1e-12);
    assert_eq!(magnet.style().box_shadow, None);

    magnet.on_leave();

    assert_eq!(magnet.offset(), vector![0.0, 0.0]);
    assert_eq!(magnet.style().transform, "");
}
