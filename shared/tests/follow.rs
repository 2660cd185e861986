use nalgebra::vector;
use shared::Follower;

#[test]
fn converges_without_overshoot() {
    let mut follower = Follower::new(vector![640.0, 360.0], 0.08);
    follower.set_target(vector![10.0, 700.0]);

    let mut previous = follower.error();

    for _ in 0..250 {
        let position = follower.step();

        assert!(position.x >= 10.0 && position.x <= 640.0);
        assert!(position.y >= 360.0 && position.y <= 700.0);
        assert!(follower.error() < previous);

        previous = follower.error();
    }

    assert!(follower.error() < 1e-3);
}

#[test]
fn first_step_covers_damping_fraction() {
    let mut follower = Follower::new(vector![0.0, 0.0], 0.08);
    follower.set_target(vector![100.0, -50.0]);

    let position = follower.step();

    assert!((position.x - 8.0).abs() < 1e-12);
    assert!((position.y + 4.0).abs() < 1e-12);
}

#[test]
fn resting_follower_stays_put() {
    let mut follower = Follower::new(vector![12.0, 34.0], 0.08);

    for _ in 0..10 {
        assert_eq!(follower.step(), vector![12.0, 34.0]);
    }

    assert_eq!(follower.css_transform(), "translate(12px, 34px)");
}

#[test]
fn damping_is_clamped() {
    let mut follower = Follower::new(vector![0.0, 0.0], 3.0);
    follower.set_target(vector![5.0, 5.0]);

    assert_eq!(follower.step(), vector![5.0, 5.0]);
}
