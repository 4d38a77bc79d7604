//! Globe Rotation
//!
//! Spins a handful of cities about a tilted axis and back again, then shows
//! the checked entry points rejecting degenerate input.
//!
//! Run with `RUST_LOG=debug cargo run --example globe_rotation` to see the
//! debug events emitted by the checked operations.

use celestial_geometry::{rotation_matrix, GeometryResult, LonLat, Matrix3, Vector3};
use tracing_subscriber::EnvFilter;

fn main() -> GeometryResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cities = [
        ("Greenwich", LonLat::new(0.0, 51.4769)),
        ("Quito", LonLat::new(-78.4678, -0.1807)),
        ("Sydney", LonLat::new(151.2093, -33.8688)),
        ("Longyearbyen", LonLat::new(15.6356, 78.2232)),
    ];

    // 23.44° obliquity, tilted toward +Y
    let axis = LonLat::new(90.0, 90.0 - 23.44).to_xyz().try_normalize()?;
    let angle = 40.0_f64.to_radians();
    let forward = rotation_matrix(&axis, angle);
    let back = forward.try_inverse()?;

    tracing::info!(
        det = forward.determinant(),
        rotation = forward.is_rotation_matrix(1e-12),
        "built rotation about tilted axis"
    );

    for (name, ll) in cities {
        let moved = (forward * ll.to_xyz()).to_lonlat();
        let restored = (back * moved.to_xyz()).to_lonlat();
        tracing::info!(
            city = name,
            lon = moved.lon,
            lat = moved.lat,
            shift_deg = ll.separation(&moved).to_degrees(),
            "rotated"
        );
        tracing::info!(city = name, restored = %restored, "rotated back");
    }

    if let Err(e) = Vector3::zeros().try_normalize() {
        tracing::warn!(error = %e, "zero vector has no direction");
    }

    let flat = Matrix3::from_rows(Vector3::x_axis(), Vector3::y_axis(), Vector3::x_axis());
    if let Err(e) = flat.try_inverse() {
        tracing::warn!(error = %e, "singular matrix has no inverse");
    }

    Ok(())
}
