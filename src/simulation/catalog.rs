//! Built-in body catalogs
//!
//! Each function returns a fresh, owned list of bodies in a fixed order; that
//! order becomes the body index in every trajectory built from it. All planets
//! and moons start on the +x axis moving along +y, with moons offset from
//! their parent's position and velocity.

use crate::simulation::states::{Body, NVec3};

/// Names accepted by [`by_name`]
pub const NAMES: [&str; 4] = ["sun_earth", "sun_earth_moon", "inner_solar_system", "solar_system"];

const M_SUN: f64 = 1.9885e30;
const M_EARTH: f64 = 5.9722e24;
const EARTH_X: f64 = 1.495978707e11;
const EARTH_V: f64 = 2.9785e4;

pub fn by_name(name: &str) -> Option<Vec<Body>> {
    match name {
        "sun_earth" => Some(sun_earth()),
        "sun_earth_moon" => Some(sun_earth_moon()),
        "inner_solar_system" => Some(inner_solar_system()),
        "solar_system" => Some(solar_system()),
        _ => None,
    }
}

fn sun() -> Body {
    Body::at_rest(M_SUN, NVec3::zeros())
}

/// Body on the +x axis at `r` moving along +y at `speed`
fn on_axis(m: f64, r: f64, speed: f64) -> Body {
    Body::new(m, NVec3::new(r, 0.0, 0.0), NVec3::new(0.0, speed, 0.0))
}

/// Satellite of `parent`, offset by `r` along +x and `speed` along +y
fn satellite(parent: &Body, m: f64, r: f64, speed: f64) -> Body {
    Body::new(
        m,
        parent.x + NVec3::new(r, 0.0, 0.0),
        parent.v + NVec3::new(0.0, speed, 0.0),
    )
}

/// Planet followed by its moons, `(mass, offset, relative speed)` each
fn system_of(planet: Body, moons: &[(f64, f64, f64)]) -> Vec<Body> {
    let sats: Vec<Body> = moons
        .iter()
        .map(|&(m, r, speed)| satellite(&planet, m, r, speed))
        .collect();
    std::iter::once(planet).chain(sats).collect()
}

pub fn sun_earth() -> Vec<Body> {
    vec![sun(), on_axis(M_EARTH, EARTH_X, EARTH_V)]
}

pub fn sun_earth_moon() -> Vec<Body> {
    vec![
        sun(),
        on_axis(M_EARTH, EARTH_X, EARTH_V),
        on_axis(7.342e22, 1.49982271e11, 3.0807e4),
    ]
}

/// Sun, Mercury, Venus, Earth, Moon, Mars, Phobos, Deimos
pub fn inner_solar_system() -> Vec<Body> {
    let mut bodies = vec![
        sun(),
        on_axis(3.3011e23, 5.7909e10, 4.79e4),
        on_axis(4.8675e24, 1.0821e11, 3.50e4),
    ];
    bodies.extend(system_of(
        on_axis(M_EARTH, EARTH_X, EARTH_V),
        &[(7.342e22, 3.844e8, 1.022e3)],
    ));
    bodies.extend(system_of(
        on_axis(6.4171e23, 2.279e11, 2.41e4),
        &[(1.0659e16, 9.378e6, 2.138e3), (1.4762e15, 2.343e7, 1.351e3)],
    ));
    bodies
}

/// Inner system plus Jupiter (Io, Europa, Ganymede, Callisto), Saturn (Titan),
/// Uranus (Titania) and Neptune (Triton)
pub fn solar_system() -> Vec<Body> {
    let mut bodies = inner_solar_system();
    bodies.extend(system_of(
        on_axis(1.8982e27, 7.785e11, 1.307e4),
        &[
            (8.93e22, 4.217e8, 1.734e4),
            (4.80e22, 6.711e8, 1.371e4),
            (1.48e23, 1.070e9, 1.088e4),
            (1.08e23, 1.883e9, 8.204e3),
        ],
    ));
    bodies.extend(system_of(
        on_axis(5.6834e26, 1.433e12, 9.68e3),
        &[(1.3452e23, 1.222e9, 5.57e3)],
    ));
    bodies.extend(system_of(
        on_axis(8.6810e25, 2.872e12, 6.80e3),
        &[(3.527e21, 4.364e8, 3.64e3)],
    ));
    bodies.extend(system_of(
        on_axis(1.02413e26, 4.495e12, 5.43e3),
        &[(2.14e22, 3.547e8, 4.39e3)],
    ));
    bodies
}

/// Speed of a circular orbit of radius `r` about a point mass with parameter `gm`
pub fn circular_speed(gm: f64, r: f64) -> f64 {
    (gm / r).sqrt()
}

/// Two bodies on a circular orbit about their common barycentre, which sits
/// at the origin and is at rest. Separation `r` lies along x, motion along y.
#[allow(non_snake_case)]
pub fn two_body_circular(m0: f64, m1: f64, r: f64, G: f64) -> Vec<Body> {
    let total = m0 + m1;
    let v_rel = circular_speed(G * total, r);
    vec![
        Body::new(
            m0,
            NVec3::new(-r * m1 / total, 0.0, 0.0),
            NVec3::new(0.0, -v_rel * m1 / total, 0.0),
        ),
        Body::new(
            m1,
            NVec3::new(r * m0 / total, 0.0, 0.0),
            NVec3::new(0.0, v_rel * m0 / total, 0.0),
        ),
    ]
}

/// Period of a circular two-body orbit with separation `r`
#[allow(non_snake_case)]
pub fn circular_period(m0: f64, m1: f64, r: f64, G: f64) -> f64 {
    2.0 * std::f64::consts::PI * (r.powi(3) / (G * (m0 + m1))).sqrt()
}
