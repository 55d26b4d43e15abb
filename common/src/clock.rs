//! Analog clock hands derived from the local wall-clock time every frame.

use std::time::{SystemTime, UNIX_EPOCH};

use cgmath::{Deg, Rad, Vector4};
use chrono::{Local, TimeZone, Timelike};

use gl_wrapper::Uniform;

use crate::target::FrameTarget;

pub const CLEAR_COLOR: [f32; 3] = [0.1, 0.1, 0.1];

pub const FACE_RADIUS: f32 = 0.8;
pub const MARKER_INNER: f32 = 0.75;
pub const MARKER_OUTER: f32 = 0.85;

const FACE_COLOR: [f32; 4] = [0.3, 0.3, 0.3, 1.0];
const MARKER_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

pub struct HandStyle {
    pub half_width: f32,
    pub length: f32,
    pub color: [f32; 4],
}

pub const SECOND_HAND: HandStyle = HandStyle {
    half_width: 0.02,
    length: 0.7,
    color: [1.0, 0.0, 0.0, 0.8],
};

pub const MINUTE_HAND: HandStyle = HandStyle {
    half_width: 0.03,
    length: 0.6,
    color: [1.0, 1.0, 1.0, 1.0],
};

pub const HOUR_HAND: HandStyle = HandStyle {
    half_width: 0.04,
    length: 0.5,
    color: [0.9, 0.9, 0.9, 1.0],
};

/// Time of day as read from a clock; hours are 0..=23.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

/// Hand angles in degrees, clockwise from 12 o'clock.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ClockAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl ClockAngles {
    pub fn from_time(time: WallTime) -> Self {
        let hours = (time.hours % 12) as f32;
        let minutes = time.minutes as f32;
        let seconds = time.seconds as f32;

        Self {
            hour: hours * 30.0 + minutes * 0.5,
            minute: minutes * 6.0 + seconds * 0.1,
            second: seconds * 6.0,
        }
    }

    /// An unreadable clock shows all hands at 12.
    pub fn from_reading(reading: Option<WallTime>) -> Self {
        reading.map(Self::from_time).unwrap_or_default()
    }
}

pub trait TimeSource {
    fn now(&self) -> Option<WallTime>;
}

/// Wall-clock reading of the instant `secs`/`nanos` after the Unix epoch in `zone`.
///
/// `None` when the zone has no single local time for that instant.
pub fn wall_time_in<Tz: TimeZone>(zone: &Tz, secs: i64, nanos: u32) -> Option<WallTime> {
    let local = zone.timestamp_opt(secs, nanos).single()?;

    Some(WallTime {
        hours: local.hour() as u8,
        minutes: local.minute() as u8,
        seconds: local.second() as u8,
    })
}

/// System local time. The zone rules are looked up again on every reading,
/// so daylight-saving and timezone changes apply on the next frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> Option<WallTime> {
        let since_epoch = SystemTime::now().duration_since(UNIX_EPOCH).ok()?;
        let secs = i64::try_from(since_epoch.as_secs()).ok()?;

        wall_time_in(&Local, secs, since_epoch.subsec_nanos())
    }
}

pub struct ClockShapes<G> {
    pub face: G,
    pub markers: G,
    pub second_hand: G,
    pub minute_hand: G,
    pub hour_hand: G,
}

fn radians(degrees: f32) -> Uniform {
    Uniform::Float(Rad::from(Deg(degrees)).0)
}

pub fn render<T: FrameTarget>(
    angles: &ClockAngles,
    shapes: &ClockShapes<T::Geometry>,
    target: &mut T,
) {
    target.clear(CLEAR_COLOR.into());
    target.set_blending(true);

    target.set_uniform("uAngle", radians(0.0));
    target.set_uniform("uColor", Uniform::Vec4(Vector4::from(FACE_COLOR)));
    target.draw(&shapes.face);

    target.set_uniform("uColor", Uniform::Vec4(Vector4::from(MARKER_COLOR)));
    target.draw(&shapes.markers);

    let hands = [
        (angles.second, &SECOND_HAND, &shapes.second_hand),
        (angles.minute, &MINUTE_HAND, &shapes.minute_hand),
        (angles.hour, &HOUR_HAND, &shapes.hour_hand),
    ];

    for (angle, style, geometry) in hands {
        target.set_uniform("uAngle", radians(angle));
        target.set_uniform("uColor", Uniform::Vec4(Vector4::from(style.color)));
        target.draw(geometry);
    }
}
