// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serialized view state.
//!
//! The persistence layer (page URL, cookies) stores a view as a list of
//! `key=value` pairs joined by `&`:
//!
//! | key | meaning |
//! |---|---|
//! | `wx`, `wy`, `ww`, `wh` | zoom area origin and size |
//! | `rot` | clockwise rotation in degrees |
//! | `mo` | comma-separated options; `hmir` and `vmir` are the mirror flags |
//! | `mk` | marks, `x/y` pairs joined by `,` |
//!
//! Percent-decoding is the transport's job; values arrive here decoded.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use zoomview_geometry::{Axis, MirrorFlags, NormalizedPoint, NormalizedRect, crop_float};

use crate::error::ParamError;
use crate::log::warn;
use crate::viewport::ViewportState;

const HMIR: &str = "hmir";
const VMIR: &str = "vmir";

/// View state in the shape the persistence layer stores it.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewParams {
    /// Zoom area.
    pub zoom_area: NormalizedRect,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
    /// Mirror flags.
    pub mirror: MirrorFlags,
    /// Marks, in the order they were placed.
    pub marks: Vec<NormalizedPoint>,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            zoom_area: NormalizedRect::FULL_AREA,
            rotation: 0.0,
            mirror: MirrorFlags::empty(),
            marks: Vec::new(),
        }
    }
}

impl ViewParams {
    /// Captures the persistent part of `viewport` together with `marks`.
    #[must_use]
    pub fn from_viewport(viewport: &ViewportState, marks: &[NormalizedPoint]) -> Self {
        Self {
            zoom_area: viewport.zoom_area(),
            rotation: viewport.rotation(),
            mirror: viewport.mirror(),
            marks: marks.to_vec(),
        }
    }

    /// Restores zoom area, rotation and mirror flags into `viewport`.
    ///
    /// The usual clamping applies, so malformed stored values cannot produce
    /// an invalid view.
    pub fn apply_to(&self, viewport: &mut ViewportState) {
        viewport.zoom_to_rect(self.zoom_area);
        viewport.set_rotation(self.rotation);
        viewport.set_mirror(Axis::X, self.mirror.contains(MirrorFlags::HORIZONTAL));
        viewport.set_mirror(Axis::Y, self.mirror.contains(MirrorFlags::VERTICAL));
    }

    /// Decodes a `key=value&…` string.
    ///
    /// Unknown keys and pairs without `=` are skipped, as are unknown `mo`
    /// options and malformed marks. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// [`ParamError::InvalidNumber`] if `wx`, `wy`, `ww`, `wh` or `rot` is not
    /// a finite number.
    pub fn parse(query: &str) -> Result<Self, ParamError> {
        let mut params = Self::default();
        let full = NormalizedRect::FULL_AREA;
        let (mut wx, mut wy, mut ww, mut wh) = (full.x, full.y, full.width, full.height);
        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "wx" => wx = parse_number(key, value)?,
                "wy" => wy = parse_number(key, value)?,
                "ww" => ww = parse_number(key, value)?,
                "wh" => wh = parse_number(key, value)?,
                "rot" => params.rotation = parse_number(key, value)?,
                "mo" => {
                    for option in value.split(',') {
                        match option.trim() {
                            HMIR => params.mirror.insert(MirrorFlags::HORIZONTAL),
                            VMIR => params.mirror.insert(MirrorFlags::VERTICAL),
                            _ => {}
                        }
                    }
                }
                "mk" => params.marks = parse_marks(value),
                _ => {}
            }
        }
        params.zoom_area = NormalizedRect::new(wx, wy, ww, wh);
        Ok(params)
    }

    /// Encodes into a `key=value&…` string.
    ///
    /// Only non-default values are written. Zoom-area coordinates and marks
    /// are cropped to four decimal digits, so `parse(encode())` is stable
    /// after the first round trip.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();
        let area = &self.zoom_area;
        if !area.is_full_area() {
            pairs.push(format!("wx={}", crop_float(area.x)));
            pairs.push(format!("wy={}", crop_float(area.y)));
            pairs.push(format!("ww={}", crop_float(area.width)));
            pairs.push(format!("wh={}", crop_float(area.height)));
        }
        if self.rotation != 0.0 {
            pairs.push(format!("rot={}", self.rotation));
        }
        if !self.mirror.is_empty() {
            let mut options: Vec<&str> = Vec::new();
            if self.mirror.contains(MirrorFlags::HORIZONTAL) {
                options.push(HMIR);
            }
            if self.mirror.contains(MirrorFlags::VERTICAL) {
                options.push(VMIR);
            }
            pairs.push(format!("mo={}", options.join(",")));
        }
        if !self.marks.is_empty() {
            pairs.push(format!("mk={}", encode_marks(&self.marks)));
        }
        pairs.join("&")
    }
}

/// Encodes marks as `x/y` pairs joined by `,`, each coordinate cropped to
/// four decimal digits.
#[must_use]
pub fn encode_marks(marks: &[NormalizedPoint]) -> String {
    marks
        .iter()
        .map(|m| format!("{}/{}", crop_float(m.x), crop_float(m.y)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Decodes marks written by [`encode_marks`].
///
/// The legacy `;` separator is accepted as well. Entries without a `/` or
/// with a coordinate that is not a finite number are skipped.
#[must_use]
pub fn parse_marks(value: &str) -> Vec<NormalizedPoint> {
    let separator = if value.contains(';') { ';' } else { ',' };
    value
        .split(separator)
        .filter_map(|entry| {
            let mut coords = entry.split('/');
            let x = coords.next()?.trim().parse::<f64>().ok()?;
            let y = coords.next()?.trim().parse::<f64>().ok()?;
            let mark = NormalizedPoint::new(x, y);
            if mark.is_finite() {
                Some(mark)
            } else {
                warn!(entry, "skipping non-finite mark");
                None
            }
        })
        .collect()
}

fn parse_number(key: &str, value: &str) -> Result<f64, ParamError> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParamError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use zoomview_geometry::{Axis, MirrorFlags, NormalizedPoint, NormalizedRect};

    use super::{ViewParams, encode_marks, parse_marks};
    use crate::{ParamError, ViewportState};

    #[test]
    fn default_params_encode_to_nothing() {
        assert_eq!(ViewParams::default().encode(), "");
        assert_eq!(ViewParams::parse("").unwrap(), ViewParams::default());
    }

    #[test]
    fn marks_are_cropped_and_joined() {
        let marks = [
            NormalizedPoint::new(0.123_456, 0.5),
            NormalizedPoint::new(0.999_99, 0.000_01),
        ];
        assert_eq!(encode_marks(&marks), "0.1234/0.5,0.9999/0");
    }

    #[test]
    fn parse_marks_accepts_both_separators() {
        let expected = vec![NormalizedPoint::new(0.1, 0.2), NormalizedPoint::new(0.3, 0.4)];
        assert_eq!(parse_marks("0.1/0.2,0.3/0.4"), expected);
        assert_eq!(parse_marks("0.1/0.2;0.3/0.4"), expected);
    }

    #[test]
    fn parse_marks_skips_malformed_entries() {
        let marks = parse_marks("0.1/0.2,bogus,0.5,x/0.3,NaN/0.1,0.7/0.8/0.9");
        assert_eq!(
            marks,
            vec![NormalizedPoint::new(0.1, 0.2), NormalizedPoint::new(0.7, 0.8)]
        );
        assert!(parse_marks("").is_empty());
    }

    #[test]
    fn mark_serialization_is_stable_after_first_pass() {
        let marks: Vec<NormalizedPoint> = (0_i32..50)
            .map(|i| {
                let t = f64::from(i) * 0.019_87;
                NormalizedPoint::new(t, 1.0 - t * 0.7)
            })
            .collect();
        let once = encode_marks(&marks);
        let twice = encode_marks(&parse_marks(&once));
        assert_eq!(once, twice);
    }

    #[test]
    fn parse_reads_all_keys() {
        let params =
            ViewParams::parse("fn=/docs/page&wx=0.1&wy=0.2&ww=0.3&wh=0.4&rot=90&mo=fit,hmir&mk=0.5/0.5")
                .unwrap();
        assert_eq!(params.zoom_area, NormalizedRect::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!(params.rotation, 90.0);
        assert_eq!(params.mirror, MirrorFlags::HORIZONTAL);
        assert_eq!(params.marks, vec![NormalizedPoint::new(0.5, 0.5)]);
    }

    #[test]
    fn parse_rejects_bad_numbers() {
        let err = ViewParams::parse("wx=abc").unwrap_err();
        assert_eq!(
            err,
            ParamError::InvalidNumber {
                key: "wx".to_string(),
                value: "abc".to_string(),
            }
        );
        assert!(ViewParams::parse("rot=inf").is_err());
    }

    #[test]
    fn encode_round_trips() {
        let params = ViewParams {
            zoom_area: NormalizedRect::new(0.25, 0.125, 0.5, 0.333_333),
            rotation: 270.0,
            mirror: MirrorFlags::HORIZONTAL | MirrorFlags::VERTICAL,
            marks: vec![NormalizedPoint::new(0.3, 0.3)],
        };
        let encoded = params.encode();
        assert_eq!(
            encoded,
            "wx=0.25&wy=0.125&ww=0.5&wh=0.3333&rot=270&mo=hmir,vmir&mk=0.3/0.3"
        );
        let decoded = ViewParams::parse(&encoded).unwrap();
        assert_eq!(decoded.encode(), encoded);
    }

    #[test]
    fn viewport_round_trip() {
        let mut vp = ViewportState::default();
        vp.zoom_by(2.0);
        vp.set_rotation(45.0);
        vp.set_mirror(Axis::Y, true);

        let marks = [NormalizedPoint::new(0.4, 0.6)];
        let params = ViewParams::from_viewport(&vp, &marks);

        let mut restored = ViewportState::default();
        ViewParams::parse(&params.encode()).unwrap().apply_to(&mut restored);
        assert_eq!(restored.zoom_area(), vp.zoom_area());
        assert_eq!(restored.rotation(), 45.0);
        assert!(restored.is_mirrored(Axis::Y));
        assert!(!restored.is_mirrored(Axis::X));
    }
}
