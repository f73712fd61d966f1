//! Text rendering of colors: a space tag plus a `{COMPONENT}` template.
//!
//! Placeholders are `{NAME}` or `{NAME:precision}` where `NAME` is one of
//! the component names of the chosen model (case-insensitive) and
//! `precision` is the number of decimal places. An unknown component or a
//! broken placeholder is an invalid-argument failure.
//!
//! # Example
//!
//! ```rust
//! use tint_core::{Color, SpaceTag};
//! use tint_spaces::fmt::{render, render_default};
//!
//! let red = Color::rgb(255, 0, 0);
//! assert_eq!(render(red, SpaceTag::Hsl, "{H:0} {S:0} {L:0}").unwrap(), "0 100 50");
//! assert_eq!(render_default(red, SpaceTag::Hsl).unwrap(), "hsl(0, 100%, 50%)");
//! ```

use crate::cct::Cct;
use crate::cmyk::Cmyk;
use crate::gamut::{AcesCg, AdobeRgb, DisplayP3, ProPhotoRgb, Rec2020};
use crate::hue::{Hsi, Hsl, Hsv, Hwb};
use crate::lab::{Lab, Lch, Luv};
use crate::luma::{YCbCr, YCbCrStandard, YCgCo, YDbDr, YPbPr, YcCbcCrc, Yes, Yiq, Yuv};
use crate::misc::{Ncol, Ucs, Uvw};
use crate::oklab::{Oklab, Oklch};
use crate::srgb::LinearSrgb;
use crate::xyz::{Xyy, Xyz, XyzD50};
use tint_core::{Color, Error, Result, SpaceTag};

/// One resolved component value.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// Numeric component, formatted with the placeholder's precision.
    Num(f32),
    /// Textual component (NCol hue words); precision is ignored.
    Text(String),
}

impl From<f32> for Component {
    fn from(v: f32) -> Self {
        Self::Num(v)
    }
}

/// The named components of `color` in the model `tag`.
pub fn components(color: Color, tag: SpaceTag) -> Vec<(&'static str, Component)> {
    fn n3(a: &'static str, b: &'static str, c: &'static str, v: [f32; 3]) -> Vec<(&'static str, Component)> {
        vec![(a, v[0].into()), (b, v[1].into()), (c, v[2].into())]
    }

    match tag {
        SpaceTag::Rgb => vec![
            ("R", (color.r as f32).into()),
            ("G", (color.g as f32).into()),
            ("B", (color.b as f32).into()),
            ("A", (color.a as f32).into()),
        ],
        SpaceTag::Hsl => {
            let v = Hsl::from_color(color);
            n3("H", "S", "L", [v.h, v.s, v.l])
        }
        SpaceTag::Hsv => {
            let v = Hsv::from_color(color);
            n3("H", "S", "V", [v.h, v.s, v.v])
        }
        SpaceTag::Hsi => {
            let v = Hsi::from_color(color);
            n3("H", "S", "I", [v.h, v.s, v.i])
        }
        SpaceTag::Hwb => {
            let v = Hwb::from_color(color);
            n3("H", "W", "B", [v.h, v.w, v.b])
        }
        SpaceTag::Cmyk => {
            let v = Cmyk::from_color(color);
            vec![
                ("C", v.c.into()),
                ("M", v.m.into()),
                ("Y", v.y.into()),
                ("K", v.k.into()),
            ]
        }
        SpaceTag::LinearSrgb => {
            let v = LinearSrgb::from_color(color);
            n3("R", "G", "B", [v.r, v.g, v.b])
        }
        SpaceTag::AdobeRgb => n3("R", "G", "B", AdobeRgb::from_color(color).to_array()),
        SpaceTag::ProPhotoRgb => n3("R", "G", "B", ProPhotoRgb::from_color(color).to_array()),
        SpaceTag::DisplayP3 => n3("R", "G", "B", DisplayP3::from_color(color).to_array()),
        SpaceTag::Rec2020 => n3("R", "G", "B", Rec2020::from_color(color).to_array()),
        SpaceTag::AcesCg => n3("R", "G", "B", AcesCg::from_color(color).to_array()),
        SpaceTag::XyzD65 => {
            let v = Xyz::from_color(color);
            n3("X", "Y", "Z", [v.x, v.y, v.z])
        }
        SpaceTag::XyzD50 => {
            let v = XyzD50::from_color(color);
            n3("X", "Y", "Z", [v.x, v.y, v.z])
        }
        SpaceTag::Xyy => {
            let v = Xyy::from_color(color);
            n3("X", "Y", "YY", [v.x, v.y, v.luma])
        }
        SpaceTag::Lab => {
            let v = Lab::from_color(color);
            n3("L", "A", "B", [v.l, v.a, v.b])
        }
        SpaceTag::Luv => {
            let v = Luv::from_color(color);
            n3("L", "U", "V", [v.l, v.u, v.v])
        }
        SpaceTag::LchAb => {
            let v = Lch::ab_from_color(color);
            n3("L", "C", "H", [v.l, v.c, v.h])
        }
        SpaceTag::LchUv => {
            let v = Lch::uv_from_color(color);
            n3("L", "C", "H", [v.l, v.c, v.h])
        }
        SpaceTag::Oklab => {
            let v = Oklab::from_color(color);
            n3("L", "A", "B", [v.l, v.a, v.b])
        }
        SpaceTag::Oklch => {
            let v = Oklch::from_color(color);
            n3("L", "C", "H", [v.l, v.c, v.h])
        }
        SpaceTag::Yiq => {
            let v = Yiq::from_color(color);
            n3("Y", "I", "Q", [v.y, v.i, v.q])
        }
        SpaceTag::Yuv => {
            let v = Yuv::from_color(color);
            n3("Y", "U", "V", [v.y, v.u, v.v])
        }
        SpaceTag::YPbPr => {
            let v = YPbPr::from_color(color);
            n3("Y", "PB", "PR", [v.y, v.pb, v.pr])
        }
        SpaceTag::YCbCr601 => {
            let v = YCbCr::from_color(color, YCbCrStandard::Bt601);
            n3("Y", "CB", "CR", [v.y, v.cb, v.cr])
        }
        SpaceTag::YCbCr709 => {
            let v = YCbCr::from_color(color, YCbCrStandard::Bt709);
            n3("Y", "CB", "CR", [v.y, v.cb, v.cr])
        }
        SpaceTag::YCbCr2020 => {
            let v = YCbCr::from_color(color, YCbCrStandard::Bt2020);
            n3("Y", "CB", "CR", [v.y, v.cb, v.cr])
        }
        SpaceTag::YCbCrJpeg => {
            let v = YCbCr::from_color(color, YCbCrStandard::Jpeg);
            n3("Y", "CB", "CR", [v.y, v.cb, v.cr])
        }
        SpaceTag::YcCbcCrc => {
            let v = YcCbcCrc::from_color(color);
            n3("Y", "CB", "CR", [v.y, v.cb, v.cr])
        }
        SpaceTag::YCgCo => {
            let v = YCgCo::from_color(color);
            n3("Y", "CG", "CO", [v.y, v.cg, v.co])
        }
        SpaceTag::YDbDr => {
            let v = YDbDr::from_color(color);
            n3("Y", "DB", "DR", [v.y, v.db, v.dr])
        }
        SpaceTag::Yes => {
            let v = Yes::from_color(color);
            n3("Y", "E", "S", [v.y, v.e, v.s])
        }
        SpaceTag::Ncol => {
            let v = Ncol::from_color(color);
            vec![
                ("H", Component::Text(v.hue_word())),
                ("W", v.w.into()),
                ("B", v.b.into()),
            ]
        }
        SpaceTag::Ucs => {
            let v = Ucs::from_color(color);
            n3("U", "V", "W", [v.u, v.v, v.w])
        }
        SpaceTag::Uvw => {
            let v = Uvw::from_color(color);
            n3("U", "V", "W", [v.u, v.v, v.w])
        }
        SpaceTag::Cct => {
            let v = Cct::from_color(color);
            vec![("K", v.kelvin.into()), ("DUV", v.duv.into())]
        }
    }
}

/// Renders `color` through `template` in the model named by `tag`.
pub fn render(color: Color, tag: SpaceTag, template: &str) -> Result<String> {
    let comps = components(color, tag);
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| Error::BadTemplate {
            detail: format!("unclosed placeholder in {template:?}"),
        })?;
        let inner = &after[..close];

        let (name, precision) = match inner.split_once(':') {
            Some((n, p)) => {
                let prec = p.parse::<usize>().map_err(|_| Error::BadTemplate {
                    detail: format!("bad precision {p:?}"),
                })?;
                (n, Some(prec))
            }
            None => (inner, None),
        };

        let value = comps
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
            .ok_or_else(|| Error::BadTemplate {
                detail: format!("no component {name:?} in {}", tag.name()),
            })?;

        match value {
            Component::Text(s) => out.push_str(s),
            Component::Num(v) => match precision {
                Some(p) => out.push_str(&format!("{v:.p$}")),
                None => out.push_str(&format!("{v}")),
            },
        }

        rest = &after[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Renders `color` with the model's built-in default template.
pub fn render_default(color: Color, tag: SpaceTag) -> Result<String> {
    render(color, tag, tag.default_template())
}
