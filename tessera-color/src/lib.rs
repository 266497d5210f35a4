//! HCT color science and dynamic Material color schemes.
//!
//! tessera-color turns a single seed color into a complete UI theme: dozens
//! of named color roles (primary, primary container, on-surface, ...) whose
//! tones are chosen so that every foreground reaches a target contrast
//! ratio against the surface it is drawn on.
//!
//! # Color spaces
//!
//! Colors are exchanged as packed [`Argb`] values. Internally everything
//! works in [`Hct`] (hue, chroma, tone): hue and chroma come from the CAM16
//! color appearance model, tone is CIE L*. Tone alone decides contrast,
//! which is what makes the scheme construction tractable.
//!
//! ```
//! use tessera_color::{Argb, Hct};
//!
//! let blue = Hct::from_argb(Argb(0xff0000ff));
//! let lighter = blue.with_tone(80.0);
//! assert!((lighter.tone() - 80.0).abs() < 0.5);
//! ```
//!
//! # Schemes
//!
//! A [`DynamicScheme`] combines a seed with a [`Variant`], a light or dark
//! flag and a contrast level in `[-1, 1]`. Every [`Role`] resolves against
//! it:
//!
//! ```
//! use tessera_color::{Argb, DynamicScheme, Role, Variant};
//!
//! let scheme = DynamicScheme::from_argb(Argb(0xff4285f4), Variant::TonalSpot, false, 0.0);
//! assert_eq!(scheme.get_argb(Role::Primary), Argb(0xff445e91));
//! assert_eq!(scheme.get_argb(Role::OnPrimary), Argb(0xffffffff));
//! ```
//!
//! # Themes
//!
//! [`apply`] resolves every role at once into a [`ResolvedTheme`], gated by
//! an optional precondition and followed by an optional callback. The
//! process-wide theme lives behind [`global_theme`] and
//! [`set_global_theme`].
//!
//! ```
//! use tessera_color::{Argb, Role, ThemeOptionsBuilder, apply, set_global_theme};
//!
//! let options = ThemeOptionsBuilder::default().is_dark(true).build().unwrap();
//! let theme = apply(Argb(0xff4285f4), &options).unwrap();
//! assert_eq!(theme[Role::Surface], Argb(0xff111318));
//! set_global_theme(theme);
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialization of [`Argb`] as `#aarrggbb`, [`Variant`] and
//!   [`ResolvedTheme`].

#![deny(missing_docs, clippy::unwrap_used)]

mod argb;
pub mod cie;
pub mod contrast;
pub mod dislike;
pub mod dynamic_color;
pub mod hct;
mod palette;
pub mod roles;
pub mod scheme;
pub mod temperature;
pub mod theme;
mod utils;

pub use crate::{
    argb::{Argb, ParseArgbError},
    dynamic_color::DynamicColor,
    hct::{Cam16, Hct, ViewingConditions, argb_from_hct, hct_from_argb},
    palette::TonalPalette,
    roles::Role,
    scheme::{DynamicScheme, Variant},
    temperature::TemperatureCache,
    theme::{
        ResolvedTheme, ThemeOptions, ThemeOptionsBuilder, ThemeOptionsBuilderError, apply,
        apply_global, global_theme, set_global_theme,
    },
};
