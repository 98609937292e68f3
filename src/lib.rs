//! # QuickChart Formulas
//!
//! Formula adapters that turn spreadsheet-style parameters into
//! [QuickChart](https://quickchart.io) image URLs. Each formula is a pure
//! function from its inputs to a URL string; fetching the image is left to the
//! host.
//!
//! ## Formulas
//!
//! | Name         | Endpoint     | Notes                                                   |
//! |--------------|--------------|---------------------------------------------------------|
//! | `WordCloud`  | `/wordcloud` | `key=value` query, percent-encoded like `encodeURI`      |
//! | `QRCode`     | `/qr`        | `ecLevel` truncated, colors renamed to `dark` / `light` |
//! | `GraphNodes` | `/graphviz`  | DOT graph embedded raw, nodes colored per group          |
//! | `Chart`      | `/chart`     | pretty-printed Chart.js definition embedded raw          |
//!
//! Unset optional values are left out of the URL rather than replaced by their
//! documented defaults; the service applies its own.
//!
//! ## Typed use
//!
//! ```rust
//! use quickchart_formulas::prelude::*;
//!
//! let config = PackConfig::default();
//! let url = ChartInput::new("bar")
//!     .with_labels(vec!["Q1".to_string(), "Q2".to_string()])
//!     .with_dataset("revenue", vec![120.0, 180.0])
//!     .url(&config)
//!     .unwrap();
//! assert!(url.starts_with("https://quickchart.io/chart?c={"));
//! ```
//!
//! ## Host use
//!
//! A host passes positional, nullable arguments that follow each formula's
//! declared [`ParameterSpec`](params::ParameterSpec) list:
//!
//! ```rust
//! use quickchart_formulas::prelude::*;
//!
//! let pack = FormulaPack::builder()
//!     .with_alias("QuickChart.QRCode", "QRCode")
//!     .build();
//! let url = pack
//!     .execute(
//!         "QuickChart.QRCode",
//!         &[Some("hello".into()), None, None, None, None, Some("High".into())],
//!     )
//!     .unwrap();
//! assert_eq!(url, "https://quickchart.io/qr?text=hello&ecLevel=H");
//! ```

pub mod config;
pub mod dot;
pub mod error;
pub mod formula;
pub mod pack;
pub mod palette;
pub mod params;
pub mod prelude;
pub mod query;

#[cfg(feature = "python-bindings")]
mod python;
