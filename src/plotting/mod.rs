//! Plot data derived from parsed reports.
//!
//! Nothing here renders. Each plot is a [`Series`](series::Series) plus a
//! [`LinePlotConfig`](config::LinePlotConfig), serialized as JSON for the
//! renderer:
//!
//! ```json
//! {
//!   "data": { "sample1": { "10": 500, "20": 1200 } },
//!   "config": {
//!     "xlab": "Observed Quality Score",
//!     "ylab": "Count",
//!     "xDecimals": false,
//!     "yDecimals": false,
//!     "tt_label": "{point.x}: {point.y:.0f}"
//!   }
//! }
//! ```

pub mod config;
pub mod quality;
pub mod series;
