pub mod bar_chart;
pub mod chart_url;
pub mod color_scale;
pub mod figure;
mod presence;
pub mod scalar_or_list;
pub mod trace;
pub mod typed_array;

pub(crate) use presence::null_as_default;

pub use bar_chart::{BarChartTitles, stacked_bar_figure};
pub use chart_url::ChartUrl;
pub use color_scale::{ColorScale, ColorStop};
pub use figure::{Axis, Figure, Layout};
pub use scalar_or_list::{FloatOrList, ScalarOrList, StringOrList, WireScalar};
pub use trace::{ErrorBar, Line, Marker, Trace, TraceType};
pub use typed_array::{ArrayKind, ArrayValue, PLOTLY_DATE_FORMAT, TypedArray};
