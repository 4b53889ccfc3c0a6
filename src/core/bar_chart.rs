use std::collections::BTreeMap;

use crate::error::{PlotlyError, PlotlyResult};

use super::{ArrayValue, Axis, Figure, Layout, Marker, StringOrList, Trace, TypedArray};

/// Titles of a stacked bar chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarChartTitles {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
}

/// Builds a stacked bar chart with one bar trace per category.
///
/// `data` maps each x-axis label to one value per category, in `categories`
/// order. Labels are plotted in sorted order. `colors[i]` is the marker color
/// of `categories[i]`.
pub fn stacked_bar_figure(
    categories: &[String],
    colors: &[String],
    data: &BTreeMap<String, Vec<ArrayValue>>,
    titles: &BarChartTitles,
) -> PlotlyResult<Figure> {
    if colors.len() < categories.len() {
        return Err(PlotlyError::InvalidInput(format!(
            "stacked bar chart needs {} colors, got {}",
            categories.len(),
            colors.len()
        )));
    }

    let labels = TypedArray::strings(data.keys().cloned());
    let mut traces = Vec::with_capacity(categories.len());
    for (index, (category, color)) in categories.iter().zip(colors).enumerate() {
        let values = data
            .iter()
            .map(|(label, row)| {
                row.get(index).cloned().ok_or_else(|| {
                    PlotlyError::InvalidInput(format!(
                        "label `{label}` has no value for category `{category}`"
                    ))
                })
            })
            .collect::<PlotlyResult<TypedArray>>()?;

        traces.push(
            Trace::bar()
                .with_name(category.clone())
                .with_x(labels.clone())
                .with_y(values)
                .with_marker(Marker::default().with_color(StringOrList::scalar(color.clone()))),
        );
    }

    let layout = Layout {
        title: Some(titles.title.clone()),
        barmode: Some("stack".to_owned()),
        xaxis: Some(Axis::titled(titles.x_title.clone()).with_type("category")),
        yaxis: Some(Axis::titled(titles.y_title.clone())),
        ..Layout::default()
    };
    Ok(Figure::new(traces).with_layout(layout))
}
