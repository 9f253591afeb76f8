//! Plotly figure specification.
//!
//! A [`Figure`] serializes to the `{"data": [...], "layout": {...}}` document
//! that `Plotly.react` accepts. Only the attributes the dashboard uses are
//! modeled.

use serde::Serialize;

/// A complete chart: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self { data, layout }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceType {
    Bar,
    Scatter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    #[serde(rename = "h")]
    Horizontal,
}

/// Values along one trace dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Values {
    Numbers(Vec<f64>),
    Labels(Vec<String>),
}

/// A point on a categorical or date axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisValue {
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: TraceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Values,
    pub y: Values,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl Trace {
    /// Horizontal bar trace: numeric lengths along x, categories along y.
    pub fn horizontal_bar(values: Vec<f64>, labels: Vec<String>) -> Self {
        Self {
            trace_type: TraceType::Bar,
            name: None,
            x: Values::Numbers(values),
            y: Values::Labels(labels),
            orientation: Some(Orientation::Horizontal),
            mode: None,
            marker: None,
        }
    }

    /// Line trace over ISO dates.
    pub fn line(name: &str, dates: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            trace_type: TraceType::Scatter,
            name: Some(name.to_string()),
            x: Values::Labels(dates),
            y: Values::Numbers(values),
            orientation: None,
            mode: Some("lines".to_string()),
            marker: None,
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn colored(mut self, color: &str) -> Self {
        self.marker = Some(Marker {
            color: color.to_string(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
}

/// Arrow annotation anchored in data coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub x: AxisValue,
    pub y: f64,
    pub xref: &'static str,
    pub yref: &'static str,
    pub text: String,
    pub align: Align,
    pub showarrow: bool,
    pub ax: f64,
    pub ay: f64,
}

impl Annotation {
    /// Arrow pointing at `(x, y)` with the label offset by `(ax, ay)` pixels.
    pub fn arrow(x: AxisValue, y: f64, text: &str, align: Align, ax: f64, ay: f64) -> Self {
        Self {
            x,
            y,
            xref: "x",
            yref: "y",
            text: text.to_string(),
            align,
            showarrow: true,
            ax,
            ay,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
}

/// Line shape in data coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub shape_type: &'static str,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x0: AxisValue,
    pub y0: f64,
    pub x1: AxisValue,
    pub y1: f64,
    pub line: LineStyle,
    pub opacity: f64,
}

impl Shape {
    /// Vertical line at `x` spanning `y0..y1`.
    pub fn vertical_line(x: AxisValue, y0: f64, y1: f64, line: LineStyle, opacity: f64) -> Self {
        Self {
            shape_type: "line",
            xref: "x",
            yref: "y",
            x0: x.clone(),
            y0,
            x1: x,
            y1,
            line,
            opacity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
}

impl Layout {
    /// Layout with a title and untitled axes.
    pub fn titled(title: &str) -> Self {
        Self {
            title: Title {
                text: title.to_string(),
            },
            showlegend: None,
            xaxis: Axis::default(),
            yaxis: Axis::default(),
            annotations: Vec::new(),
            shapes: Vec::new(),
        }
    }

    pub fn x_title(mut self, text: &str) -> Self {
        self.xaxis.title = Some(Title {
            text: text.to_string(),
        });
        self
    }

    pub fn y_title(mut self, text: &str) -> Self {
        self.yaxis.title = Some(Title {
            text: text.to_string(),
        });
        self
    }

    pub fn show_legend(mut self, show: bool) -> Self {
        self.showlegend = Some(show);
        self
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }
}
