//! Server-side HTML for the dashboard page. Charts are emitted as inline SVG so
//! the page works without client scripts.

use super::views::{
    DashboardView, FieldView, ModelInfoPanel, PredictionPanel, PredictionView, Tab, FOOTER,
    INFO_BAR, PAGE_SUBTITLE, PAGE_TITLE,
};
use crate::customer::WidgetKind;
use crate::segmentation::chart::{AXIS_MAX, AXIS_MIN};
use crate::segmentation::{GaugeChart, Interpretation, SegmentationReport, ThresholdChart, Tone};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::f64::consts::PI;

const GAUGE_CX: f64 = 160.0;
const GAUGE_CY: f64 = 160.0;
const GAUGE_RADIUS: f64 = 120.0;

const CHART_WIDTH: f64 = 520.0;
const CHART_HEIGHT: f64 = 420.0;
const PLOT_LEFT: f64 = 70.0;
const PLOT_RIGHT: f64 = 490.0;
const PLOT_TOP: f64 = 50.0;
const PLOT_BOTTOM: f64 = 350.0;

pub fn render_page(view: &DashboardView) -> String {
    let mut out = String::with_capacity(16 * 1024);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", text(PAGE_TITLE)));
    out.push_str("<link rel=\"stylesheet\" href=\"/assets/dashboard.css\">\n</head>\n<body>\n");
    out.push_str("<div class=\"layout\">\n");
    out.push_str(&render_sidebar(&view.fields));
    out.push_str("<main>\n");
    out.push_str(&render_header());
    out.push_str(&render_tabs(view));
    out.push_str(&format!(
        "<hr>\n<footer class=\"caption\">{}</footer>\n",
        text(FOOTER)
    ));
    out.push_str("</main>\n</div>\n</body>\n</html>\n");
    out
}

/// Full page shown when a request could not be served.
pub fn render_error_page(message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<link rel=\"stylesheet\" href=\"/assets/dashboard.css\">\n\
         </head>\n<body>\n<main>\n<h1>{title}</h1>\n\
         <div class=\"alert alert-error\"><p>{message}</p></div>\n\
         <p><a href=\"/\">Back to dashboard</a></p>\n</main>\n</body>\n</html>\n",
        title = text(PAGE_TITLE),
        message = text(message),
    )
}

fn render_header() -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<header>\n<h1>{}</h1>\n<p class=\"subtitle\">{}</p>\n</header>\n",
        text(PAGE_TITLE),
        text(PAGE_SUBTITLE)
    ));
    out.push_str("<section class=\"info-bar\">\n");
    for card in INFO_BAR.iter() {
        out.push_str(&format!(
            "<div class=\"info-card\"><h3>{}</h3><p class=\"caption\">{}</p></div>\n",
            text(card.title),
            text(card.body)
        ));
    }
    out.push_str("</section>\n<hr>\n");
    out
}

fn render_sidebar(fields: &[FieldView]) -> String {
    let mut out = String::new();
    out.push_str("<aside class=\"sidebar\">\n<h2>Customer Input</h2>\n");
    out.push_str("<form method=\"post\" action=\"/predict\">\n");
    for field in fields {
        out.push_str(&render_field(field));
    }
    out.push_str("<button type=\"submit\">Predict Potential</button>\n</form>\n</aside>\n");
    out
}

fn render_field(field: &FieldView) -> String {
    let spec = &field.spec;
    let mut out = format!(
        "<div class=\"field\">\n<label for=\"field-{name}\">{label}</label>\n",
        name = attr(spec.name),
        label = text(spec.label)
    );

    match &spec.widget {
        WidgetKind::Number(bounds) => {
            let max = bounds
                .max
                .map(|max| format!(" max=\"{max}\""))
                .unwrap_or_default();
            out.push_str(&format!(
                "<input type=\"number\" id=\"field-{name}\" name=\"{name}\" min=\"{min}\"{max} step=\"1\" value=\"{value}\" required>\n",
                name = attr(spec.name),
                min = bounds.min,
                value = attr(&field.value),
            ));
        }
        WidgetKind::Select(options) => {
            out.push_str(&format!(
                "<select id=\"field-{name}\" name=\"{name}\">\n",
                name = attr(spec.name)
            ));
            for option in options {
                let selected = if *option == field.value {
                    " selected"
                } else {
                    ""
                };
                out.push_str(&format!(
                    "<option value=\"{value}\"{selected}>{label}</option>\n",
                    value = attr(option),
                    label = text(option)
                ));
            }
            out.push_str("</select>\n");
        }
    }

    if let Some(help) = spec.help {
        out.push_str(&format!("<small class=\"help\">{}</small>\n", text(help)));
    }
    out.push_str("</div>\n");
    out
}

fn render_tabs(view: &DashboardView) -> String {
    let mut out = String::from("<div class=\"tabs\">\n");
    for tab in Tab::ALL {
        let checked = if tab == view.active_tab { " checked" } else { "" };
        out.push_str(&format!(
            "<input type=\"radio\" name=\"tab\" id=\"tab-{slug}\" class=\"tab-toggle\"{checked}>\n\
             <label for=\"tab-{slug}\" class=\"tab-label\">{label}</label>\n",
            slug = tab.slug(),
            label = text(tab.label())
        ));
    }
    for tab in Tab::ALL {
        let body = match tab {
            Tab::Prediction => render_prediction(&view.prediction),
            Tab::Interpretation => render_interpretation(&view.interpretation),
            Tab::ModelInfo => render_model_info(&view.model_info),
        };
        out.push_str(&format!(
            "<section class=\"panel\" id=\"panel-{}\">\n{body}</section>\n",
            tab.slug()
        ));
    }
    out.push_str("</div>\n");
    out
}

fn render_prediction(panel: &PredictionPanel) -> String {
    match panel {
        PredictionPanel::AwaitingInput { message } => info_alert(message),
        PredictionPanel::Scored(view) => render_scored(view),
    }
}

fn render_scored(view: &PredictionView) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"kpis\">\n");
    out.push_str(&metric("Campaign Contacts", &view.campaign_contacts.to_string()));
    out.push_str(&metric(
        "Days Since Last Contact",
        &view.days_since_last_contact.to_string(),
    ));
    out.push_str("</div>\n<hr>\n<div class=\"columns\">\n<div class=\"column wide\">\n");
    out.push_str("<h3>Customer Profile</h3>\n<table class=\"profile\">\n<thead><tr>");
    for (column, _) in &view.profile {
        out.push_str(&format!("<th>{}</th>", text(column)));
    }
    out.push_str("</tr></thead>\n<tbody><tr>");
    for (_, value) in &view.profile {
        out.push_str(&format!("<td>{}</td>", text(value)));
    }
    out.push_str("</tr></tbody>\n</table>\n</div>\n<div class=\"column\">\n");
    out.push_str("<h3>Prediction Output</h3>\n");
    out.push_str(&metric("Subscription Probability", &view.probability_label));
    out.push_str(&format!(
        "<p class=\"tier tier-{}\">{}</p>\n",
        view.tier.label().to_ascii_lowercase(),
        text(view.tier.zone_name())
    ));
    out.push_str(&render_gauge(&view.gauge));
    out.push_str("</div>\n</div>\n");
    out
}

fn render_interpretation(interpretation: &Interpretation) -> String {
    match interpretation {
        Interpretation::Pending { message } => info_alert(message),
        Interpretation::Ready(report) => render_report(report),
    }
}

fn render_report(report: &SegmentationReport) -> String {
    let narrative = report.narrative;
    let mut out = String::from("<h2>Executive Decision &amp; Business Insight</h2>\n");
    out.push_str(&format!(
        "<div class=\"alert {}\">\n<h3>{} &middot; <strong>{}</strong></h3>\n",
        tone_class(narrative.tone),
        text(narrative.headline),
        text(narrative.zone)
    ));
    out.push_str(&bullet_block("Key Insight", narrative.key_insight));
    out.push_str(&bullet_block(
        "Business Implication",
        narrative.business_implication,
    ));
    out.push_str(&bullet_block(
        "Recommended Executive Action",
        narrative.recommended_action,
    ));
    out.push_str("</div>\n<hr>\n<h3>Decision Threshold &amp; Risk Visualization</h3>\n");
    out.push_str(&render_threshold_chart(&report.chart));
    out.push_str("<hr>\n");

    let takeaway = report.takeaway;
    out.push_str(&format!(
        "<div class=\"alert alert-info\">\n<h3>{}</h3>\n<p>{}</p>\n<ul>\n",
        text(takeaway.title),
        text(takeaway.purpose)
    ));
    for goal in takeaway.goals {
        out.push_str(&format!("<li>{}</li>\n", text(goal)));
    }
    out.push_str(&format!("</ul>\n<p>{}</p>\n</div>\n", text(takeaway.closing)));
    out
}

fn render_model_info(panel: &ModelInfoPanel) -> String {
    let description = &panel.description;
    let mut out = format!(
        "<h3>Model Overview</h3>\n<dl class=\"model-info\">\n\
         <dt>Name</dt><dd>{}</dd>\n<dt>Estimator</dt><dd>{}</dd>\n\
         <dt>Preprocessing</dt><dd>{}</dd>\n<dt>Optimized for</dt><dd>{}</dd>\n\
         <dt>Features</dt><dd>{} numeric, {} categorical</dd>\n</dl>\n",
        text(&description.name),
        text(&description.estimator),
        text(&description.preprocessing.join(" + ")),
        text(&description.optimized_for),
        description.numeric_features,
        description.categorical_features,
    );
    if !description.notes.is_empty() {
        out.push_str("<ul>\n");
        for note in &description.notes {
            out.push_str(&format!("<li>{}</li>\n", text(note)));
        }
        out.push_str("</ul>\n");
    }
    out.push_str(&format!(
        "<p><strong>Disclaimer</strong><br>{}</p>\n",
        text(panel.disclaimer)
    ));
    out
}

fn info_alert(message: &str) -> String {
    format!(
        "<div class=\"alert alert-info\"><p>{}</p></div>\n",
        text(message)
    )
}

fn metric(label: &str, value: &str) -> String {
    format!(
        "<div class=\"metric\"><span class=\"metric-label\">{}</span><span class=\"metric-value\">{}</span></div>\n",
        text(label),
        text(value)
    )
}

fn bullet_block(title: &str, items: &[&str]) -> String {
    let mut out = format!("<p><strong>{}</strong></p>\n<ul>\n", text(title));
    for item in items {
        out.push_str(&format!("<li>{}</li>\n", text(item)));
    }
    out.push_str("</ul>\n");
    out
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "alert-success",
        Tone::Warning => "alert-warning",
        Tone::Error => "alert-error",
    }
}

/// Point on the gauge arc for a value on the 0..100 axis.
fn gauge_point(value: f64, radius: f64) -> (f64, f64) {
    let fraction = (value.clamp(AXIS_MIN, AXIS_MAX) - AXIS_MIN) / (AXIS_MAX - AXIS_MIN);
    let angle = PI * (1.0 - fraction);
    (
        GAUGE_CX + radius * angle.cos(),
        GAUGE_CY - radius * angle.sin(),
    )
}

fn gauge_arc(from: f64, to: f64, radius: f64) -> String {
    let (x1, y1) = gauge_point(from, radius);
    let (x2, y2) = gauge_point(to, radius);
    format!("M {x1:.2} {y1:.2} A {radius:.2} {radius:.2} 0 0 1 {x2:.2} {y2:.2}")
}

pub fn render_gauge(gauge: &GaugeChart) -> String {
    let mut out = format!(
        "<svg class=\"gauge\" viewBox=\"0 0 320 200\" role=\"img\" aria-label=\"{}\">\n\
         <text x=\"{GAUGE_CX}\" y=\"20\" text-anchor=\"middle\" class=\"chart-title\">{}</text>\n",
        attr(gauge.title),
        text(gauge.title)
    );
    for step in &gauge.steps {
        out.push_str(&format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"40\"/>\n",
            gauge_arc(step.from, step.to, GAUGE_RADIUS),
            attr(step.color)
        ));
    }
    if gauge.value > AXIS_MIN {
        out.push_str(&format!(
            "<path class=\"gauge-bar\" d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"14\"/>\n",
            gauge_arc(AXIS_MIN, gauge.value, GAUGE_RADIUS),
            attr(gauge.bar_color)
        ));
    }
    for tick in [0.0, 20.0, 40.0, 60.0, 80.0, 100.0] {
        let (x, y) = gauge_point(tick, GAUGE_RADIUS + 30.0);
        out.push_str(&format!(
            "<text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"middle\" class=\"tick\">{tick}</text>\n"
        ));
    }
    out.push_str(&format!(
        "<text x=\"{GAUGE_CX}\" y=\"{:.2}\" text-anchor=\"middle\" class=\"gauge-value\">{:.2}{}</text>\n</svg>\n",
        GAUGE_CY + 10.0,
        gauge.value,
        text(gauge.suffix)
    ));
    out
}

fn plot_y(value: f64) -> f64 {
    let fraction = (value.clamp(AXIS_MIN, AXIS_MAX) - AXIS_MIN) / (AXIS_MAX - AXIS_MIN);
    PLOT_BOTTOM - fraction * (PLOT_BOTTOM - PLOT_TOP)
}

pub fn render_threshold_chart(chart: &ThresholdChart) -> String {
    let bar_left = PLOT_LEFT + 60.0;
    let bar_right = PLOT_RIGHT - 60.0;
    let mut out = format!(
        "<svg class=\"threshold-chart\" viewBox=\"0 0 {CHART_WIDTH} {CHART_HEIGHT}\" role=\"img\" aria-label=\"{}\">\n\
         <text x=\"{:.2}\" y=\"24\" text-anchor=\"middle\" class=\"chart-title\">{}</text>\n",
        attr(chart.title),
        CHART_WIDTH / 2.0,
        text(chart.title)
    );

    for band in &chart.bands {
        let top = plot_y(band.top());
        let bottom = plot_y(band.base);
        out.push_str(&format!(
            "<rect x=\"{bar_left:.2}\" y=\"{top:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\" fill-opacity=\"0.7\"><title>{}</title></rect>\n",
            bar_right - bar_left,
            bottom - top,
            attr(band.color),
            text(band.name)
        ));
    }

    for tick in [0.0, 20.0, 40.0, 60.0, 80.0, 100.0] {
        let y = plot_y(tick);
        out.push_str(&format!(
            "<line x1=\"{PLOT_LEFT}\" x2=\"{PLOT_RIGHT}\" y1=\"{y:.2}\" y2=\"{y:.2}\" class=\"grid\"/>\n\
             <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" class=\"tick\">{tick}</text>\n",
            PLOT_LEFT - 8.0,
            y + 4.0
        ));
    }
    out.push_str(&format!(
        "<text x=\"20\" y=\"{mid:.2}\" transform=\"rotate(-90 20 {mid:.2})\" text-anchor=\"middle\" class=\"axis-title\">{}</text>\n",
        text(chart.y_axis_title),
        mid = (PLOT_TOP + PLOT_BOTTOM) / 2.0
    ));

    let marker_y = plot_y(chart.marker.y);
    let dash = if chart.marker.dashed {
        " stroke-dasharray=\"8 6\""
    } else {
        ""
    };
    out.push_str(&format!(
        "<line class=\"marker\" x1=\"{:.2}\" x2=\"{:.2}\" y1=\"{marker_y:.2}\" y2=\"{marker_y:.2}\" stroke=\"{}\" stroke-width=\"{}\"{dash}/>\n",
        bar_left - 10.0,
        bar_right + 10.0,
        attr(chart.marker.color),
        chart.marker.width
    ));
    out.push_str(&format!(
        "<text class=\"annotation\" x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\">{}</text>\n",
        (bar_left + bar_right) / 2.0,
        plot_y(chart.annotation.y) - 4.0,
        text(&chart.annotation.text)
    ));

    let legend_y = CHART_HEIGHT - 30.0;
    let mut legend_x = PLOT_LEFT;
    for band in &chart.bands {
        out.push_str(&format!(
            "<rect x=\"{legend_x:.2}\" y=\"{:.2}\" width=\"12\" height=\"12\" fill=\"{}\"/>\n\
             <text x=\"{:.2}\" y=\"{legend_y:.2}\" class=\"legend\">{}</text>\n",
            legend_y - 10.0,
            attr(band.color),
            legend_x + 16.0,
            text(band.name)
        ));
        legend_x += 145.0;
    }
    out.push_str("</svg>\n");
    out
}
