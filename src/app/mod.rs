//! Viewer application
//!
//! Two-column egui layout: a fixed-width control sidebar on the left and the
//! stretch-to-fill scatter pane in the center.

use eframe::egui;
use tracing::error;

use crate::cloud::PointCloud;
use crate::theme::{colors, fill_color32};
use crate::viewer::Viewer;

/// Fixed width of the control sidebar.
const SIDEBAR_WIDTH: f32 = 300.0;

/// egui application hosting the viewer.
pub struct ViewerApp {
    viewer: Viewer,
}

impl ViewerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, viewer: Viewer) -> Self {
        cc.egui_ctx.set_visuals(crate::theme::minimal_visuals());
        Self { viewer }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new("Controls")
                .color(colors::TEXT_MUTED)
                .size(12.0),
        );
        ui.add_space(8.0);

        if ui
            .button(egui::RichText::new("Update colors").size(14.0))
            .clicked()
        {
            if let Err(e) = self.viewer.on_button_activated() {
                error!(error = %e, "Color update failed");
            }
        }

        ui.add_space(12.0);
        ui.label(
            egui::RichText::new(format!(
                "{} reference / {} query points",
                self.viewer.ref_cloud().len(),
                self.viewer.qry_cloud().len()
            ))
            .color(colors::TEXT_MUTED)
            .monospace()
            .size(11.0),
        );
        ui.label(
            egui::RichText::new(format!("scene revision {}", self.viewer.pane().revision()))
                .color(colors::TEXT_MUTED)
                .monospace()
                .size(11.0),
        );
    }

    fn render_scatter(&self, ui: &mut egui::Ui) {
        use egui_plot::Plot;

        ui.label(
            egui::RichText::new("Point Clouds")
                .color(colors::TEXT_MUTED)
                .size(10.0),
        );

        Plot::new("cloud_scatter")
            .data_aspect(1.0)
            .show_grid(false)
            .show_background(false)
            .legend(egui_plot::Legend::default())
            .label_formatter(|_name, value| format!("x={:.1} y={:.1}", value.x, value.y))
            .show(ui, |plot_ui| {
                plot_cloud(plot_ui, self.viewer.ref_cloud(), "reference");
                plot_cloud(plot_ui, self.viewer.qry_cloud(), "query");
            });
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .exact_width(SIDEBAR_WIDTH)
            .resizable(false)
            .frame(
                egui::Frame::new()
                    .fill(colors::BG_SIDEBAR)
                    .inner_margin(8.0),
            )
            .show(ctx, |ui| self.render_controls(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY))
            .show(ctx, |ui| self.render_scatter(ui));
    }
}

/// Draw one cloud as filled points, colored from its fill column.
fn plot_cloud(plot_ui: &mut egui_plot::PlotUi, cloud: &PointCloud, name: &str) {
    use egui_plot::{PlotPoints, Points};

    let points = cloud_plot_points(cloud);
    let color = cloud
        .rows()
        .first()
        .map(|r| fill_color32(r.fcolor))
        .unwrap_or(colors::TEXT_PRIMARY);

    plot_ui.points(
        Points::new(PlotPoints::from(points))
            .color(color)
            .radius(2.0)
            .filled(true)
            .name(name),
    );
}

/// Project a cloud onto the plot plane (x/y; the z-plane is constant per cloud).
fn cloud_plot_points(cloud: &PointCloud) -> Vec<[f64; 2]> {
    cloud
        .rows()
        .iter()
        .map(|r| [r.position[0], r.position[1]])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloud_plot_points_projects_xy() {
        let cloud = PointCloud::sampled(6, 0.0, 10.0, 30.0, [180.0, 18.0, 90.0]);

        let points = cloud_plot_points(&cloud);
        assert_eq!(points.len(), 6);
        for (point, row) in points.iter().zip(cloud.rows()) {
            assert_eq!(point[0], row.position[0]);
            assert_eq!(point[1], row.position[1]);
        }
    }
}
