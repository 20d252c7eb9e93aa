use crate::domain::InspectionReport;

pub trait Renderer: Send + Sync {
    fn render(&self, report: &InspectionReport) -> String;
}
