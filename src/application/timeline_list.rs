// Timeline list renderer - textual phase-by-phase steps
use crate::application::html::escape_html;
use crate::domain::estimate::Phase;
use std::fmt::Write;

pub fn render_timeline_list(schedule: &[Phase]) -> String {
    let mut out = String::new();
    for item in schedule {
        let activities: Vec<String> = item.activities.iter().map(|a| escape_html(a)).collect();
        let _ = write!(
            out,
            "<div class=\"timeline-step\">\
             <div class=\"step-header\">\
             <span class=\"step-phase\">{}</span>\
             <span class=\"step-time\">Week {}</span>\
             </div>\
             <div class=\"step-details\">{}</div>\
             </div>",
            escape_html(&item.phase),
            escape_html(&item.week.to_string()),
            activities.join(" • ")
        );
    }
    out
}
