use console_business::users::policy::ColumnSpec;
use egui_extras::TableRow;

pub fn render_table_header(header: &mut TableRow<'_, '_>, columns: &[ColumnSpec]) {
    for spec in columns {
        header.col(|ui| {
            // The actions column carries no title.
            if !spec.title.is_empty() {
                ui.strong(&spec.title);
            }
        });
    }
}
