//! Layout for the derived columns.

use console_business::users::policy::{CellRule, ColumnSpec};
use egui_extras::Column;

pub const HEADER_HEIGHT: f32 = 24.0;
pub const ROW_HEIGHT: f32 = 36.0;
const ACTIONS_WIDTH: f32 = 96.0;

/// The identity column flexes; actions get a fixed slot; everything else
/// sizes to content.
pub fn layout(columns: &[ColumnSpec]) -> Vec<Column> {
    columns
        .iter()
        .map(|spec| match spec.rule {
            CellRule::Identity => Column::remainder().at_least(180.0),
            CellRule::Actions => Column::exact(ACTIONS_WIDTH),
            _ => Column::auto().at_least(80.0),
        })
        .collect()
}
