//! Plain-text rendering of a [`CollectionSchedule`].

use crate::collection_client::CollectionSchedule;

/// Message used for schedules without any collection dates.
pub static NO_ITEMS_MESSAGE: &str = "No collection items found.";

static HEADER: &str = "Upcoming waste collections:";
static DATE_FORMAT: &str = "%Y-%m-%d";

/// Render the schedule as a multi-line summary, one line per collection date.
pub fn render(schedule: &CollectionSchedule) -> String {
    if schedule.entries.is_empty() {
        return String::from(NO_ITEMS_MESSAGE);
    }
    let mut lines = vec![String::from(HEADER)];
    lines.extend(
        schedule
            .entries
            .iter()
            .map(|entry| format!("{} - {}", entry.date.format(DATE_FORMAT), entry.label)),
    );
    lines.join("\n")
}
