//! Weekday × hour patient-volume heatmap.

use std::collections::BTreeMap;

use crate::api::HeatmapMatrix;
use crate::models::{Meridiem, VisitRecord};

/// Grouping key for one heatmap cell.
///
/// Field order is the sort order: weekday first, then AM before PM, then hour
/// within the meridiem starting at 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct SlotKey {
    weekday: u8,
    meridiem: Meridiem,
    /// 12 maps to 0 so it sorts ahead of 01 ... 11.
    hour_rank: u8,
}

#[derive(Debug)]
struct SlotGroup<'a> {
    weekday_name: &'a str,
    hour_label: &'a str,
    count: u64,
}

impl SlotKey {
    fn of(record: &VisitRecord) -> Self {
        let calendar = &record.calendar;
        Self {
            weekday: calendar.weekday,
            meridiem: calendar.meridiem,
            hour_rank: calendar.hour_of_day % 12,
        }
    }

    fn column_key(&self) -> (Meridiem, u8) {
        (self.meridiem, self.hour_rank)
    }
}

/// Sum record counts per (weekday, hour) and pivot into a matrix.
///
/// Rows are the weekdays present, Monday first. Columns are the hours present,
/// `12 AM` through `11 PM`. Absent combinations are 0, so the matrix total
/// always equals the summed record count of the input.
pub fn aggregate_heatmap<'a, I>(records: I) -> HeatmapMatrix
where
    I: IntoIterator<Item = &'a VisitRecord>,
{
    let mut groups: BTreeMap<SlotKey, SlotGroup<'a>> = BTreeMap::new();
    for record in records {
        let group = groups.entry(SlotKey::of(record)).or_insert_with(|| SlotGroup {
            weekday_name: &record.calendar.weekday_name,
            hour_label: &record.calendar.hour_label,
            count: 0,
        });
        group.count += record.record_count;
    }

    // AM groups ahead of PM groups; the key order already sorts hours within each.
    let (am, pm): (Vec<_>, Vec<_>) = groups
        .iter()
        .partition(|(key, _)| key.meridiem == Meridiem::AM);

    let mut row_index: BTreeMap<u8, &str> = BTreeMap::new();
    let mut column_index: BTreeMap<(Meridiem, u8), &str> = BTreeMap::new();
    for (key, group) in am.iter().chain(pm.iter()) {
        row_index.entry(key.weekday).or_insert(group.weekday_name);
        column_index.entry(key.column_key()).or_insert(group.hour_label);
    }

    let row_position: BTreeMap<u8, usize> = row_index
        .keys()
        .enumerate()
        .map(|(i, weekday)| (*weekday, i))
        .collect();
    let column_position: BTreeMap<(Meridiem, u8), usize> = column_index
        .keys()
        .enumerate()
        .map(|(i, key)| (*key, i))
        .collect();

    let mut values = vec![vec![0u64; column_index.len()]; row_index.len()];
    for (key, group) in &groups {
        let r = row_position[&key.weekday];
        let c = column_position[&key.column_key()];
        values[r][c] += group.count;
    }

    HeatmapMatrix {
        rows: row_index.into_values().map(str::to_string).collect(),
        columns: column_index.into_values().map(str::to_string).collect(),
        values,
    }
}
