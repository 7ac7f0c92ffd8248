use chrono::{DateTime, Local};

use crate::dashboard::Dashboard;

/// Minimal column-aligned table: collect rows, pad every cell to its
/// column's widest entry, two spaces between columns.
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: &[&str]) -> Self {
        Self {
            rows: vec![header.iter().map(|h| h.to_string()).collect()],
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn render(&self) -> String {
        let columns = self.rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut widths = vec![0usize; columns];
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut out = String::new();
        for row in &self.rows {
            let last = row.len().saturating_sub(1);
            for (i, cell) in row.iter().enumerate() {
                if i == last {
                    out.push_str(cell);
                } else {
                    out.push_str(&format!("{:width$}  ", cell, width = widths[i]));
                }
            }
            out.push('\n');
        }
        out
    }
}

pub fn dashboard(dash: &Dashboard) -> String {
    let mut out = format!(
        "Host: {}  ID: {}  Version: {}  Uptime: {}\n\n",
        dash.host.name,
        dash.host.device_id,
        dash.host.version,
        uptime(dash.host.uptime_seconds),
    );

    let mut folders = Table::new(&["Folder", "Status", "Sync", "Global", "Local", "Need"]);
    for row in &dash.folders {
        folders.row(vec![
            row.label.clone(),
            row.status.to_string(),
            percent(row.completion),
            bytes(row.global_bytes),
            bytes(row.local_bytes),
            bytes(row.need_bytes),
        ]);
    }
    out.push_str(&folders.render());
    out.push('\n');

    let mut devices = Table::new(&["Device", "Status", "Sync", "Download", "Upload", "Need"]);
    for row in &dash.devices {
        devices.row(vec![
            row.name.clone(),
            row.status.to_string(),
            percent(row.completion),
            bytes(row.download_bytes),
            bytes(row.upload_bytes),
            bytes(row.need_bytes),
        ]);
    }
    out.push_str(&devices.render());
    out
}

pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

const BYTE_UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

pub fn bytes(value: u64) -> String {
    if value < 1024 {
        return format!("{value} B");
    }
    let mut size = value as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.1} {}", BYTE_UNITS[unit])
}

pub fn uptime(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Error-log timestamps come back as RFC 3339; show them in local time,
/// or verbatim when they do not parse.
pub fn timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_pads_columns_to_widest_cell() {
        let mut table = Table::new(&["Folder", "Status"]);
        table.row(vec!["a".to_string(), "Paused".to_string()]);
        table.row(vec!["long-label".to_string(), "Errors".to_string()]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Folder      Status");
        assert_eq!(lines[1], "a           Paused");
        assert_eq!(lines[2], "long-label  Errors");
    }

    #[test]
    fn bytes_pick_a_sensible_unit() {
        assert_eq!(bytes(0), "0 B");
        assert_eq!(bytes(512), "512 B");
        assert_eq!(bytes(2048), "2.0 KiB");
        assert_eq!(bytes(5 * 1024 * 1024), "5.0 MiB");
    }

    #[test]
    fn uptime_is_broken_into_days_hours_minutes() {
        assert_eq!(uptime(59), "0m");
        assert_eq!(uptime(3 * 3600 + 120), "3h 2m");
        assert_eq!(uptime(2 * 86_400 + 3600 + 60), "2d 1h 1m");
    }

    #[test]
    fn unparseable_timestamps_pass_through() {
        assert_eq!(timestamp("not-a-time"), "not-a-time");
    }
}
