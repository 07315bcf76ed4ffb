//! Activity log storage and export.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use super::entry::ActivityEntry;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A chronological, append-only list of progression events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the log.
    pub fn append(&mut self, entry: ActivityEntry) {
        self.entries.push(entry);
    }

    /// Get all entries, oldest first.
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    /// The last `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> &[ActivityEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the log as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Progression Activity\n\n");
        for entry in &self.entries {
            let when = entry.timestamp().format(TIME_FORMAT);
            let _ = writeln!(out, "- `{when}` {}", entry.markdown_line());
        }
        out
    }

    /// Export the log as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Progression Activity\n====================\n\n");
        write_text_lines(&mut out, &self.entries);
        out
    }

    /// The last `n` entries as plain-text lines, without the header.
    pub fn export_text_recent(&self, n: usize) -> String {
        let mut out = String::new();
        write_text_lines(&mut out, self.recent(n));
        out
    }
}

fn write_text_lines(out: &mut String, entries: &[ActivityEntry]) {
    for entry in entries {
        let when = entry.timestamp().format(TIME_FORMAT);
        let _ = writeln!(out, "[{when}] {}", entry.text_line());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(day: u32, hour: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, day, hour, 0, 0).unwrap()
    }

    fn sample() -> ActivityLog {
        let mut log = ActivityLog::new();
        log.append(ActivityEntry::ChallengeCompleted {
            id: "ch_park_line".to_string(),
            title: "Park line".to_string(),
            xp: 300,
            daily: true,
            timestamp: at(1, 9),
        });
        log.append(ActivityEntry::StreakStarted { timestamp: at(1, 9) });
        log.append(ActivityEntry::ChallengeCompleted {
            id: "ch_switch_trick".to_string(),
            title: "Switch trick".to_string(),
            xp: 250,
            daily: false,
            timestamp: at(2, 18),
        });
        log.append(ActivityEntry::LevelUp {
            level: 2,
            timestamp: at(2, 18),
        });
        log.append(ActivityEntry::StreakExtended {
            days: 2,
            timestamp: at(2, 18),
        });
        log.append(ActivityEntry::DailyRerolled {
            ids: vec!["ch_manual_line".to_string(), "ch_5050_ledge".to_string()],
            timestamp: at(3, 7),
        });
        log
    }

    #[test]
    fn empty_log() {
        let log = ActivityLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.recent(5).is_empty());
    }

    #[test]
    fn recent_returns_tail() {
        let log = sample();
        assert_eq!(log.len(), 6);
        let recent = log.recent(2);
        assert_eq!(recent.len(), 2);
        assert!(matches!(recent[1], ActivityEntry::DailyRerolled { .. }));
        assert_eq!(log.recent(100).len(), 6);
    }

    #[test]
    fn export_markdown_snapshot() {
        insta::assert_snapshot!(sample().export_markdown(), @r"
# Progression Activity

- `2024-06-01 09:00` **Completed** Park line (`ch_park_line`): +300 XP *(daily)*
- `2024-06-01 09:00` Streak started
- `2024-06-02 18:00` **Completed** Switch trick (`ch_switch_trick`): +250 XP
- `2024-06-02 18:00` **Level up!** Reached level 2
- `2024-06-02 18:00` Streak extended to **2** days
- `2024-06-03 07:00` *Daily challenges rerolled*: `ch_manual_line`, `ch_5050_ledge`
");
    }

    #[test]
    fn export_text_lines() {
        let txt = sample().export_text();
        assert!(txt.starts_with("Progression Activity\n"));
        assert!(txt.contains("[2024-06-01 09:00] Completed Park line: +300 XP (daily)"));
        assert!(txt.contains("[2024-06-02 18:00] Level up! Reached level 2"));
        assert!(txt.contains("Daily challenges rerolled: ch_manual_line, ch_5050_ledge"));
    }

    #[test]
    fn export_text_streak_reset() {
        let mut log = ActivityLog::new();
        log.append(ActivityEntry::StreakReset {
            previous: 4,
            timestamp: at(9, 12),
        });
        assert!(log.export_text().contains("Streak reset (was 4 days)"));
    }

    #[test]
    fn export_text_recent_tail_only() {
        let txt = sample().export_text_recent(2);
        assert_eq!(
            txt,
            "[2024-06-02 18:00] Streak extended to 2 days\n\
             [2024-06-03 07:00] Daily challenges rerolled: ch_manual_line, ch_5050_ledge\n"
        );
        assert!(ActivityLog::new().export_text_recent(5).is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let log = sample();
        let json = serde_json::to_string(&log).unwrap();
        let back: ActivityLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
