//! Notification feed command.

use crate::{storage::LeagueDatabase, Result, SyncError};

/// Show the notification feed, or mark one entry as read.
pub fn handle_notifications(unread: bool, mark_read: Option<i64>, as_json: bool) -> Result<()> {
    let mut db = LeagueDatabase::new()?;

    if let Some(id) = mark_read {
        if !db.mark_notification_read(id)? {
            return Err(SyncError::NotificationNotFound { id });
        }
        println!("✓ Notification {} marked as read", id);
        return Ok(());
    }

    let notifications = db.notifications(unread)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&notifications)?);
        return Ok(());
    }

    if notifications.is_empty() {
        if unread {
            println!("No unread notifications");
        } else {
            println!("No notifications yet");
        }
        return Ok(());
    }
    for n in &notifications {
        let marker = if n.is_read { " " } else { "*" };
        println!("{} [{:>4}] {:<8} {} - {}", marker, n.id, n.kind, n.title, n.message);
    }
    Ok(())
}
