//! Organizational event repository.

use portal_core::entities::OrgEvent;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, parse_datetime, parse_enum};
use crate::service::PortalService;

fn row_to_event(row: &libsql::Row) -> Result<OrgEvent, DatabaseError> {
    Ok(OrgEvent {
        id: row.get::<i64>(0)?,
        title: row.get::<String>(1)?,
        date: parse_datetime(&row.get::<String>(2)?)?,
        location: get_opt_string(row, 3)?,
        description: get_opt_string(row, 4)?,
        kind: parse_enum(&row.get::<String>(5)?)?,
    })
}

impl PortalService {
    /// Events, soonest first.
    pub async fn list_events(&self) -> Result<Vec<OrgEvent>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, title, date, location, description, type FROM org_events ORDER BY date ASC",
                (),
            )
            .await?;
        let mut events = Vec::new();
        while let Some(row) = rows.next().await? {
            events.push(row_to_event(&row)?);
        }
        Ok(events)
    }

    /// Insert an event; the `id` of `event` is ignored.
    pub async fn create_event(&self, event: &OrgEvent) -> Result<OrgEvent, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "INSERT INTO org_events (title, date, location, description, type)
                 VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id",
                libsql::params![
                    event.title.as_str(),
                    format_datetime(&event.date),
                    event.location.as_deref(),
                    event.description.as_deref(),
                    event.kind.as_str()
                ],
            )
            .await?;
        let id = rows.next().await?.ok_or(DatabaseError::NoResult)?.get::<i64>(0)?;
        Ok(OrgEvent {
            id,
            ..event.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use portal_core::enums::EventKind;

    use super::*;
    use crate::test_support::test_service;

    fn event(title: &str, day: u32, kind: EventKind) -> OrgEvent {
        OrgEvent {
            id: 0,
            title: title.into(),
            date: Utc.with_ymd_and_hms(2024, 10, day, 9, 0, 0).unwrap(),
            location: Some("Auditorium".into()),
            description: None,
            kind,
        }
    }

    #[tokio::test]
    async fn events_list_soonest_first() {
        let svc = test_service().await;
        svc.create_event(&event("Later", 20, EventKind::Meeting)).await.unwrap();
        let first = svc
            .create_event(&event("Sooner", 15, EventKind::Conference))
            .await
            .unwrap();

        let events = svc.list_events().await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], first);
        assert_eq!(events[1].kind, EventKind::Meeting);
        assert_eq!(events[1].description, None);
    }
}
