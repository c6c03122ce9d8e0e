//! Holiday repository: calendar listing and the all-or-nothing CSV import.

use portal_core::entities::Holiday;
use portal_core::holiday_csv::parse_holiday_csv;
use portal_core::responses::ImportSummary;

use crate::error::DatabaseError;
use crate::helpers::{format_date, get_bool, get_opt_string, parse_date, parse_enum};
use crate::service::PortalService;

const INSERT_HOLIDAY: &str = "INSERT INTO holidays (name, date, type, is_tentative, notes, color_hex)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

fn row_to_holiday(row: &libsql::Row) -> Result<Holiday, DatabaseError> {
    Ok(Holiday {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        date: parse_date(&row.get::<String>(2)?)?,
        holiday_type: parse_enum(&row.get::<String>(3)?)?,
        is_tentative: get_bool(row, 4)?,
        notes: get_opt_string(row, 5)?,
        colour_hex: row.get::<String>(6)?,
    })
}

impl PortalService {
    /// Holidays in calendar order, optionally restricted to one year.
    pub async fn list_holidays(&self, year: Option<i32>) -> Result<Vec<Holiday>, DatabaseError> {
        let mut sql = String::from(
            "SELECT id, name, date, type, is_tentative, notes, color_hex FROM holidays",
        );
        let mut params: Vec<libsql::Value> = Vec::new();
        if let Some(year) = year {
            sql.push_str(" WHERE CAST(substr(date, 1, 4) AS INTEGER) = ?1");
            params.push(i64::from(year).into());
        }
        sql.push_str(" ORDER BY date ASC, id ASC");

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut holidays = Vec::new();
        while let Some(row) = rows.next().await? {
            holidays.push(row_to_holiday(&row)?);
        }
        Ok(holidays)
    }

    /// Insert one holiday; the `id` of `holiday` is ignored.
    pub async fn create_holiday(&self, holiday: &Holiday) -> Result<i64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("{INSERT_HOLIDAY} RETURNING id"),
                libsql::params![
                    holiday.name.as_str(),
                    format_date(holiday.date),
                    holiday.holiday_type.as_str(),
                    i64::from(holiday.is_tentative),
                    holiday.notes.as_deref(),
                    holiday.colour_hex.as_str()
                ],
            )
            .await?;
        Ok(rows.next().await?.ok_or(DatabaseError::NoResult)?.get::<i64>(0)?)
    }

    /// Import a `Name,Date,Type,Notes` CSV in a single transaction.
    ///
    /// Malformed lines (fewer than three columns) are skipped. If any
    /// accepted row is rejected by the store, nothing is persisted and the
    /// store's error is returned as-is.
    pub async fn import_holidays_csv(&self, text: &str) -> Result<ImportSummary, DatabaseError> {
        let rows = parse_holiday_csv(text);
        tracing::debug!(rows = rows.len(), "importing holiday CSV");

        let tx = self.db().conn().transaction().await?;
        for row in &rows {
            let result = tx
                .execute(
                    INSERT_HOLIDAY,
                    libsql::params![
                        row.name.as_str(),
                        row.date.as_str(),
                        row.holiday_type.as_str(),
                        0_i64,
                        row.notes.as_str(),
                        row.colour_hex
                    ],
                )
                .await;
            if let Err(e) = result {
                tracing::warn!(line = row.line, name = %row.name, error = %e, "holiday import rejected, rolling back");
                if let Err(rollback) = tx.rollback().await {
                    tracing::warn!(error = %rollback, "holiday import rollback failed");
                }
                return Err(e.into());
            }
        }
        tx.commit().await?;

        let inserted = u32::try_from(rows.len()).map_err(|e| DatabaseError::Other(e.into()))?;
        tracing::info!(inserted, "holiday CSV imported");
        Ok(ImportSummary { inserted })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use portal_core::enums::HolidayType;

    use super::*;
    use crate::test_support::test_service;

    const HEADER: &str = "Name,Date,Type,Notes\n";

    #[tokio::test]
    async fn imports_rows_with_colours_and_notes() {
        let svc = test_service().await;
        let csv = format!(
            "{HEADER}Holi,2024-03-25,Gazetted,Festival of colours\nGuru Ravidas Jayanti,2024-02-24,restricted,\n"
        );
        let summary = svc.import_holidays_csv(&csv).await.unwrap();
        assert_eq!(summary.inserted, 2);

        let holidays = svc.list_holidays(None).await.unwrap();
        assert_eq!(holidays[0].name, "Guru Ravidas Jayanti");
        assert_eq!(holidays[0].holiday_type, HolidayType::Restricted);
        assert_eq!(holidays[0].colour_hex, "#eab308");
        assert_eq!(holidays[0].notes, None);
        assert_eq!(holidays[1].colour_hex, "#ef4444");
        assert_eq!(holidays[1].notes.as_deref(), Some("Festival of colours"));
        assert!(holidays.iter().all(|h| !h.is_tentative));
    }

    #[tokio::test]
    async fn unknown_type_rolls_back_batch() {
        let svc = test_service().await;
        let csv = format!("{HEADER}Holi,2024-03-25,gazetted,\nFounders Day,2024-09-26,festival,\n");
        let err = svc.import_holidays_csv(&csv).await.unwrap_err();
        assert!(matches!(err, DatabaseError::LibSql(_)));
        assert_eq!(svc.db().count_rows("holidays").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn store_stays_usable_after_failed_import() {
        let svc = test_service().await;
        let bad = format!("{HEADER}Broken,2024/01/26,gazetted,\n");
        assert!(svc.import_holidays_csv(&bad).await.is_err());

        let good = format!("{HEADER}Republic Day,2024-01-26,gazetted,\n");
        assert_eq!(svc.import_holidays_csv(&good).await.unwrap().inserted, 1);
    }

    #[tokio::test]
    async fn list_filters_by_year() {
        let svc = test_service().await;
        for (name, date) in [("A", (2023, 12, 25)), ("B", (2024, 1, 26))] {
            svc.create_holiday(&Holiday {
                id: 0,
                name: name.into(),
                date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
                holiday_type: HolidayType::Gazetted,
                is_tentative: false,
                notes: None,
                colour_hex: "#ef4444".into(),
            })
            .await
            .unwrap();
        }
        let only_2024 = svc.list_holidays(Some(2024)).await.unwrap();
        assert_eq!(only_2024.len(), 1);
        assert_eq!(only_2024[0].name, "B");
    }
}
