//! Navigation menu repository.

use portal_core::entities::MenuItem;

use crate::error::DatabaseError;
use crate::helpers::parse_enum;
use crate::service::PortalService;

impl PortalService {
    pub async fn list_menus(&self) -> Result<Vec<MenuItem>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, label, route, type, order_index FROM menus ORDER BY order_index, id",
                (),
            )
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(MenuItem {
                id: row.get::<i64>(0)?,
                label: row.get::<String>(1)?,
                route: row.get::<String>(2)?,
                kind: parse_enum(&row.get::<String>(3)?)?,
                order: row.get::<i64>(4)?,
            });
        }
        Ok(items)
    }

    pub(crate) async fn create_menu_item(&self, item: &MenuItem) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO menus (label, route, type, order_index) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    item.label.as_str(),
                    item.route.as_str(),
                    item.kind.as_str(),
                    item.order
                ],
            )
            .await?;
        Ok(())
    }
}
